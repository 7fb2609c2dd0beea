//! Roulette Wheel App
//!
//! Root component: provides the store and settings, lays out the widget.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ItemForm, ItemList, ResultPanel, SpinButton, WheelView};
use crate::config::load_config;
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);
    provide_context(AppContext::new(load_config()));

    Effect::new(move |_| {
        let count = store.wheel().with(|w| w.items.len());
        web_sys::console::log_1(&format!("[APP] Wheel has {} items", count).into());
    });

    view! {
        <div class="container">
            <h1 class="title">"Roulette Wheel"</h1>

            <div class="controls">
                <ItemForm />
                <SpinButton />
            </div>

            <WheelView />

            <ResultPanel />

            <ItemList />
        </div>
    }
}

//! Spin Button Component

use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Starts a spin; disabled with fewer than two items or mid-spin
#[component]
pub fn SpinButton() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let spinning = move || store.wheel().with(|w| w.spinning);
    let disabled = move || !store.wheel().with(|w| w.can_spin());

    view! {
        <button
            type="button"
            class="primary-btn spin-btn"
            disabled=disabled
            on:click=move |_| actions::spin(store, ctx)
        >
            {move || if spinning() { "Spinning..." } else { "Spin the Wheel" }}
        </button>
    }
}

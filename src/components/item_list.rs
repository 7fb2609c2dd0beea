//! Item List Component
//!
//! Lists the wheel's entries in sector order with a delete button each.

use leptos::prelude::*;

use crate::actions;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();

    // Keyed by position and content: positions shift on delete
    let entries = move || {
        store.wheel().with(|w| w.items.iter().cloned().enumerate().collect::<Vec<_>>())
    };

    view! {
        <div class="items-list">
            <h3>"Added Items:"</h3>
            <For
                each=entries
                key=|(index, item)| (*index, item.name.clone(), item.link.clone())
                children=move |(index, item)| {
                    let href = item.link.clone();
                    view! {
                        <div class="item-row">
                            <span>
                                {item.name} " - "
                                <a href=href target="_blank" rel="noopener noreferrer">{item.link}</a>
                            </span>
                            <button
                                class="delete-btn"
                                on:click=move |_| actions::remove_item(store, index)
                            >
                                "Delete"
                            </button>
                        </div>
                    }
                }
            />
            <Show when=move || store.wheel().with(|w| w.items.len() < 2)>
                <p class="item-hint">"Add at least two items to spin the wheel."</p>
            </Show>
        </div>
    }
}

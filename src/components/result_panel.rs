//! Result Panel Component
//!
//! Shows the winner of the last finished spin with a link to visit it.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ResultPanel() -> impl IntoView {
    let store = use_app_store();
    let result = move || store.wheel().with(|w| w.result.clone());

    view! {
        {move || result().map(|item| {
            let href = item.link.clone();
            view! {
                <div class="result-panel">
                    <p>"Result: " <strong>{item.name}</strong></p>
                    <a
                        class="result-link"
                        href=href
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "Visit " {item.link}
                    </a>
                </div>
            }
        })}
    }
}

//! Item Form Component
//!
//! Name and link inputs for adding entries to the wheel.

use leptos::prelude::*;

use crate::actions;
use crate::store::{use_app_store, AppStateStoreFields};

/// Form for appending a new item
#[component]
pub fn ItemForm() -> impl IntoView {
    let store = use_app_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        actions::submit_draft(store);
    };

    view! {
        <form class="item-form" on:submit=on_submit>
            <div class="input-group">
                <input
                    type="text"
                    placeholder="Item name"
                    prop:value=move || store.draft_name().get()
                    on:input=move |ev| store.draft_name().set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Link (URL)"
                    prop:value=move || store.draft_link().get()
                    on:input=move |ev| store.draft_link().set(event_target_value(&ev))
                />
                <button type="submit" class="primary-btn">"Add"</button>
            </div>
        </form>
    }
}

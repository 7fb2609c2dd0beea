//! Wheel Actions
//!
//! State-mutating operations bound to the app store. Each one leaves the
//! store fully renderable; the only deferred work is the spin resolution.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{AppStateStoreFields, AppStore};

/// Add the drafted name/link as a new item and clear the drafts.
pub fn submit_draft(store: AppStore) -> bool {
    let name = store.draft_name().get_untracked();
    let link = store.draft_link().get_untracked();

    let added = store.wheel().write().add_item(&name, &link);
    if added {
        web_sys::console::log_1(&format!("[EDITOR] Added item: {}", name.trim()).into());
        store.draft_name().set(String::new());
        store.draft_link().set(String::new());
    } else {
        web_sys::console::log_1(&"[EDITOR] Rejected item with blank name or link".into());
    }
    added
}

/// Remove the item rendered at `index`.
pub fn remove_item(store: AppStore, index: usize) {
    match store.wheel().write().remove_item(index) {
        Some(item) => {
            web_sys::console::log_1(&format!("[EDITOR] Removed item {}: {}", index, item.name).into());
        }
        None => {
            web_sys::console::error_1(&format!("[EDITOR] Stale item index {}", index).into());
        }
    }
}

/// Start a spin and schedule its resolution after the spin duration.
///
/// Ignored with fewer than two items or while a spin is in flight.
pub fn spin(store: AppStore, ctx: AppContext) {
    if !store.wheel().with_untracked(|w| w.can_spin()) {
        web_sys::console::log_1(&"[SPIN] Ignored: need two items and no spin in flight".into());
        return;
    }

    let config = ctx.config();
    let Some(pending) = store.wheel().write().begin_spin(js_sys::Math::random(), &config) else {
        return;
    };
    web_sys::console::log_1(&format!(
        "[SPIN] Started: +{} degrees, resting at {} over {} items",
        pending.spin_angle,
        pending.target_rotation,
        pending.item_count()
    ).into());

    // Single-shot, never cancelled: the spinning flag blocks overlap
    Timeout::new(config.spin_duration_ms, move || {
        let index = pending.winning_index();
        let winner = store.wheel().write().resolve_spin(pending);
        match (index, winner) {
            (Some(index), Some(item)) => {
                web_sys::console::log_1(&format!("[SPIN] Resolved: index {} -> {}", index, item.name).into());
            }
            _ => {
                web_sys::console::error_1(&"[SPIN] Resolved without a winner".into());
            }
        }
    })
    .forget();
}

//! Global Application State Store
//!
//! Uses Leptos reactive_stores so the form drafts and the wheel update
//! independently.

use leptos::prelude::*;
use reactive_stores::Store;
use wheel_core::Wheel;

/// Widget state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items, rotation, spin flag and last result
    pub wheel: Wheel,
    /// Name input not yet submitted
    pub draft_name: String,
    /// Link input not yet submitted
    pub draft_link: String,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

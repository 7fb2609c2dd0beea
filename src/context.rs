//! Application Context
//!
//! Read-only settings provided via Leptos Context API.

use leptos::prelude::*;
use wheel_core::WheelConfig;

/// App-wide settings provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<WheelConfig>,
}

impl AppContext {
    pub fn new(config: WheelConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    /// Snapshot of the active configuration
    pub fn config(&self) -> WheelConfig {
        self.config.get_value()
    }

    /// Shared by the CSS transition and the resolution timer
    pub fn spin_duration_ms(&self) -> u32 {
        self.config.with_value(|c| c.spin_duration_ms)
    }

    pub fn palette(&self) -> Vec<String> {
        self.config.with_value(|c| c.palette.clone())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

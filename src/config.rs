//! Page Configuration
//!
//! Reads an optional JSON block from the host page:
//! `<script id="wheel-config" type="application/json">{ ... }</script>`

use wheel_core::WheelConfig;

const CONFIG_ELEMENT_ID: &str = "wheel-config";

/// Load the wheel config, falling back to defaults when absent or invalid.
pub fn load_config() -> WheelConfig {
    match read_config_block() {
        None => {
            web_sys::console::log_1(&"[CONFIG] No config block, using defaults".into());
            WheelConfig::default()
        }
        Some(json) => match WheelConfig::from_json(&json) {
            Ok(config) => {
                web_sys::console::log_1(&format!(
                    "[CONFIG] Loaded: spin {}ms, {}+{} degrees, {} colors",
                    config.spin_duration_ms,
                    config.min_spin_degrees,
                    config.spin_range_degrees,
                    config.palette.len()
                ).into());
                config
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[CONFIG] Invalid config, using defaults: {}", e).into());
                WheelConfig::default()
            }
        },
    }
}

fn read_config_block() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    let text = element.text_content()?;
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

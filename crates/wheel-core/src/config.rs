//! Wheel Configuration
//!
//! Tunables shared by the spin engine and the renderer. The spin duration is
//! used for both the CSS transition and the resolution timer, so the wheel
//! stops exactly when the winner is announced.

use serde::{Deserialize, Serialize};

use crate::geometry::PALETTE;

pub const DEFAULT_SPIN_DURATION_MS: u32 = 5000;
pub const DEFAULT_MIN_SPIN_DEGREES: u32 = 1800;
pub const DEFAULT_SPIN_RANGE_DEGREES: u32 = 1800;
/// Every spin turns the wheel at least once
pub const MIN_SPIN_FLOOR_DEGREES: u32 = 360;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WheelConfig {
    /// Transition length and resolution delay, in milliseconds
    pub spin_duration_ms: u32,
    /// Smallest rotation added by one spin
    pub min_spin_degrees: u32,
    /// Number of whole-degree values a spin can add on top of the minimum
    pub spin_range_degrees: u32,
    /// Sector colors, cycled by item index
    pub palette: Vec<String>,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            spin_duration_ms: DEFAULT_SPIN_DURATION_MS,
            min_spin_degrees: DEFAULT_MIN_SPIN_DEGREES,
            spin_range_degrees: DEFAULT_SPIN_RANGE_DEGREES,
            palette: PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl WheelConfig {
    /// Parse a JSON config block. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.spin_duration_ms == 0 {
            return Err("spinDurationMs must be greater than zero".to_string());
        }
        if self.spin_range_degrees == 0 {
            return Err("spinRangeDegrees must be greater than zero".to_string());
        }
        if self.min_spin_degrees < MIN_SPIN_FLOOR_DEGREES {
            return Err(format!("minSpinDegrees must be at least {}", MIN_SPIN_FLOOR_DEGREES));
        }
        if self.min_spin_degrees.checked_add(self.spin_range_degrees - 1).is_none() {
            return Err("minSpinDegrees + spinRangeDegrees is too large".to_string());
        }
        if self.palette.is_empty() {
            return Err("palette must contain at least one color".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WheelConfig::default();
        assert_eq!(config.spin_duration_ms, 5000);
        assert_eq!(config.min_spin_degrees, 1800);
        assert_eq!(config.spin_range_degrees, 1800);
        assert_eq!(config.palette.len(), PALETTE.len());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = WheelConfig::from_json(r#"{ "spinDurationMs": 3000 }"#).unwrap();
        assert_eq!(config.spin_duration_ms, 3000);
        assert_eq!(config.min_spin_degrees, DEFAULT_MIN_SPIN_DEGREES);
        assert_eq!(config.palette[0], "#FF6384");
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(WheelConfig::from_json("{}").unwrap(), WheelConfig::default());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(WheelConfig::from_json(r#"{ "spinDurationMs": 0 }"#).is_err());
        assert!(WheelConfig::from_json(r#"{ "spinRangeDegrees": 0 }"#).is_err());
        assert!(WheelConfig::from_json(r#"{ "palette": [] }"#).is_err());
        assert!(WheelConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_spin_range_must_be_whole_turns_and_fit() {
        assert!(WheelConfig::from_json(r#"{ "minSpinDegrees": 0, "spinRangeDegrees": 1 }"#).is_err());
        assert!(WheelConfig::from_json(r#"{ "minSpinDegrees": 359 }"#).is_err());
        assert!(WheelConfig::from_json(r#"{ "minSpinDegrees": 4294967000 }"#).is_err());
        assert!(WheelConfig::from_json(r#"{ "minSpinDegrees": 360, "spinRangeDegrees": 4294967295 }"#).is_err());

        let config = WheelConfig::from_json(r#"{ "minSpinDegrees": 360, "spinRangeDegrees": 1 }"#).unwrap();
        assert_eq!(config.min_spin_degrees, 360);
        let config = WheelConfig::from_json(r#"{ "minSpinDegrees": 4294967000, "spinRangeDegrees": 296 }"#).unwrap();
        assert_eq!(config.spin_range_degrees, 296);
    }
}

//! Spin Math
//!
//! Turning a uniform sample into a spin distance, and a final rotation into
//! the index of the sector under the pointer.

use crate::config::WheelConfig;

const FULL_TURN: f64 = 360.0;

/// Map a uniform sample in `[0, 1)` onto the configured whole-degree range.
///
/// With the defaults this yields `[1800, 3599]`, i.e. five to ten turns.
/// Out-of-range samples are clamped so the result always stays in range.
pub fn draw_spin_angle(unit_random: f64, config: &WheelConfig) -> u32 {
    let range = config.spin_range_degrees.max(1);
    let unit = if unit_random.is_finite() {
        unit_random.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let offset = ((unit * range as f64).floor() as u32).min(range - 1);
    config.min_spin_degrees.saturating_add(offset)
}

/// Index of the sector under the top pointer after rotating clockwise by
/// `rotation` degrees.
///
/// Sectors start at 0° and run clockwise, so the sector now at the top is the
/// one whose unrotated position is `360 - (rotation mod 360)`.
pub fn winning_index(rotation: f64, item_count: usize) -> Option<usize> {
    if item_count == 0 {
        return None;
    }
    let segment_angle = FULL_TURN / item_count as f64;
    let normalized = rotation.rem_euclid(FULL_TURN);
    let raw = ((FULL_TURN - normalized) / segment_angle).floor() as usize;
    Some(raw % item_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_angle_bounds() {
        let config = WheelConfig::default();
        assert_eq!(draw_spin_angle(0.0, &config), 1800);
        assert_eq!(draw_spin_angle(0.5, &config), 2700);
        assert_eq!(draw_spin_angle(0.999_999_9, &config), 3599);
    }

    #[test]
    fn test_spin_angle_clamps_bad_samples() {
        let config = WheelConfig::default();
        assert_eq!(draw_spin_angle(1.0, &config), 3599);
        assert_eq!(draw_spin_angle(7.5, &config), 3599);
        assert_eq!(draw_spin_angle(-1.0, &config), 1800);
        assert_eq!(draw_spin_angle(f64::NAN, &config), 1800);
    }

    #[test]
    fn test_spin_angle_never_overflows() {
        // Built directly, skipping validation
        let config = WheelConfig {
            min_spin_degrees: u32::MAX - 10,
            spin_range_degrees: 1800,
            ..WheelConfig::default()
        };
        assert_eq!(draw_spin_angle(0.0, &config), u32::MAX - 10);
        assert_eq!(draw_spin_angle(0.5, &config), u32::MAX);
    }

    #[test]
    fn test_spin_angle_is_uniform_over_whole_degrees() {
        let config = WheelConfig::default();
        let mut hits = vec![0u32; config.spin_range_degrees as usize];
        for i in 0..config.spin_range_degrees {
            let unit = (i as f64 + 0.5) / config.spin_range_degrees as f64;
            let angle = draw_spin_angle(unit, &config);
            hits[(angle - config.min_spin_degrees) as usize] += 1;
        }
        assert!(hits.iter().all(|&h| h == 1));
    }

    #[test]
    fn test_full_turns_land_on_first_item() {
        assert_eq!(winning_index(3600.0, 4), Some(0));
        assert_eq!(winning_index(0.0, 4), Some(0));
    }

    #[test]
    fn test_quarter_turn_lands_on_last_item() {
        assert_eq!(winning_index(3690.0, 4), Some(3));
    }

    #[test]
    fn test_index_walks_backwards_as_rotation_grows() {
        // Each quarter turn brings the previous sector under the pointer
        assert_eq!(winning_index(3600.0 + 180.0, 4), Some(2));
        assert_eq!(winning_index(3600.0 + 270.0, 4), Some(1));
        assert_eq!(winning_index(3600.0 + 1.0, 4), Some(3));
        assert_eq!(winning_index(3600.0 + 359.0, 4), Some(0));
    }

    #[test]
    fn test_index_always_in_range() {
        for n in 1..=40usize {
            for deg in 0..720u32 {
                let idx = winning_index(1800.0 + deg as f64, n).unwrap();
                assert!(idx < n, "n={} deg={} idx={}", n, deg, idx);
            }
        }
    }

    #[test]
    fn test_no_items_has_no_winner() {
        assert_eq!(winning_index(1234.0, 0), None);
    }
}

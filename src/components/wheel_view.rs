//! Wheel View Component
//!
//! Draws the sectors for the current items and rotates the whole wheel.
//! Sector layout comes from `wheel_core::geometry`; rotation is the only
//! animated property.

use leptos::prelude::*;
use wheel_core::{conic_gradient, layout_sectors, Sector};

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Must match `.wheel-container` in styles.css
const WHEEL_SIZE_PX: f64 = 400.0;
/// Distance from the center to the label's midpoint
const LABEL_RADIUS_PX: f64 = WHEEL_SIZE_PX * 0.32;
const LABEL_MAX_WIDTH_PX: f64 = 120.0;
const SPIN_EASING: &str = "cubic-bezier(0.17, 0.67, 0.83, 0.67)";

fn wheel_style(rotation: f64, duration_ms: u32, background: &str) -> String {
    format!(
        "transform: rotate({}deg); transition: transform {}ms {}; background: {};",
        rotation, duration_ms, SPIN_EASING, background
    )
}

/// Rotates a full-size layer so the label sits on the sector bisector.
fn label_arm_style(sector: &Sector) -> String {
    format!("transform: rotate({}deg);", sector.mid_angle())
}

fn label_style(sector: &Sector) -> String {
    format!(
        "top: {}px; max-width: {}px;",
        WHEEL_SIZE_PX / 2.0 - LABEL_RADIUS_PX,
        sector.label_width(LABEL_RADIUS_PX, LABEL_MAX_WIDTH_PX).floor()
    )
}

#[component]
pub fn WheelView() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let palette = ctx.palette();
    let duration_ms = ctx.spin_duration_ms();

    let names = Memo::new(move |_| {
        store.wheel().with(|w| w.items.iter().map(|i| i.name.clone()).collect::<Vec<_>>())
    });
    // Recomputed only when the item count changes
    let item_count = Memo::new(move |_| names.with(|n| n.len()));
    let sectors = Memo::new(move |_| layout_sectors(item_count.get(), palette.as_slice()));

    let style = move || {
        let rotation = store.wheel().with(|w| w.rotation_degrees);
        sectors.with(|s| wheel_style(rotation, duration_ms, &conic_gradient(s)))
    };

    view! {
        <div class="wheel-container">
            <div class="wheel" style=style>
                {move || {
                    let names = names.get();
                    sectors.get().into_iter().zip(names).map(|(sector, name)| {
                        let title = name.clone();
                        view! {
                            <div class="segment-arm" style=label_arm_style(&sector)>
                                <span class="segment-label" style=label_style(&sector) title=title>
                                    {name}
                                </span>
                            </div>
                        }
                    }).collect_view()
                }}
            </div>
            <div class="pointer"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wheel_core::PALETTE;

    #[test]
    fn test_wheel_style_uses_shared_duration() {
        let style = wheel_style(3690.0, 5000, "none");
        assert!(style.contains("rotate(3690deg)"));
        assert!(style.contains("transition: transform 5000ms"));
    }

    #[test]
    fn test_label_arm_points_at_bisector() {
        let sectors = layout_sectors(4, &PALETTE[..]);
        assert_eq!(label_arm_style(&sectors[0]), "transform: rotate(45deg);");
        assert_eq!(label_arm_style(&sectors[3]), "transform: rotate(315deg);");
    }

    #[test]
    fn test_label_width_shrinks_with_many_items() {
        let few = layout_sectors(2, &PALETTE[..]);
        let many = layout_sectors(30, &PALETTE[..]);
        assert!(label_style(&few[0]).contains("max-width: 120px"));
        assert!(!label_style(&many[0]).contains("max-width: 120px"));
    }
}

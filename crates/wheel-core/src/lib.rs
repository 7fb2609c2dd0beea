//! Roulette Wheel Core
//!
//! Browser-independent state and math behind the wheel widget:
//! the item list, the spin engine and the sector layout.

pub mod config;
pub mod geometry;
pub mod models;
pub mod spin;
pub mod wheel;

pub use config::WheelConfig;
pub use geometry::{conic_gradient, layout_sectors, Sector, PALETTE};
pub use models::{normalize_link, Item};
pub use spin::{draw_spin_angle, winning_index};
pub use wheel::{PendingSpin, Wheel};

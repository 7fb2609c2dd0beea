//! Wheel State
//!
//! The item list plus the spin lifecycle. All operations reject invalid
//! requests by leaving the state untouched.

use crate::config::WheelConfig;
use crate::models::Item;
use crate::spin::{draw_spin_angle, winning_index};

/// Complete widget state, renderable at any point between operations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wheel {
    /// Ordered entries; order decides sector placement
    pub items: Vec<Item>,
    /// Cumulative clockwise rotation, grows with every spin
    pub rotation_degrees: f64,
    /// A spin is in flight and its result is not yet known
    pub spinning: bool,
    /// Winner of the last finished spin
    pub result: Option<Item>,
}

/// A spin that has started and waits for its resolution timer
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSpin {
    /// Degrees added by this spin
    pub spin_angle: u32,
    /// Rotation the wheel comes to rest at
    pub target_rotation: f64,
    /// Items as they were when the spin started
    items: Vec<Item>,
}

impl PendingSpin {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Index that will win once this spin resolves
    pub fn winning_index(&self) -> Option<usize> {
        winning_index(self.target_rotation, self.items.len())
    }
}

impl Wheel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entry. Returns `false` if the name or link is blank.
    pub fn add_item(&mut self, name: &str, link: &str) -> bool {
        match Item::new(name, link) {
            Some(item) => {
                self.items.push(item);
                true
            }
            None => false,
        }
    }

    /// Remove the entry at `index`, shifting later entries down.
    ///
    /// Indices come from the current render, so a stale one is a caller bug;
    /// it is ignored rather than panicking.
    pub fn remove_item(&mut self, index: usize) -> Option<Item> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// At least two entries and nothing in flight
    pub fn can_spin(&self) -> bool {
        self.items.len() >= 2 && !self.spinning
    }

    /// Start a spin using `unit_random`, a uniform sample in `[0, 1)`.
    ///
    /// The new rotation is applied immediately so the animation can start;
    /// the caller must hand the returned spin to [`Wheel::resolve_spin`]
    /// after `config.spin_duration_ms`.
    pub fn begin_spin(&mut self, unit_random: f64, config: &WheelConfig) -> Option<PendingSpin> {
        if !self.can_spin() {
            return None;
        }
        let spin_angle = draw_spin_angle(unit_random, config);
        let target_rotation = self.rotation_degrees + spin_angle as f64;

        self.rotation_degrees = target_rotation;
        self.spinning = true;
        self.result = None;

        Some(PendingSpin {
            spin_angle,
            target_rotation,
            items: self.items.clone(),
        })
    }

    /// Publish the winner of `pending` and end the spin.
    pub fn resolve_spin(&mut self, pending: PendingSpin) -> Option<Item> {
        if !self.spinning {
            return None;
        }
        let winner = pending
            .winning_index()
            .and_then(|index| pending.items.get(index).cloned());
        self.result = winner.clone();
        self.spinning = false;
        winner
    }
}

//! Sector Geometry
//!
//! Per-item wedge layout. Depends only on the item count and the palette;
//! the wheel's rotation is applied to the whole wheel, never to sectors.

/// Default sector colors, cycled by item index.
pub const PALETTE: [&str; 15] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF",
    "#FF9F40", "#8AC24A", "#FF5252", "#00BCD4", "#673AB7",
    "#FFC107", "#795548", "#607D8B", "#E91E63", "#3F51B5",
];

/// One wedge of the wheel
#[derive(Debug, Clone, PartialEq)]
pub struct Sector {
    /// Position of the owning item
    pub index: usize,
    /// Clockwise start angle from the top, in degrees
    pub start_angle: f64,
    /// Angular width, in degrees
    pub sweep: f64,
    pub color: String,
}

impl Sector {
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep
    }

    /// Bisector of the wedge, where the label is centered
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.sweep / 2.0
    }

    /// Widest label that fits across the wedge at `radius`, capped at `max`.
    pub fn label_width(&self, radius: f64, max: f64) -> f64 {
        if self.sweep >= 180.0 {
            return max;
        }
        let chord = 2.0 * radius * (self.sweep / 2.0).to_radians().sin();
        chord.min(max)
    }
}

/// CSS `conic-gradient` drawing every sector, starting at the top.
pub fn conic_gradient(sectors: &[Sector]) -> String {
    if sectors.is_empty() {
        return "none".to_string();
    }
    let stops: Vec<String> = sectors
        .iter()
        .map(|s| format!("{} {}deg {}deg", s.color, s.start_angle, s.end_angle()))
        .collect();
    format!("conic-gradient({})", stops.join(", "))
}

/// Lay out `item_count` equal sectors clockwise from 0°.
///
/// Items past the palette length reuse colors from the start.
pub fn layout_sectors<S: AsRef<str>>(item_count: usize, palette: &[S]) -> Vec<Sector> {
    if item_count == 0 {
        return Vec::new();
    }
    let sweep = 360.0 / item_count as f64;
    (0..item_count)
        .map(|index| Sector {
            index,
            start_angle: index as f64 * sweep,
            sweep,
            color: palette_color(palette, index),
        })
        .collect()
}

fn palette_color<S: AsRef<str>>(palette: &[S], index: usize) -> String {
    if palette.is_empty() {
        return PALETTE[index % PALETTE.len()].to_string();
    }
    palette[index % palette.len()].as_ref().to_string()
}

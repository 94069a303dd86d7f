//! Text report of a level grid.
//!
//! One line per layer, then the thickness list and the midpoint list:
//!
//! ```text
//!   1 :  dz=   8.0, depth=    8.0,  dz difference=  8.0,  dz ratio= 0.00
//!   2 :  dz=   3.0, depth=   11.0,  dz difference= -5.0,  dz ratio= 0.38
//! ...
//! [8, 3, ...]
//! [4.0, 9.5, ...]
//! ```
//!
//! Thicknesses are listed as whole meters. Midpoints use the shortest
//! decimal form that reads back to the same value.

use std::fmt;
use std::io::{BufWriter, Write};

use crate::vertical::{LayerDiagnostics, LevelGrid};

/// Format the diagnostic line of one layer.
pub fn format_layer_line(layer: &LayerDiagnostics) -> String {
    format!(
        "{:3} :  dz={:6.1}, depth={:7.1},  dz difference={:5.1},  dz ratio={:5.2}",
        layer.index.number(),
        layer.thickness.meters(),
        layer.bottom_depth.meters(),
        layer.delta,
        layer.ratio
    )
}

/// Format thicknesses as a bracketed list of whole meters.
pub fn format_thickness_list(thickness: &[f64]) -> String {
    let items: Vec<String> = thickness
        .iter()
        .map(|&dz| format!("{}", dz.round_ties_even() as i64))
        .collect();
    format!("[{}]", items.join(", "))
}

/// Format depths as a bracketed list of decimals.
pub fn format_depth_list(depth: &[f64]) -> String {
    let items: Vec<String> = depth.iter().map(|z| format!("{:?}", z)).collect();
    format!("[{}]", items.join(", "))
}

/// Write the full report for `grid`.
pub fn write_report<W: Write>(grid: &LevelGrid, writer: W) -> std::io::Result<()> {
    let mut writer = BufWriter::new(writer);
    for layer in grid.diagnostics() {
        writeln!(writer, "{}", format_layer_line(layer))?;
    }
    writeln!(writer, "{}", format_thickness_list(grid.thicknesses()))?;
    writeln!(writer, "{}", format_depth_list(grid.midpoint_depths()))?;
    writer.flush()
}

/// Report view of a level grid, printable with `{}`.
///
/// # Example
///
/// ```
/// use ocean_levels::report::LevelReport;
/// use ocean_levels::vertical::LevelGrid;
///
/// let grid = LevelGrid::from_thicknesses(vec![12.0, 10.0]).unwrap();
/// let text = LevelReport::new(&grid).to_string();
/// assert!(text.ends_with("[12, 10]\n[6.0, 17.0]\n"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct LevelReport<'a> {
    grid: &'a LevelGrid,
}

impl<'a> LevelReport<'a> {
    /// Wrap a grid for reporting.
    pub fn new(grid: &'a LevelGrid) -> Self {
        Self { grid }
    }
}

impl fmt::Display for LevelReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for layer in self.grid.diagnostics() {
            writeln!(f, "{}", format_layer_line(layer))?;
        }
        writeln!(f, "{}", format_thickness_list(self.grid.thicknesses()))?;
        writeln!(f, "{}", format_depth_list(self.grid.midpoint_depths()))
    }
}

//! # ocean-levels
//!
//! Z-level layer thicknesses for global ocean model grids.
//!
//! This crate provides:
//! - A three-regime growth rule that keeps surface layers thin and grows
//!   them with depth
//! - Named thickness tables for established level sets
//! - Bottom and midpoint depths of every layer, with per-layer diagnostics
//! - A fixed-format text report of a column
//!
//! # Example
//!
//! ```
//! use ocean_levels::{LevelGrid, LevelReport, RegimeGrowth};
//!
//! let growth = RegimeGrowth::default().with_levels(40);
//! let grid = LevelGrid::new(growth.n_levels, growth).unwrap();
//! let report = LevelReport::new(&grid).to_string();
//! assert_eq!(report.lines().count(), 42);
//! ```

pub mod error;
pub mod report;
pub mod types;
pub mod vertical;

// Re-export main types for convenience
pub use error::{LevelError, Result};
pub use report::{write_report, LevelReport};
pub use types::{Depth, LevelIndex, Thickness};
pub use vertical::{
    smooth_thicknesses, LayerDiagnostics, LevelGrid, LevelPreset, LevelProfile, LevelStep, Regime,
    RegimeGrowth, TabulatedLevels,
};

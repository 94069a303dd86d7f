//! Z-level vertical discretization for global ocean configurations.
//!
//! Layers are counted from the surface down. Each column is described by
//! its layer thicknesses; bottom depths and midpoint depths follow from a
//! single forward pass.
//!
//! # Level Profiles
//!
//! Profiles control how thickness grows with depth:
//!
//! - [`RegimeGrowth`]: thin near-surface layers, depth-proportional layers
//!   down to a limit, then geometric growth
//! - [`TabulatedLevels`]: fixed thickness tables, exposed through
//!   [`LevelPreset`]
//!
//! # Example
//!
//! ```
//! use ocean_levels::vertical::{LevelGrid, RegimeGrowth};
//!
//! let growth = RegimeGrowth::default();
//! let grid = LevelGrid::new(growth.n_levels, growth).unwrap();
//!
//! assert_eq!(grid.thicknesses()[0], 8.0);
//! assert_eq!(grid.midpoint_depths()[0], 4.0);
//! assert_eq!(grid.total_depth(), 5420.0);
//! ```
//!
//! # Rounding
//!
//! Generated thicknesses are rounded to whole meters with ties to even, so
//! a deep-regime value of exactly 28.5 m becomes 28 m.

mod growth;
mod levels;
mod presets;
mod profile;
mod smoothing;

pub use growth::{LevelStep, Regime, RegimeGrowth};
pub use levels::{LayerDiagnostics, LevelGrid};
pub use presets::{LevelPreset, TabulatedLevels};
pub use profile::LevelProfile;
pub use smoothing::smooth_thicknesses;

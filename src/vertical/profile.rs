//! Level profiles: anything that can produce a column of layer thicknesses.
//!
//! # Available Profiles
//!
//! - [`RegimeGrowth`](super::RegimeGrowth): thin surface layers growing
//!   geometrically with depth
//! - [`TabulatedLevels`](super::TabulatedLevels): fixed thickness tables
//!   (see [`LevelPreset`](super::LevelPreset))
//!
//! # Example
//!
//! ```
//! use ocean_levels::vertical::{LevelProfile, RegimeGrowth};
//!
//! let growth = RegimeGrowth::default();
//! let dz = growth.thicknesses(10).unwrap();
//! assert_eq!(dz.len(), 10);
//! assert_eq!(growth.name(), "regime_growth");
//! ```

use crate::error::Result;

/// Trait for vertical level profiles.
///
/// A profile turns a level count into layer thicknesses, surface first.
///
/// # Implementation Notes
///
/// - Returned length must equal `n_levels`
/// - Every thickness must be positive
/// - Index 0 is the surface layer
pub trait LevelProfile: Send + Sync {
    /// Compute the layer thicknesses in meters, surface first.
    ///
    /// Fails with a configuration error when the profile cannot produce
    /// `n_levels` layers.
    fn thicknesses(&self, n_levels: usize) -> Result<Vec<f64>>;

    /// Human-readable name for debugging and logging.
    fn name(&self) -> &'static str;

    /// Description of parameters (for diagnostics).
    fn description(&self) -> String {
        self.name().to_string()
    }
}

//! Level grid: layer thicknesses with their bottom and midpoint depths.
//!
//! The grid is built in a single pass from the surface down. For layer
//! `k` with thickness `dz[k]` and `dz[-1] = 0`:
//!
//! ```text
//! bottom[k]   = dz[0] + ... + dz[k]
//! midpoint[k] = midpoint[k-1] + (dz[k] + dz[k-1]) / 2
//! ratio[k]    = dz[k] / dz[k-1]      (0 for the surface layer)
//! ```
//!
//! The midpoint is where scalars sit in a depth-staggered grid; for the
//! surface layer it is exactly half its thickness.
//!
//! # Example
//!
//! ```
//! use ocean_levels::vertical::LevelGrid;
//!
//! let grid = LevelGrid::from_thicknesses(vec![12.0, 10.0, 10.0]).unwrap();
//! assert_eq!(grid.bottom_depths(), &[12.0, 22.0, 32.0]);
//! assert_eq!(grid.midpoint_depths(), &[6.0, 17.0, 27.0]);
//! ```

use log::warn;

use super::profile::LevelProfile;
use crate::error::{LevelError, Result};
use crate::types::{Depth, LevelIndex, Thickness};

/// Per-layer diagnostics computed alongside the depths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerDiagnostics {
    /// Layer index, 0 at the surface.
    pub index: LevelIndex,
    /// Layer thickness.
    pub thickness: Thickness,
    /// Depth of the bottom of the layer.
    pub bottom_depth: Depth,
    /// Depth of the layer midpoint.
    pub midpoint_depth: Depth,
    /// Thickness change from the layer above (m).
    pub delta: f64,
    /// Thickness relative to the layer above, 0 for the surface layer.
    pub ratio: f64,
    /// Thickness relative to the bottom depth of the layer.
    pub fraction_of_depth: f64,
}

/// Z-level column: thicknesses, bottom depths and midpoint depths.
///
/// # Memory Layout
///
/// Each quantity is a contiguous `Vec<f64>`, surface first, exposed as a
/// slice.
#[derive(Clone, Debug)]
pub struct LevelGrid {
    /// Layer thicknesses (m).
    thickness: Vec<f64>,

    /// Depth of each layer bottom (m).
    bottom_depth: Vec<f64>,

    /// Depth of each layer midpoint (m).
    midpoint_depth: Vec<f64>,

    /// Delta and ratio per layer.
    diagnostics: Vec<LayerDiagnostics>,

    /// Name of the profile used.
    profile_name: String,

    /// Description of profile parameters.
    profile_description: String,
}

impl LevelGrid {
    /// Build a grid of `n_levels` layers from a profile.
    ///
    /// # Example
    ///
    /// ```
    /// use ocean_levels::vertical::{LevelGrid, RegimeGrowth};
    ///
    /// let grid = LevelGrid::new(127, RegimeGrowth::default()).unwrap();
    /// assert_eq!(grid.n_levels(), 127);
    /// assert_eq!(grid.profile_name(), "regime_growth");
    /// ```
    pub fn new(n_levels: usize, profile: impl LevelProfile) -> Result<Self> {
        let thickness = profile.thicknesses(n_levels)?;
        let mut grid = Self::from_thicknesses(thickness)?;
        grid.profile_name = profile.name().to_string();
        grid.profile_description = profile.description();

        if let Some(k) = grid.first_decrease() {
            let above = LevelIndex::new(k.get() - 1);
            warn!(
                "{} column is not monotonic: {} ({}) is thinner than {} ({})",
                grid.profile_name,
                k,
                grid.layer(k).thickness,
                above,
                grid.layer(above).thickness
            );
        }

        Ok(grid)
    }

    /// Build a grid from explicit thicknesses, surface first.
    ///
    /// Every thickness must be positive and finite.
    pub fn from_thicknesses(thickness: Vec<f64>) -> Result<Self> {
        if thickness.is_empty() {
            return Err(LevelError::configuration("level grid needs at least one layer"));
        }
        if let Some(k) = thickness.iter().position(|&t| !(t.is_finite() && t > 0.0)) {
            return Err(LevelError::configuration(format!(
                "thickness of {} must be positive, got {}",
                LevelIndex::new(k),
                thickness[k]
            )));
        }

        let n = thickness.len();
        let mut bottom_depth = Vec::with_capacity(n);
        let mut midpoint_depth = Vec::with_capacity(n);
        let mut diagnostics = Vec::with_capacity(n);

        let mut depth = 0.0;
        let mut midpoint = 0.0;
        let mut previous = 0.0;

        for (k, &dz) in thickness.iter().enumerate() {
            depth += dz;
            midpoint += (dz + previous) * 0.5;
            let ratio = if previous > 0.0 { dz / previous } else { 0.0 };

            bottom_depth.push(depth);
            midpoint_depth.push(midpoint);
            diagnostics.push(LayerDiagnostics {
                index: LevelIndex::new(k),
                thickness: Thickness::new(dz),
                bottom_depth: Depth::new(depth),
                midpoint_depth: Depth::new(midpoint),
                delta: dz - previous,
                ratio,
                fraction_of_depth: dz / depth,
            });

            previous = dz;
        }

        Ok(Self {
            thickness,
            bottom_depth,
            midpoint_depth,
            diagnostics,
            profile_name: "explicit".to_string(),
            profile_description: format!("Explicit thicknesses ({} levels)", n),
        })
    }

    // =========================================================================
    // Accessors (return slices for zero-copy access)
    // =========================================================================

    /// Number of layers.
    #[inline]
    pub fn n_levels(&self) -> usize {
        self.thickness.len()
    }

    /// Layer thicknesses (m).
    #[inline]
    pub fn thicknesses(&self) -> &[f64] {
        &self.thickness
    }

    /// Depth of each layer bottom (m).
    #[inline]
    pub fn bottom_depths(&self) -> &[f64] {
        &self.bottom_depth
    }

    /// Depth of each layer midpoint (m).
    #[inline]
    pub fn midpoint_depths(&self) -> &[f64] {
        &self.midpoint_depth
    }

    /// Per-layer diagnostics, surface first.
    #[inline]
    pub fn diagnostics(&self) -> &[LayerDiagnostics] {
        &self.diagnostics
    }

    /// Diagnostics of a single layer.
    ///
    /// # Panics
    ///
    /// Panics if `k` is out of range.
    #[inline]
    pub fn layer(&self, k: LevelIndex) -> &LayerDiagnostics {
        &self.diagnostics[k.get()]
    }

    /// Depth of the bottom of the deepest layer (m).
    #[inline]
    pub fn total_depth(&self) -> f64 {
        self.bottom_depth[self.bottom_depth.len() - 1]
    }

    /// Name of the profile that produced the thicknesses.
    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    /// Description of the profile parameters.
    pub fn profile_description(&self) -> &str {
        &self.profile_description
    }

    // =========================================================================
    // Monotonicity
    // =========================================================================

    /// First layer thinner than the layer above it, if any.
    pub fn first_decrease(&self) -> Option<LevelIndex> {
        self.thickness
            .windows(2)
            .position(|pair| pair[1] < pair[0])
            .map(|k| LevelIndex::new(k + 1))
    }

    /// Whether thickness never decreases with depth.
    #[inline]
    pub fn is_monotonic(&self) -> bool {
        self.first_decrease().is_none()
    }
}

// =============================================================================
// Tests
// =============================================================================

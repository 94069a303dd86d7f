//! Three-regime thickness growth for z-level ocean grids.
//!
//! Layers start thin near the surface to resolve the mixed layer and grow
//! with depth so that a few hundred meters of layer count reach the abyss.
//! Each layer is chosen from the running depth above it:
//!
//! ```text
//! depth < thin_limit          dz = thin_thickness
//! depth < mid_limit           dz = max(round(depth * mid_coefficient), floor)
//! otherwise                   dz = max(round(dz_prev * growth + depth * depth_coefficient), floor)
//! ```
//!
//! `floor` is the thickness of the previous generated layer. The seed
//! layer does not act as a floor, and the near-surface regime is never
//! floored, so the default constants give a thin 3 m layer directly under
//! the 8 m seed layer.
//!
//! Rounding is to whole meters with ties to even.
//!
//! # Example
//!
//! ```
//! use ocean_levels::vertical::RegimeGrowth;
//!
//! let growth = RegimeGrowth::default();
//! let dz = growth.generate().unwrap();
//! assert_eq!(dz.len(), 127);
//! assert_eq!(dz[0], 8.0);
//! assert_eq!(dz[1], 3.0);
//! ```

use std::fmt;
use std::iter;

use log::debug;

use super::profile::LevelProfile;
use super::smoothing::smooth_thicknesses;
use crate::error::{require_positive, LevelError, Result};
use crate::types::{Depth, LevelIndex, Thickness};

// =============================================================================
// Regime
// =============================================================================

/// Branch of the growth rule that produced a layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Regime {
    /// Layer 0, fixed seed thickness.
    Seed,
    /// Fixed thin layers above `thin_regime_depth_limit`.
    NearSurface,
    /// Thickness proportional to depth above `mid_regime_depth_limit`.
    MidDepth,
    /// Geometric growth of the previous thickness plus a depth term.
    Deep,
}

impl Regime {
    /// Short lowercase label for logs and reports.
    pub fn label(self) -> &'static str {
        match self {
            Regime::Seed => "seed",
            Regime::NearSurface => "near-surface",
            Regime::MidDepth => "mid-depth",
            Regime::Deep => "deep",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Level Step
// =============================================================================

/// One layer produced by the growth rule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelStep {
    /// Layer index, 0 at the surface.
    pub index: LevelIndex,
    /// Thickness of this layer before the final rounding pass.
    pub thickness: Thickness,
    /// Depth of the bottom of this layer.
    pub depth: Depth,
    /// Regime that produced the thickness.
    pub regime: Regime,
}

// =============================================================================
// Regime Growth
// =============================================================================

/// Three-regime growth rule for layer thicknesses.
///
/// # Parameters
///
/// - `n_levels`: Number of layers (reference: 127)
/// - `seed_thickness`: Thickness of layer 0 (reference: 8 m)
/// - `thin_regime_depth_limit` / `thin_regime_thickness`: Layers starting
///   above this depth get the fixed thin thickness (reference: 80 m / 3 m)
/// - `mid_regime_depth_limit` / `mid_regime_coefficient`: Layers starting
///   above this depth get `depth * coefficient` (reference: 500 m / 0.02575)
/// - `deep_regime_growth_factor` / `deep_regime_depth_coefficient`: Deeper
///   layers get `previous * factor + depth * coefficient`
///   (reference: 1.04 / 0.005)
/// - `smoothing_passes`: Optional sweeps of [`smooth_thicknesses`] applied
///   before rounding (reference: 0, disabled)
///
/// # Example
///
/// ```
/// use ocean_levels::vertical::RegimeGrowth;
///
/// // Shorter column with the reference growth constants
/// let growth = RegimeGrowth::default().with_levels(64);
/// assert_eq!(growth.generate().unwrap().len(), 64);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegimeGrowth {
    /// Total layer count.
    pub n_levels: usize,
    /// Thickness of layer 0 (m).
    pub seed_thickness: f64,
    /// Depth above which layers stay thin (m).
    pub thin_regime_depth_limit: f64,
    /// Fixed thickness in the near-surface regime (m).
    pub thin_regime_thickness: f64,
    /// Depth boundary of the mid-depth regime (m).
    pub mid_regime_depth_limit: f64,
    /// Thickness per meter of depth in the mid-depth regime.
    pub mid_regime_coefficient: f64,
    /// Multiplier on the previous thickness in the deep regime.
    pub deep_regime_growth_factor: f64,
    /// Thickness per meter of depth added in the deep regime.
    pub deep_regime_depth_coefficient: f64,
    /// Smoothing sweeps applied before rounding.
    pub smoothing_passes: usize,
}

impl Default for RegimeGrowth {
    fn default() -> Self {
        Self {
            n_levels: 127,
            seed_thickness: 8.0,
            thin_regime_depth_limit: 80.0,
            thin_regime_thickness: 3.0,
            mid_regime_depth_limit: 500.0,
            mid_regime_coefficient: 0.02575,
            deep_regime_growth_factor: 1.04,
            deep_regime_depth_coefficient: 0.005,
            smoothing_passes: 0,
        }
    }
}

impl RegimeGrowth {
    /// Set the layer count.
    pub fn with_levels(mut self, n_levels: usize) -> Self {
        self.n_levels = n_levels;
        self
    }

    /// Set the thickness of layer 0.
    pub fn with_seed_thickness(mut self, seed_thickness: f64) -> Self {
        self.seed_thickness = seed_thickness;
        self
    }

    /// Set the near-surface regime limit and its fixed thickness.
    pub fn with_thin_regime(mut self, depth_limit: f64, thickness: f64) -> Self {
        self.thin_regime_depth_limit = depth_limit;
        self.thin_regime_thickness = thickness;
        self
    }

    /// Set the mid-depth regime limit and its depth coefficient.
    pub fn with_mid_regime(mut self, depth_limit: f64, coefficient: f64) -> Self {
        self.mid_regime_depth_limit = depth_limit;
        self.mid_regime_coefficient = coefficient;
        self
    }

    /// Set the deep regime growth factor and depth coefficient.
    pub fn with_deep_regime(mut self, growth_factor: f64, depth_coefficient: f64) -> Self {
        self.deep_regime_growth_factor = growth_factor;
        self.deep_regime_depth_coefficient = depth_coefficient;
        self
    }

    /// Enable smoothing sweeps before the final rounding.
    pub fn with_smoothing(mut self, passes: usize) -> Self {
        self.smoothing_passes = passes;
        self
    }

    /// Check the layer count and every growth constant.
    ///
    /// All constants must be positive and finite, and at least one layer
    /// must be requested.
    pub fn validate(&self) -> Result<()> {
        if self.n_levels == 0 {
            return Err(LevelError::configuration("n_levels must be at least 1"));
        }
        require_positive("seed_thickness", self.seed_thickness)?;
        require_positive("thin_regime_depth_limit", self.thin_regime_depth_limit)?;
        require_positive("thin_regime_thickness", self.thin_regime_thickness)?;
        require_positive("mid_regime_depth_limit", self.mid_regime_depth_limit)?;
        require_positive("mid_regime_coefficient", self.mid_regime_coefficient)?;
        require_positive("deep_regime_growth_factor", self.deep_regime_growth_factor)?;
        require_positive(
            "deep_regime_depth_coefficient",
            self.deep_regime_depth_coefficient,
        )?;
        Ok(())
    }

    /// Regime selected for a layer whose top sits at `depth`.
    #[inline]
    pub fn regime_at(&self, depth: Depth) -> Regime {
        let depth = depth.meters();
        if depth < self.thin_regime_depth_limit {
            Regime::NearSurface
        } else if depth < self.mid_regime_depth_limit {
            Regime::MidDepth
        } else {
            Regime::Deep
        }
    }

    /// The seed layer (index 0).
    pub fn seed(&self) -> LevelStep {
        let thickness = Thickness::new(self.seed_thickness);
        LevelStep {
            index: LevelIndex::SURFACE,
            thickness,
            depth: Depth::SURFACE + thickness,
            regime: Regime::Seed,
        }
    }

    /// Compute layer `index` from the layer above it.
    ///
    /// `previous` is the thickness of layer `index - 1` and `depth` the
    /// depth of its bottom. The previous thickness is also the floor for
    /// the mid-depth and deep regimes, except directly below the seed layer
    /// where the floor is zero.
    pub fn step(&self, previous: Thickness, depth: Depth, index: LevelIndex) -> LevelStep {
        let floor = if index.get() <= 1 {
            Thickness::ZERO
        } else {
            previous
        };

        let regime = self.regime_at(depth);
        let thickness = match regime {
            Regime::Seed => Thickness::new(self.seed_thickness),
            Regime::NearSurface => Thickness::new(self.thin_regime_thickness),
            Regime::MidDepth => Thickness::new(depth.meters() * self.mid_regime_coefficient)
                .round_to_meter()
                .max(floor),
            Regime::Deep => Thickness::new(
                previous.meters() * self.deep_regime_growth_factor
                    + depth.meters() * self.deep_regime_depth_coefficient,
            )
            .round_to_meter()
            .max(floor),
        };

        LevelStep {
            index,
            thickness,
            depth: depth + thickness,
            regime,
        }
    }

    /// Run the growth rule for `n_levels` layers, seed layer included.
    ///
    /// Thicknesses are as computed by the rule, before smoothing and the
    /// final rounding pass.
    pub fn steps(&self, n_levels: usize) -> Result<Vec<LevelStep>> {
        self.with_levels(n_levels).validate()?;

        let steps: Vec<LevelStep> = iter::successors(Some(self.seed()), |prev| {
            Some(self.step(prev.thickness, prev.depth, prev.index.next()))
        })
        .take(n_levels)
        .collect();

        for pair in steps.windows(2) {
            if pair[0].regime != pair[1].regime {
                debug!(
                    "{} regime starts at {} (top at {})",
                    pair[1].regime, pair[1].index, pair[0].depth
                );
            }
        }

        Ok(steps)
    }

    /// First layer of each regime that occurs in a column of `n_levels`.
    pub fn regime_boundaries(&self, n_levels: usize) -> Result<Vec<(Regime, LevelIndex)>> {
        let steps = self.steps(n_levels)?;
        let mut boundaries: Vec<(Regime, LevelIndex)> = Vec::new();
        for step in &steps {
            if boundaries.last().map(|&(regime, _)| regime) != Some(step.regime) {
                boundaries.push((step.regime, step.index));
            }
        }
        Ok(boundaries)
    }

    /// Generate the configured number of layers.
    pub fn generate(&self) -> Result<Vec<f64>> {
        self.thicknesses(self.n_levels)
    }
}

impl LevelProfile for RegimeGrowth {
    fn thicknesses(&self, n_levels: usize) -> Result<Vec<f64>> {
        let mut dz: Vec<f64> = self
            .steps(n_levels)?
            .iter()
            .map(|step| step.thickness.meters())
            .collect();

        if self.smoothing_passes > 0 {
            smooth_thicknesses(&mut dz, self.smoothing_passes, 1);
        }

        Ok(dz.into_iter().map(f64::round_ties_even).collect())
    }

    fn name(&self) -> &'static str {
        "regime_growth"
    }

    fn description(&self) -> String {
        format!(
            "Regime growth (seed={:.1}m, thin={:.1}m above {:.0}m, mid={}*z above {:.0}m, deep={}*dz+{}*z)",
            self.seed_thickness,
            self.thin_regime_thickness,
            self.thin_regime_depth_limit,
            self.mid_regime_coefficient,
            self.mid_regime_depth_limit,
            self.deep_regime_growth_factor,
            self.deep_regime_depth_coefficient
        )
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let growth = RegimeGrowth::default();
        assert_eq!(growth.n_levels, 127);
        assert_eq!(growth.seed_thickness, 8.0);
        assert_eq!(growth.thin_regime_depth_limit, 80.0);
        assert_eq!(growth.thin_regime_thickness, 3.0);
        assert_eq!(growth.mid_regime_depth_limit, 500.0);
        assert_eq!(growth.mid_regime_coefficient, 0.02575);
        assert_eq!(growth.deep_regime_growth_factor, 1.04);
        assert_eq!(growth.deep_regime_depth_coefficient, 0.005);
        assert!(growth.validate().is_ok());
    }

    #[test]
    fn test_second_layer_is_thin() {
        let growth = RegimeGrowth::default();
        let seed = growth.seed();
        assert_eq!(seed.depth.meters(), 8.0);

        let step = growth.step(seed.thickness, seed.depth, LevelIndex::new(1));
        assert_eq!(step.regime, Regime::NearSurface);
        assert_eq!(step.thickness.meters(), 3.0);
        assert_eq!(step.depth.meters(), 11.0);
    }

    #[test]
    fn test_regime_selection() {
        let growth = RegimeGrowth::default();
        assert_eq!(growth.regime_at(Depth::new(79.9)), Regime::NearSurface);
        assert_eq!(growth.regime_at(Depth::new(80.0)), Regime::MidDepth);
        assert_eq!(growth.regime_at(Depth::new(499.0)), Regime::MidDepth);
        assert_eq!(growth.regime_at(Depth::new(500.0)), Regime::Deep);
    }

    #[test]
    fn test_mid_depth_step() {
        let growth = RegimeGrowth::default();
        // 200 * 0.02575 = 5.15 -> 5
        let step = growth.step(Thickness::new(4.0), Depth::new(200.0), LevelIndex::new(50));
        assert_eq!(step.regime, Regime::MidDepth);
        assert_eq!(step.thickness.meters(), 5.0);
    }

    #[test]
    fn test_mid_depth_floor() {
        let growth = RegimeGrowth::default();
        // 100 * 0.02575 = 2.575 -> 3, but the layer above is 4 m thick
        let step = growth.step(Thickness::new(4.0), Depth::new(100.0), LevelIndex::new(30));
        assert_eq!(step.thickness.meters(), 4.0);
    }

    #[test]
    fn test_no_floor_below_seed() {
        // Seed deep enough that layer 1 is already in the mid-depth regime
        let growth = RegimeGrowth::default().with_seed_thickness(100.0);
        let seed = growth.seed();
        let step = growth.step(seed.thickness, seed.depth, LevelIndex::new(1));
        assert_eq!(step.regime, Regime::MidDepth);
        // 100 * 0.02575 = 2.575 -> 3, not floored to the 100 m seed
        assert_eq!(step.thickness.meters(), 3.0);
    }

    #[test]
    fn test_deep_step_ties_to_even() {
        let growth = RegimeGrowth::default();
        // 25 * 1.04 + 500 * 0.005 = 28.5 exactly
        let step = growth.step(Thickness::new(25.0), Depth::new(500.0), LevelIndex::new(90));
        assert_eq!(step.regime, Regime::Deep);
        assert_eq!(step.thickness.meters(), 28.0);

        // 269 * 1.04 + 3148 * 0.005 = 295.5 exactly, even neighbour is 296
        let step = growth.step(Thickness::new(269.0), Depth::new(3148.0), LevelIndex::new(121));
        assert_eq!(step.thickness.meters(), 296.0);
    }

    #[test]
    fn test_reference_column() {
        let dz = RegimeGrowth::default().generate().unwrap();
        assert_eq!(dz.len(), 127);
        assert_eq!(dz[0], 8.0);
        assert!(dz[1..44].iter().all(|&t| t == 3.0));
        assert_eq!(dz[44], 4.0);
        assert_eq!(&dz[93..97], &[12.0, 13.0, 16.0, 19.0]);
        assert_eq!(&dz[120..], &[269.0, 296.0, 325.0, 357.0, 392.0, 430.0, 472.0]);
        assert_eq!(dz.iter().sum::<f64>(), 5420.0);
    }

    #[test]
    fn test_floor_holds_after_seed() {
        let dz = RegimeGrowth::default().generate().unwrap();
        for k in 2..dz.len() {
            assert!(dz[k] >= dz[k - 1], "layer {} thinner than layer above", k);
        }
    }

    #[test]
    fn test_regime_boundaries() {
        let boundaries = RegimeGrowth::default().regime_boundaries(127).unwrap();
        assert_eq!(boundaries.len(), 4);
        assert_eq!(boundaries[0], (Regime::Seed, LevelIndex::new(0)));
        assert_eq!(boundaries[1], (Regime::NearSurface, LevelIndex::new(1)));
        // 8 m seed + 24 thin layers reach 80 m
        assert_eq!(boundaries[2], (Regime::MidDepth, LevelIndex::new(25)));
        assert_eq!(boundaries[3], (Regime::Deep, LevelIndex::new(95)));
    }

    #[test]
    fn test_single_level() {
        let dz = RegimeGrowth::default().with_levels(1).generate().unwrap();
        assert_eq!(dz, vec![8.0]);
    }

    #[test]
    fn test_zero_levels_rejected() {
        let err = RegimeGrowth::default().with_levels(0).generate().unwrap_err();
        assert!(matches!(err, LevelError::Configuration(_)));
    }

    #[test]
    fn test_non_positive_constants_rejected() {
        let cases = [
            RegimeGrowth::default().with_seed_thickness(0.0),
            RegimeGrowth::default().with_thin_regime(-80.0, 3.0),
            RegimeGrowth::default().with_thin_regime(80.0, 0.0),
            RegimeGrowth::default().with_mid_regime(0.0, 0.02575),
            RegimeGrowth::default().with_mid_regime(500.0, -0.1),
            RegimeGrowth::default().with_deep_regime(0.0, 0.005),
            RegimeGrowth::default().with_deep_regime(1.04, f64::NAN),
        ];
        for growth in cases {
            assert!(growth.validate().is_err(), "{:?} should be rejected", growth);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let growth = RegimeGrowth::default();
        assert_eq!(growth.generate().unwrap(), growth.generate().unwrap());
    }

    #[test]
    fn test_smoothing_keeps_length_and_integers() {
        let dz = RegimeGrowth::default().with_smoothing(3).generate().unwrap();
        assert_eq!(dz.len(), 127);
        assert!(dz.iter().all(|t| t.fract() == 0.0));
    }

    #[test]
    fn test_description_lists_constants() {
        let description = RegimeGrowth::default().description();
        assert!(description.contains("seed=8.0m"));
        assert!(description.contains("0.02575"));
    }
}

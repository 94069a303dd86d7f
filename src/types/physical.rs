//! Physical quantity newtypes for z-level columns.
//!
//! Layer thicknesses and depths are both plain meters, but they are not
//! interchangeable: a depth is a position in the column, a thickness is
//! the extent of one layer.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

// =============================================================================
// Thickness (extent of one layer)
// =============================================================================

/// Thickness of a single vertical layer (Δz), in meters.
///
/// # Example
///
/// ```
/// use ocean_levels::types::Thickness;
///
/// let dz = Thickness::new(10.0);
/// assert_eq!(dz.meters(), 10.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Thickness(f64);

impl Thickness {
    /// Create a new thickness value.
    #[inline]
    pub const fn new(meters: f64) -> Self {
        Self(meters)
    }

    /// No thickness. Used as the "layer above the surface".
    pub const ZERO: Self = Self(0.0);

    /// Get the thickness in meters.
    #[inline]
    pub fn meters(self) -> f64 {
        self.0
    }

    /// Round to whole meters, ties to even.
    #[inline]
    pub fn round_to_meter(self) -> Self {
        Self(self.0.round_ties_even())
    }

    /// Larger of two thicknesses.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

impl fmt::Display for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}m", self.0)
    }
}

impl From<Thickness> for f64 {
    #[inline]
    fn from(dz: Thickness) -> f64 {
        dz.0
    }
}

impl Sub for Thickness {
    type Output = f64;

    #[inline]
    fn sub(self, rhs: Self) -> f64 {
        self.0 - rhs.0
    }
}

// =============================================================================
// Depth (distance below the surface, always positive)
// =============================================================================

/// Depth below the sea surface, in meters.
///
/// Depth is **always positive** and grows downward. The bottom of a
/// 10 m surface layer sits at `Depth(10.0)`.
///
/// # Example
///
/// ```
/// use ocean_levels::types::{Depth, Thickness};
///
/// let bottom = Depth::SURFACE + Thickness::new(12.0);
/// assert_eq!(bottom.meters(), 12.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Depth(f64);

impl Depth {
    /// Create a new depth value.
    #[inline]
    pub fn new(meters: f64) -> Self {
        debug_assert!(meters >= 0.0, "Depth must be non-negative, got {}", meters);
        Self(meters)
    }

    /// The sea surface.
    pub const SURFACE: Self = Self(0.0);

    /// Get the depth in meters.
    #[inline]
    pub fn meters(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}m", self.0)
    }
}

impl From<Depth> for f64 {
    #[inline]
    fn from(d: Depth) -> f64 {
        d.0
    }
}

impl Add<Thickness> for Depth {
    type Output = Depth;

    #[inline]
    fn add(self, dz: Thickness) -> Depth {
        Depth(self.0 + dz.0)
    }
}

impl AddAssign<Thickness> for Depth {
    #[inline]
    fn add_assign(&mut self, dz: Thickness) {
        self.0 += dz.0;
    }
}

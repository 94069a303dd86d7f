//! Strongly-typed layer index.

use std::fmt;

/// Zero-based layer index; layer 0 touches the sea surface.
///
/// Reports number layers from 1, see [`LevelIndex::number`].
///
/// # Example
///
/// ```
/// use ocean_levels::types::LevelIndex;
///
/// let k = LevelIndex::new(0);
/// assert_eq!(k.number(), 1);
/// assert_eq!(k.next().get(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct LevelIndex(usize);

impl LevelIndex {
    /// Create a new index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Surface layer.
    pub const SURFACE: Self = Self(0);

    /// Get the raw index value.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// One-based layer number as printed in reports.
    #[inline]
    pub const fn number(self) -> usize {
        self.0 + 1
    }

    /// Increment index by one.
    #[inline]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for LevelIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {}", self.0)
    }
}

impl From<usize> for LevelIndex {
    #[inline]
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<LevelIndex> for usize {
    #[inline]
    fn from(idx: LevelIndex) -> usize {
        idx.0
    }
}

//! Strongly-typed domain types for safer APIs.
//!
//! Thicknesses, depths and layer indices are all numbers; the newtypes
//! keep them from being swapped at call sites.
//!
//! # Example
//!
//! ```
//! use ocean_levels::types::{Depth, LevelIndex, Thickness};
//!
//! let mut depth = Depth::SURFACE;
//! depth += Thickness::new(8.0);
//! assert_eq!(depth.meters(), 8.0);
//! assert_eq!(LevelIndex::new(4).number(), 5);
//! ```

mod indices;
mod physical;

pub use indices::LevelIndex;
pub use physical::{Depth, Thickness};

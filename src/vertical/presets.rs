//! Named level presets.
//!
//! Besides the reference growth rule, several hand-tuned thickness tables
//! have been used for global z-level configurations. They are kept here as
//! fixed tables so runs can be compared against them.
//!
//! | preset      | levels | total depth |
//! |-------------|--------|-------------|
//! | `Reference` | 127    | 5420 m      |
//! | `Levels40`  | 40     | 6020 m      |
//! | `Levels56`  | 56     | 6132 m      |
//! | `Levels64`  | 64     | 6017 m      |
//! | `Levels128` | 128    | 6362 m      |
//! | `Legacy64`  | 64     | 6013 m      |
//! | `Tuned64`   | 64     | 5722 m      |
//!
//! # Example
//!
//! ```
//! use ocean_levels::vertical::LevelPreset;
//!
//! let grid = LevelPreset::Levels40.grid().unwrap();
//! assert_eq!(grid.n_levels(), 40);
//! assert_eq!(grid.total_depth(), 6020.0);
//! ```

use std::fmt;

use super::growth::RegimeGrowth;
use super::levels::LevelGrid;
use super::profile::LevelProfile;
use crate::error::{LevelError, Result};

// =============================================================================
// Tabulated Levels
// =============================================================================

/// Fixed thickness table used as a level profile.
///
/// The table is returned as-is; asking for a different number of levels
/// than the table holds is a configuration error.
#[derive(Clone, Copy, Debug)]
pub struct TabulatedLevels {
    name: &'static str,
    table: &'static [f64],
}

impl TabulatedLevels {
    /// Wrap a static thickness table.
    pub const fn new(name: &'static str, table: &'static [f64]) -> Self {
        Self { name, table }
    }

    /// Number of layers in the table.
    #[inline]
    pub fn n_levels(&self) -> usize {
        self.table.len()
    }

    /// The raw table.
    #[inline]
    pub fn table(&self) -> &'static [f64] {
        self.table
    }
}

impl LevelProfile for TabulatedLevels {
    fn thicknesses(&self, n_levels: usize) -> Result<Vec<f64>> {
        if n_levels != self.table.len() {
            return Err(LevelError::configuration(format!(
                "{} table has {} levels, {} requested",
                self.name,
                self.table.len(),
                n_levels
            )));
        }
        Ok(self.table.to_vec())
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> String {
        format!(
            "Tabulated {} ({} levels, {:.0}m)",
            self.name,
            self.table.len(),
            self.table.iter().sum::<f64>()
        )
    }
}

// =============================================================================
// Presets
// =============================================================================

/// Named level configurations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LevelPreset {
    /// Default [`RegimeGrowth`] constants, 127 levels.
    Reference,
    /// 40 levels to 6020 m.
    Levels40,
    /// 56 levels to 6132 m.
    Levels56,
    /// 64 levels to 6017 m.
    Levels64,
    /// 128 levels to 6362 m, with quarter-meter steps near the surface.
    Levels128,
    /// 64 levels to 6013 m with a ten-layer 10 m surface block.
    Legacy64,
    /// 64 levels to 5722 m with smooth growth below 100 m.
    Tuned64,
}

impl LevelPreset {
    /// All presets, reference first.
    pub const ALL: [LevelPreset; 7] = [
        LevelPreset::Reference,
        LevelPreset::Levels40,
        LevelPreset::Levels56,
        LevelPreset::Levels64,
        LevelPreset::Levels128,
        LevelPreset::Legacy64,
        LevelPreset::Tuned64,
    ];

    /// Preset name as used in logs.
    pub fn name(self) -> &'static str {
        match self {
            LevelPreset::Reference => "reference",
            LevelPreset::Levels40 => "levels_40",
            LevelPreset::Levels56 => "levels_56",
            LevelPreset::Levels64 => "levels_64",
            LevelPreset::Levels128 => "levels_128",
            LevelPreset::Legacy64 => "legacy_64",
            LevelPreset::Tuned64 => "tuned_64",
        }
    }

    /// Number of levels the preset produces.
    pub fn n_levels(self) -> usize {
        match self.table() {
            Some(table) => table.n_levels(),
            None => RegimeGrowth::default().n_levels,
        }
    }

    /// Thickness table, or `None` for the growth-rule preset.
    pub fn table(self) -> Option<TabulatedLevels> {
        let table: &'static [f64] = match self {
            LevelPreset::Reference => return None,
            LevelPreset::Levels40 => &LEVELS_40,
            LevelPreset::Levels56 => &LEVELS_56,
            LevelPreset::Levels64 => &LEVELS_64,
            LevelPreset::Levels128 => &LEVELS_128,
            LevelPreset::Legacy64 => &LEGACY_64,
            LevelPreset::Tuned64 => &TUNED_64,
        };
        Some(TabulatedLevels::new(self.name(), table))
    }

    /// Layer thicknesses of the preset, surface first.
    pub fn thicknesses(self) -> Result<Vec<f64>> {
        match self.table() {
            Some(table) => table.thicknesses(table.n_levels()),
            None => RegimeGrowth::default().generate(),
        }
    }

    /// Build the full level grid for the preset.
    pub fn grid(self) -> Result<LevelGrid> {
        match self.table() {
            Some(table) => LevelGrid::new(table.n_levels(), table),
            None => {
                let growth = RegimeGrowth::default();
                LevelGrid::new(growth.n_levels, growth)
            }
        }
    }
}

impl fmt::Display for LevelPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Tables
// =============================================================================

const LEVELS_40: [f64; 40] = [
    12.0, 10.0, 10.0, 10.0, 10.0, 10.0, 13.0, 15.0, 20.0, 25.0,
    30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 70.0, 80.0, 90.0,
    100.0, 110.0, 120.0, 130.0, 140.0, 150.0, 170.0, 180.0, 190.0, 200.0,
    220.0, 250.0, 270.0, 300.0, 350.0, 400.0, 450.0, 500.0, 500.0, 600.0,
];

const LEVELS_56: [f64; 56] = [
    12.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 11.0, 11.0, 12.0,
    13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 20.0, 22.0, 24.0, 26.0,
    29.0, 33.0, 36.0, 39.0, 42.0, 45.0, 48.0, 52.0, 56.0, 60.0,
    64.0, 68.0, 72.0, 76.0, 80.0, 85.0, 90.0, 95.0, 100.0, 106.0,
    115.0, 130.0, 145.0, 160.0, 175.0, 190.0, 210.0, 230.0, 260.0, 290.0,
    330.0, 370.0, 410.0, 460.0, 510.0, 580.0,
];

const LEVELS_64: [f64; 64] = [
    12.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 11.0, 11.0, 12.0,
    13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 19.0, 20.0, 22.0, 24.0,
    26.0, 28.0, 30.0, 33.0, 36.0, 39.0, 42.0, 45.0, 48.0, 52.0,
    56.0, 60.0, 64.0, 68.0, 73.0, 78.0, 83.0, 88.0, 94.0, 100.0,
    106.0, 112.0, 118.0, 125.0, 132.0, 139.0, 147.0, 155.0, 163.0, 172.0,
    181.0, 190.0, 200.0, 210.0, 220.0, 230.0, 240.0, 250.0, 250.0, 250.0,
    250.0, 250.0, 250.0, 250.0,
];

const LEVELS_128: [f64; 128] = [
    11.0, 9.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0,
    8.0, 8.0, 8.0, 8.25, 8.5, 8.75, 9.0, 9.25, 9.5, 9.75,
    10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0,
    10.5, 11.0, 11.5, 12.0, 12.5, 13.0, 13.5, 14.0, 14.5, 15.0,
    15.5, 16.0, 16.5, 17.0, 17.5, 18.0, 18.5, 19.0, 19.5, 20.0,
    20.5, 21.0, 21.5, 22.0, 22.5, 23.0, 23.5, 24.0, 24.5, 25.0,
    25.5, 26.0, 26.5, 27.0, 28.5, 29.0, 29.5, 30.0, 30.5, 31.0,
    31.0, 32.0, 33.0, 34.0, 35.0, 36.0, 37.0, 38.0, 39.0, 40.0,
    42.0, 44.0, 46.0, 48.0, 50.0, 52.0, 54.0, 56.0, 58.0, 60.0,
    62.0, 64.0, 66.0, 68.0, 70.0, 72.0, 74.0, 76.0, 78.0, 80.0,
    82.0, 84.0, 86.0, 88.0, 90.0, 92.0, 94.0, 96.0, 98.0, 100.0,
    102.0, 104.0, 106.0, 108.0, 110.0, 112.0, 114.0, 116.0, 118.0, 200.0,
    200.0, 200.0, 200.0, 200.0, 200.0, 200.0, 200.0, 200.0,
];

const LEGACY_64: [f64; 64] = [
    12.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0,
    13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 19.0, 20.0, 22.0, 24.0,
    26.0, 28.0, 30.0, 33.0, 36.0, 39.0, 42.0, 45.0, 48.0, 52.0,
    56.0, 60.0, 64.0, 68.0, 73.0, 78.0, 83.0, 88.0, 94.0, 100.0,
    106.0, 112.0, 118.0, 125.0, 132.0, 139.0, 147.0, 155.0, 163.0, 172.0,
    181.0, 190.0, 200.0, 210.0, 220.0, 230.0, 240.0, 250.0, 250.0, 250.0,
    250.0, 250.0, 250.0, 250.0,
];

const TUNED_64: [f64; 64] = [
    12.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0,
    11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 20.0, 22.0,
    24.0, 26.0, 28.0, 30.0, 32.0, 35.0, 38.0, 41.0, 45.0, 49.0,
    53.0, 58.0, 62.0, 66.0, 71.0, 75.0, 81.0, 87.0, 91.0, 97.0,
    104.0, 111.0, 118.0, 125.0, 132.0, 138.0, 145.0, 152.0, 160.0, 167.0,
    175.0, 182.0, 188.0, 195.0, 201.0, 208.0, 213.0, 219.0, 224.0, 230.0,
    235.0, 241.0, 250.0, 260.0,
];

// =============================================================================
// Tests
// =============================================================================

//! Integration tests for level generation, accumulation and reporting.
//!
//! Checks the reference column against known values and the documented
//! 64-level output, plus the structural properties every column must have.

use ocean_levels::{
    write_report, LevelGrid, LevelIndex, LevelPreset, LevelProfile, Regime, RegimeGrowth,
    Depth, Thickness,
};

/// Documented midpoint depths of the tuned 64-level set.
const TUNED_64_MIDPOINTS: [f64; 64] = [
    6.0, 17.0, 27.0, 37.0, 47.0, 57.0, 67.0, 77.0, 87.0, 97.0, 107.5, 119.0, 131.5, 145.0, 159.5,
    175.0, 191.5, 209.0, 228.0, 249.0, 272.0, 297.0, 324.0, 353.0, 384.0, 417.5, 454.0, 493.5,
    536.5, 583.5, 634.5, 690.0, 750.0, 814.0, 882.5, 955.5, 1033.5, 1117.5, 1206.5, 1300.5,
    1401.0, 1508.5, 1623.0, 1744.5, 1873.0, 2008.0, 2149.5, 2298.0, 2454.0, 2617.5, 2788.5,
    2967.0, 3152.0, 3343.5, 3541.5, 3746.0, 3956.5, 4172.5, 4394.0, 4621.0, 4853.5, 5091.5,
    5337.0, 5592.0,
];

fn reference_grid() -> LevelGrid {
    let growth = RegimeGrowth::default();
    LevelGrid::new(growth.n_levels, growth).unwrap()
}

#[test]
fn test_tuned_64_midpoints() {
    let grid = LevelPreset::Tuned64.grid().unwrap();
    assert_eq!(grid.midpoint_depths(), &TUNED_64_MIDPOINTS[..]);
    assert_eq!(grid.total_depth(), 5722.0);
}

#[test]
fn test_legacy_surface_block() {
    let grid = LevelPreset::Legacy64.grid().unwrap();
    assert_eq!(
        &grid.thicknesses()[..10],
        &[12.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0]
    );
    assert_eq!(
        &grid.bottom_depths()[..10],
        &[12.0, 22.0, 32.0, 42.0, 52.0, 62.0, 72.0, 82.0, 92.0, 102.0]
    );
    assert_eq!(
        &grid.midpoint_depths()[..10],
        &[6.0, 17.0, 27.0, 37.0, 47.0, 57.0, 67.0, 77.0, 87.0, 97.0]
    );
}

#[test]
fn test_reference_second_layer() {
    let growth = RegimeGrowth::default();
    let seed = growth.seed();
    let step = growth.step(seed.thickness, seed.depth, LevelIndex::new(1));
    assert_eq!(step.regime, Regime::NearSurface);
    assert_eq!(step.thickness, Thickness::new(3.0));

    let grid = reference_grid();
    assert_eq!(grid.thicknesses()[1], 3.0);
}

#[test]
fn test_reference_column_shape() {
    let grid = reference_grid();
    assert_eq!(grid.n_levels(), 127);
    assert_eq!(grid.thicknesses().len(), 127);
    assert_eq!(grid.bottom_depths().len(), 127);
    assert_eq!(grid.midpoint_depths().len(), 127);
    assert_eq!(grid.total_depth(), 5420.0);
    assert!(grid.thicknesses().iter().all(|t| t.fract() == 0.0));
}

#[test]
fn test_reference_invariants() {
    let grid = reference_grid();
    let bottom = grid.bottom_depths();
    let mid = grid.midpoint_depths();

    for k in 1..grid.n_levels() {
        assert!(bottom[k] > bottom[k - 1], "bottom depth not increasing at {}", k);
    }
    for k in 0..grid.n_levels() {
        assert!(mid[k] <= bottom[k], "midpoint below bottom at {}", k);
    }
    assert_eq!(mid[0], grid.thicknesses()[0] * 0.5);
}

#[test]
fn test_determinism() {
    let a = reference_grid();
    let b = reference_grid();
    assert_eq!(a.thicknesses(), b.thicknesses());
    assert_eq!(a.bottom_depths(), b.bottom_depths());
    assert_eq!(a.midpoint_depths(), b.midpoint_depths());

    let mut out_a = Vec::new();
    let mut out_b = Vec::new();
    write_report(&a, &mut out_a).unwrap();
    write_report(&b, &mut out_b).unwrap();
    assert_eq!(out_a, out_b);
}

#[test]
fn test_rounding_ties_to_even() {
    let growth = RegimeGrowth::default();

    // 25 * 1.04 + 500 * 0.005 is exactly 28.5; ties to even gives 28, not 29
    let step = growth.step(Thickness::new(25.0), Depth::new(500.0), LevelIndex::new(80));
    assert_eq!(step.regime, Regime::Deep);
    assert_eq!(step.thickness.meters(), 28.0);

    // The reference run meets an exact tie at layer 121 (295.5 -> 296)
    let grid = reference_grid();
    assert_eq!(grid.thicknesses()[120], 269.0);
    assert_eq!(grid.bottom_depths()[120], 3148.0);
    assert_eq!(grid.thicknesses()[121], 296.0);
}

#[test]
fn test_configuration_errors() {
    assert!(RegimeGrowth::default().with_levels(0).generate().is_err());
    assert!(RegimeGrowth::default().with_thin_regime(0.0, 3.0).generate().is_err());
    assert!(RegimeGrowth::default().with_mid_regime(-500.0, 0.02575).generate().is_err());
    assert!(LevelGrid::new(10, LevelPreset::Levels40.table().unwrap()).is_err());
}

#[test]
fn test_every_preset_reports() {
    for preset in LevelPreset::ALL {
        let grid = preset.grid().unwrap();
        let mut out = Vec::new();
        write_report(&grid, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), preset.n_levels() + 2, "{}", preset);
    }
}

#[test]
fn test_shorter_reference_column_is_prefix() {
    let full = RegimeGrowth::default().generate().unwrap();
    let short = RegimeGrowth::default().thicknesses(64).unwrap();
    assert_eq!(&full[..64], &short[..]);
}

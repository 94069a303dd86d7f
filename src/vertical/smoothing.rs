//! Optional smoothing of a generated thickness column.
//!
//! A layer is relaxed toward its neighbours when the thickness increment
//! below it is smaller than the increment above it, which removes the
//! occasional stall in a growing column.

/// Smooth `thickness` in place with `passes` sweeps.
///
/// Each sweep visits layers `start + 1 ..= n - 2` in order, comparing
/// increments of the thicknesses rounded to whole meters (ties to even).
/// Where `dz[k+1] - dz[k] < dz[k] - dz[k-1]`, the layer is replaced by
/// `0.6 * dz[k-1] + 0.4 * dz[k+1]`. Updates are visible to the next layer
/// in the same sweep.
///
/// Columns with fewer than three layers are left unchanged.
///
/// # Example
///
/// ```
/// use ocean_levels::vertical::smooth_thicknesses;
///
/// let mut dz = vec![10.0, 10.0, 20.0, 21.0, 40.0];
/// smooth_thicknesses(&mut dz, 1, 0);
/// assert_eq!(dz[2], 14.4);
/// ```
pub fn smooth_thicknesses(thickness: &mut [f64], passes: usize, start: usize) {
    let n = thickness.len();
    if n < 3 {
        return;
    }

    for _ in 0..passes {
        for k in (start + 1)..(n - 1) {
            let above = thickness[k - 1].round_ties_even();
            let here = thickness[k].round_ties_even();
            let below = thickness[k + 1].round_ties_even();

            if below - here < here - above {
                thickness[k] = thickness[k - 1] * 0.6 + thickness[k + 1] * 0.4;
            }
        }
    }
}

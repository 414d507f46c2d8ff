//! Gaussian kernel density estimation.
//!
//! The estimate is evaluated on a fixed grid of equally spaced abscissas that
//! extends the data range by 10% on each side, which is what a density (violin
//! or area) chart plots directly.
//!
//! Evaluation is a direct sum over every sample for every grid point, so the
//! cost is `O(points * n)`.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::descriptive;

/// Number of grid points evaluated when the caller does not pick one.
pub const DEFAULT_DENSITY_POINTS: usize = 50;

/// Fraction of the data range added as padding on each side of the grid.
const GRID_PADDING: f64 = 0.1;

/// One evaluated point of a density curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityPoint {
    /// Grid abscissa.
    pub x: f64,
    /// Estimated density at `x`.
    pub density: f64,
}

/// Silverman's rule-of-thumb bandwidth, `1.06 * std_dev * n^(-1/5)`.
///
/// Returns `0.0` for an empty sample or one without spread.
///
/// # Examples
///
/// ```
/// use vizstats::density::silverman_bandwidth;
///
/// let h = silverman_bandwidth(&[1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert!(h > 0.0);
/// assert_eq!(silverman_bandwidth(&[]), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn silverman_bandwidth(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    1.06 * descriptive::standard_deviation(values) * (values.len() as f64).powf(-0.2)
}

/// Estimates the density of `values` with a Gaussian kernel.
///
/// # Arguments
///
/// * `values` - The sample. Order does not matter.
/// * `bandwidth` - Kernel bandwidth; Silverman's rule when `None`.
/// * `points` - Grid size; [`DEFAULT_DENSITY_POINTS`] when `None`.
///
/// # Returns
///
/// `points` density points spanning `[min - 0.1 * range, max + 0.1 * range]`
/// in ascending `x` order. An empty sample returns an empty vector.
///
/// A bandwidth that is not strictly positive (a constant sample under
/// Silverman's rule, or an explicit zero) is replaced by Silverman's rule with
/// `|mean|` standing in for the standard deviation, or by `1.0` when that is
/// not positive either, so the curve stays finite and follows the scale of the
/// data. A single grid point sits on the lower bound.
///
/// # Examples
///
/// ```
/// use vizstats::density::kernel_density;
///
/// let curve = kernel_density(&[1.0, 2.0, 3.0, 4.0, 5.0], None, None);
/// assert_eq!(curve.len(), 50);
/// assert!((curve[0].x - 0.6).abs() < 1e-12);
/// assert!((curve[49].x - 5.4).abs() < 1e-12);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn kernel_density(
    values: &[f64],
    bandwidth: Option<f64>,
    points: Option<usize>,
) -> Vec<DensityPoint> {
    let points = points.unwrap_or(DEFAULT_DENSITY_POINTS);
    if values.is_empty() || points == 0 {
        return vec![];
    }

    let mut bandwidth = bandwidth.unwrap_or_else(|| silverman_bandwidth(values));
    if bandwidth.is_nan() || bandwidth <= 0.0 {
        bandwidth = fallback_bandwidth(values);
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let padding = (max - min) * GRID_PADDING;
    let start = min - padding;
    let end = max + padding;
    let step = if points > 1 {
        (end - start) / (points - 1) as f64
    } else {
        0.0
    };

    let norm = values.len() as f64 * bandwidth;
    (0..points)
        .map(|i| {
            let x = start + i as f64 * step;
            let sum = values
                .iter()
                .map(|&v| gaussian_kernel((x - v) / bandwidth))
                .sum::<f64>();
            DensityPoint {
                x,
                density: sum / norm,
            }
        })
        .collect()
}

/// Bandwidth for a sample without spread, scaled by the magnitude of its values.
#[expect(clippy::cast_precision_loss)]
fn fallback_bandwidth(values: &[f64]) -> f64 {
    let scaled = 1.06 * descriptive::mean(values).abs() * (values.len() as f64).powf(-0.2);
    if scaled.is_finite() && scaled > 0.0 {
        scaled
    } else {
        1.0
    }
}

/// Standard normal density.
fn gaussian_kernel(u: f64) -> f64 {
    (-0.5 * u * u).exp() / (2.0 * PI).sqrt()
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::SeedableRng as _;
    use rand_distr::{Distribution as _, Normal};
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn test_grid_bounds_and_size() {
        let curve = kernel_density(&[1.0, 2.0, 3.0, 4.0, 5.0], None, None);

        assert_eq!(curve.len(), DEFAULT_DENSITY_POINTS);
        assert_abs_diff_eq!(curve[0].x, 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(curve[curve.len() - 1].x, 5.4, epsilon = 1e-12);
        assert!(curve.iter().all(|p| p.density >= 0.0));
        assert!(curve.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn test_custom_points_and_bandwidth() {
        let curve = kernel_density(&[0.0, 10.0], Some(2.0), Some(11));
        assert_eq!(curve.len(), 11);
        assert_abs_diff_eq!(curve[0].x, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(curve[10].x, 11.0, epsilon = 1e-12);

        // symmetric sample, symmetric curve
        for i in 0..11 {
            assert_relative_eq!(curve[i].density, curve[10 - i].density, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_single_value_density_matches_kernel() {
        let curve = kernel_density(&[2.0], Some(0.5), Some(1));
        assert_eq!(curve.len(), 1);
        assert_eq!(curve[0].x, 2.0);
        assert_relative_eq!(curve[0].density, gaussian_kernel(0.0) / 0.5);
    }

    #[test]
    fn test_constant_sample_bandwidth_follows_scale() {
        let curve = kernel_density(&[3.0, 3.0, 3.0], None, Some(5));
        let bandwidth = 1.06 * 3.0 * 3.0_f64.powf(-0.2);
        assert_eq!(curve.len(), 5);
        for point in &curve {
            assert_eq!(point.x, 3.0);
            assert_relative_eq!(point.density, gaussian_kernel(0.0) / bandwidth);
        }

        let small = kernel_density(&[1e-6; 3], None, Some(1))[0].density;
        let large = kernel_density(&[1e6; 3], None, Some(1))[0].density;
        assert_relative_eq!(small * 1e-6, large * 1e6, max_relative = 1e-9);
    }

    #[test]
    fn test_zero_valued_sample_falls_back_to_unit_bandwidth() {
        let curve = kernel_density(&[0.0, 0.0], Some(0.0), Some(3));
        for point in &curve {
            assert_relative_eq!(point.density, gaussian_kernel(0.0));
        }
    }

    #[test]
    fn test_empty_inputs() {
        assert!(kernel_density(&[], None, None).is_empty());
        assert!(kernel_density(&[1.0, 2.0], None, Some(0)).is_empty());
    }

    #[test]
    fn test_density_integrates_to_about_one() {
        let normal = Normal::new(0.0, 1.0).unwrap();
        let mut rng = Pcg64::seed_from_u64(42);
        let values = (0..500).map(|_| normal.sample(&mut rng)).collect::<Vec<_>>();

        let curve = kernel_density(&values, None, Some(400));
        let area = curve
            .windows(2)
            .map(|w| (w[1].x - w[0].x) * (w[0].density + w[1].density) / 2.0)
            .sum::<f64>();

        // The grid only pads 10% of the range, so a little tail mass is cut off.
        assert!(area > 0.9 && area < 1.01, "area = {area}");
    }

    #[test]
    fn test_silverman_bandwidth_value() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let expected = 1.06 * 2.0_f64.sqrt() * 5.0_f64.powf(-0.2);
        assert_relative_eq!(silverman_bandwidth(&values), expected);
    }
}

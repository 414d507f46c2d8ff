//! Normal Q-Q plot support.
//!
//! Sorted sample values are paired with the standard normal quantiles of their
//! plotting positions `(i + 0.5) / n`. The quantiles come from a three-region
//! rational approximation of the inverse normal CDF (relative error around
//! `1e-9` in the central region, looser in the tails).

use serde::{Deserialize, Serialize};

/// Boundary between the tail and central regions of the approximation.
const P_LOW: f64 = 0.02425;
const P_HIGH: f64 = 1.0 - P_LOW;

// Central region numerator/denominator coefficients.
const A: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_69e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239,
];
const B: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];
// Tail regions.
const C: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838,
    -2.549_732_539_343_734,
    4.374_664_141_464_968,
    2.938_163_982_698_783,
];
const D: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_641_531,
    3.754_408_661_907_416,
];

/// One point of a normal Q-Q plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QqPoint {
    /// Standard normal quantile of the plotting position.
    pub theoretical: f64,
    /// Observed value at this rank.
    pub sample: f64,
}

/// Builds Q-Q plot points for a sample against the standard normal.
///
/// Points are returned in ascending sample order; their `theoretical` values
/// are non-decreasing. An empty sample returns an empty vector.
///
/// # Examples
///
/// ```
/// use vizstats::qq::qq_plot_data;
///
/// let points = qq_plot_data(&[3.0, 1.0, 2.0]);
/// assert_eq!(points[0].sample, 1.0);
/// assert_eq!(points[1].theoretical, 0.0);
/// assert!(points[0].theoretical < 0.0 && points[2].theoretical > 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn qq_plot_data(values: &[f64]) -> Vec<QqPoint> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len() as f64;
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, sample)| {
            let p = (i as f64 + 0.5) / n;
            QqPoint {
                theoretical: inverse_normal_cdf(p),
                sample,
            }
        })
        .collect()
}

/// Approximate quantile function of the standard normal distribution.
///
/// Returns `-inf` for `p <= 0`, `+inf` for `p >= 1` and NaN for NaN.
///
/// # Examples
///
/// ```
/// use vizstats::qq::inverse_normal_cdf;
///
/// assert_eq!(inverse_normal_cdf(0.5), 0.0);
/// assert!((inverse_normal_cdf(0.975) - 1.959964).abs() < 1e-6);
/// assert!((inverse_normal_cdf(0.01) + 2.326348).abs() < 1e-6);
/// ```
#[must_use]
pub fn inverse_normal_cdf(p: f64) -> f64 {
    if p.is_nan() {
        return f64::NAN;
    }
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }

    if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        tail(q)
    } else if p <= P_HIGH {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -tail(q)
    }
}

/// Lower-tail rational function of `q = sqrt(-2 ln p)`.
fn tail(q: f64) -> f64 {
    (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
        / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_inverse_cdf_known_values() {
        assert_eq!(inverse_normal_cdf(0.5), 0.0);
        assert_abs_diff_eq!(inverse_normal_cdf(0.841_344_746), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(inverse_normal_cdf(0.975), 1.959_963_985, epsilon = 1e-6);
        assert_abs_diff_eq!(inverse_normal_cdf(0.995), 2.575_829_304, epsilon = 1e-6);
        // tail regions
        assert_abs_diff_eq!(inverse_normal_cdf(0.001), -3.090_232_306, epsilon = 1e-6);
        assert_abs_diff_eq!(inverse_normal_cdf(0.999), 3.090_232_306, epsilon = 1e-6);
    }

    #[test]
    fn test_inverse_cdf_symmetry_across_regions() {
        for p in [0.001, 0.01, 0.02425, 0.1, 0.3] {
            assert_abs_diff_eq!(
                inverse_normal_cdf(p),
                -inverse_normal_cdf(1.0 - p),
                epsilon = 1e-8
            );
        }
    }

    #[test]
    fn test_inverse_cdf_boundaries() {
        assert_eq!(inverse_normal_cdf(0.0), f64::NEG_INFINITY);
        assert_eq!(inverse_normal_cdf(-1.0), f64::NEG_INFINITY);
        assert_eq!(inverse_normal_cdf(1.0), f64::INFINITY);
        assert!(inverse_normal_cdf(f64::NAN).is_nan());
    }

    #[test]
    fn test_qq_plotting_positions() {
        let points = qq_plot_data(&[40.0, 10.0, 30.0, 20.0]);
        let samples = points.iter().map(|p| p.sample).collect::<Vec<_>>();
        assert_eq!(samples, vec![10.0, 20.0, 30.0, 40.0]);

        for (i, point) in points.iter().enumerate() {
            let p = (i as f64 + 0.5) / 4.0;
            assert_eq!(point.theoretical, inverse_normal_cdf(p));
        }
        assert_abs_diff_eq!(points[0].theoretical, -points[3].theoretical, epsilon = 1e-9);
    }

    #[test]
    fn test_qq_empty_and_single() {
        assert!(qq_plot_data(&[]).is_empty());
        assert_eq!(
            qq_plot_data(&[5.0]),
            vec![QqPoint {
                theoretical: 0.0,
                sample: 5.0
            }]
        );
    }

    proptest! {
        #[test]
        fn prop_qq_points_are_monotone(values in prop::collection::vec(-1e6f64..1e6, 0..300)) {
            let points = qq_plot_data(&values);
            prop_assert_eq!(points.len(), values.len());
            for pair in points.windows(2) {
                prop_assert!(pair[0].sample <= pair[1].sample);
                prop_assert!(pair[0].theoretical <= pair[1].theoretical);
            }
        }

        #[test]
        fn prop_inverse_cdf_is_monotone(a in 1e-12f64..1.0, b in 1e-12f64..1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(inverse_normal_cdf(lo) <= inverse_normal_cdf(hi));
        }
    }
}

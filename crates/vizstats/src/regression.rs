//! Ordinary least squares fit of a straight line.

use serde::{Deserialize, Serialize};

use crate::descriptive;

/// A fitted line `y = slope * x + intercept` with per-point diagnostics.
///
/// # Examples
///
/// ```
/// use vizstats::regression::Regression;
///
/// let fit = Regression::fit(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);
/// assert!((fit.slope - 2.0).abs() < 1e-12);
/// assert!(fit.intercept.abs() < 1e-12);
/// assert!((fit.r_squared - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination, `1 - SS_res / SS_tot`.
    pub r_squared: f64,
    /// `y[i] - fitted[i]` for every input pair.
    pub residuals: Vec<f64>,
    /// Predicted `y` for every input `x`.
    pub fitted: Vec<f64>,
}

impl Regression {
    /// Fits paired observations by least squares.
    ///
    /// Degenerate inputs produce defined values instead of errors:
    ///
    /// - empty or mismatched-length inputs yield an all-zero result with empty
    ///   `residuals` and `fitted`; callers validate shape beforehand
    /// - a constant `x` (zero denominator) gives a slope of `0.0`
    /// - a constant `y` (zero total sum of squares) gives an `r_squared` of `0.0`
    #[must_use]
    pub fn fit(x: &[f64], y: &[f64]) -> Self {
        if x.is_empty() || x.len() != y.len() {
            return Self::default();
        }

        let mean_x = descriptive::mean(x);
        let mean_y = descriptive::mean(y);

        let (numerator, denominator) =
            x.iter()
                .zip(y)
                .fold((0.0, 0.0), |(num, den), (&xi, &yi)| {
                    let dx = xi - mean_x;
                    (num + dx * (yi - mean_y), den + dx * dx)
                });

        let slope = if denominator == 0.0 {
            0.0
        } else {
            numerator / denominator
        };
        let intercept = mean_y - slope * mean_x;

        let fitted = x
            .iter()
            .map(|&xi| slope * xi + intercept)
            .collect::<Vec<_>>();
        let residuals = y
            .iter()
            .zip(&fitted)
            .map(|(&yi, &fi)| yi - fi)
            .collect::<Vec<_>>();

        let ss_res = residuals.iter().map(|r| r * r).sum::<f64>();
        let ss_tot = y.iter().map(|&yi| (yi - mean_y).powi(2)).sum::<f64>();
        let r_squared = if ss_tot == 0.0 {
            0.0
        } else {
            1.0 - ss_res / ss_tot
        };

        Self {
            slope,
            intercept,
            r_squared,
            residuals,
            fitted,
        }
    }

    /// Evaluates the fitted line at `x`.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

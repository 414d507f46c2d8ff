use serde::{Deserialize, Serialize};

/// Confidence level used when the caller does not pick one.
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Arithmetic mean of the values, or `0.0` for an empty slice.
///
/// # Examples
///
/// ```
/// use vizstats::descriptive::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
/// assert_eq!(mean(&[]), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by `n`), or `0.0` for an empty slice.
///
/// # Examples
///
/// ```
/// use vizstats::descriptive::standard_deviation;
///
/// assert_eq!(standard_deviation(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), 2.0);
/// assert_eq!(standard_deviation(&[]), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn standard_deviation(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = mean(values);
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Normal-approximation z-score for a two-sided confidence level.
///
/// Only `0.95` (1.96) and `0.99` (2.576) are tabulated; every other level falls
/// back to the 95% score. The table stands in for the t-distribution regardless
/// of sample size.
///
/// # Examples
///
/// ```
/// use vizstats::descriptive::z_score;
///
/// assert_eq!(z_score(0.95), 1.96);
/// assert_eq!(z_score(0.99), 2.576);
/// assert_eq!(z_score(0.90), 1.96);
/// ```
#[must_use]
pub fn z_score(confidence: f64) -> f64 {
    const TABLE: [(f64, f64); 2] = [(0.95, 1.96), (0.99, 2.576)];
    TABLE
        .iter()
        .find_map(|&(level, z)| ((level - confidence).abs() < f64::EPSILON).then_some(z))
        .unwrap_or(1.96)
}

/// Confidence interval for the mean of a sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Sample mean.
    pub mean: f64,
    /// `mean - error`.
    pub lower: f64,
    /// `mean + error`.
    pub upper: f64,
    /// Margin of error, `z * std_dev / sqrt(n)`.
    pub error: f64,
}

impl ConfidenceInterval {
    /// Computes the interval at the given confidence level (default `0.95`).
    ///
    /// The standard error uses the population standard deviation. An empty
    /// sample yields an all-zero interval.
    ///
    /// # Examples
    ///
    /// ```
    /// use vizstats::descriptive::ConfidenceInterval;
    ///
    /// let ci = ConfidenceInterval::new(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], None);
    /// assert_eq!(ci.mean, 5.0);
    /// assert!(ci.lower < ci.mean && ci.mean < ci.upper);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(values: &[f64], confidence: Option<f64>) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let z = z_score(confidence.unwrap_or(DEFAULT_CONFIDENCE));
        let mean = mean(values);
        let std_dev = standard_deviation(values);
        let error = z * std_dev / (values.len() as f64).sqrt();

        Self {
            mean,
            lower: mean - error,
            upper: mean + error,
            error,
        }
    }

    /// Width of the interval, `upper - lower`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

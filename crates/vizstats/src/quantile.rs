use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Multiplier applied to the interquartile range to place the outlier fences.
pub const FENCE_FACTOR: f64 = 1.5;

/// Five-number summary with IQR-based outlier classification.
///
/// This is the record a box plot is drawn from. `min` and `max` are the whiskers:
/// the most extreme values that are *not* outliers, rather than the extremes of
/// the whole sample.
///
/// # Examples
///
/// ```
/// use vizstats::quantile::QuartileSummary;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// let summary = QuartileSummary::new(&values);
///
/// assert_eq!(summary.q1, 3.25);
/// assert_eq!(summary.median, 5.5);
/// assert_eq!(summary.q3, 7.75);
/// assert!(summary.outliers.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuartileSummary {
    /// Smallest value inside the lower fence.
    pub min: f64,
    /// First quartile (25th percentile).
    pub q1: f64,
    /// Second quartile (50th percentile).
    pub median: f64,
    /// Third quartile (75th percentile).
    pub q3: f64,
    /// Largest value inside the upper fence.
    pub max: f64,
    /// Values strictly outside `[q1 - 1.5 * iqr, q3 + 1.5 * iqr]`, ascending.
    pub outliers: Vec<f64>,
    /// Interquartile range, `q3 - q1`.
    pub iqr: f64,
}

impl QuartileSummary {
    /// Computes the summary from unsorted values.
    ///
    /// The values are copied and sorted internally. An empty sample yields a
    /// summary whose fields are all zero and whose outlier list is empty.
    #[must_use]
    pub fn new(values: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Computes the summary from values already sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use vizstats::quantile::QuartileSummary;
    ///
    /// let summary = QuartileSummary::from_sorted(&[1.0, 2.0, 3.0, 4.0, 100.0]);
    /// assert_eq!(summary.outliers, vec![100.0]);
    /// assert_eq!(summary.max, 4.0);
    /// ```
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Self {
        debug_assert!(
            is_ascending(sorted_values),
            "values must be sorted in ascending order"
        );

        let (Some(&first), Some(&last)) = (sorted_values.first(), sorted_values.last()) else {
            return Self::default();
        };

        let q1 = quantile(sorted_values, 0.25);
        let median = quantile(sorted_values, 0.5);
        let q3 = quantile(sorted_values, 0.75);
        let iqr = q3 - q1;
        let lower_fence = q1 - FENCE_FACTOR * iqr;
        let upper_fence = q3 + FENCE_FACTOR * iqr;

        let (retained, outliers): (Vec<f64>, Vec<f64>) = sorted_values
            .iter()
            .partition(|&&v| v >= lower_fence && v <= upper_fence);

        // Every value flagged: whiskers fall back to the raw extremes.
        let min = retained.first().copied().unwrap_or(first);
        let max = retained.last().copied().unwrap_or(last);

        Self {
            min,
            q1,
            median,
            q3,
            max,
            outliers,
            iqr,
        }
    }

    /// Returns the `(lower, upper)` outlier fences.
    #[must_use]
    pub fn fences(&self) -> (f64, f64) {
        (
            self.q1 - FENCE_FACTOR * self.iqr,
            self.q3 + FENCE_FACTOR * self.iqr,
        )
    }
}

/// Computes the `p`-quantile of sorted data by linear interpolation.
///
/// The position `p * (n - 1)` is split into its floor and ceiling ranks and the
/// two order statistics are blended by the fractional part, which is the
/// default ("type 7") method of most statistics packages.
///
/// `p <= 0` returns the first element and `p >= 1` the last. An empty slice
/// returns `0.0`.
///
/// # Examples
///
/// ```
/// use vizstats::quantile::quantile;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(quantile(&values, 0.0), 1.0);
/// assert_eq!(quantile(&values, 0.5), 2.5);
/// assert_eq!(quantile(&values, 1.0), 4.0);
/// assert_eq!(quantile(&[], 0.5), 0.0);
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
#[must_use]
pub fn quantile(sorted_values: &[f64], p: f64) -> f64 {
    debug_assert!(
        is_ascending(sorted_values),
        "values must be sorted in ascending order"
    );

    let (Some(&first), Some(&last)) = (sorted_values.first(), sorted_values.last()) else {
        return 0.0;
    };
    if p <= 0.0 {
        return first;
    }
    if p >= 1.0 {
        return last;
    }

    let index = (sorted_values.len() - 1) as f64 * p;
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;
    let weight = index - lower as f64;
    sorted_values[lower] + (sorted_values[upper] - sorted_values[lower]) * weight
}

/// Numeric ascending order: equal values (`-0.0` and `0.0` included) and
/// unordered NaN pairs pass.
pub(crate) fn is_ascending(values: &[f64]) -> bool {
    values.is_sorted_by(|a, b| a.partial_cmp(b) != Some(Ordering::Greater))
}

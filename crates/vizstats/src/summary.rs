use serde::{Deserialize, Serialize};

use crate::{
    density::{self, DensityPoint},
    descriptive::{self, ConfidenceInterval},
    histogram::Histogram,
    quantile::QuartileSummary,
};

/// Optional parameters for [`DistributionSummary::new`].
///
/// Every `None` falls back to the default of the underlying computation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SummaryOptions {
    /// Confidence level for the interval of the mean (default `0.95`).
    pub confidence: Option<f64>,
    /// Histogram bin count (default: Sturges' rule).
    pub bins: Option<usize>,
    /// Density bandwidth (default: Silverman's rule).
    pub bandwidth: Option<f64>,
    /// Density grid size (default `50`).
    pub density_points: Option<usize>,
}

/// Everything a distribution chart needs about one sample.
///
/// This combines:
/// - count, mean and population standard deviation
/// - the box-plot quartile summary
/// - a confidence interval for the mean
/// - a histogram and a kernel density curve
///
/// # Examples
///
/// ```
/// use vizstats::summary::{DistributionSummary, SummaryOptions};
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// let summary = DistributionSummary::new(&values, SummaryOptions::default());
///
/// assert_eq!(summary.count, 10);
/// assert_eq!(summary.mean, 5.5);
/// assert_eq!(summary.quartiles.median, 5.5);
/// assert_eq!(summary.histogram.total_count(), 10);
/// assert_eq!(summary.density.len(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionSummary {
    /// Number of values in the sample.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Quartiles, whiskers and outliers.
    pub quartiles: QuartileSummary,
    /// Confidence interval for the mean.
    pub confidence: ConfidenceInterval,
    /// Equal-width histogram.
    pub histogram: Histogram,
    /// Gaussian kernel density curve.
    pub density: Vec<DensityPoint>,
}

impl DistributionSummary {
    /// Computes the summary of a sample.
    ///
    /// An empty sample produces zero statistics and empty histogram and
    /// density sequences.
    #[must_use]
    pub fn new(values: &[f64], options: SummaryOptions) -> Self {
        let SummaryOptions {
            confidence,
            bins,
            bandwidth,
            density_points,
        } = options;

        Self {
            count: values.len(),
            mean: descriptive::mean(values),
            std_dev: descriptive::standard_deviation(values),
            quartiles: QuartileSummary::new(values),
            confidence: ConfidenceInterval::new(values, confidence),
            histogram: Histogram::new(values, bins),
            density: density::kernel_density(values, bandwidth, density_points),
        }
    }
}

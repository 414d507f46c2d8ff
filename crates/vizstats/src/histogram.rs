use serde::{Deserialize, Serialize};

/// An equal-width histogram over the full range of a sample.
///
/// Serializes as a bare array of bins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Histogram {
    /// The bins in ascending order, covering `[min, max]` of the sample.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBin {
    /// Display label, `"{start}-{end}"` with one decimal each.
    pub bin: String,
    /// The number of values assigned to this bin.
    pub count: usize,
    /// Inclusive lower edge.
    pub bin_start: f64,
    /// Upper edge. Exclusive except for the last bin, which also holds the maximum.
    pub bin_end: f64,
    /// Midpoint of the bin.
    pub bin_mid: f64,
}

impl Histogram {
    /// Creates a histogram with `num_bins` equal-width bins.
    ///
    /// # Arguments
    ///
    /// * `values` - The data points. Order does not matter.
    /// * `num_bins` - Number of bins; Sturges' rule ([`sturges_bin_count`]) when `None`.
    ///   `Some(0)` is treated as a single bin.
    ///
    /// # Returns
    ///
    /// A histogram whose counts sum to `values.len()`. Each value goes to bin
    /// `floor((value - min) / width)`, clamped to the last bin so the maximum is
    /// kept. When every value is equal the width is zero and all values land in
    /// the first bin. An empty sample produces no bins.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vizstats::histogram::Histogram;
    /// let values = [1.0, 2.0, 2.5, 3.0, 4.0, 5.0];
    /// let histogram = Histogram::new(&values, Some(4));
    ///
    /// assert_eq!(histogram.bins.len(), 4);
    /// assert_eq!(histogram.bins[0].bin, "1.0-2.0");
    /// assert_eq!(histogram.total_count(), values.len());
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn new(values: &[f64], num_bins: Option<usize>) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let num_bins = num_bins
            .unwrap_or_else(|| sturges_bin_count(values.len()))
            .max(1);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let bin_width = (max - min) / num_bins as f64;

        let mut bins = (0..num_bins)
            .map(|i| {
                let bin_start = min + i as f64 * bin_width;
                let bin_end = min + (i + 1) as f64 * bin_width;
                HistogramBin {
                    bin: format!("{bin_start:.1}-{bin_end:.1}"),
                    count: 0,
                    bin_start,
                    bin_end,
                    bin_mid: bin_start + bin_width / 2.0,
                }
            })
            .collect::<Vec<_>>();

        for &value in values {
            // NaN positions and a zero width both saturate to index 0.
            let position = if bin_width > 0.0 {
                ((value - min) / bin_width).floor() as usize
            } else {
                0
            };
            bins[position.min(num_bins - 1)].count += 1;
        }

        Self { bins }
    }

    /// Sum of all bin counts.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

/// Sturges' rule for the number of histogram bins, `ceil(log2(n) + 1)`.
///
/// Samples with fewer than two values get a single bin.
///
/// # Examples
///
/// ```
/// # use vizstats::histogram::sturges_bin_count;
/// assert_eq!(sturges_bin_count(1), 1);
/// assert_eq!(sturges_bin_count(8), 4);
/// assert_eq!(sturges_bin_count(100), 8);
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
#[must_use]
pub fn sturges_bin_count(n: usize) -> usize {
    if n < 2 {
        return 1;
    }
    ((n as f64).log2() + 1.0).ceil() as usize
}

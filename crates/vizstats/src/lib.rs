//! Statistical utilities for distribution charts.
//!
//! Every function here is a pure mapping from a numeric sample (or a pair of
//! samples) to plain records that a chart layer can plot directly. Degenerate
//! input never panics or errors: empty samples produce documented zero or
//! empty results, and non-finite values simply propagate through the
//! arithmetic. Callers that render the output are expected to drop
//! non-finite values beforehand.
//!
//! # Modules
//!
//! - [`quantile`]: interpolated quantiles and box-plot quartiles with IQR outlier fences
//! - [`descriptive`]: mean, population standard deviation and confidence intervals
//! - [`density`]: Gaussian kernel density estimation with Silverman's bandwidth
//! - [`histogram`]: equal-width histograms with Sturges' bin count
//! - [`regression`]: ordinary least squares line fit
//! - [`qq`]: normal Q-Q plot points and the inverse normal CDF
//! - [`beeswarm`]: non-overlapping beeswarm layout and random jitter
//! - [`summary`]: all of the above for a single sample in one record
//!
//! # Examples
//!
//! ## Box plot
//!
//! ```
//! use vizstats::quantile::QuartileSummary;
//!
//! let summary = QuartileSummary::new(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
//! assert_eq!((summary.q1, summary.median, summary.q3), (3.25, 5.5, 7.75));
//! ```
//!
//! ## Histogram
//!
//! ```
//! use vizstats::histogram::Histogram;
//!
//! let values = [0.5, 1.5, 1.7, 2.2, 3.9];
//! let histogram = Histogram::new(&values, None);
//! assert_eq!(histogram.total_count(), values.len());
//! ```
//!
//! ## Trend line
//!
//! ```
//! use vizstats::regression::Regression;
//!
//! let fit = Regression::fit(&[1.0, 1.0, 1.0], &[2.0, 4.0, 6.0]);
//! assert_eq!(fit.slope, 0.0);
//! ```

pub mod beeswarm;
pub mod density;
pub mod descriptive;
pub mod histogram;
pub mod qq;
pub mod quantile;
pub mod regression;
pub mod summary;

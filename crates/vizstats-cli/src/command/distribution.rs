//! Single-column distribution commands.

use vizstats::{
    density::{self, DEFAULT_DENSITY_POINTS},
    descriptive::{ConfidenceInterval, DEFAULT_CONFIDENCE},
    histogram::Histogram,
    qq,
    quantile::QuartileSummary,
    summary::{DistributionSummary, SummaryOptions},
};

use super::ColumnArg;
use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct QuartilesArg {
    #[clap(flatten)]
    pub(crate) column: ColumnArg,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ConfidenceArg {
    #[clap(flatten)]
    pub(crate) column: ColumnArg,
    /// Confidence level; only 0.95 and 0.99 have their own z-score
    #[arg(long, default_value_t = DEFAULT_CONFIDENCE)]
    pub(crate) confidence: f64,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DensityArg {
    #[clap(flatten)]
    pub(crate) column: ColumnArg,
    /// Kernel bandwidth (Silverman's rule when omitted)
    #[arg(long)]
    pub(crate) bandwidth: Option<f64>,
    /// Number of grid points
    #[arg(long, default_value_t = DEFAULT_DENSITY_POINTS)]
    pub(crate) points: usize,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct HistogramArg {
    #[clap(flatten)]
    pub(crate) column: ColumnArg,
    /// Number of bins (Sturges' rule when omitted)
    #[arg(long)]
    pub(crate) bins: Option<usize>,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct QqArg {
    #[clap(flatten)]
    pub(crate) column: ColumnArg,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SummaryArg {
    #[clap(flatten)]
    pub(crate) column: ColumnArg,
    /// Confidence level for the interval of the mean
    #[arg(long, default_value_t = DEFAULT_CONFIDENCE)]
    pub(crate) confidence: f64,
    /// Number of histogram bins (Sturges' rule when omitted)
    #[arg(long)]
    pub(crate) bins: Option<usize>,
    /// Density bandwidth (Silverman's rule when omitted)
    #[arg(long)]
    pub(crate) bandwidth: Option<f64>,
    /// Number of density grid points
    #[arg(long, default_value_t = DEFAULT_DENSITY_POINTS)]
    pub(crate) points: usize,
}

pub(crate) fn run_quartiles(arg: &QuartilesArg) -> anyhow::Result<()> {
    let values = arg.column.read_values()?;
    let summary = QuartileSummary::new(&values);
    tracing::debug!(outliers = summary.outliers.len(), iqr = summary.iqr, "quartiles computed");
    Output::save_json(&summary, arg.column.output())
}

pub(crate) fn run_confidence(arg: &ConfidenceArg) -> anyhow::Result<()> {
    let values = arg.column.read_values()?;
    let interval = ConfidenceInterval::new(&values, Some(arg.confidence));
    Output::save_json(&interval, arg.column.output())
}

pub(crate) fn run_density(arg: &DensityArg) -> anyhow::Result<()> {
    let values = arg.column.read_values()?;
    let curve = density::kernel_density(&values, arg.bandwidth, Some(arg.points));
    Output::save_json(&curve, arg.column.output())
}

pub(crate) fn run_histogram(arg: &HistogramArg) -> anyhow::Result<()> {
    let values = arg.column.read_values()?;
    let histogram = Histogram::new(&values, arg.bins);
    tracing::debug!(bins = histogram.bins.len(), "histogram computed");
    Output::save_json(&histogram, arg.column.output())
}

pub(crate) fn run_qq(arg: &QqArg) -> anyhow::Result<()> {
    let values = arg.column.read_values()?;
    let points = qq::qq_plot_data(&values);
    Output::save_json(&points, arg.column.output())
}

pub(crate) fn run_summary(arg: &SummaryArg) -> anyhow::Result<()> {
    let values = arg.column.read_values()?;
    let options = SummaryOptions {
        confidence: Some(arg.confidence),
        bins: arg.bins,
        bandwidth: arg.bandwidth,
        density_points: Some(arg.points),
    };
    let summary = DistributionSummary::new(&values, options);
    Output::save_json(&summary, arg.column.output())
}

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::{column, util};

use self::{
    distribution::{ConfidenceArg, DensityArg, HistogramArg, QqArg, QuartilesArg, SummaryArg},
    layout::{BeeswarmArg, JitterArg},
    regression::RegressionArg,
};

mod distribution;
mod layout;
mod regression;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log progress to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Quartiles, whiskers and IQR outliers (box plot)
    Quartiles(#[clap(flatten)] QuartilesArg),
    /// Confidence interval of the mean
    Confidence(#[clap(flatten)] ConfidenceArg),
    /// Gaussian kernel density curve
    Density(#[clap(flatten)] DensityArg),
    /// Equal-width histogram
    Histogram(#[clap(flatten)] HistogramArg),
    /// Least squares line through two columns
    Regression(#[clap(flatten)] RegressionArg),
    /// Normal Q-Q plot points
    Qq(#[clap(flatten)] QqArg),
    /// Non-overlapping beeswarm positions
    Beeswarm(#[clap(flatten)] BeeswarmArg),
    /// Random horizontal jitter around a category
    Jitter(#[clap(flatten)] JitterArg),
    /// Quartiles, confidence interval, histogram and density in one record
    Summary(#[clap(flatten)] SummaryArg),
}

/// Input and output locations shared by the single-column commands.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ColumnArg {
    /// Path to the input JSON file (reads stdin when omitted)
    input: Option<PathBuf>,
    /// Object field holding the values, when rows are objects
    #[arg(long)]
    field: Option<String>,
    /// Output file path (writes stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

impl ColumnArg {
    fn read_values(&self) -> anyhow::Result<Vec<f64>> {
        let rows = util::read_json_input(self.input.as_deref())?;
        let column = column::extract_column(&rows, self.field.as_deref())
            .with_context(|| format!("Failed to read values from {}", self.input_name()))?;
        tracing::info!(
            values = column.values.len(),
            dropped = column.dropped,
            "column extracted"
        );
        Ok(column.values)
    }

    fn input_name(&self) -> String {
        self.input
            .as_deref()
            .map_or_else(|| "stdin".to_owned(), |p| p.display().to_string())
    }

    fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.verbose);

    match args.mode {
        Mode::Quartiles(arg) => distribution::run_quartiles(&arg)?,
        Mode::Confidence(arg) => distribution::run_confidence(&arg)?,
        Mode::Density(arg) => distribution::run_density(&arg)?,
        Mode::Histogram(arg) => distribution::run_histogram(&arg)?,
        Mode::Regression(arg) => regression::run(&arg)?,
        Mode::Qq(arg) => distribution::run_qq(&arg)?,
        Mode::Beeswarm(arg) => layout::run_beeswarm(&arg)?,
        Mode::Jitter(arg) => layout::run_jitter(&arg)?,
        Mode::Summary(arg) => distribution::run_summary(&arg)?,
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

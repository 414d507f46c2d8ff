use std::path::PathBuf;

use anyhow::Context;
use vizstats::regression::Regression;

use crate::{column, util, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RegressionArg {
    /// Path to the input JSON file, an array of objects (reads stdin when omitted)
    pub(crate) input: Option<PathBuf>,
    /// Field holding the explanatory variable
    #[arg(long)]
    pub(crate) x_field: String,
    /// Field holding the response variable
    #[arg(long)]
    pub(crate) y_field: String,
    /// Output file path (writes stdout when omitted)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run(arg: &RegressionArg) -> anyhow::Result<()> {
    let rows = util::read_json_input(arg.input.as_deref())?;
    let (xs, ys, dropped) = column::extract_pairs(&rows, &arg.x_field, &arg.y_field)
        .with_context(|| {
            format!(
                "Failed to read '{}' and '{}' columns",
                arg.x_field, arg.y_field
            )
        })?;
    tracing::info!(pairs = xs.len(), dropped, "columns extracted");

    let fit = Regression::fit(&xs, &ys);
    tracing::debug!(
        slope = fit.slope,
        intercept = fit.intercept,
        r_squared = fit.r_squared,
        "line fitted"
    );
    Output::save_json(&fit, arg.output.as_deref())
}

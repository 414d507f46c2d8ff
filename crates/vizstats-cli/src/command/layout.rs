//! Point layout commands for strip and beeswarm plots.

use std::path::PathBuf;

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use vizstats::beeswarm::{self, DEFAULT_JITTER_AMOUNT, DEFAULT_RADIUS};

use super::ColumnArg;
use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct BeeswarmArg {
    #[clap(flatten)]
    pub(crate) column: ColumnArg,
    /// Category index the swarm is centred on
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub(crate) category: f64,
    /// Point radius
    #[arg(long, default_value_t = DEFAULT_RADIUS)]
    pub(crate) radius: f64,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct JitterArg {
    /// Number of positions to draw
    #[arg(long)]
    pub(crate) count: usize,
    /// Category index the positions are scattered around
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub(crate) category: f64,
    /// Total horizontal spread
    #[arg(long, default_value_t = DEFAULT_JITTER_AMOUNT)]
    pub(crate) amount: f64,
    /// Seed for reproducible output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Output file path (writes stdout when omitted)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_beeswarm(arg: &BeeswarmArg) -> anyhow::Result<()> {
    let values = arg.column.read_values()?;
    let points = beeswarm::beeswarm_layout(&values, arg.category, Some(arg.radius));
    Output::save_json(&points, arg.column.output())
}

pub(crate) fn run_jitter(arg: &JitterArg) -> anyhow::Result<()> {
    let positions = match arg.seed {
        Some(seed) => {
            let mut rng = Pcg64::seed_from_u64(seed);
            beeswarm::add_jitter_with_rng(&mut rng, arg.category, arg.count, Some(arg.amount))
        }
        None => beeswarm::add_jitter(arg.category, arg.count, Some(arg.amount)),
    };
    Output::save_json(&positions, arg.output.as_deref())
}

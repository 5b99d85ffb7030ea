//! CLI argument parsing for the pickup-router binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pickup_routing::config::{SolveOptions, DEFAULT_DIAGNOSTICS_LIMIT};
use pickup_routing::session::Strategy;

#[derive(Parser)]
#[command(
    name = "pickup-router",
    version,
    about = "Capacity-constrained pickup routes from a base at the origin",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub solve: SolveArgs,
}

#[derive(Subcommand)]
pub enum Command {
    /// Solve every scenario of an input file (default if no subcommand given)
    Solve(SolveArgs),
    /// Write a random scenario file
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// Scenario file to read
    #[arg(short, long, default_value = "input.txt")]
    pub input: PathBuf,

    /// Route file to write
    #[arg(short, long, default_value = "output.txt")]
    pub output: PathBuf,

    /// Route-construction strategy (spanning-tree or nearest-neighbor)
    #[arg(short, long, default_value_t = Strategy::SpanningTree)]
    pub strategy: Strategy,

    /// Print the detailed report only for scenarios with at most this many points
    #[arg(long, default_value_t = DEFAULT_DIAGNOSTICS_LIMIT)]
    pub diagnostics_limit: usize,

    /// Write the routes as JSON instead of the plain route format
    #[arg(long)]
    pub json: bool,

    /// Do not print console reports
    #[arg(short, long)]
    pub quiet: bool,
}

impl SolveArgs {
    pub fn options(&self) -> SolveOptions {
        SolveOptions::default()
            .with_strategy(self.strategy)
            .with_diagnostics_limit(self.diagnostics_limit)
    }
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Number of scenarios
    #[arg(short = 'n', long, default_value_t = 1)]
    pub scenarios: usize,

    /// Points per scenario
    #[arg(short = 'm', long, default_value_t = 10)]
    pub points: usize,

    /// Capacity k of every scenario
    #[arg(short = 'k', long, default_value_t = 3)]
    pub capacity: i64,

    /// Coordinates are drawn from [-extent, extent]
    #[arg(long, default_value_t = 100.0)]
    pub extent: f64,

    /// RNG seed (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// File to write (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

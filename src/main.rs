//! pickup-router - solves scenario files and writes the resulting routes.

mod cli;

use std::fs::{self, File};
use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, GenerateArgs, SolveArgs};
use pickup_routing::io::report::{
    LegReport, MatrixReport, PointList, Summary, TreeReport, TripReport,
};
use pickup_routing::io::{
    parse_scenarios, random_scenario, write_routes, write_routes_json, write_scenarios,
    ScenarioResult,
};
use pickup_routing::models::Capacity;
use pickup_routing::session::Strategy;

const BANNER: &str = "+========================================================+";
const FRAME: &str = "+--------------------------------------------------------+";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Generate(args)) => generate(&args),
        Some(Command::Solve(args)) => solve(&args),
        None => solve(&cli.solve),
    }
}

fn solve(args: &SolveArgs) -> Result<()> {
    let options = args.options();
    let input = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let scenarios = parse_scenarios(&input)
        .with_context(|| format!("invalid scenario file {}", args.input.display()))?;
    info!(
        scenarios = scenarios.len(),
        strategy = %options.strategy,
        "loaded {}",
        args.input.display()
    );

    if !args.quiet {
        println!("\n{BANNER}");
        println!("|   PICKUP ROUTER - {:<37}|", options.strategy.to_string().to_uppercase());
        println!("{BANNER}");
    }

    let mut results = Vec::with_capacity(scenarios.len());
    for (i, scenario) in scenarios.iter().enumerate() {
        let mut session = scenario.session()?;
        let detailed = !args.quiet && options.wants_diagnostics(session.num_points());

        if !args.quiet {
            println!("\n{FRAME}");
            println!("|  SCENARIO {:<45}|", i + 1);
            println!("{FRAME}");
            println!("  Capacity (k): {}", session.capacity().get());
            println!("  Points (m): {}", session.num_points());
        }
        if detailed {
            println!("\n{}", PointList(session.points()));
            println!("{}", MatrixReport(session.distance_matrix()));
        } else if !args.quiet {
            debug!(
                points = session.num_points(),
                limit = options.diagnostics_limit,
                "scenario too large for the detailed report"
            );
        }

        let route = session.solve(options.strategy);

        if detailed && options.strategy == Strategy::SpanningTree && session.num_points() > 1 {
            let tree = session.spanning_tree().clone();
            println!(
                "{}",
                TreeReport {
                    points: session.points(),
                    tree: &tree,
                }
            );
        }

        let result = ScenarioResult::new(session.capacity(), route);
        if !args.quiet {
            println!(
                "\n{}",
                Summary {
                    capacity: result.capacity,
                    num_points: session.num_points(),
                    route: &result.route,
                    total_distance: result.total_distance,
                }
            );
            if detailed && !result.route.is_empty() {
                println!("{}", LegReport(&result.route));
            }
            println!("{}", TripReport(&result.route));
            println!("{}", "=".repeat(60));
        }
        results.push(result);
    }

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    let writer = BufWriter::new(file);
    let written = if args.json {
        write_routes_json(writer, &results)
    } else {
        write_routes(writer, &results)
    };
    written.with_context(|| format!("failed to write {}", args.output.display()))?;

    let total: f64 = results.iter().map(|r| r.total_distance).sum();
    info!(
        scenarios = results.len(),
        total_distance = total,
        "routes written to {}",
        args.output.display()
    );
    Ok(())
}

fn generate(args: &GenerateArgs) -> Result<()> {
    let capacity = Capacity::new(args.capacity).context("invalid --capacity")?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let scenarios = (0..args.scenarios)
        .map(|_| random_scenario(&mut rng, capacity, args.points, args.extent))
        .collect::<Result<Vec<_>, _>>()
        .context("invalid --extent")?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_scenarios(BufWriter::new(file), &scenarios)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(scenarios = scenarios.len(), "scenarios written to {}", path.display());
        }
        None => write_scenarios(io::stdout().lock(), &scenarios)?,
    }
    Ok(())
}

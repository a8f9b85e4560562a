//! Prints the fastest courier route for a delivery instance.
//!
//! Reads a JSON instance (see `DeliveryInstance`), a random one, or the
//! built-in two-order sample. Logging goes to stderr and is controlled by
//! `RUST_LOG`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

use u_courier::config::{OptimizerConfig, SearchStrategy};
use u_courier::distance::DEFAULT_SPEED_KMH;
use u_courier::enumeration::slot_points;
use u_courier::evaluation::RouteCostEvaluator;
use u_courier::generate::random_instance;
use u_courier::instance::DeliveryInstance;
use u_courier::models::GeoPoint;
use u_courier::optimizer::RouteOptimizer;

#[derive(Debug, Parser)]
#[command(name = "best-route", version, about = "Exact single-courier pickup and delivery routing")]
struct Args {
    /// JSON instance file; the built-in sample is used when omitted.
    #[arg(short, long, conflicts_with = "random")]
    instance: Option<PathBuf>,

    /// Generate a random instance with this many orders instead.
    #[arg(long)]
    random: Option<usize>,

    /// Seed for --random.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Courier speed in km/h.
    #[arg(long, default_value_t = DEFAULT_SPEED_KMH)]
    speed: f64,

    /// Prune branches that cannot beat the best route found so far.
    #[arg(long)]
    branch_and_bound: bool,

    /// Refuse instances with more orders than this.
    #[arg(long)]
    max_orders: Option<usize>,

    /// Print the per-transition time breakdown.
    #[arg(long)]
    legs: bool,
}

fn load(args: &Args) -> u_courier::Result<DeliveryInstance> {
    if let Some(n) = args.random {
        return random_instance(n, (12.93, 77.62), 0.01, 0.5, args.seed);
    }
    match &args.instance {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| {
                u_courier::RoutingError::InvalidConfiguration(format!(
                    "cannot read {}: {e}",
                    path.display()
                ))
            })?;
            DeliveryInstance::from_json(&text)
        }
        None => DeliveryInstance::sample(),
    }
}

fn run(args: &Args) -> u_courier::Result<()> {
    let instance = load(args)?;
    info!(orders = instance.orders.len(), "instance loaded");

    let mut config = OptimizerConfig::default().with_speed_kmh(args.speed);
    if args.branch_and_bound {
        config = config.with_search(SearchStrategy::BranchAndBound);
    }
    if let Some(limit) = args.max_orders {
        config = config.with_max_orders(limit);
    }

    let best = RouteOptimizer::new(config)?.find_best_route(&instance.start, &instance.orders)?;
    println!("Best Route: {}", best.route_string());
    println!("Total Time: {:.2} hours", best.total_time());

    if args.legs {
        let points = slot_points(&instance.start, &instance.orders);
        let route: Vec<&GeoPoint> = best
            .stops()
            .iter()
            .filter_map(|name| points.iter().copied().find(|p| p.name() == name.as_str()))
            .collect();
        let preparation: Vec<f64> = instance.orders.iter().map(|o| o.preparation_time()).collect();
        let evaluator = RouteCostEvaluator::new(&preparation, args.speed)?;
        for leg in evaluator.legs(&route) {
            println!(
                "  {} -> {}: prep {:.2} h, travel {:.3} h, elapsed {:.2} h",
                leg.from, leg.to, leg.preparation, leg.travel, leg.elapsed
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "route search failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

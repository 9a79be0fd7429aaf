use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ride_planner::catalog::Catalog;
use ride_planner::planner::{Algorithm, PlannerConfig, RideFilter, compare};
use ride_planner::report::{ComparisonDto, ComparisonReport, SelectionDto, SelectionReport};

/// Pick the rides that maximize ride time within a dollar budget.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Ride catalog: a header line, then `description^cost^time` records
    catalog: PathBuf,

    /// Budget in dollars
    #[arg(short, long)]
    budget: Option<f64>,

    /// Minimum ride time in minutes for the candidate filter
    #[arg(long)]
    min_time: Option<f64>,

    /// Maximum ride time in minutes for the candidate filter
    #[arg(long)]
    max_time: Option<f64>,

    /// Maximum number of candidate rides kept by the filter
    #[arg(long)]
    max_items: Option<usize>,

    /// Which selector to run
    #[arg(short, long, value_enum, default_value_t = Mode::Compare)]
    algorithm: Mode,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Log at debug level
    #[arg(short, long)]
    debug: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Greedy,
    Exhaustive,
    Parallel,
    Compare,
}

impl Cli {
    fn config(&self) -> PlannerConfig {
        let defaults = PlannerConfig::default();
        let filter = RideFilter::new(
            self.min_time.unwrap_or(defaults.filter.min_time),
            self.max_time.unwrap_or(defaults.filter.max_time),
            self.max_items.unwrap_or(defaults.filter.max_size),
        );
        PlannerConfig::new(self.budget.unwrap_or(defaults.budget), filter)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let catalog = Catalog::load(&cli.catalog)
        .with_context(|| format!("failed to load ride catalog {}", cli.catalog.display()))?;
    info!(rides = catalog.len(), "loaded catalog");

    let config = cli.config();
    let rides = catalog.rides();

    let algorithm = match cli.algorithm {
        Mode::Greedy => Algorithm::Greedy,
        Mode::Exhaustive => Algorithm::Exhaustive,
        Mode::Parallel => Algorithm::ExhaustiveParallel,
        Mode::Compare => {
            let comparison = compare(&rides, &config);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&ComparisonDto::from(&comparison))?
                );
            } else {
                print!("{}", ComparisonReport(&comparison));
            }
            return Ok(());
        }
    };

    let candidates = config.filter.apply(&rides);
    let selection = algorithm.select(&candidates, config.budget);
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&SelectionDto::from(&selection))?
        );
    } else {
        print!("{}", SelectionReport(&selection));
    }

    Ok(())
}

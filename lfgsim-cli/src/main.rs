//! lfgsim CLI - runs one dungeon-queue simulation and prints the summary.
//!
//! The queue can come from a config file in the `key value` format
//! (keys: n t h d t1 t2) or be given inline; flags override file values.

use std::process;

use clap::Parser;
use lfgsim::{logging, Simulation, SimulationConfig};

#[derive(Parser)]
#[command(name = "lfgsim")]
#[command(about = "Simulate an LFG dungeon queue", long_about = None)]
struct Args {
    /// Config file in `key value` format (keys: n t h d t1 t2)
    #[arg(long)]
    config: Option<String>,

    /// Number of concurrent dungeon instances
    #[arg(long)]
    instances: Option<usize>,

    /// Tanks waiting in queue
    #[arg(long)]
    tanks: Option<u64>,

    /// Healers waiting in queue
    #[arg(long)]
    healers: Option<u64>,

    /// Dps waiting in queue
    #[arg(long)]
    dps: Option<u64>,

    /// Shortest clear time in seconds
    #[arg(long)]
    min_time: Option<u64>,

    /// Longest clear time in seconds (capped at 15)
    #[arg(long)]
    max_time: Option<u64>,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

fn build_config(args: &Args) -> anyhow::Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_file(path)?,
        None => SimulationConfig::default(),
    };

    if let Some(instances) = args.instances {
        config.instances = instances;
    }
    if let Some(tanks) = args.tanks {
        config.roles.tanks = tanks;
    }
    if let Some(healers) = args.healers {
        config.roles.healers = healers;
    }
    if let Some(dps) = args.dps {
        config.roles.dps = dps;
    }
    if let Some(min_time) = args.min_time {
        config.min_run_secs = min_time;
    }
    if let Some(max_time) = args.max_time {
        config.max_run_secs = max_time;
    }

    // Overrides can break ranges the file loader already checked.
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if args.verbose {
        logging::init_development();
    } else {
        logging::init_default();
    }

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err:#}");
            process::exit(1);
        }
    };

    match Simulation::new(config).run().await {
        Ok(report) => println!("{report}"),
        Err(err) => {
            eprintln!("error: {err:#}");
            process::exit(1);
        }
    }
}

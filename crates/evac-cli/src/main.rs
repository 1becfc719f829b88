//! `evac` — evacuation time estimator, command-line entry point.
//!
//! ```console
//! $ evac scenario.json --format sqlite --out result
//! ```

use std::process;

use clap::Parser;
use tracing::error;

use evac_cli::{CliArgs, effective_scenario, logging, run_scenario};

fn main() {
    let args = CliArgs::parse();

    if let Err(e) = logging::init(args.log_level()) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(1);
    }

    let scenario = match effective_scenario(&args) {
        Ok(s) => s,
        Err(e) => {
            error!("{e:#}");
            process::exit(1);
        }
    };

    if args.print_config {
        match scenario.to_json_pretty() {
            Ok(json) => {
                println!("{json}");
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize scenario: {e}");
                process::exit(1);
            }
        }
    }

    match run_scenario(&scenario, args.scenario.as_deref()) {
        Ok(summaries) => {
            for s in &summaries {
                println!("{s}");
            }
        }
        Err(e) => {
            error!("{e:#}");
            process::exit(1);
        }
    }
}

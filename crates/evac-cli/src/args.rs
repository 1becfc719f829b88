//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use evac_sim::ScenarioConfig;

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "evac",
    version,
    about = "Potential-field evacuation time estimator",
    long_about = "Runs the zone/transit flow model over every building listed in a \
                  scenario file and writes per-tick populations and flows plus a \
                  short summary of the evacuation time.",
    after_help = "EXAMPLES:
    # Run a scenario, CSV output next to the scenario file
    evac scenario.json

    # SQLite output in ./result, time in seconds
    evac scenario.json --out result --format sqlite --seconds

    # Show the effective scenario (defaults filled in) and exit
    evac scenario.json --print-config

LOGGING:
    RUST_LOG overrides --verbose / --quiet, e.g. RUST_LOG=evac_wavefront=trace"
)]
pub struct CliArgs {
    /// Scenario file (JSON).
    #[arg(required_unless_present = "print_config")]
    pub scenario: Option<PathBuf>,

    /// Output directory.  Default: the scenario's `output.dir`, else the
    /// scenario file's directory.
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Output backend: csv, sqlite, or parquet.
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Report time in seconds instead of minutes.
    #[arg(long)]
    pub seconds: bool,

    /// Stop each run after this many ticks.
    #[arg(long, value_name = "N")]
    pub max_ticks: Option<u64>,

    /// Print the effective scenario as JSON and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Debug-level logging.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Warnings and errors only.
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Apply command-line overrides on top of the scenario file.
    pub fn override_scenario(&self, scenario: &mut ScenarioConfig) {
        if let Some(dir) = &self.out {
            scenario.output.dir = Some(dir.clone());
        }
        if let Some(format) = &self.format {
            scenario.output.format = format.clone();
        }
        if self.seconds {
            scenario.output.seconds = true;
        }
        if let Some(max) = self.max_ticks {
            scenario.stop.max_ticks = Some(max);
        }
    }

    /// Default log directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

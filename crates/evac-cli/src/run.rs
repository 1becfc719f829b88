//! Scenario execution: one simulation per building file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use evac_graph::load_building_json;
use evac_output::{OutputFormat, SimOutputObserver, TimeUnit};
use evac_sim::{EvacSummary, ScenarioConfig, SimBuilder};

use crate::CliArgs;

/// Load the scenario named on the command line (or the default one when
/// none is given) and apply the command-line overrides.
pub fn effective_scenario(args: &CliArgs) -> Result<ScenarioConfig> {
    let mut scenario = match &args.scenario {
        Some(path) => ScenarioConfig::load(path)
            .with_context(|| format!("reading scenario {}", path.display()))?,
        None => ScenarioConfig::default(),
    };
    args.override_scenario(&mut scenario);
    Ok(scenario)
}

/// Where result files go: `output.dir`, else next to the scenario file.
fn output_dir(scenario: &ScenarioConfig, scenario_path: Option<&Path>) -> PathBuf {
    scenario
        .output
        .dir
        .clone()
        .or_else(|| scenario_path.and_then(Path::parent).map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Run every building of `scenario` and write its results.
///
/// A building that fails to load or run aborts the whole scenario; later
/// buildings are not attempted.
pub fn run_scenario(scenario: &ScenarioConfig, scenario_path: Option<&Path>) -> Result<Vec<EvacSummary>> {
    if scenario.bim_files.is_empty() {
        bail!("scenario lists no building files (bimFiles)");
    }

    let format: OutputFormat = scenario.output.format.parse()?;
    if !format.is_available() {
        bail!("output format {format} is not compiled into this binary");
    }
    let unit = if scenario.output.seconds { TimeUnit::Seconds } else { TimeUnit::Minutes };

    let dir = output_dir(scenario, scenario_path);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;
    info!(dir = %dir.display(), %format, buildings = scenario.bim_files.len(), "scenario loaded");

    let mut summaries = Vec::with_capacity(scenario.bim_files.len());
    for path in &scenario.bim_files {
        summaries.push(run_building(scenario, path, &dir, format, unit)?);
    }
    Ok(summaries)
}

fn run_building(
    scenario: &ScenarioConfig,
    path: &Path,
    dir: &Path,
    format: OutputFormat,
    unit: TimeUnit,
) -> Result<EvacSummary> {
    let mut building = load_building_json(path)
        .with_context(|| format!("loading building {}", path.display()))?;
    scenario
        .apply(&mut building)
        .with_context(|| format!("applying scenario to {}", path.display()))?;

    let mut sim = SimBuilder::new(building)
        .config(scenario.modeling_parameters)
        .stop(scenario.stop)
        .snapshot_interval(scenario.output.snapshot_interval)
        .build()
        .with_context(|| format!("preparing {}", path.display()))?;

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| sim.building.name.clone());
    let writer = format.open(dir, &stem)?;
    let mut observer = SimOutputObserver::new(writer, unit);

    let summary = sim.run(&mut observer);
    if let Some(e) = observer.take_error() {
        return Err(e).with_context(|| format!("writing results for {}", path.display()));
    }

    info!(
        building = %summary.building,
        time_min = summary.time_minutes,
        time_s = summary.time_seconds,
        inside = summary.people_in_building,
        evacuated = summary.evacuated,
        rows = observer.rows_written(),
        "results written"
    );
    if summary.people_in_building > 0.0 {
        warn!(
            building = %summary.building,
            reason = %summary.stop_reason,
            "{:.2} people did not get out",
            summary.people_in_building
        );
    }
    Ok(summary)
}

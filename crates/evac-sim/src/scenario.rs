//! Scenario configuration: which buildings to run and how to prepare them.
//!
//! # JSON format
//!
//! ```json
//! {
//!   "version": "1",
//!   "bimFiles": ["office.json"],
//!   "distribution": {
//!     "type": "uniform",
//!     "density": 0.1,
//!     "special": [ { "keys": ["r1", "r2"], "density": 1.0, "comment": "meeting" } ]
//!   },
//!   "transitionParameters": {
//!     "type": "users",
//!     "doorwayIn": 0.9,
//!     "doorwayOut": 1.2,
//!     "special": [ { "keys": ["d7"], "width": 1.5 } ]
//!   },
//!   "blocking": { "zones": [], "transits": ["d3"] },
//!   "modelingParameters": { "step": 0.0, "maxSpeed": 100, "maxDensity": 5, "minDensity": 0.1 },
//!   "stop": { "remainder": 0, "maxTicks": 1000000 },
//!   "output": { "dir": "result", "format": "csv", "seconds": false, "snapshotInterval": 1 }
//! }
//! ```
//!
//! Every section is optional; missing sections keep the building as loaded
//! and use default parameters.  Relative building paths and output
//! directories are resolved against the scenario file's directory by
//! [`ScenarioConfig::load`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use evac_core::{EvacConfig, TransitSign};
use evac_graph::Building;

use crate::{SimError, SimResult, StopCondition};

// ── Sections ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DistributionType {
    /// Keep the populations from the building description.
    #[default]
    #[serde(alias = "fromBuilding")]
    FromBim,
    /// `people = area · density` in every room and staircase.
    Uniform,
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DistributionSpecial {
    /// Zone keys this entry applies to.
    #[serde(alias = "uuid")]
    pub keys:    Vec<String>,
    /// Persons per m².
    pub density: f64,
    pub comment: String,
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Distribution {
    #[serde(rename = "type")]
    pub kind:    DistributionType,
    pub density: f64,
    pub special: Vec<DistributionSpecial>,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransitionType {
    /// Keep the widths from the building description.
    #[default]
    #[serde(alias = "fromBuilding")]
    FromBim,
    /// Interior and exterior doors get the user widths below.
    Users,
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransitionSpecial {
    /// Transit keys this entry applies to.
    #[serde(alias = "uuid")]
    pub keys:    Vec<String>,
    /// Metres.
    pub width:   f64,
    pub comment: String,
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Transition {
    #[serde(rename = "type")]
    pub kind:        TransitionType,
    pub doorway_in:  f64,
    pub doorway_out: f64,
    pub special:     Vec<TransitionSpecial>,
}

impl Transition {
    /// Every width this section would assign must be positive.
    pub fn validate(&self) -> SimResult<()> {
        if self.kind == TransitionType::Users {
            check_width("doorwayIn", self.doorway_in)?;
            check_width("doorwayOut", self.doorway_out)?;
        }
        for special in &self.special {
            check_width(&special.keys.join(","), special.width)?;
        }
        Ok(())
    }
}

fn check_width(what: &str, width: f64) -> SimResult<()> {
    if width > 0.0 {
        Ok(())
    } else {
        Err(SimError::Config(format!("transition width for {what} must be positive, got {width}")))
    }
}

/// Zones and transits closed for the whole run.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Blocking {
    pub zones:    Vec<String>,
    pub transits: Vec<String>,
}

/// Where and how results are written.  Interpreted by the output layer.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputOptions {
    pub dir:               Option<PathBuf>,
    /// `csv`, `sqlite`, or `parquet`.
    pub format:            String,
    /// Report time in seconds instead of minutes.
    pub seconds:           bool,
    pub snapshot_interval: u64,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self { dir: None, format: "csv".to_owned(), seconds: false, snapshot_interval: 1 }
    }
}

// ── ScenarioConfig ────────────────────────────────────────────────────────────

/// A complete scenario.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScenarioConfig {
    pub version:   String,
    #[serde(alias = "files")]
    pub bim_files: Vec<PathBuf>,

    pub distribution: Distribution,
    #[serde(alias = "transition")]
    pub transition_parameters: Transition,
    pub blocking: Blocking,
    #[serde(alias = "modeling")]
    pub modeling_parameters: EvacConfig,

    pub stop:   StopCondition,
    pub output: OutputOptions,
}

impl ScenarioConfig {
    /// Read a scenario from a JSON file.  Relative `bimFiles` entries and a
    /// relative `output.dir` are made relative to the file's directory.
    pub fn load(path: &Path) -> SimResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut scenario = Self::from_json(&text)?;
        if let Some(base) = path.parent() {
            let relative = scenario
                .bim_files
                .iter_mut()
                .chain(scenario.output.dir.as_mut())
                .filter(|p| p.is_relative());
            for p in relative {
                *p = base.join(&*p);
            }
        }
        Ok(scenario)
    }

    pub fn from_json(text: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_pretty(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set populations, widths, and blocked flags on `building`.
    ///
    /// Keys that match nothing are reported and skipped.  A non-positive
    /// width is rejected before `building` is touched.
    pub fn apply(&self, building: &mut Building) -> SimResult<()> {
        self.transition_parameters.validate()?;
        self.apply_transitions(building);
        self.apply_distribution(building);
        self.apply_blocking(building);
        Ok(())
    }

    fn apply_transitions(&self, building: &mut Building) {
        let tp = &self.transition_parameters;
        if tp.kind == TransitionType::Users {
            for t in building.transits.iter_mut() {
                match t.sign {
                    TransitSign::DoorWayInt => t.width = tp.doorway_in,
                    TransitSign::DoorWayOut => t.width = tp.doorway_out,
                    TransitSign::DoorWay => {}
                }
            }
        }
        for special in &tp.special {
            for key in &special.keys {
                match building.transit_by_key(key) {
                    Some(id) => building.transit_mut(id).width = special.width,
                    None => warn!(key = %key, "width override for unknown transit"),
                }
            }
        }
    }

    fn apply_distribution(&self, building: &mut Building) {
        let dist = &self.distribution;
        if dist.kind == DistributionType::Uniform {
            for z in building.zones.iter_mut().filter(|z| z.sign.is_interior()) {
                z.numofpeople = z.area * dist.density;
            }
        }
        for special in &dist.special {
            for key in &special.keys {
                match building.zone_by_key(key) {
                    Some(id) if building.zone(id).sign.is_interior() => {
                        let z = building.zone_mut(id);
                        z.numofpeople = z.area * special.density;
                    }
                    Some(_) => warn!(key = %key, "density override on the outside zone ignored"),
                    None => warn!(key = %key, "density override for unknown zone"),
                }
            }
        }
        debug!(
            building = %building.name,
            people = building.interior_people(),
            "people distributed"
        );
    }

    fn apply_blocking(&self, building: &mut Building) {
        for key in &self.blocking.zones {
            match building.zone_by_key(key) {
                Some(id) => building.zone_mut(id).is_blocked = true,
                None => warn!(key = %key, "cannot block unknown zone"),
            }
        }
        for key in &self.blocking.transits {
            match building.transit_by_key(key) {
                Some(id) => building.transit_mut(id).is_blocked = true,
                None => warn!(key = %key, "cannot block unknown transit"),
            }
        }
    }
}

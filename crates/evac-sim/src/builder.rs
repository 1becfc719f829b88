//! Fluent builder for constructing a [`Sim`].

use tracing::debug;

use evac_core::EvacConfig;
use evac_flow::{SpeedModel, StandardSpeedModel};
use evac_graph::Building;

use crate::{Sim, SimError, SimResult, StopCondition, TimeDriver};

/// Fluent builder for [`Sim<M>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                    | Default                          |
/// |---------------------------|----------------------------------|
/// | `.config(c)`              | `EvacConfig::default()`          |
/// | `.model(m)`               | `StandardSpeedModel::default()`  |
/// | `.stop(s)`                | `StopCondition::default()`       |
/// | `.max_ticks(n)`           | one million                      |
/// | `.snapshot_interval(n)`   | 1 (every tick)                   |
///
/// # Example
///
/// ```
/// use evac_graph::{BuildingBuilder, Transit, Zone};
/// use evac_sim::{NoopObserver, SimBuilder, StopReason};
///
/// let mut b = BuildingBuilder::new("kiosk");
/// let out  = b.add_outside();
/// let room = b.add_zone(Zone::room("Kiosk", 12.0).with_people(6.0));
/// b.add_transit(Transit::door_out("Door", 0.9), room, out);
///
/// let mut sim = SimBuilder::new(b.build().unwrap()).build().unwrap();
/// let summary = sim.run(&mut NoopObserver);
/// assert_eq!(summary.stop_reason, StopReason::Evacuated);
/// assert_eq!(summary.people_in_building, 0.0);
/// ```
pub struct SimBuilder<M: SpeedModel = StandardSpeedModel> {
    building:          Building,
    config:            EvacConfig,
    model:             M,
    stop:              StopCondition,
    snapshot_interval: u64,
}

impl SimBuilder<StandardSpeedModel> {
    pub fn new(building: Building) -> Self {
        Self {
            building,
            config:            EvacConfig::default(),
            model:             StandardSpeedModel::default(),
            stop:              StopCondition::default(),
            snapshot_interval: 1,
        }
    }
}

impl<M: SpeedModel> SimBuilder<M> {
    pub fn config(mut self, config: EvacConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the speed model.
    pub fn model<N: SpeedModel>(self, model: N) -> SimBuilder<N> {
        SimBuilder {
            building:          self.building,
            config:            self.config,
            model,
            stop:              self.stop,
            snapshot_interval: self.snapshot_interval,
        }
    }

    pub fn stop(mut self, stop: StopCondition) -> Self {
        self.stop = stop;
        self
    }

    pub fn max_ticks(mut self, max_ticks: u64) -> Self {
        self.stop.max_ticks = Some(max_ticks);
        self
    }

    pub fn snapshot_interval(mut self, every: u64) -> Self {
        self.snapshot_interval = every;
        self
    }

    /// Validate the configuration, fix the modeling step, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<M>> {
        if !(self.stop.remainder >= 0.0) {
            return Err(SimError::Config(format!(
                "stop remainder must be non-negative, got {}",
                self.stop.remainder
            )));
        }

        let mut driver = TimeDriver::with_model(self.config, self.model);
        driver.prepare(&self.building)?;

        let step = driver.config().modeling_step;
        if !(step > 0.0) || !step.is_finite() {
            return Err(SimError::Config(format!(
                "modeling step resolved to {step}; the building needs a positive interior area"
            )));
        }
        debug!(building = %self.building.name, modeling_step = step, "sim built");

        Ok(Sim {
            building:          self.building,
            driver,
            stop:              self.stop,
            snapshot_interval: self.snapshot_interval,
        })
    }
}

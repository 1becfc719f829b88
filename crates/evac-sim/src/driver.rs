//! The time driver: clock plus wavefront.

use tracing::debug;

use evac_core::{EvacClock, EvacConfig, EvacResult, Tick};
use evac_flow::{SpeedModel, StandardSpeedModel};
use evac_graph::Building;
use evac_wavefront::Wavefront;

/// Owns the evacuation clock and the wavefront; advances a building one
/// tick at a time.
///
/// The modeling step is fixed by [`prepare`](Self::prepare), which derives
/// it from the building when the configuration leaves it at zero.  After
/// that the clock and the wavefront always agree on the step.
pub struct TimeDriver<M: SpeedModel = StandardSpeedModel> {
    pub clock:     EvacClock,
    pub wavefront: Wavefront<M>,
}

impl TimeDriver<StandardSpeedModel> {
    pub fn new(config: EvacConfig) -> Self {
        Self::with_model(config, StandardSpeedModel::default())
    }
}

impl<M: SpeedModel> TimeDriver<M> {
    pub fn with_model(config: EvacConfig, model: M) -> Self {
        Self {
            clock:     EvacClock::new(config.modeling_step),
            wavefront: Wavefront::new(config, model),
        }
    }

    #[inline]
    pub fn config(&self) -> &EvacConfig {
        &self.wavefront.config
    }

    /// Validate the configuration, resolve an unset modeling step against
    /// `building`, and reset the clock.
    pub fn prepare(&mut self, building: &Building) -> EvacResult<()> {
        let config = &mut self.wavefront.config;
        config.validate()?;
        config.resolve_modeling_step(building.interior_area(), building.zones.len());
        self.clock = EvacClock::new(config.modeling_step);
        debug!(
            building = %building.name,
            modeling_step = config.modeling_step,
            "time driver prepared"
        );
        Ok(())
    }

    /// Run one wavefront step, then advance the clock.  Returns the tick
    /// that was just processed.
    pub fn tick(&mut self, building: &mut Building) -> Tick {
        let now = self.clock.current_tick;
        self.wavefront.step_building(building);
        self.clock.time_inc();
        now
    }

    pub fn time_reset(&mut self) {
        self.clock.time_reset();
    }

    #[inline]
    pub fn time_minutes(&self) -> f64 {
        self.clock.time_minutes()
    }

    #[inline]
    pub fn time_seconds(&self) -> f64 {
        self.clock.time_seconds()
    }
}

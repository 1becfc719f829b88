//! The `Sim` struct and its run loop.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use evac_core::Tick;
use evac_flow::{SpeedModel, StandardSpeedModel};
use evac_graph::Building;

use crate::{EvacSummary, SimObserver, StopReason, TickReport, TimeDriver};

/// When [`Sim::run`] stops.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StopCondition {
    /// Stop once no more than this many people remain in reachable zones.
    /// Default: 0.
    pub remainder: f64,
    /// Hard cap on the number of ticks.  `None` runs until the remainder
    /// rule fires.  Default: one million.
    pub max_ticks: Option<u64>,
}

impl Default for StopCondition {
    fn default() -> Self {
        Self { remainder: 0.0, max_ticks: Some(1_000_000) }
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// One building being evacuated.
///
/// Each tick runs the wavefront over the building, advances the clock, and
/// reports to the observer.  [`run`](Self::run) ticks until the people left
/// in zones the wavefront reached fall to `stop.remainder` (or the tick
/// budget runs out).  At least one tick is always run, because reachability
/// is only known after the wavefront has passed.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<M: SpeedModel = StandardSpeedModel> {
    /// The building; the only mutable state besides the clock.
    pub building: Building,

    /// Clock and wavefront.
    pub driver: TimeDriver<M>,

    pub stop: StopCondition,

    /// `on_snapshot` is called every this many ticks (0 disables it).
    pub snapshot_interval: u64,
}

impl<M: SpeedModel> Sim<M> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until the stop condition fires.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> EvacSummary {
        info!(
            building = %self.building.name,
            zones = self.building.zones.len(),
            transits = self.building.transits.len(),
            people = self.building.interior_people(),
            modeling_step = self.driver.config().modeling_step,
            "evacuation started"
        );
        observer.on_start(&self.building);

        let reason = loop {
            let ticks = self.ticks();
            if self.stop.max_ticks.is_some_and(|max| ticks >= max) {
                break StopReason::TickBudget;
            }

            let report = self.process_tick(observer);
            if report.reachable <= self.stop.remainder {
                break if report.people_inside <= self.stop.remainder {
                    StopReason::Evacuated
                } else {
                    StopReason::Stranded
                };
            }
        };

        let summary = self.summary(reason);
        match reason {
            StopReason::Evacuated => info!(%summary, "evacuation finished"),
            StopReason::Stranded | StopReason::TickBudget => {
                warn!(%summary, "evacuation incomplete")
            }
        }
        observer.on_sim_end(&summary);
        summary
    }

    /// Run exactly `n` ticks from the current position, ignoring the stop
    /// condition.
    ///
    /// Useful for tests and incremental stepping.  Observers see tick hooks
    /// and snapshots but not `on_start` / `on_sim_end`.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.process_tick(observer);
        }
    }

    /// Ticks processed so far.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.driver.clock.current_tick.0
    }

    /// Current figures, labelled with `reason`.
    pub fn summary(&self, reason: StopReason) -> EvacSummary {
        EvacSummary {
            building:           self.building.name.clone(),
            time_minutes:       self.driver.time_minutes(),
            time_seconds:       self.driver.time_seconds(),
            people_in_building: self.building.interior_people(),
            evacuated:          self.building.evacuated_people(),
            ticks:              self.ticks(),
            stop_reason:        reason,
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, observer: &mut O) -> TickReport {
        let now: Tick = self.driver.clock.current_tick;
        observer.on_tick_start(now);

        let evacuated_before = self.building.evacuated_people();
        self.driver.tick(&mut self.building);
        let time = self.driver.time_minutes();

        let report = TickReport::capture(now, time, evacuated_before, &self.building);
        debug!(
            tick = %now,
            time_min = time,
            inside = report.people_inside,
            exited = report.exited,
            "tick"
        );
        observer.on_tick_end(now, &report);

        if self.snapshot_interval > 0 && now.0.is_multiple_of(self.snapshot_interval) {
            observer.on_snapshot(now, time, &self.building);
        }
        report
    }
}

//! Per-tick and end-of-run figures handed to observers.

use std::fmt;

use serde::Serialize;

use evac_core::Tick;
use evac_graph::Building;

/// Why a run ended.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// People left inside fell to the remainder.
    Evacuated,
    /// People remain, but none of them is in a zone the wavefront can reach
    /// (every path out is blocked).
    Stranded,
    /// The tick budget ran out first.
    TickBudget,
}

impl StopReason {
    pub fn as_str(self) -> &'static str {
        match self {
            StopReason::Evacuated  => "evacuated",
            StopReason::Stranded   => "stranded",
            StopReason::TickBudget => "tick_budget",
        }
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate numbers for one tick, taken after the wavefront ran.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TickReport {
    pub tick:          Tick,
    /// Clock after the tick, minutes.
    pub time_minutes:  f64,
    /// People still inside the building.
    pub people_inside: f64,
    /// People outside so far.
    pub evacuated:     f64,
    /// People who reached the outside during this tick.
    pub exited:        f64,
    /// People inside zones the wavefront reached this tick.
    pub reachable:     f64,
}

impl TickReport {
    pub(crate) fn capture(tick: Tick, time_minutes: f64, evacuated_before: f64, building: &Building) -> Self {
        let evacuated = building.evacuated_people();
        Self {
            tick,
            time_minutes,
            people_inside: building.interior_people(),
            evacuated,
            exited:        evacuated - evacuated_before,
            reachable:     building.reachable_people(),
        }
    }
}

/// Result of a complete run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EvacSummary {
    pub building:           String,
    /// Evacuation time, minutes.
    pub time_minutes:       f64,
    /// Evacuation time, seconds.
    pub time_seconds:       f64,
    pub people_in_building: f64,
    pub evacuated:          f64,
    pub ticks:              u64,
    pub stop_reason:        StopReason,
}

impl fmt::Display for EvacSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.2} min ({:.0} s), {:.2} evacuated, {:.2} still inside, {} ticks, {}",
            self.building,
            self.time_minutes,
            self.time_seconds,
            self.evacuated,
            self.people_in_building,
            self.ticks,
            self.stop_reason,
        )
    }
}

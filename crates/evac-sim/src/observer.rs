//! Simulation observer trait for progress reporting and data collection.

use evac_core::Tick;
use evac_graph::Building;

use crate::{EvacSummary, TickReport};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust
/// use evac_core::Tick;
/// use evac_sim::{SimObserver, TickReport};
///
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {:.1} people inside", report.people_inside);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first tick, with the initial building state.
    fn on_start(&mut self, _building: &Building) {}

    /// Called at the very start of each tick, before the wavefront runs.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after each tick with its aggregate numbers.
    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport) {}

    /// Called at snapshot intervals with read-only access to every zone and
    /// transit.  `time_minutes` is the clock after the tick.
    fn on_snapshot(&mut self, _tick: Tick, _time_minutes: f64, _building: &Building) {}

    /// Called once after the run stops.
    fn on_sim_end(&mut self, _summary: &EvacSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

//! `SimOutputObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use tracing::debug;

use evac_core::Tick;
use evac_graph::Building;
use evac_sim::{EvacSummary, SimObserver};

use crate::row::{OutputLayout, StateRow, SummaryRow, TimeUnit};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes the initial building state, the state at
/// every snapshot and the final summary to any [`OutputWriter`] backend (CSV, SQLite, Parquet).
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    unit:       TimeUnit,
    /// Reused between snapshots.
    row:        StateRow,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W, unit: TimeUnit) -> Self {
        Self { writer, unit, row: StateRow::default(), rows: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// State rows handed to the writer so far.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_row(&mut self, tick: Tick, time_minutes: f64, building: &Building) {
        self.row.fill(tick.0, self.unit.from_minutes(time_minutes), building);
        let result = self.writer.write_state(&self.row);
        if result.is_ok() {
            self.rows += 1;
        }
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_start(&mut self, building: &Building) {
        let layout = OutputLayout::from_building(building, self.unit);
        debug!(
            building = %layout.building,
            zones = layout.zones.len(),
            transits = layout.transits.len(),
            "output started"
        );
        let result = self.writer.begin(&layout);
        self.store_err(result);
        // Initial populations at time 0.
        self.write_row(Tick(0), 0.0, building);
    }

    fn on_snapshot(&mut self, tick: Tick, time_minutes: f64, building: &Building) {
        self.write_row(tick, time_minutes, building);
    }

    fn on_sim_end(&mut self, summary: &EvacSummary) {
        let result = self.writer.write_summary(&SummaryRow::from(summary));
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}

//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputLayout, OutputResult, StateRow, SummaryRow};

/// Trait implemented by CSV, SQLite, and Parquet writers.
///
/// Call order: `begin` once, `write_state` any number of times,
/// `write_summary` at most once, then `finish`.  When driven by
/// [`SimOutputObserver`][crate::SimOutputObserver], errors are stored and
/// retrieved with `take_error`.
pub trait OutputWriter {
    /// Record the column layout (headers, element tables).
    fn begin(&mut self, layout: &OutputLayout) -> OutputResult<()>;

    /// Write one state row.
    fn write_state(&mut self, row: &StateRow) -> OutputResult<()>;

    /// Write the end-of-run figures.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: OutputWriter + ?Sized> OutputWriter for Box<W> {
    fn begin(&mut self, layout: &OutputLayout) -> OutputResult<()> {
        (**self).begin(layout)
    }

    fn write_state(&mut self, row: &StateRow) -> OutputResult<()> {
        (**self).write_state(row)
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        (**self).write_summary(row)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}

/// Reject a row whose widths do not match the layout.
pub(crate) fn check_shape(layout: (usize, usize), row: &StateRow) -> OutputResult<()> {
    let (zones, transits) = layout;
    if row.zone_people.len() != zones {
        return Err(crate::OutputError::RowShape {
            what:     "zone",
            got:      row.zone_people.len(),
            expected: zones,
        });
    }
    if row.transit_flow.len() != transits {
        return Err(crate::OutputError::RowShape {
            what:     "transit",
            got:      row.transit_flow.len(),
            expected: transits,
        });
    }
    Ok(())
}

//! CSV output backend.
//!
//! Creates two files in the output directory:
//! - `<stem>_detailed.csv`: `t,<zone names…>,<transit names…>`, one row per
//!   state, every value with two decimals.
//! - `<stem>_short.csv`: `evacuation_time_m,people_in_building,evacuated`
//!   (`evacuation_time_s` when the layout reports seconds).

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::{OutputWriter, check_shape};
use crate::{OutputLayout, OutputResult, StateRow, SummaryRow, TimeUnit};

#[inline]
fn two_dec(v: f64) -> String {
    format!("{v:.2}")
}

/// Writes evacuation results to two CSV files.
pub struct CsvWriter {
    detailed: Writer<File>,
    short:    Writer<File>,
    unit:     TimeUnit,
    widths:   (usize, usize),
    finished: bool,
}

impl CsvWriter {
    /// Create (or truncate) both CSV files in `dir`.
    pub fn new(dir: &Path, stem: &str) -> OutputResult<Self> {
        let detailed = Writer::from_path(dir.join(format!("{stem}_detailed.csv")))?;
        let short = Writer::from_path(dir.join(format!("{stem}_short.csv")))?;
        Ok(Self {
            detailed,
            short,
            unit: TimeUnit::Minutes,
            widths: (0, 0),
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn begin(&mut self, layout: &OutputLayout) -> OutputResult<()> {
        self.unit = layout.unit;
        self.widths = (layout.zones.len(), layout.transits.len());

        let header = std::iter::once("t")
            .chain(layout.zones.iter().map(|z| z.name.as_str()))
            .chain(layout.transits.iter().map(|t| t.name.as_str()));
        self.detailed.write_record(header)?;

        let time_col = format!("evacuation_time_{}", self.unit.suffix());
        self.short.write_record([time_col.as_str(), "people_in_building", "evacuated"])?;
        Ok(())
    }

    fn write_state(&mut self, row: &StateRow) -> OutputResult<()> {
        check_shape(self.widths, row)?;
        let record = std::iter::once(row.time)
            .chain(row.zone_people.iter().copied())
            .chain(row.transit_flow.iter().copied())
            .map(two_dec);
        self.detailed.write_record(record)?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        let time = match self.unit {
            TimeUnit::Minutes => row.time_minutes,
            TimeUnit::Seconds => row.time_seconds,
        };
        self.short.write_record([
            two_dec(time),
            two_dec(row.people_in_building),
            two_dec(row.evacuated),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.detailed.flush()?;
        self.short.flush()?;
        Ok(())
    }
}

//! Parquet output backend (feature `parquet`).
//!
//! Creates two long-format files in the output directory:
//! - `<stem>_zone_states.parquet`: `tick, time, zone_id, people`
//! - `<stem>_transit_flows.parquet`: `tick, time, transit_id, people`
//!
//! The summary row is not stored; it goes to the log and the other backends.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Float64Builder, UInt32Builder, UInt64Builder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::{OutputWriter, check_shape};
use crate::{OutputLayout, OutputResult, StateRow, SummaryRow};

fn state_schema(id_column: &str) -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("tick",    DataType::UInt64,  false),
        Field::new("time",    DataType::Float64, false),
        Field::new(id_column, DataType::UInt32,  false),
        Field::new("people",  DataType::Float64, false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// One long-format table: element ids fixed by the layout, one batch per
/// state row.
struct StateTable {
    writer: Option<ArrowWriter<File>>,
    schema: Arc<Schema>,
    ids:    Vec<u32>,
}

impl StateTable {
    fn create(path: &Path, id_column: &str) -> OutputResult<Self> {
        let schema = state_schema(id_column);
        let writer = ArrowWriter::try_new(File::create(path)?, Arc::clone(&schema), Some(snappy_props()))?;
        Ok(Self { writer: Some(writer), schema, ids: Vec::new() })
    }

    fn write(&mut self, tick: u64, time: f64, values: &[f64]) -> OutputResult<()> {
        let Some(writer) = self.writer.as_mut() else {
            return Ok(());
        };
        if values.is_empty() {
            return Ok(());
        }

        let mut ticks  = UInt64Builder::with_capacity(values.len());
        let mut times  = Float64Builder::with_capacity(values.len());
        let mut ids    = UInt32Builder::with_capacity(values.len());
        let mut people = Float64Builder::with_capacity(values.len());
        for (&id, &v) in self.ids.iter().zip(values) {
            ticks.append_value(tick);
            times.append_value(time);
            ids.append_value(id);
            people.append_value(v);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.schema),
            vec![
                Arc::new(ticks.finish()),
                Arc::new(times.finish()),
                Arc::new(ids.finish()),
                Arc::new(people.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn close(&mut self) -> OutputResult<()> {
        if let Some(w) = self.writer.take() {
            w.close()?;
        }
        Ok(())
    }
}

/// Writes zone populations and transit flows to two Parquet files.
///
/// `finish()` **must** be called to write the Parquet file footer; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    zones:    StateTable,
    transits: StateTable,
}

impl ParquetWriter {
    /// Create both Parquet files in `dir`.
    pub fn new(dir: &Path, stem: &str) -> OutputResult<Self> {
        Ok(Self {
            zones:    StateTable::create(&dir.join(format!("{stem}_zone_states.parquet")), "zone_id")?,
            transits: StateTable::create(&dir.join(format!("{stem}_transit_flows.parquet")), "transit_id")?,
        })
    }
}

impl OutputWriter for ParquetWriter {
    fn begin(&mut self, layout: &OutputLayout) -> OutputResult<()> {
        self.zones.ids = layout.zones.iter().map(|z| z.id).collect();
        self.transits.ids = layout.transits.iter().map(|t| t.id).collect();
        Ok(())
    }

    fn write_state(&mut self, row: &StateRow) -> OutputResult<()> {
        check_shape((self.zones.ids.len(), self.transits.ids.len()), row)?;
        self.zones.write(row.tick, row.time, &row.zone_people)?;
        self.transits.write(row.tick, row.time, &row.transit_flow)?;
        Ok(())
    }

    fn write_summary(&mut self, _row: &SummaryRow) -> OutputResult<()> {
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.zones.close()?;
        self.transits.close()?;
        Ok(())
    }
}

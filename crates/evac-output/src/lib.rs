//! `evac-output` — result writers for the evac workspace.
//!
//! Three backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                                                   |
//! |-----------|---------|-----------------------------------------------------------------|
//! | *(none)*  | CSV     | `<stem>_detailed.csv`, `<stem>_short.csv`                       |
//! | `sqlite`  | SQLite  | `<stem>.db`                                                     |
//! | `parquet` | Parquet | `<stem>_zone_states.parquet`, `<stem>_transit_flows.parquet`    |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `evac_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use evac_output::{CsvWriter, SimOutputObserver, TimeUnit};
//!
//! let writer = CsvWriter::new(Path::new("./result"), "office")?;
//! let mut obs = SimOutputObserver::new(writer, TimeUnit::Minutes);
//! let summary = sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod format;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use format::OutputFormat;
pub use observer::SimOutputObserver;
pub use row::{ElementInfo, OutputLayout, StateRow, SummaryRow, TimeUnit};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use crate::sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use crate::parquet::ParquetWriter;

//! SQLite output backend (feature `sqlite`).
//!
//! Creates `<stem>.db` in the output directory with five tables:
//!
//! | Table           | One row per                          |
//! |-----------------|--------------------------------------|
//! | `zones`         | zone, outside included               |
//! | `transits`      | transit                              |
//! | `zone_states`   | (state, zone)                        |
//! | `transit_flows` | (state, transit)                     |
//! | `evac_summary`  | run                                  |
//!
//! A database left over from an earlier run with the same stem is replaced.

use std::path::Path;

use rusqlite::{Connection, params};

use crate::writer::{OutputWriter, check_shape};
use crate::{OutputLayout, OutputResult, StateRow, SummaryRow};

/// Writes evacuation results to an SQLite database.
pub struct SqliteWriter {
    conn:        Connection,
    zone_ids:    Vec<u32>,
    transit_ids: Vec<u32>,
    finished:    bool,
}

impl SqliteWriter {
    /// Create `<stem>.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path, stem: &str) -> OutputResult<Self> {
        let path = dir.join(format!("{stem}.db"));
        match std::fs::remove_file(&path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => return Err(e.into()),
            _ => {}
        }
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE zones (
                 zone_id INTEGER PRIMARY KEY,
                 key     TEXT    NOT NULL,
                 name    TEXT    NOT NULL,
                 kind    TEXT    NOT NULL,
                 area    REAL    NOT NULL
             );
             CREATE TABLE transits (
                 transit_id INTEGER PRIMARY KEY,
                 key        TEXT    NOT NULL,
                 name       TEXT    NOT NULL,
                 kind       TEXT    NOT NULL,
                 width      REAL    NOT NULL,
                 zone_a     INTEGER NOT NULL,
                 zone_b     INTEGER NOT NULL
             );
             CREATE TABLE zone_states (
                 tick    INTEGER NOT NULL,
                 time    REAL    NOT NULL,
                 zone_id INTEGER NOT NULL,
                 people  REAL    NOT NULL
             );
             CREATE TABLE transit_flows (
                 tick       INTEGER NOT NULL,
                 time       REAL    NOT NULL,
                 transit_id INTEGER NOT NULL,
                 people     REAL    NOT NULL
             );
             CREATE TABLE evac_summary (
                 building           TEXT    NOT NULL,
                 time_minutes       REAL    NOT NULL,
                 time_seconds       REAL    NOT NULL,
                 people_in_building REAL    NOT NULL,
                 evacuated          REAL    NOT NULL,
                 ticks              INTEGER NOT NULL,
                 stop_reason        TEXT    NOT NULL
             );",
        )?;

        Ok(Self { conn, zone_ids: Vec::new(), transit_ids: Vec::new(), finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn begin(&mut self, layout: &OutputLayout) -> OutputResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO zones (zone_id, key, name, kind, area) VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for z in &layout.zones {
                stmt.execute(params![z.id, z.key, z.name, z.kind, z.size])?;
            }
            let mut stmt = tx.prepare_cached(
                "INSERT INTO transits (transit_id, key, name, kind, width, zone_a, zone_b) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for (t, [a, b]) in layout.transits.iter().zip(&layout.ends) {
                stmt.execute(params![t.id, t.key, t.name, t.kind, t.size, a, b])?;
            }
        }
        tx.commit()?;

        self.zone_ids = layout.zones.iter().map(|z| z.id).collect();
        self.transit_ids = layout.transits.iter().map(|t| t.id).collect();
        Ok(())
    }

    fn write_state(&mut self, row: &StateRow) -> OutputResult<()> {
        check_shape((self.zone_ids.len(), self.transit_ids.len()), row)?;
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO zone_states (tick, time, zone_id, people) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for (id, people) in self.zone_ids.iter().zip(&row.zone_people) {
                stmt.execute(params![row.tick, row.time, id, people])?;
            }
            let mut stmt = tx.prepare_cached(
                "INSERT INTO transit_flows (tick, time, transit_id, people) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for (id, people) in self.transit_ids.iter().zip(&row.transit_flow) {
                stmt.execute(params![row.tick, row.time, id, people])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO evac_summary \
             (building, time_minutes, time_seconds, people_in_building, evacuated, ticks, stop_reason) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                row.building,
                row.time_minutes,
                row.time_seconds,
                row.people_in_building,
                row.evacuated,
                row.ticks,
                row.stop_reason,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}

//! JSON building-description loader.
//!
//! # Format
//!
//! Areas and widths are pre-computed; no geometry is involved.
//!
//! ```json
//! {
//!   "name": "two-storey office",
//!   "zones": [
//!     { "key": "out", "name": "Outside",   "sign": "outside" },
//!     { "key": "r1",  "name": "Room 1",    "sign": "room",      "z_level": 0.0, "area": 30.0, "people": 12 },
//!     { "key": "s1",  "name": "Stair 1F",  "sign": "staircase", "z_level": 0.0, "area": 12.0 },
//!     { "key": "s2",  "name": "Stair 2F",  "sign": "staircase", "z_level": 3.3, "area": 12.0 }
//!   ],
//!   "transits": [
//!     { "key": "d1", "name": "Exit",  "sign": "door_way_out", "width": 1.2, "zones": ["s1", "out"] },
//!     { "key": "d2", "name": "D-1",   "sign": "door_way_int", "width": 0.9, "zones": ["r1", "s1"] },
//!     { "key": "f1", "name": "Stair", "sign": "door_way",                   "zones": ["s1", "s2"] }
//!   ]
//! }
//! ```
//!
//! | Field          | Meaning                                                  |
//! |----------------|----------------------------------------------------------|
//! | `sign` (zone)  | `room` · `staircase` · `outside` (exactly one)           |
//! | `area`         | m²; required for rooms and staircases, ignored outside   |
//! | `people`       | initial population, default 0                            |
//! | `sign` (door)  | `door_way` · `door_way_out` · `door_way_int`             |
//! | `width`        | m; may be omitted only between two staircases            |
//! | `zones`        | keys of the two zones joined                             |

use std::io::Read;
use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use tracing::debug;

use evac_core::{TransitSign, ZoneId, ZoneSign};

use crate::building::{Building, BuildingBuilder};
use crate::element::{Transit, Zone};
use crate::{GraphError, GraphResult};

// ── JSON records ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct BuildingRecord {
    #[serde(default)]
    name:     String,
    zones:    Vec<ZoneRecord>,
    #[serde(default)]
    transits: Vec<TransitRecord>,
}

#[derive(Deserialize)]
struct ZoneRecord {
    key:     String,
    #[serde(default)]
    name:    String,
    sign:    ZoneSign,
    #[serde(default)]
    z_level: f64,
    area:    Option<f64>,
    #[serde(default)]
    people:  f64,
}

#[derive(Deserialize)]
struct TransitRecord {
    key:   String,
    #[serde(default)]
    name:  String,
    #[serde(default)]
    sign:  TransitSign,
    width: Option<f64>,
    zones: [String; 2],
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Building`] from a JSON file.
pub fn load_building_json(path: &Path) -> GraphResult<Building> {
    let file = std::fs::File::open(path)?;
    let mut building = load_building_reader(std::io::BufReader::new(file))?;
    if building.name.is_empty() {
        building.name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
    }
    Ok(building)
}

/// Like [`load_building_json`] but accepts any `Read` source.
pub fn load_building_reader<R: Read>(reader: R) -> GraphResult<Building> {
    let record: BuildingRecord = serde_json::from_reader(reader)?;
    from_record(record)
}

/// Parse a building description held in memory.
pub fn load_building_str(json: &str) -> GraphResult<Building> {
    let record: BuildingRecord = serde_json::from_str(json)?;
    from_record(record)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn from_record(record: BuildingRecord) -> GraphResult<Building> {
    let mut b = BuildingBuilder::with_capacity(record.name, record.zones.len(), record.transits.len());
    let mut by_key: FxHashMap<String, ZoneId> =
        FxHashMap::with_capacity_and_hasher(record.zones.len(), Default::default());

    for z in record.zones {
        let name = if z.name.is_empty() { z.key.clone() } else { z.name };
        let area = match (z.sign, z.area) {
            (ZoneSign::Outside, _) => 0.0,
            (_, Some(area)) => area,
            (_, None) => return Err(GraphError::MissingArea(name)),
        };
        let zone = Zone::new(name, z.sign, area)
            .at_level(z.z_level)
            .with_people(z.people)
            .with_key(z.key.clone());

        if by_key.contains_key(&z.key) {
            return Err(GraphError::DuplicateKey(z.key));
        }
        let id = b.add_zone(zone);
        by_key.insert(z.key, id);
    }

    let mut seen_transits: FxHashSet<String> = FxHashSet::default();
    for t in record.transits {
        if !seen_transits.insert(t.key.clone()) {
            return Err(GraphError::DuplicateKey(t.key));
        }
        let name = if t.name.is_empty() { t.key.clone() } else { t.name };
        let [ka, kb] = t.zones;
        let resolve = |k: String| {
            by_key.get(&k).copied().ok_or_else(|| GraphError::UnknownZone {
                transit: name.clone(),
                zone:    k,
            })
        };
        let a = resolve(ka)?;
        let c = resolve(kb)?;

        match t.width {
            Some(width) => {
                b.add_transit(Transit::new(name, t.sign, width).with_key(t.key), a, c);
            }
            None => {
                b.add_interfloor(Transit::new(name, t.sign, 0.0).with_key(t.key), a, c);
            }
        }
    }

    let building = b.build()?;
    debug!(
        building = %building.name,
        zones = building.zones.len(),
        transits = building.transits.len(),
        "building description loaded"
    );
    Ok(building)
}

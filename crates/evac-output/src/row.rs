//! Plain data handed from the observer to the backends.

use evac_graph::Building;
use evac_sim::EvacSummary;

/// Unit of the time column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnit {
    #[default]
    Minutes,
    Seconds,
}

impl TimeUnit {
    /// Convert a clock reading in minutes.
    #[inline]
    pub fn from_minutes(self, minutes: f64) -> f64 {
        match self {
            TimeUnit::Minutes => minutes,
            TimeUnit::Seconds => minutes * 60.0,
        }
    }

    /// `m` or `s`, used as a column suffix.
    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Minutes => "m",
            TimeUnit::Seconds => "s",
        }
    }
}

/// Static description of one zone or transit.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementInfo {
    pub id:   u32,
    pub key:  String,
    pub name: String,
    /// `room`, `staircase`, `door_way_out`, …
    pub kind: &'static str,
    /// Area (m²) for zones, width (m) for transits.
    pub size: f64,
}

/// Column layout of one run: which zones and transits the state rows carry,
/// in order.  Zones include the outside sink, so the evacuated count is
/// part of every state row.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputLayout {
    pub building: String,
    pub unit:     TimeUnit,
    pub zones:    Vec<ElementInfo>,
    pub transits: Vec<ElementInfo>,
    /// `[zone_a, zone_b]` ids per transit, parallel to `transits`.
    pub ends:     Vec<[u32; 2]>,
}

impl OutputLayout {
    pub fn from_building(building: &Building, unit: TimeUnit) -> Self {
        let zones = building
            .zones
            .iter()
            .map(|z| ElementInfo {
                id:   z.id.0,
                key:  z.key.clone(),
                name: z.name.clone(),
                kind: z.sign.as_str(),
                size: z.area,
            })
            .collect();
        let transits = building
            .transits
            .iter()
            .map(|t| ElementInfo {
                id:   t.id.0,
                key:  t.key.clone(),
                name: t.name.clone(),
                kind: t.sign.as_str(),
                size: t.width,
            })
            .collect();
        let ends = building.transits.iter().map(|t| [t.zones[0].0, t.zones[1].0]).collect();
        Self { building: building.name.clone(), unit, zones, transits, ends }
    }
}

/// Zone populations and transit flows at one point in time.
///
/// `zone_people` follows `OutputLayout::zones`, `transit_flow` follows
/// `OutputLayout::transits`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StateRow {
    pub tick:         u64,
    /// In the layout's unit.
    pub time:         f64,
    pub zone_people:  Vec<f64>,
    pub transit_flow: Vec<f64>,
}

impl StateRow {
    /// Overwrite `self` with the current state of `building`.
    pub fn fill(&mut self, tick: u64, time: f64, building: &Building) {
        self.tick = tick;
        self.time = time;
        self.zone_people.clear();
        self.zone_people.extend(building.zones.iter().map(|z| z.numofpeople));
        self.transit_flow.clear();
        self.transit_flow.extend(building.transits.iter().map(|t| t.nop_proceeding));
    }
}

/// End-of-run figures.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub building:           String,
    pub time_minutes:       f64,
    pub time_seconds:       f64,
    pub people_in_building: f64,
    pub evacuated:          f64,
    pub ticks:              u64,
    pub stop_reason:        &'static str,
}

impl From<&EvacSummary> for SummaryRow {
    fn from(s: &EvacSummary) -> Self {
        Self {
            building:           s.building.clone(),
            time_minutes:       s.time_minutes,
            time_seconds:       s.time_seconds,
            people_in_building: s.people_in_building,
            evacuated:          s.evacuated,
            ticks:              s.ticks,
            stop_reason:        s.stop_reason.as_str(),
        }
    }
}

//! Zone and transit records.
//!
//! Records are plain data with `pub` fields.  Identity (`id`) is assigned by
//! [`BuildingBuilder`](crate::BuildingBuilder) when the record is added; the
//! constructors here leave it as `INVALID`.

use evac_core::{TransitId, TransitSign, ZoneId, ZoneSign};

/// Nominal area of the outside sink.  Large enough that the sink never
/// limits flow; kept finite so densities stay well-defined.
pub const OUTSIDE_AREA: f64 = f32::MAX as f64;

// ── Zone ──────────────────────────────────────────────────────────────────────

/// A room, a staircase, or the outside sink.
#[derive(Clone, Debug, PartialEq)]
pub struct Zone {
    pub id:      ZoneId,
    /// Identifier from the building description; may be empty.
    pub key:     String,
    pub name:    String,
    pub sign:    ZoneSign,
    /// Floor elevation, metres.
    pub z_level: f64,
    /// Floor area, m².
    pub area:    f64,

    /// People currently in the zone.  Continuous, not an integer.
    pub numofpeople: f64,

    // ── Per-tick state ────────────────────────────────────────────────────
    /// Traversal cost to the outside.  `None` until the wavefront reaches
    /// the zone this tick.
    pub potential:  Option<f64>,
    pub is_visited: bool,

    /// Excluded from traversal until cleared by the caller.
    pub is_blocked: bool,
}

impl Zone {
    pub fn new(name: impl Into<String>, sign: ZoneSign, area: f64) -> Self {
        Self {
            id:          ZoneId::INVALID,
            key:         String::new(),
            name:        name.into(),
            sign,
            z_level:     0.0,
            area,
            numofpeople: 0.0,
            potential:   None,
            is_visited:  false,
            is_blocked:  false,
        }
    }

    pub fn room(name: impl Into<String>, area: f64) -> Self {
        Self::new(name, ZoneSign::Room, area)
    }

    pub fn staircase(name: impl Into<String>, area: f64) -> Self {
        Self::new(name, ZoneSign::Staircase, area)
    }

    pub fn outside() -> Self {
        Self::new("Outside", ZoneSign::Outside, OUTSIDE_AREA)
    }

    pub fn at_level(mut self, z_level: f64) -> Self {
        self.z_level = z_level;
        self
    }

    pub fn with_people(mut self, people: f64) -> Self {
        self.numofpeople = people;
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// People per m².
    #[inline]
    pub fn density(&self) -> f64 {
        self.numofpeople / self.area
    }

    #[inline]
    pub fn is_outside(&self) -> bool {
        self.sign == ZoneSign::Outside
    }
}

// ── Transit ───────────────────────────────────────────────────────────────────

/// An opening joining exactly two zones.
#[derive(Clone, Debug, PartialEq)]
pub struct Transit {
    pub id:    TransitId,
    pub key:   String,
    pub name:  String,
    pub sign:  TransitSign,
    /// Clear width, metres.
    pub width: f64,
    /// The two zones this transit joins, in registration order.
    pub zones: [ZoneId; 2],

    /// People moved through this transit during the current tick.
    pub nop_proceeding: f64,
    pub is_visited:     bool,
    pub is_blocked:     bool,
}

impl Transit {
    pub fn new(name: impl Into<String>, sign: TransitSign, width: f64) -> Self {
        Self {
            id:             TransitId::INVALID,
            key:            String::new(),
            name:           name.into(),
            sign,
            width,
            zones:          [ZoneId::INVALID; 2],
            nop_proceeding: 0.0,
            is_visited:     false,
            is_blocked:     false,
        }
    }

    pub fn door_way(name: impl Into<String>, width: f64) -> Self {
        Self::new(name, TransitSign::DoorWay, width)
    }

    /// Exterior door.
    pub fn door_out(name: impl Into<String>, width: f64) -> Self {
        Self::new(name, TransitSign::DoorWayOut, width)
    }

    /// Interior door.
    pub fn door_int(name: impl Into<String>, width: f64) -> Self {
        Self::new(name, TransitSign::DoorWayInt, width)
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// The zone on the other side of `from`, or `None` if `from` is not one
    /// of this transit's ends.
    pub fn other_side(&self, from: ZoneId) -> Option<ZoneId> {
        match self.zones {
            [a, b] if a == from => Some(b),
            [a, b] if b == from => Some(a),
            _ => None,
        }
    }
}

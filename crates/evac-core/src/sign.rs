//! Element kinds shared by the graph, flow model, and output crates.

use std::fmt;

/// The kind of a zone.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ZoneSign {
    /// Horizontal floor area.
    #[default]
    Room,
    /// Stair flight or landing.  Flow into a staircase from a different
    /// elevation uses the stair speed curve.
    Staircase,
    /// The synthetic exterior sink.  Exactly one per building.
    Outside,
}

impl ZoneSign {
    /// `true` for rooms and staircases, i.e. every zone inside the building.
    #[inline]
    pub fn is_interior(self) -> bool {
        !matches!(self, ZoneSign::Outside)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ZoneSign::Room      => "room",
            ZoneSign::Staircase => "staircase",
            ZoneSign::Outside   => "outside",
        }
    }
}

impl fmt::Display for ZoneSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of a transit (opening).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TransitSign {
    /// Doorless opening between two zones.
    #[default]
    DoorWay,
    /// Exterior door (one side is the outside sink).
    DoorWayOut,
    /// Interior door.
    DoorWayInt,
}

impl TransitSign {
    pub fn as_str(self) -> &'static str {
        match self {
            TransitSign::DoorWay    => "door_way",
            TransitSign::DoorWayOut => "door_way_out",
            TransitSign::DoorWayInt => "door_way_int",
        }
    }
}

impl fmt::Display for TransitSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of travel on a stair, seen from the people moving.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StairDirection {
    Up,
    Down,
}

impl StairDirection {
    /// Direction for people moving from a zone at `from_z` into one at `to_z`.
    #[inline]
    pub fn between(from_z: f64, to_z: f64) -> StairDirection {
        if to_z < from_z { StairDirection::Down } else { StairDirection::Up }
    }
}

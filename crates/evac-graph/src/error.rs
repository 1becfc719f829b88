//! Building-construction error type.

use thiserror::Error;

/// Errors produced while building or loading a [`Building`](crate::Building).
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("building has no outside zone")]
    NoOutside,

    #[error("building has more than one outside zone ({0} found)")]
    MultipleOutside(usize),

    #[error("zone {name:?} has non-positive area {area}")]
    NonPositiveArea { name: String, area: f64 },

    #[error("zone {0:?} has no area")]
    MissingArea(String),

    #[error("transit {name:?} has no width and does not join two staircases")]
    MissingWidth { name: String },

    #[error("transit {name:?} has non-positive width {width}")]
    NonPositiveWidth { name: String, width: f64 },

    #[error("transit {transit:?} references unknown zone {zone:?}")]
    UnknownZone { transit: String, zone: String },

    #[error("transit {0:?} connects a zone to itself")]
    SelfLoop(String),

    #[error("duplicate key {0:?}")]
    DuplicateKey(String),

    #[error("building description parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;

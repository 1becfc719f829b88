//! `evac-core` — foundational types for the evacuation flow workspace.
//!
//! This crate is a dependency of every other `evac-*` crate.  It has no
//! `evac-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`ids`]    | `ZoneId`, `TransitId`                                    |
//! | [`sign`]   | `ZoneSign`, `TransitSign`, `StairDirection`              |
//! | [`config`] | `EvacConfig` (speed / density limits, modeling step)     |
//! | [`time`]   | `Tick`, `EvacClock`                                      |
//! | [`error`]  | `EvacError`, `EvacResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types (scenarios). |

pub mod config;
pub mod error;
pub mod ids;
pub mod sign;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::EvacConfig;
pub use error::{EvacError, EvacResult};
pub use ids::{TransitId, ZoneId};
pub use sign::{StairDirection, TransitSign, ZoneSign};
pub use time::{EvacClock, Tick};

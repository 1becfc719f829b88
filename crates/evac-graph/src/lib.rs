//! `evac-graph` — zones, transits, and the graph that joins them.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`element`]  | `Zone`, `Transit` records                                  |
//! | [`graph`]    | `ZoneGraph` (CSR adjacency)                                |
//! | [`building`] | `Building` arena, `BuildingBuilder`                        |
//! | [`loader`]   | JSON building-description loader                           |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                             |
//!
//! A [`Building`] is built once and then mutated only through its records'
//! population and per-tick fields; the graph itself never changes.

pub mod building;
pub mod element;
pub mod error;
pub mod graph;
pub mod loader;

#[cfg(test)]
mod tests;

pub use building::{Building, BuildingBuilder, MIN_REASONABLE_WIDTH};
pub use element::{OUTSIDE_AREA, Transit, Zone};
pub use error::{GraphError, GraphResult};
pub use graph::ZoneGraph;
pub use loader::{load_building_json, load_building_reader, load_building_str};

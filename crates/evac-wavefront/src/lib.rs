//! `evac-wavefront` — the per-tick potential wavefront.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`engine`]   | `Wavefront<M>`: reset, expansion loop, pop trace            |
//! | [`exchange`] | exit speed, potential increment, people per transit         |
//!
//! # One tick
//!
//! 1. Per-tick fields are reset; the outside sink gets potential `0`.
//! 2. Starting at the outside, the expanding zone pulls people from each
//!    neighbour across every unvisited, unblocked transit.  Its potential
//!    grows by the neighbour's crossing cost `sqrt(area) / exit_speed`.
//! 3. Neighbours with further exits are queued; the queue is stable-sorted
//!    by potential and its head becomes the next expanding zone.
//! 4. The loop runs for `zone_count + 1` rounds.
//!
//! A tick never fails.  Degenerate numbers (a negative speed from an
//! out-of-range density) are logged at `error` level and used as computed.

pub mod engine;
pub mod exchange;


pub use engine::{Pop, Wavefront};
pub use exchange::{LEVEL_EPSILON, part_people_flow, potential_element, speed_at_exit, speed_in_element};

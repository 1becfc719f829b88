//! `evac-flow` — pedestrian speed as a function of local density.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`model`]    | `SpeedModel` trait                                        |
//! | [`standard`] | `StandardSpeedModel`, `CurveParams`, `log_velocity`       |
//!
//! # Pluggability
//!
//! The wavefront calls the flow model through the [`SpeedModel`] trait, so an
//! application can substitute curves calibrated against a different
//! engineering guideline without touching the wavefront.  The contract every
//! implementation must keep:
//!
//! - `v(0) = v_max` (and any density ≤ 0 returns `v_max`);
//! - non-increasing in density;
//! - pure: no state, same inputs → same output.
//!
//! Speeds are in metres per minute, densities in persons per m².

pub mod model;
pub mod standard;

#[cfg(test)]
mod tests;

pub use model::SpeedModel;
pub use standard::{CurveParams, StandardSpeedModel, log_velocity};

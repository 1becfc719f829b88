//! `evac-sim` — time driver and run loop for the evac workspace.
//!
//! # Tick loop
//!
//! ```text
//! repeat:
//!   ① Budget   stop if max_ticks ticks have run.
//!   ② Step     one wavefront pass moves people towards the outside.
//!   ③ Clock    evacuation time += modeling_step.
//!   ④ Report   on_tick_end, and on_snapshot every snapshot_interval ticks.
//!   ⑤ Stop?    people in zones reached this tick ≤ remainder.
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`driver`]   | `TimeDriver`: clock + wavefront, modeling-step policy     |
//! | [`sim`]      | `Sim`, `StopCondition`                                    |
//! | [`builder`]  | `SimBuilder`                                              |
//! | [`observer`] | `SimObserver`, `NoopObserver`                             |
//! | [`report`]   | `TickReport`, `EvacSummary`, `StopReason`                 |
//! | [`scenario`] | `ScenarioConfig` (JSON) and its application to a building |
//! | [`batch`]    | `run_batch` over independent buildings                    |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `run_batch` runs simulations on Rayon's thread pool.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use evac_graph::load_building_json;
//! use evac_sim::{NoopObserver, ScenarioConfig, SimBuilder};
//!
//! let scenario = ScenarioConfig::load("scenario.json".as_ref())?;
//! let mut building = load_building_json(&scenario.bim_files[0])?;
//! scenario.apply(&mut building)?;
//! let mut sim = SimBuilder::new(building)
//!     .config(scenario.modeling_parameters)
//!     .stop(scenario.stop)
//!     .build()?;
//! let summary = sim.run(&mut NoopObserver);
//! ```

pub mod batch;
pub mod builder;
pub mod driver;
pub mod error;
pub mod observer;
pub mod report;
pub mod scenario;
pub mod sim;


pub use batch::run_batch;
pub use builder::SimBuilder;
pub use driver::TimeDriver;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::{EvacSummary, StopReason, TickReport};
pub use scenario::{
    Blocking, Distribution, DistributionSpecial, DistributionType, OutputOptions, ScenarioConfig,
    Transition, TransitionSpecial, TransitionType,
};
pub use sim::{Sim, StopCondition};

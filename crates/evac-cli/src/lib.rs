//! `evac-cli` — command-line driver for the evac workspace.
//!
//! ```text
//! evac <scenario.json> [--out DIR] [--format csv|sqlite|parquet] [--seconds]
//!      [--max-ticks N] [--print-config] [--verbose|--quiet]
//! ```
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`args`]    | `CliArgs` (clap) and scenario overrides               |
//! | [`logging`] | tracing subscriber with `RUST_LOG` support            |
//! | [`run`]     | load → apply → simulate → write, per building         |

pub mod args;
pub mod logging;
pub mod run;

#[cfg(test)]
mod tests;

pub use args::CliArgs;
pub use run::{effective_scenario, run_scenario};

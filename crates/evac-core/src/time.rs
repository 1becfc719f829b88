//! Simulation time model.
//!
//! # Design
//!
//! Every tick advances simulated time by a fixed `modeling_step` expressed in
//! **minutes** (the unit the speed curves use: metres per minute).  Two
//! counters are kept side by side:
//!
//!   evac_time_min = Σ modeling_step   (one addition per tick)
//!   current_tick  = number of ticks since the last reset
//!
//! `evac_time_min` is accumulated rather than derived from `current_tick` so
//! reported times match a running sum exactly, including its rounding.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── EvacClock ─────────────────────────────────────────────────────────────────

/// Accumulating evacuation clock.
///
/// `EvacClock` is cheap to copy and holds no heap data.  It is owned by the
/// time driver; each independent simulation has its own.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvacClock {
    /// Minutes added per tick.
    pub modeling_step: f64,
    /// Elapsed evacuation time in minutes.
    pub evac_time_min: f64,
    /// Ticks since the last reset.
    pub current_tick:  Tick,
}

impl EvacClock {
    /// Create a clock at time zero with the given step (minutes per tick).
    pub fn new(modeling_step: f64) -> Self {
        Self {
            modeling_step,
            evac_time_min: 0.0,
            current_tick:  Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn time_inc(&mut self) {
        self.evac_time_min += self.modeling_step;
        self.current_tick = self.current_tick + 1;
    }

    /// Return to time zero (the step is kept).
    #[inline]
    pub fn time_reset(&mut self) {
        self.evac_time_min = 0.0;
        self.current_tick = Tick::ZERO;
    }

    #[inline]
    pub fn time_minutes(&self) -> f64 {
        self.evac_time_min
    }

    #[inline]
    pub fn time_seconds(&self) -> f64 {
        self.evac_time_min * 60.0
    }
}

impl fmt::Display for EvacClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.2} min, {:.2} s)",
            self.current_tick,
            self.time_minutes(),
            self.time_seconds()
        )
    }
}

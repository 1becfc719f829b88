//! Default flow model: logarithmic density/speed curves.
//!
//! Every context uses the same base relationship
//!
//! ```text
//! v(D) = v0 · (1 − a · ln(D / D0))    for D > D0
//! v(D) = v0                           otherwise
//! ```
//!
//! where `D0` is the density up to which people walk unimpeded and `a`
//! depends on the kind of path:
//!
//! | Context      | v0     | D0   | a     |
//! |--------------|--------|------|-------|
//! | room         | v_max  | 0.51 | 0.295 |
//! | stair, up    | 50     | 0.67 | 0.305 |
//! | stair, down  | 80     | 0.89 | 0.400 |
//! | opening      | v_max  | 0.65 | 0.295 |
//!
//! Openings get two corrections on top of the curve:
//!
//! - above `crowd_density` (5 persons/m²) the speed is scaled by
//!   `m = 1.25 − 0.05 · D`;
//! - at or above `jam_density` (9 persons/m²) a door narrower than
//!   `narrow_width` (1.6 m) passes a fixed intensity
//!   `q = 10 · (2.5 + 3.75 · width)` persons/min per metre, i.e. a speed of
//!   `q / D`.

use evac_core::StairDirection;

use crate::SpeedModel;

/// `v0 · (1 − a · ln(d / d0))`.
#[inline]
pub fn log_velocity(v0: f64, a: f64, d: f64, d0: f64) -> f64 {
    v0 * (1.0 - a * (d / d0).ln())
}

/// Shape of one logarithmic curve.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveParams {
    /// Density below which the curve returns its free speed, persons/m².
    pub d0: f64,
    /// Path-kind coefficient.
    pub a:  f64,
}

impl CurveParams {
    /// Speed at `density` for free speed `v0`.
    #[inline]
    pub fn speed(self, v0: f64, density: f64) -> f64 {
        if density > self.d0 {
            log_velocity(v0, self.a, density, self.d0)
        } else {
            v0
        }
    }
}

/// The default [`SpeedModel`].  All coefficients are public so a scenario
/// can recalibrate individual curves.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardSpeedModel {
    pub room:           CurveParams,
    pub transit:        CurveParams,
    pub stair_up:       CurveParams,
    pub stair_down:     CurveParams,
    /// Free speed going up a stair, m/min.
    pub stair_up_v0:    f64,
    /// Free speed going down a stair, m/min.
    pub stair_down_v0:  f64,
    /// Density above which the opening speed is scaled down.
    pub crowd_density:  f64,
    /// Density from which narrow openings pass a fixed intensity.
    pub jam_density:    f64,
    /// Openings narrower than this (m) are "narrow".
    pub narrow_width:   f64,
}

impl Default for StandardSpeedModel {
    fn default() -> Self {
        Self {
            room:          CurveParams { d0: 0.51, a: 0.295 },
            transit:       CurveParams { d0: 0.65, a: 0.295 },
            stair_up:      CurveParams { d0: 0.67, a: 0.305 },
            stair_down:    CurveParams { d0: 0.89, a: 0.4 },
            stair_up_v0:   50.0,
            stair_down_v0: 80.0,
            crowd_density: 5.0,
            jam_density:   9.0,
            narrow_width:  1.6,
        }
    }
}

impl SpeedModel for StandardSpeedModel {
    fn speed_in_room(&self, density: f64, v_max: f64) -> f64 {
        self.room.speed(v_max, density)
    }

    fn speed_on_stair(&self, density: f64, direction: StairDirection) -> f64 {
        match direction {
            StairDirection::Up   => self.stair_up.speed(self.stair_up_v0, density),
            StairDirection::Down => self.stair_down.speed(self.stair_down_v0, density),
        }
    }

    fn speed_through_transit(&self, width: f64, density: f64, v_max: f64) -> f64 {
        if density <= self.transit.d0 {
            return v_max;
        }

        if density >= self.jam_density && width < self.narrow_width {
            let intensity = 10.0 * (2.5 + 3.75 * width);
            return intensity / density;
        }

        let m = if density > self.crowd_density { 1.25 - 0.05 * density } else { 1.0 };
        self.transit.speed(v_max, density) * m
    }
}

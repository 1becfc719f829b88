//! Modeling parameters.
//!
//! One `EvacConfig` is passed by value into the time driver and the
//! wavefront of each simulation; there is no process-wide state, so several
//! simulations with different parameters can run side by side.

use crate::{EvacError, EvacResult};

/// Flow-model parameters for one simulation.
///
/// Typically deserialized from the `modeling` section of a scenario file
/// (field names are camelCase there: `maxSpeed`, `minDensity`, …).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct EvacConfig {
    /// Free-flow walking speed on a horizontal surface, m/min.  Default: 100.
    #[cfg_attr(feature = "serde", serde(alias = "maxSpeed"))]
    pub speed_max: f64,

    /// Density (persons/m²) below which a zone empties completely in one
    /// tick.  `0` switches to the per-zone fallback `0.5 / area`.
    /// Default: 0.1.
    #[cfg_attr(feature = "serde", serde(alias = "minDensity"))]
    pub density_min: f64,

    /// Maximum density a zone may receive, persons/m².  Default: 5.
    #[cfg_attr(feature = "serde", serde(alias = "maxDensity"))]
    pub density_max: f64,

    /// Tick length in minutes.  `0` means "derive from the building"
    /// (see [`EvacConfig::resolve_modeling_step`]).  Default: 0.
    #[cfg_attr(feature = "serde", serde(alias = "step"))]
    pub modeling_step: f64,
}

impl Default for EvacConfig {
    fn default() -> Self {
        Self {
            speed_max:     100.0,
            density_min:   0.1,
            density_max:   5.0,
            modeling_step: 0.0,
        }
    }
}

impl EvacConfig {
    /// Reject values the flow model cannot work with.
    pub fn validate(&self) -> EvacResult<()> {
        if !(self.speed_max > 0.0) {
            return Err(EvacError::Config(format!(
                "speed_max must be positive, got {}",
                self.speed_max
            )));
        }
        if !(self.density_max > 0.0) {
            return Err(EvacError::Config(format!(
                "density_max must be positive, got {}",
                self.density_max
            )));
        }
        if !(self.density_min >= 0.0) {
            return Err(EvacError::Config(format!(
                "density_min must be non-negative, got {}",
                self.density_min
            )));
        }
        if !(self.modeling_step >= 0.0) {
            return Err(EvacError::Config(format!(
                "modeling_step must be non-negative, got {}",
                self.modeling_step
            )));
        }
        Ok(())
    }

    /// Fill in an unset (zero) `modeling_step` from the building size:
    ///
    /// ```text
    /// step = sqrt(interior_area / zone_count) / speed_max * 0.1
    /// ```
    ///
    /// `zone_count` includes the outside sink.  A step that is already set is
    /// left untouched, so calling this twice is harmless.
    pub fn resolve_modeling_step(&mut self, interior_area: f64, zone_count: usize) {
        if self.modeling_step == 0.0 && zone_count > 0 {
            let characteristic_size = (interior_area / zone_count as f64).sqrt();
            self.modeling_step = characteristic_size / self.speed_max * 0.1;
        }
    }

    /// Effective minimum density for a zone of `area` m².
    #[inline]
    pub fn density_min_for(&self, area: f64) -> f64 {
        if self.density_min > 0.0 { self.density_min } else { 0.5 / area }
    }
}

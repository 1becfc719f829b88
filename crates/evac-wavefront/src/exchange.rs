//! Element-level quantities: exit speed, potential increment, and the
//! number of people that cross one transit in one tick.
//!
//! Every function here is pure: it reads the two zones and the transit and
//! returns a number.  Mutation happens only in
//! [`Wavefront::step`](crate::Wavefront::step).

use tracing::error;

use evac_core::{EvacConfig, StairDirection, ZoneSign};
use evac_flow::SpeedModel;
use evac_graph::{Transit, Zone};

/// Elevations closer than this (m) count as the same floor.
pub const LEVEL_EPSILON: f64 = 1e-3;

/// Speed of people walking inside `giver` towards `receiving`, m/min.
///
/// Horizontal speed, unless `receiving` is a staircase on a different
/// level, in which case the stair curve for the travel direction applies.
pub fn speed_in_element<M: SpeedModel + ?Sized>(
    config:    &EvacConfig,
    model:     &M,
    receiving: &Zone,
    giver:     &Zone,
) -> f64 {
    let density = giver.density();
    let dz = receiving.z_level - giver.z_level;

    if receiving.sign == ZoneSign::Staircase && dz.abs() > LEVEL_EPSILON {
        let direction = StairDirection::between(giver.z_level, receiving.z_level);
        model.speed_on_stair(density, direction)
    } else {
        model.speed_in_room(density, config.speed_max)
    }
}

/// Speed at which people leave `giver` through an opening of `width`:
/// the slower of the in-zone speed and the opening speed.
///
/// A negative result is logged and returned unchanged.
pub fn speed_at_exit<M: SpeedModel + ?Sized>(
    config:    &EvacConfig,
    model:     &M,
    receiving: &Zone,
    giver:     &Zone,
    width:     f64,
) -> f64 {
    let zone_speed = speed_in_element(config, model, receiving, giver);
    let transit_speed = model.speed_through_transit(width, giver.density(), config.speed_max);
    let v = zone_speed.min(transit_speed);

    if v < 0.0 {
        error!(
            receiving = %receiving.name,
            giver = %giver.name,
            density = giver.density(),
            width,
            zone_speed,
            transit_speed,
            "negative exit speed"
        );
    }
    v
}

/// Potential `receiving` takes after pulling from `giver` through `transit`.
///
/// The cost of crossing `giver` is `sqrt(area) / exit_speed`; it replaces an
/// unreached potential and is added to a reached one.
pub fn potential_element<M: SpeedModel + ?Sized>(
    config:    &EvacConfig,
    model:     &M,
    receiving: &Zone,
    giver:     &Zone,
    transit:   &Transit,
) -> f64 {
    let exit_speed = speed_at_exit(config, model, receiving, giver, transit.width);
    potential_at_speed(receiving, giver, exit_speed)
}

/// People that move from `giver` into `receiving` through `transit` during
/// one tick of `config.modeling_step` minutes.
///
/// A sparsely populated giver (density at or below the effective minimum)
/// empties completely.  The result never exceeds the room left in
/// `receiving` at `density_max`; the outside sink has no limit.
pub fn part_people_flow<M: SpeedModel + ?Sized>(
    config:    &EvacConfig,
    model:     &M,
    receiving: &Zone,
    giver:     &Zone,
    transit:   &Transit,
) -> f64 {
    let exit_speed = speed_at_exit(config, model, receiving, giver, transit.width);
    flow_at_speed(config, receiving, giver, transit, exit_speed)
}

/// [`potential_element`] with the exit speed already known.
pub(crate) fn potential_at_speed(receiving: &Zone, giver: &Zone, exit_speed: f64) -> f64 {
    let cost = giver.area.sqrt() / exit_speed;
    match receiving.potential {
        Some(p) => p + cost,
        None => cost,
    }
}

/// [`part_people_flow`] with the exit speed already known.
pub(crate) fn flow_at_speed(
    config:     &EvacConfig,
    receiving:  &Zone,
    giver:      &Zone,
    transit:    &Transit,
    exit_speed: f64,
) -> f64 {
    let density = giver.density();
    let density_min = config.density_min_for(giver.area);

    let candidate = if density > density_min {
        // persons/min through the opening, times the tick length
        density * exit_speed * transit.width * config.modeling_step
    } else {
        giver.numofpeople
    };

    let capacity = if receiving.is_outside() {
        f64::INFINITY
    } else {
        config.density_max * receiving.area - receiving.numofpeople
    };

    if capacity < 0.0 {
        return 0.0;
    }
    candidate.min(capacity)
}

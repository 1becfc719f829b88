//! Unit tests for evac-core primitives.

#[cfg(test)]
mod ids {
    use crate::{TransitId, ZoneId};

    #[test]
    fn index_roundtrip() {
        let id = ZoneId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(ZoneId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(ZoneId::INVALID.0, u32::MAX);
        assert_eq!(TransitId::INVALID.0, u32::MAX);
        assert_eq!(ZoneId::default(), ZoneId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(ZoneId(7).to_string(), "ZoneId(7)");
        assert_eq!(TransitId(3).to_string(), "TransitId(3)");
    }
}

#[cfg(test)]
mod sign {
    use crate::{StairDirection, ZoneSign};

    #[test]
    fn outside_is_not_interior() {
        assert!(ZoneSign::Room.is_interior());
        assert!(ZoneSign::Staircase.is_interior());
        assert!(!ZoneSign::Outside.is_interior());
    }

    #[test]
    fn stair_direction_follows_elevation() {
        // Moving from 3.0 m down to 0.0 m.
        assert_eq!(StairDirection::between(3.0, 0.0), StairDirection::Down);
        assert_eq!(StairDirection::between(0.0, 3.0), StairDirection::Up);
    }
}

#[cfg(test)]
mod clock {
    use crate::{EvacClock, Tick};

    #[test]
    fn time_inc_accumulates_minutes() {
        let mut clock = EvacClock::new(0.01);
        for _ in 0..3 {
            clock.time_inc();
        }
        assert!((clock.time_minutes() - 0.03).abs() < 1e-12);
        assert!((clock.time_seconds() - 1.8).abs() < 1e-9);
        assert_eq!(clock.current_tick, Tick(3));
    }

    #[test]
    fn time_reset_zeroes_but_keeps_step() {
        let mut clock = EvacClock::new(0.5);
        clock.time_inc();
        clock.time_reset();
        assert_eq!(clock.time_minutes(), 0.0);
        assert_eq!(clock.current_tick, Tick::ZERO);
        assert_eq!(clock.modeling_step, 0.5);
    }

    #[test]
    fn display_contains_tick_and_minutes() {
        let mut clock = EvacClock::new(1.0);
        clock.time_inc();
        assert_eq!(clock.to_string(), "T1 (1.00 min, 60.00 s)");
    }
}

#[cfg(test)]
mod config {
    use crate::EvacConfig;

    #[test]
    fn defaults() {
        let c = EvacConfig::default();
        assert_eq!(c.speed_max, 100.0);
        assert_eq!(c.density_min, 0.1);
        assert_eq!(c.density_max, 5.0);
        assert_eq!(c.modeling_step, 0.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_speed() {
        let c = EvacConfig { speed_max: 0.0, ..EvacConfig::default() };
        assert!(c.validate().is_err());
        let c = EvacConfig { speed_max: f64::NAN, ..EvacConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_negative_step() {
        let c = EvacConfig { modeling_step: -0.1, ..EvacConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn modeling_step_derived_once() {
        // 4 zones (3 interior + outside), 400 m² interior: sqrt(100) / 100 * 0.1.
        let mut c = EvacConfig::default();
        c.resolve_modeling_step(400.0, 4);
        assert!((c.modeling_step - 0.01).abs() < 1e-12);

        // Already set → untouched.
        c.resolve_modeling_step(1_000_000.0, 4);
        assert!((c.modeling_step - 0.01).abs() < 1e-12);
    }

    #[test]
    fn explicit_step_is_kept() {
        let mut c = EvacConfig { modeling_step: 0.05, ..EvacConfig::default() };
        c.resolve_modeling_step(400.0, 4);
        assert_eq!(c.modeling_step, 0.05);
    }

    #[test]
    fn density_min_fallback() {
        let c = EvacConfig { density_min: 0.0, ..EvacConfig::default() };
        assert_eq!(c.density_min_for(10.0), 0.05);
        let c = EvacConfig::default();
        assert_eq!(c.density_min_for(10.0), 0.1);
    }
}

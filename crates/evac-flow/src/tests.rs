//! Unit tests for evac-flow.

#[cfg(test)]
mod curves {
    use evac_core::StairDirection;

    use crate::{SpeedModel, StandardSpeedModel, log_velocity};

    const V_MAX: f64 = 100.0;

    fn densities() -> impl Iterator<Item = f64> {
        // 0.00 .. 12.00 in 0.05 steps; crosses every breakpoint.
        (0..=240).map(|i| i as f64 * 0.05)
    }

    #[test]
    fn log_velocity_at_d0_is_v0() {
        assert_eq!(log_velocity(80.0, 0.4, 0.89, 0.89), 80.0);
    }

    #[test]
    fn zero_and_negative_density_give_free_speed() {
        let m = StandardSpeedModel::default();
        for d in [0.0, -1.0] {
            assert_eq!(m.speed_in_room(d, V_MAX), V_MAX);
            assert_eq!(m.speed_through_transit(1.0, d, V_MAX), V_MAX);
            assert_eq!(m.speed_on_stair(d, StairDirection::Up), 50.0);
            assert_eq!(m.speed_on_stair(d, StairDirection::Down), 80.0);
        }
    }

    #[test]
    fn room_speed_reference_value() {
        // 1 person/m² on a horizontal surface.
        let m = StandardSpeedModel::default();
        assert_eq!(m.speed_in_room(1.0, V_MAX), 80.13633567871892);
    }

    #[test]
    fn room_speed_non_increasing() {
        let m = StandardSpeedModel::default();
        let mut prev = f64::INFINITY;
        for d in densities() {
            let v = m.speed_in_room(d, V_MAX);
            assert!(v <= prev, "room speed rose at d={d}: {v} > {prev}");
            prev = v;
        }
    }

    #[test]
    fn stair_speed_non_increasing_both_directions() {
        let m = StandardSpeedModel::default();
        for dir in [StairDirection::Up, StairDirection::Down] {
            let mut prev = f64::INFINITY;
            for d in densities() {
                let v = m.speed_on_stair(d, dir);
                assert!(v <= prev, "{dir:?} stair speed rose at d={d}");
                prev = v;
            }
        }
    }

    #[test]
    fn transit_speed_non_increasing_for_common_widths() {
        let m = StandardSpeedModel::default();
        for width in [0.6, 0.9, 1.2, 1.59, 1.6, 2.4] {
            let mut prev = f64::INFINITY;
            for d in densities() {
                let v = m.speed_through_transit(width, d, V_MAX);
                assert!(v <= prev, "transit speed rose at width={width} d={d}: {v} > {prev}");
                prev = v;
            }
        }
    }

    #[test]
    fn residual_speed_at_max_density_is_positive() {
        let m = StandardSpeedModel::default();
        assert!(m.speed_in_room(5.0, V_MAX) > 0.0);
        assert!(m.speed_through_transit(1.0, 5.0, V_MAX) > 0.0);
        assert!(m.speed_on_stair(5.0, StairDirection::Up) > 0.0);
        assert!(m.speed_on_stair(5.0, StairDirection::Down) > 0.0);
    }

    #[test]
    fn jammed_narrow_door_passes_fixed_intensity() {
        let m = StandardSpeedModel::default();
        // q = 10 * (2.5 + 3.75) = 62.5 persons/min/m → v = q / D.
        let v = m.speed_through_transit(1.0, 10.0, V_MAX);
        assert!((v - 6.25).abs() < 1e-12);
    }

    #[test]
    fn wide_door_ignores_jam_rule() {
        let m = StandardSpeedModel::default();
        let d = 10.0;
        let expected = log_velocity(V_MAX, 0.295, d, 0.65) * (1.25 - 0.05 * d);
        assert_eq!(m.speed_through_transit(2.0, d, V_MAX), expected);
    }

    #[test]
    fn boxed_model_delegates() {
        let boxed: Box<dyn SpeedModel> = Box::new(StandardSpeedModel::default());
        assert_eq!(boxed.speed_in_room(1.0, V_MAX), 80.13633567871892);
    }
}

//! The `SpeedModel` trait: the extension point for density/speed curves.

use evac_core::StairDirection;

/// Pluggable density → speed relationship.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one model can be shared by
/// simulations of independent buildings running on different threads.
///
/// # Example
///
/// ```
/// use evac_core::StairDirection;
/// use evac_flow::SpeedModel;
///
/// /// Everybody walks at full speed regardless of crowding.
/// struct Unimpeded;
///
/// impl SpeedModel for Unimpeded {
///     fn speed_in_room(&self, _density: f64, v_max: f64) -> f64 { v_max }
///     fn speed_on_stair(&self, _density: f64, _dir: StairDirection) -> f64 { 60.0 }
///     fn speed_through_transit(&self, _width: f64, _density: f64, v_max: f64) -> f64 { v_max }
/// }
///
/// assert_eq!(Unimpeded.speed_in_room(3.0, 100.0), 100.0);
/// ```
pub trait SpeedModel: Send + Sync {
    /// Flow speed on a horizontal surface at `density`.
    fn speed_in_room(&self, density: f64, v_max: f64) -> f64;

    /// Flow speed on a stair.  Stairs have their own free speed per
    /// direction, so no `v_max` is taken.
    fn speed_on_stair(&self, density: f64, direction: StairDirection) -> f64;

    /// Flow speed through an opening of `width` metres when the zone the
    /// people leave has `density`.
    fn speed_through_transit(&self, width: f64, density: f64, v_max: f64) -> f64;
}

impl<M: SpeedModel + ?Sized> SpeedModel for Box<M> {
    #[inline]
    fn speed_in_room(&self, density: f64, v_max: f64) -> f64 {
        (**self).speed_in_room(density, v_max)
    }

    #[inline]
    fn speed_on_stair(&self, density: f64, direction: StairDirection) -> f64 {
        (**self).speed_on_stair(density, direction)
    }

    #[inline]
    fn speed_through_transit(&self, width: f64, density: f64, v_max: f64) -> f64 {
        (**self).speed_through_transit(width, density, v_max)
    }
}

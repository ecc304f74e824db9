// Copyright (c) 2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The route module contains functions for composing a boat's route from its
//! heading, the wind drift and the current.
//!
//! The terms used are:
//!
//! - *cape compass*: the heading read on the compass;
//! - *true cape*: the heading corrected by the compass variation;
//! - *surface route*: the route through the water, the true cape corrected
//!   by the wind drift;
//! - *background route*: the route over the ground, the surface route
//!   corrected by the current.
//!
//! The current corrections model one hour of travel on a local plane tangent
//! to the Earth at the start position, see [`PlanarPosition`].

#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]

pub mod declination;

pub use declination::{calculate_declinaison, Declination};

use crate::calc::{
    calculate_coordinates_when_applying_force, degrees_to_radians, invert_angle_axis,
    normalize_angle, radians_to_degrees, round_decimals, safe_decimals, PlanarPosition,
};
use crate::geography::{
    convert_latitude_degrees_to_nautical_miles, convert_nautical_miles_to_latitude_degrees,
};
use crate::wind::get_wind_drift_sign;
use crate::{LatLong, NauticalMiles};
use angle_sc::{Degrees, Radians};

/// Calculate the variation of the compass used to steer a route.
/// * `declination` - the magnetic declination, in degrees.
/// * `deviation` - the deviation of the steering compass, in degrees.
#[must_use]
pub fn calculate_route_compass_variation(declination: Degrees, deviation: Degrees) -> Degrees {
    Degrees(safe_decimals(declination.0 + deviation.0))
}

/// Calculate the variation of the compass used to take bearings.
/// * `declination` - the magnetic declination, in degrees.
/// * `deviation` - the deviation of the bearing compass, in degrees.
#[must_use]
pub fn calculate_bearing_compass_variation(declination: Degrees, deviation: Degrees) -> Degrees {
    calculate_route_compass_variation(declination, deviation)
}

/// Calculate the true cape from the cape compass.
/// * `cape_compass` - the heading read on the compass, in degrees.
/// * `variation` - the compass variation, in degrees.
///
/// # Examples
/// ```
/// use angle_sc::Degrees;
/// use dead_reckoning::route::calculate_true_cape_from_cape_compass;
///
/// assert_eq!(110.0, calculate_true_cape_from_cape_compass(Degrees(100.0), Degrees(10.0)).0);
/// ```
#[must_use]
pub fn calculate_true_cape_from_cape_compass(cape_compass: Degrees, variation: Degrees) -> Degrees {
    Degrees(normalize_angle(
        safe_decimals(cape_compass.0 + variation.0),
        false,
    ))
}

/// Calculate the cape compass from the true cape, the inverse of
/// [`calculate_true_cape_from_cape_compass`].
/// * `true_cape` - the true heading, in degrees.
/// * `variation` - the compass variation, in degrees.
#[must_use]
pub fn calculate_cape_compass(true_cape: Degrees, variation: Degrees) -> Degrees {
    Degrees(normalize_angle(
        safe_decimals(true_cape.0 - variation.0),
        false,
    ))
}

/// Calculate the true cape to steer to follow a surface route, given the
/// wind drift.
/// * `surface_route` - the route through the water, in degrees.
/// * `wind_drift` - the wind drift angle, in degrees.
/// * `wind_direction` - the direction the wind is coming from, in degrees.
///
/// # Examples
/// ```
/// use angle_sc::Degrees;
/// use dead_reckoning::route::calculate_true_cape;
///
/// // wind on the starboard side, steer upwind of the route
/// assert_eq!(55.0, calculate_true_cape(Degrees(45.0), Degrees(10.0), Degrees(90.0)).0);
/// ```
#[must_use]
pub fn calculate_true_cape(
    surface_route: Degrees,
    wind_drift: Degrees,
    wind_direction: Degrees,
) -> Degrees {
    let sign = get_wind_drift_sign(wind_direction, surface_route);
    Degrees(normalize_angle(
        safe_decimals(surface_route.0 - sign * wind_drift.0),
        false,
    ))
}

/// Calculate the surface route followed when steering a true cape, given the
/// wind drift.
/// * `true_cape` - the true heading, in degrees.
/// * `wind_drift` - the wind drift angle, in degrees.
/// * `wind_direction` - the direction the wind is coming from, in degrees.
#[must_use]
pub fn calculate_surface_route_from_true_cape(
    true_cape: Degrees,
    wind_drift: Degrees,
    wind_direction: Degrees,
) -> Degrees {
    let sign = get_wind_drift_sign(wind_direction, true_cape);
    Degrees(normalize_angle(
        safe_decimals(true_cape.0 + sign * wind_drift.0),
        false,
    ))
}

/// Calculate the surface route to follow to make good a background route
/// across a current.
///
/// Solves the current triangle with the law of sines, the result is rounded
/// to one decimal place.
/// If the current is too strong for the boat to make good the background
/// route, i.e. `current_strength * sin(background_route - current_direction)`
/// is greater than `surface_speed`, the result is `NaN`.
/// * `background_route` - the route to make good over the ground, in degrees.
/// * `current_direction` - the direction the current is flowing to, in degrees.
/// * `current_strength` - the current strength in knots.
/// * `surface_speed` - the boat speed through the water in knots.
///
/// # Examples
/// ```
/// use angle_sc::Degrees;
/// use dead_reckoning::route::calculate_surface_route;
///
/// let surface_route = calculate_surface_route(Degrees(186.0), Degrees(160.0), 0.9, 5.0);
/// assert_eq!(190.5, surface_route.0);
/// ```
#[must_use]
pub fn calculate_surface_route(
    background_route: Degrees,
    current_direction: Degrees,
    current_strength: f64,
    surface_speed: f64,
) -> Degrees {
    if current_direction.0 == 0.0 || current_strength == 0.0 {
        log::trace!("calculate_surface_route: no current");
        return background_route;
    }

    if surface_speed == 0.0 {
        log::trace!("calculate_surface_route: drifting with the current");
        return current_direction;
    }

    let drift_angle = Degrees(background_route.0 - current_direction.0);
    let ratio = current_strength * libm::sin(degrees_to_radians(drift_angle).0) / surface_speed;
    if !(-1.0..=1.0).contains(&ratio) {
        log::warn!(
            "calculate_surface_route: current {current_strength}kts too strong for surface speed {surface_speed}kts"
        );
    }

    let correction = radians_to_degrees(Radians(libm::asin(ratio)));
    let route = round_decimals(normalize_angle(background_route.0 + correction.0, false), 1);
    Degrees(normalize_angle(route, false))
}

/// The parameters of a current drift problem: a boat leaving a position on a
/// surface route at a surface speed, carried by a current.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurrentDrift {
    /// The start position.
    pub position: LatLong,
    /// The route through the water.
    pub surface_route: Degrees,
    /// The speed through the water in knots.
    pub surface_speed: f64,
    /// The direction the current is flowing to.
    pub current_direction: Degrees,
    /// The current strength in knots.
    pub current_strength: f64,
}

impl CurrentDrift {
    /// Constructor.
    /// * `position` - the start position.
    /// * `surface_route` - the route through the water.
    /// * `surface_speed` - the speed through the water in knots.
    /// * `current_direction` - the direction the current is flowing to.
    /// * `current_strength` - the current strength in knots.
    #[must_use]
    pub const fn new(
        position: LatLong,
        surface_route: Degrees,
        surface_speed: f64,
        current_direction: Degrees,
        current_strength: f64,
    ) -> Self {
        Self {
            position,
            surface_route,
            surface_speed,
            current_direction,
            current_strength,
        }
    }

    /// The start position on the local plane.
    #[must_use]
    pub fn start(&self) -> PlanarPosition {
        PlanarPosition::new(self.position.lon().0, self.position.lat().0)
    }

    /// The position on the local plane after one hour through the water.
    #[must_use]
    fn after_surface_route(&self, position: &PlanarPosition) -> PlanarPosition {
        project(position, self.surface_speed, self.surface_route)
    }

    /// The position on the local plane after one hour of current.
    #[must_use]
    fn after_current(&self, position: &PlanarPosition) -> PlanarPosition {
        project(position, self.current_strength, self.current_direction)
    }
}

/// Move a position by one hour of travel at `speed` along the compass
/// `direction`.
#[must_use]
fn project(position: &PlanarPosition, speed: f64, direction: Degrees) -> PlanarPosition {
    calculate_coordinates_when_applying_force(
        position,
        convert_nautical_miles_to_latitude_degrees(NauticalMiles(speed)).0,
        invert_angle_axis(direction.0),
    )
}

/// Calculate the background route made good by a boat carried by a current.
///
/// The result is rounded to one decimal place.
/// * `params` - the current drift parameters.
///
/// # Examples
/// ```
/// use angle_sc::Degrees;
/// use dead_reckoning::route::{calculate_background_route, CurrentDrift};
/// use dead_reckoning::LatLong;
///
/// let params = CurrentDrift::new(
///     LatLong::new(Degrees(47.5036666667), Degrees(-2.92)),
///     Degrees(147.0),
///     2.5,
///     Degrees(155.0),
///     1.5,
/// );
/// assert_eq!(150.0, calculate_background_route(&params).0);
/// ```
#[must_use]
pub fn calculate_background_route(params: &CurrentDrift) -> Degrees {
    if params.surface_speed == 0.0 && params.current_strength == 0.0 {
        log::trace!("calculate_background_route: stationary");
        return Degrees(0.0);
    }

    if params.surface_speed == 0.0 {
        log::trace!("calculate_background_route: drifting with the current");
        return params.current_direction;
    }

    if params.current_direction.0 == 0.0 || params.current_strength == 0.0 {
        log::trace!("calculate_background_route: no current");
        return params.surface_route;
    }

    let start = params.start();
    let end = params.after_current(&params.after_surface_route(&start));

    // compass bearing: x (East) is the opposite side, y (North) the adjacent
    let bearing = radians_to_degrees(Radians(libm::atan2(end.x - start.x, end.y - start.y)));
    let route = round_decimals(normalize_angle(safe_decimals(bearing.0), false), 1);
    Degrees(normalize_angle(route, false))
}

/// Calculate the background speed, in knots, of a boat carried by a current.
///
/// The result is rounded to two decimal places.
/// * `params` - the current drift parameters.
#[must_use]
pub fn calculate_background_speed(params: &CurrentDrift) -> f64 {
    let start = params.start();
    let end = params.after_surface_route(&params.after_current(&start));

    let distance = convert_latitude_degrees_to_nautical_miles(Degrees(end.distance(&start)));
    round_decimals(safe_decimals(distance.0), 2)
}

/// The headings to steer to make good a background route.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Course {
    /// The steering compass variation.
    pub variation: Degrees,
    /// The route through the water.
    pub surface_route: Degrees,
    /// The true heading.
    pub true_cape: Degrees,
    /// The heading to steer on the compass.
    pub cape_compass: Degrees,
}

/// Calculate the headings to steer to make good a background route,
/// correcting in turn for the current, the wind drift and the compass
/// variation.
/// * `background_route` - the route to make good over the ground.
/// * `current_direction` - the direction the current is flowing to.
/// * `current_strength` - the current strength in knots.
/// * `surface_speed` - the boat speed through the water in knots.
/// * `wind_drift` - the wind drift angle.
/// * `wind_direction` - the direction the wind is coming from.
/// * `declination` - the magnetic declination.
/// * `deviation` - the deviation of the steering compass.
///
/// # Examples
/// ```
/// use angle_sc::Degrees;
/// use dead_reckoning::route::plan_course;
///
/// let course = plan_course(
///     Degrees(150.0),
///     Degrees(155.0),
///     1.5,
///     2.5,
///     Degrees(5.0),
///     Degrees(0.0),
///     Degrees(4.0),
///     Degrees(8.0),
/// );
/// assert_eq!(12.0, course.variation.0);
/// assert_eq!(147.0, course.surface_route.0);
/// assert_eq!(142.0, course.true_cape.0);
/// assert_eq!(130.0, course.cape_compass.0);
/// ```
#[allow(clippy::too_many_arguments)]
#[must_use]
pub fn plan_course(
    background_route: Degrees,
    current_direction: Degrees,
    current_strength: f64,
    surface_speed: f64,
    wind_drift: Degrees,
    wind_direction: Degrees,
    declination: Degrees,
    deviation: Degrees,
) -> Course {
    let variation = calculate_route_compass_variation(declination, deviation);
    let surface_route = calculate_surface_route(
        background_route,
        current_direction,
        current_strength,
        surface_speed,
    );
    let true_cape = calculate_true_cape(surface_route, wind_drift, wind_direction);
    Course {
        variation,
        surface_route,
        true_cape,
        cape_compass: calculate_cape_compass(true_cape, variation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current_drift(
        lat: f64,
        lon: f64,
        surface_route: f64,
        surface_speed: f64,
        current_direction: f64,
        current_strength: f64,
    ) -> CurrentDrift {
        CurrentDrift::new(
            LatLong::new(Degrees(lat), Degrees(lon)),
            Degrees(surface_route),
            surface_speed,
            Degrees(current_direction),
            current_strength,
        )
    }

    #[test]
    fn test_compass_variation() {
        let route = |declination: f64, deviation: f64| {
            calculate_route_compass_variation(Degrees(declination), Degrees(deviation)).0
        };
        assert_eq!(8.0, route(5.0, 3.0));
        assert_eq!(3.0, route(0.0, 3.0));
        assert_eq!(-2.0, route(-5.0, 3.0));
        assert_eq!(-8.0, route(-5.0, -3.0));

        let bearing = |declination: f64, deviation: f64| {
            calculate_bearing_compass_variation(Degrees(declination), Degrees(deviation)).0
        };
        assert_eq!(7.0, bearing(5.0, 2.0));
        assert_eq!(5.0, bearing(5.0, 0.0));
        assert_eq!(3.0, bearing(5.0, -2.0));
        assert_eq!(-7.0, bearing(-5.0, -2.0));
    }

    #[test]
    fn test_true_cape_and_cape_compass() {
        assert_eq!(
            110.0,
            calculate_true_cape_from_cape_compass(Degrees(100.0), Degrees(10.0)).0
        );
        assert_eq!(
            90.0,
            calculate_true_cape_from_cape_compass(Degrees(100.0), Degrees(-10.0)).0
        );
        assert_eq!(
            100.0,
            calculate_true_cape_from_cape_compass(Degrees(100.0), Degrees(0.0)).0
        );
        assert_eq!(
            355.0,
            calculate_true_cape_from_cape_compass(Degrees(5.0), Degrees(-10.0)).0
        );

        assert_eq!(115.0, calculate_cape_compass(Degrees(120.0), Degrees(5.0)).0);
        assert_eq!(350.0, calculate_cape_compass(Degrees(2.0), Degrees(12.0)).0);
        assert_eq!(
            47.0,
            calculate_cape_compass(
                calculate_true_cape_from_cape_compass(Degrees(47.0), Degrees(-3.5)),
                Degrees(-3.5)
            )
            .0
        );
    }

    #[test]
    fn test_calculate_true_cape() {
        let cape = |route: f64, drift: f64, wind: f64| {
            calculate_true_cape(Degrees(route), Degrees(drift), Degrees(wind)).0
        };
        assert_eq!(55.0, cape(45.0, 10.0, 90.0));
        assert_eq!(35.0, cape(45.0, 10.0, 270.0));
        assert_eq!(45.0, cape(45.0, 0.0, 90.0));
        assert_eq!(10.0, cape(0.0, 10.0, 90.0));
        // wind on the bow
        assert_eq!(45.0, cape(45.0, 10.0, 47.0));
    }

    #[test]
    fn test_calculate_surface_route_from_true_cape() {
        let route = |cape: f64, drift: f64, wind: f64| {
            calculate_surface_route_from_true_cape(Degrees(cape), Degrees(drift), Degrees(wind)).0
        };
        assert_eq!(35.0, route(45.0, 10.0, 90.0));
        assert_eq!(55.0, route(45.0, 10.0, 270.0));
        assert_eq!(45.0, route(45.0, 0.0, 90.0));
        assert_eq!(350.0, route(0.0, 10.0, 90.0));
        assert_eq!(5.0, route(355.0, 10.0, 270.0));
    }

    #[test]
    fn test_calculate_surface_route() {
        let route = |background: f64, direction: f64, strength: f64, speed: f64| {
            calculate_surface_route(Degrees(background), Degrees(direction), strength, speed).0
        };
        assert_eq!(190.5, route(186.0, 160.0, 0.9, 5.0));
        assert_eq!(311.0, route(302.0, 200.0, 0.8, 5.0));
        assert_eq!(147.0, route(150.0, 155.0, 1.5, 2.5));

        // no current
        assert_eq!(45.0, route(45.0, 0.0, 5.0, 20.0));
        assert_eq!(45.0, route(45.0, 10.0, 0.0, 20.0));
        // no speed through the water
        assert_eq!(10.0, route(45.0, 10.0, 5.0, 0.0));
        // current too strong
        assert!(route(100.0, 10.0, 5.0, 2.0).is_nan());
        // 359.96 rounds to a full turn
        assert_eq!(0.0, route(359.97, 90.0, 0.001, 10.0));
    }

    #[test]
    fn test_calculate_background_route() {
        let route = |lat: f64, lon: f64, sr: f64, ss: f64, cd: f64, cs: f64| {
            calculate_background_route(&current_drift(lat, lon, sr, ss, cd, cs)).0
        };
        assert_eq!(150.0, route(47.5036666667, -2.92, 147.0, 2.5, 155.0, 1.5));
        assert_eq!(300.5, route(47.4375, -2.9708333333, 273.0, 2.0, 8.0, 1.0));
        assert_eq!(340.4, route(47.2875, -3.05925, 354.0, 3.2, 308.0, 1.4));
        assert_eq!(
            338.2,
            route(47.3808333333, -3.1016666667, 334.0, 4.8, 128.0, 0.7)
        );
        assert_eq!(302.0, route(47.36, -2.7525, 311.0, 5.0, 200.0, 0.8));
        assert_eq!(186.4, route(47.3991666667, -2.6475, 191.0, 5.0, 160.0, 0.9));
        assert_eq!(
            159.8,
            route(47.5383333333, -2.9933333333, 154.5, 4.5, 180.0, 1.2)
        );
        assert_eq!(
            160.0,
            route(47.5316666667, -2.9916666667, 142.5, 4.0, 250.0, 1.2)
        );
        assert_eq!(9.4, route(47.3541666667, -2.5916666667, 355.0, 4.0, 74.0, 1.1));
        assert_eq!(
            162.7,
            route(47.4016666667, -3.04583333333, 177.0, 4.8, 82.0, 1.2)
        );
        assert_eq!(
            180.0,
            route(47.4016666667, -3.04583333333, 191.1, 5.0, 74.0, 1.0)
        );
        // 359.98 rounds to a full turn
        assert_eq!(
            0.0,
            route(47.4016666667, -3.04583333333, 348.9, 5.0, 74.0, 1.0)
        );
    }

    #[test]
    fn test_calculate_background_route_degenerate() {
        let route = |sr: f64, ss: f64, cd: f64, cs: f64| {
            calculate_background_route(&current_drift(47.4375, -2.9708333333, sr, ss, cd, cs)).0
        };
        assert_eq!(120.0, route(144.0, 0.0, 120.0, 1.4));
        assert_eq!(144.0, route(144.0, 4.2, 120.0, 0.0));
        assert_eq!(0.0, route(144.0, 0.0, 120.0, 0.0));
        assert_eq!(144.0, route(144.0, 4.2, 0.0, 1.4));
    }

    #[test]
    fn test_calculate_background_speed() {
        let speed = |lat: f64, lon: f64, sr: f64, ss: f64, cd: f64, cs: f64| {
            calculate_background_speed(&current_drift(lat, lon, sr, ss, cd, cs))
        };
        assert_eq!(3.99, speed(47.5036666667, -2.92, 147.0, 2.5, 155.0, 1.5));
        assert_eq!(
            5.51,
            speed(47.5191666667, -3.05583333333, 144.0, 4.2, 120.0, 1.4)
        );
        assert_eq!(10.0, speed(40.73061, -73.935242, 180.0, 10.0, 90.0, 0.0));
        assert_eq!(5.0, speed(40.73061, -73.935242, 180.0, 0.0, 90.0, 5.0));
        assert_eq!(0.0, speed(40.73061, -73.935242, 180.0, 0.0, 90.0, 0.0));
    }

    #[test]
    fn test_plan_course() {
        let course = plan_course(
            Degrees(150.0),
            Degrees(155.0),
            1.5,
            2.5,
            Degrees(5.0),
            Degrees(0.0),
            Degrees(4.0),
            Degrees(8.0),
        );
        assert_eq!(12.0, course.variation.0);
        assert_eq!(147.0, course.surface_route.0);
        assert_eq!(142.0, course.true_cape.0);
        assert_eq!(130.0, course.cape_compass.0);
    }

    #[test]
    fn test_plan_course_reverses_background_route() {
        // steer the surface route planned for a background route of 302°
        let course = plan_course(
            Degrees(302.0),
            Degrees(200.0),
            0.8,
            5.0,
            Degrees(0.0),
            Degrees(0.0),
            Degrees(0.0),
            Degrees(0.0),
        );
        assert_eq!(0.0, course.variation.0);
        assert_eq!(311.0, course.surface_route.0);

        let params = current_drift(47.36, -2.7525, course.surface_route.0, 5.0, 200.0, 0.8);
        let copied = params;
        assert_eq!(params, copied);
        assert_eq!(302.0, calculate_background_route(&copied).0);
    }
}

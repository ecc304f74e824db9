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

//! The calc module contains the scalar and angle primitives that the
//! navigation formulas are built on.
//!
//! Angles in this module are plain `f64` values in degrees unless stated
//! otherwise. Two angle conventions are used throughout the crate:
//!
//! - *compass*: 0° is North, increasing clockwise;
//! - *mathematical*: 0° is the +x axis (East), increasing counter-clockwise.
//!
//! [`invert_angle_axis`] converts between them.

#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]

use angle_sc::{Degrees, Radians};
use core::f64::consts::{FRAC_PI_2, PI};

/// A full turn, in degrees.
pub const FULL_TURN: f64 = 360.0;

/// The maximum angular distance, in degrees, for two angles to be "close".
pub const CLOSE_ANGLE_DEGREES: f64 = 5.0;

/// The scaling factor used by [`safe_decimals`], 10^14.
const SAFE_DECIMALS_FACTOR: f64 = 100_000_000_000_000.0;

/// Round a value to 14 decimal places, to remove floating point noise
/// before the value is compared or used in further arithmetic.
///
/// Ties are rounded away from zero. `NaN` and infinities are returned
/// unchanged.
/// * `value` - the value to round.
///
/// # Examples
/// ```
/// use dead_reckoning::calc::safe_decimals;
///
/// assert_eq!(1.23456789012346, safe_decimals(1.2345678901234567));
/// assert_eq!(0.3, safe_decimals(0.1 + 0.2));
/// ```
#[must_use]
pub fn safe_decimals(value: f64) -> f64 {
    libm::round(value * SAFE_DECIMALS_FACTOR) / SAFE_DECIMALS_FACTOR
}

/// Round a value to a number of decimal places.
///
/// Ties are rounded away from zero.
/// * `value` - the value to round.
/// * `places` - the number of decimal places to keep.
///
/// # Examples
/// ```
/// use dead_reckoning::calc::round_decimals;
///
/// assert_eq!(190.5, round_decimals(190.525_731_709_699_8, 1));
/// assert_eq!(-6.04, round_decimals(-6.036_666_666_666_667, 2));
/// ```
#[must_use]
pub fn round_decimals(value: f64, places: i32) -> f64 {
    let factor = libm::pow(10.0, f64::from(places));
    libm::round(value * factor) / factor
}

/// Add a value to an angle, the result is in the range [0, 360).
/// * `angle` - the angle in degrees.
/// * `value` - the value to add, in degrees.
///
/// # Examples
/// ```
/// use dead_reckoning::calc::add_angle;
///
/// assert_eq!(10.0, add_angle(350.0, 20.0));
/// assert_eq!(327.0, add_angle(147.0, -180.0));
/// ```
#[must_use]
pub fn add_angle(angle: f64, value: f64) -> f64 {
    normalize_angle(angle + value, false)
}

/// Normalize an angle.
///
/// When `allow_negative` is false the angle is reduced into [0, 360) using a
/// floor modulo, so multiples of 360 become positive zero.
///
/// When `allow_negative` is true the angle is reduced with a truncating
/// modulo: the result keeps the sign of `angle` and lies in (-360, 360),
/// e.g. `normalize_angle(-1080.0, true)` is `-0.0`.
/// * `angle` - the angle in degrees.
/// * `allow_negative` - whether to keep the sign of `angle`.
///
/// # Examples
/// ```
/// use dead_reckoning::calc::normalize_angle;
///
/// assert_eq!(10.0, normalize_angle(370.0, false));
/// assert_eq!(330.0, normalize_angle(-30.0, false));
/// assert_eq!(-30.0, normalize_angle(-30.0, true));
/// ```
#[must_use]
pub fn normalize_angle(angle: f64, allow_negative: bool) -> f64 {
    let remainder = angle % FULL_TURN;
    if allow_negative {
        remainder
    } else if remainder < 0.0 {
        let positive = remainder + FULL_TURN;
        // a tiny negative remainder can round up to a full turn
        if positive < FULL_TURN {
            positive
        } else {
            0.0
        }
    } else {
        libm::fabs(remainder)
    }
}

/// Test whether two angles are within 5° of each other, taking the
/// wrap around at 0°/360° into account.
/// * `angle1`, `angle2` - the angles in degrees.
///
/// # Examples
/// ```
/// use dead_reckoning::calc::are_angles_close;
///
/// assert!(are_angles_close(357.0, 2.0));
/// assert!(!are_angles_close(10.0, 20.0));
/// ```
#[must_use]
pub fn are_angles_close(angle1: f64, angle2: f64) -> bool {
    let distance = libm::fabs(angle1 - angle2);
    distance <= CLOSE_ANGLE_DEGREES || FULL_TURN - distance <= CLOSE_ANGLE_DEGREES
}

/// Convert an angle in `Degrees` to `Radians`.
/// * `degrees` - the angle in degrees.
#[must_use]
pub const fn degrees_to_radians(degrees: Degrees) -> Radians {
    Radians(degrees.0 * (PI / 180.0))
}

/// Convert an angle in `Radians` to `Degrees`.
/// * `radians` - the angle in radians.
#[must_use]
pub const fn radians_to_degrees(radians: Radians) -> Degrees {
    Degrees(radians.0 * (180.0 / PI))
}

/// The cotangent of an angle in radians.
///
/// Returns an infinity at the poles of the tangent, e.g. `cot(0.0)`.
/// * `x` - the angle in radians.
#[must_use]
pub fn cot(x: f64) -> f64 {
    1.0 / libm::tan(x)
}

/// The arc cotangent of a value, in radians, in the range (0, π).
/// * `x` - the value.
#[must_use]
pub fn arcctg(x: f64) -> f64 {
    FRAC_PI_2 - libm::atan(x)
}

/// Swap an angle between the compass and the mathematical conventions,
/// i.e. `90 - angle`.
///
/// The result is not normalized.
/// * `angle` - the angle in degrees.
///
/// # Examples
/// ```
/// use dead_reckoning::calc::invert_angle_axis;
///
/// assert_eq!(0.0, invert_angle_axis(90.0));
/// assert_eq!(-90.0, invert_angle_axis(180.0));
/// ```
#[must_use]
pub const fn invert_angle_axis(angle: f64) -> f64 {
    90.0 - angle
}

/// A position on a local plane tangent to the Earth.
///
/// `x` runs along longitude and `y` along latitude, both in degrees.
/// It is only an approximation used to compose route and current vectors.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlanarPosition {
    /// The longitude like coordinate.
    pub x: f64,
    /// The latitude like coordinate.
    pub y: f64,
}

impl PlanarPosition {
    /// Constructor.
    /// * `x` - the longitude like coordinate.
    /// * `y` - the latitude like coordinate.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The Euclidean distance between this position and `other`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        libm::hypot(self.x - other.x, self.y - other.y)
    }
}

/// Calculate the position reached by applying a force to a position.
///
/// The force is applied along `angle`, in the mathematical convention, and
/// each coordinate of the result is passed through [`safe_decimals`].
/// A negative `force` moves the position in the opposite direction.
/// * `position` - the start position.
/// * `force` - the magnitude of the force.
/// * `angle` - the direction of the force in degrees.
///
/// # Examples
/// ```
/// use dead_reckoning::calc::{calculate_coordinates_when_applying_force, PlanarPosition};
///
/// let result = calculate_coordinates_when_applying_force(&PlanarPosition::new(5.0, 5.0), 10.0, 45.0);
/// assert_eq!(PlanarPosition::new(12.07106781186548, 12.07106781186548), result);
/// ```
#[must_use]
pub fn calculate_coordinates_when_applying_force(
    position: &PlanarPosition,
    force: f64,
    angle: f64,
) -> PlanarPosition {
    let theta = degrees_to_radians(Degrees(angle)).0;
    PlanarPosition {
        x: safe_decimals(position.x + force * libm::cos(theta)),
        y: safe_decimals(position.y + force * libm::sin(theta)),
    }
}

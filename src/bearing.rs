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

//! The bearing module contains functions for correcting bearings taken with
//! a compass or relative to the boat's heading.

use crate::calc::{normalize_angle, safe_decimals};
use angle_sc::Degrees;

/// Add a correction to an angle, the result is in the range [0, 360).
#[must_use]
fn correct(angle: Degrees, correction: Degrees) -> Degrees {
    Degrees(normalize_angle(safe_decimals(angle.0 + correction.0), false))
}

/// Calculate the true bearing from a compass bearing and the variation.
/// * `compass_bearing` - the bearing read on the compass, in degrees.
/// * `variation` - the compass variation, in degrees.
///
/// # Examples
/// ```
/// use angle_sc::Degrees;
/// use dead_reckoning::bearing::calculate_true_bearing;
///
/// assert_eq!(5.0, calculate_true_bearing(Degrees(350.0), Degrees(15.0)).0);
/// ```
#[must_use]
pub fn calculate_true_bearing(compass_bearing: Degrees, variation: Degrees) -> Degrees {
    correct(compass_bearing, variation)
}

/// Calculate the true relative bearing from an observed relative bearing and
/// the instrumental error.
/// * `observed_relative_bearing` - the observed relative bearing, in degrees.
/// * `instrumental_error` - the instrumental error, in degrees.
#[must_use]
pub fn calculate_true_relative_bearing(
    observed_relative_bearing: Degrees,
    instrumental_error: Degrees,
) -> Degrees {
    correct(observed_relative_bearing, instrumental_error)
}

/// Calculate a bearing from a bearing relative to the boat and the cape.
/// * `relative_bearing` - the bearing relative to the bow, in degrees.
/// * `cape` - the boat's cape, in degrees.
#[must_use]
pub fn calculate_bearing_from_relative_bearing(relative_bearing: Degrees, cape: Degrees) -> Degrees {
    correct(relative_bearing, cape)
}

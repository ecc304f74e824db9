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

//! The geography module contains conversions between distances and
//! latitude degrees, and the cardinal directions.

use crate::NauticalMiles;
use angle_sc::Degrees;
use serde::{Deserialize, Serialize};

/// The number of nautical miles in one degree of latitude.
pub const NAUTICAL_MILES_PER_DEGREE: f64 = 60.0;

/// Convert a distance in nautical miles to degrees of latitude.
/// * `distance` - the distance in nautical miles.
///
/// # Examples
/// ```
/// use dead_reckoning::NauticalMiles;
/// use dead_reckoning::geography::convert_nautical_miles_to_latitude_degrees;
///
/// assert_eq!(2.0, convert_nautical_miles_to_latitude_degrees(NauticalMiles(120.0)).0);
/// ```
#[must_use]
pub const fn convert_nautical_miles_to_latitude_degrees(distance: NauticalMiles) -> Degrees {
    Degrees(distance.0 / NAUTICAL_MILES_PER_DEGREE)
}

/// Convert degrees of latitude to a distance in nautical miles.
/// * `degrees` - the latitude difference in degrees.
#[must_use]
pub const fn convert_latitude_degrees_to_nautical_miles(degrees: Degrees) -> NauticalMiles {
    NauticalMiles(degrees.0 * NAUTICAL_MILES_PER_DEGREE)
}

/// The four cardinal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeographyDirection {
    /// Towards the North pole.
    North,
    /// Towards the South pole.
    South,
    /// Towards increasing longitude.
    East,
    /// Towards decreasing longitude.
    West,
}

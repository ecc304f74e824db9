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

//! The wind module contains functions for estimating the leeway, the drift
//! angle caused by the wind, and the side of the boat it pushes towards.
//!
//! The sign convention used by the route functions is:
//!
//! - `0` the wind is on the bow or on the stern, there is no lateral drift;
//! - `1` the wind is on the port side;
//! - `-1` the wind is on the starboard side.

#![allow(clippy::float_cmp)]

use crate::calc::{add_angle, are_angles_close, round_decimals, safe_decimals};
use angle_sc::Degrees;
use serde::{Deserialize, Serialize};

/// Calculate the wind drift angle from the wind and boat speeds.
///
/// The drift is `wind_speed * drift_coefficient / boat_speed`, rounded to two
/// decimal places. Zero is returned for a stationary boat.
/// * `wind_speed` - the wind speed in knots.
/// * `boat_speed` - the boat speed in knots.
/// * `drift_coefficient` - the effect of the wind on the boat's drift.
///
/// # Examples
/// ```
/// use dead_reckoning::wind::calculate_wind_drift;
///
/// assert_eq!(0.75, calculate_wind_drift(15.0, 10.0, 0.5).0);
/// assert_eq!(0.0, calculate_wind_drift(15.0, 0.0, 0.5).0);
/// ```
#[must_use]
pub fn calculate_wind_drift(wind_speed: f64, boat_speed: f64, drift_coefficient: f64) -> Degrees {
    if boat_speed == 0.0 {
        return Degrees(0.0);
    }

    Degrees(round_decimals(
        safe_decimals(wind_speed * drift_coefficient / boat_speed),
        2,
    ))
}

/// Determine the sign of the wind drift from the wind and boat directions.
///
/// The boundaries are asymmetric: with the boat heading 180° or more, a wind
/// exactly 180° before the heading counts as starboard; with the boat heading
/// less than 180°, a wind exactly 180° after the heading counts as port.
/// * `wind_direction` - the direction the wind is coming from, in degrees.
/// * `boat_direction` - the heading of the boat, in degrees.
///
/// returns `0.0` for wind on the bow or stern, `1.0` for wind on the port side
/// and `-1.0` for wind on the starboard side.
///
/// # Examples
/// ```
/// use angle_sc::Degrees;
/// use dead_reckoning::wind::get_wind_drift_sign;
///
/// assert_eq!(-1.0, get_wind_drift_sign(Degrees(90.0), Degrees(45.0)));
/// assert_eq!(1.0, get_wind_drift_sign(Degrees(45.0), Degrees(90.0)));
/// ```
#[must_use]
pub fn get_wind_drift_sign(wind_direction: Degrees, boat_direction: Degrees) -> f64 {
    wind_edge(wind_direction, boat_direction).drift_sign()
}

/// The edges of a boat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoatEdge {
    /// The front of the boat.
    Bow,
    /// The rear of the boat.
    Stern,
    /// The left side of the boat when facing forward.
    Port,
    /// The right side of the boat when facing forward.
    Starboard,
}

impl BoatEdge {
    /// The wind drift sign of wind coming from this edge.
    #[must_use]
    pub const fn drift_sign(self) -> f64 {
        match self {
            Self::Bow | Self::Stern => 0.0,
            Self::Port => 1.0,
            Self::Starboard => -1.0,
        }
    }
}

/// Determine which edge of the boat the wind is coming from.
/// * `wind_direction` - the direction the wind is coming from, in degrees.
/// * `boat_direction` - the heading of the boat, in degrees.
#[must_use]
pub fn wind_edge(wind_direction: Degrees, boat_direction: Degrees) -> BoatEdge {
    let wind = wind_direction.0;
    let boat = boat_direction.0;

    if are_angles_close(wind, boat) {
        return BoatEdge::Bow;
    }
    if are_angles_close(wind, add_angle(boat, -180.0)) {
        return BoatEdge::Stern;
    }

    // split at 180° so that neither half wraps around North
    if boat >= 180.0 {
        if wind > boat || wind <= boat - 180.0 {
            BoatEdge::Starboard
        } else {
            BoatEdge::Port
        }
    } else if wind < boat || wind >= boat + 180.0 {
        BoatEdge::Port
    } else {
        BoatEdge::Starboard
    }
}

/// The characteristics of a boat that affect its navigation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boat {
    /// The effect of the wind on the boat's drift.
    pub drift_coefficient: f64,
}

impl Boat {
    /// Constructor.
    /// * `drift_coefficient` - the effect of the wind on the boat's drift.
    #[must_use]
    pub const fn new(drift_coefficient: f64) -> Self {
        Self { drift_coefficient }
    }

    /// The wind drift of the boat, see [`calculate_wind_drift`].
    /// * `wind_speed` - the wind speed in knots.
    /// * `boat_speed` - the boat speed in knots.
    #[must_use]
    pub fn wind_drift(&self, wind_speed: f64, boat_speed: f64) -> Degrees {
        calculate_wind_drift(wind_speed, boat_speed, self.drift_coefficient)
    }
}

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

//! The declination module contains the magnetic declination extrapolation.
//!
//! Charts give the declination at a reference year together with its annual
//! change, in minutes of arc per year, e.g. "4°10'W 2000 (8'E)".

#![allow(clippy::suboptimal_flops)]

use crate::calc::{round_decimals, safe_decimals};
use crate::Error;
use angle_sc::Degrees;
use serde::{Deserialize, Serialize};

/// The number of minutes of arc in a degree.
pub const MINUTES_PER_DEGREE: f64 = 60.0;

/// Calculate the magnetic declination at a year from a reference declination
/// and its annual change.
///
/// The declination changes linearly: `declination + annual_delta * years / 60`,
/// rounded to two decimal places.
/// * `declination` - the declination at `start_year`, in degrees.
/// * `annual_delta` - the annual change of the declination, in minutes of arc.
/// * `start_year` - the year of the reference declination.
/// * `current_year` - the year to calculate the declination for.
///
/// # Errors
///
/// Returns `Error::InvalidYearRange` if `current_year` is before `start_year`.
///
/// # Examples
/// ```
/// use angle_sc::Degrees;
/// use dead_reckoning::route::calculate_declinaison;
///
/// let declination = calculate_declinaison(Degrees(10.6), -8.0, 2000, 2015).unwrap();
/// assert_eq!(8.6, declination.0);
///
/// assert!(calculate_declinaison(Degrees(10.0), 0.1, 2000, 1999).is_err());
/// ```
pub fn calculate_declinaison(
    declination: Degrees,
    annual_delta: f64,
    start_year: i32,
    current_year: i32,
) -> Result<Degrees, Error> {
    if current_year < start_year {
        return Err(Error::InvalidYearRange {
            start_year,
            current_year,
        });
    }

    let years = f64::from(current_year) - f64::from(start_year);
    Ok(Degrees(round_decimals(
        safe_decimals(declination.0 + annual_delta * years / MINUTES_PER_DEGREE),
        2,
    )))
}

/// A magnetic declination reference, as printed on a chart.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Declination {
    /// The declination at the start year, in degrees, East positive.
    pub declination: f64,
    /// The annual change of the declination, in minutes of arc.
    pub annual_delta: f64,
    /// The year of the reference declination.
    pub start_year: i32,
}

impl Declination {
    /// Constructor.
    /// * `declination` - the declination at `start_year`, in degrees.
    /// * `annual_delta` - the annual change, in minutes of arc.
    /// * `start_year` - the year of the reference declination.
    #[must_use]
    pub const fn new(declination: f64, annual_delta: f64, start_year: i32) -> Self {
        Self {
            declination,
            annual_delta,
            start_year,
        }
    }

    /// The declination at `year`, see [`calculate_declinaison`].
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidYearRange` if `year` is before the start year.
    pub fn at_year(&self, year: i32) -> Result<Degrees, Error> {
        calculate_declinaison(
            Degrees(self.declination),
            self.annual_delta,
            self.start_year,
            year,
        )
    }
}

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

//! dead-reckoning
//!
//! A library of the formulas used to navigate a boat by
//! [dead reckoning](https://en.wikipedia.org/wiki/Dead_reckoning) in coastal
//! waters: correcting compass bearings and headings, estimating the drift
//! caused by the wind and composing the route over the ground with the
//! current.
//!
//! ## From the compass to the ground
//!
//! A navigator steering a boat deals with four directions:
//!
//! 1. the *cape compass*, the heading read on the compass;
//! 2. the *true cape*, the cape compass corrected by the compass *variation*,
//!    the sum of the magnetic *declination* and the compass *deviation*;
//! 3. the *surface route*, the route through the water: the true cape
//!    corrected by the *wind drift*;
//! 4. the *background route*, the route over the ground: the surface route
//!    corrected by the current.
//!
//! The [`route`] module converts between them in both directions, e.g.
//! [`route::plan_course`] calculates the cape compass to steer to make good a
//! background route.
//!
//! ## Design
//!
//! Every function is pure: it takes a handful of scalars and returns a
//! scalar or a small `Copy` record. Intermediate values are rounded to 14
//! decimal places with [`calc::safe_decimals`] to remove floating point noise
//! and final routes are rounded to the precision a navigator can steer.
//!
//! The current corrections compose vectors on a plane tangent to the Earth at
//! the start position, see [`calc::PlanarPosition`], one degree of latitude
//! being sixty nautical miles.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees` and
//!   `Radians`;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define
//!   `NauticalMiles`.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications, e.g. a chart plotter.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod bearing;
pub mod calc;
pub mod geography;
pub mod route;
pub mod wind;

pub use angle_sc::{Degrees, Radians};
pub use icao_units::non_si::NauticalMiles;
pub use unit_sphere::LatLong;

/// The errors returned by the navigation formulas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The year to calculate a value for is before its reference year.
    #[error("the current year ({current_year}) must be greater than the start year ({start_year})")]
    InvalidYearRange {
        /// The reference year.
        start_year: i32,
        /// The requested year.
        current_year: i32,
    },
}

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

extern crate dead_reckoning;

use dead_reckoning::route::{
    calculate_background_route, calculate_background_speed, calculate_surface_route,
    CurrentDrift,
};
use dead_reckoning::{Degrees, LatLong};

const FILENAME: &str = "data/background_route_examples.csv";

/// latitude, longitude, surface_route, surface_speed, current_direction,
/// current_strength, background_route, background_speed
type DataRecord = (f64, f64, f64, f64, f64, f64, f64, f64);

fn read_examples() -> Result<Vec<DataRecord>, Box<dyn std::error::Error>> {
    let mut rdr = csv::Reader::from_path(FILENAME)?;
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        records.push(result?);
    }
    Ok(records)
}

#[test]
fn test_background_route_examples() -> Result<(), Box<dyn std::error::Error>> {
    let records = read_examples()?;
    assert_eq!(12, records.len());

    for (line_number, record) in records.iter().enumerate() {
        let params = CurrentDrift::new(
            LatLong::new(Degrees(record.0), Degrees(record.1)),
            Degrees(record.2),
            record.3,
            Degrees(record.4),
            record.5,
        );

        let route = calculate_background_route(&params);
        assert_eq!(
            record.6, route.0,
            "background route, line: {line_number} params: {params:?}"
        );

        let speed = calculate_background_speed(&params);
        assert_eq!(
            record.7, speed,
            "background speed, line: {line_number} params: {params:?}"
        );
    }

    Ok(())
}

#[test]
fn test_surface_route_recovers_background_route() -> Result<(), Box<dyn std::error::Error>> {
    let records = read_examples()?;

    for (line_number, record) in records.iter().enumerate() {
        let background_route = Degrees(record.6);
        let surface_route =
            calculate_surface_route(background_route, Degrees(record.4), record.5, record.3);

        // the current triangle inverts the plane projection
        let mut delta = (surface_route.0 - record.2).abs();
        if delta > 180.0 {
            delta = 360.0 - delta;
        }
        assert!(
            delta < 0.05,
            "surface route, line: {line_number} expected: {} result: {}",
            record.2,
            surface_route.0
        );
    }

    Ok(())
}

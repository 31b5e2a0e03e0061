//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::coordinates::GeoPoint;
use crate::math::{self, HALF_PI, PI, TWO_PI};
use std::fmt;

/// WGS84 position in radians.
///
/// The default value has NaN coordinates and is invalid.
#[derive(Clone, Copy, Debug)]
pub struct GeoCoordinates {
    latitude: f64,
    longitude: f64,
}

impl Default for GeoCoordinates {
    fn default() -> GeoCoordinates {
        GeoCoordinates {
            latitude: f64::NAN,
            longitude: f64::NAN,
        }
    }
}

impl GeoCoordinates {
    /// Position from latitude and longitude in radians
    pub fn new(latitude: f64, longitude: f64) -> GeoCoordinates {
        GeoCoordinates {
            latitude,
            longitude,
        }
    }
    pub fn from_radians(latitude: f64, longitude: f64) -> GeoCoordinates {
        GeoCoordinates::new(latitude, longitude)
    }
    pub fn from_degrees(latitude: f64, longitude: f64) -> GeoCoordinates {
        GeoCoordinates::new(latitude.to_radians(), longitude.to_radians())
    }
    pub fn from_geo_point(point: GeoPoint) -> GeoCoordinates {
        let factor = TWO_PI / u32::MAX as f64;
        GeoCoordinates::new(
            point.y as f64 * factor - HALF_PI,
            point.x as f64 * factor - PI,
        )
    }
    /// Fixed point representation of the normalized position
    pub fn to_geo_point(&self) -> GeoPoint {
        let norm = self.normalized();
        let factor = u32::MAX as f64 / TWO_PI;
        GeoPoint::new(
            ((norm.longitude + PI) * factor).round() as u32,
            ((norm.latitude + HALF_PI) * factor).round() as u32,
        )
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }
    pub fn set_latitude(&mut self, latitude: f64) {
        self.latitude = latitude;
    }
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
    pub fn set_longitude(&mut self, longitude: f64) {
        self.longitude = longitude;
    }
    pub fn latitude_degrees(&self) -> f64 {
        self.latitude.to_degrees()
    }
    pub fn set_latitude_degrees(&mut self, latitude: f64) {
        self.latitude = latitude.to_radians();
    }
    pub fn longitude_degrees(&self) -> f64 {
        self.longitude.to_degrees()
    }
    pub fn set_longitude_degrees(&mut self, longitude: f64) {
        self.longitude = longitude.to_radians();
    }

    pub fn is_valid(&self) -> bool {
        !self.latitude.is_nan() && !self.longitude.is_nan()
    }
    /// Latitude clamped to `[-π/2, π/2]`, longitude wrapped into `[-π, π)`.
    ///
    /// Invalid positions are returned unchanged.
    pub fn normalized(&self) -> GeoCoordinates {
        if !self.is_valid() {
            return *self;
        }
        GeoCoordinates::new(
            math::clamp(self.latitude, -HALF_PI, HALF_PI),
            math::wrap(self.longitude, -PI, PI),
        )
    }
}

impl PartialEq for GeoCoordinates {
    fn eq(&self, other: &GeoCoordinates) -> bool {
        math::epsilon_equal(self.latitude, other.latitude)
            && math::epsilon_equal(self.longitude, other.longitude)
    }
}

impl fmt::Display for GeoCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

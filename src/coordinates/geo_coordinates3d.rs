//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::coordinates::GeoCoordinates;
use crate::math;

/// WGS84 position with altitude in meters
#[derive(Clone, Copy, Debug)]
pub struct GeoCoordinates3d {
    geo_coordinates: GeoCoordinates,
    altitude: f64,
}

impl Default for GeoCoordinates3d {
    fn default() -> GeoCoordinates3d {
        GeoCoordinates3d {
            geo_coordinates: GeoCoordinates::default(),
            altitude: f64::NAN,
        }
    }
}

impl GeoCoordinates3d {
    /// Position from latitude and longitude in radians
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> GeoCoordinates3d {
        GeoCoordinates3d::with_altitude(GeoCoordinates::new(latitude, longitude), altitude)
    }
    pub fn with_altitude(geo_coordinates: GeoCoordinates, altitude: f64) -> GeoCoordinates3d {
        GeoCoordinates3d {
            geo_coordinates,
            altitude,
        }
    }
    pub fn from_radians(latitude: f64, longitude: f64, altitude: f64) -> GeoCoordinates3d {
        GeoCoordinates3d::new(latitude, longitude, altitude)
    }
    pub fn from_degrees(latitude: f64, longitude: f64, altitude: f64) -> GeoCoordinates3d {
        GeoCoordinates3d::with_altitude(GeoCoordinates::from_degrees(latitude, longitude), altitude)
    }

    pub fn geo_coordinates(&self) -> GeoCoordinates {
        self.geo_coordinates
    }
    pub fn set_geo_coordinates(&mut self, geo_coordinates: GeoCoordinates) {
        self.geo_coordinates = geo_coordinates;
    }
    pub fn latitude(&self) -> f64 {
        self.geo_coordinates.latitude()
    }
    pub fn set_latitude(&mut self, latitude: f64) {
        self.geo_coordinates.set_latitude(latitude);
    }
    pub fn longitude(&self) -> f64 {
        self.geo_coordinates.longitude()
    }
    pub fn set_longitude(&mut self, longitude: f64) {
        self.geo_coordinates.set_longitude(longitude);
    }
    pub fn latitude_degrees(&self) -> f64 {
        self.geo_coordinates.latitude_degrees()
    }
    pub fn set_latitude_degrees(&mut self, latitude: f64) {
        self.geo_coordinates.set_latitude_degrees(latitude);
    }
    pub fn longitude_degrees(&self) -> f64 {
        self.geo_coordinates.longitude_degrees()
    }
    pub fn set_longitude_degrees(&mut self, longitude: f64) {
        self.geo_coordinates.set_longitude_degrees(longitude);
    }
    pub fn altitude(&self) -> f64 {
        self.altitude
    }
    pub fn set_altitude(&mut self, altitude: f64) {
        self.altitude = altitude;
    }

    pub fn is_valid(&self) -> bool {
        !self.altitude.is_nan() && self.geo_coordinates.is_valid()
    }
}

impl From<GeoCoordinates> for GeoCoordinates3d {
    /// Position without altitude. The result is invalid until an altitude is set.
    fn from(geo_coordinates: GeoCoordinates) -> GeoCoordinates3d {
        GeoCoordinates3d::with_altitude(geo_coordinates, f64::NAN)
    }
}

impl PartialEq for GeoCoordinates3d {
    fn eq(&self, other: &GeoCoordinates3d) -> bool {
        math::epsilon_equal(self.altitude, other.altitude)
            && self.geo_coordinates == other.geo_coordinates
    }
}

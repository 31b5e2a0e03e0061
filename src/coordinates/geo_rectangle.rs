//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::coordinates::GeoCoordinates;
use crate::math::{self, HALF_PI, PI, TWO_PI};

/// Geographic rectangle given by its south-west and north-east corners.
///
/// A rectangle whose western longitude is greater than its eastern longitude
/// crosses the antimeridian. The default rectangle is empty.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct GeoRectangle {
    south_west: GeoCoordinates,
    north_east: GeoCoordinates,
}

impl Default for GeoRectangle {
    fn default() -> GeoRectangle {
        GeoRectangle {
            south_west: GeoCoordinates::new(HALF_PI, PI),
            north_east: GeoCoordinates::new(-HALF_PI, -PI),
        }
    }
}

impl GeoRectangle {
    pub fn new(south_west: GeoCoordinates, north_east: GeoCoordinates) -> GeoRectangle {
        GeoRectangle {
            south_west,
            north_east,
        }
    }

    pub fn south_west(&self) -> GeoCoordinates {
        self.south_west
    }
    pub fn north_east(&self) -> GeoCoordinates {
        self.north_east
    }
    pub fn south_east(&self) -> GeoCoordinates {
        GeoCoordinates::new(self.south_west.latitude(), self.north_east.longitude())
    }
    pub fn north_west(&self) -> GeoCoordinates {
        GeoCoordinates::new(self.north_east.latitude(), self.south_west.longitude())
    }

    /// Negative for empty rectangles
    pub fn latitude_span(&self) -> f64 {
        self.north_east.latitude() - self.south_west.latitude()
    }
    /// Width in radians, taking the antimeridian into account
    pub fn longitude_span(&self) -> f64 {
        let width = self.north_east.longitude() - self.south_west.longitude();
        if width < 0.0 {
            width + TWO_PI
        } else {
            width
        }
    }
    pub fn is_empty(&self) -> bool {
        self.latitude_span() < 0.0
    }

    pub fn center(&self) -> GeoCoordinates {
        let latitude = (self.south_west.latitude() + self.north_east.latitude()) * 0.5;
        let west = self.south_west.longitude();
        let east = self.north_east.longitude();
        if west < east {
            return GeoCoordinates::new(latitude, (west + east) * 0.5);
        }
        GeoCoordinates::new(latitude, math::wrap((TWO_PI + east + west) * 0.5, -PI, PI))
    }

    /// Point inside the rectangle, boundaries included
    pub fn contains(&self, point: &GeoCoordinates) -> bool {
        if point.latitude() < self.south_west.latitude()
            || point.latitude() > self.north_east.latitude()
        {
            return false;
        }
        let west = self.south_west.longitude();
        let east = self.north_east.longitude();
        if east > west {
            point.longitude() >= west && point.longitude() <= east
        } else {
            // crossing the antimeridian, outside is the wedge between east and west
            point.longitude() >= west || point.longitude() <= east
        }
    }

    /// Rectangles share an area. Touching edges do not overlap.
    pub fn overlaps(&self, other: &GeoRectangle) -> bool {
        if self.south_west.latitude() >= other.north_east.latitude()
            || other.south_west.latitude() >= self.north_east.latitude()
        {
            return false;
        }
        let (west, east) = self.unwrapped_longitudes();
        let (other_west, other_east) = other.unwrapped_longitudes();
        !(west >= other_east || other_west >= east)
    }

    fn unwrapped_longitudes(&self) -> (f64, f64) {
        let west = self.south_west.longitude();
        let east = self.north_east.longitude();
        if west >= east {
            (west, west + self.longitude_span())
        } else {
            (west, east)
        }
    }

    /// Smallest rectangle containing both rectangles.
    ///
    /// If the union extends beyond the antimeridian, the eastern longitude is
    /// wrapped around and stays just west of the new western longitude.
    pub fn boolean_union(&self, other: &GeoRectangle) -> GeoRectangle {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let south_west = GeoCoordinates::new(
            self.south_west.latitude().min(other.south_west.latitude()),
            self.south_west.longitude().min(other.south_west.longitude()),
        );
        let east = self.unwrapped_longitudes().1;
        let other_east = other.unwrapped_longitudes().1;
        let mut max_longitude = east.max(other_east);
        if max_longitude > PI {
            let upper_limit =
                math::next_after(south_west.longitude(), south_west.longitude() - 1.0);
            max_longitude = (max_longitude - TWO_PI).min(upper_limit);
        }
        let north_east = GeoCoordinates::new(
            self.north_east.latitude().max(other.north_east.latitude()),
            max_longitude,
        );
        GeoRectangle::new(south_west, north_east)
    }

    /// Extend the rectangle to contain `point`.
    ///
    /// Every bound is extended independently, the antimeridian is not considered.
    pub fn grow_to_contain(&mut self, point: &GeoCoordinates) {
        let latitude = point.latitude();
        let longitude = point.longitude();
        if latitude < self.south_west.latitude() {
            self.south_west.set_latitude(latitude);
        }
        if latitude > self.north_east.latitude() {
            self.north_east.set_latitude(latitude);
        }
        if longitude < self.south_west.longitude() {
            self.south_west.set_longitude(longitude);
        }
        if longitude > self.north_east.longitude() {
            self.north_east.set_longitude(longitude);
        }
    }
}

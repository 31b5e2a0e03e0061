//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Plate carrée scaled to the unit square
//!
//! Longitudes map to `[0, 1]`, latitudes to `[0, 0.5]`. The altitude is kept as is.

use crate::coordinates::GeoCoordinates3d;
use crate::math::{AlignedBox3d, Vector3d, HALF_PI, PI, TWO_PI};
use crate::projection::WorldCoordinates;

pub fn world_extent(min_altitude: f64, max_altitude: f64) -> AlignedBox3d {
    AlignedBox3d::new(
        Vector3d::new(0.0, 0.0, min_altitude),
        Vector3d::new(1.0, 0.5, max_altitude),
    )
}

pub fn project(geo_point: &GeoCoordinates3d) -> WorldCoordinates {
    Vector3d::new(
        (geo_point.longitude() + PI) / TWO_PI,
        (geo_point.latitude() + HALF_PI) / TWO_PI,
        geo_point.altitude(),
    )
}

pub fn unproject(world_point: &WorldCoordinates) -> GeoCoordinates3d {
    GeoCoordinates3d::new(
        world_point.y * TWO_PI - HALF_PI,
        world_point.x * TWO_PI - PI,
        world_point.z,
    )
}

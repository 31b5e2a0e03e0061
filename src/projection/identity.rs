//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! World coordinates are longitude, latitude in radians and altitude

use crate::coordinates::GeoCoordinates3d;
use crate::math::{AlignedBox3d, Vector3d, HALF_PI, PI};
use crate::projection::WorldCoordinates;

pub fn world_extent(min_altitude: f64, max_altitude: f64) -> AlignedBox3d {
    AlignedBox3d::new(
        Vector3d::new(-PI, -HALF_PI, min_altitude),
        Vector3d::new(PI, HALF_PI, max_altitude),
    )
}

pub fn project(geo_point: &GeoCoordinates3d) -> WorldCoordinates {
    Vector3d::new(
        geo_point.longitude(),
        geo_point.latitude(),
        geo_point.altitude(),
    )
}

pub fn unproject(world_point: &WorldCoordinates) -> GeoCoordinates3d {
    GeoCoordinates3d::new(world_point.y, world_point.x, world_point.z)
}

//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Earth centered cartesian coordinates on a sphere
//!
//! The x axis points to latitude 0, longitude 0, the y axis to longitude 90°
//! and the z axis to the north pole.

use crate::coordinates::GeoCoordinates3d;
use crate::math::{AlignedBox3d, Vector3d};
use crate::projection::{EarthConstants, WorldCoordinates};

pub fn world_extent(_min_altitude: f64, max_altitude: f64) -> AlignedBox3d {
    let radius = EarthConstants::equatorial_radius() + max_altitude;
    AlignedBox3d::new(
        Vector3d::new(-radius, -radius, -radius),
        Vector3d::new(radius, radius, radius),
    )
}

pub fn project(geo_point: &GeoCoordinates3d) -> WorldCoordinates {
    let radius = EarthConstants::equatorial_radius() + geo_point.altitude();
    let (sin_latitude, cos_latitude) = geo_point.latitude().sin_cos();
    let (sin_longitude, cos_longitude) = geo_point.longitude().sin_cos();
    Vector3d::new(
        radius * cos_latitude * cos_longitude,
        radius * cos_latitude * sin_longitude,
        radius * sin_latitude,
    )
}

pub fn unproject(world_point: &WorldCoordinates) -> GeoCoordinates3d {
    let parallel_radius = world_point.x.hypot(world_point.y);
    // 0/0 at the earth center
    let latitude_ratio = world_point.z / parallel_radius;
    if latitude_ratio.is_nan() {
        return GeoCoordinates3d::new(0.0, 0.0, -EarthConstants::equatorial_radius());
    }
    GeoCoordinates3d::new(
        latitude_ratio.atan(),
        world_point.y.atan2(world_point.x),
        parallel_radius.hypot(world_point.z) - EarthConstants::equatorial_radius(),
    )
}

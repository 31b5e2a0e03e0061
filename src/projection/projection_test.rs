//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::coordinates::{GeoCoordinates, GeoCoordinates3d};
use crate::math::{Vector3d, HALF_PI, PI};
use crate::projection::{EarthConstants, Projection, WorldCoordinates};
use approx::{assert_abs_diff_eq, assert_relative_eq};

fn sample_points() -> Vec<GeoCoordinates3d> {
    vec![
        GeoCoordinates3d::from_degrees(0.0, 0.0, 0.0),
        GeoCoordinates3d::from_degrees(52.5167, 13.3833, 34.0),
        GeoCoordinates3d::from_degrees(37.8178183439856, -122.4410209359072, 12.0),
        GeoCoordinates3d::from_degrees(-33.8688, 151.2093, -5.5),
        GeoCoordinates3d::from_degrees(-89.5, -179.5, 8848.0),
        GeoCoordinates3d::from_degrees(89.5, 179.5, -10994.0),
    ]
}

fn assert_geo_eq(expected: &GeoCoordinates3d, actual: &GeoCoordinates3d, epsilon: f64) {
    assert_abs_diff_eq!(expected.latitude(), actual.latitude(), epsilon = epsilon);
    assert_abs_diff_eq!(expected.longitude(), actual.longitude(), epsilon = epsilon);
    assert_abs_diff_eq!(expected.altitude(), actual.altitude(), epsilon = 1e-6);
}

fn assert_world_eq(expected: &WorldCoordinates, actual: &WorldCoordinates) {
    assert_abs_diff_eq!(expected.x, actual.x, epsilon = 1e-6);
    assert_abs_diff_eq!(expected.y, actual.y, epsilon = 1e-6);
    assert_abs_diff_eq!(expected.z, actual.z, epsilon = 1e-6);
}

#[test]
fn test_names() {
    for projection in &[
        Projection::Equirectangular,
        Projection::Sphere,
        Projection::Identity,
    ] {
        assert_eq!(projection.name().parse::<Projection>(), Ok(*projection));
        assert_eq!(format!("{}", projection), projection.name());
    }
    assert_eq!(
        "mercator".parse::<Projection>(),
        Err("Unexpected enum value 'mercator'".to_string())
    );
}

#[test]
fn test_geo_bounds() {
    let bounds = Projection::Sphere.geo_bounds();
    assert_eq!(bounds.south_west(), GeoCoordinates::new(-HALF_PI, -PI));
    assert_eq!(bounds.north_east(), GeoCoordinates::new(HALF_PI, PI));
    assert_eq!(Projection::Identity.geo_bounds(), bounds);
    assert_eq!(Projection::Equirectangular.geo_bounds(), bounds);
}

#[test]
fn test_world_extents() {
    let extent = Projection::Equirectangular.world_extent(-10.0, 20.0);
    assert_eq!(extent.minimum, Vector3d::new(0.0, 0.0, -10.0));
    assert_eq!(extent.maximum, Vector3d::new(1.0, 0.5, 20.0));

    let extent = Projection::Identity.world_extent(-10.0, 20.0);
    assert_eq!(extent.minimum, Vector3d::new(-PI, -HALF_PI, -10.0));
    assert_eq!(extent.maximum, Vector3d::new(PI, HALF_PI, 20.0));

    let radius = EarthConstants::equatorial_radius() + 20.0;
    let extent = Projection::Sphere.world_extent(-10.0, 20.0);
    assert_eq!(extent.minimum, Vector3d::new(-radius, -radius, -radius));
    assert_eq!(extent.maximum, Vector3d::new(radius, radius, radius));
}

#[test]
fn test_equirectangular() {
    let projection = Projection::Equirectangular;
    let world = projection
        .project(&GeoCoordinates3d::from_degrees(-90.0, -180.0, 7.0))
        .unwrap();
    assert_world_eq(&Vector3d::new(0.0, 0.0, 7.0), &world);
    let world = projection
        .project(&GeoCoordinates3d::from_degrees(90.0, 180.0, 0.0))
        .unwrap();
    assert_world_eq(&Vector3d::new(1.0, 0.5, 0.0), &world);
    let world = projection
        .project(&GeoCoordinates3d::from_degrees(0.0, 0.0, 0.0))
        .unwrap();
    assert_world_eq(&Vector3d::new(0.5, 0.25, 0.0), &world);

    for point in sample_points() {
        let world = projection.project(&point).unwrap();
        assert!(projection.world_extent(-11000.0, 9000.0).contains(&world));
        let back = projection.unproject(&world).unwrap();
        assert_geo_eq(&point, &back, 1e-9);
    }
}

#[test]
fn test_identity() {
    let projection = Projection::Identity;
    for point in sample_points() {
        let world = projection.project(&point).unwrap();
        assert_eq!(world, Vector3d::new(point.longitude(), point.latitude(), point.altitude()));
        let back = projection.unproject(&world).unwrap();
        assert_eq!(back, point);
    }
}

#[test]
fn test_sphere_project_axes() {
    let radius = EarthConstants::equatorial_radius();
    let projection = Projection::Sphere;

    let world = projection.project(&GeoCoordinates3d::from_degrees(0.0, 0.0, 0.0)).unwrap();
    assert_world_eq(&Vector3d::new(radius, 0.0, 0.0), &world);
    let world = projection.project(&GeoCoordinates3d::from_degrees(0.0, 90.0, 0.0)).unwrap();
    assert_world_eq(&Vector3d::new(0.0, radius, 0.0), &world);
    let world = projection.project(&GeoCoordinates3d::from_degrees(90.0, 0.0, 0.0)).unwrap();
    assert_world_eq(&Vector3d::new(0.0, 0.0, radius), &world);
    let world = projection.project(&GeoCoordinates3d::from_degrees(0.0, 0.0, 12.0)).unwrap();
    assert_world_eq(&Vector3d::new(radius + 12.0, 0.0, 0.0), &world);
}

#[test]
fn test_sphere_unproject_axes() {
    let radius = EarthConstants::equatorial_radius();
    let projection = Projection::Sphere;

    let geo = projection.unproject(&Vector3d::new(radius, 0.0, 0.0)).unwrap();
    assert_geo_eq(&GeoCoordinates3d::from_degrees(0.0, 0.0, 0.0), &geo, 1e-12);
    let geo = projection.unproject(&Vector3d::new(0.0, radius, 0.0)).unwrap();
    assert_geo_eq(&GeoCoordinates3d::from_degrees(0.0, 90.0, 0.0), &geo, 1e-12);
    let geo = projection.unproject(&Vector3d::new(radius + 12.0, 0.0, 0.0)).unwrap();
    assert_geo_eq(&GeoCoordinates3d::from_degrees(0.0, 0.0, 12.0), &geo, 1e-12);

    // poles
    let geo = projection.unproject(&Vector3d::new(0.0, 0.0, radius)).unwrap();
    assert_geo_eq(&GeoCoordinates3d::from_degrees(90.0, 0.0, 0.0), &geo, 1e-12);
    let geo = projection.unproject(&Vector3d::new(0.0, 0.0, -radius)).unwrap();
    assert_relative_eq!(geo.latitude(), -HALF_PI);

    // earth center
    let geo = projection.unproject(&Vector3d::new(0.0, 0.0, 0.0)).unwrap();
    assert_eq!(geo.latitude(), 0.0);
    assert_eq!(geo.longitude(), 0.0);
    assert_relative_eq!(geo.altitude(), -radius);
}

#[test]
fn test_sphere_round_trip() {
    let projection = Projection::Sphere;
    for point in sample_points() {
        let world = projection.project(&point).unwrap();
        assert_relative_eq!(
            world.length(),
            EarthConstants::equatorial_radius() + point.altitude(),
            max_relative = 1e-12
        );
        let back = projection.unproject(&world).unwrap();
        assert_geo_eq(&point, &back, 1e-9);
    }
}

#[test]
fn test_earth_constants() {
    assert_eq!(EarthConstants::equatorial_radius(), 6378137.0);
    assert_eq!(EarthConstants::polar_radius(), 6356752.3142);
    assert_relative_eq!(EarthConstants::equatorial_circumference(), 40075016.68557849);
    assert_eq!(EarthConstants::min_elevation(), -10994.0);
    assert_eq!(EarthConstants::max_elevation(), 8848.0);
}

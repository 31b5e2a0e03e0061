//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Projections between geographic and world coordinates

mod earth_constants;
mod equirectangular;
mod identity;
mod sphere;

pub use self::earth_constants::EarthConstants;

use crate::coordinates::{GeoCoordinates, GeoCoordinates3d, GeoRectangle};
use crate::math::{AlignedBox3d, Vector3d, HALF_PI, PI};
use std::fmt;
use std::str::FromStr;

/// Position in the world space of a projection
pub type WorldCoordinates = Vector3d;

/// Supported projections
///
/// `project` and `unproject` are inverse to each other within `geo_bounds()`.
/// They return `None` when a position cannot be converted.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Projection {
    /// Unit square, see `equirectangular`
    Equirectangular,
    /// Earth centered cartesian coordinates
    Sphere,
    /// Radians passed through unchanged
    Identity,
}

impl Projection {
    pub fn name(&self) -> &'static str {
        match self {
            Projection::Equirectangular => "equirectangular",
            Projection::Sphere => "sphere",
            Projection::Identity => "identity",
        }
    }
    /// Geographic area covered by the projection
    pub fn geo_bounds(&self) -> GeoRectangle {
        GeoRectangle::new(
            GeoCoordinates::new(-HALF_PI, -PI),
            GeoCoordinates::new(HALF_PI, PI),
        )
    }
    /// Box containing all projected positions with altitudes between `min_altitude` and `max_altitude`
    pub fn world_extent(&self, min_altitude: f64, max_altitude: f64) -> AlignedBox3d {
        match self {
            Projection::Equirectangular => equirectangular::world_extent(min_altitude, max_altitude),
            Projection::Sphere => sphere::world_extent(min_altitude, max_altitude),
            Projection::Identity => identity::world_extent(min_altitude, max_altitude),
        }
    }
    pub fn project(&self, geo_point: &GeoCoordinates3d) -> Option<WorldCoordinates> {
        let world_point = match self {
            Projection::Equirectangular => equirectangular::project(geo_point),
            Projection::Sphere => sphere::project(geo_point),
            Projection::Identity => identity::project(geo_point),
        };
        Some(world_point)
    }
    pub fn unproject(&self, world_point: &WorldCoordinates) -> Option<GeoCoordinates3d> {
        let geo_point = match self {
            Projection::Equirectangular => equirectangular::unproject(world_point),
            Projection::Sphere => sphere::unproject(world_point),
            Projection::Identity => identity::unproject(world_point),
        };
        Some(geo_point)
    }
}

impl FromStr for Projection {
    type Err = String;

    fn from_str(name: &str) -> Result<Projection, String> {
        match name {
            "equirectangular" => Ok(Projection::Equirectangular),
            "sphere" => Ok(Projection::Sphere),
            "identity" => Ok(Projection::Identity),
            _ => Err(format!("Unexpected enum value '{}'", name)),
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod projection_test;

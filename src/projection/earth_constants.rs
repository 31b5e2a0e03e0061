//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::math::TWO_PI;

/// WGS84 reference values in meters
pub struct EarthConstants;

impl EarthConstants {
    pub fn equatorial_radius() -> f64 {
        6_378_137.0
    }
    pub fn polar_radius() -> f64 {
        6_356_752.3142
    }
    pub fn equatorial_circumference() -> f64 {
        TWO_PI * EarthConstants::equatorial_radius()
    }
    /// Depth of the Mariana Trench
    pub fn min_elevation() -> f64 {
        -10_994.0
    }
    /// Height of Mount Everest
    pub fn max_elevation() -> f64 {
        8_848.0
    }
}

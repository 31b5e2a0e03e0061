//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use std::ops::AddAssign;

/// Geographic position as 32 bit fixed point values.
///
/// `x = (longitude + π) · u32::MAX / 2π`, `y = (latitude + π/2) · u32::MAX / 2π`
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Hash)]
pub struct GeoPoint {
    pub x: u32,
    pub y: u32,
}

impl GeoPoint {
    pub fn new(x: u32, y: u32) -> GeoPoint {
        GeoPoint { x, y }
    }
}

impl AddAssign for GeoPoint {
    fn add_assign(&mut self, other: GeoPoint) {
        self.x = self.x.wrapping_add(other.x);
        self.y = self.y.wrapping_add(other.y);
    }
}

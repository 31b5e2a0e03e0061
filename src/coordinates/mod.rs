//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Geographic coordinates and rectangles

mod geo_coordinates;
mod geo_coordinates3d;
mod geo_point;
mod geo_rectangle;

pub use self::geo_coordinates::GeoCoordinates;
pub use self::geo_coordinates3d::GeoCoordinates3d;
pub use self::geo_point::GeoPoint;
pub use self::geo_rectangle::GeoRectangle;

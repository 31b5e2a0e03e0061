//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Geospatial tiling
//!
//! Geographic coordinates and rectangles, projections into world space,
//! subdivision and tiling schemes and generators mapping geometries to tile
//! keys.
//!
//! ## Tiles of a position
//!
//! ```rust
//! use geo_tiling::coordinates::GeoCoordinates;
//! use geo_tiling::tiling::{tile_key_utils, TilingScheme};
//! use geo_tiling::TileKey;
//!
//! let tiling_scheme = TilingScheme::half_quad_tree_equirectangular();
//! let berlin = GeoCoordinates::from_degrees(52.5167, 13.3833);
//! let tile_key = tile_key_utils::geo_coordinates_to_tile_key(&tiling_scheme, &berlin, 14);
//! assert_eq!(tile_key, TileKey::from_row_column_level(6486, 8801, 14));
//! ```
//!
//! ## Tiles along a path
//!
//! ```rust
//! use geo_tiling::coordinates::GeoCoordinates;
//! use geo_tiling::tiling::{PathSegments, PathTilingGenerator, TilingScheme};
//! use std::sync::Arc;
//!
//! let path = vec![
//!     GeoCoordinates::from_degrees(52.5167, 13.3833),
//!     GeoCoordinates::from_degrees(48.1372, 11.5755),
//! ];
//! let tiling_scheme = Arc::new(TilingScheme::half_quad_tree_equirectangular());
//! for tile in PathTilingGenerator::new(PathSegments::new(path), tiling_scheme, 10, 1) {
//!     println!("Tile {}", tile.to_here_tile());
//! }
//! ```

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod config;
pub mod coordinates;
pub mod math;
pub mod projection;
pub mod tiling;

pub use tile_key::{SubTiles, TileKey, TileKeyLevels, TileKeyQuadrant, MAX_LEVEL};

//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Conversions between geographic positions and tile keys

use crate::coordinates::{GeoCoordinates, GeoCoordinates3d, GeoRectangle};
use crate::math::{self, AlignedBox3d, Vector3d, HALF_PI, PI};
use crate::tiling::TilingScheme;
use tile_key::{TileKey, MAX_LEVEL};

/// Tile containing `geo_point` at `level`.
///
/// Positions on the eastern or northern edge of the world belong to the last
/// column or row. Returns the invalid key for positions which can't be
/// projected or are outside of the world extent.
pub fn geo_coordinates_to_tile_key(
    tiling_scheme: &TilingScheme,
    geo_point: &GeoCoordinates,
    level: u32,
) -> TileKey {
    if level > MAX_LEVEL || !geo_point.is_valid() {
        return TileKey::default();
    }
    let projection = tiling_scheme.projection();
    let world_point = match projection.project(&GeoCoordinates3d::with_altitude(*geo_point, 0.0)) {
        Some(world_point) => world_point,
        None => return TileKey::default(),
    };

    let world_bbox = projection.world_extent(0.0, 0.0);
    let (min, max) = (world_bbox.minimum, world_bbox.maximum);
    if world_point.x < min.x || world_point.x > max.x {
        return TileKey::default();
    }
    if world_point.y < min.y || world_point.y > max.y {
        return TileKey::default();
    }

    let level_size = tiling_scheme.subdivision_scheme().level_size(level);
    let world_size = world_bbox.size();
    let columns = level_size.width;
    let rows = level_size.height;
    if columns == 0 || rows == 0 {
        return TileKey::default();
    }
    let column = (columns - 1).min((columns as f64 * (world_point.x - min.x) / world_size.x) as u32);
    let row = (rows - 1).min((rows as f64 * (world_point.y - min.y) / world_size.y) as u32);
    TileKey::from_row_column_level(row, column, level)
}

/// Tiles covering `geo_rectangle` at `level`, row by row from south to north
/// and west to east within a row.
///
/// Rectangles crossing the antimeridian continue at column 0.
pub fn geo_rectangle_to_tile_keys(
    tiling_scheme: &TilingScheme,
    geo_rectangle: &GeoRectangle,
    level: u32,
) -> Vec<TileKey> {
    if geo_rectangle.is_empty() {
        return Vec::new();
    }

    let south_west = normalized_corner(&geo_rectangle.south_west());
    let north_east = normalized_corner(&geo_rectangle.north_east());

    let min_tile_key = geo_coordinates_to_tile_key(tiling_scheme, &south_west, level);
    let max_tile_key = geo_coordinates_to_tile_key(tiling_scheme, &north_east, level);
    if !min_tile_key.is_valid() || !max_tile_key.is_valid() {
        debug!(
            "No tiles for rectangle {:?} at level {}",
            geo_rectangle, level
        );
        return Vec::new();
    }

    let column_count = tiling_scheme.subdivision_scheme().level_size(level).width as u64;
    let min_column = min_tile_key.column() as u64;
    let mut max_column = max_tile_key.column() as u64;
    if south_west.longitude() > north_east.longitude() {
        max_column += if max_column != min_column {
            column_count
        } else {
            // whole circle without repeating the first column
            column_count - 1
        };
    }

    let mut keys = Vec::new();
    for row in min_tile_key.row()..=max_tile_key.row() {
        for column in min_column..=max_column {
            keys.push(TileKey::from_row_column_level(
                row,
                (column % column_count) as u32,
                level,
            ));
        }
    }
    keys
}

fn normalized_corner(corner: &GeoCoordinates) -> GeoCoordinates {
    GeoCoordinates::new(
        math::clamp(corner.latitude(), -HALF_PI, HALF_PI),
        math::wrap(corner.longitude(), -PI, PI),
    )
}

/// Position of `tile_key` relative to its ancestor at `parent_level`.
///
/// The result has the level difference as level. A `parent_level` below
/// the tile wraps around and yields an invalid key.
pub fn get_relative_sub_tile_key(tile_key: &TileKey, parent_level: u32) -> TileKey {
    let origin = tile_key
        .changed_level_to(parent_level)
        .changed_level_to(tile_key.level());
    TileKey::from_row_column_level(
        tile_key.row().wrapping_sub(origin.row()),
        tile_key.column().wrapping_sub(origin.column()),
        tile_key.level().wrapping_sub(parent_level),
    )
}

/// Inverse of `get_relative_sub_tile_key`
pub fn get_absolute_sub_tile_key(parent: &TileKey, sub_tile: &TileKey) -> TileKey {
    let origin = parent.changed_level_by(sub_tile.level() as i32);
    TileKey::from_row_column_level(
        origin.row().wrapping_add(sub_tile.row()),
        origin.column().wrapping_add(sub_tile.column()),
        origin.level(),
    )
}

/// World space box of a tile at altitude 0
pub fn calculate_tile_box(tiling_scheme: &TilingScheme, tile_key: &TileKey) -> AlignedBox3d {
    let world_bounds = tiling_scheme.projection().world_extent(0.0, 0.0);
    let level_size = tiling_scheme
        .subdivision_scheme()
        .level_size(tile_key.level());
    let size = world_bounds.size();
    let dx = size.x / level_size.width as f64;
    let dy = size.y / level_size.height as f64;

    let minimum = world_bounds.minimum
        + Vector3d::new(tile_key.column() as f64 * dx, tile_key.row() as f64 * dy, 0.0);
    let maximum = minimum + Vector3d::new(dx, dy, 0.0);
    AlignedBox3d::new(minimum, maximum)
}

//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tiling schemes and tile generators
//!
//! A `TilingScheme` pairs a `SubdivisionScheme`, which defines the tile tree,
//! with a `Projection`, which maps geographic coordinates into the world space
//! covered by the root tile.

mod path_tiling;
mod subdivision_scheme;
pub mod tile_key_utils;
mod tile_tree_traverse;
mod tilingcfg;
mod tiling_scheme;

pub use self::path_tiling::{GeoSegment, PathSegments, PathTilingGenerator, PathTilingOptions};
pub use self::subdivision_scheme::{
    HalfQuadTreeSubdivisionScheme, QuadTreeSubdivisionScheme, SubdivisionScheme,
};
pub use self::tile_tree_traverse::TileTreeTraverse;
pub use self::tiling_scheme::TilingScheme;

#[cfg(test)]
mod tiling_test;

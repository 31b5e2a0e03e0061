//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! A library for quadtree tile addressing
//!
//! ## Tile keys
//!
//! ```rust
//! use tile_key::TileKey;
//!
//! let tile = TileKey::from_row_column_level(3, 5, 3);
//! assert_eq!(tile.to_quad_key(), "123");
//! assert_eq!(tile.to_here_tile(), "91");
//! assert_eq!(tile.to_quad_key64(), 91);
//! assert_eq!(TileKey::from_quad_key("123"), tile);
//! assert_eq!(tile.parent(), TileKey::from_row_column_level(1, 2, 2));
//! ```
//!
//! ## Relative keys
//!
//! ```rust
//! use tile_key::TileKey;
//!
//! let tile = TileKey::from_row_column_level(5, 5, 3);
//! let ancestor = tile.changed_level_by(-2);
//! let sub_key = tile.get_subkey64(2);
//! assert_eq!(sub_key, 19);
//! assert_eq!(ancestor.added_subkey64(sub_key), tile);
//! ```
//!
//! ## Sub tile iterators
//!
//! ```rust
//! use tile_key::{SubTiles, TileKey, FULL_MASK};
//!
//! let root = TileKey::from_row_column_level(0, 0, 0);
//! for tile in SubTiles::new(root, 2, FULL_MASK).iter() {
//!     println!("Tile {}", tile);
//! }
//! ```

mod levels;
mod quad_key;
mod sub_tiles;
mod tile_key;

pub use levels::TileKeyLevels;
pub use quad_key::QuadKey64Helper;
pub use sub_tiles::{SubTiles, SubTilesIterator, FULL_MASK};
pub use tile_key::{TileKey, TileKeyQuadrant, LEVEL_COUNT, MAX_LEVEL};

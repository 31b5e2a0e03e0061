//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Quadtree tile addresses

use crate::quad_key::{morton_decode, morton_encode, QuadKey64Helper};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Number of addressable levels. Keys at this level or deeper are invalid.
pub const LEVEL_COUNT: u32 = 32;
/// Deepest valid level
pub const MAX_LEVEL: u32 = LEVEL_COUNT - 1;

/// Position of a tile within its parent.
///
/// The discriminant equals the child index used by `TileKey::get_child`.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum TileKeyQuadrant {
    SW = 0,
    SE = 1,
    NW = 2,
    NE = 3,
    Invalid = 4,
}

/// Address of a tile in a quad tree.
///
/// The root at level 0 is a single tile. Every level splits each tile into
/// 2x2 children, so level `n` has `2^n` rows and `2^n` columns. Row 0 is the
/// southernmost row, column 0 the westernmost column.
///
/// A key is usually created with `from_row_column_level`. `TileKey::default()`
/// is the invalid key (level 32); check `is_valid()` before using keys from
/// untrusted input.
#[derive(Clone, Copy, Debug)]
pub struct TileKey {
    row: u32,
    column: u32,
    level: u32,
}

impl Default for TileKey {
    fn default() -> TileKey {
        TileKey {
            row: 0,
            column: 0,
            level: LEVEL_COUNT,
        }
    }
}

impl TileKey {
    /// Key for `row` and `column` at `level`. Values are not validated.
    pub fn from_row_column_level(row: u32, column: u32, level: u32) -> TileKey {
        TileKey { row, column, level }
    }
    pub fn is_valid(&self) -> bool {
        self.level < LEVEL_COUNT && self.row < (1 << self.level) && self.column < (1 << self.level)
    }
    pub fn row(&self) -> u32 {
        self.row
    }
    pub fn column(&self) -> u32 {
        self.column
    }
    pub fn level(&self) -> u32 {
        self.level
    }
    /// Number of rows at the tile's level (`2^level`, 0 for invalid levels)
    pub fn row_count(&self) -> u32 {
        1u32.checked_shl(self.level).unwrap_or(0)
    }
    /// Number of columns at the tile's level (`2^level`, 0 for invalid levels)
    pub fn column_count(&self) -> u32 {
        self.row_count()
    }

    /// Parent tile, or the invalid key for the root tile.
    pub fn parent(&self) -> TileKey {
        if self.level > 0 {
            TileKey::from_row_column_level(self.row >> 1, self.column >> 1, self.level - 1)
        } else {
            TileKey::default()
        }
    }
    /// True if `tile_key` is a strict ancestor of this tile.
    pub fn is_child_of(&self, tile_key: &TileKey) -> bool {
        if self.level <= tile_key.level {
            return false;
        }
        self.changed_level_to(tile_key.level) == *tile_key
    }
    /// True if `tile_key` is a strict descendant of this tile.
    pub fn is_parent_of(&self, tile_key: &TileKey) -> bool {
        tile_key.is_child_of(self)
    }
    /// Key at `level() + delta`.
    ///
    /// Descending returns the descendant with the lowest row and column,
    /// ascending returns the ancestor. Levels below 0 are clamped to 0.
    pub fn changed_level_by(&self, delta: i32) -> TileKey {
        if delta == 0 {
            return *self;
        }
        let level = (self.level as i64 + delta as i64).max(0) as u32;
        let shift = delta.unsigned_abs();
        let (row, column) = if delta > 0 {
            (
                self.row.checked_shl(shift).unwrap_or(0),
                self.column.checked_shl(shift).unwrap_or(0),
            )
        } else {
            (
                self.row.checked_shr(shift).unwrap_or(0),
                self.column.checked_shr(shift).unwrap_or(0),
            )
        };
        TileKey::from_row_column_level(row, column, level)
    }
    /// Key at the requested `level`, see `changed_level_by`.
    pub fn changed_level_to(&self, level: u32) -> TileKey {
        self.changed_level_by(level as i32 - self.level as i32)
    }

    /// Child `index` in `0..4`: bit 0 selects the column, bit 1 the row.
    ///
    /// ```text
    ///      -----------
    ///      | 2  | 3  |
    ///      -----------
    ///      | 0  | 1  |
    ///      -----------
    /// ```
    pub fn get_child(&self, index: u8) -> TileKey {
        let mut child = self.changed_level_by(1);
        child.column |= (index & 1) as u32;
        child.row |= (index >> 1) as u32;
        child
    }
    pub fn get_child_in(&self, quadrant: TileKeyQuadrant) -> TileKey {
        self.get_child(quadrant as u8)
    }
    /// Quadrant of this tile within its parent, `Invalid` for the root tile.
    pub fn relationship_to_parent(&self) -> TileKeyQuadrant {
        if self.level == 0 {
            return TileKeyQuadrant::Invalid;
        }
        match ((self.row & 1) << 1) | (self.column & 1) {
            0 => TileKeyQuadrant::SW,
            1 => TileKeyQuadrant::SE,
            2 => TileKeyQuadrant::NW,
            _ => TileKeyQuadrant::NE,
        }
    }

    /// 64-bit Morton code with the level encoded as leading sentinel bit.
    ///
    /// The root tile is `1`.
    pub fn to_quad_key64(&self) -> u64 {
        morton_encode(self.row, self.column, self.level)
    }
    pub fn from_quad_key64(quad_key: u64) -> TileKey {
        let (row, column, level) = morton_decode(quad_key);
        TileKey::from_row_column_level(row, column, level)
    }

    /// Base-4 string with one digit per level, `"-"` for the root tile.
    ///
    /// Removing the last digit gives the parent's quad key, appending
    /// `0..=3` gives the children. Invalid keys give an empty string.
    pub fn to_quad_key(&self) -> String {
        if !self.is_valid() {
            return String::new();
        }
        if self.level == 0 {
            return "-".to_string();
        }
        let morton_key = self.to_quad_key64();
        (0..self.level)
            .rev()
            .map(|index| {
                let digit = (morton_key >> (2 * index)) & 0x3;
                char::from(b'0' + digit as u8)
            })
            .collect()
    }
    /// Parse a quad key created with `to_quad_key`.
    ///
    /// Returns the invalid key for empty strings, characters other than
    /// `0-3` or more than `MAX_LEVEL` digits.
    pub fn from_quad_key(quad_key: &str) -> TileKey {
        if quad_key.is_empty() || quad_key.len() > MAX_LEVEL as usize {
            return TileKey::default();
        }
        if quad_key == "-" {
            return TileKey::from_row_column_level(0, 0, 0);
        }
        let level = quad_key.len() as u32;
        let mut result = TileKey::from_row_column_level(0, 0, level);
        for (index, c) in quad_key.chars().rev().enumerate() {
            let digit = match c.to_digit(4) {
                Some(digit) => digit,
                None => return TileKey::default(),
            };
            let mask = 1u32 << index;
            if digit & 0x1 != 0 {
                result.column |= mask;
            }
            if digit & 0x2 != 0 {
                result.row |= mask;
            }
        }
        result
    }

    /// Decimal rendering of the Morton code
    pub fn to_here_tile(&self) -> String {
        self.to_quad_key64().to_string()
    }
    /// Parse a HERE tile string. Empty or non-numeric input gives the invalid key.
    pub fn from_here_tile(key: &str) -> TileKey {
        match key.parse::<u64>() {
            Ok(quad_key) => TileKey::from_quad_key64(quad_key),
            Err(_) => TileKey::default(),
        }
    }

    /// Morton code relative to the ancestor `delta` levels up, see `QuadKey64Helper::get_subkey`.
    pub fn get_subkey64(&self, delta: u32) -> u64 {
        QuadKey64Helper::new(self.to_quad_key64())
            .get_subkey(delta)
            .key
    }
    /// Descendant addressed by a sub Morton code created with `get_subkey64`.
    pub fn added_subkey64(&self, sub_quad_key: u64) -> TileKey {
        let key = QuadKey64Helper::new(self.to_quad_key64())
            .added_subkey(QuadKey64Helper::new(sub_quad_key))
            .key;
        TileKey::from_quad_key64(key)
    }
    /// Descendant addressed by a relative quad key string; empty means this tile.
    pub fn added_subkey(&self, sub_quad_key: &str) -> TileKey {
        let sub_quad = TileKey::from_quad_key(if sub_quad_key.is_empty() {
            "-"
        } else {
            sub_quad_key
        });
        self.added_sub_tile(&sub_quad)
    }
    /// Descendant addressed by a relative HERE tile string.
    pub fn added_sub_here_tile(&self, sub_here_tile: &str) -> TileKey {
        self.added_sub_tile(&TileKey::from_here_tile(sub_here_tile))
    }
    fn added_sub_tile(&self, sub_quad: &TileKey) -> TileKey {
        let child = self.changed_level_by(sub_quad.level as i32);
        TileKey::from_row_column_level(
            child.row.wrapping_add(sub_quad.row),
            child.column.wrapping_add(sub_quad.column),
            child.level,
        )
    }

    pub fn has_next_row(&self) -> bool {
        self.row < self.row_count().wrapping_sub(1)
    }
    /// Same level and column, row plus one. Check `has_next_row` first.
    pub fn next_row(&self) -> TileKey {
        TileKey::from_row_column_level(self.row.wrapping_add(1), self.column, self.level)
    }
    pub fn has_previous_row(&self) -> bool {
        self.row > 0
    }
    /// Same level and column, row minus one. Wraps around at row 0; check `has_previous_row` first.
    pub fn previous_row(&self) -> TileKey {
        TileKey::from_row_column_level(self.row.wrapping_sub(1), self.column, self.level)
    }
    pub fn has_next_column(&self) -> bool {
        self.column < self.column_count().wrapping_sub(1)
    }
    /// Same level and row, column plus one. Check `has_next_column` first.
    pub fn next_column(&self) -> TileKey {
        TileKey::from_row_column_level(self.row, self.column.wrapping_add(1), self.level)
    }
    pub fn has_previous_column(&self) -> bool {
        self.column > 0
    }
    /// Same level and row, column minus one. Wraps around at column 0; check `has_previous_column` first.
    pub fn previous_column(&self) -> TileKey {
        TileKey::from_row_column_level(self.row, self.column.wrapping_sub(1), self.level)
    }
}

impl PartialEq for TileKey {
    fn eq(&self, other: &TileKey) -> bool {
        self.level == other.level && self.row == other.row && self.column == other.column
    }
}

impl Eq for TileKey {}

/// Orders by level, then row, then column. Use the Morton code for spatial locality.
impl Ord for TileKey {
    fn cmp(&self, other: &TileKey) -> Ordering {
        (self.level, self.row, self.column).cmp(&(other.level, other.row, other.column))
    }
}

impl PartialOrd for TileKey {
    fn partial_cmp(&self, other: &TileKey) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for TileKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_quad_key64().hash(state);
    }
}

impl fmt::Display for TileKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(l:{} r:{} c:{})", self.level, self.row, self.column)
    }
}

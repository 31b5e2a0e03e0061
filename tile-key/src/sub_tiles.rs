//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Sub tile iterators

use crate::tile_key::TileKey;

/// Mask value selecting all sub tiles
pub const FULL_MASK: u16 = !0;

/// Descendants of a tile `sub_level` levels down.
///
/// The mask selects up to 16 groups of sub tiles. For `sub_level <= 2` every
/// bit addresses a single tile, for deeper levels a bit addresses a block of
/// `4^(sub_level - 2)` consecutive tiles.
///
/// `sub_level` must be below 16, deeper levels don't fit the 32-bit tile
/// index and yield no sub tiles.
#[derive(Clone, Debug)]
pub struct SubTiles {
    tile_key: TileKey,
    sub_level: u32,
    count: u32,
    mask: u16,
    shift: u32,
}

impl SubTiles {
    pub fn new(tile_key: TileKey, sub_level: u32, mask: u16) -> SubTiles {
        SubTiles {
            tile_key,
            sub_level,
            count: if sub_level < 16 { 1 << (sub_level << 1) } else { 0 },
            mask,
            shift: if sub_level > 2 { (sub_level - 2) << 1 } else { 0 },
        }
    }
    /// Direct children with all of them selected
    pub fn children(tile_key: TileKey) -> SubTiles {
        SubTiles::new(tile_key, 1, FULL_MASK)
    }
    /// Number of descendants at the sub level, regardless of the mask
    pub fn size(&self) -> usize {
        self.count as usize
    }
    pub fn iter(&self) -> SubTilesIterator<'_> {
        SubTilesIterator::new(self)
    }
    fn skip(&self, index: u32) -> u32 {
        if self.mask == FULL_MASK {
            return index;
        }
        let mut index = index;
        while index < self.count && self.mask & (1 << (index >> self.shift)) == 0 {
            index += 1;
        }
        index
    }
    fn sub_tile(&self, index: u32) -> TileKey {
        let sub_level = self.sub_level;
        TileKey::from_row_column_level(
            (self.tile_key.row() << sub_level) | (index >> sub_level),
            (self.tile_key.column() << sub_level) | (index & ((1 << sub_level) - 1)),
            self.tile_key.level() + sub_level,
        )
    }
}

impl<'a> IntoIterator for &'a SubTiles {
    type Item = TileKey;
    type IntoIter = SubTilesIterator<'a>;

    fn into_iter(self) -> SubTilesIterator<'a> {
        self.iter()
    }
}

/// Row-major iterator over the selected sub tiles
pub struct SubTilesIterator<'a> {
    sub_tiles: &'a SubTiles,
    index: u32,
}

impl<'a> SubTilesIterator<'a> {
    fn new(sub_tiles: &'a SubTiles) -> SubTilesIterator<'a> {
        SubTilesIterator {
            sub_tiles,
            index: sub_tiles.skip(0),
        }
    }
}

impl<'a> Iterator for SubTilesIterator<'a> {
    type Item = TileKey;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.sub_tiles.count {
            return None;
        }
        let current = self.sub_tiles.sub_tile(self.index);
        self.index = self.sub_tiles.skip(self.index + 1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.sub_tiles.count - self.index) as usize;
        if self.sub_tiles.mask == FULL_MASK {
            (remaining, Some(remaining))
        } else {
            (0, Some(remaining))
        }
    }
}

#[test]
fn test_children_iter() {
    let tile = TileKey::from_row_column_level(1, 2, 3);
    let sub_tiles = SubTiles::children(tile);
    assert_eq!(sub_tiles.size(), 4);
    let children = sub_tiles.iter().collect::<Vec<_>>();
    assert_eq!(
        children,
        vec![
            TileKey::from_row_column_level(2, 4, 4),
            TileKey::from_row_column_level(2, 5, 4),
            TileKey::from_row_column_level(3, 4, 4),
            TileKey::from_row_column_level(3, 5, 4),
        ]
    );

    // restartable
    assert_eq!((&sub_tiles).into_iter().count(), 4);
    assert_eq!(sub_tiles.iter().count(), 4);
}

#[test]
fn test_masked_iter() {
    let root = TileKey::from_row_column_level(0, 0, 0);

    let sub_tiles = SubTiles::new(root, 1, 0b0011);
    assert_eq!(sub_tiles.size(), 4);
    let cells = sub_tiles
        .iter()
        .map(|t| (t.row(), t.column()))
        .collect::<Vec<_>>();
    assert_eq!(cells, vec![(0, 0), (0, 1)]);

    let sub_tiles = SubTiles::new(root, 1, 0b1001);
    let cells = sub_tiles
        .iter()
        .map(|t| (t.row(), t.column()))
        .collect::<Vec<_>>();
    assert_eq!(cells, vec![(0, 0), (1, 1)]);

    let sub_tiles = SubTiles::new(root, 1, 0);
    assert_eq!(sub_tiles.iter().next(), None);
}

#[test]
fn test_deep_sub_levels() {
    let root = TileKey::from_row_column_level(0, 0, 0);

    let sub_tiles = SubTiles::new(root, 2, FULL_MASK);
    assert_eq!(sub_tiles.size(), 16);
    let tiles = sub_tiles.iter().collect::<Vec<_>>();
    assert_eq!(tiles.len(), 16);
    assert_eq!(tiles[0], TileKey::from_row_column_level(0, 0, 2));
    assert_eq!(tiles[5], TileKey::from_row_column_level(1, 1, 2));
    assert_eq!(tiles[15], TileKey::from_row_column_level(3, 3, 2));

    // every mask bit covers a block of four tiles at sub level 3
    let sub_tiles = SubTiles::new(root, 3, 0b10);
    assert_eq!(sub_tiles.size(), 64);
    let tiles = sub_tiles.iter().collect::<Vec<_>>();
    assert_eq!(
        tiles,
        vec![
            TileKey::from_row_column_level(0, 4, 3),
            TileKey::from_row_column_level(0, 5, 3),
            TileKey::from_row_column_level(0, 6, 3),
            TileKey::from_row_column_level(0, 7, 3),
        ]
    );
}

#[test]
fn test_sub_level_limit() {
    let root = TileKey::from_row_column_level(0, 0, 0);
    assert_eq!(SubTiles::new(root, 15, FULL_MASK).size(), 1 << 30);
    let sub_tiles = SubTiles::new(root, 16, FULL_MASK);
    assert_eq!(sub_tiles.size(), 0);
    assert_eq!(sub_tiles.iter().next(), None);
    assert_eq!(SubTiles::new(root, 40, 0b1).iter().count(), 0);
}

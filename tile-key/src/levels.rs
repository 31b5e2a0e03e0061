//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Sets of tile levels

use crate::tile_key::LEVEL_COUNT;

/// Set of tile levels, bit `n` set means level `n` is available.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct TileKeyLevels(pub u32);

impl TileKeyLevels {
    pub fn new() -> TileKeyLevels {
        TileKeyLevels(0)
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn contains(&self, level: u32) -> bool {
        level < LEVEL_COUNT && self.0 & (1 << level) != 0
    }
    pub fn insert(&mut self, level: u32) {
        if level < LEVEL_COUNT {
            self.0 |= 1 << level;
        }
    }
    /// Lowest level in the set
    pub fn min_level(&self) -> Option<u32> {
        if self.is_empty() {
            None
        } else {
            Some(self.0.trailing_zeros())
        }
    }
    /// Highest level in the set
    pub fn max_level(&self) -> Option<u32> {
        if self.is_empty() {
            None
        } else {
            Some(MAX_BIT - self.0.leading_zeros())
        }
    }
    /// Level of the set nearest to `reference_level`.
    ///
    /// If the next upper and lower levels are equally far away, the upper level wins.
    pub fn nearest_available_level(&self, reference_level: u32) -> Option<u32> {
        let min_level = self.min_level()?;
        let max_level = self.max_level()?;
        let level = reference_level.min(max_level).max(min_level);
        let max_distance = (level - min_level).max(max_level - level);
        (0..=max_distance)
            .find_map(|distance| {
                if self.contains(level + distance) {
                    Some(level + distance)
                } else if level >= distance && self.contains(level - distance) {
                    Some(level - distance)
                } else {
                    None
                }
            })
            .or(Some(level))
    }
}

const MAX_BIT: u32 = LEVEL_COUNT - 1;

#[test]
fn test_min_max_levels() {
    assert_eq!(TileKeyLevels::new().min_level(), None);
    assert_eq!(TileKeyLevels::new().max_level(), None);
    assert_eq!(TileKeyLevels(0xF0).min_level(), Some(4));
    assert_eq!(TileKeyLevels(0xF0).max_level(), Some(7));
    assert_eq!(TileKeyLevels(1).max_level(), Some(0));
    assert_eq!(TileKeyLevels(1 << 31).min_level(), Some(31));

    let mut levels = TileKeyLevels::new();
    levels.insert(12);
    levels.insert(40);
    assert_eq!(levels, TileKeyLevels(1 << 12));
    assert!(levels.contains(12));
    assert!(!levels.contains(40));
}

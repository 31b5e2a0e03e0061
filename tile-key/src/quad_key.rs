//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! 64-bit Morton quad keys

/// Spreads the 8 bits of the index over the even bits of a 16 bit value (`0b11 -> 0b101`).
const MORTON_TABLE_256: [u64; 256] = {
    let mut table = [0u64; 256];
    let mut byte = 0;
    while byte < 256 {
        let mut spread = 0u64;
        let mut bit = 0;
        while bit < 8 {
            if byte & (1 << bit) != 0 {
                spread |= 1 << (2 * bit);
            }
            bit += 1;
        }
        table[byte] = spread;
        byte += 1;
    }
    table
};

/// Interleave row and column bits (`r_n c_n ... r_0 c_0`) and prepend the level sentinel bit.
pub(crate) fn morton_encode(row: u32, column: u32, level: u32) -> u64 {
    let sentinel = 1u64.checked_shl(2 * level).unwrap_or(0);
    sentinel
        | MORTON_TABLE_256[((row >> 24) & 0xFF) as usize] << 49
        | MORTON_TABLE_256[((row >> 16) & 0xFF) as usize] << 33
        | MORTON_TABLE_256[((row >> 8) & 0xFF) as usize] << 17
        | MORTON_TABLE_256[(row & 0xFF) as usize] << 1
        | MORTON_TABLE_256[((column >> 24) & 0xFF) as usize] << 48
        | MORTON_TABLE_256[((column >> 16) & 0xFF) as usize] << 32
        | MORTON_TABLE_256[((column >> 8) & 0xFF) as usize] << 16
        | MORTON_TABLE_256[(column & 0xFF) as usize]
}

/// Inverse of `morton_encode`: `(row, column, level)`.
///
/// Codes `0` and `1` both decode to the root tile.
pub(crate) fn morton_decode(mut quad_key: u64) -> (u32, u32, u32) {
    let (mut row, mut column, mut level) = (0u32, 0u32, 0u32);
    while quad_key > 1 {
        let mask = 1u32 << level;
        if quad_key & 0x1 != 0 {
            column |= mask;
        }
        if quad_key & 0x2 != 0 {
            row |= mask;
        }
        level += 1;
        quad_key >>= 2;
    }
    (row, column, level)
}

/// Basic operations on 64 bit Morton quad keys, without converting to a `TileKey`.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Hash)]
pub struct QuadKey64Helper {
    pub key: u64,
}

impl QuadKey64Helper {
    pub fn new(key: u64) -> QuadKey64Helper {
        QuadKey64Helper { key }
    }
    /// Quad key of the parent tile
    pub fn parent(&self) -> QuadKey64Helper {
        QuadKey64Helper::new(self.key >> 2)
    }
    /// Quad key of the first (south-west) child
    pub fn child(&self) -> QuadKey64Helper {
        QuadKey64Helper::new(self.key << 2)
    }
    /// Sub quad key relative to the ancestor `delta` levels up.
    ///
    /// The result keeps the sentinel bit `1 << 2*delta`, so it fits into 16 bits
    /// for `delta < 8` and into 32 bits for `delta < 16`.
    /// `delta` must be in `0..32`.
    pub fn get_subkey(&self, delta: u32) -> QuadKey64Helper {
        let msb = 1u64 << (delta * 2);
        let mask = msb - 1;
        QuadKey64Helper::new((self.key & mask) | msb)
    }
    /// Absolute quad key from a sub key created with `get_subkey`.
    pub fn added_subkey(&self, sub_key: QuadKey64Helper) -> QuadKey64Helper {
        let mut result = self.key;
        let mut mask = 0x1u64;
        while let Some(next) = mask.checked_mul(4) {
            if sub_key.key < next {
                break;
            }
            result <<= 2;
            mask = next;
        }
        QuadKey64Helper::new(result | (sub_key.key & (mask - 1)))
    }
    /// Number of rows (and columns) at `level`
    pub fn rows_at_level(level: u32) -> u32 {
        1 << level
    }
    /// Number of tiles at `level`
    pub fn children_at_level(level: u32) -> u32 {
        1 << (level << 1)
    }
}

#[test]
fn test_morton_table() {
    assert_eq!(MORTON_TABLE_256[0], 0x0000);
    assert_eq!(MORTON_TABLE_256[3], 0x0005);
    assert_eq!(MORTON_TABLE_256[0x80], 0x4000);
    assert_eq!(MORTON_TABLE_256[0xFF], 0x5555);
}

#[test]
fn test_morton_codes() {
    assert_eq!(morton_encode(0, 0, 0), 1);
    assert_eq!(morton_encode(1, 1, 1), 7);
    assert_eq!(morton_encode(3, 5, 3), 91);
    assert_eq!(morton_decode(91), (3, 5, 3));
    assert_eq!(morton_decode(1), (0, 0, 0));
    assert_eq!(morton_decode(0), (0, 0, 0));

    let deepest = morton_encode(u32::MAX >> 1, u32::MAX >> 1, 31);
    assert_eq!(deepest, u64::MAX >> 2 | 1 << 62);
    assert_eq!(morton_decode(deepest), (u32::MAX >> 1, u32::MAX >> 1, 31));
}

#[test]
fn test_helper_levels() {
    assert_eq!(QuadKey64Helper::rows_at_level(0), 1);
    assert_eq!(QuadKey64Helper::rows_at_level(3), 8);
    assert_eq!(QuadKey64Helper::children_at_level(0), 1);
    assert_eq!(QuadKey64Helper::children_at_level(3), 64);
    assert_eq!(QuadKey64Helper::new(7).parent(), QuadKey64Helper::new(1));
    assert_eq!(QuadKey64Helper::new(1).child(), QuadKey64Helper::new(4));
}

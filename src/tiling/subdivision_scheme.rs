//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Subdivision schemes
//!
//! A subdivision scheme tells how many children a tile has per level and
//! how many tiles a level has in total.

use crate::math::Size2u;
use std::fmt;

/// Per level subdivision policy
pub trait SubdivisionScheme: fmt::Debug {
    /// Name used in configurations and log output
    fn name(&self) -> &str;
    /// Number of child columns and rows of a tile at `level`
    fn subdivision_at(&self, level: u32) -> Size2u;
    /// Number of columns and rows at `level`.
    ///
    /// The product of the subdivisions of all levels above.
    fn level_size(&self, level: u32) -> Size2u {
        (0..level).fold(Size2u::new(1, 1), |size, parent_level| {
            let subdivision = self.subdivision_at(parent_level);
            Size2u::new(
                size.width.saturating_mul(subdivision.width),
                size.height.saturating_mul(subdivision.height),
            )
        })
    }
}

/// Every tile has 2x2 children. Level `n` has `2^n` columns and `2^n` rows.
#[derive(Clone, Debug, Default)]
pub struct QuadTreeSubdivisionScheme;

impl SubdivisionScheme for QuadTreeSubdivisionScheme {
    fn name(&self) -> &str {
        "quad_tree"
    }
    fn subdivision_at(&self, _level: u32) -> Size2u {
        Size2u::new(2, 2)
    }
    fn level_size(&self, level: u32) -> Size2u {
        let size = 1u32.checked_shl(level).unwrap_or(0);
        Size2u::new(size, size)
    }
}

/// Quad tree whose root has only 2x1 children.
///
/// Level `n > 0` has `2^n` columns and `2^(n-1)` rows, which gives square
/// tiles for a world twice as wide as high.
#[derive(Clone, Debug, Default)]
pub struct HalfQuadTreeSubdivisionScheme;

impl SubdivisionScheme for HalfQuadTreeSubdivisionScheme {
    fn name(&self) -> &str {
        "half_quad_tree"
    }
    fn subdivision_at(&self, level: u32) -> Size2u {
        if level == 0 {
            Size2u::new(2, 1)
        } else {
            Size2u::new(2, 2)
        }
    }
    fn level_size(&self, level: u32) -> Size2u {
        if level == 0 {
            return Size2u::new(1, 1);
        }
        Size2u::new(
            1u32.checked_shl(level).unwrap_or(0),
            1u32.checked_shl(level - 1).unwrap_or(0),
        )
    }
}

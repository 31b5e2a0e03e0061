//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::tiling::SubdivisionScheme;
use tile_key::{SubTiles, TileKey, FULL_MASK};

/// Walks a tile tree following a subdivision scheme
pub struct TileTreeTraverse<'a> {
    subdivision_scheme: &'a dyn SubdivisionScheme,
}

impl<'a> TileTreeTraverse<'a> {
    pub fn new(subdivision_scheme: &'a dyn SubdivisionScheme) -> TileTreeTraverse<'a> {
        TileTreeTraverse { subdivision_scheme }
    }

    /// Children of `tile_key` one level down.
    ///
    /// The first `width * height` of the four quad tree children are selected,
    /// so a 2x1 subdivision yields the two children of the southern row.
    pub fn sub_nodes(&self, tile_key: TileKey) -> SubTiles {
        let subdivision = self.subdivision_scheme.subdivision_at(tile_key.level());
        let child_count = subdivision.area();
        let mask = if child_count >= 16 {
            if child_count > 16 {
                warn!(
                    "{} subdivision {}x{} at level {} exceeds 16 children",
                    self.subdivision_scheme.name(),
                    subdivision.width,
                    subdivision.height,
                    tile_key.level()
                );
            }
            FULL_MASK
        } else {
            ((1u32 << child_count) - 1) as u16
        };
        SubTiles::new(tile_key, 1, mask)
    }
}

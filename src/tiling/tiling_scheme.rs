//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::projection::Projection;
use crate::tiling::{HalfQuadTreeSubdivisionScheme, QuadTreeSubdivisionScheme, SubdivisionScheme};

/// Pairing of a subdivision scheme and a projection
#[derive(Debug)]
pub struct TilingScheme {
    subdivision_scheme: Box<dyn SubdivisionScheme + Send + Sync>,
    projection: Projection,
}

impl TilingScheme {
    pub fn new(
        subdivision_scheme: Box<dyn SubdivisionScheme + Send + Sync>,
        projection: Projection,
    ) -> TilingScheme {
        TilingScheme {
            subdivision_scheme,
            projection,
        }
    }

    /// Quad tree on the equirectangular unit square
    pub fn quad_tree_equirectangular() -> TilingScheme {
        TilingScheme::new(Box::new(QuadTreeSubdivisionScheme), Projection::Equirectangular)
    }

    /// Half quad tree on the equirectangular unit square. All tiles are square.
    pub fn half_quad_tree_equirectangular() -> TilingScheme {
        TilingScheme::new(
            Box::new(HalfQuadTreeSubdivisionScheme),
            Projection::Equirectangular,
        )
    }

    /// Quad tree on longitude/latitude radians
    pub fn quad_tree_identity() -> TilingScheme {
        TilingScheme::new(Box::new(QuadTreeSubdivisionScheme), Projection::Identity)
    }

    /// Quad tree on earth centered cartesian coordinates
    pub fn quad_tree_sphere() -> TilingScheme {
        TilingScheme::new(Box::new(QuadTreeSubdivisionScheme), Projection::Sphere)
    }

    pub fn subdivision_scheme(&self) -> &dyn SubdivisionScheme {
        self.subdivision_scheme.as_ref()
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// `<subdivision>_<projection>`, as used for predefined schemes
    pub fn name(&self) -> String {
        format!("{}_{}", self.subdivision_scheme.name(), self.projection.name())
    }
}

//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::coordinates::{GeoCoordinates, GeoCoordinates3d, GeoRectangle};
use crate::math::{Size2u, Vector3d};
use crate::projection::Projection;
use crate::tiling::tile_key_utils::*;
use crate::tiling::{
    HalfQuadTreeSubdivisionScheme, QuadTreeSubdivisionScheme, SubdivisionScheme, TileTreeTraverse,
    TilingScheme,
};
use approx::assert_relative_eq;
use tile_key::TileKey;

/// Same subdivision on every level
#[derive(Debug)]
struct StripeSubdivisionScheme {
    width: u32,
    height: u32,
}

impl SubdivisionScheme for StripeSubdivisionScheme {
    fn name(&self) -> &str {
        "stripe"
    }
    fn subdivision_at(&self, _level: u32) -> Size2u {
        Size2u::new(self.width, self.height)
    }
}

fn berlin() -> GeoCoordinates {
    GeoCoordinates::from_degrees(52.5167, 13.3833)
}

#[test]
fn test_quad_tree_subdivision() {
    let scheme = QuadTreeSubdivisionScheme;
    assert_eq!(scheme.name(), "quad_tree");
    assert_eq!(scheme.subdivision_at(0), Size2u::new(2, 2));
    assert_eq!(scheme.subdivision_at(17), Size2u::new(2, 2));
    assert_eq!(scheme.level_size(0), Size2u::new(1, 1));
    assert_eq!(scheme.level_size(1), Size2u::new(2, 2));
    assert_eq!(scheme.level_size(14), Size2u::new(16384, 16384));
    assert_eq!(scheme.level_size(31), Size2u::new(1 << 31, 1 << 31));
}

#[test]
fn test_half_quad_tree_subdivision() {
    let scheme = HalfQuadTreeSubdivisionScheme;
    assert_eq!(scheme.name(), "half_quad_tree");
    assert_eq!(scheme.subdivision_at(0), Size2u::new(2, 1));
    assert_eq!(scheme.subdivision_at(1), Size2u::new(2, 2));
    assert_eq!(scheme.level_size(0), Size2u::new(1, 1));
    assert_eq!(scheme.level_size(1), Size2u::new(2, 1));
    assert_eq!(scheme.level_size(2), Size2u::new(4, 2));
    assert_eq!(scheme.level_size(15), Size2u::new(32768, 16384));
}

#[test]
fn test_default_level_size() {
    let scheme = StripeSubdivisionScheme {
        width: 2,
        height: 1,
    };
    assert_eq!(scheme.level_size(0), Size2u::new(1, 1));
    assert_eq!(scheme.level_size(3), Size2u::new(8, 1));

    let scheme = StripeSubdivisionScheme {
        width: 3,
        height: 2,
    };
    assert_eq!(scheme.level_size(2), Size2u::new(9, 4));
}

#[test]
fn test_tiling_scheme_names() {
    assert_eq!(
        TilingScheme::quad_tree_equirectangular().name(),
        "quad_tree_equirectangular"
    );
    assert_eq!(
        TilingScheme::half_quad_tree_equirectangular().name(),
        "half_quad_tree_equirectangular"
    );
    assert_eq!(TilingScheme::quad_tree_identity().name(), "quad_tree_identity");
    assert_eq!(TilingScheme::quad_tree_sphere().name(), "quad_tree_sphere");

    let scheme = TilingScheme::new(Box::new(HalfQuadTreeSubdivisionScheme), Projection::Sphere);
    assert_eq!(scheme.projection(), Projection::Sphere);
    assert_eq!(scheme.subdivision_scheme().level_size(3), Size2u::new(8, 4));
}

#[test]
fn test_tiling_scheme_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TilingScheme>();
}

#[test]
fn test_sub_nodes() {
    let scheme = QuadTreeSubdivisionScheme;
    let traverse = TileTreeTraverse::new(&scheme);
    let tile = TileKey::from_row_column_level(1, 1, 1);
    let sub_nodes = traverse.sub_nodes(tile).iter().collect::<Vec<_>>();
    let children = (0..4).map(|i| tile.get_child(i)).collect::<Vec<_>>();
    assert_eq!(sub_nodes, children);

    let scheme = HalfQuadTreeSubdivisionScheme;
    let traverse = TileTreeTraverse::new(&scheme);
    let root = TileKey::from_row_column_level(0, 0, 0);
    let sub_nodes = traverse.sub_nodes(root).iter().collect::<Vec<_>>();
    assert_eq!(
        sub_nodes,
        vec![
            TileKey::from_row_column_level(0, 0, 1),
            TileKey::from_row_column_level(0, 1, 1),
        ]
    );
    assert_eq!(traverse.sub_nodes(sub_nodes[1]).iter().count(), 4);
}

#[test]
fn test_sub_nodes_wide_subdivision() {
    let _ = env_logger::builder().is_test(true).try_init();
    let scheme = StripeSubdivisionScheme {
        width: 5,
        height: 5,
    };
    let traverse = TileTreeTraverse::new(&scheme);
    let tile = TileKey::from_row_column_level(0, 0, 0);
    assert_eq!(traverse.sub_nodes(tile).iter().count(), 4);

    let scheme = StripeSubdivisionScheme {
        width: 1,
        height: 1,
    };
    let traverse = TileTreeTraverse::new(&scheme);
    assert_eq!(
        traverse.sub_nodes(tile).iter().collect::<Vec<_>>(),
        vec![TileKey::from_row_column_level(0, 0, 1)]
    );
}

#[test]
fn test_geo_coordinates_to_tile_key() {
    let tiling_scheme = TilingScheme::half_quad_tree_equirectangular();

    let tile_key = geo_coordinates_to_tile_key(&tiling_scheme, &berlin(), 0);
    assert!(tile_key.is_valid());
    assert_eq!(tile_key, TileKey::from_row_column_level(0, 0, 0));

    let tile_key = geo_coordinates_to_tile_key(&tiling_scheme, &berlin(), 1);
    assert!(tile_key.is_valid());
    assert_eq!(tile_key, TileKey::from_row_column_level(0, 1, 1));

    let tile_key = geo_coordinates_to_tile_key(&tiling_scheme, &berlin(), 14);
    assert!(tile_key.is_valid());
    assert_eq!(tile_key, TileKey::from_row_column_level(6486, 8801, 14));

    let mut previous: Option<TileKey> = None;
    for level in (0..=20).rev() {
        let tile_key = geo_coordinates_to_tile_key(&tiling_scheme, &berlin(), level);
        assert!(tile_key.is_valid());
        if let Some(previous) = previous {
            assert_eq!(tile_key, previous.changed_level_to(level));
        }
        previous = Some(tile_key);
    }
}

#[test]
fn test_geo_coordinates_to_tile_key_edges() {
    let tiling_scheme = TilingScheme::half_quad_tree_equirectangular();

    let north_east = GeoCoordinates::from_degrees(90.0, 180.0);
    assert_eq!(
        geo_coordinates_to_tile_key(&tiling_scheme, &north_east, 4),
        TileKey::from_row_column_level(7, 15, 4)
    );
    let south_west = GeoCoordinates::from_degrees(-90.0, -180.0);
    assert_eq!(
        geo_coordinates_to_tile_key(&tiling_scheme, &south_west, 4),
        TileKey::from_row_column_level(0, 0, 4)
    );

    let tiling_scheme = TilingScheme::quad_tree_identity();
    assert_eq!(
        geo_coordinates_to_tile_key(&tiling_scheme, &north_east, 3),
        TileKey::from_row_column_level(7, 7, 3)
    );
}

#[test]
fn test_geo_coordinates_to_tile_key_invalid() {
    let tiling_scheme = TilingScheme::half_quad_tree_equirectangular();
    assert!(!geo_coordinates_to_tile_key(&tiling_scheme, &GeoCoordinates::default(), 3).is_valid());
    assert!(!geo_coordinates_to_tile_key(&tiling_scheme, &berlin(), 32).is_valid());
    let outside = GeoCoordinates::from_degrees(100.0, 0.0);
    assert!(!geo_coordinates_to_tile_key(&tiling_scheme, &outside, 3).is_valid());
    let outside = GeoCoordinates::from_degrees(0.0, 181.0);
    assert!(!geo_coordinates_to_tile_key(&tiling_scheme, &outside, 3).is_valid());
}

#[test]
fn test_geo_rectangle_to_tile_keys() {
    let tiling_scheme = TilingScheme::half_quad_tree_equirectangular();
    let center = berlin();
    let half_size = 0.005;
    let berlin_area = GeoRectangle::new(
        GeoCoordinates::new(center.latitude() - half_size, center.longitude() - half_size),
        GeoCoordinates::new(center.latitude() + half_size, center.longitude() + half_size),
    );

    assert!(geo_rectangle_to_tile_keys(&tiling_scheme, &GeoRectangle::default(), 15).is_empty());

    let mut previous_keys: Vec<TileKey> = Vec::new();
    for level in (0..=15).rev() {
        let tile_keys = geo_rectangle_to_tile_keys(&tiling_scheme, &berlin_area, level);
        assert!(!tile_keys.is_empty());
        for tile_key in &previous_keys {
            assert!(tile_keys.contains(&tile_key.changed_level_to(level)));
        }
        previous_keys = tile_keys;
    }
    assert_eq!(previous_keys, vec![TileKey::from_row_column_level(0, 0, 0)]);
}

#[test]
fn test_geo_rectangle_to_tile_keys_order() {
    let tiling_scheme = TilingScheme::half_quad_tree_equirectangular();
    // level 4: 16 columns of 22.5°, 8 rows
    let rect = GeoRectangle::new(
        GeoCoordinates::from_degrees(1.0, 1.0),
        GeoCoordinates::from_degrees(30.0, 30.0),
    );
    let tile_keys = geo_rectangle_to_tile_keys(&tiling_scheme, &rect, 4);
    assert_eq!(
        tile_keys,
        vec![
            TileKey::from_row_column_level(4, 8, 4),
            TileKey::from_row_column_level(4, 9, 4),
            TileKey::from_row_column_level(5, 8, 4),
            TileKey::from_row_column_level(5, 9, 4),
        ]
    );
}

#[test]
fn test_geo_rectangle_to_tile_keys_antimeridian() {
    let tiling_scheme = TilingScheme::half_quad_tree_equirectangular();
    let rect = GeoRectangle::new(
        GeoCoordinates::from_degrees(0.0, 170.0),
        GeoCoordinates::from_degrees(10.0, -170.0),
    );
    assert_eq!(
        geo_rectangle_to_tile_keys(&tiling_scheme, &rect, 4),
        vec![
            TileKey::from_row_column_level(4, 15, 4),
            TileKey::from_row_column_level(4, 0, 4),
        ]
    );

    // both corners in the same column: all columns once
    let rect = GeoRectangle::new(
        GeoCoordinates::from_degrees(0.0, 10.0),
        GeoCoordinates::from_degrees(10.0, 5.0),
    );
    assert_eq!(
        geo_rectangle_to_tile_keys(&tiling_scheme, &rect, 1),
        vec![
            TileKey::from_row_column_level(0, 1, 1),
            TileKey::from_row_column_level(0, 0, 1),
        ]
    );
}

#[test]
fn test_geo_rectangle_to_tile_keys_boundaries() {
    let tiling_scheme = TilingScheme::half_quad_tree_equirectangular();
    let level_size = tiling_scheme.subdivision_scheme().level_size(15);
    let cx = level_size.width;
    let cy = level_size.height;
    let half_size = 0.00005;
    let area = |corner: GeoCoordinates| {
        GeoRectangle::new(
            GeoCoordinates::new(corner.latitude() - half_size, corner.longitude() - half_size),
            GeoCoordinates::new(corner.latitude() + half_size, corner.longitude() + half_size),
        )
    };

    let cases = vec![
        (GeoCoordinates::from_degrees(-90.0, -180.0), 0),
        (GeoCoordinates::from_degrees(-90.0, 180.0), 0),
        (GeoCoordinates::from_degrees(90.0, -180.0), cy - 1),
        (GeoCoordinates::from_degrees(90.0, 180.0), cy - 1),
    ];
    for (corner, row) in cases {
        let tile_keys = geo_rectangle_to_tile_keys(&tiling_scheme, &area(corner), 15);
        assert_eq!(tile_keys.len(), 2, "{}", corner);
        assert!(tile_keys.contains(&TileKey::from_row_column_level(row, 0, 15)));
        assert!(tile_keys.contains(&TileKey::from_row_column_level(row, cx - 1, 15)));
    }
}

#[test]
fn test_sub_tile_keys() {
    // (parent, relative sub tile, absolute sub tile)
    let table = vec![
        ((0, 0, 0), (0, 0, 0), (0, 0, 0)),
        ((1, 1, 1), (0, 0, 0), (1, 1, 1)),
        ((1, 1, 1), (8, 8, 5), (40, 40, 6)),
    ];
    let key = |(row, column, level): (u32, u32, u32)| TileKey::from_row_column_level(row, column, level);
    for (parent, relative, absolute) in table {
        let (parent, relative, absolute) = (key(parent), key(relative), key(absolute));
        assert_eq!(get_absolute_sub_tile_key(&parent, &relative), absolute);
        assert_eq!(get_relative_sub_tile_key(&absolute, parent.level()), relative);
    }
}

#[test]
fn test_relative_sub_tile_key_of_ancestor() {
    // parent level below the tile level wraps around
    let tile_key = TileKey::from_row_column_level(1, 1, 2);
    let relative = get_relative_sub_tile_key(&tile_key, 3);
    assert_eq!(relative.row(), 0);
    assert_eq!(relative.column(), 0);
    assert_eq!(relative.level(), u32::MAX);
    assert!(!relative.is_valid());
}

#[test]
fn test_empty_level_size() {
    let tiling_scheme = TilingScheme::new(
        Box::new(StripeSubdivisionScheme {
            width: 0,
            height: 0,
        }),
        Projection::Equirectangular,
    );
    assert_eq!(
        geo_coordinates_to_tile_key(&tiling_scheme, &berlin(), 0),
        TileKey::from_row_column_level(0, 0, 0)
    );
    assert!(!geo_coordinates_to_tile_key(&tiling_scheme, &berlin(), 1).is_valid());
    let rect = GeoRectangle::new(
        GeoCoordinates::from_degrees(1.0, 1.0),
        GeoCoordinates::from_degrees(30.0, 30.0),
    );
    assert!(geo_rectangle_to_tile_keys(&tiling_scheme, &rect, 3).is_empty());
}

#[test]
fn test_calculate_tile_box() {
    let tiling_scheme = TilingScheme::half_quad_tree_equirectangular();
    let tile_box = calculate_tile_box(&tiling_scheme, &TileKey::from_row_column_level(0, 0, 0));
    assert_eq!(tile_box.minimum, Vector3d::new(0.0, 0.0, 0.0));
    assert_eq!(tile_box.maximum, Vector3d::new(1.0, 0.5, 0.0));

    let tile_box = calculate_tile_box(&tiling_scheme, &TileKey::from_row_column_level(0, 1, 1));
    assert_eq!(tile_box.minimum, Vector3d::new(0.5, 0.0, 0.0));
    assert_eq!(tile_box.maximum, Vector3d::new(1.0, 0.5, 0.0));

    let tile_key = geo_coordinates_to_tile_key(&tiling_scheme, &berlin(), 14);
    let tile_box = calculate_tile_box(&tiling_scheme, &tile_key);
    let world = tiling_scheme
        .projection()
        .project(&GeoCoordinates3d::with_altitude(berlin(), 0.0))
        .unwrap();
    assert!(tile_box.contains(&world));
    assert_relative_eq!(tile_box.size().x, 1.0 / 16384.0);
    assert_relative_eq!(tile_box.size().y, 1.0 / 16384.0);

    let tiling_scheme = TilingScheme::quad_tree_identity();
    let tile_box = calculate_tile_box(&tiling_scheme, &TileKey::from_row_column_level(1, 0, 1));
    assert_relative_eq!(tile_box.minimum.x, -std::f64::consts::PI);
    assert_relative_eq!(tile_box.minimum.y, 0.0);
    assert_relative_eq!(tile_box.maximum.x, 0.0);
    assert_relative_eq!(tile_box.maximum.y, std::f64::consts::FRAC_PI_2);
}

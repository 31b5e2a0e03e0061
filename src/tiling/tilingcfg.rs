//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::config::{Config, PathTilingCfg, TilingSchemeCfg};
use crate::projection::Projection;
use crate::tiling::{
    HalfQuadTreeSubdivisionScheme, PathTilingOptions, QuadTreeSubdivisionScheme,
    SubdivisionScheme, TilingScheme,
};
use tile_key::LEVEL_COUNT;

impl<'a> Config<'a, TilingSchemeCfg> for TilingScheme {
    fn from_config(tiling_cfg: &TilingSchemeCfg) -> Result<Self, String> {
        if let Some(ref name) = tiling_cfg.predefined {
            match name.as_str() {
                "quad_tree_equirectangular" => Ok(TilingScheme::quad_tree_equirectangular()),
                "half_quad_tree_equirectangular" => {
                    Ok(TilingScheme::half_quad_tree_equirectangular())
                }
                "quad_tree_identity" => Ok(TilingScheme::quad_tree_identity()),
                "quad_tree_sphere" => Ok(TilingScheme::quad_tree_sphere()),
                _ => {
                    warn!("Unknown predefined tiling scheme '{}'", name);
                    Err(format!("Unkown tiling scheme '{}'", name))
                }
            }
        } else if let Some(ref user_cfg) = tiling_cfg.user {
            let subdivision: Result<Box<dyn SubdivisionScheme + Send + Sync>, String> =
                match &user_cfg.subdivision.to_lowercase() as &str {
                    "quad_tree" => Ok(Box::new(QuadTreeSubdivisionScheme)),
                    "half_quad_tree" => Ok(Box::new(HalfQuadTreeSubdivisionScheme)),
                    _ => Err(format!("Unexpected enum value '{}'", user_cfg.subdivision)),
                };
            let projection = user_cfg.projection.to_lowercase().parse::<Projection>();
            Ok(TilingScheme::new(subdivision?, projection?))
        } else {
            Err("Invalid tiling scheme definition".to_string())
        }
    }
    fn gen_config() -> String {
        let toml = r#"
[tiling]
# quad_tree_equirectangular, half_quad_tree_equirectangular, quad_tree_identity, quad_tree_sphere
predefined = "half_quad_tree_equirectangular"
"#;
        toml.to_string()
    }
    fn gen_runtime_config(&self) -> String {
        format!(
            r#"
[tiling.user]
subdivision = "{}"
projection = "{}"
"#,
            self.subdivision_scheme().name(),
            self.projection()
        )
    }
}

impl<'a> Config<'a, PathTilingCfg> for PathTilingOptions {
    fn from_config(path_cfg: &PathTilingCfg) -> Result<Self, String> {
        if path_cfg.level >= LEVEL_COUNT {
            return Err(format!(
                "Path level {} exceeds maximum level {}",
                path_cfg.level,
                LEVEL_COUNT - 1
            ));
        }
        Ok(PathTilingOptions {
            level: path_cfg.level,
            area_offset: path_cfg.area_offset,
        })
    }
    fn gen_config() -> String {
        let toml = r#"
[path]
level = 14
# Number of neighbour tiles on every side of the path
area_offset = 0
"#;
        toml.to_string()
    }
    fn gen_runtime_config(&self) -> String {
        format!(
            r#"
[path]
level = {}
area_offset = {}
"#,
            self.level, self.area_offset
        )
    }
}

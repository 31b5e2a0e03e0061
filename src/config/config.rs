//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
    /// Generate configuration template with runtime information
    fn gen_runtime_config(&self) -> String {
        Self::gen_config()
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationCfg {
    pub tiling: TilingSchemeCfg,
    pub path: Option<PathTilingCfg>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TilingSchemeCfg {
    pub predefined: Option<String>,
    pub user: Option<UserTilingSchemeCfg>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct UserTilingSchemeCfg {
    /// Subdivision scheme (quad_tree, half_quad_tree)
    pub subdivision: String,
    /// Projection of geographic coordinates into world space
    /// (equirectangular, sphere, identity)
    pub projection: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct PathTilingCfg {
    /// Tile level of the generated tiles
    #[serde(default = "default_path_level")]
    pub level: u32,
    /// Number of neighbour tiles added on every side of the path
    #[serde(default)]
    pub area_offset: u32,
}

pub fn default_path_level() -> u32 {
    14
}

pub const DEFAULT_CONFIG: &'static str = r#"
[tiling]
predefined = "half_quad_tree_equirectangular"

[path]
level = 14
area_offset = 0
"#;

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err("Could not find config file!".to_string());
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(format!("Error while reading config: [{}]", err));
    };

    parse_config(config_toml, path)
}

/// Parse the configuration into an config struct.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    // Check for old ${var} expressions
    let re = Regex::new(r"\$\{([[:alnum:]]+)\}").map_err(|e| e.to_string())?;
    if re.is_match(&config_toml) {
        return Err(
            "Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string(),
        );
    }

    // Parse template
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| format!("Template error: {}", e))?;
    let mut context = Context::new();
    let mut env = HashMap::new();
    for (key, value) in env::vars() {
        env.insert(key, value);
    }
    context.insert("env", &env);
    let toml = tera.render(path, &context).map_err(|e| match e.source() {
        Some(source) => format!("Template error: {}", source),
        None => format!("Template error: {}", e),
    })?;

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}

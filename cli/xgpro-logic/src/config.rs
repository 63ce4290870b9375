//! `xgpro.toml` configuration.
//!
//! Every section is optional. Command-line flags take precedence over
//! values read here.
//!
//! ```toml
//! [load]
//! strict = true
//!
//! [create]
//! format = "json"
//!
//! [describe]
//! view = "xml"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use xgpro_bridge::SourceFormat;

/// Configuration file name searched for from the working directory upward.
pub const CONFIG_FILE: &str = "xgpro.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub load: LoadConfig,
    #[serde(default)]
    pub create: CreateConfig,
    #[serde(default)]
    pub describe: DescribeConfig,
}

/// How LGC files are loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Verify magic, checksum, and offset order on load.
    #[serde(default)]
    pub strict: bool,
}

/// Defaults for `xgpro-logic lgc`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateConfig {
    /// Source format when `-f` is not given.
    #[serde(default)]
    pub format: Option<SourceFormat>,
}

/// Defaults for `xgpro-logic describe`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribeConfig {
    /// View used when no format flag is given (dump, toml, json, xml).
    #[serde(default)]
    pub view: Option<String>,
}

impl Config {
    /// Parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }
}

/// Walk up from `start` looking for `xgpro.toml`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}

/// Load the explicit config if given, else the nearest `xgpro.toml`, else
/// defaults. Returns the path the config came from.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<(Config, Option<PathBuf>)> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config(cwd),
    };
    match path {
        Some(path) => Ok((Config::load(&path)?, Some(path))),
        None => Ok((Config::default(), None)),
    }
}

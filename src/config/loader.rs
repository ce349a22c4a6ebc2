//! Configuration file discovery and loading.

use crate::config::merger::merge_configs;
use crate::config::schema::RigcheckConfig;
use crate::error::{Result, RigcheckError};
use std::fs;
use std::path::{Path, PathBuf};

/// Project config file name.
pub const PROJECT_CONFIG: &str = "rigcheck.yml";

/// Local override file name.
pub const LOCAL_CONFIG: &str = "rigcheck.local.yml";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`~/.rigcheck/config.yml`)
/// 2. Project config (`rigcheck.yml`)
/// 3. Local overrides (`rigcheck.local.yml`)
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    pub user_global: Option<PathBuf>,
    pub project: Option<PathBuf>,
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given working directory.
    pub fn discover(root: &Path) -> Self {
        Self {
            user_global: dirs::home_dir()
                .map(|home| home.join(".rigcheck").join("config.yml"))
                .filter(|p| p.exists()),
            ..Self::discover_project(root)
        }
    }

    /// Discover only the project-level files (no home directory lookup).
    pub fn discover_project(root: &Path) -> Self {
        Self {
            user_global: None,
            project: existing(root.join(PROJECT_CONFIG)),
            project_local: existing(root.join(LOCAL_CONFIG)),
        }
    }

    /// All existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
            .collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.exists().then_some(path)
}

/// Load a single config file.
///
/// An empty file yields the default configuration.
pub fn load_config_file(path: &Path) -> Result<RigcheckConfig> {
    let value = load_config_value(path)?;
    from_value(value, path)
}

/// Parse YAML content into a config, naming `source_path` in errors.
pub fn parse_config(content: &str, source_path: &Path) -> Result<RigcheckConfig> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| RigcheckError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;
    from_value(value, source_path)
}

/// Load a config file as a raw YAML value, for merging.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RigcheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RigcheckError::Io(e)
        }
    })?;

    let value: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|e| RigcheckError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    // An empty document parses to null; treat it as "no settings".
    Ok(match value {
        serde_yaml::Value::Null => serde_yaml::Value::Mapping(Default::default()),
        other => other,
    })
}

fn from_value(value: serde_yaml::Value, path: &Path) -> Result<RigcheckConfig> {
    let value = match value {
        serde_yaml::Value::Null => serde_yaml::Value::Mapping(Default::default()),
        other => other,
    };
    serde_yaml::from_value(value).map_err(|e| RigcheckError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge the discovered layers.
///
/// With no files at all the defaults are returned; validation then
/// reports the missing data source.
pub fn load_merged(paths: &ConfigPaths, root: &Path) -> Result<RigcheckConfig> {
    let mut layers = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!(path = %path.display(), "Loading config layer");
        layers.push(load_config_value(path)?);
    }

    let merged = merge_configs(&layers);
    serde_yaml::from_value(merged).map_err(|e| RigcheckError::ConfigParseError {
        path: root.join(PROJECT_CONFIG),
        message: format!("Failed to parse merged config: {}", e),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges all config files under `root`.
pub fn load_config(root: &Path, config_override: Option<&Path>) -> Result<RigcheckConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_merged(&ConfigPaths::discover(root), root),
    }
}

//! Configuration file discovery and loading.
//!
//! Layers are applied in this order, later overriding earlier:
//! 1. Built-in defaults
//! 2. User config (`<config dir>/accelgate/config.yml`)
//! 3. Explicit `--config` file
//! 4. `ACCELGATE_*` environment variables

use std::env::VarError;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::{ConfigFile, GateConfig};
use crate::error::{GateError, Result};

pub const ENV_MODULE: &str = "ACCELGATE_MODULE";
pub const ENV_SEARCH_PATH: &str = "ACCELGATE_SEARCH_PATH";
pub const ENV_SYMBOL: &str = "ACCELGATE_SYMBOL";
pub const ENV_PREFER: &str = "ACCELGATE_PREFER";

/// Config files in the order they are applied.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User config, if it exists. Optional layer.
    pub user_global: Option<PathBuf>,

    /// Explicit file. Must exist when given.
    pub explicit: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover the user config and record the explicit override.
    pub fn discover(explicit: Option<&Path>) -> Self {
        Self {
            user_global: Self::find_user_global(),
            explicit: explicit.map(Path::to_path_buf),
        }
    }

    fn find_user_global() -> Option<PathBuf> {
        let path = dirs::config_dir()?.join("accelgate").join("config.yml");
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GateError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GateError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a config layer.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ConfigFile> {
    // An empty file is a valid, empty layer.
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let layer: ConfigFile =
        serde_yaml::from_str(content).map_err(|e| GateError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    if layer.module.as_deref().is_some_and(|m| m.trim().is_empty()) {
        return Err(GateError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: "module must not be empty".to_string(),
        });
    }

    Ok(layer)
}

/// Load configuration from the discovered files and the process environment.
pub fn load_config(explicit: Option<&Path>) -> Result<GateConfig> {
    load_config_with_env(&ConfigPaths::discover(explicit), |key| std::env::var(key))
}

/// Load configuration with a custom environment lookup.
///
/// This allows testing without modifying actual environment variables.
pub fn load_config_with_env<F>(paths: &ConfigPaths, env_fn: F) -> Result<GateConfig>
where
    F: Fn(&str) -> std::result::Result<String, VarError>,
{
    let mut config = GateConfig::default();

    if let Some(path) = &paths.user_global {
        tracing::debug!("Loading user config from {}", path.display());
        config.apply(load_config_file(path)?);
    }

    if let Some(path) = &paths.explicit {
        tracing::debug!("Loading config from {}", path.display());
        config.apply(load_config_file(path)?);
    }

    apply_env(&mut config, &env_fn)?;
    Ok(config)
}

fn apply_env<F>(config: &mut GateConfig, env_fn: &F) -> Result<()>
where
    F: Fn(&str) -> std::result::Result<String, VarError>,
{
    if let Some(module) = non_empty(env_fn(ENV_MODULE)) {
        config.module = module;
    }
    if let Some(paths) = non_empty(env_fn(ENV_SEARCH_PATH)) {
        config.search_paths = std::env::split_paths(&paths)
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
    }
    if let Some(symbol) = non_empty(env_fn(ENV_SYMBOL)) {
        config.entry_symbol = Some(symbol);
    }
    if let Some(prefer) = non_empty(env_fn(ENV_PREFER)) {
        config.prefer = prefer.parse()?;
    }
    Ok(())
}

fn non_empty(value: std::result::Result<String, VarError>) -> Option<String> {
    value.ok().filter(|v| !v.trim().is_empty())
}

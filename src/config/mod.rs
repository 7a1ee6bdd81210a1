//! Configuration loading for accelgate.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, loading and environment overrides in [`loader`]
//!
//! # Example
//!
//! ```
//! use accelgate::config::{load_config_with_env, ConfigPaths};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("accelgate.yml");
//! fs::write(&path, "module: mkl_rt").unwrap();
//!
//! let paths = ConfigPaths { user_global: None, explicit: Some(path) };
//! let config = load_config_with_env(&paths, |_| Err(std::env::VarError::NotPresent)).unwrap();
//! assert_eq!(config.module, "mkl_rt");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    load_config, load_config_file, load_config_with_env, parse_config, ConfigPaths, ENV_MODULE,
    ENV_PREFER, ENV_SEARCH_PATH, ENV_SYMBOL,
};
pub use schema::{ConfigFile, GateConfig};

//! Error types for accelgate operations.
//!
//! This module defines [`GateError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `ModuleUnavailable` never leaves the probe; it is turned into `false`
//! - Use `GateError` for conditions callers need to branch on
//! - Use `anyhow::Error` (via `GateError::Other`) at the binary edge

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for accelgate operations.
#[derive(Debug, Error)]
pub enum GateError {
    /// The optional module could not be resolved or loaded.
    #[error("Module '{module}' is unavailable: {message}")]
    ModuleUnavailable { module: String, message: String },

    /// Columnar materialization was demanded but the module is unavailable.
    #[error("Array acceleration required but '{module}' cannot be loaded")]
    AccelerationRequired { module: String },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Explicit config file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Unrecognized materialization preference.
    #[error("Invalid preference '{value}' (expected auto, columnar or rows)")]
    InvalidPreference { value: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for accelgate operations.
pub type Result<T> = std::result::Result<T, GateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_unavailable_displays_module_and_message() {
        let err = GateError::ModuleUnavailable {
            module: "openblas".into(),
            message: "cannot open shared object file".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("openblas"));
        assert!(msg.contains("cannot open shared object file"));
    }

    #[test]
    fn acceleration_required_displays_module() {
        let err = GateError::AccelerationRequired {
            module: "openblas".into(),
        };
        assert!(err.to_string().contains("openblas"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = GateError::ConfigParseError {
            path: PathBuf::from("/etc/accelgate.yml"),
            message: "invalid type".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/etc/accelgate.yml"));
        assert!(msg.contains("invalid type"));
    }

    #[test]
    fn invalid_preference_lists_choices() {
        let err = GateError::InvalidPreference {
            value: "fast".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("fast"));
        assert!(msg.contains("columnar"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GateError = io_err.into();
        assert!(matches!(err, GateError::Io(_)));
    }
}

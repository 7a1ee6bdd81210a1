//! accelgate - Runtime capability gate for optional array acceleration.
//!
//! A database cursor can hand back results as array-backed columns when an
//! optional numerical library is loadable, or as plain rows when it is not.
//! accelgate answers the question "is that library usable right now?"
//! without ever failing.
//!
//! # Modules
//!
//! - [`capability`] - The probe, capability providers and strategy selection
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading from YAML files and environment
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use accelgate::capability::{select_strategy, FixedProvider, MaterializationStrategy, Preference};
//!
//! let provider = FixedProvider::new("openblas", false);
//! let strategy = select_strategy(Preference::Auto, &provider).unwrap();
//! assert_eq!(strategy, MaterializationStrategy::Rows);
//! ```

pub mod capability;
pub mod cli;
pub mod config;
pub mod error;
pub mod ui;

pub use capability::{has_array_support, CapabilityProbe};
pub use error::{GateError, Result};

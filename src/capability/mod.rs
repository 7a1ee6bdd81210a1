//! Optional acceleration capability detection.
//!
//! This module decides whether the optional array library can be loaded in
//! the running process, and what a cursor should do with that answer.
//!
//! # Modules
//!
//! - [`loader`] - Module identity and the dynamic loading mechanism
//! - [`probe`] - The capability probe itself
//! - [`provider`] - Injectable live, cached and fixed capability sources
//! - [`strategy`] - Columnar vs row materialization choice

pub mod loader;
pub mod probe;
pub mod provider;
pub mod strategy;

pub use loader::{DynamicLibraryLoader, ModuleLoader, ModuleSpec, DEFAULT_MODULE};
pub use probe::{has_array_support, CapabilityProbe, ProbeAttempt, ProbeReport};
pub use provider::{CachedProvider, CapabilityProvider, FixedProvider, LiveProvider};
pub use strategy::{select_strategy, MaterializationStrategy, Preference};

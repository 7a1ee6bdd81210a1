//! Injectable capability sources.
//!
//! Consumers depend on [`CapabilityProvider`] rather than calling the probe
//! directly, so the answer can come from a live probe, an explicit cache, or
//! a fixed value in tests.

use std::sync::{PoisonError, RwLock};

use super::loader::{DynamicLibraryLoader, ModuleLoader};
use super::probe::CapabilityProbe;

/// Source of the capability flag.
pub trait CapabilityProvider: Send + Sync {
    /// Whether the acceleration module is usable.
    fn is_available(&self) -> bool;

    /// Name of the module the answer refers to.
    fn module(&self) -> &str;
}

/// Probes on every query.
#[derive(Debug, Clone)]
pub struct LiveProvider<L = DynamicLibraryLoader> {
    probe: CapabilityProbe<L>,
}

impl Default for LiveProvider {
    fn default() -> Self {
        Self::new(CapabilityProbe::default())
    }
}

impl<L: ModuleLoader> LiveProvider<L> {
    /// Wrap a probe.
    pub fn new(probe: CapabilityProbe<L>) -> Self {
        Self { probe }
    }
}

impl<L: ModuleLoader> CapabilityProvider for LiveProvider<L> {
    fn is_available(&self) -> bool {
        self.probe.probe()
    }

    fn module(&self) -> &str {
        &self.probe.spec().name
    }
}

/// Probes once, then answers from memory until reset.
///
/// Concurrent first queries may each run the probe. A probe result is only
/// stored if no `reset` or `override_with` happened while it was running.
#[derive(Debug)]
pub struct CachedProvider<L = DynamicLibraryLoader> {
    probe: CapabilityProbe<L>,
    state: RwLock<CacheState>,
}

/// Cached answer plus a counter bumped by every explicit change.
#[derive(Debug, Default)]
struct CacheState {
    value: Option<bool>,
    generation: u64,
}

impl<L: ModuleLoader> CachedProvider<L> {
    /// Wrap a probe with an empty cache.
    pub fn new(probe: CapabilityProbe<L>) -> Self {
        Self {
            probe,
            state: RwLock::new(CacheState::default()),
        }
    }

    /// The cached answer, without probing.
    pub fn cached(&self) -> Option<bool> {
        self.read_state().value
    }

    /// Forget the cached answer so the next query probes again.
    pub fn reset(&self) {
        self.set(None);
    }

    /// Pin the answer without probing.
    pub fn override_with(&self, available: bool) {
        self.set(Some(available));
    }

    fn set(&self, value: Option<bool>) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.value = value;
        state.generation += 1;
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, CacheState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<L: ModuleLoader> CapabilityProvider for CachedProvider<L> {
    fn is_available(&self) -> bool {
        let started = {
            let state = self.read_state();
            if let Some(available) = state.value {
                return available;
            }
            state.generation
        };

        let available = self.probe.probe();

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if state.generation != started {
            // An explicit reset or override landed mid-probe; it wins.
            tracing::debug!(module = %self.probe.spec().name, "discarding stale probe result");
            return state.value.unwrap_or(available);
        }
        tracing::debug!(module = %self.probe.spec().name, available, "caching capability");
        *state.value.get_or_insert(available)
    }

    fn module(&self) -> &str {
        &self.probe.spec().name
    }
}

/// Constant answer.
#[derive(Debug, Clone)]
pub struct FixedProvider {
    module: String,
    available: bool,
}

impl FixedProvider {
    /// Create a provider that always answers `available`.
    pub fn new(module: &str, available: bool) -> Self {
        Self {
            module: module.to_string(),
            available,
        }
    }
}

impl CapabilityProvider for FixedProvider {
    fn is_available(&self) -> bool {
        self.available
    }

    fn module(&self) -> &str {
        &self.module
    }
}

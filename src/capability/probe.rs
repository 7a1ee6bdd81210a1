//! Capability probe for the optional acceleration module.
//!
//! The probe answers one question: can the module be loaded in this process
//! right now? Every load failure, including a panic raised while loading, is
//! reduced to `false`. Callers never see an error from [`CapabilityProbe::probe`].
//!
//! # Example
//!
//! ```no_run
//! use accelgate::capability::{has_array_support, CapabilityProbe, ModuleSpec};
//!
//! if has_array_support() {
//!     println!("columnar fast path enabled");
//! }
//!
//! let probe = CapabilityProbe::new(ModuleSpec::new("mkl_rt"));
//! println!("mkl usable: {}", probe.probe());
//! ```

use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::loader::{DynamicLibraryLoader, ModuleLoader, ModuleSpec};

/// One candidate handed to the loader and why it failed, if it did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeAttempt {
    /// Path given to the loader.
    pub candidate: PathBuf,
    /// Failure text, `None` when the load succeeded.
    pub error: Option<String>,
}

/// Detailed outcome of a probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    /// Configured module name.
    pub module: String,
    /// Whether any candidate loaded.
    pub available: bool,
    /// Candidates in the order tried. Stops at the first success.
    pub attempts: Vec<ProbeAttempt>,
}

/// Stateless probe for one optional module.
#[derive(Debug, Clone)]
pub struct CapabilityProbe<L = DynamicLibraryLoader> {
    spec: ModuleSpec,
    loader: L,
}

impl Default for CapabilityProbe {
    fn default() -> Self {
        Self::new(ModuleSpec::default())
    }
}

impl CapabilityProbe {
    /// Probe `spec` through the platform dynamic loader.
    pub fn new(spec: ModuleSpec) -> Self {
        Self::with_loader(spec, DynamicLibraryLoader)
    }
}

impl<L: ModuleLoader> CapabilityProbe<L> {
    /// Probe `spec` through a custom loader.
    pub fn with_loader(spec: ModuleSpec, loader: L) -> Self {
        Self { spec, loader }
    }

    /// The module this probe targets.
    pub fn spec(&self) -> &ModuleSpec {
        &self.spec
    }

    /// Whether the module can be loaded right now.
    pub fn probe(&self) -> bool {
        self.report().available
    }

    /// Probe and keep the per-candidate detail.
    pub fn report(&self) -> ProbeReport {
        let symbol = self.spec.entry_symbol.as_deref();
        let mut attempts = Vec::new();
        let mut available = false;

        for candidate in self.spec.candidates() {
            let error = self.try_load(&candidate, symbol);
            let loaded = error.is_none();
            attempts.push(ProbeAttempt { candidate, error });
            if loaded {
                available = true;
                break;
            }
        }

        tracing::debug!(
            module = %self.spec.name,
            available,
            attempts = attempts.len(),
            "capability probe finished"
        );

        ProbeReport {
            module: self.spec.name.clone(),
            available,
            attempts,
        }
    }

    /// Run the load step, returning the failure text if it failed.
    fn try_load(&self, candidate: &Path, symbol: Option<&str>) -> Option<String> {
        let outcome =
            panic::catch_unwind(AssertUnwindSafe(|| self.loader.load(candidate, symbol)));

        let error = match outcome {
            Ok(Ok(())) => return None,
            Ok(Err(e)) => e.to_string(),
            Err(payload) => format!("loader panicked: {}", panic_message(payload.as_ref())),
        };

        tracing::debug!(candidate = %candidate.display(), %error, "module load failed");
        Some(error)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Whether the default acceleration module is usable in this process.
pub fn has_array_support() -> bool {
    CapabilityProbe::new(ModuleSpec::default()).probe()
}

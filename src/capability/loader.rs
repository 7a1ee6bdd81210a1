//! Module resolution through the platform dynamic loader.
//!
//! A [`ModuleSpec`] names the optional library and where to look for it.
//! A [`ModuleLoader`] attempts a single candidate path. The real
//! implementation, [`DynamicLibraryLoader`], goes through `libloading`;
//! tests substitute their own loaders.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{GateError, Result};

/// Library stem of the default acceleration module.
pub const DEFAULT_MODULE: &str = "openblas";

/// Extensions that mark a name as a concrete file rather than a stem.
const LIBRARY_EXTENSIONS: &[&str] = &["so", "dylib", "dll"];

/// Identity of the optional module to probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleSpec {
    /// Library stem (`openblas`) or explicit file name/path.
    pub name: String,
    /// Directories tried before the platform search path.
    pub search_paths: Vec<PathBuf>,
    /// Symbol the library must export to count as usable.
    pub entry_symbol: Option<String>,
}

impl Default for ModuleSpec {
    fn default() -> Self {
        Self::new(DEFAULT_MODULE)
    }
}

impl ModuleSpec {
    /// Create a spec for the given library name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            search_paths: Vec::new(),
            entry_symbol: None,
        }
    }

    /// Add directories to search before the platform search path.
    pub fn with_search_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.search_paths = paths;
        self
    }

    /// Require the library to export `symbol`.
    pub fn with_entry_symbol(mut self, symbol: &str) -> Self {
        self.entry_symbol = Some(symbol.to_string());
        self
    }

    /// The file name handed to the loader.
    ///
    /// Stems become the platform file name (`libopenblas.so` on Linux);
    /// anything that already looks like a file is used verbatim.
    pub fn file_name(&self) -> OsString {
        if is_explicit_file(&self.name) {
            OsString::from(&self.name)
        } else {
            libloading::library_filename(&self.name)
        }
    }

    /// Candidate paths in the order they are tried.
    ///
    /// Explicit paths (containing a separator) are tried alone. Otherwise each
    /// search directory is tried first, then the bare file name so the
    /// platform loader applies its own search rules.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let file_name = self.file_name();
        if has_separator(&self.name) {
            return vec![PathBuf::from(file_name)];
        }

        let mut candidates: Vec<PathBuf> = self
            .search_paths
            .iter()
            .map(|dir| dir.join(&file_name))
            .collect();
        candidates.push(PathBuf::from(file_name));
        candidates
    }
}

fn has_separator(name: &str) -> bool {
    name.contains('/') || name.contains(std::path::MAIN_SEPARATOR)
}

/// Whether `name` names a concrete library file rather than a stem.
pub fn is_explicit_file(name: &str) -> bool {
    if has_separator(name) {
        return true;
    }
    // Versioned sonames like libc.so.6 carry the extension mid-name.
    name.split('.')
        .skip(1)
        .any(|part| LIBRARY_EXTENSIONS.contains(&part))
}

/// The module resolution mechanism consumed by the probe.
pub trait ModuleLoader: Send + Sync {
    /// Attempt to load the library at `candidate`.
    ///
    /// When `entry_symbol` is given the library must export it. The loaded
    /// handle is released before returning.
    fn load(&self, candidate: &Path, entry_symbol: Option<&str>) -> Result<()>;
}

/// Loader backed by the platform dynamic loader.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicLibraryLoader;

impl ModuleLoader for DynamicLibraryLoader {
    fn load(&self, candidate: &Path, entry_symbol: Option<&str>) -> Result<()> {
        let unavailable = |message: String| GateError::ModuleUnavailable {
            module: display_name(candidate.as_os_str()),
            message,
        };

        // SAFETY: loading runs the library's initializers. That is the
        // accepted cost of asking whether the module is usable.
        let library = unsafe { libloading::Library::new(candidate) }
            .map_err(|e| unavailable(e.to_string()))?;

        if let Some(symbol) = entry_symbol {
            // SAFETY: the symbol is only looked up, never called.
            unsafe { library.get::<unsafe extern "C" fn()>(symbol.as_bytes()) }
                .map_err(|e| unavailable(e.to_string()))?;
        }

        drop(library);
        Ok(())
    }
}

fn display_name(name: &OsStr) -> String {
    name.to_string_lossy().into_owned()
}

//! Configuration schema.
//!
//! [`ConfigFile`] is one YAML layer where every field is optional.
//! [`GateConfig`] is the resolved result after all layers are applied.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::capability::{ModuleSpec, Preference, DEFAULT_MODULE};

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateConfig {
    /// Library stem or file of the acceleration module.
    pub module: String,
    /// Directories searched before the platform search path.
    pub search_paths: Vec<PathBuf>,
    /// Symbol the module must export.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_symbol: Option<String>,
    /// Materialization preference.
    pub prefer: Preference,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            module: DEFAULT_MODULE.to_string(),
            search_paths: Vec::new(),
            entry_symbol: None,
            prefer: Preference::Auto,
        }
    }
}

impl GateConfig {
    /// Apply a file layer on top of this config.
    pub fn apply(&mut self, layer: ConfigFile) {
        if let Some(module) = layer.module {
            self.module = module;
        }
        if let Some(paths) = layer.search_paths {
            self.search_paths = paths;
        }
        if let Some(symbol) = layer.entry_symbol {
            self.entry_symbol = Some(symbol);
        }
        if let Some(prefer) = layer.prefer {
            self.prefer = prefer;
        }
    }

    /// Copy with command-line overrides applied.
    ///
    /// A new module drops the configured search paths, which belong to the
    /// configured module. Blank values are ignored.
    pub fn with_module_override(&self, module: Option<&str>, symbol: Option<&str>) -> Self {
        let mut config = self.clone();
        if let Some(module) = module.filter(|m| !m.trim().is_empty()) {
            config.module = module.to_string();
            config.search_paths.clear();
        }
        if let Some(symbol) = symbol.filter(|s| !s.trim().is_empty()) {
            config.entry_symbol = Some(symbol.to_string());
        }
        config
    }

    /// The module spec a probe should use.
    pub fn module_spec(&self) -> ModuleSpec {
        let spec = ModuleSpec::new(&self.module).with_search_paths(self.search_paths.clone());
        match &self.entry_symbol {
            Some(symbol) => spec.with_entry_symbol(symbol),
            None => spec,
        }
    }
}

/// A single configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub module: Option<String>,
    pub search_paths: Option<Vec<PathBuf>>,
    pub entry_symbol: Option<String>,
    pub prefer: Option<Preference>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_openblas_automatically() {
        let config = GateConfig::default();
        assert_eq!(config.module, "openblas");
        assert_eq!(config.prefer, Preference::Auto);
        assert!(config.entry_symbol.is_none());
    }

    #[test]
    fn layer_overrides_only_present_fields() {
        let mut config = GateConfig::default();
        config.apply(ConfigFile {
            entry_symbol: Some("cblas_dgemm".into()),
            ..Default::default()
        });

        assert_eq!(config.module, "openblas");
        assert_eq!(config.entry_symbol.as_deref(), Some("cblas_dgemm"));
    }

    #[test]
    fn yaml_layer_parses() {
        let layer: ConfigFile = serde_yaml::from_str(
            "module: mkl_rt\nsearch_paths: [/opt/intel/lib]\nprefer: columnar\n",
        )
        .unwrap();

        assert_eq!(layer.module.as_deref(), Some("mkl_rt"));
        assert_eq!(layer.search_paths, Some(vec![PathBuf::from("/opt/intel/lib")]));
        assert_eq!(layer.prefer, Some(Preference::Columnar));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: std::result::Result<ConfigFile, _> = serde_yaml::from_str("modul: typo\n");
        assert!(result.is_err());
    }

    #[test]
    fn module_override_drops_configured_search_paths() {
        let config = GateConfig {
            search_paths: vec![PathBuf::from("/opt/blas")],
            entry_symbol: Some("cblas_dgemm".into()),
            ..Default::default()
        };
        let effective = config.with_module_override(Some("mkl_rt"), None);

        assert_eq!(effective.module, "mkl_rt");
        assert!(effective.search_paths.is_empty());
        assert_eq!(effective.entry_symbol.as_deref(), Some("cblas_dgemm"));
    }

    #[test]
    fn symbol_override_keeps_module_and_paths() {
        let config = GateConfig {
            search_paths: vec![PathBuf::from("/opt/blas")],
            ..Default::default()
        };
        let effective = config.with_module_override(None, Some("cblas_sgemm"));

        assert_eq!(effective.module, "openblas");
        assert_eq!(effective.search_paths, vec![PathBuf::from("/opt/blas")]);
        assert_eq!(effective.entry_symbol.as_deref(), Some("cblas_sgemm"));
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let config = GateConfig::default();
        assert_eq!(config.with_module_override(Some(""), Some(" ")), config);
    }

    #[test]
    fn module_spec_carries_paths_and_symbol() {
        let config = GateConfig {
            module: "mkl_rt".into(),
            search_paths: vec![PathBuf::from("/opt/intel/lib")],
            entry_symbol: Some("cblas_dgemm".into()),
            prefer: Preference::Auto,
        };

        let spec = config.module_spec();
        assert_eq!(spec.name, "mkl_rt");
        assert_eq!(spec.search_paths, vec![PathBuf::from("/opt/intel/lib")]);
        assert_eq!(spec.entry_symbol.as_deref(), Some("cblas_dgemm"));
    }
}

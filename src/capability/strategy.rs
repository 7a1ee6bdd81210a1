//! Choosing how a cursor materializes result sets.
//!
//! A cursor asks for [`select_strategy`] once it knows the caller's
//! preference. Columnar output needs the acceleration module; rows always
//! work.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::provider::CapabilityProvider;
use crate::error::{GateError, Result};

/// How the caller wants results materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    /// Columnar when the module is available, rows otherwise.
    #[default]
    Auto,
    /// Columnar or fail.
    Columnar,
    /// Rows, without probing.
    Rows,
}

impl FromStr for Preference {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "columnar" => Ok(Self::Columnar),
            "rows" => Ok(Self::Rows),
            _ => Err(GateError::InvalidPreference {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Columnar => "columnar",
            Self::Rows => "rows",
        })
    }
}

/// The data representation a cursor hands back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterializationStrategy {
    /// Array-backed columns through the acceleration module.
    Columnar,
    /// Baseline row-by-row values.
    Rows,
}

impl fmt::Display for MaterializationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Columnar => "columnar",
            Self::Rows => "rows",
        })
    }
}

/// Pick a strategy for `preference` given what `provider` reports.
///
/// Fails only when columnar output is demanded and unavailable.
pub fn select_strategy(
    preference: Preference,
    provider: &dyn CapabilityProvider,
) -> Result<MaterializationStrategy> {
    let strategy = match preference {
        Preference::Rows => MaterializationStrategy::Rows,
        Preference::Auto if provider.is_available() => MaterializationStrategy::Columnar,
        Preference::Auto => MaterializationStrategy::Rows,
        Preference::Columnar if provider.is_available() => MaterializationStrategy::Columnar,
        Preference::Columnar => {
            return Err(GateError::AccelerationRequired {
                module: provider.module().to_string(),
            })
        }
    };

    tracing::debug!(%preference, %strategy, "selected materialization strategy");
    Ok(strategy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::provider::FixedProvider;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingProvider(AtomicUsize);

    impl CapabilityProvider for CountingProvider {
        fn is_available(&self) -> bool {
            self.0.fetch_add(1, Ordering::SeqCst);
            true
        }

        fn module(&self) -> &str {
            "openblas"
        }
    }

    #[test]
    fn auto_uses_columnar_when_available() {
        let provider = FixedProvider::new("openblas", true);
        assert_eq!(
            select_strategy(Preference::Auto, &provider).unwrap(),
            MaterializationStrategy::Columnar
        );
    }

    #[test]
    fn auto_falls_back_to_rows() {
        let provider = FixedProvider::new("openblas", false);
        assert_eq!(
            select_strategy(Preference::Auto, &provider).unwrap(),
            MaterializationStrategy::Rows
        );
    }

    #[test]
    fn rows_never_probes() {
        let provider = CountingProvider(AtomicUsize::new(0));
        assert_eq!(
            select_strategy(Preference::Rows, &provider).unwrap(),
            MaterializationStrategy::Rows
        );
        assert_eq!(provider.0.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn columnar_demand_without_module_fails() {
        let provider = FixedProvider::new("openblas", false);
        let err = select_strategy(Preference::Columnar, &provider).unwrap_err();
        assert!(matches!(
            err,
            GateError::AccelerationRequired { ref module } if module == "openblas"
        ));
    }

    #[test]
    fn columnar_demand_with_module_succeeds() {
        let provider = FixedProvider::new("openblas", true);
        assert_eq!(
            select_strategy(Preference::Columnar, &provider).unwrap(),
            MaterializationStrategy::Columnar
        );
    }

    #[test]
    fn preference_parses_case_insensitively() {
        assert_eq!("AUTO".parse::<Preference>().unwrap(), Preference::Auto);
        assert_eq!(" rows ".parse::<Preference>().unwrap(), Preference::Rows);
        assert_eq!(
            "Columnar".parse::<Preference>().unwrap(),
            Preference::Columnar
        );
        assert!(matches!(
            "fast".parse::<Preference>(),
            Err(GateError::InvalidPreference { .. })
        ));
    }

    #[test]
    fn display_matches_serialized_names() {
        assert_eq!(Preference::Columnar.to_string(), "columnar");
        assert_eq!(MaterializationStrategy::Rows.to_string(), "rows");
        assert_eq!(
            serde_json::to_string(&MaterializationStrategy::Columnar).unwrap(),
            "\"columnar\""
        );
    }
}

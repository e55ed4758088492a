//! Calculator configuration
//!
//! ```yaml
//! non_finite: reject
//! ```

use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What a [`Calculator`](crate::Calculator) does when a press would display
/// `Infinity`, `-Infinity` or `NaN`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NonFinitePolicy {
    /// Show the non-finite value like any other result
    #[default]
    Propagate,
    /// Refuse the press and keep the previous state
    Reject,
}

impl NonFinitePolicy {
    /// Check if non-finite results are refused
    #[must_use]
    pub const fn is_reject(self) -> bool {
        matches!(self, Self::Reject)
    }
}

/// Calculator configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalcConfig {
    /// Handling of division by zero and other non-finite results
    pub non_finite: NonFinitePolicy,
}

impl CalcConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the non-finite policy
    #[must_use]
    pub const fn with_non_finite(mut self, policy: NonFinitePolicy) -> Self {
        self.non_finite = policy;
        self
    }

    /// Parses YAML configuration
    pub fn from_yaml_str(yaml: &str) -> CalcResult<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| CalcError::config(e.to_string()))
    }

    /// Loads YAML configuration from a file
    pub fn load(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| CalcError::config(format!("{}: {e}", path.display())))?;
        Self::from_yaml_str(&text)
    }
}

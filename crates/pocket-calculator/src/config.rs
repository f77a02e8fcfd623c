//! Calculator configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::{CalcError, CalcResult, DivisionPolicy};

/// Session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// What a division by zero produces
    pub division_policy: DivisionPolicy,
}

impl CalculatorConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the division policy
    #[must_use]
    pub const fn with_division_policy(mut self, policy: DivisionPolicy) -> Self {
        self.division_policy = policy;
        self
    }

    /// Parses a configuration from JSON
    pub fn from_json(json: &str) -> CalcResult<Self> {
        serde_json::from_str(json).map_err(|e| CalcError::Config(e.to_string()))
    }

    /// Loads a configuration from a JSON file
    pub fn load(path: &Path) -> CalcResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| CalcError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }
}

use serde::{Deserialize, Serialize};

use crate::checker::{DEFAULT_EXPECTED_LISTENERS, Severity};

/// Minimum finding severity that makes `check` exit non-zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailLevel {
    /// Fail only on critical findings.
    #[default]
    Critical,
    /// Fail on warnings and critical findings.
    Warning,
    /// Fail on any finding.
    Info,
    /// Never fail because of findings.
    Never,
}

impl FailLevel {
    /// True when a finding of `severity` should fail the run.
    #[must_use]
    pub fn triggered_by(self, severity: Severity) -> bool {
        match self {
            Self::Critical => severity.at_least(Severity::Critical),
            Self::Warning => severity.at_least(Severity::Warning),
            Self::Info => severity.at_least(Severity::Info),
            Self::Never => false,
        }
    }
}

/// Tool configuration, loaded from `.icecast-guard.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Listener count assumed when `--expected-listeners` is not given.
    #[serde(default = "default_expected_listeners")]
    pub expected_listeners: u64,

    /// Severity at which `check` exits non-zero.
    #[serde(default)]
    pub fail_on: FailLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expected_listeners: default_expected_listeners(),
            fail_on: FailLevel::default(),
        }
    }
}

impl Config {
    /// Validates semantic constraints the TOML schema cannot express.
    ///
    /// # Errors
    /// Returns a `Config` error for out-of-range values.
    pub fn validate(&self) -> crate::Result<()> {
        if self.expected_listeners == 0 {
            return Err(crate::IcecastGuardError::Config(
                "expected_listeners must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

const fn default_expected_listeners() -> u64 {
    DEFAULT_EXPECTED_LISTENERS
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;

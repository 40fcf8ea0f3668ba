use std::fmt;

use serde::Serialize;

/// Severity grade of a finding. Ordinal for display grouping only; there
/// is no numeric weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    /// True when `self` is at least as severe as `level`.
    #[must_use]
    pub fn at_least(self, level: Self) -> bool {
        self <= level
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
        };
        f.write_str(label)
    }
}

/// An observed or recommended configuration value, rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum IssueValue {
    Int(i64),
    Text(String),
}

impl fmt::Display for IssueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for IssueValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for IssueValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for IssueValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A single finding produced by the checker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub severity: Severity,
    pub category: &'static str,
    pub title: String,
    pub recommendation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<IssueValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended: Option<IssueValue>,
}

impl Issue {
    pub fn new(
        severity: Severity,
        category: &'static str,
        title: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            category,
            title: title.into(),
            recommendation: recommendation.into(),
            current: None,
            recommended: None,
        }
    }

    #[must_use]
    pub fn with_current(mut self, value: impl Into<IssueValue>) -> Self {
        self.current = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_recommended(mut self, value: impl Into<IssueValue>) -> Self {
        self.recommended = Some(value.into());
        self
    }

    #[must_use]
    pub const fn is_critical(&self) -> bool {
        matches!(self.severity, Severity::Critical)
    }

    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self.severity, Severity::Warning)
    }

    #[must_use]
    pub const fn is_info(&self) -> bool {
        matches!(self.severity, Severity::Info)
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;

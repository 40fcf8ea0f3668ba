mod json;
mod markdown;
mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::checker::{Issue, Severity};
use crate::error::Result;

/// Fixed sentence returned when a report contains no findings.
pub const ALL_CLEAR: &str = "No issues found. The configuration looks healthy.";

/// Trait for formatting check results into various output formats.
pub trait OutputFormatter {
    /// Format the issue list into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, issues: &[Issue]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Stable partition of issues into severity groups, preserving the
/// engine's relative order within each group.
fn partition(issues: &[Issue]) -> (Vec<&Issue>, Vec<&Issue>, Vec<&Issue>) {
    issues.iter().fold(
        (Vec::new(), Vec::new(), Vec::new()),
        |(mut critical, mut warning, mut info), issue| {
            match issue.severity {
                Severity::Critical => critical.push(issue),
                Severity::Warning => warning.push(issue),
                Severity::Info => info.push(issue),
            }
            (critical, warning, info)
        },
    )
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

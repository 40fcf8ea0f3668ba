use serde::Serialize;

use crate::checker::Issue;
use crate::error::Result;

use super::OutputFormatter;

/// Machine-readable report for scripted consumers.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    issues: &'a [Issue],
}

#[derive(Serialize)]
struct Summary {
    total: usize,
    critical: usize,
    warnings: usize,
    info: usize,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, issues: &[Issue]) -> Result<String> {
        let summary = Summary {
            total: issues.len(),
            critical: issues.iter().filter(|i| i.is_critical()).count(),
            warnings: issues.iter().filter(|i| i.is_warning()).count(),
            info: issues.iter().filter(|i| i.is_info()).count(),
        };

        let output = JsonOutput { summary, issues };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;

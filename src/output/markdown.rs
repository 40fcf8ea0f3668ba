use std::fmt::Write;

use crate::checker::Issue;
use crate::error::Result;

use super::{ALL_CLEAR, OutputFormatter, partition};

/// Renders the report as Markdown. This is the format returned over the
/// tool-server boundary and by `--format markdown`.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    fn format_group(output: &mut String, header: &str, issues: &[&Issue]) {
        if issues.is_empty() {
            return;
        }

        let _ = writeln!(output, "## {header} ({})\n", issues.len());
        for issue in issues {
            Self::format_issue(output, issue);
        }
    }

    fn format_issue(output: &mut String, issue: &Issue) {
        let _ = writeln!(output, "### {}: {}\n", issue.category, issue.title);
        let _ = writeln!(output, "{}", issue.recommendation);
        if let Some(current) = &issue.current {
            let _ = writeln!(output, "Current: `{current}`");
        }
        if let Some(recommended) = &issue.recommended {
            let _ = writeln!(output, "Recommended: `{recommended}`");
        }
        let _ = writeln!(output);
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, issues: &[Issue]) -> Result<String> {
        if issues.is_empty() {
            return Ok(format!("{ALL_CLEAR}\n"));
        }

        let (critical, warning, info) = partition(issues);

        let mut output = String::new();
        Self::format_group(&mut output, "Critical", &critical);
        Self::format_group(&mut output, "Warnings", &warning);
        Self::format_group(&mut output, "Informational", &info);

        Ok(output)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;

use std::fmt::Write;

use crate::checker::{Issue, Severity};
use crate::error::Result;

use super::{ALL_CLEAR, OutputFormatter, partition};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn severity_icon(severity: Severity) -> &'static str {
        match severity {
            Severity::Critical => "✗",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
        }
    }

    const fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Critical => ansi::RED,
            Severity::Warning => ansi::YELLOW,
            Severity::Info => ansi::CYAN,
        }
    }

    fn colorize(&self, text: &str, severity: Severity) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{}{text}{}", Self::severity_color(severity), ansi::RESET)
    }

    fn format_group(&self, output: &mut String, header: &str, issues: &[&Issue]) {
        if issues.is_empty() {
            return;
        }

        let severity = issues[0].severity;
        let heading = format!("{header} ({})", issues.len());
        let _ = writeln!(output, "{}", self.colorize(&heading, severity));

        for issue in issues {
            self.format_issue(output, issue);
        }
    }

    fn format_issue(&self, output: &mut String, issue: &Issue) {
        let icon = Self::severity_icon(issue.severity);
        let heading = format!("{icon} {}: {}", issue.category, issue.title);
        let _ = writeln!(output, "{}", self.colorize(&heading, issue.severity));
        let _ = writeln!(output, "   {}", issue.recommendation);
        if let Some(current) = &issue.current {
            let _ = writeln!(output, "   Current: {current}");
        }
        if let Some(recommended) = &issue.recommended {
            let _ = writeln!(output, "   Recommended: {recommended}");
        }
        let _ = writeln!(output);
    }

    fn format_summary(&self, issues: &[Issue]) -> String {
        let critical = issues.iter().filter(|i| i.is_critical()).count();
        let warnings = issues.iter().filter(|i| i.is_warning()).count();
        let info = issues.iter().filter(|i| i.is_info()).count();

        let critical_str = self.colorize(&critical.to_string(), Severity::Critical);
        let warnings_str = self.colorize(&warnings.to_string(), Severity::Warning);
        let info_str = self.colorize(&info.to_string(), Severity::Info);

        format!(
            "Summary: {} issue(s) found, {critical_str} critical, {warnings_str} warnings, {info_str} informational",
            issues.len()
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, issues: &[Issue]) -> Result<String> {
        if issues.is_empty() {
            return Ok(format!("{ALL_CLEAR}\n"));
        }

        let (critical, warning, info) = partition(issues);

        let mut output = String::new();
        self.format_group(&mut output, "CRITICAL", &critical);
        self.format_group(&mut output, "WARNING", &warning);
        self.format_group(&mut output, "INFO", &info);

        let _ = writeln!(output, "{}", self.format_summary(issues));

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

//! The two tools exposed over the serve boundary, and their dispatch.

use std::path::Path;

use serde_json::{Value, json};

use crate::catalog;
use crate::checker::{ConfigChecker, DEFAULT_EXPECTED_LISTENERS};
use crate::document::{IcecastConfig, parse_document};
use crate::error::IcecastGuardError;
use crate::output::{MarkdownFormatter, OutputFormatter};

use super::protocol::{ToolCallResult, ToolDefinition};

pub const ANALYZE_TOOL: &str = "analyze_icecast_config";
pub const BEST_PRACTICES_TOOL: &str = "get_icecast_best_practices";

/// Tool definitions advertised by `tools/list`.
#[must_use]
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: ANALYZE_TOOL,
            description: "Analyze an Icecast XML configuration file and report \
                          severity-graded findings with remediation advice",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "configPath": {
                        "type": "string",
                        "description": "Absolute path to the Icecast XML configuration file"
                    },
                    "expectedListeners": {
                        "type": "number",
                        "description": "Expected number of concurrent listeners (default: 100)"
                    }
                },
                "required": ["configPath"]
            }),
        },
        ToolDefinition {
            name: BEST_PRACTICES_TOOL,
            description: "Get Icecast best-practice configuration advice for a \
                          deployment size",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "useCase": {
                        "type": "string",
                        "enum": ["small", "medium", "large"],
                        "description": "Deployment size the advice is written for"
                    }
                },
                "required": ["useCase"]
            }),
        },
    ]
}

/// Dispatches a `tools/call` by name. Unknown names become error-flagged
/// responses, never protocol failures.
#[must_use]
pub fn call(name: &str, arguments: &Value) -> ToolCallResult {
    match name {
        ANALYZE_TOOL => analyze_config(arguments),
        BEST_PRACTICES_TOOL => best_practices(arguments),
        other => ToolCallResult::error(format!("Unknown tool: {other}")),
    }
}

/// Reads, parses, checks, and formats a configuration file. Every
/// failure is converted to an error-flagged text response.
fn analyze_config(arguments: &Value) -> ToolCallResult {
    let Some(config_path) = arguments.get("configPath").and_then(Value::as_str) else {
        return ToolCallResult::error(
            "Missing required argument: configPath",
        );
    };
    let expected_listeners = arguments
        .get("expectedListeners")
        .and_then(Value::as_u64)
        .unwrap_or(DEFAULT_EXPECTED_LISTENERS);

    match run_analysis(Path::new(config_path), expected_listeners) {
        Ok(report) => ToolCallResult::text(report),
        Err(err) => ToolCallResult::error(err.to_string()),
    }
}

fn run_analysis(
    path: &Path,
    expected_listeners: u64,
) -> crate::Result<String> {
    let content =
        std::fs::read_to_string(path).map_err(|source| IcecastGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
    let tree = parse_document(&content)?;
    let config = IcecastConfig::from_value(&tree);

    let issues = ConfigChecker::new()
        .with_expected_listeners(expected_listeners)
        .check(&config);
    let report = MarkdownFormatter.format(&issues)?;

    Ok(format!(
        "# Icecast Configuration Analysis\n\n\
         Config: `{}`\n\
         Expected listeners: {expected_listeners}\n\n\
         {report}",
        path.display()
    ))
}

/// Catalog passthrough. Unknown keys are a successful response carrying
/// the fixed invalid-use-case text, not an error flag.
fn best_practices(arguments: &Value) -> ToolCallResult {
    let use_case = arguments
        .get("useCase")
        .and_then(Value::as_str)
        .unwrap_or_default();
    ToolCallResult::text(catalog::lookup_key(use_case))
}

#[cfg(test)]
#[path = "tools_tests.rs"]
mod tests;

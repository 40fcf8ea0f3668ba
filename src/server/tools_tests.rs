use std::io::Write;

use serde_json::json;
use tempfile::NamedTempFile;

use super::*;

fn write_fixture(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn result_text(result: &ToolCallResult) -> &str {
    &result.content[0].text
}

#[test]
fn definitions_advertise_both_tools() {
    let defs = definitions();
    let names: Vec<&str> = defs.iter().map(|d| d.name).collect();
    assert_eq!(names, vec![ANALYZE_TOOL, BEST_PRACTICES_TOOL]);

    for def in &defs {
        assert_eq!(def.input_schema["type"], "object");
        assert!(def.input_schema["required"].is_array());
    }
}

#[test]
fn unknown_tool_is_error_flagged() {
    let result = call("restart_server", &json!({}));
    assert!(result.is_error);
    assert!(result_text(&result).contains("Unknown tool"));
}

#[test]
fn analyze_requires_config_path() {
    let result = call(ANALYZE_TOOL, &json!({}));
    assert!(result.is_error);
    assert!(result_text(&result).contains("configPath"));
}

#[test]
fn analyze_missing_file_is_error_flagged() {
    let result = call(
        ANALYZE_TOOL,
        &json!({"configPath": "/nonexistent/icecast.xml"}),
    );
    assert!(result.is_error);
    assert!(result_text(&result).contains("Failed to read file"));
}

#[test]
fn analyze_malformed_xml_is_error_flagged() {
    let file = write_fixture("<icecast><limits>");
    let result = call(
        ANALYZE_TOOL,
        &json!({"configPath": file.path().to_str().unwrap()}),
    );
    assert!(result.is_error);
    assert!(result_text(&result).contains("XML parse error"));
}

#[test]
fn analyze_wraps_report_in_header() {
    let file = write_fixture("<icecast></icecast>");
    let result = call(
        ANALYZE_TOOL,
        &json!({"configPath": file.path().to_str().unwrap(), "expectedListeners": 250}),
    );

    assert!(!result.is_error);
    let text = result_text(&result);
    assert!(text.contains("# Icecast Configuration Analysis"));
    assert!(text.contains(file.path().to_str().unwrap()));
    assert!(text.contains("Expected listeners: 250"));
    assert!(text.contains("No authentication configured"));
}

#[test]
fn analyze_defaults_expected_listeners() {
    let file = write_fixture("<icecast></icecast>");
    let result = call(
        ANALYZE_TOOL,
        &json!({"configPath": file.path().to_str().unwrap()}),
    );
    assert!(result_text(&result).contains("Expected listeners: 100"));
}

#[test]
fn analyze_healthy_config_reports_all_clear() {
    let file = write_fixture(
        "<icecast>\
         <limits><clients>500</clients></limits>\
         <authentication>\
         <source-password>a</source-password>\
         <admin-user>ops</admin-user>\
         <admin-password>b</admin-password>\
         <relay-password>c</relay-password>\
         </authentication>\
         <hostname>stream.example.org</hostname>\
         <mount><mount-name>/live</mount-name></mount>\
         <mount><mount-name>/backup</mount-name></mount>\
         </icecast>",
    );
    let result = call(
        ANALYZE_TOOL,
        &json!({"configPath": file.path().to_str().unwrap()}),
    );

    assert!(!result.is_error);
    assert!(result_text(&result).contains("No issues found"));
}

#[test]
fn best_practices_returns_profile_text() {
    let result = call(BEST_PRACTICES_TOOL, &json!({"useCase": "large"}));
    assert!(!result.is_error);
    assert!(result_text(&result).contains("Best Practices for Large Streams"));
}

#[test]
fn best_practices_invalid_key_is_not_error_flagged() {
    let result = call(BEST_PRACTICES_TOOL, &json!({"useCase": "xlarge"}));
    assert!(!result.is_error);
    assert!(result_text(&result).contains("Invalid use case"));
}

#[test]
fn best_practices_missing_argument_gets_invalid_message() {
    let result = call(BEST_PRACTICES_TOOL, &json!({}));
    assert!(!result.is_error);
    assert!(result_text(&result).contains("Invalid use case"));
}

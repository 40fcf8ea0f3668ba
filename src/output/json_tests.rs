use crate::checker::{Issue, Severity};

use super::*;

#[test]
fn json_output_carries_summary_and_issues() {
    let issues = vec![
        Issue::new(Severity::Critical, "Security", "no auth", "add auth"),
        Issue::new(Severity::Warning, "Capacity", "low limit", "raise it").with_recommended(128),
    ];

    let output = JsonFormatter.format(&issues).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["total"], 2);
    assert_eq!(parsed["summary"]["critical"], 1);
    assert_eq!(parsed["summary"]["warnings"], 1);
    assert_eq!(parsed["summary"]["info"], 0);
    assert_eq!(parsed["issues"][0]["severity"], "critical");
    assert_eq!(parsed["issues"][1]["recommended"], 128);
}

#[test]
fn empty_issue_list_is_valid_json() {
    let output = JsonFormatter.format(&[]).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["total"], 0);
    assert_eq!(parsed["issues"].as_array().unwrap().len(), 0);
}

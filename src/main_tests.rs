use icecast_guard::checker::{Issue, Severity};
use icecast_guard::output::OutputFormat;

use super::*;

#[test]
fn color_choice_maps_to_color_mode() {
    assert_eq!(color_choice_to_mode(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(color_choice_to_mode(ColorChoice::Always), ColorMode::Always);
    assert_eq!(color_choice_to_mode(ColorChoice::Never), ColorMode::Never);
}

#[test]
fn fail_on_maps_to_fail_level() {
    assert_eq!(fail_on_to_level(FailOn::Critical), FailLevel::Critical);
    assert_eq!(fail_on_to_level(FailOn::Warning), FailLevel::Warning);
    assert_eq!(fail_on_to_level(FailOn::Info), FailLevel::Info);
    assert_eq!(fail_on_to_level(FailOn::Never), FailLevel::Never);
}

#[test]
fn cli_overrides_replace_config_values() {
    let mut config = Config::default();
    let args = CheckArgs {
        path: "icecast.xml".into(),
        config: None,
        expected_listeners: Some(900),
        format: OutputFormat::Text,
        output: None,
        fail_on: Some(FailOn::Never),
    };

    apply_cli_overrides(&mut config, &args);

    assert_eq!(config.expected_listeners, 900);
    assert_eq!(config.fail_on, FailLevel::Never);
}

#[test]
fn cli_overrides_keep_config_when_absent() {
    let mut config = Config {
        expected_listeners: 300,
        fail_on: FailLevel::Warning,
    };
    let args = CheckArgs {
        path: "icecast.xml".into(),
        config: None,
        expected_listeners: None,
        format: OutputFormat::Text,
        output: None,
        fail_on: None,
    };

    apply_cli_overrides(&mut config, &args);

    assert_eq!(config.expected_listeners, 300);
    assert_eq!(config.fail_on, FailLevel::Warning);
}

#[test]
fn format_report_honors_requested_format() {
    let issues = vec![Issue::new(Severity::Warning, "Capacity", "low", "raise")];

    let text = format_report(OutputFormat::Text, &issues, ColorMode::Never).unwrap();
    assert!(text.contains("WARNING (1)"));

    let markdown = format_report(OutputFormat::Markdown, &issues, ColorMode::Never).unwrap();
    assert!(markdown.contains("## Warnings (1)"));

    let json = format_report(OutputFormat::Json, &issues, ColorMode::Never).unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(&json).is_ok());
}

#[test]
fn config_template_round_trips_through_the_loader() {
    let config: Config = toml::from_str(config_template()).unwrap();
    assert_eq!(config, Config::default());
}

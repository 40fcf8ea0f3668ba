use std::fs;
use std::path::Path;

use clap::Parser;

use icecast_guard::catalog;
use icecast_guard::checker::{ConfigChecker, Issue};
use icecast_guard::cli::{
    BestPracticesArgs, CheckArgs, Cli, ColorChoice, Commands, FailOn, InitArgs,
};
use icecast_guard::config::{Config, ConfigLoader, FailLevel, FileConfigLoader};
use icecast_guard::document::{IcecastConfig, parse_document};
use icecast_guard::output::{
    ColorMode, JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use icecast_guard::server::ToolServer;
use icecast_guard::{EXIT_CONFIG_ERROR, EXIT_ISSUES_FOUND, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

const fn fail_on_to_level(fail_on: FailOn) -> FailLevel {
    match fail_on {
        FailOn::Critical => FailLevel::Critical,
        FailOn::Warning => FailLevel::Warning,
        FailOn::Info => FailLevel::Info,
        FailOn::Never => FailLevel::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::BestPractices(args) => run_best_practices(args),
        Commands::Serve => run_serve(&cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> icecast_guard::Result<i32> {
    // 1. Load tool configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);

    // 3. Read and parse the Icecast document
    let content = fs::read_to_string(&args.path).map_err(|source| {
        icecast_guard::IcecastGuardError::FileRead {
            path: args.path.clone(),
            source,
        }
    })?;
    let tree = parse_document(&content)?;
    let document = IcecastConfig::from_value(&tree);

    if cli.verbose >= 1 {
        eprintln!(
            "Analyzing {} (expected listeners: {})",
            args.path.display(),
            config.expected_listeners
        );
    }

    // 4. Evaluate the rule set
    let issues = ConfigChecker::new()
        .with_expected_listeners(config.expected_listeners)
        .check(&document);

    // 5. Format and write the report
    let color_mode = color_choice_to_mode(cli.color);
    let report = format_report(args.format, &issues, color_mode)?;
    write_output(args.output.as_deref(), &report, cli.quiet)?;

    // 6. Determine exit code
    let failed = issues
        .iter()
        .any(|issue| config.fail_on.triggered_by(issue.severity));
    if failed {
        Ok(EXIT_ISSUES_FOUND)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> icecast_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(expected_listeners) = args.expected_listeners {
        config.expected_listeners = expected_listeners;
    }

    if let Some(fail_on) = args.fail_on {
        config.fail_on = fail_on_to_level(fail_on);
    }
}

fn format_report(
    format: OutputFormat,
    issues: &[Issue],
    color_mode: ColorMode,
) -> icecast_guard::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_mode).format(issues),
        OutputFormat::Markdown => MarkdownFormatter.format(issues),
        OutputFormat::Json => JsonFormatter.format(issues),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> icecast_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn run_best_practices(args: &BestPracticesArgs) -> i32 {
    match args.use_case.parse::<catalog::UseCase>() {
        Ok(use_case) => {
            print!("{}", catalog::lookup(use_case));
            EXIT_SUCCESS
        }
        Err(_) => {
            println!("{}", catalog::INVALID_USE_CASE);
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_serve(cli: &Cli) -> i32 {
    match ToolServer::new(cli.verbose >= 1).run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> icecast_guard::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(icecast_guard::IcecastGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

fn config_template() -> &'static str {
    r#"# icecast-guard configuration file

# Listener count assumed when --expected-listeners is not given (default: 100)
expected_listeners = 100

# Severity that causes exit code 1 (default: critical)
# One of: critical, warning, info, never
fail_on = "critical"
"#
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

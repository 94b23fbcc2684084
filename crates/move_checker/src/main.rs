//! Move checker CLI
//!
//! Load a scenario, ask the validator about each query and print a report.

use anyhow::{Context, Result, bail};
use move_checker::{ReportFormat, Scenario};
use std::env;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Move legality scenario checker");
    println!();
    println!("Usage:");
    println!("  move_checker run <scenario.toml> [--format text|json]");
    println!("  move_checker help");
    println!();
    println!("Logging goes to stderr; set RUST_LOG to override the scenario's log_filter.");
    println!();
    println!("Examples:");
    println!("  move_checker run crates/move_checker/scenarios/sliding_paths.toml");
    println!("  RUST_LOG=board_core=trace move_checker run opening.toml --format json");
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns whether every expectation in the scenario held.
fn run(args: &[String]) -> Result<bool> {
    let Some(path) = args.first() else {
        bail!("run requires a scenario file");
    };

    let mut format_override = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--format" | "-f" => {
                let value = args.get(i + 1).context("--format needs a value")?;
                format_override = Some(value.parse::<ReportFormat>()?);
                i += 1;
            }
            other => bail!("unexpected argument: {other}"),
        }
        i += 1;
    }

    let scenario = Scenario::load(Path::new(path))
        .with_context(|| format!("failed to load scenario {path}"))?;

    init_logging(&scenario.settings.log_filter);
    info!(
        scenario = %scenario.name,
        pieces = scenario.pieces.len(),
        queries = scenario.queries.len(),
        "scenario loaded"
    );

    let report = scenario.run();
    match format_override.unwrap_or(scenario.settings.format) {
        ReportFormat::Text => print!("{}", report.to_text()),
        ReportFormat::Json => {
            let json = report.to_json().context("failed to serialize report")?;
            println!("{json}");
        }
    }

    info!(
        mismatches = report.summary.mismatches,
        checked = report.summary.checked,
        "scenario finished"
    );
    Ok(report.passed())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(2);
    }

    match args[1].as_str() {
        "run" => match run(&args[2..]) {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::from(1),
            Err(e) => {
                eprintln!("Error: {e:#}");
                ExitCode::from(2)
            }
        },
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            ExitCode::from(2)
        }
    }
}

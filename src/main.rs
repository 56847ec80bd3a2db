// src/main.rs

//! The command-line entry point: evaluates a JSONPath expression against a
//! document and prints every match with its exact source location.

use anyhow::{Context, Result};
use jsonloc::config::Config;
use jsonloc::{VERSION, evaluate_json_path};
use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{filter::EnvFilter, prelude::*};

const DEFAULT_CONFIG_PATH: &str = "jsonloc.toml";

const USAGE: &str = "Usage: jsonloc [--config <file>] [--compact] <expression> <document-file | ->";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    // Handle the --version flag.
    if args.iter().any(|arg| arg == "--version") {
        println!("jsonloc version {VERSION}");
        return Ok(());
    }

    // An explicit --config path must exist; the default one is optional.
    let explicit_config = args
        .iter()
        .position(|arg| arg == "--config")
        .map(|i| args.get(i + 1).map(|s| s.as_str()));
    let mut config = match explicit_config {
        Some(Some(path)) => load_config_or_exit(path),
        Some(None) => {
            eprintln!("--config flag requires a value");
            std::process::exit(1);
        }
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config_or_exit(DEFAULT_CONFIG_PATH),
        None => Config::default(),
    };

    if args.iter().any(|arg| arg == "--compact") {
        config.output.pretty = false;
    }

    let positional = positional_args(&args);
    let [expression, document_path] = positional.as_slice() else {
        eprintln!("{USAGE}");
        std::process::exit(1);
    };

    // Setup logging. Get the level from the env var or the config.
    // Logs go to stderr so stdout carries only the JSON results.
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone());
    tracing_subscriber::registry()
        .with(EnvFilter::new(log_level))
        .with(
            tracing_subscriber::fmt::layer()
                .compact() // Use the compact, single-line format.
                .with_ansi(true) // Enable ANSI color codes for log levels.
                .with_writer(io::stderr),
        )
        .init();

    if let Err(e) = run(&config, expression, document_path) {
        error!("jsonloc failed: {:#}", e);
        return Err(e);
    }
    Ok(())
}

fn load_config_or_exit(path: &str) -> Config {
    match Config::from_file(path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration from \"{path}\": {e:#}");
            std::process::exit(1);
        }
    }
}

/// Arguments that are neither flags nor flag values.
fn positional_args(args: &[String]) -> Vec<&str> {
    let mut positional = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                iter.next();
            }
            "--compact" => {}
            other => positional.push(other),
        }
    }
    positional
}

fn run(config: &Config, expression: &str, document_path: &str) -> Result<()> {
    let input = if document_path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read document from stdin")?;
        buf
    } else {
        fs::read_to_string(document_path)
            .with_context(|| format!("Failed to read document at '{document_path}'"))?
    };

    let results = evaluate_json_path(expression, &input, &config.resolver)
        .with_context(|| format!("Failed to evaluate {expression:?}"))?;
    info!(
        "Resolved {} matches for {:?} in {} bytes",
        results.len(),
        expression,
        input.len()
    );

    let rendered = if config.output.pretty {
        serde_json::to_string_pretty(&results)?
    } else {
        serde_json::to_string(&results)?
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}

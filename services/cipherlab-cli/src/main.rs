//! CipherLab CLI - the command-line dispatch surface.
//!
//! Maps an algorithm identifier to an engine kernel and prints the result
//! as JSON. This binary owns everything the engine refuses to: resolving
//! unknown identifiers to a not-found response, reading parameter
//! documents, config loading, logging setup, and process exit codes.

use anyhow::Context;
use cipherlab_core::logging;
use cipherlab_engine::{run, Algorithm, Params};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::process;

/// CLI configuration file (TOML). Every field has a default so the file
/// itself is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct Config {
    log_level: String,
    pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            pretty: false,
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            toml::from_str(&raw)
                .with_context(|| format!("failed to parse config {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

fn load_params(inline: Option<&str>, file: Option<&PathBuf>) -> anyhow::Result<Params> {
    let raw = match (inline, file) {
        (Some(_), Some(_)) => {
            anyhow::bail!("--params and --params-file are mutually exclusive")
        }
        (Some(inline), None) => inline.to_string(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read params {}", path.display()))?,
        (None, None) => "{}".to_string(),
    };
    serde_json::from_str(&raw).context("params must be a JSON object")
}

fn render(value: &impl serde::Serialize, pretty: bool) -> anyhow::Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}

/// Runs one algorithm and prints the wire outcome.
///
/// Kernel failures are part of the contract and exit 0 like any other
/// outcome; only an unknown identifier exits nonzero.
fn cmd_run(id: &str, params: &Params, pretty: bool) -> anyhow::Result<()> {
    let Some(algorithm) = Algorithm::from_id(id) else {
        let not_found = serde_json::json!({ "error": "Unknown algorithm." });
        println!("{}", render(&not_found, pretty)?);
        process::exit(2);
    };
    let outcome = run(algorithm, params);
    println!("{}", render(&outcome, pretty)?);
    Ok(())
}

fn print_usage() {
    println!("CipherLab CLI - run cipher demos from the command line");
    println!();
    println!("USAGE:");
    println!("    cipherlab-cli run <algorithm> [--params <json>] [--params-file <path>] [--pretty] [--config <path>]");
    println!("    cipherlab-cli list");
    println!();
    println!("COMMANDS:");
    println!("    run      Run one algorithm over a JSON parameter document");
    println!("    list     Print the known algorithm identifiers");
    println!();
    println!("EXAMPLES:");
    println!("    cipherlab-cli run caesar --params '{{\"text\": \"HELLO\", \"shift\": 3}}'");
    println!("    cipherlab-cli run rsa --params-file rsa.json --pretty");
    println!("    cipherlab-cli list");
}

fn run_cli() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        print_usage();
        anyhow::bail!("missing command");
    };
    let rest = &args[1..];

    let mut config_path: Option<PathBuf> = None;
    let mut params_inline: Option<String> = None;
    let mut params_file: Option<PathBuf> = None;
    let mut pretty_flag = false;
    let mut positional: Vec<&str> = Vec::new();

    let mut i = 0;
    while i < rest.len() {
        match rest[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                if i < rest.len() {
                    config_path = Some(PathBuf::from(&rest[i]));
                }
            }
            "--params" | "-p" => {
                i += 1;
                if i < rest.len() {
                    params_inline = Some(rest[i].clone());
                }
            }
            "--params-file" | "-f" => {
                i += 1;
                if i < rest.len() {
                    params_file = Some(PathBuf::from(&rest[i]));
                }
            }
            "--pretty" => pretty_flag = true,
            other => positional.push(other),
        }
        i += 1;
    }

    let config = load_config(config_path.as_ref())?;
    logging::init_with_level(&config.log_level);
    tracing::debug!(?config, "configuration loaded");
    let pretty = pretty_flag || config.pretty;

    match command.as_str() {
        "list" => {
            for algorithm in Algorithm::ALL {
                println!("{}", algorithm.id());
            }
            Ok(())
        }
        "run" => {
            let Some(id) = positional.first() else {
                print_usage();
                anyhow::bail!("run requires an algorithm identifier");
            };
            let params = load_params(params_inline.as_deref(), params_file.as_ref())?;
            cmd_run(id, &params, pretty)
        }
        other => {
            print_usage();
            anyhow::bail!("unknown command: {other}")
        }
    }
}

fn main() {
    if let Err(e) = run_cli() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

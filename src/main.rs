//! Reload Gate CLI
//!
//! Entry point for the `reload-gate` command-line tool.

use clap::{Parser, Subcommand};
use reload_gate::{
    extract_summary, Action, CommandReloader, EffectiveGateConfig, Gate, GateOverrides, Reloader,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

/// Default config file path, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "reload-gate.toml";

/// Stable exit codes.
const EXIT_SUCCESS: i32 = 0;
const EXIT_MISCONFIGURED: i32 = 10;
const EXIT_CONFIG_ERROR: i32 = 11;
const EXIT_RELOAD_FAILED: i32 = 50;
const EXIT_IO_ERROR: i32 = 70;

#[derive(Parser)]
#[command(name = "reload-gate")]
#[command(about = "Development-time code reload gate", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the reloader once and report the outcome
    Check {
        /// Path to config file (default: reload-gate.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Reload target (overrides config)
        #[arg(long)]
        target: Option<String>,

        /// Reload command argv (overrides config)
        #[arg(long, num_args = 1.., value_name = "ARGV")]
        command: Option<Vec<String>>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Run the reloader and write the diagnostic page on failure
    Render {
        /// Path to config file (default: reload-gate.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Reload target (overrides config)
        #[arg(long)]
        target: Option<String>,

        /// Reload command argv (overrides config)
        #[arg(long, num_args = 1.., value_name = "ARGV")]
        command: Option<Vec<String>>,

        /// Write the page to FILE instead of stdout
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },

    /// Print the effective configuration with source provenance
    Config {
        /// Path to config file (default: reload-gate.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Check {
            config,
            target,
            command,
            json,
        } => run_check(config, target, command, json),
        Commands::Render {
            config,
            target,
            command,
            out,
        } => run_render(config, target, command, out),
        Commands::Config { config, json } => run_config(config, json),
    };

    process::exit(code);
}

/// Resolve the effective configuration from file and CLI layers.
///
/// An explicitly given config path must exist; the default path is optional.
fn resolve_config(
    config_path: Option<PathBuf>,
    target: Option<String>,
    command: Option<Vec<String>>,
) -> Result<EffectiveGateConfig, String> {
    let explicit = config_path.is_some();
    let path = config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    if explicit && !path.exists() {
        return Err(format!("config file not found: {}", path.display()));
    }

    let overrides = GateOverrides { target, command };
    EffectiveGateConfig::build(Some(path.as_path()), overrides).map_err(|err| err.to_string())
}

fn run_check(
    config: Option<PathBuf>,
    target: Option<String>,
    command: Option<Vec<String>>,
    json: bool,
) -> i32 {
    let effective = match resolve_config(config, target, command) {
        Ok(effective) => effective,
        Err(err) => {
            eprintln!("error: {}", err);
            return EXIT_CONFIG_ERROR;
        }
    };

    let target = match effective.config.target.clone() {
        Some(target) => target,
        None => {
            eprintln!("reload gate misconfigured: a reload target must be configured");
            return EXIT_MISCONFIGURED;
        }
    };

    let reloader = CommandReloader::new(effective.config.command.clone());
    eprintln!("Reloading {}...", target);

    match reloader.reload(&target) {
        Ok(report) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&report).unwrap());
            } else {
                eprintln!("Reload succeeded in {} ms", report.duration_ms);
            }
            EXIT_SUCCESS
        }
        Err(err) => {
            let summary = extract_summary(&err.output);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary).unwrap());
            } else {
                eprintln!("Reload failed: ({}) {}", summary.error_kind, summary.headline);
                eprintln!("{}", err.output.trim_end());
            }
            EXIT_RELOAD_FAILED
        }
    }
}

fn run_render(
    config: Option<PathBuf>,
    target: Option<String>,
    command: Option<Vec<String>>,
    out: Option<PathBuf>,
) -> i32 {
    let effective = match resolve_config(config, target, command) {
        Ok(effective) => effective,
        Err(err) => {
            eprintln!("error: {}", err);
            return EXIT_CONFIG_ERROR;
        }
    };

    if effective.config.target.is_none() {
        eprintln!("reload gate misconfigured: a reload target must be configured");
        return EXIT_MISCONFIGURED;
    }

    let gate = Gate::with_default_reloader(effective.config);
    match gate.check() {
        Action::PassThrough => {
            eprintln!("Reload succeeded; no diagnostic page to render");
            EXIT_SUCCESS
        }
        Action::Terminate(response) => {
            match out {
                Some(path) => {
                    if let Err(err) = write_page(&path, &response.body) {
                        eprintln!("error: {}", err);
                        return EXIT_IO_ERROR;
                    }
                    eprintln!("Diagnostic page written to {}", path.display());
                }
                None => {
                    println!("{}", response.body);
                }
            }
            EXIT_RELOAD_FAILED
        }
    }
}

fn write_page(path: &Path, body: &str) -> Result<(), String> {
    fs::write(path, body).map_err(|err| format!("failed to write {}: {}", path.display(), err))
}

fn run_config(config: Option<PathBuf>, json: bool) -> i32 {
    let effective = match resolve_config(config, None, None) {
        Ok(effective) => effective,
        Err(err) => {
            eprintln!("error: {}", err);
            return EXIT_CONFIG_ERROR;
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&effective).unwrap());
        return EXIT_SUCCESS;
    }

    println!(
        "target:  {}",
        effective.config.target.as_deref().unwrap_or("(unset)")
    );
    println!("command: {}", effective.config.command.join(" "));
    println!("sources:");
    for source in &effective.sources {
        let origin = match source.origin {
            reload_gate::ConfigOrigin::Builtin => "builtin",
            reload_gate::ConfigOrigin::File => "file",
            reload_gate::ConfigOrigin::Overrides => "overrides",
        };
        match (&source.path, &source.digest) {
            (Some(path), Some(digest)) => {
                println!("  {} {} (sha256 {})", origin, path, digest)
            }
            _ => println!("  {}", origin),
        }
    }
    EXIT_SUCCESS
}

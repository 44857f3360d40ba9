// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Doctriage - a document triage service.
//!
//! This is the binary entry point: classify documents from the command line
//! or serve the triage pipeline over HTTP.

mod serve;

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use doctriage_config::DoctriageConfig;

/// Doctriage - classify, dispatch, and log inbound documents.
#[derive(Parser, Debug)]
#[command(name = "doctriage", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the triage HTTP server.
    Serve,
    /// Classify a single document and print its record as JSON.
    Classify {
        /// Document text. Reads stdin when neither this nor --file is given.
        text: Option<String>,
        /// Read the document from a file instead.
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },
    /// Print the effective configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup
    let config = match doctriage_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            doctriage_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.service.log_level);

    let result = match cli.command {
        Some(Commands::Serve) => serve::run_serve(config).await,
        Some(Commands::Classify { text, file }) => run_classify(config, text, file).await,
        Some(Commands::Config) => run_config(&config),
        None => {
            println!("doctriage: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Initialize the tracing subscriber with the configured log level.
///
/// `RUST_LOG` takes precedence over the config file when set.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the `doctriage classify` command.
///
/// Builds the pipeline from config, runs the document through it, logs the
/// record inline, and prints it as pretty JSON.
async fn run_classify(
    config: DoctriageConfig,
    text: Option<String>,
    file: Option<PathBuf>,
) -> Result<(), doctriage_core::DoctriageError> {
    let input = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path).map_err(|e| {
            doctriage_core::DoctriageError::Internal(format!(
                "failed to read {}: {e}",
                path.display()
            ))
        })?,
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).map_err(|e| {
                doctriage_core::DoctriageError::Internal(format!("failed to read stdin: {e}"))
            })?;
            buf
        }
    };

    let (router, _log) = serve::build_pipeline(&config)?;
    let record = router.process(&input).await?;

    let rendered = serde_json::to_string_pretty(&record)
        .map_err(|e| doctriage_core::DoctriageError::Internal(e.to_string()))?;
    println!("{rendered}");
    Ok(())
}

/// Runs the `doctriage config` command.
fn run_config(config: &DoctriageConfig) -> Result<(), doctriage_core::DoctriageError> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| doctriage_core::DoctriageError::Internal(e.to_string()))?;
    print!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        super::Cli::command().debug_assert();
    }

    #[test]
    fn binary_loads_config_defaults() {
        // An empty document yields the compiled defaults, independent of any
        // config files or DOCTRIAGE_* variables on the machine running tests.
        let config =
            doctriage_config::load_and_validate_str("").expect("default config should be valid");
        assert_eq!(config.service.name, "doctriage");
    }
}

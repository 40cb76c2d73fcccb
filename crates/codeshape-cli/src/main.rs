//! codeshape CLI
//!
//! Command-line interface for structural snapshot comparison

use clap::{Parser, Subcommand, ValueEnum};
use codeshape_core::logging_facility::{init, Profile};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "codeshape")]
#[command(about = "codeshape - Structural snapshot diff for OO codebases", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./codeshape.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log output format on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Human)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Human,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Write what is new or different in one snapshot relative to another
    Compare(commands::compare::CompareArgs),
    /// Count the entities in a snapshot
    Overview(commands::overview::OverviewArgs),
    /// Re-encode a snapshot and verify it decodes to the same content
    Normalize(commands::normalize::NormalizeArgs),
}

fn main() {
    let cli = Cli::parse();

    init(match cli.log_format {
        LogFormat::Human => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let result = codeshape_store::load_config(cli.config.as_deref())
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
        .and_then(|config| match cli.command {
            Commands::Compare(args) => commands::compare::execute(args, &config),
            Commands::Overview(args) => commands::overview::execute(args, &config),
            Commands::Normalize(args) => commands::normalize::execute(args, &config),
        });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

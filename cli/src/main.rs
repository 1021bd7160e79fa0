//! # compskip Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file is the entry point of the `compskip` command-line tool. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! A signature database that cannot be loaded surfaces here as an error from
//! the command handler; it is logged and the process exits with status 1.
//!
//! ## Examples
//!
//! ```bash
//! # Which of these are already compressed?
//! compskip check backup.tar.gz photo.jpg notes.txt
//!
//! # Show the registry, treating zstd as compressed and PDF as not
//! compskip --add-types application/zstd --remove-types application/pdf types
//!
//! # Trace every probe decision
//! compskip -vv check --recursive ./uploads
//! ```
//!
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "compskip",
    about = "Detect content that is already natively compressed",
    long_about = "Classifies files or piped data as already compressed (audio, video,\n\
                  archive and image codecs) so a compressing storage layer can skip them.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(flatten)]
    registry: commands::RegistryArgs,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Report whether files (or stdin) are already compressed
    #[command(alias = "c")]
    Check(commands::check::CheckArgs),
    /// List the content types treated as already compressed
    #[command(alias = "t")]
    Types(commands::types::TypesArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Check(args) => commands::check::handle_check(args, &cli.registry).await,
        Commands::Types(args) => commands::types::handle_types(args, &cli.registry).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

//! # compskip Types Command
//!
//! File: cli/src/commands/types.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `compskip types`, which prints the content types currently
//! treated as already compressed (baseline catalog plus configuration and
//! command-line overrides) as a column listing sized to the terminal.
//!
//! ## Examples
//!
//! ```bash
//! compskip types
//! compskip types --width 60 --add-types application/zstd
//! ```
//!
use super::RegistryArgs;
use compskip::common::terminal::{resolve_width, TerminalWidth};
use compskip::core::config;
use compskip::core::error::Result;
use anyhow::Context;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
pub struct TypesArgs {
    /// Listing width in columns (defaults to the configured or terminal width)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: Option<u16>,
}

pub async fn handle_types(args: TypesArgs, overrides: &RegistryArgs) -> Result<()> {
    info!("Handling types command...");
    let cfg = config::load_config().context("Failed to load compskip configuration")?;
    let classifier = super::open_classifier(&cfg, overrides)?;

    let explicit = args.width.map(usize::from).or(cfg.output.width);
    let width = resolve_width(explicit, &TerminalWidth);
    let labels = classifier.type_labels();

    println!("Types treated as already compressed ({}):", labels.len());
    print!("{}", classifier.describe(width));
    Ok(())
}

//! docsite - validate and normalize documentation site configuration.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;
mod render;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Check => cli::check_site(&cli),
        Commands::Emit { output, pretty } => cli::emit_config(&cli, output, *pretty),
        Commands::Head { output } => cli::emit_head(&cli, output),
    }
}

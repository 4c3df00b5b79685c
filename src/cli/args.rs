//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Validate and normalize documentation site configuration
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory (.toml or .json)
    #[arg(short = 'C', long, default_value = "docsite.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the config and report every problem found
    #[command(visible_alias = "c")]
    Check,

    /// Write the normalized config as JSON
    #[command(visible_alias = "e")]
    Emit {
        #[command(flatten)]
        output: OutputArgs,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the HTML injected into <head>
    Head {
        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Shared output arguments for Emit and Head commands
#[derive(clap::Args, Debug, Clone)]
pub struct OutputArgs {
    /// Override the base path (default: $VUEPRESS_BASE)
    #[arg(short, long)]
    pub base: Option<String>,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

//! `emit` and `head` commands.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};

use super::{Cli, OutputArgs, load_config};
use crate::log;

/// Write the normalized config as JSON.
pub fn emit_config(cli: &Cli, args: &OutputArgs, pretty: bool) -> Result<()> {
    let config = load_config(cli, args.base.as_deref())?;
    let json = config
        .to_json(pretty)
        .context("failed to serialize config")?;
    write_output(args, "emit", &json)
}

/// Print the rendered `<head>` fragment.
pub fn emit_head(cli: &Cli, args: &OutputArgs) -> Result<()> {
    let config = load_config(cli, args.base.as_deref())?;
    let html = config.head_html();
    write_output(args, "head", html.trim_end())
}

/// Output to file or stdout.
fn write_output(args: &OutputArgs, module: &str, content: &str) -> Result<()> {
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("failed to create {}", output_path.display()))?;
        writeln!(file, "{content}")?;
        log!(module; "wrote output to {}", output_path.display());
    } else {
        println!("{content}");
    }
    Ok(())
}

//! Command-line interface module.
//!
//! | Command | Purpose                                  |
//! |---------|------------------------------------------|
//! | `check` | Validate, report all diagnostics         |
//! | `emit`  | Normalized config as JSON                |
//! | `head`  | Rendered `<head>` fragment               |

mod args;
mod check;
mod output;

pub use args::{Cli, Commands, OutputArgs};
pub use check::check_site;
pub use output::{emit_config, emit_head};

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::{Document, ProcessEnv, SiteConfig, Warning, resolve_config_path};
use crate::{debug, log};

/// Locate and read the config document named on the command line.
fn read_document(cli: &Cli) -> Result<(PathBuf, Document)> {
    let path = resolve_config_path(&cli.config);
    debug!("config"; "using {}", path.display());

    let document = Document::from_path(&path)
        .with_context(|| format!("failed to read config '{}'", path.display()))?;
    Ok((path, document))
}

/// Load the config, applying a `--base` override when given.
fn load_config(cli: &Cli, base: Option<&str>) -> Result<SiteConfig> {
    let (path, document) = read_document(cli)?;
    let (config, warnings) = SiteConfig::load_with_warnings(&document, &ProcessEnv)
        .with_context(|| format!("invalid config '{}'", path.display()))?;
    print_warnings(&warnings);
    debug!("config"; "base {:?}", config.base);

    Ok(match base {
        Some(base) => config.with_base(base),
        None => config,
    })
}

/// Print loader warnings, one per line.
fn print_warnings(warnings: &[Warning]) {
    for (field, message) in warnings {
        log!("warning"; "[{}] {}", field.as_str(), message);
    }
}

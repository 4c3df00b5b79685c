//! `check` command.

use anyhow::{Context, Result, bail};

use super::{Cli, print_warnings, read_document};
use crate::config::{ConfigError, ProcessEnv, SiteConfig};
use crate::{debug, log};

/// Validate the config and print every diagnostic.
pub fn check_site(cli: &Cli) -> Result<()> {
    let (path, document) = read_document(cli)?;

    match SiteConfig::check(&document, &ProcessEnv) {
        Ok((config, warnings)) => {
            print_warnings(&warnings);
            let theme = &config.theme_config;
            log!(
                "check";
                "{} is valid: {} version{}, {} head entr{}, {} footer link group{}",
                path.display(),
                theme.versions.len(),
                if theme.versions.len() == 1 { "" } else { "s" },
                config.head.len(),
                if config.head.len() == 1 { "y" } else { "ies" },
                theme.footer.links.len(),
                if theme.footer.links.len() == 1 { "" } else { "s" },
            );
            if let Some(repo) = theme.repo_url() {
                log!("check"; "repo: {}", repo);
            }
            for version in &theme.versions {
                if let Some(url) = theme.edit_url(version, "") {
                    debug!("check"; "edit links for '{}': {}", version.label, url);
                }
            }
            Ok(())
        }
        Err(ConfigError::Diagnostics(diag)) => {
            print_warnings(diag.warnings());
            eprintln!("{diag}");
            bail!("{} failed validation", path.display());
        }
        Err(err) => Err(err).with_context(|| format!("invalid config '{}'", path.display())),
    }
}

//! Site configuration loading and validation.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Document section definitions
//! │   ├── head       # head entries
//! │   └── theme/     # themeConfig (versions, footer)
//! ├── types/         # Utility types
//! │   ├── env        # Env lookup
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── util.rs        # URL, repo slug and base path helpers
//! └── mod.rs         # SiteConfig, Document (this file)
//! ```
//!
//! # Document
//!
//! | Key           | Purpose                                          |
//! |---------------|--------------------------------------------------|
//! | `title`       | Site title (required)                            |
//! | `head`        | Tags injected into `<head>`, in order            |
//! | `themeConfig` | Repo links, versions, search, sidebar, footer    |
//!
//! `base` is never read from the document; it comes from `VUEPRESS_BASE`.

pub mod section;
pub mod types;
mod util;

pub use util::find_config_file;

// Re-export from section/
pub use section::{
    FooterConfig, FooterLink, HeadEntry, LinkGroup, ServiceLink, SidebarMode, TextLink,
    ThemeConfig, Version,
};

// Re-export from types/
pub use types::{
    BASE_ENV_VAR, ConfigDiagnostic, ConfigDiagnostics, ConfigError, DiagnosticKind, Env,
    FieldPath, ProcessEnv, Warning,
};

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::normalize_base;

// ============================================================================
// document
// ============================================================================

/// Serialization format of a site document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Raw site document, not yet parsed.
#[derive(Debug, Clone)]
pub struct Document {
    pub format: Format,
    pub content: String,
}

impl Document {
    pub fn toml(content: impl Into<String>) -> Self {
        Self {
            format: Format::Toml,
            content: content.into(),
        }
    }

    pub fn json(content: impl Into<String>) -> Self {
        Self {
            format: Format::Json,
            content: content.into(),
        }
    }

    /// Read a document from disk, format chosen by extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let format = Format::from_path(path)?;
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Ok(Self { format, content })
    }
}

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration of the documentation site.
///
/// Built once by [`SiteConfig::load`] and not mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Base path the site is served under, from `VUEPRESS_BASE`.
    #[serde(skip_deserializing, skip_serializing_if = "String::is_empty")]
    pub base: String,

    /// Tags injected into `<head>`, in declaration order.
    pub head: Vec<HeadEntry>,

    /// Theme settings.
    pub theme_config: ThemeConfig,
}

impl SiteConfig {
    pub const TITLE: FieldPath = FieldPath::new("title");
    pub const BASE: FieldPath = FieldPath::new("base");

    /// Load and validate a document.
    ///
    /// Returns the first problem found, in document order. Warnings are
    /// dropped; see [`SiteConfig::load_with_warnings`].
    pub fn load<E: Env + ?Sized>(document: &Document, env: &E) -> Result<Self, ConfigError> {
        Self::load_with_warnings(document, env).map(|(config, _)| config)
    }

    /// Like [`SiteConfig::load`], also handing back non-fatal warnings.
    pub fn load_with_warnings<E: Env + ?Sized>(
        document: &Document,
        env: &E,
    ) -> Result<(Self, Vec<Warning>), ConfigError> {
        let (config, mut diag) = Self::resolve(document, env)?;
        let warnings = diag.take_warnings();
        diag.into_first_error()?;
        Ok((config, warnings))
    }

    /// Load and validate a document, reporting every problem at once.
    ///
    /// On failure the returned [`ConfigDiagnostics`] still carries the warnings.
    pub fn check<E: Env + ?Sized>(
        document: &Document,
        env: &E,
    ) -> Result<(Self, Vec<Warning>), ConfigError> {
        let (config, mut diag) = Self::resolve(document, env)?;
        if !diag.is_empty() {
            return Err(ConfigError::Diagnostics(diag));
        }
        Ok((config, diag.take_warnings()))
    }

    /// Load a document from disk, see [`SiteConfig::load`].
    pub fn from_path<E: Env + ?Sized>(path: &Path, env: &E) -> Result<Self, ConfigError> {
        Self::load(&Document::from_path(path)?, env)
    }

    /// Parse, normalize and validate, collecting diagnostics.
    fn resolve<E: Env + ?Sized>(
        document: &Document,
        env: &E,
    ) -> Result<(Self, ConfigDiagnostics), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        let (mut config, ignored) = Self::parse_with_ignored(document)?;
        for path in ignored {
            diag.warn(FieldPath::from(path), "unknown field, ignored");
        }

        config.resolve_base(env, &mut diag);
        config.normalize();
        config.validate(&mut diag);

        Ok((config, diag))
    }

    /// Parse document content, collecting any unknown fields.
    fn parse_with_ignored(document: &Document) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();

        let config = match document.format {
            Format::Toml => {
                let deserializer = toml::Deserializer::new(&document.content);
                serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
                    ignored.push(path.to_string());
                })?
            }
            Format::Json => {
                let mut deserializer = serde_json::Deserializer::from_str(&document.content);
                let config =
                    serde_ignored::deserialize(&mut deserializer, |path: serde_ignored::Path| {
                        ignored.push(path.to_string());
                    })?;
                deserializer.end()?;
                config
            }
        };
        Ok((config, ignored))
    }

    /// Take `base` from the environment.
    ///
    /// Unset or blank leaves `base` empty; anything else is normalized
    /// to the `/segment/` form.
    fn resolve_base<E: Env + ?Sized>(&mut self, env: &E, diag: &mut ConfigDiagnostics) {
        let raw = env.var(BASE_ENV_VAR).unwrap_or_default();
        self.base = normalize_base(&raw);

        if !self.base.is_empty() && self.base != raw {
            diag.warn(
                Self::BASE,
                format!("{BASE_ENV_VAR}={raw:?} normalized to {:?}", self.base),
            );
        }
    }

    /// Override `base`, e.g. from the command line.
    pub fn with_base(mut self, base: &str) -> Self {
        self.base = normalize_base(base);
        self
    }

    fn normalize(&mut self) {
        self.title = self.title.trim().to_string();
        self.theme_config.normalize();
    }

    /// Validate the whole document in document order.
    fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.is_empty() {
            diag.missing(Self::TITLE, "set the site title, e.g.: title = \"My Docs\"");
        }
        HeadEntry::validate_all(&self.head, diag);
        self.theme_config.validate(diag);
    }

    /// Normalized config as JSON, for the renderer.
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    /// Rendered `<head>` fragment.
    pub fn head_html(&self) -> String {
        crate::render::render_head(&self.head)
    }
}

/// Resolve a config path: absolute paths as given, relative ones
/// searched upward from the current directory.
pub fn resolve_config_path(config: &Path) -> PathBuf {
    find_config_file(config).unwrap_or_else(|| config.to_path_buf())
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a minimal valid document plus `extra` (placed before `[themeConfig]`).
/// Panics if there are unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let content = format!(
        "title = \"Test\"\n{extra}\n[themeConfig]\ndocsDir = \"docs\"\nversions = [{{ label = \"main\", key = \"main\" }}]\n"
    );
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&Document::toml(content)).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// Environment with `VUEPRESS_BASE` optionally set.
#[cfg(test)]
pub fn test_env(base: Option<&str>) -> rustc_hash::FxHashMap<String, String> {
    let mut env = rustc_hash::FxHashMap::default();
    if let Some(base) = base {
        env.insert(BASE_ENV_VAR.to_string(), base.to_string());
    }
    env
}

// ============================================================================
// tests
// ============================================================================

//! `themeConfig` section configuration.
//!
//! Presentation and navigation settings handed to the theme.
//!
//! # Example
//!
//! ```toml
//! [themeConfig]
//! repo = "line/ostracon"
//! docsRepo = "line/ostracon"
//! docsDir = "docs"
//! label = "core"
//! versions = [{ label = "main", key = "main" }]
//! search = false
//! sidebar = "auto"
//! ```

mod footer;
mod version;

pub use footer::{FooterConfig, FooterLink, LinkGroup, ServiceLink, TextLink};
pub use version::Version;

use serde::{Deserialize, Serialize};

use crate::config::util::{check_url, is_repo_slug};
use crate::config::{ConfigDiagnostics, FieldPath};

/// Host used to expand `owner/name` repository slugs.
const REPO_HOST: &str = "https://github.com";

/// Theme section configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Project repository, `owner/name` or a full URL.
    pub repo: String,

    /// Repository holding the docs; falls back to `repo` when empty.
    pub docs_repo: String,

    /// Directory of the docs inside `docs_repo`.
    pub docs_dir: String,

    /// Label of the version picker.
    pub label: String,

    /// Selectable documentation versions.
    pub versions: Vec<Version>,

    /// Enable the built-in search box.
    pub search: bool,

    /// Sidebar mode: `"auto"`, `true` or `false`.
    pub sidebar: SidebarMode,

    /// Footer content.
    pub footer: FooterConfig,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            repo: String::new(),
            docs_repo: String::new(),
            docs_dir: String::new(),
            label: String::new(),
            versions: Vec::new(),
            search: true,
            sidebar: SidebarMode::default(),
            footer: FooterConfig::default(),
        }
    }
}

impl ThemeConfig {
    pub const FIELD: FieldPath = FieldPath::new("themeConfig");

    /// Fill derived values: `docsRepo` defaults to `repo`, `docsDir`
    /// loses surrounding slashes.
    pub fn normalize(&mut self) {
        self.repo = self.repo.trim().to_string();
        self.docs_repo = self.docs_repo.trim().to_string();
        if self.docs_repo.is_empty() {
            self.docs_repo = self.repo.clone();
        }
        self.docs_dir = self.docs_dir.trim().trim_matches('/').to_string();
    }

    /// Validate theme settings in document order.
    ///
    /// # Checks
    /// - `repo`/`docsRepo` are `owner/name` or http(s) URLs
    /// - `docsDir` is set
    /// - `versions` is non-empty with unique keys
    /// - footer links are complete and well-formed
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        Self::check_repo(Self::FIELD.field("repo"), &self.repo, diag);
        Self::check_repo(Self::FIELD.field("docsRepo"), &self.docs_repo, diag);

        if self.docs_dir.is_empty() {
            diag.missing(
                Self::FIELD.field("docsDir"),
                "set the docs directory inside the repository, e.g.: \"docs\"",
            );
        }

        Version::validate_all(&self.versions, diag);
        self.footer.validate(diag);
    }

    fn check_repo(field: FieldPath, value: &str, diag: &mut ConfigDiagnostics) {
        if value.is_empty() {
            return;
        }
        if value.contains("://") {
            check_url(field, value, diag);
        } else if !is_repo_slug(value) {
            diag.invalid_url(field, value, "expected 'owner/name' or a full URL");
        }
    }

    /// Browsable URL of the project repository.
    pub fn repo_url(&self) -> Option<String> {
        Self::expand_repo(&self.repo)
    }

    /// Browsable URL of the docs repository.
    pub fn docs_repo_url(&self) -> Option<String> {
        Self::expand_repo(&self.docs_repo)
    }

    /// "Edit this page" URL for `page` (relative to `docsDir`) on the
    /// branch named by `version.key`.
    ///
    /// # Example
    /// ```ignore
    /// theme.edit_url(&Version::new("main", "main"), "guide/intro.md")
    ///     -> Some("https://github.com/line/ostracon/edit/main/docs/guide/intro.md")
    /// ```
    pub fn edit_url(&self, version: &Version, page: &str) -> Option<String> {
        let repo = self.docs_repo_url()?;
        let page = page.trim_start_matches('/');
        let url = if self.docs_dir.is_empty() {
            format!("{repo}/edit/{}/{page}", version.key)
        } else {
            format!("{repo}/edit/{}/{}/{page}", version.key, self.docs_dir)
        };
        Some(url)
    }

    fn expand_repo(repo: &str) -> Option<String> {
        if repo.is_empty() {
            None
        } else if repo.contains("://") {
            Some(repo.trim_end_matches('/').to_string())
        } else {
            Some(format!("{REPO_HOST}/{repo}"))
        }
    }
}

// ============================================================================
// Sidebar Mode
// ============================================================================

/// Sidebar mode for the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "SidebarRepr", into = "SidebarRepr")]
pub enum SidebarMode {
    /// Build the sidebar from page headers.
    Auto,
    /// Show the theme's configured sidebar.
    Enabled,
    /// No sidebar.
    #[default]
    Disabled,
}

/// Document shape of `sidebar`: a flag or a mode name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum SidebarRepr {
    Flag(bool),
    Name(String),
}

impl TryFrom<SidebarRepr> for SidebarMode {
    type Error = String;

    fn try_from(repr: SidebarRepr) -> Result<Self, Self::Error> {
        match repr {
            SidebarRepr::Flag(true) => Ok(Self::Enabled),
            SidebarRepr::Flag(false) => Ok(Self::Disabled),
            SidebarRepr::Name(name) if name == "auto" => Ok(Self::Auto),
            SidebarRepr::Name(name) => Err(format!(
                "unknown sidebar mode '{name}', expected \"auto\", true or false"
            )),
        }
    }
}

impl From<SidebarMode> for SidebarRepr {
    fn from(mode: SidebarMode) -> Self {
        match mode {
            SidebarMode::Auto => Self::Name("auto".to_string()),
            SidebarMode::Enabled => Self::Flag(true),
            SidebarMode::Disabled => Self::Flag(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, test_parse_config};

    fn theme(repo: &str, docs_repo: &str) -> ThemeConfig {
        let mut theme = ThemeConfig {
            repo: repo.into(),
            docs_repo: docs_repo.into(),
            docs_dir: "/docs/".into(),
            versions: vec![Version::new("main", "main")],
            ..ThemeConfig::default()
        };
        theme.normalize();
        theme
    }

    #[test]
    fn test_defaults() {
        let theme = ThemeConfig::default();
        assert!(theme.search);
        assert_eq!(theme.sidebar, SidebarMode::Disabled);
        assert!(theme.versions.is_empty());
    }

    #[test]
    fn test_sidebar_values() {
        let config = test_parse_config("");
        assert_eq!(config.theme_config.sidebar, SidebarMode::Disabled);

        let auto: ThemeConfig = serde_json::from_str(r#"{"sidebar":"auto"}"#).unwrap();
        assert_eq!(auto.sidebar, SidebarMode::Auto);
        let on: ThemeConfig = serde_json::from_str(r#"{"sidebar":true}"#).unwrap();
        assert_eq!(on.sidebar, SidebarMode::Enabled);

        let err = serde_json::from_str::<ThemeConfig>(r#"{"sidebar":"left"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown sidebar mode"));

        assert_eq!(serde_json::to_string(&SidebarMode::Auto).unwrap(), "\"auto\"");
        assert_eq!(serde_json::to_string(&SidebarMode::Disabled).unwrap(), "false");
    }

    #[test]
    fn test_normalize() {
        let theme = theme("line/ostracon", "");
        assert_eq!(theme.docs_repo, "line/ostracon");
        assert_eq!(theme.docs_dir, "docs");
    }

    #[test]
    fn test_repo_urls() {
        let theme = theme("line/ostracon", "https://gitlab.com/line/ostracon-docs/");
        assert_eq!(
            theme.repo_url().as_deref(),
            Some("https://github.com/line/ostracon")
        );
        assert_eq!(
            theme.edit_url(&theme.versions[0], "/guide/intro.md").as_deref(),
            Some("https://gitlab.com/line/ostracon-docs/edit/main/docs/guide/intro.md")
        );
        assert_eq!(ThemeConfig::default().repo_url(), None);
    }

    #[test]
    fn test_bad_repo() {
        let mut diag = ConfigDiagnostics::new();
        theme("ostracon", "").validate(&mut diag);
        match diag.into_first_error() {
            Err(ConfigError::InvalidUrl(field, value)) => {
                assert_eq!(field, "themeConfig.repo");
                assert_eq!(value, "ostracon");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_docs_dir() {
        let mut theme = theme("line/ostracon", "");
        theme.docs_dir = String::new();
        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        match diag.into_first_error() {
            Err(ConfigError::MissingField(field)) => assert_eq!(field, "themeConfig.docsDir"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

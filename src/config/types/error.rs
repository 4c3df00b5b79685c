//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("config file parsing error")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config format `{0}`, expected .toml or .json")]
    UnsupportedFormat(String),

    #[error("missing required field {0}")]
    MissingField(FieldPath),

    #[error("invalid URL {1:?} in {0}")]
    InvalidUrl(FieldPath, String),

    #[error("invalid entry #{index} in {field}: {reason}")]
    InvalidEntry {
        field: FieldPath,
        index: usize,
        reason: String,
    },

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// What kind of problem a diagnostic reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    MissingField,
    InvalidUrl { value: String },
    InvalidEntry { index: usize },
}

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub kind: DiagnosticKind,
    /// Config field path (e.g., "themeConfig.footer.services")
    pub field: FieldPath,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(kind: DiagnosticKind, field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            kind,
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<ConfigDiagnostic> for ConfigError {
    fn from(diag: ConfigDiagnostic) -> Self {
        match diag.kind {
            DiagnosticKind::MissingField => Self::MissingField(diag.field),
            DiagnosticKind::InvalidUrl { value } => Self::InvalidUrl(diag.field, value),
            DiagnosticKind::InvalidEntry { index } => Self::InvalidEntry {
                field: diag.field,
                index,
                reason: diag.message,
            },
        }
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        writeln!(
            f,
            "{}{}{}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed()
        )?;
        // Error message with red bullet
        write!(f, "{} {}", "→".red(), self.message)?;
        // Hint in yellow
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Non-fatal problem: the field it concerns and what happened.
pub type Warning = (FieldPath, String);

/// Problems collected while validating one document.
///
/// Errors are kept in document order, so the first one is what
/// [`SiteConfig::load`](crate::config::SiteConfig::load) reports.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    /// Collected warnings (unknown fields, normalized values).
    warnings: Vec<Warning>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// A required field is absent or empty.
    pub fn missing(&mut self, field: FieldPath, hint: impl Into<String>) {
        self.errors.push(
            ConfigDiagnostic::new(DiagnosticKind::MissingField, field, "required field is missing")
                .with_hint(hint),
        );
    }

    /// A URL-bearing field does not hold a valid absolute URL.
    pub fn invalid_url(&mut self, field: FieldPath, value: &str, message: impl Into<String>) {
        self.errors.push(
            ConfigDiagnostic::new(
                DiagnosticKind::InvalidUrl {
                    value: value.to_owned(),
                },
                field,
                message,
            )
            .with_hint("use format like https://example.com"),
        );
    }

    /// The `index`-th element of the sequence at `field` is inconsistent.
    pub fn invalid_entry(&mut self, field: FieldPath, index: usize, reason: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(
            DiagnosticKind::InvalidEntry { index },
            field,
            reason,
        ));
    }

    /// Add a warning (collected for batch display).
    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push((field, message.into()));
    }

    /// Move the collected warnings out, leaving none behind.
    pub fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Convert to Result, keeping only the first error.
    pub fn into_first_error(mut self) -> Result<(), ConfigError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors.swap_remove(0).into())
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

//! `themeConfig.versions`: documentation versions shown in the version picker.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// A selectable documentation version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Version {
    /// Display name.
    pub label: String,
    /// Unique key, also the branch used for edit links.
    pub key: String,
}

impl Version {
    pub const FIELD: FieldPath = FieldPath::new("themeConfig.versions");

    pub fn new(label: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            key: key.into(),
        }
    }

    /// Validate the version list.
    ///
    /// # Checks
    /// - at least one version
    /// - every label and key non-empty
    /// - keys unique
    pub fn validate_all(versions: &[Self], diag: &mut ConfigDiagnostics) {
        if versions.is_empty() {
            diag.missing(
                Self::FIELD,
                "add at least one entry, e.g.: { label = \"main\", key = \"main\" }",
            );
            return;
        }

        let mut seen = FxHashSet::default();
        for (index, version) in versions.iter().enumerate() {
            if version.label.trim().is_empty() {
                diag.invalid_entry(Self::FIELD, index, "version label is empty");
            }
            if version.key.trim().is_empty() {
                diag.invalid_entry(Self::FIELD, index, "version key is empty");
            } else if !seen.insert(version.key.as_str()) {
                diag.invalid_entry(
                    Self::FIELD,
                    index,
                    format!("duplicate version key '{}'", version.key),
                );
            }
        }
    }
}

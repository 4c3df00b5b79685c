//! `head` entries: tags injected into the rendered document's `<head>`.
//!
//! # Example
//!
//! ```toml
//! head = [
//!     ["script", { src = "https://polyfill.io/v3/polyfill.min.js?features=es6" }],
//!     ["script", { id = "MathJax-script", src = "https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js", async = "async" }],
//!     ["script", {}, "window.MathJax = { tex: { inlineMath: [['$','$']] } };"],
//! ]
//! ```
//!
//! The table form is accepted too:
//!
//! ```toml
//! [[head]]
//! tag = "meta"
//! attrs = { name = "theme-color", content = "#06c755" }
//! ```

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::config::util::check_url;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::html;

/// A single tag injected into `<head>`, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HeadEntryRepr", into = "HeadEntryRepr")]
pub struct HeadEntry {
    /// Tag name (e.g. `script`, `meta`).
    pub tag: String,
    /// Attributes in declaration order.
    pub attrs: IndexMap<String, String>,
    /// Inline content between the opening and closing tag.
    pub content: Option<String>,
    /// Attribute names repeated in the document, reported by validation.
    duplicate_attrs: Vec<String>,
}

/// Document shapes of a head entry.
///
/// Normalized output always uses the tuple forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum HeadEntryRepr {
    WithContent(String, Attrs, String),
    Bare(String, Attrs),
    Table {
        tag: String,
        #[serde(default)]
        attrs: Attrs,
        #[serde(default)]
        content: Option<String>,
    },
}

/// Attribute map that remembers names given more than once.
///
/// TOML rejects repeated keys while parsing; JSON does not.
#[derive(Debug, Clone, Default)]
struct Attrs {
    map: IndexMap<String, String>,
    duplicates: Vec<String>,
}

impl<'de> Deserialize<'de> for Attrs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AttrsVisitor;

        impl<'de> Visitor<'de> for AttrsVisitor {
            type Value = Attrs;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of attribute names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Attrs, A::Error> {
                let mut attrs = Attrs::default();
                while let Some((name, value)) = access.next_entry::<String, String>()? {
                    if attrs.map.contains_key(&name) && !attrs.duplicates.contains(&name) {
                        attrs.duplicates.push(name.clone());
                    }
                    attrs.map.insert(name, value);
                }
                Ok(attrs)
            }
        }

        deserializer.deserialize_map(AttrsVisitor)
    }
}

impl Serialize for Attrs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.map.serialize(serializer)
    }
}

impl From<HeadEntryRepr> for HeadEntry {
    fn from(repr: HeadEntryRepr) -> Self {
        let (tag, attrs, content) = match repr {
            HeadEntryRepr::WithContent(tag, attrs, content) => (tag, attrs, Some(content)),
            HeadEntryRepr::Bare(tag, attrs) => (tag, attrs, None),
            HeadEntryRepr::Table {
                tag,
                attrs,
                content,
            } => (tag, attrs, content),
        };
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: attrs.map,
            content,
            duplicate_attrs: attrs.duplicates,
        }
    }
}

impl From<HeadEntry> for HeadEntryRepr {
    fn from(entry: HeadEntry) -> Self {
        let attrs = Attrs {
            map: entry.attrs,
            duplicates: Vec::new(),
        };
        match entry.content {
            Some(content) => Self::WithContent(entry.tag, attrs, content),
            None => Self::Bare(entry.tag, attrs),
        }
    }
}

impl HeadEntry {
    pub const FIELD: FieldPath = FieldPath::new("head");

    /// Attributes holding a URL that the browser will fetch.
    const URL_ATTRS: [&'static str; 2] = ["src", "href"];

    /// Tag names are case-insensitive and stored lowercase.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            attrs: IndexMap::new(),
            content: None,
            duplicate_attrs: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Validate all head entries.
    ///
    /// # Checks
    /// - tag is a valid name allowed inside `<head>`
    /// - attribute names are valid and given once
    /// - `src`/`href` are http(s) URLs or root-relative paths
    /// - void elements carry no content
    /// - raw text content does not close its own element
    pub fn validate_all(entries: &[Self], diag: &mut ConfigDiagnostics) {
        for (index, entry) in entries.iter().enumerate() {
            entry.validate(index, diag);
        }
    }

    fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        let tag = self.tag.as_str();

        if !html::is_valid_tag_name(tag) {
            diag.invalid_entry(Self::FIELD, index, format!("invalid tag name '{tag}'"));
            return;
        }
        if !html::is_head_element(tag) {
            diag.invalid_entry(
                Self::FIELD,
                index,
                format!("<{tag}> is not allowed inside <head>"),
            );
        }

        for name in &self.duplicate_attrs {
            diag.invalid_entry(
                Self::FIELD,
                index,
                format!("duplicate attribute '{name}'"),
            );
        }

        for (name, value) in &self.attrs {
            if !html::is_valid_attr_name(name) {
                diag.invalid_entry(
                    Self::FIELD,
                    index,
                    format!("invalid attribute name '{name}'"),
                );
            } else if Self::URL_ATTRS.contains(&name.to_ascii_lowercase().as_str())
                && !is_root_relative(value)
            {
                let field = Self::FIELD.index(index).field("attrs").field(name);
                check_url(field, value, diag);
            }
        }

        if let Some(content) = &self.content {
            if html::is_void_element(tag) {
                diag.invalid_entry(
                    Self::FIELD,
                    index,
                    format!("void element <{tag}> cannot have content"),
                );
            } else if html::is_raw_text_element(tag)
                && content.to_ascii_lowercase().contains(&format!("</{tag}"))
            {
                diag.invalid_entry(
                    Self::FIELD,
                    index,
                    format!("content closes its own <{tag}> element"),
                );
            }
        }
    }
}

/// `/path`, but not the protocol-relative `//host/path`.
fn is_root_relative(value: &str) -> bool {
    value.starts_with('/') && !value.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ConfigError, DiagnosticKind, Document, SiteConfig, test_env, test_parse_config,
    };

    fn errors_of(entries: &[HeadEntry]) -> Vec<String> {
        let mut diag = ConfigDiagnostics::new();
        HeadEntry::validate_all(entries, &mut diag);
        diag.errors().iter().map(|e| e.message.clone()).collect()
    }

    #[test]
    fn test_tuple_forms_keep_order() {
        let config = test_parse_config(
            r#"head = [
    ["script", { src = "https://polyfill.io/v3/polyfill.min.js?features=es6" }],
    ["script", { id = "MathJax-script", src = "https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js", async = "async" }],
    ["script", {}, "window.MathJax = {};"],
]"#,
        );
        let head = &config.head;
        assert_eq!(head.len(), 3);
        assert!(head[0].content.is_none());

        let keys: Vec<_> = head[1].attrs.keys().map(String::as_str).collect();
        assert_eq!(keys, ["id", "src", "async"]);

        assert!(head[2].attrs.is_empty());
        assert_eq!(head[2].content.as_deref(), Some("window.MathJax = {};"));
    }

    #[test]
    fn test_table_form() {
        let config = test_parse_config(
            "[[head]]\ntag = \"meta\"\nattrs = { name = \"theme-color\", content = \"#06c755\" }",
        );
        assert_eq!(
            config.head,
            vec![
                HeadEntry::new("meta")
                    .with_attr("name", "theme-color")
                    .with_attr("content", "#06c755")
            ]
        );
    }

    #[test]
    fn test_json_round_trip_uses_tuple_form() {
        let json = r#"[["script",{"src":"/app.js"}],["style",{},"body{}"]]"#;
        let entries: Vec<HeadEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[1].content.as_deref(), Some("body{}"));
        assert_eq!(serde_json::to_string(&entries).unwrap(), json);
    }

    #[test]
    fn test_valid_entries() {
        let entries = [
            HeadEntry::new("script").with_attr("src", "https://cdn.example.com/a.js"),
            HeadEntry::new("link")
                .with_attr("rel", "icon")
                .with_attr("href", "/favicon.ico"),
            HeadEntry::new("script").with_content("window.x = '</div>';"),
        ];
        assert!(errors_of(&entries).is_empty());
    }

    #[test]
    fn test_invalid_tag_and_attr() {
        let errors = errors_of(&[
            HeadEntry::new("my tag"),
            HeadEntry::new("div"),
            HeadEntry::new("meta").with_attr("bad name", "x"),
        ]);
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("invalid tag name"));
        assert!(errors[1].contains("not allowed inside <head>"));
        assert!(errors[2].contains("invalid attribute name"));
    }

    #[test]
    fn test_url_attrs_checked_as_urls() {
        let mut diag = ConfigDiagnostics::new();
        HeadEntry::validate_all(
            &[
                HeadEntry::new("script").with_attr("src", "js/app.js"),
                HeadEntry::new("script").with_attr("SRC", "javascript:alert(1)"),
                HeadEntry::new("link").with_attr("href", "//cdn.example.com/a.css"),
            ],
            &mut diag,
        );

        let found: Vec<_> = diag
            .errors()
            .iter()
            .map(|e| (e.field.as_str(), e.kind.clone()))
            .collect();
        assert_eq!(
            found,
            [
                (
                    "head[0].attrs.src",
                    DiagnosticKind::InvalidUrl {
                        value: "js/app.js".into()
                    }
                ),
                (
                    "head[1].attrs.SRC",
                    DiagnosticKind::InvalidUrl {
                        value: "javascript:alert(1)".into()
                    }
                ),
                (
                    "head[2].attrs.href",
                    DiagnosticKind::InvalidUrl {
                        value: "//cdn.example.com/a.css".into()
                    }
                ),
            ]
        );
    }

    #[test]
    fn test_load_reports_bad_src_as_invalid_url() {
        let content = r#"
title = "Test"
head = [["script", { src = "not a url" }]]

[themeConfig]
docsDir = "docs"
versions = [{ label = "main", key = "main" }]
"#;
        match SiteConfig::load(&Document::toml(content), &test_env(None)) {
            Err(ConfigError::InvalidUrl(field, value)) => {
                assert_eq!(field, "head[0].attrs.src");
                assert_eq!(value, "not a url");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_tag_names_case_insensitive() {
        let config = test_parse_config(
            r#"head = [["LINK", { rel = "icon", href = "/f.ico" }], ["Script", {}, "x()"]]"#,
        );
        assert_eq!(config.head[0].tag, "link");
        assert_eq!(config.head[1].tag, "script");
        assert!(errors_of(&config.head).is_empty());

        let html =
            crate::render::render_head(&[HeadEntry::new("META").with_attr("charset", "utf-8")]);
        assert_eq!(html, "<meta charset=\"utf-8\">\n");
    }

    #[test]
    fn test_duplicate_attr_in_json() {
        let json = r#"[["meta",{"name":"a","content":"x","name":"b"}]]"#;
        let entries: Vec<HeadEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].attrs["name"], "b");

        let mut diag = ConfigDiagnostics::new();
        HeadEntry::validate_all(&entries, &mut diag);
        match diag.into_first_error() {
            Err(ConfigError::InvalidEntry { field, index, reason }) => {
                assert_eq!(field, "head");
                assert_eq!(index, 0);
                assert!(reason.contains("duplicate attribute 'name'"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_content_rules() {
        let errors = errors_of(&[
            HeadEntry::new("meta").with_content("x"),
            HeadEntry::new("script").with_content("a</SCRIPT>b"),
        ]);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("void element"));
        assert!(errors[1].contains("closes its own"));
    }

    #[test]
    fn test_entry_index_reported() {
        let mut diag = ConfigDiagnostics::new();
        HeadEntry::validate_all(
            &[HeadEntry::new("script"), HeadEntry::new("meta").with_content("x")],
            &mut diag,
        );
        match diag.into_first_error() {
            Err(ConfigError::InvalidEntry { field, index, .. }) => {
                assert_eq!(field, "head");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

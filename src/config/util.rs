//! Configuration utility functions.

use super::{ConfigDiagnostics, FieldPath};
use std::path::{Path, PathBuf};

/// Validate that `value` is an absolute http(s) URL with a host.
///
/// Reports an `InvalidUrl` diagnostic for `field` otherwise.
pub fn check_url(field: FieldPath, value: &str, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.invalid_url(
                    field,
                    value,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                );
            } else if parsed.host_str().is_none() {
                diag.invalid_url(field, value, "URL must have a valid host");
            }
        }
        Err(e) => diag.invalid_url(field, value, format!("invalid URL: {e}")),
    }
}

/// Whether `value` is a GitHub-style `owner/name` repository slug.
///
/// # Examples
/// ```ignore
/// is_repo_slug("line/ostracon")      -> true
/// is_repo_slug("line")               -> false
/// is_repo_slug("line/ostracon/docs") -> false
/// ```
pub fn is_repo_slug(value: &str) -> bool {
    let valid = |part: &str| {
        !part.is_empty()
            && part
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    };
    match value.split_once('/') {
        Some((owner, name)) => valid(owner) && valid(name),
        None => false,
    }
}

/// Normalize a base path to the `/segment/` form the renderer expects.
///
/// # Examples
/// ```ignore
/// normalize_base("/docs/") -> "/docs/"
/// normalize_base("docs")   -> "/docs/"
/// normalize_base("/")      -> "/"
/// normalize_base("  ")     -> ""
/// ```
pub fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let inner = trimmed.trim_matches('/');
    if inner.is_empty() {
        "/".to_string()
    } else {
        format!("/{inner}/")
    }
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/docs/guide/  ← cwd
/// /home/user/site/docsite.toml ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;

    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiagnosticKind;

    fn url_errors(value: &str) -> Vec<DiagnosticKind> {
        let mut diag = ConfigDiagnostics::new();
        check_url(FieldPath::new("url"), value, &mut diag);
        diag.errors().iter().map(|d| d.kind.clone()).collect()
    }

    #[test]
    fn test_check_url_accepts_http_and_https() {
        assert!(url_errors("https://blockchain.line.me/").is_empty());
        assert!(url_errors("http://localhost:8080/docs").is_empty());
        assert!(url_errors("https://twitter.com/LINEBC_Global").is_empty());
    }

    #[test]
    fn test_check_url_rejects_invalid() {
        assert_eq!(
            url_errors("not a url"),
            vec![DiagnosticKind::InvalidUrl {
                value: "not a url".into()
            }]
        );
        // Relative paths are not absolute URIs
        assert_eq!(url_errors("/guide/").len(), 1);
        // Unsupported scheme
        assert_eq!(url_errors("ftp://example.com/file").len(), 1);
        // No host
        assert_eq!(url_errors("mailto:team@example.com").len(), 1);
    }

    #[test]
    fn test_is_repo_slug() {
        assert!(is_repo_slug("line/ostracon"));
        assert!(is_repo_slug("vuejs/vuepress.next"));
        assert!(!is_repo_slug("line"));
        assert!(!is_repo_slug("line/"));
        assert!(!is_repo_slug("/ostracon"));
        assert!(!is_repo_slug("line/ostracon/docs"));
        assert!(!is_repo_slug("line/ost racon"));
    }

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("/docs/"), "/docs/");
        assert_eq!(normalize_base("docs"), "/docs/");
        assert_eq!(normalize_base("/v1/docs"), "/v1/docs/");
        assert_eq!(normalize_base("/"), "/");
        assert_eq!(normalize_base(""), "");
        assert_eq!(normalize_base("   "), "");
    }

    #[test]
    fn test_find_config_file_absolute_missing() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("docsite.toml");
        assert_eq!(find_config_file(&missing), None);

        std::fs::write(&missing, "title = \"x\"").unwrap();
        assert_eq!(find_config_file(&missing), Some(missing));
    }
}

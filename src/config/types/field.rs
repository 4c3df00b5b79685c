//! Config field paths.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// Dotted path naming a config field, as written in the document.
///
/// Static paths are `const`; indexed paths into sequences are built
/// with [`FieldPath::index`] and [`FieldPath::field`].
///
/// # Example
///
/// ```ignore
/// const SERVICES: FieldPath = FieldPath::new("themeConfig.footer.services");
///
/// let url = SERVICES.index(2).field("url");
/// assert_eq!(url.as_str(), "themeConfig.footer.services[2].url");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Path of a named child field.
    pub fn field(&self, name: &str) -> Self {
        Self(Cow::Owned(format!("{}.{name}", self.0)))
    }

    /// Path of the `index`-th element of this sequence.
    pub fn index(&self, index: usize) -> Self {
        Self(Cow::Owned(format!("{}[{index}]", self.0)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self(Cow::Owned(path))
    }
}

impl PartialEq<&str> for FieldPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_paths() {
        const LINKS: FieldPath = FieldPath::new("themeConfig.footer.links");
        let url = LINKS.index(0).field("children").index(3).field("url");
        assert_eq!(url, "themeConfig.footer.links[0].children[3].url");
        // Building children leaves the parent untouched
        assert_eq!(LINKS.as_str(), "themeConfig.footer.links");
    }

    #[test]
    fn test_static_and_owned_compare_equal() {
        let owned = FieldPath::new("themeConfig").field("docsDir");
        assert_eq!(owned, FieldPath::new("themeConfig.docsDir"));
    }
}

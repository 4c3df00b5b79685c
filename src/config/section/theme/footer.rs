//! `themeConfig.footer`: footer text link, service icons and link groups.
//!
//! # Example
//!
//! ```toml
//! [themeConfig.footer.textLink]
//! text = "LINE Blockchain(blockchain.line.me)"
//! url = "https://blockchain.line.me/"
//!
//! [[themeConfig.footer.services]]
//! service = "medium"
//! url = "https://lineblockchain.medium.com"
//!
//! [[themeConfig.footer.links]]
//! title = "Contributing"
//! children = [
//!     { title = "Source code on GitHub", url = "https://github.com/line/ostracon" },
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::util::check_url;
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterConfig {
    /// Leading text link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_link: Option<TextLink>,
    /// Service icons, in display order.
    pub services: Vec<ServiceLink>,
    /// Link groups, in display order.
    pub links: Vec<LinkGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextLink {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceLink {
    /// Service name, also selects the icon (e.g. `twitter`).
    pub service: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkGroup {
    pub title: String,
    pub children: Vec<FooterLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterLink {
    pub title: String,
    pub url: String,
}

impl FooterConfig {
    pub const FIELD: FieldPath = FieldPath::new("themeConfig.footer");

    /// Validate footer entries in document order.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(text_link) = &self.text_link {
            let field = Self::FIELD.field("textLink");
            if text_link.text.trim().is_empty() {
                diag.missing(field.field("text"), "set the text shown for the link");
            }
            check_url(field.field("url"), &text_link.url, diag);
        }

        let services = Self::FIELD.field("services");
        for (index, service) in self.services.iter().enumerate() {
            if service.service.trim().is_empty() {
                diag.invalid_entry(services.clone(), index, "service name is empty");
            }
            check_url(services.index(index).field("url"), &service.url, diag);
        }

        let links = Self::FIELD.field("links");
        for (index, group) in self.links.iter().enumerate() {
            if group.title.trim().is_empty() {
                diag.invalid_entry(links.clone(), index, "link group title is empty");
            }
            if group.children.is_empty() {
                diag.invalid_entry(links.clone(), index, "link group has no children");
            }

            let children = links.index(index).field("children");
            for (child_index, child) in group.children.iter().enumerate() {
                if child.title.trim().is_empty() {
                    diag.invalid_entry(children.clone(), child_index, "link title is empty");
                }
                check_url(children.index(child_index).field("url"), &child.url, diag);
            }
        }
    }
}

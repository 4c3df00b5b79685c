//! Configuration section definitions.
//!
//! Each module corresponds to a part of the site document:
//!
//! | Module  | Document key   | Purpose                                 |
//! |---------|----------------|-----------------------------------------|
//! | `head`  | `head`         | Tags injected into `<head>`             |
//! | `theme` | `themeConfig`  | Repo links, versions, sidebar, footer   |

mod head;
pub mod theme;

pub use head::HeadEntry;
pub use theme::{
    FooterConfig, FooterLink, LinkGroup, ServiceLink, SidebarMode, TextLink, ThemeConfig, Version,
};

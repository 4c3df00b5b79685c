//! Output produced from a validated [`SiteConfig`](crate::config::SiteConfig).
//!
//! | Module | Purpose                                  |
//! |--------|------------------------------------------|
//! | `head` | HTML fragment injected into `<head>`     |

mod head;

pub use head::render_head;

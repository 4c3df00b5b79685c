//! Head fragment renderer.
//!
//! Turns validated [`HeadEntry`] values into the HTML the renderer
//! injects into `<head>`, one element per line, in declaration order.

use crate::config::HeadEntry;
use crate::utils::html;
use std::fmt::Write;

/// Render head entries to an HTML fragment.
///
/// # Example
/// ```ignore
/// render_head(&[HeadEntry::new("script").with_attr("src", "/a.js")])
///     -> "<script src=\"/a.js\"></script>\n"
/// ```
pub fn render_head(entries: &[HeadEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        render_entry(entry, &mut out);
        out.push('\n');
    }
    out
}

fn render_entry(entry: &HeadEntry, out: &mut String) {
    let tag = entry.tag.as_str();

    out.push('<');
    out.push_str(tag);
    for (name, value) in &entry.attrs {
        // Writing to a String cannot fail
        let _ = write!(out, " {name}=\"{}\"", html::escape_attr(value));
    }
    out.push('>');

    if html::is_void_element(tag) {
        return;
    }

    if let Some(content) = &entry.content {
        if html::is_raw_text_element(tag) {
            out.push_str(content);
        } else {
            out.push_str(&html::escape(content));
        }
    }

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

//! # Resumark Renderers
//!
//! Turns a content tree into output text: a plain HTML fragment, a
//! Markdown-hybrid fragment, or a full fixed-geometry HTML page.
//!
//! The "Markdown" output is deliberately a hybrid: several variants emit raw
//! HTML tags (`<ul>`, `<table>`, `<span>`) inline, because downstream
//! Markdown viewers pass them through. Do not "fix" it into pure Markdown.
//!
//! ## Status handling
//!
//! A disabled leaf or container renders as the empty string; a disabled
//! decorator is transparent and passes its component's rendering through.
//! Containers additionally filter their children per variant, and the two
//! renderers do not always agree:
//!
//! - `Sequence`: Markdown skips disabled children, HTML keeps their (empty)
//!   slots in the newline join.
//! - `UnorderedList`: both skip children whose bottom component is disabled.
//! - `Tabular`: HTML skips cells whose bottom component is disabled,
//!   Markdown keeps them.
//!
//! These asymmetries are load-bearing for existing documents.

pub mod error;
pub mod html;
pub mod markdown;
pub mod page;

pub use error::RenderError;
pub use html::render_html;
pub use markdown::render_markdown;
pub use page::{render_page, wrap_page};

use resumark_document::{ContentTree, FontStyle, Node, NodeId, TreeError};

pub(crate) fn node(tree: &ContentTree, id: NodeId) -> Result<&Node, RenderError> {
    tree.get(id)
        .ok_or_else(|| TreeError::NodeNotFound(id).into())
}

/// True if the bottom component under `id`'s decorator chain is enabled.
pub(crate) fn bottom_enabled(tree: &ContentTree, id: NodeId) -> Result<bool, RenderError> {
    let bottom = tree.bottom_component(id)?;
    Ok(node(tree, bottom)?.status.is_enabled())
}

/// CSS declarations for the boolean font flags, concatenated in a fixed
/// order. Both renderers embed this string verbatim.
pub(crate) fn font_flags(style: &FontStyle) -> String {
    let mut flags = String::new();
    if style.bold {
        flags.push_str("font-weight: bold;");
    }
    if style.italic {
        flags.push_str("font-style: italic;");
    }
    if style.underline {
        flags.push_str("text-decoration-line: underline;");
    }
    flags
}

/// Parse a header level, rejecting anything that is not a positive integer.
pub(crate) fn parse_level(raw: &str) -> Result<u32, RenderError> {
    match raw.trim().parse::<u32>() {
        Ok(level) if level >= 1 => Ok(level),
        _ => Err(RenderError::MalformedLevel(raw.to_string())),
    }
}

/// Parse a tabular column width. Unlike header levels this has a documented
/// fallback of 3, so a bad value degrades the layout instead of failing the
/// whole render.
pub(crate) fn table_width(raw: &str) -> usize {
    match raw.trim().parse::<usize>() {
        Ok(width) if width >= 1 => width,
        _ => {
            tracing::warn!(raw, "column width did not parse, falling back to 3");
            3
        }
    }
}

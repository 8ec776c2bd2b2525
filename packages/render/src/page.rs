//! Full-page HTML wrapper.
//!
//! The body geometry is fixed at 612x791 points with 50px side margins so
//! that a browser print of the page lines up with a US-letter PDF export.

use resumark_document::ContentTree;

use crate::error::RenderError;
use crate::html::render_html;

const PAGE_HEAD: &str = r#"<!DOCTYPE html><html><head><title>My Resume</title>
    <style>
        body {
            height: 612px;
            width: 791px;
            margin-left: 50px;
            margin-right: 50px;
        }
    </style></head>
    "#;

/// Wrap an already-rendered HTML fragment in the fixed page template.
pub fn wrap_page(body: &str) -> String {
    format!("{PAGE_HEAD}<body>{body}</body></html>")
}

/// Render a whole tree as a standalone HTML page.
pub fn render_page(tree: &ContentTree) -> Result<String, RenderError> {
    Ok(wrap_page(&render_html(tree, tree.root())?))
}

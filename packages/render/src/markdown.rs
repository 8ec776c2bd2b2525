//! Markdown-hybrid fragment renderer.
//!
//! Lists, tables and styled spans come out as raw HTML inside the Markdown
//! stream; viewers pass them through.

use resumark_document::{ContentTree, NodeId, NodeKind};

use crate::error::RenderError;
use crate::{bottom_enabled, font_flags, node, parse_level, table_width};

/// Render the subtree at `id` as a Markdown-hybrid fragment.
pub fn render_markdown(tree: &ContentTree, id: NodeId) -> Result<String, RenderError> {
    let node = node(tree, id)?;
    match &node.kind {
        NodeKind::StyledFont { component, style } => {
            let body = render_markdown(tree, *component)?;
            if !node.status.is_enabled() {
                return Ok(body);
            }
            // Unlike HTML, Markdown carries only the flag declarations; the
            // base font is left to the viewer.
            Ok(format!(r#"<span style="{}">{}</span>"#, font_flags(style), body))
        }
        NodeKind::BoxMargin { component, .. } => {
            let body = render_markdown(tree, *component)?;
            if !node.status.is_enabled() {
                return Ok(body);
            }
            // Margins have no Markdown equivalent; a quote marker per line is
            // the closest indentation transform. Split rather than `lines` so
            // a trailing empty line keeps its marker.
            let quoted: Vec<String> = body.split('\n').map(|line| format!("> {line}")).collect();
            Ok(quoted.join("\n"))
        }

        _ if !node.status.is_enabled() => Ok(String::new()),

        NodeKind::Text { value } => Ok(value.clone()),
        NodeKind::Url { value, url } => Ok(format!(r#"<a href="{url}">{value}</a>"#)),
        NodeKind::HLine => Ok("---".to_string()),

        // Disabled children are skipped outright, unlike the HTML join.
        NodeKind::Sequence { children } => {
            let mut parts = Vec::new();
            for &child in children {
                if !node_enabled(tree, child)? {
                    continue;
                }
                parts.push(render_markdown(tree, child)?);
            }
            Ok(parts.join("\n"))
        }
        NodeKind::TextLine { children } => join(tree, children, ""),
        NodeKind::InlineList { children } => join(tree, children, ", "),
        NodeKind::Header { children, level } => {
            let level = parse_level(level)?;
            Ok(format!(
                "\n\n{} {}\n",
                "#".repeat(level as usize),
                join(tree, children, "")?
            ))
        }
        NodeKind::UnorderedList { children } => {
            let mut body = String::new();
            for &child in children {
                if !bottom_enabled(tree, child)? {
                    continue;
                }
                body.push_str("<li>");
                body.push_str(&render_markdown(tree, child)?);
                body.push_str("</li>");
            }
            Ok(format!("<ul>{body}</ul>"))
        }
        NodeKind::Tabular {
            children,
            column_width,
        } => {
            let width = table_width(column_width);
            let mut md = "<table>".to_string();
            for row in children.chunks(width) {
                md.push_str("<tr>");
                // No status filter here; only the HTML renderer drops cells.
                for &cell in row {
                    md.push_str("<td>");
                    md.push_str(&render_markdown(tree, cell)?);
                    md.push_str("</td>");
                }
                md.push_str("</tr>");
            }
            md.push_str("</table>\n");
            Ok(md)
        }
    }
}

fn node_enabled(tree: &ContentTree, id: NodeId) -> Result<bool, RenderError> {
    Ok(node(tree, id)?.status.is_enabled())
}

fn join(tree: &ContentTree, children: &[NodeId], sep: &str) -> Result<String, RenderError> {
    let parts: Vec<String> = children
        .iter()
        .map(|&child| render_markdown(tree, child))
        .collect::<Result<_, _>>()?;
    Ok(parts.join(sep))
}

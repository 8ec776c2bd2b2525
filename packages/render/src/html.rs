//! HTML fragment renderer.

use resumark_document::{ContentTree, NodeId, NodeKind};

use crate::error::RenderError;
use crate::{bottom_enabled, font_flags, node, parse_level, table_width};

const TABLE_OPEN: &str =
    r#"<table style="width:100%;border-collapse:collapse;text-align:left;table-layout: fixed;">"#;

/// Render the subtree at `id` as an HTML fragment.
pub fn render_html(tree: &ContentTree, id: NodeId) -> Result<String, RenderError> {
    let node = node(tree, id)?;
    match &node.kind {
        // Decorators first: a disabled decorator is transparent, not silent.
        NodeKind::StyledFont { component, style } => {
            let body = render_html(tree, *component)?;
            if !node.status.is_enabled() {
                return Ok(body);
            }
            Ok(format!(
                r#"<span style="font: {} {};{}">{}</span>"#,
                style.font_size,
                style.font_family,
                font_flags(style),
                body
            ))
        }
        NodeKind::BoxMargin { component, margins } => {
            let body = render_html(tree, *component)?;
            if !node.status.is_enabled() {
                return Ok(body);
            }
            Ok(format!(
                r#"<div style="margin: {} {} {} {};">{}</div>"#,
                margins.north, margins.east, margins.south, margins.west, body
            ))
        }

        _ if !node.status.is_enabled() => Ok(String::new()),

        NodeKind::Text { value } => Ok(value.clone()),
        NodeKind::Url { value, url } => Ok(format!(r#"<a href="{url}">{value}</a>"#)),
        NodeKind::HLine => Ok(r#"<hr style="margin-left:-20px;margin-right:40px;">"#.to_string()),

        // Disabled children still render (to ""), so their newline slots stay.
        NodeKind::Sequence { children } => join(tree, children, "\n"),
        NodeKind::TextLine { children } => join(tree, children, ""),
        NodeKind::InlineList { children } => join(tree, children, ", "),
        NodeKind::Header { children, level } => {
            let level = parse_level(level)?;
            Ok(format!("<h{level}>{}</h{level}>", join(tree, children, "")?))
        }
        NodeKind::UnorderedList { children } => {
            let mut body = String::new();
            for &child in children {
                if !bottom_enabled(tree, child)? {
                    continue;
                }
                body.push_str("<li>");
                body.push_str(&render_html(tree, child)?);
                body.push_str("</li>");
            }
            Ok(format!("<ul>{body}</ul>"))
        }
        NodeKind::Tabular {
            children,
            column_width,
        } => {
            let width = table_width(column_width);
            let mut html = TABLE_OPEN.to_string();
            for row in children.chunks(width) {
                html.push_str("<tr>");
                for &cell in row {
                    if !bottom_enabled(tree, cell)? {
                        continue;
                    }
                    html.push_str("<td>");
                    html.push_str(&render_html(tree, cell)?);
                    html.push_str("</td>");
                }
                html.push_str("</tr>");
            }
            html.push_str("</table>");
            Ok(html)
        }
    }
}

fn join(tree: &ContentTree, children: &[NodeId], sep: &str) -> Result<String, RenderError> {
    let parts: Vec<String> = children
        .iter()
        .map(|&child| render_html(tree, child))
        .collect::<Result<_, _>>()?;
    Ok(parts.join(sep))
}

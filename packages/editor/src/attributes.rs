//! String-keyed attribute access.
//!
//! Editors drive attribute edits from text fields, so every attribute reads
//! and writes as a string. The table of names per variant:
//!
//! | Variant     | Attributes |
//! |-------------|------------|
//! | TextElement | `value` |
//! | URLElement  | `value`, `url` |
//! | Header      | `level` |
//! | Tabular     | `column_width` |
//! | StyledFont  | `font_size`, `font_family`, `bold`, `italic`, `underline` |
//! | BoxMargin   | `margin_n`, `margin_e`, `margin_s`, `margin_w` |
//!
//! Boolean flags accept `0`/`1`/`false`/`true` and read back as `0`/`1`.
//! `level` and `column_width` stay unparsed strings here; the renderers
//! decide what a malformed number means.

use resumark_document::{ContentTree, NodeId, NodeKind, TreeError};

use crate::mutations::MutationError;

/// Read an attribute as a string.
pub fn get_attribute(
    tree: &ContentTree,
    id: NodeId,
    name: &str,
) -> Result<String, MutationError> {
    let node = tree.get(id).ok_or(TreeError::NodeNotFound(id))?;
    let value = match (&node.kind, name) {
        (NodeKind::Text { value }, "value") => value.clone(),
        (NodeKind::Url { value, .. }, "value") => value.clone(),
        (NodeKind::Url { url, .. }, "url") => url.clone(),
        (NodeKind::Header { level, .. }, "level") => level.clone(),
        (NodeKind::Tabular { column_width, .. }, "column_width") => column_width.clone(),
        (NodeKind::StyledFont { style, .. }, "font_size") => style.font_size.clone(),
        (NodeKind::StyledFont { style, .. }, "font_family") => style.font_family.clone(),
        (NodeKind::StyledFont { style, .. }, "bold") => flag_to_str(style.bold),
        (NodeKind::StyledFont { style, .. }, "italic") => flag_to_str(style.italic),
        (NodeKind::StyledFont { style, .. }, "underline") => flag_to_str(style.underline),
        (NodeKind::BoxMargin { margins, .. }, "margin_n") => margins.north.clone(),
        (NodeKind::BoxMargin { margins, .. }, "margin_e") => margins.east.clone(),
        (NodeKind::BoxMargin { margins, .. }, "margin_s") => margins.south.clone(),
        (NodeKind::BoxMargin { margins, .. }, "margin_w") => margins.west.clone(),
        _ => {
            return Err(MutationError::UnknownAttribute {
                name: name.to_string(),
            })
        }
    };
    Ok(value)
}

/// Write an attribute from a string.
pub fn set_attribute(
    tree: &mut ContentTree,
    id: NodeId,
    name: &str,
    value: &str,
) -> Result<(), MutationError> {
    let node = tree.get_mut(id).ok_or(TreeError::NodeNotFound(id))?;
    match (&mut node.kind, name) {
        (NodeKind::Text { value: slot }, "value") => *slot = value.to_string(),
        (NodeKind::Url { value: slot, .. }, "value") => *slot = value.to_string(),
        (NodeKind::Url { url, .. }, "url") => *url = value.to_string(),
        (NodeKind::Header { level, .. }, "level") => *level = value.to_string(),
        (NodeKind::Tabular { column_width, .. }, "column_width") => {
            *column_width = value.to_string()
        }
        (NodeKind::StyledFont { style, .. }, "font_size") => {
            style.font_size = value.to_string()
        }
        (NodeKind::StyledFont { style, .. }, "font_family") => {
            style.font_family = value.to_string()
        }
        (NodeKind::StyledFont { style, .. }, "bold") => style.bold = parse_flag(name, value)?,
        (NodeKind::StyledFont { style, .. }, "italic") => {
            style.italic = parse_flag(name, value)?
        }
        (NodeKind::StyledFont { style, .. }, "underline") => {
            style.underline = parse_flag(name, value)?
        }
        (NodeKind::BoxMargin { margins, .. }, "margin_n") => margins.north = value.to_string(),
        (NodeKind::BoxMargin { margins, .. }, "margin_e") => margins.east = value.to_string(),
        (NodeKind::BoxMargin { margins, .. }, "margin_s") => margins.south = value.to_string(),
        (NodeKind::BoxMargin { margins, .. }, "margin_w") => margins.west = value.to_string(),
        _ => {
            return Err(MutationError::UnknownAttribute {
                name: name.to_string(),
            })
        }
    }
    Ok(())
}

fn flag_to_str(flag: bool) -> String {
    if flag { "1" } else { "0" }.to_string()
}

fn parse_flag(name: &str, value: &str) -> Result<bool, MutationError> {
    match value {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(MutationError::InvalidAttributeValue {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

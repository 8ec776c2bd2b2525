//! # Serialized Document Form
//!
//! `NodeDoc` is the owned, nested form a tree round-trips through: a serde
//! enum tagged with `"type"`, one variant per node type. Containers nest a
//! `children` list, decorators a single `component`. It is also the unit of
//! deep cloning (`ContentTree::insert_clone` goes serialize → graft).
//!
//! JSON decoding runs an explicit tag check against `NODE_TYPES` before serde
//! field decoding, so an unregistered tag anywhere in the document surfaces
//! as `DocumentError::UnknownTypeTag` rather than a generic decode error.
//!
//! Transient editor state (expand/collapse and the like) is never part of
//! this form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DocumentError, TreeError};
use crate::node::{FontStyle, Margins, NodeKind, Status};
use crate::tree::{ContentTree, NodeId};

fn default_status() -> u8 {
    1
}

fn default_level() -> String {
    "1".to_string()
}

fn default_column_width() -> String {
    "3".to_string()
}

fn default_font_size() -> String {
    "1em".to_string()
}

fn default_font_family() -> String {
    "Montserrat".to_string()
}

fn default_margin() -> String {
    "0px".to_string()
}

/// Every registered type tag. `deserialize` dispatch is closed over this
/// table; anything else is fatal.
pub const NODE_TYPES: &[&str] = &[
    "TextElement",
    "URLElement",
    "HLine",
    "Sequence",
    "TextLine",
    "Header",
    "InlineList",
    "UnorderedList",
    "Tabular",
    "StyledFont",
    "BoxMargin",
];

/// Serialized node. `status` is 0/1 (any non-zero input counts as enabled);
/// `label` defaults to the type name when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeDoc {
    TextElement {
        #[serde(default = "default_status")]
        status: u8,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        value: String,
    },

    URLElement {
        #[serde(default = "default_status")]
        status: u8,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        value: String,
        #[serde(default)]
        url: String,
    },

    HLine {
        #[serde(default = "default_status")]
        status: u8,
        #[serde(default)]
        label: Option<String>,
    },

    Sequence {
        #[serde(default = "default_status")]
        status: u8,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        children: Vec<NodeDoc>,
    },

    TextLine {
        #[serde(default = "default_status")]
        status: u8,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        children: Vec<NodeDoc>,
    },

    Header {
        #[serde(default = "default_status")]
        status: u8,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        children: Vec<NodeDoc>,
        #[serde(default = "default_level")]
        level: String,
    },

    InlineList {
        #[serde(default = "default_status")]
        status: u8,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        children: Vec<NodeDoc>,
    },

    UnorderedList {
        #[serde(default = "default_status")]
        status: u8,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        children: Vec<NodeDoc>,
    },

    Tabular {
        #[serde(default = "default_status")]
        status: u8,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        children: Vec<NodeDoc>,
        #[serde(default = "default_column_width")]
        column_width: String,
    },

    StyledFont {
        #[serde(default = "default_status")]
        status: u8,
        #[serde(default)]
        label: Option<String>,
        component: Box<NodeDoc>,
        #[serde(default = "default_font_size")]
        font_size: String,
        #[serde(default = "default_font_family")]
        font_family: String,
        #[serde(default)]
        bold: bool,
        #[serde(default)]
        italic: bool,
        #[serde(default)]
        underline: bool,
    },

    BoxMargin {
        #[serde(default = "default_status")]
        status: u8,
        #[serde(default)]
        label: Option<String>,
        component: Box<NodeDoc>,
        #[serde(default = "default_margin")]
        margin_n: String,
        #[serde(default = "default_margin")]
        margin_e: String,
        #[serde(default = "default_margin")]
        margin_s: String,
        #[serde(default = "default_margin")]
        margin_w: String,
    },
}

impl NodeDoc {
    /// Decode from a JSON value, rejecting unknown type tags explicitly.
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        validate_tags(&value)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Decode from JSON text.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize the subtree rooted at `id`.
    pub fn from_tree(tree: &ContentTree, id: NodeId) -> Result<Self, TreeError> {
        let node = tree.node(id)?;
        let status = u8::from(node.status);
        let label = Some(node.label.clone());
        let children = |ids: &[NodeId]| -> Result<Vec<NodeDoc>, TreeError> {
            ids.iter()
                .map(|&child| NodeDoc::from_tree(tree, child))
                .collect()
        };

        Ok(match &node.kind {
            NodeKind::Text { value } => NodeDoc::TextElement {
                status,
                label,
                value: value.clone(),
            },
            NodeKind::Url { value, url } => NodeDoc::URLElement {
                status,
                label,
                value: value.clone(),
                url: url.clone(),
            },
            NodeKind::HLine => NodeDoc::HLine { status, label },
            NodeKind::Sequence { children: ids } => NodeDoc::Sequence {
                status,
                label,
                children: children(ids)?,
            },
            NodeKind::TextLine { children: ids } => NodeDoc::TextLine {
                status,
                label,
                children: children(ids)?,
            },
            NodeKind::Header {
                children: ids,
                level,
            } => NodeDoc::Header {
                status,
                label,
                children: children(ids)?,
                level: level.clone(),
            },
            NodeKind::InlineList { children: ids } => NodeDoc::InlineList {
                status,
                label,
                children: children(ids)?,
            },
            NodeKind::UnorderedList { children: ids } => NodeDoc::UnorderedList {
                status,
                label,
                children: children(ids)?,
            },
            NodeKind::Tabular {
                children: ids,
                column_width,
            } => NodeDoc::Tabular {
                status,
                label,
                children: children(ids)?,
                column_width: column_width.clone(),
            },
            NodeKind::StyledFont { component, style } => NodeDoc::StyledFont {
                status,
                label,
                component: Box::new(NodeDoc::from_tree(tree, *component)?),
                font_size: style.font_size.clone(),
                font_family: style.font_family.clone(),
                bold: style.bold,
                italic: style.italic,
                underline: style.underline,
            },
            NodeKind::BoxMargin { component, margins } => NodeDoc::BoxMargin {
                status,
                label,
                component: Box::new(NodeDoc::from_tree(tree, *component)?),
                margin_n: margins.north.clone(),
                margin_e: margins.east.clone(),
                margin_s: margins.south.clone(),
                margin_w: margins.west.clone(),
            },
        })
    }

    /// Build this document as a detached subtree inside `tree`, returning the
    /// subtree's root id.
    pub fn graft(&self, tree: &mut ContentTree) -> NodeId {
        let (status, label) = self.common();
        let status = Status::from(status);

        let id = match self {
            NodeDoc::TextElement { value, .. } => {
                tree.alloc(NodeKind::text(value.clone()))
            }
            NodeDoc::URLElement { value, url, .. } => {
                tree.alloc(NodeKind::url(value.clone(), url.clone()))
            }
            NodeDoc::HLine { .. } => tree.alloc(NodeKind::HLine),
            NodeDoc::Sequence { children, .. } => {
                let ids = graft_children(tree, children);
                adopt(tree, NodeKind::Sequence { children: ids })
            }
            NodeDoc::TextLine { children, .. } => {
                let ids = graft_children(tree, children);
                adopt(tree, NodeKind::TextLine { children: ids })
            }
            NodeDoc::Header {
                children, level, ..
            } => {
                let ids = graft_children(tree, children);
                adopt(
                    tree,
                    NodeKind::Header {
                        children: ids,
                        level: level.clone(),
                    },
                )
            }
            NodeDoc::InlineList { children, .. } => {
                let ids = graft_children(tree, children);
                adopt(tree, NodeKind::InlineList { children: ids })
            }
            NodeDoc::UnorderedList { children, .. } => {
                let ids = graft_children(tree, children);
                adopt(tree, NodeKind::UnorderedList { children: ids })
            }
            NodeDoc::Tabular {
                children,
                column_width,
                ..
            } => {
                let ids = graft_children(tree, children);
                adopt(
                    tree,
                    NodeKind::Tabular {
                        children: ids,
                        column_width: column_width.clone(),
                    },
                )
            }
            NodeDoc::StyledFont {
                component,
                font_size,
                font_family,
                bold,
                italic,
                underline,
                ..
            } => {
                let inner = component.graft(tree);
                let id = tree.alloc(NodeKind::StyledFont {
                    component: inner,
                    style: FontStyle {
                        font_size: font_size.clone(),
                        font_family: font_family.clone(),
                        bold: *bold,
                        italic: *italic,
                        underline: *underline,
                    },
                });
                if let Some(node) = tree.get_mut(inner) {
                    node.parent = Some(id);
                }
                id
            }
            NodeDoc::BoxMargin {
                component,
                margin_n,
                margin_e,
                margin_s,
                margin_w,
                ..
            } => {
                let inner = component.graft(tree);
                let id = tree.alloc(NodeKind::BoxMargin {
                    component: inner,
                    margins: Margins::new(
                        margin_n.clone(),
                        margin_e.clone(),
                        margin_s.clone(),
                        margin_w.clone(),
                    ),
                });
                if let Some(node) = tree.get_mut(inner) {
                    node.parent = Some(id);
                }
                id
            }
        };

        if let Some(node) = tree.get_mut(id) {
            node.status = status;
            // `alloc` already defaulted the label to the type name.
            if let Some(label) = label {
                node.label = label;
            }
        }
        id
    }

    fn common(&self) -> (u8, Option<String>) {
        match self {
            NodeDoc::TextElement { status, label, .. }
            | NodeDoc::URLElement { status, label, .. }
            | NodeDoc::HLine { status, label }
            | NodeDoc::Sequence { status, label, .. }
            | NodeDoc::TextLine { status, label, .. }
            | NodeDoc::Header { status, label, .. }
            | NodeDoc::InlineList { status, label, .. }
            | NodeDoc::UnorderedList { status, label, .. }
            | NodeDoc::Tabular { status, label, .. }
            | NodeDoc::StyledFont { status, label, .. }
            | NodeDoc::BoxMargin { status, label, .. } => (*status, label.clone()),
        }
    }
}

impl ContentTree {
    /// Rebuild a whole tree from its serialized form.
    pub fn from_doc(doc: &NodeDoc) -> Self {
        let mut tree = ContentTree::with_root(NodeKind::sequence());
        let placeholder = tree.root();
        let root = doc.graft(&mut tree);
        tree.set_root(root, placeholder);
        tree
    }

    /// Serialize the whole tree.
    pub fn to_doc(&self) -> Result<NodeDoc, TreeError> {
        NodeDoc::from_tree(self, self.root())
    }
}

fn graft_children(tree: &mut ContentTree, children: &[NodeDoc]) -> Vec<NodeId> {
    children.iter().map(|child| child.graft(tree)).collect()
}

/// Allocate a container whose child ids are already grafted, then point the
/// children's parent back-references at it.
fn adopt(tree: &mut ContentTree, kind: NodeKind) -> NodeId {
    let child_ids: Vec<NodeId> = kind.children().map(|ids| ids.to_vec()).unwrap_or_default();
    let id = tree.alloc(kind);
    for child in child_ids {
        if let Some(node) = tree.get_mut(child) {
            node.parent = Some(id);
        }
    }
    id
}

/// Recursive registry check over a raw JSON document.
fn validate_tags(value: &Value) -> Result<(), DocumentError> {
    let tag = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or(DocumentError::MissingTypeTag)?;
    if !NODE_TYPES.contains(&tag) {
        return Err(DocumentError::UnknownTypeTag(tag.to_string()));
    }
    if let Some(children) = value.get("children").and_then(Value::as_array) {
        for child in children {
            validate_tags(child)?;
        }
    }
    if let Some(component) = value.get("component") {
        validate_tags(component)?;
    }
    Ok(())
}

//! # Tree Mutations
//!
//! High-level semantic operations on a résumé content tree.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: each mutation represents one user action
//! 2. **Validated**: structural constraints are checked before any change
//! 3. **Invertible**: `to_inverse` captures the undo step against the
//!    pre-mutation tree
//!
//! ## Identity caveat
//!
//! Mutations address nodes by `NodeId`. Undoing a `RemoveAt` re-grafts the
//! removed subtree under fresh ids, so earlier history entries that point
//! into that subtree surface `NodeNotFound` when replayed. Editors that need
//! deeper history across deletes should re-resolve ids from the serialized
//! form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use resumark_document::{
    ContentTree, Decoration, DecoratorKind, NodeDoc, NodeId, NodeKind, Status, TreeError,
};

use crate::attributes::{get_attribute, set_attribute};

/// Semantic mutations over a content tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Graft a serialized node and insert it into a container. `index: None`
    /// appends.
    InsertNode {
        parent: NodeId,
        index: Option<usize>,
        node: NodeDoc,
    },

    /// Remove (and drop) the child at `index`.
    RemoveAt { parent: NodeId, index: usize },

    /// Swap two children of a container.
    SwapChildren { parent: NodeId, a: usize, b: usize },

    /// Deep-clone the child at `index`, inserting the clone before it.
    CloneChild { parent: NodeId, index: usize },

    /// Enable or disable a node.
    SetStatus { node: NodeId, status: Status },

    /// Rename a node's editor label.
    SetLabel { node: NodeId, label: String },

    /// Replace a text element's value (atomic, not a character diff).
    UpdateText { node: NodeId, value: String },

    /// Write a string-keyed attribute (see the `attributes` module table).
    SetAttribute {
        node: NodeId,
        name: String,
        value: String,
    },

    /// Attach or restyle a decorator above the node's chain.
    Decorate {
        node: NodeId,
        decoration: Decoration,
    },

    /// Splice the decorator of the given kind out of the node's chain.
    Undecorate { node: NodeId, kind: DecoratorKind },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("node has no attribute {name:?}")]
    UnknownAttribute { name: String },

    #[error("invalid value {value:?} for attribute {name:?}")]
    InvalidAttributeValue { name: String, value: String },
}

impl Mutation {
    /// Apply the mutation with validation.
    pub fn apply(&self, tree: &mut ContentTree) -> Result<(), MutationError> {
        self.validate(tree)?;

        match self {
            Mutation::InsertNode {
                parent,
                index,
                node,
            } => {
                let id = node.graft(tree);
                tree.insert(*parent, id, *index)?;
            }
            Mutation::RemoveAt { parent, index } => {
                let child = tree.pop_at(*parent, *index)?;
                tree.release(child)?;
            }
            Mutation::SwapChildren { parent, a, b } => {
                tree.swap(*parent, *a, *b)?;
            }
            Mutation::CloneChild { parent, index } => {
                tree.insert_clone(*parent, *index)?;
            }
            Mutation::SetStatus { node, status } => {
                tree.set_status(*node, *status)?;
            }
            Mutation::SetLabel { node, label } => {
                tree.set_label(*node, label.clone())?;
            }
            Mutation::UpdateText { node, value } => {
                set_attribute(tree, *node, "value", value)?;
            }
            Mutation::SetAttribute { node, name, value } => {
                set_attribute(tree, *node, name, value)?;
            }
            Mutation::Decorate { node, decoration } => {
                tree.decorate(*node, decoration.clone())?;
            }
            Mutation::Undecorate { node, kind } => {
                tree.undecorate(*node, *kind)?;
            }
        }
        Ok(())
    }

    /// Check structural constraints without mutating.
    pub fn validate(&self, tree: &ContentTree) -> Result<(), MutationError> {
        match self {
            Mutation::InsertNode { parent, index, .. } => {
                let len = child_count(tree, *parent)?;
                if let Some(index) = *index {
                    if index > len {
                        return Err(TreeError::IndexOutOfRange { index, len }.into());
                    }
                }
            }
            Mutation::RemoveAt { parent, index } | Mutation::CloneChild { parent, index } => {
                let len = child_count(tree, *parent)?;
                if *index >= len {
                    return Err(TreeError::IndexOutOfRange { index: *index, len }.into());
                }
            }
            Mutation::SwapChildren { parent, a, b } => {
                let len = child_count(tree, *parent)?;
                for &index in [a, b] {
                    if index >= len {
                        return Err(TreeError::IndexOutOfRange { index, len }.into());
                    }
                }
            }
            Mutation::SetStatus { node, .. }
            | Mutation::SetLabel { node, .. }
            | Mutation::Decorate { node, .. } => {
                exists(tree, *node)?;
            }
            Mutation::UpdateText { node, .. } => {
                get_attribute(tree, *node, "value")?;
            }
            Mutation::SetAttribute { node, name, .. } => {
                get_attribute(tree, *node, name)?;
            }
            Mutation::Undecorate { node, kind } => {
                if existing_decoration(tree, *node, *kind)?.is_none() {
                    return Err(TreeError::DecoratorNotFound(*kind).into());
                }
            }
        }
        Ok(())
    }

    /// Build the mutation that undoes this one, against the tree as it is
    /// *before* this mutation is applied.
    ///
    /// Inverting `Undecorate` recovers the decorator's payload but not its
    /// status or label; those reset to their defaults on redo of the inverse.
    pub fn to_inverse(&self, tree: &ContentTree) -> Result<Mutation, MutationError> {
        Ok(match self {
            Mutation::InsertNode { parent, index, .. } => {
                let len = child_count(tree, *parent)?;
                Mutation::RemoveAt {
                    parent: *parent,
                    index: index.unwrap_or(len),
                }
            }
            Mutation::RemoveAt { parent, index } => {
                let child = child_at(tree, *parent, *index)?;
                Mutation::InsertNode {
                    parent: *parent,
                    index: Some(*index),
                    node: NodeDoc::from_tree(tree, child)?,
                }
            }
            Mutation::SwapChildren { .. } => self.clone(),
            Mutation::CloneChild { parent, index } => Mutation::RemoveAt {
                parent: *parent,
                index: *index,
            },
            Mutation::SetStatus { node, .. } => Mutation::SetStatus {
                node: *node,
                status: exists(tree, *node)?.status,
            },
            Mutation::SetLabel { node, .. } => Mutation::SetLabel {
                node: *node,
                label: exists(tree, *node)?.label.clone(),
            },
            Mutation::UpdateText { node, .. } => Mutation::UpdateText {
                node: *node,
                value: get_attribute(tree, *node, "value")?,
            },
            Mutation::SetAttribute { node, name, .. } => Mutation::SetAttribute {
                node: *node,
                name: name.clone(),
                value: get_attribute(tree, *node, name)?,
            },
            Mutation::Decorate { node, decoration } => {
                match existing_decoration(tree, *node, decoration.kind())? {
                    // Replace-in-place: undo restores the old payload.
                    Some(old) => Mutation::Decorate {
                        node: *node,
                        decoration: old,
                    },
                    // Push: undo splices the new decorator back out.
                    None => Mutation::Undecorate {
                        node: *node,
                        kind: decoration.kind(),
                    },
                }
            }
            Mutation::Undecorate { node, kind } => {
                let old = existing_decoration(tree, *node, *kind)?
                    .ok_or(TreeError::DecoratorNotFound(*kind))?;
                Mutation::Decorate {
                    node: *node,
                    decoration: old,
                }
            }
        })
    }
}

fn exists<'a>(
    tree: &'a ContentTree,
    id: NodeId,
) -> Result<&'a resumark_document::Node, MutationError> {
    Ok(tree.get(id).ok_or(TreeError::NodeNotFound(id))?)
}

fn child_count(tree: &ContentTree, parent: NodeId) -> Result<usize, MutationError> {
    Ok(exists(tree, parent)?
        .kind
        .children()
        .ok_or(TreeError::NotAContainer)?
        .len())
}

fn child_at(tree: &ContentTree, parent: NodeId, index: usize) -> Result<NodeId, MutationError> {
    let children = exists(tree, parent)?
        .kind
        .children()
        .ok_or(TreeError::NotAContainer)?;
    children.get(index).copied().ok_or_else(|| {
        TreeError::IndexOutOfRange {
            index,
            len: children.len(),
        }
        .into()
    })
}

/// The payload of the decorator of `kind` in `id`'s chain, if present.
fn existing_decoration(
    tree: &ContentTree,
    id: NodeId,
    kind: DecoratorKind,
) -> Result<Option<Decoration>, MutationError> {
    for &at in &tree.decorated_structure(id)?[1..] {
        match &exists(tree, at)?.kind {
            NodeKind::StyledFont { style, .. } if kind == DecoratorKind::StyledFont => {
                return Ok(Some(Decoration::StyledFont(style.clone())));
            }
            NodeKind::BoxMargin { margins, .. } if kind == DecoratorKind::BoxMargin => {
                return Ok(Some(Decoration::BoxMargin(margins.clone())));
            }
            _ => {}
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use resumark_document::FontStyle;

    fn tree_with_line() -> (ContentTree, NodeId) {
        let mut tree = ContentTree::default();
        let line = tree.alloc(NodeKind::text_line());
        tree.insert(tree.root(), line, None).unwrap();
        for value in ["a", "b"] {
            let id = tree.alloc(NodeKind::text(value));
            tree.insert(line, id, None).unwrap();
        }
        (tree, line)
    }

    fn text_doc(value: &str) -> NodeDoc {
        NodeDoc::TextElement {
            status: 1,
            label: None,
            value: value.to_string(),
        }
    }

    #[test]
    fn insert_then_inverse_restores_shape() {
        let (mut tree, line) = tree_with_line();
        let before = tree.to_doc().unwrap();

        let mutation = Mutation::InsertNode {
            parent: line,
            index: None,
            node: text_doc("c"),
        };
        let inverse = mutation.to_inverse(&tree).unwrap();
        mutation.apply(&mut tree).unwrap();
        assert_ne!(tree.to_doc().unwrap(), before);

        inverse.apply(&mut tree).unwrap();
        assert_eq!(tree.to_doc().unwrap(), before);
    }

    #[test]
    fn remove_inverse_carries_the_subtree() {
        let (mut tree, line) = tree_with_line();
        let before = tree.to_doc().unwrap();

        let mutation = Mutation::RemoveAt {
            parent: line,
            index: 0,
        };
        let inverse = mutation.to_inverse(&tree).unwrap();
        mutation.apply(&mut tree).unwrap();

        match &inverse {
            Mutation::InsertNode { node, .. } => assert_eq!(node, &text_doc("a")),
            other => panic!("expected InsertNode inverse, got {other:?}"),
        }
        inverse.apply(&mut tree).unwrap();
        assert_eq!(tree.to_doc().unwrap(), before);
    }

    #[test]
    fn validate_rejects_bad_indices_without_mutating() {
        let (mut tree, line) = tree_with_line();
        let before = tree.to_doc().unwrap();

        let mutation = Mutation::SwapChildren {
            parent: line,
            a: 0,
            b: 5,
        };
        assert_eq!(
            mutation.apply(&mut tree),
            Err(TreeError::IndexOutOfRange { index: 5, len: 2 }.into())
        );
        assert_eq!(tree.to_doc().unwrap(), before);
    }

    #[test]
    fn decorate_inverse_depends_on_chain_state() {
        let (mut tree, line) = tree_with_line();
        let target = child_at(&tree, line, 0).unwrap();

        let first = Mutation::Decorate {
            node: target,
            decoration: Decoration::StyledFont(FontStyle::bold()),
        };
        assert_eq!(
            first.to_inverse(&tree).unwrap(),
            Mutation::Undecorate {
                node: target,
                kind: DecoratorKind::StyledFont,
            }
        );
        first.apply(&mut tree).unwrap();

        // A second decorate of the same kind replaces; its inverse restores
        // the previous payload.
        let second = Mutation::Decorate {
            node: target,
            decoration: Decoration::StyledFont(FontStyle::default()),
        };
        assert_eq!(
            second.to_inverse(&tree).unwrap(),
            Mutation::Decorate {
                node: target,
                decoration: Decoration::StyledFont(FontStyle::bold()),
            }
        );
    }

    #[test]
    fn undecorate_missing_kind_fails_validation() {
        let (tree, line) = tree_with_line();
        let target = child_at(&tree, line, 0).unwrap();
        let mutation = Mutation::Undecorate {
            node: target,
            kind: DecoratorKind::BoxMargin,
        };
        assert_eq!(
            mutation.validate(&tree),
            Err(TreeError::DecoratorNotFound(DecoratorKind::BoxMargin).into())
        );
    }

    #[test]
    fn update_text_rejects_non_text_nodes() {
        let (mut tree, line) = tree_with_line();
        let mutation = Mutation::UpdateText {
            node: line,
            value: "x".to_string(),
        };
        assert_eq!(
            mutation.apply(&mut tree),
            Err(MutationError::UnknownAttribute {
                name: "value".to_string()
            })
        );
    }

    #[test]
    fn mutations_round_trip_through_json() {
        let (tree, line) = tree_with_line();
        let target = child_at(&tree, line, 1).unwrap();
        let mutation = Mutation::SetAttribute {
            node: target,
            name: "value".to_string(),
            value: "updated".to_string(),
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let parsed: Mutation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, mutation);
    }
}

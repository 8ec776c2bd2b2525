//! Error types for the content tree and its serialized form.

use thiserror::Error;

use crate::node::DecoratorKind;
use crate::tree::NodeId;

/// Structural errors raised by tree operations.
///
/// None of these are swallowed inside the model; the embedding editor decides
/// user-facing recovery.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeError {
    #[error("node {0:?} does not exist in this tree")]
    NodeNotFound(NodeId),

    #[error("node is not a container")]
    NotAContainer,

    #[error("node is not a text element")]
    NotAText,

    #[error("child not found under the given parent")]
    ChildNotFound,

    #[error("index {index} out of range ({len} children)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("node is already attached to a parent")]
    AlreadyAttached,

    #[error("node is still attached; detach it first")]
    StillAttached,

    #[error("insertion would create a cycle")]
    CycleDetected,

    #[error("no {0:?} decorator above this node")]
    DecoratorNotFound(DecoratorKind),

    #[error("detaching would leave a decorator without a component")]
    WouldOrphanDecorator,
}

/// Errors raised while decoding the serialized document form.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("serialized node is missing its type tag")]
    MissingTypeTag,

    #[error("unknown node type tag: {0}")]
    UnknownTypeTag(String),

    #[error("malformed node document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Tree(#[from] TreeError),
}

//! # Resumark Editor
//!
//! Mutation layer over the content tree: validated, invertible edit
//! operations plus undo/redo history.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: ContentTree (source of truth)     │
//! └─────────────────────────────────────────────┘
//!                     ↑
//! ┌─────────────────────────────────────────────┐
//! │ editor: Mutation + UndoStack                │
//! │  - Validate before mutating                 │
//! │  - Capture inverses for undo                │
//! │  - Batch user gestures into undo steps      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use resumark_document::{ContentTree, NodeDoc};
//! use resumark_editor::{Mutation, UndoStack};
//!
//! let mut tree = ContentTree::default();
//! let mut history = UndoStack::new();
//!
//! let mutation = Mutation::InsertNode {
//!     parent: tree.root(),
//!     index: None,
//!     node: NodeDoc::TextElement {
//!         status: 1,
//!         label: None,
//!         value: "hello".to_string(),
//!     },
//! };
//! history.apply(&mutation, &mut tree).unwrap();
//! history.undo(&mut tree).unwrap();
//! ```

pub mod attributes;
pub mod mutations;
pub mod undo_stack;

pub use attributes::{get_attribute, set_attribute};
pub use mutations::{Mutation, MutationError};
pub use undo_stack::{MutationBatch, UndoStack};

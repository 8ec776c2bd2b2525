//! # Resumark Document Model
//!
//! The mutable content tree a résumé is edited as, plus its serialized form.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: ContentTree + NodeDoc             │
//! │  - Arena-backed composite tree              │
//! │  - Decorator chains (StyledFont, BoxMargin) │
//! │  - JSON round-trip with a closed type table │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ render: tree → HTML / Markdown hybrid       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The tree is source of truth**: rendered output is a derived view
//! 2. **Identity over equality**: operations address nodes by `NodeId`
//! 3. **Status never deletes**: disabled nodes stay in the tree and the file
//! 4. **Closed type registry**: unknown serialized tags are fatal, not skipped

pub mod doc;
pub mod error;
pub mod node;
pub mod tree;

pub use doc::{NodeDoc, NODE_TYPES};
pub use error::{DocumentError, TreeError};
pub use node::{
    Decoration, DecoratorKind, FontStyle, Margins, Node, NodeKind, Status, DECORATORS,
};
pub use tree::{ContentTree, NodeId, PreOrder};

use thiserror::Error;

use resumark_document::TreeError;

/// Errors that can occur while rendering a content tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// A header's `level` did not parse as a positive integer. There is no
    /// sensible fallback for a heading level, so this surfaces to the caller
    /// instead of being papered over.
    #[error("header level {0:?} is not a positive integer")]
    MalformedLevel(String),

    #[error(transparent)]
    Tree(#[from] TreeError),
}

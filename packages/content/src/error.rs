use thiserror::Error;

use resumark_document::{DocumentError, TreeError};
use resumark_editor::MutationError;
use resumark_render::RenderError;

/// Errors surfaced by the résumé handle and its store.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Mutation(#[from] MutationError),
}

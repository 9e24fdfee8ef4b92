//! Error type for notebook mutations.

use thiserror::Error;

use crate::domain::{ParseCategoryError, ParseTagError};
use crate::store::StoreError;

/// Errors surfaced by repository and notebook operations.
///
/// Operations on unknown ids are not errors; they are silent no-ops.
#[derive(Debug, Error)]
pub enum NotebookError {
    /// A tag with the same name (ignoring case) already exists somewhere.
    #[error("tag '{name}' already exists (as '{existing}')")]
    DuplicateTag { name: String, existing: String },

    #[error(transparent)]
    InvalidTag(#[from] ParseTagError),

    #[error(transparent)]
    InvalidCategory(#[from] ParseCategoryError),

    #[error("failed to persist notebook: {0}")]
    Store(#[from] StoreError),
}

/// Result type for notebook operations.
pub type NotebookResult<T> = Result<T, NotebookError>;

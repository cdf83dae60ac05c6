//! Error types for task and completion store operations.

use crate::entities::task::TaskId;

/// Errors returned by [`TaskStore`](crate::stores::TaskStore) and
/// [`CompletionStore`](crate::stores::CompletionStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Task not found: {0}")]
    NotFound(TaskId),

    #[error("Invalid data: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] sea_orm::DbErr),
}

impl StoreError {
    /// Returns `true` if the referenced task does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }

    /// Returns `true` if the input was rejected before touching the database.
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }
}

/// Result alias used by the stores and repositories.
pub type Result<T> = std::result::Result<T, StoreError>;

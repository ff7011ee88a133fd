//! Driven port for comment persistence.

use async_trait::async_trait;

use crate::domain::Comment;

use super::RecordStoreError;

/// Whole-collection access to recorded comments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Load every comment in insertion order; empty when nothing was saved.
    async fn load_all(&self) -> Result<Vec<Comment>, RecordStoreError>;

    /// Replace the persisted collection with `comments`.
    async fn replace_all(&self, comments: Vec<Comment>) -> Result<(), RecordStoreError>;
}

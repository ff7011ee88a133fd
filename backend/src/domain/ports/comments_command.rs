//! Driving port for recording comments.

use async_trait::async_trait;

use crate::domain::Error;

/// Domain use-case port for appending to the comment log.
#[async_trait]
pub trait CommentsCommand: Send + Sync {
    /// Append a comment stamped with the current time.
    async fn add_comment(&self, email: String, comment: String) -> Result<(), Error>;
}

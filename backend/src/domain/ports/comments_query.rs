//! Driving port for reading the comment log.

use async_trait::async_trait;

use crate::domain::{Comment, Error};

/// Domain use-case port for listing comments.
#[async_trait]
pub trait CommentsQuery: Send + Sync {
    /// Every comment ever recorded, in submission order.
    async fn list_comments(&self) -> Result<Vec<Comment>, Error>;
}

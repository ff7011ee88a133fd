//! Append-only comment log service.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::domain::ports::{CommentRepository, CommentsCommand, CommentsQuery, RecordStoreError};
use crate::domain::{Comment, Error};

/// Comment log implementing the comment driving ports.
///
/// Appends rewrite the whole collection; the mutex keeps concurrent appends in
/// this process from dropping each other.
pub struct CommentLog<R> {
    comments: Arc<R>,
    clock: Arc<dyn Clock>,
    write_lock: Mutex<()>,
}

impl<R> CommentLog<R> {
    /// Create a comment log over the given repository and clock.
    pub fn new(comments: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            comments,
            clock,
            write_lock: Mutex::new(()),
        }
    }
}

fn map_store_error(err: RecordStoreError) -> Error {
    error!(error = %err, "comment store failure");
    Error::internal(format!("comment store failure: {err}"))
}

#[async_trait]
impl<R> CommentsCommand for CommentLog<R>
where
    R: CommentRepository,
{
    async fn add_comment(&self, email: String, comment: String) -> Result<(), Error> {
        let _guard = self.write_lock.lock().await;
        let mut comments = self.comments.load_all().await.map_err(map_store_error)?;
        comments.push(Comment {
            email,
            comment,
            timestamp: self.clock.utc().timestamp(),
        });
        let total = comments.len();
        self.comments
            .replace_all(comments)
            .await
            .map_err(map_store_error)?;
        info!(total, "comment recorded");
        Ok(())
    }
}

#[async_trait]
impl<R> CommentsQuery for CommentLog<R>
where
    R: CommentRepository,
{
    async fn list_comments(&self) -> Result<Vec<Comment>, Error> {
        self.comments.load_all().await.map_err(map_store_error)
    }
}

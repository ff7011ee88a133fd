//! `comments.json` adapter for [`CommentRepository`].

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::Comment;
use crate::domain::ports::{CommentRepository, RecordStoreError};

use super::{JsonDocument, blocking};

/// Comments persisted as a bare JSON array.
///
/// Unlike the accounts document, a missing file reads as empty and is left
/// uncreated until the first comment is saved.
#[derive(Debug, Clone)]
pub struct JsonCommentRepository {
    document: Arc<JsonDocument>,
}

impl JsonCommentRepository {
    /// Bind the repository to `file_name` inside `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Io`] when the data directory cannot be
    /// opened.
    pub fn open(data_dir: &Path, file_name: &str) -> Result<Self, RecordStoreError> {
        JsonDocument::open(data_dir, file_name).map(|document| Self {
            document: Arc::new(document),
        })
    }
}

#[async_trait]
impl CommentRepository for JsonCommentRepository {
    async fn load_all(&self) -> Result<Vec<Comment>, RecordStoreError> {
        blocking(&self.document, |document| {
            document
                .read::<Vec<Comment>>()
                .map(Option::unwrap_or_default)
        })
        .await
    }

    async fn replace_all(&self, comments: Vec<Comment>) -> Result<(), RecordStoreError> {
        blocking(&self.document, move |document| document.write(&comments)).await
    }
}

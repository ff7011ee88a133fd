//! `users.json` adapter for [`AccountRepository`].

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::Account;
use crate::domain::ports::{AccountRepository, RecordStoreError};

use super::{JsonDocument, blocking};

/// On-disk shape of the accounts document: `{"users": [...]}`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct UsersDocument {
    users: Vec<Account>,
}

/// Accounts persisted as a single JSON document.
///
/// A missing document is created as `{"users": []}` on first load.
#[derive(Debug, Clone)]
pub struct JsonAccountRepository {
    document: Arc<JsonDocument>,
}

impl JsonAccountRepository {
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

fn load_or_initialise(document: &JsonDocument) -> Result<Vec<Account>, RecordStoreError> {
    if let Some(UsersDocument { users }) = document.read()? {
        return Ok(users);
    }
    if document.create(&UsersDocument::default())? {
        info!(path = %document.display_path(), "initialised empty accounts document");
        return Ok(Vec::new());
    }
    // A concurrent save created the document between the read and the create.
    Ok(document
        .read::<UsersDocument>()?
        .map_or_else(Vec::new, |UsersDocument { users }| users))
}

#[async_trait]
impl AccountRepository for JsonAccountRepository {
    async fn load_all(&self) -> Result<Vec<Account>, RecordStoreError> {
        blocking(&self.document, load_or_initialise).await
    }

    async fn replace_all(&self, accounts: Vec<Account>) -> Result<(), RecordStoreError> {
        blocking(&self.document, move |document| {
            document.write(&UsersDocument { users: accounts })
        })
        .await
    }
}

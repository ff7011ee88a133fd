//! Driven port for account persistence.
//!
//! The registry only ever reads the whole collection and writes it back, so
//! the port exposes exactly that pair. Adapters may be a JSON document, an
//! embedded database or an in-memory double.

use async_trait::async_trait;

use crate::domain::Account;

use super::RecordStoreError;

/// Whole-collection access to registered accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Load every account in insertion order.
    ///
    /// A store that has never been written returns an empty collection.
    async fn load_all(&self) -> Result<Vec<Account>, RecordStoreError>;

    /// Replace the persisted collection with `accounts`.
    async fn replace_all(&self, accounts: Vec<Account>) -> Result<(), RecordStoreError>;
}

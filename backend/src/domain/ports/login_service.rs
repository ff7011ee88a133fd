//! Driving port for login/authentication use-cases.
//!
//! Inbound adapters call it to check credentials without knowing which store
//! backs the accounts.

use async_trait::async_trait;

use crate::domain::{AuthenticatedAccount, Error, LoginCredentials};

/// Why a login attempt failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginError {
    /// No account has the submitted email.
    #[error("User not found")]
    UserNotFound,
    /// The account exists but the password differs.
    #[error("Invalid password")]
    InvalidPassword,
    /// The account store failed.
    #[error(transparent)]
    Internal(#[from] Error),
}

/// Domain use-case port for authentication.
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Check credentials and return the account's role and wallet.
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<AuthenticatedAccount, LoginError>;
}

//! Driving port for account registration.

use async_trait::async_trait;

use crate::domain::{Error, Registration, Role};

/// Why a registration was refused.
///
/// The `Display` output of the rejection variants is the message returned to
/// clients.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistrationError {
    /// An account with the same email already exists.
    #[error("User already exists")]
    DuplicateEmail,
    /// The wallet already backs an account with the requested role.
    #[error("This wallet already has a {role} account")]
    DuplicateWalletRole {
        /// Role that is already taken for the wallet.
        role: Role,
    },
    /// The requested role is neither `admin` nor `employee`.
    #[error("Invalid role")]
    InvalidRole,
    /// The account store failed; nothing was registered.
    #[error(transparent)]
    Internal(#[from] Error),
}

/// Domain use-case port for creating accounts.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Validate and persist a new account.
    async fn register(&self, registration: Registration) -> Result<(), RegistrationError>;
}

//! Account data model and the registration/login value types.
//!
//! Emails and wallets are opaque strings compared exactly: no trimming and no
//! case folding, so `A@x.com` and `a@x.com` are distinct accounts.
//!
//! Passwords are stored and compared in plaintext. This is a known defect of
//! the account format and is kept so existing `users.json` documents stay
//! readable; see [`Account::password_matches`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use zeroize::Zeroizing;

/// Raised when a role string is neither `admin` nor `employee`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised role: {value}")]
pub struct RoleParseError {
    value: String,
}

/// Closed set of account roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Administrator allowed on the admin screens.
    Admin,
    /// Employee whose attendance is tracked.
    Employee,
}

impl Role {
    /// Wire representation of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Employee => "employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "employee" => Ok(Self::Employee),
            other => Err(RoleParseError {
                value: other.to_owned(),
            }),
        }
    }
}

/// Registered account as persisted in the accounts store.
///
/// ## Invariants
/// Enforced by the registry, not by this type:
/// - `email` is unique across all accounts.
/// - the `(wallet, role)` pair is unique across all accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    email: String,
    password: String,
    role: Role,
    wallet: String,
}

impl Account {
    /// Build an account from its components.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
        wallet: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            role,
            wallet: wallet.into(),
        }
    }

    /// Login identity.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Account role.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Wallet address bound to the account.
    #[must_use]
    pub fn wallet(&self) -> &str {
        self.wallet.as_str()
    }

    /// Exact, case-sensitive comparison against the stored plaintext password.
    #[must_use]
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    /// Whether this account already owns `wallet` under `role`.
    ///
    /// `role` is the caller's raw input so the check can run before the role
    /// has been validated.
    #[must_use]
    pub fn holds_wallet_as(&self, wallet: &str, role: &str) -> bool {
        self.wallet == wallet && self.role.as_str() == role
    }
}

/// Registration request as submitted by a client.
///
/// The role stays a raw string: duplicate checks run before it is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    email: String,
    password: Zeroizing<String>,
    role: String,
    wallet: String,
}

impl Registration {
    /// Capture the submitted fields verbatim.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
        wallet: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
            role: role.into(),
            wallet: wallet.into(),
        }
    }

    /// Requested login identity.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Requested role, unvalidated.
    #[must_use]
    pub fn role(&self) -> &str {
        self.role.as_str()
    }

    /// Requested wallet address.
    #[must_use]
    pub fn wallet(&self) -> &str {
        self.wallet.as_str()
    }

    /// Turn the request into a storable account once `role` has been parsed.
    #[must_use]
    pub fn into_account(self, role: Role) -> Account {
        Account::new(self.email, self.password.as_str(), role, self.wallet)
    }
}

/// Credentials submitted to the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Capture credentials verbatim; no normalisation is applied.
    ///
    /// # Examples
    /// ```
    /// use attendance_backend::domain::LoginCredentials;
    ///
    /// let creds = LoginCredentials::new("a@x.com", "pw1");
    /// assert_eq!(creds.email(), "a@x.com");
    /// assert_eq!(creds.password(), "pw1");
    /// ```
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Email used for the account lookup.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password provided by the caller.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAccount {
    /// Role stored for the account.
    pub role: Role,
    /// Wallet stored for the account.
    pub wallet: String,
}

/// Projection of an employee account for the admin screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EmployeeSummary {
    /// Employee login identity.
    pub email: String,
    /// Employee wallet address.
    pub wallet: String,
}

impl From<&Account> for EmployeeSummary {
    fn from(account: &Account) -> Self {
        Self {
            email: account.email.clone(),
            wallet: account.wallet.clone(),
        }
    }
}

//! Domain primitives, services and ports.
//!
//! Purpose: define the account, challenge and comment types, the services
//! that enforce their rules, and the ports that keep those services
//! independent of HTTP and of the storage format.
//!
//! Public surface:
//! - `Account`, `Role`, `Registration`, `LoginCredentials`: account model.
//! - `AccountRegistry`: registration, login and employee listing.
//! - `ChallengeIssuer`: the shared expiring QR challenge.
//! - `CommentLog`: append-only comment log.
//! - `Error`, `ErrorCode`: transport-agnostic failure payload.
//! - `TraceId`: request correlation identifier.

pub mod account;
pub mod account_registry;
pub mod challenge;
pub mod comment;
pub mod comment_log;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::account::{
    Account, AuthenticatedAccount, EmployeeSummary, LoginCredentials, Registration, Role,
    RoleParseError,
};
pub use self::account_registry::AccountRegistry;
pub use self::challenge::{Challenge, ChallengeIssuer, DEFAULT_CHALLENGE_TTL};
pub use self::comment::Comment;
pub use self::comment_log::CommentLog;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

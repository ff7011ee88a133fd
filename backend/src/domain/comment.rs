//! Free-text comments tagged with an email address.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A recorded comment.
///
/// `email` is not checked against the account registry and may name an
/// account that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    /// Author email as submitted.
    pub email: String,
    /// Comment body as submitted.
    pub comment: String,
    /// Submission time in whole Unix seconds.
    pub timestamp: i64,
}

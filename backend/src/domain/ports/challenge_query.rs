//! Driving port exposing the current QR challenge.

use crate::domain::Challenge;

/// Read access to the shared challenge.
pub trait ChallengeQuery: Send + Sync {
    /// A challenge that has not yet expired.
    fn current_challenge(&self) -> Challenge;
}

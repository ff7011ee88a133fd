//! Shared, time-boxed challenge displayed as a QR code on the admin screen.
//!
//! One challenge exists per process. Every reader sees the same token until it
//! expires; the first read at or after expiry rotates it inline. Tokens are
//! only issued here, nothing verifies a client's answer to them.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use mockable::Clock;
use sha2::{Digest, Sha256};
use tracing::info;
use uuid::Uuid;

use crate::domain::ports::ChallengeQuery;

/// Lifetime of a challenge unless configured otherwise.
pub const DEFAULT_CHALLENGE_TTL: Duration = Duration::from_secs(60);

/// Opaque token and its absolute expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    token: String,
    expires_at: i64,
}

impl Challenge {
    /// Lowercase hex SHA-256 digest, 64 characters long.
    #[must_use]
    pub fn token(&self) -> &str {
        self.token.as_str()
    }

    /// Expiry as whole Unix seconds.
    #[must_use]
    pub fn expires_at(&self) -> i64 {
        self.expires_at
    }

    /// A challenge is expired once `now` reaches `expires_at`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.expires_at
    }
}

/// Issues and lazily rotates the process-wide challenge.
///
/// The current value sits behind a mutex, so concurrent readers that observe
/// expiry rotate it exactly once.
pub struct ChallengeIssuer {
    clock: Arc<dyn Clock>,
    ttl_secs: i64,
    current: Mutex<Challenge>,
}

impl ChallengeIssuer {
    /// Create the issuer and generate the first challenge immediately.
    pub fn new(clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        let ttl_secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
        let first = issue(clock.utc(), ttl_secs);
        Self {
            clock,
            ttl_secs,
            current: Mutex::new(first),
        }
    }

    /// Return a currently valid challenge, rotating it if it has expired.
    pub fn current(&self) -> Challenge {
        let now = self.clock.utc();
        let mut guard = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if guard.is_expired_at(now) {
            *guard = issue(now, self.ttl_secs);
            info!(expires_at = guard.expires_at, "challenge rotated");
        }
        guard.clone()
    }
}

impl ChallengeQuery for ChallengeIssuer {
    fn current_challenge(&self) -> Challenge {
        self.current()
    }
}

fn issue(now: DateTime<Utc>, ttl_secs: i64) -> Challenge {
    let seed = format!(
        "{}{}.{:06}",
        Uuid::new_v4(),
        now.timestamp(),
        now.timestamp_subsec_micros()
    );
    let digest = Sha256::digest(seed.as_bytes());
    Challenge {
        token: hex::encode(digest),
        expires_at: now.timestamp().saturating_add(ttl_secs),
    }
}

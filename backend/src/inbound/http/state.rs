//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without the JSON store.

use std::sync::Arc;
use std::time::Duration;

use mockable::Clock;

use crate::domain::ports::{
    AccountRepository, ChallengeQuery, CommentRepository, CommentsCommand, CommentsQuery,
    EmployeesQuery, LoginService, RegistrationService,
};
use crate::domain::{AccountRegistry, ChallengeIssuer, CommentLog};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registration: Arc<dyn RegistrationService>,
    pub login: Arc<dyn LoginService>,
    pub employees: Arc<dyn EmployeesQuery>,
    pub challenge: Arc<dyn ChallengeQuery>,
    pub comments: Arc<dyn CommentsCommand>,
    pub comments_query: Arc<dyn CommentsQuery>,
}

impl HttpState {
    /// Wire the domain services over the given repositories.
    ///
    /// One [`AccountRegistry`] backs registration, login and the employee
    /// listing so they share its write lock.
    pub fn from_repositories<A, C>(
        accounts: Arc<A>,
        comments: Arc<C>,
        clock: Arc<dyn Clock>,
        challenge_ttl: Duration,
    ) -> Self
    where
        A: AccountRepository + 'static,
        C: CommentRepository + 'static,
    {
        let registry = Arc::new(AccountRegistry::new(accounts));
        let comment_log = Arc::new(CommentLog::new(comments, Arc::clone(&clock)));
        Self {
            registration: registry.clone(),
            login: registry.clone(),
            employees: registry,
            challenge: Arc::new(ChallengeIssuer::new(clock, challenge_ttl)),
            comments: comment_log.clone(),
            comments_query: comment_log,
        }
    }
}

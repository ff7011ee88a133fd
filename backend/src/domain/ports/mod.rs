//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters; driving
//! ports are implemented by the domain services and called by inbound
//! adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod account_repository;
mod challenge_query;
mod comment_repository;
mod comments_command;
mod comments_query;
mod employees_query;
mod login_service;
mod record_store_error;
mod registration_service;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
pub use account_repository::AccountRepository;
pub use challenge_query::ChallengeQuery;
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
pub use comment_repository::CommentRepository;
pub use comments_command::CommentsCommand;
pub use comments_query::CommentsQuery;
pub use employees_query::EmployeesQuery;
pub use login_service::{LoginError, LoginService};
pub use record_store_error::RecordStoreError;
pub use registration_service::{RegistrationError, RegistrationService};

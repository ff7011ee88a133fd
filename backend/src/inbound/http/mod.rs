//! HTTP inbound adapter exposing the attendance endpoints.

pub mod accounts;
pub mod challenge;
pub mod comments;
pub mod error;
pub mod health;
pub mod reply;
pub mod state;
#[cfg(test)]
pub mod test_utils;

use actix_web::web;

pub use error::{ApiResult, json_error_handler};

/// Mount every attendance endpoint at the root path.
///
/// Expects [`state::HttpState`] to be registered as app data. Health probes
/// are mounted separately because they carry their own state.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(accounts::register)
        .service(accounts::login)
        .service(accounts::list_employees)
        .service(challenge::current_challenge)
        .service(comments::add_comment)
        .service(comments::list_comments);
}

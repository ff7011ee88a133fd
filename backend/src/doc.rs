//! OpenAPI documentation for the attendance HTTP surface.
//!
//! The generated document is served by Swagger UI in debug builds and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::domain::{Comment, EmployeeSummary, Error, ErrorCode, Role};
use crate::inbound::http::accounts::{LoginReply, LoginRequest, RegisterRequest};
use crate::inbound::http::challenge::ChallengeReply;
use crate::inbound::http::comments::CommentRequest;
use crate::inbound::http::reply::{ErrorReply, MessageReply};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance backend API",
        description = "Account registration, login, QR challenges and comments for the attendance tracker."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::accounts::register,
        crate::inbound::http::accounts::login,
        crate::inbound::http::accounts::list_employees,
        crate::inbound::http::challenge::current_challenge,
        crate::inbound::http::comments::add_comment,
        crate::inbound::http::comments::list_comments,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        RegisterRequest,
        LoginRequest,
        LoginReply,
        CommentRequest,
        ChallengeReply,
        MessageReply,
        ErrorReply,
        EmployeeSummary,
        Comment,
        Role,
        Error,
        ErrorCode
    )),
    tags(
        (name = "accounts", description = "Registration and login"),
        (name = "admin", description = "Admin screen listings"),
        (name = "challenge", description = "Shared QR challenge"),
        (name = "comments", description = "Comment submission"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

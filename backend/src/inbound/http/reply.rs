//! JSON bodies shared by the attendance endpoints.
//!
//! Rejected requests are answered with `200 OK` and an [`ErrorReply`] so the
//! browser client can branch on the presence of `error`.

use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{"message": ...}` acknowledgement.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageReply {
    #[schema(example = "User registered successfully")]
    pub message: String,
}

/// `{"error": ...}` rejection of a well-formed request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorReply {
    #[schema(example = "User already exists")]
    pub error: String,
}

pub(crate) fn acknowledged(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(MessageReply {
        message: message.to_owned(),
    })
}

pub(crate) fn rejected(error: impl ToString) -> HttpResponse {
    HttpResponse::Ok().json(ErrorReply {
        error: error.to_string(),
    })
}

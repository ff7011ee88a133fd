//! QR challenge endpoint.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Challenge;
use crate::inbound::http::state::HttpState;

/// `GET /challenge` payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChallengeReply {
    /// 64 lowercase hex characters.
    #[schema(example = "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08")]
    pub challenge: String,
    /// Expiry as whole Unix seconds.
    #[schema(example = 1_767_225_660)]
    pub expires: i64,
}

impl From<Challenge> for ChallengeReply {
    fn from(value: Challenge) -> Self {
        Self {
            challenge: value.token().to_owned(),
            expires: value.expires_at(),
        }
    }
}

/// Return the shared challenge, rotating it first if it has expired.
#[utoipa::path(
    get,
    path = "/challenge",
    responses((status = 200, description = "Current challenge", body = ChallengeReply)),
    tags = ["challenge"],
    operation_id = "getChallenge"
)]
#[get("/challenge")]
pub async fn current_challenge(state: web::Data<HttpState>) -> web::Json<ChallengeReply> {
    web::Json(state.challenge.current_challenge().into())
}

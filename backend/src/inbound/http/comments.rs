//! Comment endpoints.
//!
//! ```text
//! POST /comment {"email":"a@x.com","comment":"running late"}
//! GET /admin/comments
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Comment, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::reply::{MessageReply, acknowledged};
use crate::inbound::http::state::HttpState;

/// Comment submission body for `POST /comment`.
#[derive(Deserialize, Serialize, ToSchema)]
pub struct CommentRequest {
    /// Not checked against registered accounts.
    pub email: String,
    pub comment: String,
}

/// Record a comment stamped with the server time.
#[utoipa::path(
    post,
    path = "/comment",
    request_body = CommentRequest,
    responses(
        (status = 200, description = "Comment saved", body = MessageReply),
        (status = 400, description = "Malformed body", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["comments"],
    operation_id = "addComment"
)]
#[post("/comment")]
pub async fn add_comment(
    state: web::Data<HttpState>,
    payload: web::Json<CommentRequest>,
) -> ApiResult<HttpResponse> {
    let CommentRequest { email, comment } = payload.into_inner();
    state.comments.add_comment(email, comment).await?;
    Ok(acknowledged("Comment saved"))
}

/// List every recorded comment.
#[utoipa::path(
    get,
    path = "/admin/comments",
    responses(
        (status = 200, description = "Comments in submission order", body = [Comment]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "listComments"
)]
#[get("/admin/comments")]
pub async fn list_comments(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Comment>>> {
    state.comments_query.list_comments().await.map(web::Json)
}

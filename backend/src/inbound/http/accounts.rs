//! Account endpoints.
//!
//! ```text
//! POST /register {"email":"a@x.com","password":"pw","role":"employee","wallet":"G..."}
//! POST /login {"email":"a@x.com","password":"pw"}
//! GET /admin/employees
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{LoginError, RegistrationError};
use crate::domain::{EmployeeSummary, Error, LoginCredentials, Registration, Role};
use crate::inbound::http::ApiResult;
use crate::inbound::http::reply::{MessageReply, acknowledged, rejected};
use crate::inbound::http::state::HttpState;

/// Registration request body for `POST /register`.
#[derive(Deserialize, Serialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub password: String,
    /// `admin` or `employee`; anything else is rejected with `Invalid role`.
    #[schema(example = "employee")]
    pub role: String,
    #[schema(example = "GBRPYHIL2CI3FNQ4BXLFMNDLFJUNPU2HY3ZMFSHONUCEOASW7QC7OX2H")]
    pub wallet: String,
}

impl From<RegisterRequest> for Registration {
    fn from(value: RegisterRequest) -> Self {
        Self::new(value.email, value.password, value.role, value.wallet)
    }
}

/// Login request body for `POST /login`.
#[derive(Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub password: String,
}

impl From<LoginRequest> for LoginCredentials {
    fn from(value: LoginRequest) -> Self {
        Self::new(value.email, value.password)
    }
}

/// Successful login payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginReply {
    #[schema(example = "Login successful")]
    pub message: String,
    pub role: Role,
    pub registered_wallet: String,
}

/// Register a new account.
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Registered, or rejected with an `error` body", body = MessageReply),
        (status = 400, description = "Malformed body", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "register"
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let registration = Registration::from(payload.into_inner());
    match state.registration.register(registration).await {
        Ok(()) => Ok(acknowledged("User registered successfully")),
        Err(RegistrationError::Internal(err)) => Err(err),
        Err(rejection) => Ok(rejected(rejection)),
    }
}

/// Check credentials and return the account's role and wallet.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login outcome; failures carry an `error` body", body = LoginReply),
        (status = 400, description = "Malformed body", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials = LoginCredentials::from(payload.into_inner());
    match state.login.authenticate(&credentials).await {
        Ok(account) => Ok(HttpResponse::Ok().json(LoginReply {
            message: "Login successful".to_owned(),
            role: account.role,
            registered_wallet: account.wallet,
        })),
        Err(LoginError::Internal(err)) => Err(err),
        Err(rejection) => Ok(rejected(rejection)),
    }
}

/// List every employee account.
#[utoipa::path(
    get,
    path = "/admin/employees",
    responses(
        (status = 200, description = "Employees in registration order", body = [EmployeeSummary]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "listEmployees"
)]
#[get("/admin/employees")]
pub async fn list_employees(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<EmployeeSummary>>> {
    state.employees.list_employees().await.map(web::Json)
}

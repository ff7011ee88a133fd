//! Server construction and middleware wiring.

mod config;

pub use config::ServerSettings;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpResponse, HttpServer, web};
use mockable::{Clock, DefaultClock};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::Error;
use crate::inbound::http::{ApiResult, configure};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::outbound::json_store::{JsonAccountRepository, JsonCommentRepository};

/// Open the JSON stores named by `settings` and wire the domain services.
///
/// # Errors
///
/// Returns [`std::io::Error`] when the data directory cannot be opened.
pub fn build_http_state(settings: &ServerSettings) -> std::io::Result<HttpState> {
    let data_dir = settings.data_dir();
    let accounts = JsonAccountRepository::open(data_dir, settings.users_file())
        .map_err(std::io::Error::other)?;
    let comments = JsonCommentRepository::open(data_dir, settings.comments_file())
        .map_err(std::io::Error::other)?;
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    Ok(HttpState::from_repositories(
        Arc::new(accounts),
        Arc::new(comments),
        clock,
        settings.challenge_ttl(),
    ))
}

async fn unknown_route() -> ApiResult<HttpResponse> {
    Err(Error::not_found("Not found"))
}

/// Assemble the application: CORS, tracing, health probes and the
/// attendance routes.
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<EitherBody<BoxBody>>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Cors::permissive())
        .wrap(Trace)
        .service(ready)
        .service(live)
        .configure(configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.default_service(web::to(unknown_route))
}

/// Construct the Actix HTTP server from `settings`.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when the stores cannot be opened or the
/// socket cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    settings: &ServerSettings,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(settings)?);
    let bind_addr = settings.bind_addr()?;
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(
        %bind_addr,
        data_dir = %settings.data_dir().display(),
        "attendance server listening"
    );
    health_state.mark_ready();
    Ok(server)
}

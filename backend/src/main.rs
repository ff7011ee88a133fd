//! Backend entry-point: loads settings, opens the JSON stores and serves the
//! attendance API.

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use attendance_backend::inbound::http::health::HealthState;
use attendance_backend::server::{ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os().collect::<Vec<OsString>>())
        .map_err(|err| std::io::Error::other(format!("invalid configuration: {err}")))?;

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, &settings)?.await
}

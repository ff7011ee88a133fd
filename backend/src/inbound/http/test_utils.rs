//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use chrono::{TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use tempfile::TempDir;

use crate::Trace;
use crate::domain::DEFAULT_CHALLENGE_TTL;
use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;
use crate::outbound::json_store::{JsonAccountRepository, JsonCommentRepository};
use crate::test_support::MutableClock;

/// HTTP state over JSON stores in a throwaway directory.
pub struct TestContext {
    pub dir: TempDir,
    pub clock: Arc<MutableClock>,
    pub state: HttpState,
}

impl TestContext {
    /// Build an app with every attendance route mounted.
    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .wrap(Trace)
            .app_data(web::Data::new(self.state.clone()))
            .configure(configure)
    }

    /// Unix seconds at which the test clock started.
    pub fn start_secs(&self) -> i64 {
        start().timestamp()
    }

    pub fn accounts_file_absent(&self) -> bool {
        !self.dir.path().join("users.json").exists()
    }
}

fn start() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 5, 8, 30, 0)
        .single()
        .expect("valid start instant")
}

#[fixture]
pub fn context() -> TestContext {
    let dir = tempfile::tempdir().expect("temp dir");
    let clock = Arc::new(MutableClock::new(start()));
    let accounts = JsonAccountRepository::open(dir.path(), "users.json").expect("accounts store");
    let comments =
        JsonCommentRepository::open(dir.path(), "comments.json").expect("comments store");
    let state = HttpState::from_repositories(
        Arc::new(accounts),
        Arc::new(comments),
        clock.clone() as Arc<dyn Clock>,
        DEFAULT_CHALLENGE_TTL,
    );
    TestContext { dir, clock, state }
}

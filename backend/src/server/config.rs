//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, then `ATTENDANCE_*` environment variables,
//! then the defaults below.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::DEFAULT_CHALLENGE_TTL;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_USERS_FILE: &str = "users.json";
const DEFAULT_COMMENTS_FILE: &str = "comments.json";

/// Listener, storage and challenge settings for the attendance server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ATTENDANCE")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 8000)]
    pub port: u16,
    /// Directory holding the JSON documents.
    pub data_dir: Option<PathBuf>,
    /// Accounts document name inside `data_dir`.
    pub users_file: Option<String>,
    /// Comments document name inside `data_dir`.
    pub comments_file: Option<String>,
    /// Challenge lifetime in seconds.
    pub challenge_ttl_secs: Option<u64>,
}

impl ServerSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Resolve the listener address.
    ///
    /// # Errors
    ///
    /// Returns [`std::io::ErrorKind::InvalidInput`] when `host` is not an IP
    /// address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let host = self.host();
        host.parse()
            .map(|ip| SocketAddr::new(ip, self.port()))
            .map_err(|err| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("invalid bind host {host:?}: {err}"),
                )
            })
    }

    pub fn data_dir(&self) -> &Path {
        self.data_dir.as_deref().unwrap_or_else(|| Path::new("."))
    }

    pub fn users_file(&self) -> &str {
        self.users_file.as_deref().unwrap_or(DEFAULT_USERS_FILE)
    }

    pub fn comments_file(&self) -> &str {
        self.comments_file.as_deref().unwrap_or(DEFAULT_COMMENTS_FILE)
    }

    pub fn challenge_ttl(&self) -> Duration {
        self.challenge_ttl_secs
            .map_or(DEFAULT_CHALLENGE_TTL, Duration::from_secs)
    }
}

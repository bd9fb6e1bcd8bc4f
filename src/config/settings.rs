//! Environment-backed runtime settings.

use std::env;
use std::path::PathBuf;

use super::constants::{
    DEFAULT_JWT_EXPIRATION_HOURS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_UPLOADS_DIR,
    MIN_JWT_SECRET_LENGTH,
};

/// Runtime configuration for the workflow service.
#[derive(Clone)]
pub struct Config {
    jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub server_host: String,
    pub server_port: u16,
    /// Directory where uploaded paper PDFs are stored
    pub uploads_dir: PathBuf,
    /// Whether TPC members see author email addresses on submissions.
    /// ADMIN/CHAIR and the owning author always see them.
    pub expose_author_emails_to_tpc: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiration_hours", &self.jwt_expiration_hours)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("uploads_dir", &self.uploads_dir)
            .field(
                "expose_author_emails_to_tpc",
                &self.expose_author_emails_to_tpc,
            )
            .finish()
    }
}

impl Config {
    /// Read the configuration from the process environment (a `.env`
    /// file is honored when present).
    ///
    /// # Panics
    /// Panics when JWT_SECRET is absent in a release build, or shorter
    /// than [`MIN_JWT_SECRET_LENGTH`] in any build.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                tracing::warn!("JWT_SECRET is not set; using the insecure dev fallback");
                "paperflow-dev-only-jwt-secret-0123456789".to_string()
            } else {
                panic!("JWT_SECRET must be set in release builds");
            }
        });

        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            panic!("JWT_SECRET must be at least {} bytes", MIN_JWT_SECRET_LENGTH);
        }

        Self {
            jwt_secret,
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_JWT_EXPIRATION_HOURS),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            uploads_dir: env::var("UPLOADS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_UPLOADS_DIR)),
            expose_author_emails_to_tpc: env::var("TPC_SEES_AUTHOR_EMAILS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }

    /// Build a configuration for tests without touching the environment.
    pub fn for_tests(jwt_secret: impl Into<String>, uploads_dir: impl Into<PathBuf>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            jwt_expiration_hours: DEFAULT_JWT_EXPIRATION_HOURS,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            uploads_dir: uploads_dir.into(),
            expose_author_emails_to_tpc: true,
        }
    }

    /// Key material for signing and verifying tokens.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Bind address in `host:port` form.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

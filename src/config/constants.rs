//! Fixed values shared across the workflow service.

// =============================================================================
// Authentication
// =============================================================================

/// Hours a freshly issued JWT stays valid
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Shortest JWT secret accepted at startup
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Scheme prefix expected in the Authorization header
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

// =============================================================================
// Server
// =============================================================================

/// Bind address when SERVER_HOST is unset
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Listening port when SERVER_PORT is unset
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Paper Uploads
// =============================================================================

/// Where paper files land when UPLOADS_DIR is unset
pub const DEFAULT_UPLOADS_DIR: &str = "uploads";

/// Upper bound on an uploaded paper (16 MiB)
pub const MAX_PAPER_BYTES: usize = 16 * 1024 * 1024;

/// The only content type accepted for uploaded papers
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

// =============================================================================
// Accounts
// =============================================================================

/// Shortest password accepted for an account
pub const MIN_PASSWORD_LENGTH: u64 = 8;

//! Settings and constants.
//!
//! Environment-backed settings (JWT secret, bind address, uploads
//! directory, TPC email visibility) plus workflow-wide constants.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;

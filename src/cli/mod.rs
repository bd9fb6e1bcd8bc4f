//! Command-line interface: `serve` runs the HTTP server, `openapi`
//! prints the generated API document.

pub mod args;

pub use args::{Cli, Commands};

//! Entry points behind the CLI subcommands.

pub mod openapi;
pub mod serve;

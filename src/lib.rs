//! Paperflow - conference paper submission and review workflow service
//!
//! Authors submit papers to conferences, programme staff assign
//! reviewers and record decisions, and every submission moves through a
//! strict forward-only lifecycle: SUBMITTED, UNDER_REVIEW, DECIDED.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities, the status machine and the
//!   role-based authorization table
//! - **services**: Application use cases and business logic
//! - **infra**: Storage (in-memory stores, disk paper store)
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server and seed the first admin
//! cargo run -- serve --admin-email root@conf.org --admin-password 'change-me-please'
//!
//! # Print the OpenAPI document
//! cargo run -- openapi
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

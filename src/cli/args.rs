//! clap argument surface for the `paperflow` binary.

use clap::{Parser, Subcommand};

/// Paperflow - conference paper submission and review workflow service
#[derive(Parser, Debug)]
#[command(name = "paperflow")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Turn on debug-level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands the binary understands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),

    /// Print the OpenAPI document as JSON
    Openapi,
}

/// Flags accepted by `paperflow serve`
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address the server binds to
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "SERVER_HOST")]
    pub host: String,

    /// Port the server listens on
    #[arg(short, long, default_value = "3000", env = "SERVER_PORT")]
    pub port: u16,

    /// Email of the admin account seeded at startup.
    ///
    /// Accounts live in the server process, so the first ADMIN (who
    /// provisions everyone else) is created here rather than by a
    /// separate command.
    #[arg(long, env = "BOOTSTRAP_ADMIN_EMAIL", requires = "admin_password")]
    pub admin_email: Option<String>,

    /// Password of the seeded admin account
    #[arg(long, env = "BOOTSTRAP_ADMIN_PASSWORD", requires = "admin_email")]
    pub admin_password: Option<String>,

    /// Display name of the seeded admin account
    #[arg(long, env = "BOOTSTRAP_ADMIN_NAME", default_value = "Administrator")]
    pub admin_name: String,
}

//! Serve command - Starts the HTTP server.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::domain::{normalize_email, Password, Role, User};
use crate::errors::{AppError, AppResult};
use crate::infra::{UserRepository, UserStore};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    // Build application state with the bundled stores
    let (app_state, users) = AppState::from_config(config);

    // Seed the first ADMIN account when requested; CreateUser is
    // ADMIN-gated, so a fresh deployment needs this entry point
    if let (Some(email), Some(password)) = (&args.admin_email, &args.admin_password) {
        seed_admin(&users, email, password, &args.admin_name).await?;
    }

    // Build router
    let app = create_router(app_state);

    // Start server
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

/// Create the initial ADMIN account in the user store.
async fn seed_admin(
    users: &Arc<UserStore>,
    email: &str,
    password: &str,
    name: &str,
) -> AppResult<()> {
    let hash = Password::new(password)?.into_string();
    let admin = User::new(
        normalize_email(email),
        name.to_string(),
        hash,
        BTreeSet::from([Role::Admin]),
    );
    let admin = users.insert(admin).await?;

    tracing::info!(user_id = %admin.id, email = %admin.email, "admin account seeded");
    Ok(())
}

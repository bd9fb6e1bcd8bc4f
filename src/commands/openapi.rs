//! Openapi command - Prints the API document for client generation.

use utoipa::OpenApi;

use crate::api::ApiDoc;
use crate::errors::{AppError, AppResult};

/// Execute the openapi command
pub fn execute() -> AppResult<()> {
    let doc = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(|e| AppError::internal(format!("serializing OpenAPI document: {e}")))?;

    println!("{doc}");
    Ok(())
}

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::errors::AppError;
use crate::github::validate_username;
use crate::state::AppState;

/// GET /api/v1/github/:username
pub async fn handle_github_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Value>, AppError> {
    let username = validate_username(username.trim())?;
    let shaped = state.github.fetch_profile(username).await?;
    Ok(Json(shaped))
}

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::export::bundle::BUNDLE_FILE_NAME;
use crate::export::{build_bundle, render_html};
use crate::portfolio::models::Portfolio;
use crate::portfolio::parser::coerce_jsonish;
use crate::portfolio::pipeline::{build_portfolio, generate_portfolio, GenerateRequest};
use crate::portfolio::validation::{validate_portfolio_schema, SchemaValidationResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    /// Raw model text or an already-parsed JSON value.
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub portfolio: Option<Portfolio>,
    pub validation: SchemaValidationResult,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub portfolio: Value,
}

/// POST /api/v1/portfolio/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<Portfolio>, AppError> {
    let portfolio = generate_portfolio(&state.llm, state.github.as_ref(), &req).await?;
    Ok(Json(portfolio))
}

/// POST /api/v1/portfolio/normalize
pub async fn handle_normalize(Json(req): Json<NormalizeRequest>) -> Json<NormalizeResponse> {
    let parsed = coerce_jsonish(&req.data).unwrap_or(Value::Null);
    Json(NormalizeResponse {
        validation: validate_portfolio_schema(&parsed),
        portfolio: build_portfolio(&parsed),
    })
}

/// POST /api/v1/portfolio/preview
pub async fn handle_preview(Json(req): Json<ExportRequest>) -> Result<Html<String>, AppError> {
    let portfolio = exportable(&req.portfolio)?;
    Ok(Html(render_html(&portfolio, current_year())))
}

/// POST /api/v1/portfolio/export
pub async fn handle_export(Json(req): Json<ExportRequest>) -> Result<impl IntoResponse, AppError> {
    let portfolio = exportable(&req.portfolio)?;
    let bytes = build_bundle(&portfolio, current_year())?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{BUNDLE_FILE_NAME}\""),
            ),
        ],
        bytes,
    ))
}

fn exportable(raw: &Value) -> Result<Portfolio, AppError> {
    build_portfolio(raw).ok_or_else(|| {
        AppError::UnprocessableEntity("portfolio must be a JSON object or JSON text".to_string())
    })
}

fn current_year() -> i32 {
    chrono::Utc::now().year()
}

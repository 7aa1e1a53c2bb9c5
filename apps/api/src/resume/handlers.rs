use axum::{
    extract::{multipart::MultipartError, Multipart},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::resume::{extract_text, ExtractedText};

const FILE_FIELD: &str = "file";

/// POST /api/v1/resume/extract (multipart, field `file`)
pub async fn handle_extract(mut multipart: Multipart) -> Result<Json<ExtractedText>, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(multipart_error)?;

        let extracted = tokio::task::spawn_blocking(move || {
            extract_text(&file_name, content_type.as_deref(), &data)
        })
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))??;

        info!(
            "Extracted {} words from {:?} upload",
            extracted.word_count, extracted.kind
        );
        return Ok(Json(extracted));
    }

    Err(AppError::Validation(format!(
        "Missing multipart field '{FILE_FIELD}'"
    )))
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", e.body_text()))
    }
}

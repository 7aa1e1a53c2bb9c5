pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::github::handlers as github;
use crate::portfolio::handlers as portfolio;
use crate::resume::{handlers as resume, MAX_DOCUMENT_BYTES};
use crate::state::AppState;

/// Room for the multipart envelope around the largest accepted document.
const UPLOAD_BODY_LIMIT: usize = MAX_DOCUMENT_BYTES + 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resume/extract",
            post(resume::handle_extract).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route(
            "/api/v1/github/:username",
            get(github::handle_github_profile),
        )
        .route(
            "/api/v1/portfolio/generate",
            post(portfolio::handle_generate),
        )
        .route(
            "/api/v1/portfolio/normalize",
            post(portfolio::handle_normalize),
        )
        .route("/api/v1/portfolio/preview", post(portfolio::handle_preview))
        .route("/api/v1/portfolio/export", post(portfolio::handle_export))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::github::{GithubError, GithubFetcher};
    use crate::llm_client::LlmClient;

    struct CannedGithub;

    #[async_trait]
    impl GithubFetcher for CannedGithub {
        async fn fetch_profile(&self, username: &str) -> Result<Value, GithubError> {
            match username {
                "octo" => Ok(json!({
                    "github_profile_overview": {"username": "octo", "followers": 3},
                    "github_projects": [{"title": "cli", "repo_link": "https://github.com/octo/cli"}]
                })),
                other => Err(GithubError::NotFound(other.to_string())),
            }
        }
    }

    fn app() -> Router {
        build_router(AppState {
            llm: LlmClient::new("test-key".to_string()).unwrap(),
            github: Arc::new(CannedGithub),
        })
    }

    async fn post_json(uri: &str, body: Value) -> Response {
        app()
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn get_uri(uri: &str) -> Response {
        app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = get_uri("/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "folio-api");
    }

    #[tokio::test]
    async fn test_normalize_fenced_text() {
        let text = "Sure!\n```json\n{\"contact_information\": {\"name\": \"Ann\"}, \"projects\": [{\"title\": \"X\"}]}\n```";
        let response = post_json("/api/v1/portfolio/normalize", json!({ "data": text })).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["portfolio"]["contact_information"]["name"], "Ann");
        assert_eq!(body["portfolio"]["projects"][0]["title"], "X");
        assert_eq!(body["validation"]["passed"], true);
    }

    #[tokio::test]
    async fn test_normalize_garbage_returns_null_portfolio() {
        let response =
            post_json("/api/v1/portfolio/normalize", json!({ "data": "no json here" })).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["portfolio"].is_null());
        assert_eq!(body["validation"]["passed"], false);
        assert_eq!(body["validation"]["issues"][0]["field"], "$");
    }

    #[tokio::test]
    async fn test_preview_renders_html() {
        let response = post_json(
            "/api/v1/portfolio/preview",
            json!({ "portfolio": {"contact_information": {"name": "Ann <Dev>"}} }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Ann &lt;Dev&gt;"));
    }

    #[tokio::test]
    async fn test_export_returns_zip() {
        let response = post_json(
            "/api/v1/portfolio/export",
            json!({ "portfolio": {"contact_information": {"name": "Ann"}} }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/zip"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"portfolio.zip\""
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[tokio::test]
    async fn test_export_rejects_non_object() {
        let response = post_json("/api/v1/portfolio/export", json!({ "portfolio": 5 })).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_github_profile() {
        let response = get_uri("/api/v1/github/octo").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["github_profile_overview"]["username"], "octo");
    }

    #[tokio::test]
    async fn test_github_unknown_user_is_404() {
        let response = get_uri("/api/v1/github/ghost").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_github_invalid_username_is_400() {
        let response = get_uri("/api/v1/github/-bad-").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_generate_rejects_blank_resume() {
        let response = post_json(
            "/api/v1/portfolio/generate",
            json!({ "resume_text": "   ", "github_username": "octo" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_generate_fails_on_unknown_github_user_before_merge() {
        let response = post_json(
            "/api/v1/portfolio/generate",
            json!({ "resume_text": "Jane Doe, Rust engineer", "github_username": "ghost" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert!(body["error"]["message"].as_str().unwrap().contains("ghost"));
    }

    #[tokio::test]
    async fn test_extract_plain_text_upload() {
        let boundary = "folio-boundary";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"cv.txt\"\r\n\
             Content-Type: text/plain\r\n\r\n\
             Jane Doe\nRust engineer\r\n\
             --{boundary}--\r\n"
        );
        let response = app()
            .oneshot(
                Request::post("/api/v1/resume/extract")
                    .header(
                        header::CONTENT_TYPE,
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["text"], "Jane Doe\nRust engineer");
        assert_eq!(body["kind"], "plain_text");
        assert_eq!(body["word_count"], 4);
    }

    #[tokio::test]
    async fn test_extract_without_file_field_is_400() {
        let boundary = "folio-boundary";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"other\"\r\n\r\n\
             hello\r\n\
             --{boundary}--\r\n"
        );
        let response = app()
            .oneshot(
                Request::post("/api/v1/resume/extract")
                    .header(
                        header::CONTENT_TYPE,
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

use std::sync::Arc;

use crate::github::GithubFetcher;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Default: `GithubClient`. Tests swap in a canned fetcher.
    pub github: Arc<dyn GithubFetcher>,
}

//! GitHub Fetcher: turns a username into a schema-shaped profile/repo blob.
//!
//! `AppState` holds an `Arc<dyn GithubFetcher>`; `GithubClient` is the
//! production implementation over the REST API.

pub mod handlers;
pub mod models;
pub mod shape;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::github::models::{GitHubRepo, GitHubUser};
use crate::github::shape::shape_github_data;

const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));
const MAX_USERNAME_LEN: usize = 39;
const REPOS_PER_PAGE: u32 = 100;

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid GitHub username '{0}'")]
    InvalidUsername(String),

    #[error("GitHub user '{0}' not found")]
    NotFound(String),

    #[error("GitHub rate limit exceeded")]
    RateLimited,

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[async_trait]
pub trait GithubFetcher: Send + Sync {
    /// Returns the output of [`shape_github_data`] for `username`.
    async fn fetch_profile(&self, username: &str) -> Result<Value, GithubError>;
}

/// GitHub usernames: 1-39 ASCII alphanumerics or hyphens, no leading or trailing hyphen.
pub fn validate_username(username: &str) -> Result<&str, GithubError> {
    let valid = !username.is_empty()
        && username.len() <= MAX_USERNAME_LEN
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !username.starts_with('-')
        && !username.ends_with('-');
    if valid {
        Ok(username)
    } else {
        Err(GithubError::InvalidUsername(username.to_string()))
    }
}

#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, GithubError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        username: &str,
    ) -> Result<T, GithubError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        match status {
            s if s.is_success() => Ok(response.json::<T>().await?),
            StatusCode::NOT_FOUND => Err(GithubError::NotFound(username.to_string())),
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
                warn!("GitHub rate limit hit while fetching {url}");
                Err(GithubError::RateLimited)
            }
            _ => Err(GithubError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            }),
        }
    }
}

#[async_trait]
impl GithubFetcher for GithubClient {
    async fn fetch_profile(&self, username: &str) -> Result<Value, GithubError> {
        let username = validate_username(username)?;

        let user: GitHubUser = self.get_json(&format!("/users/{username}"), username).await?;
        let repos: Vec<GitHubRepo> = self
            .get_json(
                &format!("/users/{username}/repos?per_page={REPOS_PER_PAGE}&sort=updated"),
                username,
            )
            .await?;

        debug!(
            "Fetched GitHub profile for {}: {} repos",
            user.login,
            repos.len()
        );
        Ok(shape_github_data(&user, &repos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        for name in ["octo", "a", "octo-cat", "User123", "x".repeat(39).as_str()] {
            assert!(validate_username(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_invalid_usernames() {
        for name in ["", "-octo", "octo-", "oc to", "../etc", "octo/repos", "x".repeat(40).as_str()] {
            assert!(
                matches!(validate_username(name), Err(GithubError::InvalidUsername(_))),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_client_trims_base_url() {
        let client = GithubClient::new("https://api.github.com/", None).unwrap();
        assert_eq!(client.base_url, "https://api.github.com");
    }
}

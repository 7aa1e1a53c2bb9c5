use serde::Deserialize;

/// A GitHub user profile from the `/users/{username}` API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GitHubUser {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub blog: Option<String>,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
}

/// A repository from the `/users/{username}/repos` API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GitHubRepo {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub html_url: Option<String>,
    pub fork: bool,
}

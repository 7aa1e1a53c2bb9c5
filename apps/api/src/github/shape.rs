use serde_json::{json, Value};

use crate::github::models::{GitHubRepo, GitHubUser};

/// Shapes raw GitHub API data into the portfolio's GitHub sections.
///
/// The result uses canonical portfolio keys, so it normalizes unchanged. Forked
/// repositories are left out; the rest are ordered by stars (descending), then
/// title. The `profile` section carries the remaining raw profile fields.
pub fn shape_github_data(user: &GitHubUser, repos: &[GitHubRepo]) -> Value {
    let mut own: Vec<&GitHubRepo> = repos.iter().filter(|r| !r.fork).collect();
    own.sort_by(|a, b| {
        b.stargazers_count
            .cmp(&a.stargazers_count)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });

    let github_projects: Vec<Value> = own
        .into_iter()
        .map(|repo| {
            json!({
                "title": repo.name,
                "description": repo.description,
                "tech_stack": repo.language,
                "repo_link": repo.html_url,
                "stars": repo.stargazers_count,
                "forks": repo.forks_count,
            })
        })
        .collect();

    json!({
        "github_profile_overview": {
            "username": user.login,
            "profile_pic": user.avatar_url,
            "github_url": user.html_url,
            "followers": user.followers,
            "following": user.following,
            "public_repos": user.public_repos,
        },
        "github_projects": github_projects,
        "profile": {
            "name": user.name,
            "bio": user.bio,
            "location": user.location,
            "website": user.blog.as_deref().filter(|b| !b.trim().is_empty()),
        },
    })
}

use std::collections::HashSet;

use crate::portfolio::models::{Portfolio, Project};

/// Composite identity of a project: lowercased, trimmed `title|repo_url`.
///
/// A project with neither a title nor a link keys to `"|"`, so several blank
/// entries collapse into the first one.
pub fn dedup_key(title: Option<&str>, repo_url: Option<&str>) -> String {
    format!(
        "{}|{}",
        title.unwrap_or("").trim().to_lowercase(),
        repo_url.unwrap_or("").trim().to_lowercase()
    )
}

fn project_key(project: &Project) -> String {
    dedup_key(project.title.as_deref(), project.github_link.as_deref())
}

/// Merges `projects` and `github_projects` into a single `projects` list.
///
/// Candidates are taken in order, `projects` first, and the first entry for
/// each key is kept. `github_projects` is carried over unchanged. The input
/// record is left as it was.
pub fn dedupe_projects(portfolio: &Portfolio) -> Portfolio {
    let candidates = portfolio
        .projects
        .iter()
        .cloned()
        .chain(portfolio.github_projects.iter().map(Project::from));

    let mut seen = HashSet::new();
    let projects = candidates
        .filter(|project| seen.insert(project_key(project)))
        .collect();

    Portfolio {
        projects,
        ..portfolio.clone()
    }
}

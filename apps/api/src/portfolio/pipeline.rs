//! Generation pipeline: resume text + GitHub data -> merged, deduplicated portfolio.
//!
//! Data only moves forward: raw reply -> parsed value -> normalized record ->
//! deduplicated record. The network steps run first; everything after the
//! merge reply is pure.

use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::github::GithubFetcher;
use crate::llm_client::prompts::{build_merge_prompt, MERGE_SYSTEM};
use crate::llm_client::LlmClient;
use crate::portfolio::dedup::dedupe_projects;
use crate::portfolio::models::Portfolio;
use crate::portfolio::normalize::normalize;
use crate::portfolio::parser::parse_jsonish;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub resume_text: String,
    #[serde(default)]
    pub github_username: Option<String>,
}

/// Raw text or parsed value -> normalized record with merged projects.
pub fn build_portfolio(raw: &Value) -> Option<Portfolio> {
    normalize(raw).map(|portfolio| dedupe_projects(&portfolio))
}

/// Fills GitHub facts the merged record is missing from the fetched profile.
/// Values already present are never replaced.
pub fn backfill_from_github(portfolio: &Portfolio, github: &Portfolio) -> Portfolio {
    let mut filled = portfolio.clone();
    if filled.github_profile_overview.username.is_none() {
        filled.github_profile_overview = github.github_profile_overview.clone();
    }
    if filled.github_projects.is_empty() {
        filled.github_projects = github.github_projects.clone();
    }
    if filled.contact_information.github_url.is_none() {
        filled.contact_information.github_url = github
            .contact_information
            .github_url
            .clone()
            .or_else(|| github.github_profile_overview.github_url.clone());
    }
    filled
}

/// Turns the merge reply into the final record. `None` means the reply held
/// no usable portfolio object.
pub fn assemble_portfolio(reply: &str, github: Option<&Portfolio>) -> Option<Portfolio> {
    let parsed = parse_jsonish(reply)?;
    let merged = build_portfolio(&parsed)?;
    Some(match github {
        Some(github) => dedupe_projects(&backfill_from_github(&merged, github)),
        None => merged,
    })
}

pub async fn generate_portfolio(
    llm: &LlmClient,
    github: &dyn GithubFetcher,
    request: &GenerateRequest,
) -> Result<Portfolio, AppError> {
    let resume_text = request.resume_text.trim();
    if resume_text.is_empty() {
        return Err(AppError::Validation("resume_text must not be empty".to_string()));
    }

    let username = request
        .github_username
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty());

    let github_data = match username {
        Some(username) => Some(github.fetch_profile(username).await?),
        None => None,
    };

    let prompt = build_merge_prompt(resume_text, github_data.as_ref());
    let reply = llm
        .complete(&prompt, MERGE_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Portfolio merge failed: {e}")))?;

    let github_portfolio = github_data.as_ref().and_then(normalize);
    let portfolio = assemble_portfolio(&reply, github_portfolio.as_ref()).ok_or_else(|| {
        warn!("Merge reply contained no portfolio object ({} chars)", reply.len());
        AppError::UnprocessableEntity(
            "could not generate portfolio: the model reply held no usable JSON".to_string(),
        )
    })?;

    info!(
        "Generated portfolio: {} projects ({} from GitHub), {} experience entries",
        portfolio.projects.len(),
        portfolio.github_projects.len(),
        portfolio.experience.len()
    );
    Ok(portfolio)
}

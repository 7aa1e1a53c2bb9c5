// Prompt templates for the resume + GitHub merge request.
// Placeholders: {resume_text}, {github_json}.

/// System prompt that enforces JSON-only output.
pub const MERGE_SYSTEM: &str = "You are a precise, structured assistant that builds developer portfolios. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT invent employers, degrees, dates or links that are not in the input.";

pub const MERGE_PROMPT_TEMPLATE: &str = r#"Merge the resume text and the GitHub data below into one portfolio JSON object.

RESUME TEXT:
{resume_text}

GITHUB DATA (JSON, may be null):
{github_json}

OUTPUT SCHEMA (return exactly this structure; use null for unknown strings, [] for empty lists, 0 for unknown counts):
{
  "contact_information": {"name": "string", "email": "string", "phone": "string", "linkedin_url": "string", "github_url": "string"},
  "summary": "string",
  "education": [{"institution": "string", "degree": "string", "years": "string", "cgpa": "string"}],
  "experience": [{"company": "string", "role": "string", "start_date": "string", "end_date": "string", "duration": "string", "location": "string", "responsibilities": ["string"]}],
  "projects": [{"title": "string", "description": "string", "technologies": ["string"], "live_demo": "string", "github_link": "string", "stars": 0, "forks": 0}],
  "github_projects": [{"title": "string", "description": "string", "tech_stack": "string", "repo_link": "string", "stars": 0, "forks": 0}],
  "technical_skills": {"languages": ["string"], "frameworks_libraries": ["string"], "databases": ["string"], "authentication_apis": ["string"], "dev_tools": ["string"], "ai_cv_tools": ["string"]},
  "certificates": [{"title": "string", "date": "string", "description": "string"}],
  "achievements": ["string"],
  "github_profile_overview": {"username": "string", "profile_pic": "string", "github_url": "string", "followers": 0, "following": 0, "public_repos": 0}
}

RULES:
1. "projects" are projects described in the resume; "github_projects" are repositories from the GitHub data.
2. Copy GitHub counts (stars, forks, followers, following, public_repos) exactly as given.
3. Prefer the resume for contact details; fall back to GitHub for name and github_url.
4. Return ONLY the JSON object. No prose, no code fences."#;

/// Fills the merge template. `github` is rendered as pretty JSON (`null` when absent).
pub fn build_merge_prompt(resume_text: &str, github: Option<&serde_json::Value>) -> String {
    let github_json = github
        .and_then(|g| serde_json::to_string_pretty(g).ok())
        .unwrap_or_else(|| "null".to_string());
    MERGE_PROMPT_TEMPLATE
        .replace("{github_json}", &github_json)
        .replace("{resume_text}", resume_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_merge_prompt_fills_placeholders() {
        let prompt = build_merge_prompt("Jane, Rust dev", Some(&json!({"login": "jane"})));
        assert!(prompt.contains("Jane, Rust dev"));
        assert!(prompt.contains("\"login\": \"jane\""));
        assert!(!prompt.contains("{resume_text}"));
        assert!(!prompt.contains("{github_json}"));
    }

    #[test]
    fn test_build_merge_prompt_without_github() {
        let prompt = build_merge_prompt("text", None);
        assert!(prompt.contains("GITHUB DATA (JSON, may be null):\nnull"));
    }

    #[test]
    fn test_resume_text_placeholders_are_not_expanded() {
        // {github_json} is substituted first, so resume text containing it stays literal.
        let prompt = build_merge_prompt("see {github_json}", None);
        assert!(prompt.contains("see {github_json}"));
    }
}

//! Portfolio Normalizer: maps loosely shaped JSON onto [`Portfolio`].
//!
//! Model output drifts in key naming and value types. Every schema field has
//! an ordered list of candidate paths below; the canonical key always comes
//! first and the first candidate holding a usable value wins. Because of that
//! ordering, normalizing a serialized `Portfolio` reproduces it exactly.

use serde_json::{Map, Value};

use crate::portfolio::models::{
    Certificate, ContactInformation, EducationEntry, ExperienceEntry, GithubProfileOverview,
    GithubProject, Portfolio, Project, TechnicalSkills,
};
use crate::portfolio::parser::coerce_jsonish;

/// A key path from the object being read.
type Path = &'static [&'static str];

// ── Top-level candidates ─────────────────────────────────────────────────────

// Name-like keys in every contact section come before any username-like key.
const NAME: &[Path] = &[
    &["contact_information", "name"],
    &["contactInfo", "name"],
    &["personal_info", "name"],
    &["personal", "name"],
    &["profile", "name"],
    &["contact_information", "full_name"],
    &["personal_info", "full_name"],
    &["contact_information", "username"],
    &["contactInfo", "username"],
    &["personal_info", "username"],
    &["personal", "username"],
    &["github_profile_overview", "username"],
];
const EMAIL: &[Path] = &[
    &["contact_information", "email"],
    &["contactInfo", "email"],
    &["personal_info", "email"],
    &["personal", "email"],
];
const PHONE: &[Path] = &[
    &["contact_information", "phone"],
    &["contactInfo", "phone"],
    &["personal_info", "phone"],
    &["personal", "phone"],
    &["contact_information", "phone_number"],
    &["personal_info", "phone_number"],
];
const LINKEDIN_URL: &[Path] = &[
    &["contact_information", "linkedin_url"],
    &["contactInfo", "linkedinUrl"],
    &["contactInfo", "linkedin_url"],
    &["personal_info", "linkedin_url"],
    &["personal", "linkedin_url"],
    &["contact_information", "linkedin"],
    &["personal_info", "linkedin"],
];
const CONTACT_GITHUB_URL: &[Path] = &[
    &["contact_information", "github_url"],
    &["contactInfo", "githubUrl"],
    &["contactInfo", "github_url"],
    &["personal_info", "github_url"],
    &["personal", "githubUrl"],
    &["personal", "github_url"],
    &["github_profile_overview", "github_url"],
];
const SUMMARY: &[Path] = &[
    &["summary"],
    &["about"],
    &["bio"],
    &["personal", "bio"],
    &["personal_info", "bio"],
    &["profile", "bio"],
];

const EDUCATION: &[Path] = &[&["education"], &["educations"], &["education_history"]];
const EXPERIENCE: &[Path] = &[
    &["experience"],
    &["work_experience"],
    &["experiences"],
    &["employment"],
];
const PROJECTS: &[Path] = &[&["projects"]];
const GITHUB_PROJECTS: &[Path] = &[
    &["github_projects"],
    &["githubProjects"],
    &["repositories"],
    &["repos"],
];
const TECHNICAL_SKILLS: &[Path] = &[&["technical_skills"], &["technicalSkills"], &["skills"]];
const CERTIFICATES: &[Path] = &[&["certificates"], &["certifications"]];
const ACHIEVEMENTS: &[Path] = &[&["achievements"], &["awards"], &["accomplishments"]];

const GITHUB_USERNAME: &[Path] = &[
    &["github_profile_overview", "username"],
    &["githubProfile", "username"],
    &["github_profile", "username"],
    &["github_profile_overview", "login"],
    &["personal", "username"],
    &["personal_info", "username"],
];
const PROFILE_PIC: &[Path] = &[
    &["github_profile_overview", "profile_pic"],
    &["githubProfile", "profilePic"],
    &["githubProfile", "profile_pic"],
    &["github_profile", "profile_pic"],
    &["github_profile_overview", "avatar_url"],
    &["personal", "profilePic"],
    &["personal", "profile_pic"],
    &["personal", "avatar_url"],
];
const OVERVIEW_GITHUB_URL: &[Path] = &[
    &["github_profile_overview", "github_url"],
    &["githubProfile", "githubUrl"],
    &["githubProfile", "github_url"],
    &["github_profile", "github_url"],
    &["github_profile_overview", "html_url"],
    &["personal", "githubUrl"],
    &["personal", "github_url"],
    &["contact_information", "github_url"],
];
const FOLLOWERS: &[Path] = &[
    &["github_profile_overview", "followers"],
    &["githubProfile", "followers"],
    &["github_profile", "followers"],
];
const FOLLOWING: &[Path] = &[
    &["github_profile_overview", "following"],
    &["githubProfile", "following"],
    &["github_profile", "following"],
];
const PUBLIC_REPOS: &[Path] = &[
    &["github_profile_overview", "public_repos"],
    &["githubProfile", "publicRepos"],
    &["githubProfile", "public_repos"],
    &["github_profile", "public_repos"],
];

// ── Per-entry candidates ─────────────────────────────────────────────────────

const INSTITUTION: &[Path] = &[&["institution"], &["school"], &["university"], &["college"]];
const DEGREE: &[Path] = &[&["degree"], &["qualification"], &["course"]];
const YEARS: &[Path] = &[&["years"], &["duration"], &["period"], &["year"]];
const CGPA: &[Path] = &[&["cgpa"], &["gpa"], &["grade"]];

const COMPANY: &[Path] = &[&["company"], &["organization"], &["employer"]];
const ROLE: &[Path] = &[&["role"], &["title"], &["position"]];
const START_DATE: &[Path] = &[&["start_date"], &["startDate"], &["from"]];
const END_DATE: &[Path] = &[&["end_date"], &["endDate"], &["to"]];
const DURATION: &[Path] = &[&["duration"], &["period"], &["dates"]];
const LOCATION: &[Path] = &[&["location"]];
const RESPONSIBILITIES: &[Path] = &[&["responsibilities"], &["highlights"], &["bullets"]];

const TITLE: &[Path] = &[&["title"], &["name"]];
const DESCRIPTION: &[Path] = &[&["description"], &["summary"]];
const LIVE_DEMO: &[Path] = &[
    &["live_demo"],
    &["liveDemo"],
    &["demo"],
    &["live_url"],
    &["homepage"],
];
const GITHUB_LINK: &[Path] = &[
    &["github_link"],
    &["githubLink"],
    &["repo_link"],
    &["repoLink"],
    &["html_url"],
    &["url"],
];
const REPO_LINK: &[Path] = &[
    &["repo_link"],
    &["repoLink"],
    &["html_url"],
    &["github_link"],
    &["url"],
];
const TECHNOLOGY_LISTS: &[Path] = &[&["technologies"], &["tech_stack"], &["techStack"]];
/// Singular strings here are promoted to a one-element `technologies` list.
const TECHNOLOGY_PROMOTED: &[Path] = &[&["tech_stack"], &["techStack"], &["language"]];
const TECH_STACK: &[Path] = &[
    &["tech_stack"],
    &["techStack"],
    &["language"],
    &["technologies"],
];
const STARS: &[Path] = &[&["stars"], &["stargazers_count"]];
const FORKS: &[Path] = &[&["forks"], &["forks_count"]];

const CERTIFICATE_TITLE: &[Path] = &[&["title"], &["name"]];
const CERTIFICATE_DATE: &[Path] = &[&["date"], &["issued"], &["year"]];
const CERTIFICATE_DESCRIPTION: &[Path] = &[&["description"], &["issuer"]];

const LANGUAGES: &[Path] = &[&["languages"], &["programming_languages"]];
const FRAMEWORKS_LIBRARIES: &[Path] = &[&["frameworks_libraries"], &["frameworks"], &["libraries"]];
const DATABASES: &[Path] = &[&["databases"]];
const AUTHENTICATION_APIS: &[Path] = &[&["authentication_apis"], &["apis"]];
const DEV_TOOLS: &[Path] = &[&["dev_tools"], &["tools"]];
const AI_CV_TOOLS: &[Path] = &[&["ai_cv_tools"], &["ai_tools"]];

/// Normalizes raw text or a parsed value into a [`Portfolio`].
///
/// Returns `None` when there is no object to read (null, unparseable text, or
/// a non-object JSON value). For any object the result is fully populated.
pub fn normalize(input: &Value) -> Option<Portfolio> {
    let parsed = coerce_jsonish(input)?;
    let root = parsed.as_object()?;
    Some(normalize_object(root))
}

fn normalize_object(root: &Map<String, Value>) -> Portfolio {
    let root = Root(root);
    let skills = root.first_object(TECHNICAL_SKILLS);

    Portfolio {
        contact_information: ContactInformation {
            name: root.string(NAME),
            email: root.string(EMAIL),
            phone: root.string(PHONE),
            linkedin_url: root.string(LINKEDIN_URL),
            github_url: root.string(CONTACT_GITHUB_URL),
        },
        summary: root.string(SUMMARY),
        education: root
            .objects(EDUCATION)
            .map(|entry| normalize_education(Root(entry)))
            .filter(|edu| edu.institution.is_some() || edu.degree.is_some())
            .collect(),
        experience: root
            .objects(EXPERIENCE)
            .map(|entry| normalize_experience(Root(entry)))
            .collect(),
        projects: root
            .objects(PROJECTS)
            .map(|entry| normalize_project(Root(entry)))
            .collect(),
        github_projects: root
            .objects(GITHUB_PROJECTS)
            .map(|entry| normalize_github_project(Root(entry)))
            .collect(),
        technical_skills: skills.map(normalize_skills).unwrap_or_default(),
        certificates: root
            .objects(CERTIFICATES)
            .map(|entry| normalize_certificate(Root(entry)))
            .collect(),
        achievements: root.strings(ACHIEVEMENTS),
        github_profile_overview: GithubProfileOverview {
            username: root.string(GITHUB_USERNAME),
            profile_pic: root.string(PROFILE_PIC),
            github_url: root.string(OVERVIEW_GITHUB_URL),
            followers: root.count(FOLLOWERS),
            following: root.count(FOLLOWING),
            public_repos: root.count(PUBLIC_REPOS),
        },
    }
}

fn normalize_education(entry: Root<'_>) -> EducationEntry {
    EducationEntry {
        institution: entry.string(INSTITUTION),
        degree: entry.string(DEGREE),
        years: entry.string(YEARS),
        cgpa: entry.string(CGPA),
    }
}

fn normalize_experience(entry: Root<'_>) -> ExperienceEntry {
    ExperienceEntry {
        company: entry.string(COMPANY),
        role: entry.string(ROLE),
        start_date: entry.string(START_DATE),
        end_date: entry.string(END_DATE),
        duration: entry.string(DURATION),
        location: entry.string(LOCATION),
        responsibilities: entry.strings(RESPONSIBILITIES),
    }
}

fn normalize_project(entry: Root<'_>) -> Project {
    Project {
        title: entry.string(TITLE),
        description: entry.string(DESCRIPTION),
        live_demo: entry.string(LIVE_DEMO),
        github_link: entry.string(GITHUB_LINK),
        technologies: technologies(entry),
        stars: entry.count(STARS),
        forks: entry.count(FORKS),
    }
}

fn normalize_github_project(entry: Root<'_>) -> GithubProject {
    GithubProject {
        title: entry.string(TITLE),
        description: entry.string(DESCRIPTION),
        tech_stack: tech_stack(entry),
        repo_link: entry.string(REPO_LINK),
        stars: entry.count(STARS),
        forks: entry.count(FORKS),
    }
}

fn normalize_certificate(entry: Root<'_>) -> Certificate {
    Certificate {
        title: entry.string(CERTIFICATE_TITLE),
        date: entry.string(CERTIFICATE_DATE),
        description: entry.string(CERTIFICATE_DESCRIPTION),
    }
}

fn normalize_skills(section: &Map<String, Value>) -> TechnicalSkills {
    let section = Root(section);
    TechnicalSkills {
        languages: section.strings(LANGUAGES),
        frameworks_libraries: section.strings(FRAMEWORKS_LIBRARIES),
        databases: section.strings(DATABASES),
        authentication_apis: section.strings(AUTHENTICATION_APIS),
        dev_tools: section.strings(DEV_TOOLS),
        ai_cv_tools: section.strings(AI_CV_TOOLS),
    }
}

/// An array under a list key wins; otherwise a singular string under a
/// promotion key becomes a one-element list. Duplicates are dropped.
fn technologies(entry: Root<'_>) -> Vec<String> {
    let list = entry
        .first_array(TECHNOLOGY_LISTS)
        .map(|items| items.iter().filter_map(as_text).collect::<Vec<_>>())
        .or_else(|| {
            TECHNOLOGY_PROMOTED
                .iter()
                .filter_map(|path| entry.get(path))
                .filter(|value| value.is_string())
                .find_map(as_text)
                .map(|single| vec![single])
        })
        .unwrap_or_default();

    let mut distinct: Vec<String> = Vec::with_capacity(list.len());
    for tech in list {
        if !distinct.contains(&tech) {
            distinct.push(tech);
        }
    }
    distinct
}

/// Repository tech stack as one string; arrays are joined with ", ".
fn tech_stack(entry: Root<'_>) -> Option<String> {
    TECH_STACK
        .iter()
        .filter_map(|path| entry.get(path))
        .find_map(|value| match value {
            Value::Array(items) => {
                let parts: Vec<String> = items.iter().filter_map(as_text).collect();
                (!parts.is_empty()).then(|| parts.join(", "))
            }
            other => as_text(other),
        })
}

/// Borrowed view over a JSON object with candidate-path lookups.
#[derive(Clone, Copy)]
struct Root<'a>(&'a Map<String, Value>);

impl<'a> Root<'a> {
    fn get(self, path: &[&str]) -> Option<&'a Value> {
        let (first, rest) = path.split_first()?;
        let start = self.0.get(*first)?;
        rest.iter().try_fold(start, |value, key| value.get(key))
    }

    /// First candidate that coerces to a non-blank string.
    fn string(self, paths: &[Path]) -> Option<String> {
        paths
            .iter()
            .filter_map(|path| self.get(path))
            .find_map(as_text)
    }

    /// First non-null candidate, coerced to a count.
    fn count(self, paths: &[Path]) -> u64 {
        paths
            .iter()
            .filter_map(|path| self.get(path))
            .find(|value| !value.is_null())
            .map(as_count)
            .unwrap_or(0)
    }

    fn first_array(self, paths: &[Path]) -> Option<&'a Vec<Value>> {
        paths
            .iter()
            .filter_map(|path| self.get(path))
            .find_map(Value::as_array)
    }

    fn first_object(self, paths: &[Path]) -> Option<&'a Map<String, Value>> {
        paths
            .iter()
            .filter_map(|path| self.get(path))
            .find_map(Value::as_object)
    }

    /// Object items of the first array candidate; other items are skipped.
    fn objects(self, paths: &[Path]) -> impl Iterator<Item = &'a Map<String, Value>> {
        self.first_array(paths)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object)
    }

    /// Non-blank string items of the first array candidate.
    fn strings(self, paths: &[Path]) -> Vec<String> {
        self.first_array(paths)
            .map(|items| {
                items
                    .iter()
                    .filter(|item| item.is_string())
                    .filter_map(as_text)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Trimmed non-blank strings, or a number's JSON text. Everything else is `None`.
fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Non-negative integer, truncated toward zero. Non-numeric input is 0.
fn as_count(value: &Value) -> u64 {
    let float = match value {
        Value::Number(n) => {
            if let Some(count) = n.as_u64() {
                return count;
            }
            n.as_f64()
        }
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    float
        .filter(|f| f.is_finite() && *f > 0.0)
        .map(|f| f.trunc() as u64)
        .unwrap_or(0)
}

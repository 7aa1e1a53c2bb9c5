use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInformation {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub years: Option<String>,
    pub cgpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: Option<String>,
    pub role: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub duration: Option<String>,
    pub location: Option<String>,
    pub responsibilities: Vec<String>,
}

/// A project as displayed in the merged list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: Option<String>,
    pub description: Option<String>,
    pub live_demo: Option<String>,
    pub github_link: Option<String>,
    /// Distinct, in first-seen order.
    pub technologies: Vec<String>,
    pub stars: u64,
    pub forks: u64,
}

/// A repository as reported by GitHub, kept alongside the merged `projects`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GithubProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tech_stack: Option<String>,
    pub repo_link: Option<String>,
    pub stars: u64,
    pub forks: u64,
}

impl From<&GithubProject> for Project {
    /// Maps a repository onto the project shape. A singular `tech_stack`
    /// becomes a one-element `technologies` list.
    fn from(repo: &GithubProject) -> Self {
        Project {
            title: repo.title.clone(),
            description: repo.description.clone(),
            live_demo: None,
            github_link: repo.repo_link.clone(),
            technologies: repo.tech_stack.iter().cloned().collect(),
            stars: repo.stars,
            forks: repo.forks,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSkills {
    pub languages: Vec<String>,
    pub frameworks_libraries: Vec<String>,
    pub databases: Vec<String>,
    pub authentication_apis: Vec<String>,
    pub dev_tools: Vec<String>,
    pub ai_cv_tools: Vec<String>,
}

impl TechnicalSkills {
    /// All six lists concatenated in schema order.
    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.languages
            .iter()
            .chain(&self.frameworks_libraries)
            .chain(&self.databases)
            .chain(&self.authentication_apis)
            .chain(&self.dev_tools)
            .chain(&self.ai_cv_tools)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub title: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GithubProfileOverview {
    pub username: Option<String>,
    pub profile_pic: Option<String>,
    pub github_url: Option<String>,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
}

/// The canonical portfolio record. Built fresh by `normalize`; every list is
/// present (possibly empty) and every scalar is either a non-blank string or null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub contact_information: ContactInformation,
    pub summary: Option<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<Project>,
    pub github_projects: Vec<GithubProject>,
    pub technical_skills: TechnicalSkills,
    pub certificates: Vec<Certificate>,
    pub achievements: Vec<String>,
    pub github_profile_overview: GithubProfileOverview,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_project_promotes_tech_stack() {
        let repo = GithubProject {
            title: Some("X".to_string()),
            tech_stack: Some("Go".to_string()),
            repo_link: Some("https://github.com/a/x".to_string()),
            stars: 4,
            ..Default::default()
        };
        let project = Project::from(&repo);
        assert_eq!(project.technologies, vec!["Go".to_string()]);
        assert_eq!(project.github_link.as_deref(), Some("https://github.com/a/x"));
        assert_eq!(project.stars, 4);
        assert!(project.live_demo.is_none());
    }

    #[test]
    fn test_github_project_without_tech_stack() {
        let project = Project::from(&GithubProject::default());
        assert!(project.technologies.is_empty());
    }

    #[test]
    fn test_default_portfolio_serializes_nulls_and_empty_lists() {
        let value = serde_json::to_value(Portfolio::default()).unwrap();
        assert!(value["summary"].is_null());
        assert!(value["contact_information"]["email"].is_null());
        assert_eq!(value["projects"], serde_json::json!([]));
        assert_eq!(value["technical_skills"]["dev_tools"], serde_json::json!([]));
        assert_eq!(value["github_profile_overview"]["followers"], 0);
    }

    #[test]
    fn test_skills_all_preserves_schema_order() {
        let skills = TechnicalSkills {
            languages: vec!["Rust".into()],
            databases: vec!["Postgres".into()],
            ai_cv_tools: vec!["OpenCV".into()],
            ..Default::default()
        };
        let all: Vec<_> = skills.all().cloned().collect();
        assert_eq!(all, vec!["Rust", "Postgres", "OpenCV"]);
    }
}

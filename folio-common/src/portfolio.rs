//! Site content model
//!
//! The whole page is driven by one JSON document embedded at build time.
//! Parsing validates the few things the page relies on (unique, non-empty
//! project titles, since titles double as gallery keys).

use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to parse portfolio content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate project title: {0}")]
    DuplicateProject(String),
    #[error("Project with an empty title")]
    EmptyProjectTitle,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub about: About,
    pub skills: SkillGroups,
    pub projects: Vec<Project>,
    pub contact: Contact,
    /// Project title -> screenshots shown in the gallery overlay
    #[serde(default)]
    pub gallery: ImageCatalog,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Short logo text in the nav bar
    pub initials: String,
    pub role: String,
    pub tagline: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Highlight {
    pub icon: HighlightIcon,
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightIcon {
    Code,
    Database,
    Globe,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillGroups {
    pub frontend: Vec<Skill>,
    pub backend: Vec<Skill>,
    pub tools: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    #[serde(default)]
    pub badge: Option<SkillBadge>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Junior,
    Middle,
    Senior,
}

impl SkillLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Middle => "Middle",
            Self::Senior => "Senior",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillBadge {
    New,
    Learning,
}

impl SkillBadge {
    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Learning => "Learning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub github: String,
    pub status: ProjectStatus,
    /// Where each tier is hosted, shown as a one-line note
    #[serde(default)]
    pub deploy: Option<String>,
    #[serde(default)]
    pub live_demo: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github_url: String,
    pub linkedin_url: String,
}

/// Mapping from project key to its ordered image locators.
///
/// Paths are handed to `<img src>` as-is; nothing checks they exist.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ImageCatalog(BTreeMap<String, Vec<String>>);

impl ImageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, images: Vec<String>) {
        self.0.insert(key.into(), images);
    }

    /// Images for `key`, or an empty list when nothing is registered.
    pub fn images_for(&self, key: &str) -> Vec<String> {
        self.0.get(key).cloned().unwrap_or_default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl FromIterator<(String, Vec<String>)> for ImageCatalog {
    fn from_iter<T: IntoIterator<Item = (String, Vec<String>)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Portfolio {
    /// Parse and validate a content document.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_json::from_str(json)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if project.title.trim().is_empty() {
                return Err(ContentError::EmptyProjectTitle);
            }
            if !seen.insert(project.title.as_str()) {
                return Err(ContentError::DuplicateProject(project.title.clone()));
            }
        }
        Ok(())
    }

    /// Gallery keys that no project card can ever open.
    pub fn orphan_gallery_keys(&self) -> Vec<&str> {
        self.gallery
            .keys()
            .filter(|key| !self.projects.iter().any(|p| p.title == *key))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMBEDDED: &str = include_str!("../../content/portfolio.json");

    fn minimal(projects: &str, gallery: &str) -> String {
        format!(
            r#"{{
                "profile": {{
                    "name": "Ada", "initials": "A", "role": "Engineer",
                    "tagline": "Builds things", "location": "London"
                }},
                "about": {{ "paragraphs": ["Hello"] }},
                "skills": {{ "frontend": [], "backend": [], "tools": [] }},
                "projects": {projects},
                "contact": {{
                    "email": "ada@example.com", "phone": "+44",
                    "location": "London", "github_url": "https://github.com/ada",
                    "linkedin_url": "https://linkedin.com/in/ada"
                }},
                "gallery": {gallery}
            }}"#
        )
    }

    fn project(title: &str) -> String {
        format!(
            r#"{{ "title": "{title}", "description": "d", "tech": ["Rust"],
                 "github": "https://github.com/ada/x", "status": "completed" }}"#
        )
    }

    #[test]
    fn test_embedded_content_parses() {
        let portfolio = Portfolio::from_json(EMBEDDED).unwrap();
        assert_eq!(portfolio.projects.len(), 5);
        assert!(portfolio.orphan_gallery_keys().is_empty());
        assert_eq!(portfolio.gallery.images_for("Reddit Clone").len(), 8);
        assert_eq!(portfolio.gallery.images_for("NeoShop").len(), 4);
        assert!(portfolio.gallery.images_for("Cinefy").is_empty());
    }

    #[test]
    fn test_embedded_optional_fields() {
        let portfolio = Portfolio::from_json(EMBEDDED).unwrap();
        let cinefy = portfolio
            .projects
            .iter()
            .find(|p| p.title == "Cinefy")
            .unwrap();
        assert_eq!(cinefy.status, ProjectStatus::InProgress);
        assert!(cinefy.deploy.is_some());
        assert!(cinefy.live_demo.is_some());

        let reddit = &portfolio.projects[0];
        assert_eq!(reddit.status, ProjectStatus::Completed);
        assert_eq!(reddit.live_demo, None);
    }

    #[test]
    fn test_missing_gallery_defaults_to_empty() {
        let json = minimal(&format!("[{}]", project("Solo")), "{}");
        let portfolio = Portfolio::from_json(&json).unwrap();
        assert!(portfolio.gallery.images_for("Solo").is_empty());
    }

    #[test]
    fn test_unknown_key_resolves_to_empty() {
        let mut catalog = ImageCatalog::new();
        catalog.insert("Known", vec!["/a.png".to_string()]);
        assert_eq!(catalog.images_for("Known"), vec!["/a.png".to_string()]);
        assert!(catalog.images_for("UnknownProject").is_empty());
    }

    #[test]
    fn test_catalog_preserves_image_order() {
        let catalog: ImageCatalog = [(
            "Shop".to_string(),
            vec!["/z.png".to_string(), "/a.png".to_string()],
        )]
        .into_iter()
        .collect();
        assert_eq!(catalog.images_for("Shop"), vec!["/z.png", "/a.png"]);
    }

    #[test]
    fn test_duplicate_project_rejected() {
        let json = minimal(&format!("[{}, {}]", project("Twin"), project("Twin")), "{}");
        match Portfolio::from_json(&json) {
            Err(ContentError::DuplicateProject(title)) => assert_eq!(title, "Twin"),
            other => panic!("Expected DuplicateProject, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_title_rejected() {
        let json = minimal(&format!("[{}]", project("  ")), "{}");
        assert!(matches!(
            Portfolio::from_json(&json),
            Err(ContentError::EmptyProjectTitle)
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            Portfolio::from_json("{ not json"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_status_is_parse_error() {
        let json = minimal(
            r#"[{ "title": "X", "description": "d", "tech": [],
                  "github": "g", "status": "abandoned" }]"#,
            "{}",
        );
        assert!(matches!(
            Portfolio::from_json(&json),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_orphan_gallery_keys_reported() {
        let json = minimal(
            &format!("[{}]", project("Real")),
            r#"{ "Real": ["/r.png"], "Ghost": ["/g.png"] }"#,
        );
        let portfolio = Portfolio::from_json(&json).unwrap();
        assert_eq!(portfolio.orphan_gallery_keys(), vec!["Ghost"]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ProjectStatus::InProgress.label(), "In Progress");
        assert_eq!(SkillLevel::Junior.label(), "Junior");
        assert_eq!(SkillBadge::Learning.label(), "Learning");
    }
}

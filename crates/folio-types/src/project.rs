//! Project showcase records

use serde::{Deserialize, Serialize};

/// Lifecycle tag shown as a badge on each project card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Live,
    #[serde(alias = "in-development", alias = "in_development")]
    Development,
    #[default]
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [Self::Live, Self::Development, Self::Completed];

    /// Badge text
    pub fn label(self) -> &'static str {
        match self {
            Self::Live => "Live",
            Self::Development => "In Development",
            Self::Completed => "Completed",
        }
    }
}

/// One entry of the project showcase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    /// Free-form time period, e.g. "April 2025 - Present"
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Live deployment URL
    #[serde(default)]
    pub url: Option<String>,
    /// Source repository URL
    #[serde(default)]
    pub repository_url: Option<String>,
    /// Path of the preview image under the site root
    #[serde(default)]
    pub preview_image: Option<String>,
    #[serde(default)]
    pub status: ProjectStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_completed() {
        let project: Project = serde_json::from_str(
            r#"{"title":"Clone","period":"2024","description":"A clone"}"#,
        )
        .unwrap();
        assert_eq!(project.status, ProjectStatus::Completed);
        assert!(project.url.is_none());
        assert!(project.repository_url.is_none());
    }

    #[test]
    fn test_status_accepts_in_development_alias() {
        let status: ProjectStatus = serde_json::from_str(r#""in-development""#).unwrap();
        assert_eq!(status, ProjectStatus::Development);
        let status: ProjectStatus = serde_json::from_str(r#""development""#).unwrap();
        assert_eq!(status, ProjectStatus::Development);
    }

    #[test]
    fn test_status_labels() {
        let labels: Vec<_> = ProjectStatus::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Live", "In Development", "Completed"]);
    }
}

//! Content Types for the Portfolio Page
//!
//! This crate is the SINGLE SOURCE OF TRUTH for the shape of the page content.
//!
//! ## Boundaries
//!
//! ```text
//! ┌──────────────────┐  YAML   ┌──────────────────┐  render  ┌──────────────────┐
//! │ portfolio.yaml   │ ──────► │ folio (engine)   │ ───────► │ folio-ui (egui)  │
//! └──────────────────┘         └──────────────────┘          └──────────────────┘
//! ```
//!
//! ## Rules
//!
//! 1. Records are display-only constants; nothing here is mutated at runtime
//! 2. Enumerated tags use lowercase serde names matching the content file
//! 3. Optional links stay `Option` - defaults are applied by the view model, not here

pub mod profile;
pub mod project;
pub mod section;

use serde::{Deserialize, Serialize};

pub use profile::*;
pub use project::*;
pub use section::*;

// ============================================================================
// PORTFOLIO AGGREGATE
// ============================================================================

/// Everything the page displays, in display order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub contact: ContactDetails,
    #[serde(default)]
    pub footer: String,
}

// ============================================================================
// SKILLS
// ============================================================================

/// Icon shown next to a skill name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillIcon {
    #[default]
    Code,
    Database,
    Globe,
}

/// A single tile in the skills grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent (0-100)
    pub level: u8,
    #[serde(default)]
    pub icon: SkillIcon,
}

impl Skill {
    /// Level as a fraction for progress bars, clamped to [0, 1]
    pub fn fraction(&self) -> f32 {
        f32::from(self.level.min(100)) / 100.0
    }
}

// ============================================================================
// EDUCATION & CERTIFICATIONS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    /// Grade line as displayed, e.g. "CGPA: 8.25"
    pub grade: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Certification {
    pub title: String,
}

impl From<&str> for Certification {
    fn from(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_fraction_clamps() {
        let skill = Skill {
            name: "Rust".into(),
            level: 130,
            icon: SkillIcon::Code,
        };
        assert!((skill.fraction() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_certification_is_plain_string_on_the_wire() {
        let certs: Vec<Certification> =
            serde_json::from_str(r#"["NPTEL C Programming"]"#).unwrap();
        assert_eq!(certs[0].title, "NPTEL C Programming");
    }

    #[test]
    fn test_portfolio_optional_sections_default_empty() {
        let yaml = r#"
profile:
  name: Test Person
  initials: TP
  headline: Developer
"#;
        let portfolio: Portfolio = serde_yaml::from_str(yaml).unwrap();
        assert!(portfolio.projects.is_empty());
        assert!(portfolio.contact.socials.is_empty());
        assert_eq!(portfolio.profile.initials, "TP");
    }
}

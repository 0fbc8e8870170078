//! Named page sections

use serde::{Deserialize, Serialize};

/// The fixed set of sections on the page, in document order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Hero,
    About,
    Skills,
    Projects,
    Education,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        Self::Hero,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Education,
        Self::Contact,
    ];

    /// Sections with an entry in the navigation bar (the hero has none)
    pub const NAVIGABLE: [SectionId; 5] = [
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Education,
        Self::Contact,
    ];

    /// Element id / URL fragment
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Education => "education",
            Self::Contact => "contact",
        }
    }

    /// Navigation label, `None` for sections without a nav entry
    pub fn nav_label(self) -> Option<&'static str> {
        match self {
            Self::Hero => None,
            Self::About => Some("About"),
            Self::Skills => Some("Skills"),
            Self::Projects => Some("Projects"),
            Self::Education => Some("Education"),
            Self::Contact => Some("Contact"),
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|section| section.anchor().eq_ignore_ascii_case(anchor))
    }
}

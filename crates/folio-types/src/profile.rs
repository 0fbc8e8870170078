//! Who the page is about, and how to reach them

use serde::{Deserialize, Serialize};

/// A big-number tile in the about panel ("8.25 / CGPA")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Brand mark in the navigation bar
    pub initials: String,
    pub headline: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    /// Path of the profile photo under the site root
    #[serde(default)]
    pub photo: Option<String>,
    /// Role line revealed over the photo on hover
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    LinkedIn,
    GitHub,
}

impl SocialKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn",
            Self::GitHub => "GitHub",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

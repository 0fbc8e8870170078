//! Project card view model
//!
//! Pure mapping from a [`Project`] record to what the card shows. The UI
//! only lays out what this returns; every display rule lives here.

use folio_types::{Project, ProjectStatus};

use crate::config::CardConfig;

/// Image served when an asset path is missing or empty
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.svg";

/// Href used by the live link when a project has no deployment
pub const PLACEHOLDER_HREF: &str = "#";

/// Resolve an optional asset path, degrading to the placeholder
pub fn asset_or_placeholder(path: Option<&str>) -> &str {
    match path.map(str::trim) {
        Some(p) if !p.is_empty() => p,
        _ => PLACEHOLDER_IMAGE,
    }
}

// =============================================================================
// STATUS BADGE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgePalette {
    pub background: Rgba,
    pub text: Rgba,
    pub border: Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub status: ProjectStatus,
    pub label: &'static str,
    pub palette: BadgePalette,
}

/// Fixed label/color pair for each status
pub fn status_badge(status: ProjectStatus) -> StatusBadge {
    let palette = match status {
        // green
        ProjectStatus::Live => BadgePalette {
            background: Rgba::new(34, 197, 94, 51),
            text: Rgba::new(134, 239, 172, 255),
            border: Rgba::new(34, 197, 94, 77),
        },
        // yellow
        ProjectStatus::Development => BadgePalette {
            background: Rgba::new(234, 179, 8, 51),
            text: Rgba::new(253, 224, 71, 255),
            border: Rgba::new(234, 179, 8, 77),
        },
        // blue
        ProjectStatus::Completed => BadgePalette {
            background: Rgba::new(59, 130, 246, 51),
            text: Rgba::new(147, 197, 253, 255),
            border: Rgba::new(59, 130, 246, 77),
        },
    };
    StatusBadge {
        status,
        label: status.label(),
        palette,
    }
}

// =============================================================================
// CARD
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub label: &'static str,
    /// External links open in a new browsing context
    pub new_tab: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewBlock {
    pub image: String,
    pub alt: String,
}

/// Where the status badge is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgePlacement {
    /// Top-right corner of the preview image
    OnPreview,
    /// Next to the period line, used when there is no preview
    Inline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCardView {
    pub title: String,
    pub period: String,
    pub description: String,
    pub preview: Option<PreviewBlock>,
    pub badge: StatusBadge,
    pub badge_placement: BadgePlacement,
    pub highlights: Vec<String>,
    pub tags: Vec<String>,
    pub live_link: Link,
    pub source_link: Option<Link>,
}

impl ProjectCardView {
    pub fn from_project(project: &Project, config: &CardConfig) -> Self {
        let preview = project
            .preview_image
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(|path| PreviewBlock {
                image: path.to_string(),
                alt: format!("{} preview", project.title),
            });
        let badge_placement = if preview.is_some() {
            BadgePlacement::OnPreview
        } else {
            BadgePlacement::Inline
        };

        let live_href = project
            .url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(PLACEHOLDER_HREF);

        Self {
            title: project.title.clone(),
            period: project.period.clone(),
            description: truncate_description(&project.description, config.description_chars),
            preview,
            badge: status_badge(project.status),
            badge_placement,
            highlights: project
                .highlights
                .iter()
                .take(config.max_highlights)
                .cloned()
                .collect(),
            tags: project.technologies.clone(),
            live_link: Link {
                href: live_href.to_string(),
                label: "View Live",
                new_tab: true,
            },
            source_link: project
                .repository_url
                .as_deref()
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(|url| Link {
                    href: url.to_string(),
                    label: "Source",
                    new_tab: true,
                }),
        }
    }

    /// Badge to draw next to the period, if it is not on the preview
    pub fn inline_badge(&self) -> Option<&StatusBadge> {
        match self.badge_placement {
            BadgePlacement::Inline => Some(&self.badge),
            BadgePlacement::OnPreview => None,
        }
    }
}

/// Build cards for every project, preserving input order
pub fn project_cards(projects: &[Project], config: &CardConfig) -> Vec<ProjectCardView> {
    projects
        .iter()
        .map(|project| ProjectCardView::from_project(project, config))
        .collect()
}

/// Cut `text` to at most `max_chars` characters (plus an ellipsis),
/// preferring a word boundary
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut = text
        .char_indices()
        .nth(max_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    let head = &text[..cut];
    let head = match head.rfind(char::is_whitespace) {
        Some(space) if space > 0 => &head[..space],
        _ => head,
    };
    let head = head.trim_end_matches(|c: char| c.is_whitespace() || c == ',' || c == ';');
    format!("{head}…")
}

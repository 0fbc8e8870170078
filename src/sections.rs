//! Active-section tracking for navigation highlighting
//!
//! Every section is observed with the same threshold. Whenever a section
//! crosses into view it becomes the active one; leaving does not reset it.
//! When several sections cross in one frame the last one reported wins,
//! which depends on scroll direction and layout order. That is accepted.

use std::cell::Cell;
use std::rc::Rc;

use folio_types::SectionId;

use crate::error::{FolioError, Result};
use crate::visibility::{IntersectionObserver, Observation, Threshold};

/// Resolve a section anchor such as `projects` or `#projects`
pub fn parse_section(anchor: &str) -> Result<SectionId> {
    SectionId::from_anchor(anchor).ok_or_else(|| FolioError::UnknownSection(anchor.to_string()))
}

/// One entry in the navigation bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub section: SectionId,
    pub label: &'static str,
    pub href: String,
    pub highlighted: bool,
}

#[derive(Debug)]
pub struct ActiveSectionTracker {
    active: Rc<Cell<SectionId>>,
    _observations: Vec<Observation>,
}

impl ActiveSectionTracker {
    /// Observe every section in [`SectionId::ALL`]
    pub fn new(observer: &IntersectionObserver, threshold: Threshold) -> Self {
        Self::with_sections(observer, threshold, SectionId::ALL)
    }

    pub fn with_sections(
        observer: &IntersectionObserver,
        threshold: Threshold,
        sections: impl IntoIterator<Item = SectionId>,
    ) -> Self {
        let active = Rc::new(Cell::new(SectionId::default()));
        let observations = sections
            .into_iter()
            .map(|section| {
                let active = active.clone();
                observer.observe(section, threshold, move |entry| {
                    if entry.is_intersecting && active.get() != section {
                        tracing::debug!(section = section.anchor(), "active section");
                        active.set(section);
                    }
                })
            })
            .collect();

        Self {
            active,
            _observations: observations,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active.get()
    }

    pub fn is_active(&self, section: SectionId) -> bool {
        self.active.get() == section
    }

    /// Navigation entries in display order with the active one highlighted
    pub fn nav_entries(&self) -> Vec<NavEntry> {
        let active = self.active();
        SectionId::NAVIGABLE
            .into_iter()
            .filter_map(|section| {
                section.nav_label().map(|label| NavEntry {
                    section,
                    label,
                    href: section.href(),
                    highlighted: section == active,
                })
            })
            .collect()
    }
}

//! Page controller
//!
//! Owns all presentation state for one page view and answers the style
//! queries the renderer makes each frame. Hosts feed it three kinds of
//! events, all synchronously:
//!
//! - `on_scroll` with the vertical scroll offset
//! - `on_layout` with the viewport and region rects (drives the observer)
//! - `hover_*` with polled pointer containment
//!
//! Dropping the page drops every observation it made.

use folio_types::{Portfolio, SectionId};

use crate::card::{project_cards, ProjectCardView};
use crate::config::{global_config, MotionConfig};
use crate::contact::{ContactForm, SubmitOutcome};
use crate::error::Result;
use crate::geometry::Rect;
use crate::hover::{HoverState, HoverTransition};
use crate::motion::Transition;
use crate::parallax::{Parallax, ScrollTracker};
use crate::presentation::{self, CardLayer, Interaction, PhotoLayer, Style};
use crate::sections::{ActiveSectionTracker, NavEntry};
use crate::visibility::{IntersectionObserver, RegionId, VisibilityTracker};

/// Region name of the animated photo in the about panel
pub const PHOTO_REGION: &str = "about-photo";

/// Buttons with hover feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    ViewWork,
    GetInTouch,
    SendMessage,
}

impl Button {
    pub const ALL: [Button; 3] = [Self::ViewWork, Self::GetInTouch, Self::SendMessage];

    fn index(self) -> usize {
        match self {
            Self::ViewWork => 0,
            Self::GetInTouch => 1,
            Self::SendMessage => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ViewWork => "View My Work",
            Self::GetInTouch => "Get In Touch",
            Self::SendMessage => "Send Message",
        }
    }

    /// Section the button scrolls to, if any
    pub fn target(self) -> Option<SectionId> {
        match self {
            Self::ViewWork => Some(SectionId::Projects),
            Self::GetInTouch => Some(SectionId::Contact),
            Self::SendMessage => None,
        }
    }

    /// Filled buttons scale up on hover; the outline button only recolors
    pub fn grows_on_hover(self) -> bool {
        match self {
            Self::ViewWork | Self::SendMessage => true,
            Self::GetInTouch => false,
        }
    }
}

pub struct PortfolioPage {
    config: MotionConfig,
    observer: IntersectionObserver,
    scroll: ScrollTracker,
    parallax: Parallax,
    sections: ActiveSectionTracker,
    photo: VisibilityTracker,
    photo_hover: HoverState,
    skill_hover: Vec<HoverState>,
    card_hover: Vec<HoverState>,
    button_hover: [HoverState; 3],
    cards: Vec<ProjectCardView>,
    contact: ContactForm,
    mounted: bool,
}

impl PortfolioPage {
    pub fn new(portfolio: &Portfolio, config: MotionConfig) -> Result<Self> {
        let observer = IntersectionObserver::new();
        let sections = ActiveSectionTracker::new(&observer, config.section_threshold()?);
        let photo = VisibilityTracker::new(&observer, PHOTO_REGION, config.reveal_threshold()?);

        Ok(Self {
            parallax: Parallax::new(config.parallax.factor),
            cards: project_cards(&portfolio.projects, &config.card),
            skill_hover: vec![HoverState::new(); portfolio.skills.len()],
            card_hover: vec![HoverState::new(); portfolio.projects.len()],
            button_hover: [HoverState::new(); 3],
            scroll: ScrollTracker::new(),
            photo_hover: HoverState::new(),
            contact: ContactForm::new(),
            mounted: false,
            config,
            observer,
            sections,
            photo,
        })
    }

    /// Page for the embedded content with the embedded motion config
    pub fn from_catalog() -> Result<Self> {
        Self::new(crate::content::catalog(), global_config().clone())
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn observer(&self) -> &IntersectionObserver {
        &self.observer
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    /// First frame has been laid out; starts the hero fade-in
    pub fn mount(&mut self) {
        if !self.mounted {
            tracing::debug!("page mounted");
            self.mounted = true;
        }
    }

    pub fn on_scroll(&mut self, offset: f32) {
        self.scroll.on_scroll(offset);
    }

    /// Report the viewport and the rects of laid-out regions, in layout order
    pub fn on_layout<R, I>(&self, viewport: Rect, regions: I)
    where
        R: Into<RegionId>,
        I: IntoIterator<Item = (R, Rect)>,
    {
        self.observer.report(viewport, regions);
    }

    pub fn hover_photo(&mut self, pointer_inside: bool) -> Option<HoverTransition> {
        self.photo_hover.update(pointer_inside)
    }

    pub fn hover_skill(&mut self, index: usize, pointer_inside: bool) -> Option<HoverTransition> {
        self.skill_hover.get_mut(index)?.update(pointer_inside)
    }

    pub fn hover_card(&mut self, index: usize, pointer_inside: bool) -> Option<HoverTransition> {
        self.card_hover.get_mut(index)?.update(pointer_inside)
    }

    pub fn hover_button(&mut self, button: Button, pointer_inside: bool) -> Option<HoverTransition> {
        self.button_hover[button.index()].update(pointer_inside)
    }

    pub fn submit_contact(&self) -> SubmitOutcome {
        self.contact.submit()
    }

    pub fn contact_form(&self) -> &ContactForm {
        &self.contact
    }

    pub fn contact_form_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset()
    }

    pub fn active_section(&self) -> SectionId {
        self.sections.active()
    }

    pub fn nav_entries(&self) -> Vec<NavEntry> {
        self.sections.nav_entries()
    }

    pub fn cards(&self) -> &[ProjectCardView] {
        &self.cards
    }

    pub fn photo_state(&self) -> Interaction {
        Interaction::new(self.photo.is_visible(), self.photo_hover.is_hovered())
    }

    pub fn photo_style(&self, layer: PhotoLayer) -> Style {
        layer.style(self.photo_state())
    }

    pub fn photo_transition(&self, layer: PhotoLayer) -> Transition {
        layer.transition(&self.config)
    }

    pub fn card_hovered(&self, index: usize) -> bool {
        self.card_hover
            .get(index)
            .map(HoverState::is_hovered)
            .unwrap_or(false)
    }

    pub fn card_style(&self, index: usize, layer: CardLayer) -> Style {
        layer.style(self.card_hovered(index))
    }

    pub fn skill_style(&self, index: usize) -> Style {
        let hovered = self
            .skill_hover
            .get(index)
            .map(HoverState::is_hovered)
            .unwrap_or(false);
        presentation::skill_tile(hovered)
    }

    pub fn skill_transition(&self, index: usize) -> Transition {
        self.config.tile(index)
    }

    pub fn button_style(&self, button: Button) -> Style {
        let hovered = self.button_hover[button.index()].is_hovered();
        presentation::button(hovered && button.grows_on_hover())
    }

    /// Buttons share the short tile timing
    pub fn button_transition(&self) -> Transition {
        self.config.tile(0)
    }

    pub fn hero_background_style(&self) -> Style {
        presentation::hero_background(self.scroll.offset(), &self.parallax)
    }

    pub fn hero_content_style(&self) -> Style {
        presentation::hero_content(self.mounted)
    }
}

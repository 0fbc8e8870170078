//! Folio - presentation engine for a single-page portfolio
//!
//! Framework-free state behind the page: which regions are in view, which
//! are hovered, how far the page has scrolled, and the styles derived from
//! those flags. The egui front end (`folio-ui`) renders what this crate
//! computes; nothing here knows about a rendering backend.
//!
//! ```text
//!  scroll / layout / pointer events
//!              │
//!              ▼
//!  ┌───────────────────────┐    flags     ┌──────────────────┐
//!  │ IntersectionObserver  │ ───────────► │ presentation::*  │ ──► Style
//!  │ HoverState            │              │ (pure functions) │
//!  │ ScrollTracker         │              └──────────────────┘
//!  └───────────────────────┘
//! ```

pub mod card;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod motion;
pub mod page;
pub mod parallax;
pub mod presentation;
pub mod sections;
pub mod visibility;

pub use card::{status_badge, ProjectCardView, StatusBadge, PLACEHOLDER_IMAGE};
pub use config::{global_config, MotionConfig};
pub use contact::{ContactForm, SubmitOutcome};
pub use content::catalog;
pub use error::{FolioError, Result};
pub use geometry::Rect;
pub use hover::{HoverState, HoverTransition};
pub use motion::{Transition, Tween};
pub use page::{Button, PortfolioPage, PHOTO_REGION};
pub use parallax::{Parallax, ScrollTracker};
pub use presentation::{CardLayer, Interaction, PhotoLayer, Style, TransformOrigin};
pub use sections::{parse_section, ActiveSectionTracker, NavEntry};
pub use visibility::{
    IntersectionEntry, IntersectionObserver, Observation, RegionId, Threshold, VisibilityTracker,
};

pub use folio_types as types;

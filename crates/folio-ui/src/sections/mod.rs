//! Page sections
//!
//! Each section renders from the shared [`SectionCx`] and reports what the
//! user asked for through [`PageAction`]. Sections never mutate app state
//! beyond hover and form input on the page controller.

pub mod about;
pub mod contact;
pub mod education;
pub mod footer;
pub mod hero;
pub mod nav;
pub mod projects;
pub mod skills;

use egui::text::{LayoutJob, TextFormat};
use egui::{Align, Layout, Ui};
use folio::{PortfolioPage, RegionId};
use folio_types::{Portfolio, SectionId};

use crate::animation::Animator;
use crate::theme;

/// Everything a section needs to draw itself
pub struct SectionCx<'a> {
    pub page: &'a mut PortfolioPage,
    pub animator: &'a mut Animator,
    pub portfolio: &'a Portfolio,
    /// Page origin used to absolutize asset paths for the image loaders
    pub asset_origin: &'a str,
    /// Screen rects of observed regions other than sections
    pub regions: Vec<(RegionId, egui::Rect)>,
}

impl SectionCx<'_> {
    pub fn asset_url(&self, path: &str) -> String {
        asset_url(self.asset_origin, path)
    }
}

/// Resolve a site-relative path against `origin`; absolute URLs pass through
pub fn asset_url(origin: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || origin.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", origin.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

/// What the user asked for while rendering a frame
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageAction {
    pub scroll_to: Option<SectionId>,
    pub open_url: Option<String>,
    pub submit_contact: bool,
}

impl PageAction {
    pub fn merge(&mut self, other: PageAction) {
        if other.scroll_to.is_some() {
            self.scroll_to = other.scroll_to;
        }
        if other.open_url.is_some() {
            self.open_url = other.open_url;
        }
        self.submit_contact |= other.submit_contact;
    }
}

/// Render one section by id
pub fn show(section: SectionId, ui: &mut Ui, cx: &mut SectionCx<'_>) -> PageAction {
    match section {
        SectionId::Hero => hero::show(ui, cx),
        SectionId::About => about::show(ui, cx),
        SectionId::Skills => skills::show(ui, cx),
        SectionId::Projects => projects::show(ui, cx),
        SectionId::Education => education::show(ui, cx),
        SectionId::Contact => contact::show(ui, cx),
    }
}

/// Heading text with a white lead and a blue accent word
pub fn two_tone(lead: &str, accent: &str) -> LayoutJob {
    let font = theme::heading_font();
    let mut job = LayoutJob::default();
    job.append(lead, 0.0, TextFormat::simple(font.clone(), theme::TEXT));
    job.append(accent, 8.0, TextFormat::simple(font, theme::BLUE));
    job
}

/// Centered section heading with a gradient rule under it
pub fn section_heading(ui: &mut Ui, lead: &str, accent: &str) {
    ui.add_space(80.0);
    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        ui.label(two_tone(lead, accent));
        let (rect, _) = ui.allocate_exact_size(egui::vec2(96.0, 4.0), egui::Sense::hover());
        crate::paint::horizontal_gradient(ui.painter(), rect, theme::BLUE_STRONG, theme::PURPLE);
    });
    ui.add_space(48.0);
}

/// Paint `fill` behind everything `add_contents` lays out, edge to edge
pub fn tinted_band<R>(ui: &mut Ui, fill: egui::Color32, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    let top = ui.cursor().top();
    let slot = ui.painter().add(egui::Shape::Noop);
    let inner = add_contents(ui);
    let rect = egui::Rect::from_x_y_ranges(ui.max_rect().x_range(), top..=ui.min_rect().max.y);
    ui.painter()
        .set(slot, egui::Shape::rect_filled(rect, egui::Rounding::ZERO, fill));
    inner
}

/// Horizontally centered column capped at the content width
pub fn content_column<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    let available = ui.available_width();
    let width = (available - 32.0).clamp(0.0, theme::MAX_CONTENT_WIDTH);
    let margin = (available - width) / 2.0;
    ui.horizontal(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_width(width);
            add_contents(ui)
        })
        .inner
    })
    .inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_asset_url_joins_origin() {
        assert_eq!(
            asset_url("http://localhost:3000/", "/images/a.jpeg"),
            "http://localhost:3000/images/a.jpeg"
        );
    }

    #[test]
    fn test_asset_url_passes_absolute() {
        assert_eq!(asset_url("http://x", "https://cdn/a.png"), "https://cdn/a.png");
        assert_eq!(asset_url("", "/images/a.png"), "/images/a.png");
    }

    #[test]
    fn test_merge_keeps_latest_request() {
        let mut action = PageAction::default();
        action.merge(PageAction {
            scroll_to: Some(SectionId::About),
            ..Default::default()
        });
        action.merge(PageAction {
            submit_contact: true,
            ..Default::default()
        });
        assert_eq!(
            action,
            PageAction {
                scroll_to: Some(SectionId::About),
                open_url: None,
                submit_contact: true,
            }
        );
    }
}

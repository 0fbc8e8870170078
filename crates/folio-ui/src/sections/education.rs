use egui::{RichText, Rounding, Ui};
use folio_types::{Certification, Education};

use super::{content_column, section_heading, PageAction, SectionCx};
use crate::theme;

pub fn show(ui: &mut Ui, cx: &mut SectionCx<'_>) -> PageAction {
    let portfolio = cx.portfolio;
    section_heading(ui, "Education &", "Certifications");

    content_column(ui, |ui| {
        let columns = if ui.available_width() >= 820.0 { 2 } else { 1 };
        if columns == 2 {
            ui.columns(2, |cols| {
                education_list(&mut cols[0], &portfolio.education);
                certification_list(&mut cols[1], &portfolio.certifications);
            });
        } else {
            education_list(ui, &portfolio.education);
            ui.add_space(32.0);
            certification_list(ui, &portfolio.certifications);
        }
    });
    ui.add_space(80.0);

    PageAction::default()
}

fn education_list(ui: &mut Ui, entries: &[Education]) {
    ui.label(RichText::new("Education").size(24.0).strong().color(theme::BLUE));
    ui.add_space(16.0);
    for entry in entries {
        egui::Frame::none()
            .fill(theme::faded(theme::SURFACE, 0.5))
            .rounding(Rounding::same(12.0))
            .inner_margin(24.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(&entry.degree).size(20.0).strong().color(theme::TEXT));
                ui.label(RichText::new(&entry.institution).color(theme::TEXT_MUTED));
                ui.label(RichText::new(&entry.period).color(theme::TEXT_MUTED));
                ui.label(RichText::new(&entry.grade).strong().color(theme::BLUE));
            });
        ui.add_space(16.0);
    }
}

fn certification_list(ui: &mut Ui, certifications: &[Certification]) {
    ui.label(RichText::new("Certifications").size(24.0).strong().color(theme::PURPLE_LIGHT));
    ui.add_space(16.0);
    for cert in certifications {
        let frame = egui::Frame::none()
            .rounding(Rounding::same(8.0))
            .inner_margin(16.0);
        // tint follows last frame's pointer test
        let id = ui.id().with(("cert", &cert.title));
        let hovered = ui.data(|d| d.get_temp::<bool>(id).unwrap_or(false));
        let fill = if hovered {
            theme::faded(theme::SURFACE_RAISED, 0.5)
        } else {
            theme::faded(theme::SURFACE, 0.5)
        };
        let response = frame
            .fill(fill)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new("🏆").color(theme::YELLOW));
                    ui.label(RichText::new(&cert.title).color(theme::TEXT_BODY));
                });
            })
            .response;
        let now_hovered = ui.rect_contains_pointer(response.rect);
        ui.data_mut(|d| d.insert_temp(id, now_hovered));
        ui.add_space(4.0);
    }
}

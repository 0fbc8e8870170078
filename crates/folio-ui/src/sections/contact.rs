//! Contact details and the message form

use egui::{RichText, Rounding, TextEdit, Ui};
use folio::contact::{EMAIL_PLACEHOLDER, MESSAGE_PLACEHOLDER, NAME_PLACEHOLDER};
use folio::Button;
use folio_types::{ContactDetails, SocialKind};

use super::{content_column, section_heading, PageAction, SectionCx};
use crate::theme;
use crate::widgets::{cta_button, ButtonKind};

pub fn show(ui: &mut Ui, cx: &mut SectionCx<'_>) -> PageAction {
    let mut action = PageAction::default();
    let portfolio = cx.portfolio;
    section_heading(ui, "Get In", "Touch");

    content_column(ui, |ui| {
        let columns = if ui.available_width() >= 820.0 { 2 } else { 1 };
        ui.columns(columns, |cols| {
            action.merge(details(&mut cols[0], &portfolio.contact));
            let form_ui = if columns == 2 { &mut cols[1] } else { &mut cols[0] };
            form_ui.add_space(if columns == 2 { 0.0 } else { 32.0 });
            action.merge(form(form_ui, cx));
        });
    });
    ui.add_space(80.0);

    action
}

fn details(ui: &mut Ui, contact: &ContactDetails) -> PageAction {
    let mut action = PageAction::default();

    ui.label(RichText::new("Let's Connect").size(24.0).strong().color(theme::BLUE));
    ui.add_space(12.0);
    ui.label(RichText::new(&contact.intro).size(18.0).color(theme::TEXT_BODY));
    ui.add_space(24.0);

    for (icon, label, value) in [
        ("📞", "Phone", &contact.phone),
        ("✉", "Email", &contact.email),
        ("📍", "Location", &contact.location),
    ] {
        egui::Frame::none()
            .fill(theme::faded(theme::SURFACE_RAISED, 0.3))
            .rounding(Rounding::same(8.0))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(icon).size(20.0).color(theme::BLUE));
                    ui.add_space(8.0);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(label).strong().color(theme::TEXT));
                        ui.label(RichText::new(value).color(theme::TEXT_MUTED));
                    });
                });
            });
        ui.add_space(8.0);
    }

    ui.add_space(16.0);
    ui.horizontal(|ui| {
        for social in &contact.socials {
            let fill = match social.kind {
                SocialKind::LinkedIn => theme::BLUE_STRONG,
                SocialKind::GitHub => theme::SURFACE_RAISED,
            };
            let clicked = ui
                .add(
                    egui::Button::new(RichText::new(social.kind.label()).color(theme::TEXT))
                        .fill(fill)
                        .rounding(Rounding::same(8.0))
                        .min_size(egui::vec2(96.0, 44.0)),
                )
                .on_hover_cursor(egui::CursorIcon::PointingHand)
                .clicked();
            if clicked {
                action.open_url = Some(social.url.clone());
            }
        }
    });

    action
}

fn form(ui: &mut Ui, cx: &mut SectionCx<'_>) -> PageAction {
    let mut action = PageAction::default();

    egui::Frame::none()
        .fill(theme::faded(theme::SURFACE_RAISED, 0.3))
        .rounding(Rounding::same(12.0))
        .inner_margin(32.0)
        .show(ui, |ui| {
            let width = ui.available_width();
            let fields = cx.page.contact_form_mut();

            ui.label(RichText::new("Name").small().strong().color(theme::TEXT));
            ui.add(
                TextEdit::singleline(&mut fields.name)
                    .hint_text(NAME_PLACEHOLDER)
                    .desired_width(width),
            );
            ui.add_space(16.0);

            ui.label(RichText::new("Email").small().strong().color(theme::TEXT));
            ui.add(
                TextEdit::singleline(&mut fields.email)
                    .hint_text(EMAIL_PLACEHOLDER)
                    .desired_width(width),
            );
            ui.add_space(16.0);

            ui.label(RichText::new("Message").small().strong().color(theme::TEXT));
            ui.add(
                TextEdit::multiline(&mut fields.message)
                    .hint_text(MESSAGE_PLACEHOLDER)
                    .desired_rows(5)
                    .desired_width(width),
            );
            ui.add_space(24.0);

            if cta_button(
                ui,
                cx.page,
                cx.animator,
                Button::SendMessage,
                ButtonKind::Block,
                Some(width),
            ) {
                action.submit_contact = true;
            }
        });

    action
}

//! Skills grid

use egui::{vec2, Align2, FontId, Rect, Rounding, Sense, Ui};
use folio::{Style, TransformOrigin};
use folio_types::{Skill, SkillIcon};

use super::{content_column, section_heading, PageAction, SectionCx};
use crate::{paint, theme};

const TILE_HEIGHT: f32 = 124.0;
const GAP: f32 = 32.0;

pub fn show(ui: &mut Ui, cx: &mut SectionCx<'_>) -> PageAction {
    let portfolio = cx.portfolio;
    section_heading(ui, "Technical", "Skills");

    content_column(ui, |ui| {
        let width = ui.available_width();
        let columns = columns_for(width);
        let tile_width = (width - GAP * (columns as f32 - 1.0)) / columns as f32;

        for (row, chunk) in portfolio.skills.chunks(columns).enumerate() {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = GAP;
                for (col, skill) in chunk.iter().enumerate() {
                    skill_tile(ui, cx, row * columns + col, skill, vec2(tile_width, TILE_HEIGHT));
                }
            });
            ui.add_space(GAP - ui.spacing().item_spacing.y);
        }
    });
    ui.add_space(80.0);

    PageAction::default()
}

/// 4 columns on wide screens, 2 on medium, 1 on narrow
fn columns_for(width: f32) -> usize {
    if width >= 1000.0 {
        4
    } else if width >= 640.0 {
        2
    } else {
        1
    }
}

fn icon_glyph(icon: SkillIcon) -> &'static str {
    match icon {
        SkillIcon::Code => "💻",
        SkillIcon::Database => "🗄",
        SkillIcon::Globe => "🌐",
    }
}

fn skill_tile(ui: &mut Ui, cx: &mut SectionCx<'_>, index: usize, skill: &Skill, size: egui::Vec2) {
    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
    cx.page.hover_skill(index, response.hovered());

    // Tiles fade in once, staggered by position, the first time they scroll into view
    let id = response.id;
    let seen_id = id.with("seen");
    let seen = ui.is_rect_visible(rect) || ui.data(|d| d.get_temp::<bool>(seen_id).unwrap_or(false));
    if seen {
        ui.data_mut(|d| d.insert_temp(seen_id, true));
    }
    let entrance = cx.animator.style(
        id.with("entrance"),
        if seen { Style::IDENTITY } else { Style::HIDDEN },
        cx.page.skill_transition(index),
    );
    let hover = cx.animator.style(
        id.with("hover"),
        cx.page.skill_style(index),
        cx.page.config().tile(0),
    );

    let tile = paint::transformed_rect(rect, &hover, TransformOrigin::Center);
    let opacity = entrance.opacity;
    let fill = if response.hovered() {
        theme::faded(theme::SURFACE_RAISED, 0.5)
    } else {
        theme::faded(theme::SURFACE, 0.5)
    };
    let painter = ui.painter();
    painter.rect_filled(tile, Rounding::same(12.0), theme::faded(fill, opacity));

    let inner = tile.shrink(24.0);
    painter.text(
        inner.left_top(),
        Align2::LEFT_TOP,
        icon_glyph(skill.icon),
        FontId::proportional(20.0),
        theme::faded(theme::BLUE, opacity),
    );
    painter.text(
        inner.left_top() + vec2(32.0, 0.0),
        Align2::LEFT_TOP,
        &skill.name,
        FontId::proportional(18.0),
        theme::faded(theme::TEXT, opacity),
    );

    let track = Rect::from_min_size(inner.left_top() + vec2(0.0, 40.0), vec2(inner.width(), 8.0));
    painter.rect_filled(track, Rounding::same(4.0), theme::faded(theme::SURFACE_RAISED, opacity));
    let fill_rect = track.with_max_x(track.min.x + track.width() * skill.fraction() * opacity);
    if fill_rect.width() > 0.0 {
        paint::horizontal_gradient(
            painter,
            fill_rect,
            theme::faded(theme::BLUE_STRONG, opacity),
            theme::faded(theme::PURPLE, opacity),
        );
    }
    painter.text(
        track.right_bottom() + vec2(0.0, 8.0),
        Align2::RIGHT_TOP,
        format!("{}%", skill.level),
        FontId::proportional(13.0),
        theme::faded(theme::TEXT_MUTED, opacity),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_follow_width() {
        assert_eq!(columns_for(1200.0), 4);
        assert_eq!(columns_for(800.0), 2);
        assert_eq!(columns_for(320.0), 1);
    }
}

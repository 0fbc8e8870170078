//! Main application

use egui::{Align, Frame, RichText, ScrollArea};
use folio::{PortfolioPage, RegionId, SubmitOutcome};
use folio_types::{Portfolio, SectionId};

use crate::animation::Animator;
use crate::sections::{self, PageAction, SectionCx};
use crate::{paint, theme};

/// Frame gaps above this are treated as a pause, not elapsed animation time
const MAX_FRAME_DT: f32 = 0.1;

pub struct PortfolioApp {
    page: Result<PortfolioPage, String>,
    portfolio: &'static Portfolio,
    animator: Animator,
    asset_origin: String,
    /// Section requested from the nav bar or a button, scrolled to next frame
    pending_section: Option<SectionId>,
}

impl PortfolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        theme::install(&cc.egui_ctx);
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let page = PortfolioPage::from_catalog().map_err(|e| {
            tracing::error!("Failed to build page: {}", e);
            e.to_string()
        });

        Self {
            page,
            portfolio: folio::catalog(),
            animator: Animator::new(),
            asset_origin: asset_origin(),
            pending_section: initial_section(),
        }
    }
}

/// `window.location.origin`, so relative asset paths resolve for the image loaders
fn asset_origin() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

/// Section named by the URL fragment, so `/#projects` opens at the projects
fn initial_section() -> Option<SectionId> {
    #[cfg(target_arch = "wasm32")]
    {
        let hash = web_sys::window().and_then(|w| w.location().hash().ok())?;
        if hash.trim_start_matches('#').is_empty() {
            return None;
        }
        folio::parse_section(&hash)
            .map_err(|e| tracing::warn!("Ignoring URL fragment: {}", e))
            .ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let page = match self.page.as_mut() {
            Ok(page) => page,
            Err(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.label(RichText::new(error.as_str()).color(egui::Color32::RED));
                });
                return;
            }
        };

        let dt = ctx.input(|i| i.stable_dt).min(MAX_FRAME_DT);
        self.animator.begin_frame(dt);
        let mut action = PageAction::default();

        // =====================================================================
        // NAV BAR
        // =====================================================================
        egui::TopBottomPanel::top("nav")
            .frame(Frame::none().fill(theme::NAV_BACKGROUND))
            .show_separator_line(false)
            .show(ctx, |ui| {
                action.merge(sections::nav::show(ui, page, &self.portfolio.profile.initials));
            });

        // =====================================================================
        // PAGE
        // =====================================================================
        egui::CentralPanel::default()
            .frame(Frame::none().fill(theme::BACKGROUND))
            .show(ctx, |ui| {
                let mut cx = SectionCx {
                    page,
                    animator: &mut self.animator,
                    portfolio: self.portfolio,
                    asset_origin: &self.asset_origin,
                    regions: Vec::new(),
                };
                let scroll_target = self.pending_section.take();
                let mut section_rects = Vec::with_capacity(SectionId::ALL.len());

                let output = ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.spacing_mut().item_spacing.y = 0.0;
                        for section in SectionId::ALL {
                            let inner = ui.scope(|ui| {
                                ui.spacing_mut().item_spacing.y = 8.0;
                                sections::show(section, ui, &mut cx)
                            });
                            if scroll_target == Some(section) {
                                ui.scroll_to_rect(inner.response.rect, Some(Align::TOP));
                            }
                            action.merge(inner.inner);
                            section_rects.push((section, inner.response.rect));
                        }
                        sections::footer::show(ui, &self.portfolio.footer);
                    });

                // Regions are reported in layout order so later sections win ties
                let regions = section_rects
                    .into_iter()
                    .map(|(section, rect)| (RegionId::from(section), paint::to_engine(rect)))
                    .chain(
                        cx.regions
                            .into_iter()
                            .map(|(region, rect)| (region, paint::to_engine(rect))),
                    );
                cx.page.on_scroll(output.state.offset.y);
                cx.page.on_layout(paint::to_engine(output.inner_rect), regions);
                cx.page.mount();
            });

        // =====================================================================
        // ACTIONS
        // =====================================================================
        if let Some(section) = action.scroll_to {
            tracing::debug!(section = section.anchor(), "scroll to section");
            self.pending_section = Some(section);
            ctx.request_repaint();
        }
        if let Some(url) = action.open_url {
            ctx.open_url(egui::OpenUrl::new_tab(url));
        }
        if action.submit_contact {
            if let Ok(page) = self.page.as_ref() {
                match page.submit_contact() {
                    SubmitOutcome::NoEndpoint => {
                        tracing::debug!("contact form has no endpoint; nothing sent")
                    }
                }
            }
        }

        if self.animator.is_animating() {
            ctx.request_repaint();
        }
    }
}

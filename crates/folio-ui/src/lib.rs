//! Folio UI - egui rendering of the portfolio page

pub mod animation;
pub mod app;
pub mod paint;
pub mod sections;
pub mod theme;
pub mod widgets;

pub use app::PortfolioApp;

/// Id of the `<canvas>` element in `index.html`
pub const CANVAS_ID: &str = "folio_canvas";

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let Some(canvas) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CANVAS_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
    else {
        tracing::error!("canvas #{} not found", CANVAS_ID);
        return;
    };

    wasm_bindgen_futures::spawn_local(async move {
        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(PortfolioApp::new(cc)))),
            )
            .await;
        if let Err(e) = result {
            tracing::error!("Failed to start eframe: {:?}", e);
        }
    });
}

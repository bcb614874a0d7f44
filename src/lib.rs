pub mod app;
pub mod config;
pub mod data;
pub mod focus_trap;
pub mod model;
pub mod router;
pub mod store;
pub mod ui;

pub use app::DashboardApp;
pub use focus_trap::FocusTrap;
pub use router::DashboardRouter;
pub use store::DashboardStore;

/// Mounts the dashboard on `canvas` and runs it in the browser.
#[cfg(target_arch = "wasm32")]
pub fn start_web(canvas: web_sys::HtmlCanvasElement) {
    eframe::WebLogger::init(log::LevelFilter::Info).ok();

    let config = config::DashboardConfig::default();
    let catalog = data::read_catalog_embedded().unwrap_or_else(|e| {
        log::error!("embedded catalog is malformed: {e}");
        model::ContentCatalog::default()
    });
    let app = app::build_web_app(config, catalog);

    wasm_bindgen_futures::spawn_local(async move {
        let started = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(app))),
            )
            .await;
        if let Err(e) = started {
            log::error!("failed to start eframe: {e:?}");
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use kids_dashboard::config::DashboardConfig;
    use kids_dashboard::data::read_catalog_embedded;
    use kids_dashboard::store::{DashboardStore, FileSnapshotStore, SessionSeed};
    use kids_dashboard::DashboardApp;
    use tracing_subscriber::EnvFilter;

    let (config, config_error) = match DashboardConfig::load(DashboardConfig::DEFAULT_PATH) {
        Ok(config) => (config, None),
        Err(e) => (DashboardConfig::default(), Some(e)),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        eprintln!("logger already installed");
    }
    if let Some(e) = config_error {
        log::warn!("{e}; using default settings");
    }

    let catalog = read_catalog_embedded().unwrap_or_else(|e| {
        log::error!("embedded catalog is malformed: {e}");
        Default::default()
    });
    let store = DashboardStore::new(FileSnapshotStore::new(&config.snapshot_path), catalog)
        .with_profile_defaults(config.profile_defaults());
    let app = DashboardApp::new(config, store, SessionSeed::from_env());

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Kids Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}

// The web build starts through `kids_dashboard::start_web`.
#[cfg(target_arch = "wasm32")]
fn main() {}

use crate::config::DashboardConfig;
use crate::model::Route;
use crate::router::{DashboardRouter, ResourceLease, RouterEvent};
use crate::store::{DashboardStore, SessionSeed, SnapshotStore};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::mpsc::Receiver;

// Submodules
pub mod actions;
pub mod player;
pub mod wiring;

pub use player::PlayerSession;

/// The kids dashboard as an egui application: owns the store and the router
/// and wires data between them. The two never talk to each other directly.
pub struct DashboardApp<S: SnapshotStore> {
    pub config: DashboardConfig,
    pub store: DashboardStore<S>,
    pub router: DashboardRouter,
    pub seed: SessionSeed,
    pub message: String,
    pub player: Option<PlayerSession>,
    events: Receiver<RouterEvent>,
    camera_lease: Option<ResourceLease>,
    camera_on: Rc<Cell<bool>>,
    /// egui time of the first frame, drives the demo loading delay
    started_at: Option<f64>,
    /// Route seen on the last frame and when it was entered.
    seen_route: Option<(Route, f64)>,
}

impl<S: SnapshotStore> DashboardApp<S> {
    pub fn new(config: DashboardConfig, store: DashboardStore<S>, seed: SessionSeed) -> Self {
        let mut router = DashboardRouter::new();
        let events = router.channel();
        Self {
            config,
            store,
            router,
            seed,
            message: String::new(),
            player: None,
            events,
            camera_lease: None,
            camera_on: Rc::new(Cell::new(false)),
            started_at: None,
            seen_route: None,
        }
    }

    /// Restores a saved session right away; a fresh profile is seeded only
    /// once the demo loading delay has passed.
    pub fn poll_initialize(&mut self, now: f64) -> bool {
        if self.store.is_initialized() {
            return true;
        }
        if self.started_at.is_none() && self.store.restore().is_some() {
            return true;
        }
        let started = *self.started_at.get_or_insert(now);
        let delay = self.config.loading_delay_ms as f64 / 1000.0;
        if now - started < delay {
            return false;
        }
        self.store.initialize(&self.seed);
        true
    }

    /// Seconds spent on the current route, measured from the first frame
    /// that asked after the route was entered.
    pub fn route_elapsed(&mut self, now: f64) -> f64 {
        let route = self.router.current_route();
        match self.seen_route {
            Some((seen, entered)) if seen == route => now - entered,
            _ => {
                self.seen_route = Some((route, now));
                0.0
            }
        }
    }

    pub fn camera_on(&self) -> bool {
        self.camera_on.get()
    }
}

#[cfg(target_arch = "wasm32")]
pub fn build_web_app(
    config: DashboardConfig,
    catalog: crate::model::ContentCatalog,
) -> DashboardApp<crate::store::WebSnapshotStore> {
    let port = crate::store::WebSnapshotStore::new(config.storage_key.clone());
    let store = DashboardStore::new(port, catalog).with_profile_defaults(config.profile_defaults());
    DashboardApp::new(config, store, SessionSeed::from_session_storage())
}

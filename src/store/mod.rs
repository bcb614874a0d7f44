use crate::model::{ContentCatalog, KidsDashboardState, UiState, UserProfile};

// Submodules
pub mod actions;
pub mod persistence;
pub mod queries;
pub mod snapshot;

#[cfg(target_arch = "wasm32")]
pub use snapshot::WebSnapshotStore;
pub use snapshot::{FileSnapshotStore, MemorySnapshotStore, Snapshot, SnapshotStore, StorageError};

/// How `initialize` obtained the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitOutcome {
    /// A persisted snapshot was loaded.
    Restored,
    /// Nothing usable was stored; profile seeded from the session.
    Fresh,
}

/// Session-scoped values used only on first initialization.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSeed {
    pub child_name: Option<String>,
    pub child_avatar: Option<String>,
}

impl SessionSeed {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let read = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self {
            child_name: read("KIDS_DASHBOARD_CHILD_NAME"),
            child_avatar: read("KIDS_DASHBOARD_CHILD_AVATAR"),
        }
    }

    /// `sessionStorage` keys `childName` / `childAvatar`.
    #[cfg(target_arch = "wasm32")]
    pub fn from_session_storage() -> Self {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten());
        let read = |key: &str| {
            storage
                .as_ref()
                .and_then(|s| s.get_item(key).ok().flatten())
                .filter(|v| !v.trim().is_empty())
        };
        Self {
            child_name: read("childName"),
            child_avatar: read("childAvatar"),
        }
    }
}

/// Fallbacks when the session carries no profile values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileDefaults {
    pub name: String,
    pub avatar: String,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            name: "Alex".to_owned(),
            avatar: "/images/avatars/child-avatar-1.png".to_owned(),
        }
    }
}

/// Profile, catalog and UI flags of the kids dashboard, mirrored to a
/// [`SnapshotStore`] after every change once initialized.
///
/// Persistence is best-effort: storage failures are logged and the session
/// carries on in memory.
#[derive(Debug)]
pub struct DashboardStore<S: SnapshotStore> {
    state: KidsDashboardState,
    port: S,
    defaults: ProfileDefaults,
    initialized: Option<InitOutcome>,
    /// Last snapshot known to be in storage.
    last_written: Option<Snapshot>,
}

impl<S: SnapshotStore> DashboardStore<S> {
    pub fn new(port: S, catalog: ContentCatalog) -> Self {
        Self {
            state: KidsDashboardState {
                user: UserProfile {
                    name: String::new(),
                    avatar: String::new(),
                    streak: 0,
                    badges: Vec::new(),
                    last_streak_day: None,
                },
                content: catalog,
                ui: UiState::default(),
            },
            port,
            defaults: ProfileDefaults::default(),
            initialized: None,
            last_written: None,
        }
    }

    pub fn with_profile_defaults(mut self, defaults: ProfileDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Loads the persisted snapshot, or seeds the profile from `seed` when
    /// there is none. Runs once; later calls return the first outcome.
    pub fn initialize(&mut self, seed: &SessionSeed) -> InitOutcome {
        if let Some(outcome) = self.restore() {
            return outcome;
        }

        let user = &mut self.state.user;
        user.name = seed
            .child_name
            .clone()
            .unwrap_or_else(|| self.defaults.name.clone());
        user.avatar = seed
            .child_avatar
            .clone()
            .unwrap_or_else(|| self.defaults.avatar.clone());
        self.state.ui.is_loading = false;
        self.finish_init(InitOutcome::Fresh)
    }

    /// Initializes from the persisted snapshot only. `None` when nothing
    /// usable is stored, leaving the store uninitialized.
    pub fn restore(&mut self) -> Option<InitOutcome> {
        if let Some(outcome) = self.initialized {
            return Some(outcome);
        }
        self.load_state()
            .then(|| self.finish_init(InitOutcome::Restored))
    }

    fn finish_init(&mut self, outcome: InitOutcome) -> InitOutcome {
        self.initialized = Some(outcome);
        log::info!(
            "dashboard initialized ({outcome:?}) for {}",
            self.state.user.name
        );
        self.persist();
        outcome
    }

    /// Applies `change`, then persists if initialized.
    fn update(&mut self, change: impl FnOnce(&mut KidsDashboardState)) {
        change(&mut self.state);
        self.persist();
    }
}

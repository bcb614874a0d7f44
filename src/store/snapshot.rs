use crate::model::KidsDashboardState;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot (de)serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Serialized dashboard document, compared as a whole before writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(String);

impl Snapshot {
    pub fn encode(state: &KidsDashboardState) -> Result<Self, StorageError> {
        Ok(Snapshot(serde_json::to_string(state)?))
    }

    pub fn decode(&self) -> Result<KidsDashboardState, StorageError> {
        Ok(serde_json::from_str(&self.0)?)
    }

    pub fn from_raw(raw: impl Into<String>) -> Self {
        Snapshot(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Durable home of the dashboard document.
pub trait SnapshotStore {
    fn load(&self) -> Result<Option<Snapshot>, StorageError>;
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), StorageError>;
}

/// In-process store; counts writes and can be told to fail.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    stored: Option<Snapshot>,
    writes: usize,
    fail_writes: bool,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            stored: Some(snapshot),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn stored(&self) -> Option<&Snapshot> {
        self.stored.as_ref()
    }

    pub fn set_failing(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Result<Option<Snapshot>, StorageError> {
        Ok(self.stored.clone())
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable("quota exceeded".into()));
        }
        self.stored = Some(snapshot.clone());
        self.writes += 1;
        Ok(())
    }
}

/// JSON file on disk (native builds).
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the stored document. Already absent counts as removed.
    pub fn delete(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<Option<Snapshot>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => Ok(Some(Snapshot(json))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<(), StorageError> {
        std::fs::write(&self.path, snapshot.as_str())?;
        Ok(())
    }
}

/// `window.localStorage`, one key for the whole document.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct WebSnapshotStore {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl WebSnapshotStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl SnapshotStore for WebSnapshotStore {
    fn load(&self) -> Result<Option<Snapshot>, StorageError> {
        Self::storage()?
            .get_item(&self.key)
            .map(|raw| raw.map(Snapshot))
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(&self.key, snapshot.as_str())
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips_and_reports_absence() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileSnapshotStore::new(dir.path().join("state.json"));
        assert!(store.load().unwrap().is_none());

        store.save(&Snapshot::from_raw("{\"a\":1}")).unwrap();
        assert_eq!(store.load().unwrap().unwrap().as_str(), "{\"a\":1}");

        store.delete().unwrap();
        assert!(store.load().unwrap().is_none());
        store.delete().unwrap();
    }

    #[test]
    fn file_store_surfaces_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        // a directory where the file should be
        let mut store = FileSnapshotStore::new(dir.path());
        assert!(matches!(
            store.save(&Snapshot::from_raw("{}")),
            Err(StorageError::Io(_))
        ));
        assert!(matches!(store.delete(), Err(StorageError::Io(_))));
    }

    #[test]
    fn memory_store_counts_only_successful_writes() {
        let mut store = MemorySnapshotStore::failing();
        assert!(store.save(&Snapshot::from_raw("x")).is_err());
        assert_eq!(store.writes(), 0);
        store.set_failing(false);
        store.save(&Snapshot::from_raw("x")).unwrap();
        assert_eq!(store.writes(), 1);
        assert_eq!(store.stored().map(Snapshot::as_str), Some("x"));
    }
}

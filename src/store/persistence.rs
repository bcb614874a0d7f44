use super::*;

impl<S: SnapshotStore> DashboardStore<S> {
    /// Writes the current state, skipping the write when the serialized form
    /// matches the last one stored.
    pub fn save_state(&mut self) {
        let snapshot = match Snapshot::encode(&self.state) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("Failed to save dashboard state: {e}");
                return;
            }
        };
        if self.last_written.as_ref() == Some(&snapshot) {
            return;
        }
        match self.port.save(&snapshot) {
            Ok(()) => self.last_written = Some(snapshot),
            Err(e) => log::warn!("Failed to save dashboard state: {e}"),
        }
    }

    /// Replaces the in-memory state with the stored snapshot.
    /// Missing, unreadable or unparsable snapshots leave the state alone.
    pub fn load_state(&mut self) -> bool {
        let snapshot = match self.port.load() {
            Ok(Some(s)) => s,
            Ok(None) => return false,
            Err(e) => {
                log::warn!("Failed to load dashboard state: {e}");
                return false;
            }
        };
        match snapshot.decode() {
            Ok(state) => {
                // compare later writes against our own encoding, not the raw text
                self.last_written = Snapshot::encode(&state).ok().or(Some(snapshot));
                self.state = state;
                true
            }
            Err(e) => {
                log::warn!("Failed to load dashboard state: {e}");
                false
            }
        }
    }

    /// Auto-save hook run after every intent.
    pub(super) fn persist(&mut self) {
        if self.initialized.is_some() {
            self.save_state();
        }
    }
}

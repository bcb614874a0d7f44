use super::*;

/// Proof that a teardown is registered with the router.
///
/// Only one lease can be outstanding at a time. Hand it back with
/// [`DashboardRouter::clear_cleanup`] or [`DashboardRouter::release`].
#[must_use]
#[derive(Debug, PartialEq, Eq)]
pub struct ResourceLease {
    id: u64,
    label: String,
}

impl ResourceLease {
    pub fn label(&self) -> &str {
        &self.label
    }
}

struct Registered {
    id: u64,
    label: String,
    teardown: Box<dyn FnOnce()>,
}

#[derive(Default)]
pub(super) struct CleanupSlot {
    active: Option<Registered>,
    next_id: u64,
}

impl CleanupSlot {
    pub(super) fn label(&self) -> Option<&str> {
        self.active.as_ref().map(|r| r.label.as_str())
    }
}

impl DashboardRouter {
    /// Registers the teardown for the resource a content screen holds
    /// (camera stream, player). Fails while another one is registered.
    pub fn register_cleanup(
        &mut self,
        label: impl Into<String>,
        teardown: impl FnOnce() + 'static,
    ) -> Result<ResourceLease, NavigationError> {
        if let Some(active) = &self.cleanup.active {
            return Err(NavigationError::ResourceBusy(active.label.clone()));
        }
        let id = self.cleanup.next_id;
        self.cleanup.next_id += 1;
        let label = label.into();
        log::debug!("cleanup registered: {label}");
        self.cleanup.active = Some(Registered {
            id,
            label: label.clone(),
            teardown: Box::new(teardown),
        });
        Ok(ResourceLease { id, label })
    }

    /// Forgets the teardown without running it; the owner already released the resource.
    pub fn clear_cleanup(&mut self, lease: ResourceLease) -> Result<(), NavigationError> {
        self.take_leased(&lease).map(drop)
    }

    /// Runs the teardown now.
    pub fn release(&mut self, lease: ResourceLease) -> Result<(), NavigationError> {
        let registered = self.take_leased(&lease)?;
        (registered.teardown)();
        Ok(())
    }

    pub fn has_cleanup(&self) -> bool {
        self.cleanup.active.is_some()
    }

    fn take_leased(&mut self, lease: &ResourceLease) -> Result<Registered, NavigationError> {
        match self.cleanup.active.take() {
            Some(r) if r.id == lease.id => Ok(r),
            other => {
                self.cleanup.active = other;
                Err(NavigationError::StaleLease)
            }
        }
    }

    /// Runs and drops whatever teardown is registered. At most once per registration.
    pub(super) fn run_cleanup(&mut self) {
        if let Some(registered) = self.cleanup.active.take() {
            log::debug!("running cleanup: {}", registered.label);
            (registered.teardown)();
        }
    }
}

impl Drop for DashboardRouter {
    fn drop(&mut self) {
        self.run_cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let calls = Rc::new(Cell::new(0));
        let c = calls.clone();
        (calls, move || c.set(c.get() + 1))
    }

    #[test]
    fn second_registration_is_rejected() {
        let mut router = DashboardRouter::new();
        let (_, f) = counter();
        let _lease = router.register_cleanup("camera", f).unwrap();
        let err = router.register_cleanup("player", || {}).unwrap_err();
        assert_eq!(err, NavigationError::ResourceBusy("camera".into()));
    }

    #[test]
    fn clear_does_not_run_teardown() {
        let mut router = DashboardRouter::new();
        let (calls, f) = counter();
        let lease = router.register_cleanup("camera", f).unwrap();
        router.clear_cleanup(lease).unwrap();
        assert!(!router.has_cleanup());
        router.go_home();
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn release_runs_teardown_once() {
        let mut router = DashboardRouter::new();
        let (calls, f) = counter();
        let lease = router.register_cleanup("camera", f).unwrap();
        router.release(lease).unwrap();
        router.go_home();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn lease_is_stale_after_go_home() {
        let mut router = DashboardRouter::new();
        let (calls, f) = counter();
        let lease = router.register_cleanup("camera", f).unwrap();
        router.go_home();
        assert_eq!(calls.get(), 1);
        assert_eq!(router.clear_cleanup(lease), Err(NavigationError::StaleLease));
        // a fresh registration is allowed again
        let _next = router.register_cleanup("player", || {}).unwrap();
    }

    #[test]
    fn dropping_router_runs_teardown() {
        let (calls, f) = counter();
        {
            let mut router = DashboardRouter::new();
            let _lease = router.register_cleanup("camera", f).unwrap();
        }
        assert_eq!(calls.get(), 1);
    }
}

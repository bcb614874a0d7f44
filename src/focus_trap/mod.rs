//! Keeps keyboard focus inside a container while a modal is open.

pub mod host;
pub mod tree;

pub use host::{ElementInfo, ElementKind, FocusHost, NodeId};
pub use tree::FocusTree;

#[derive(Clone, Debug, PartialEq)]
pub struct FocusTrapOptions {
    pub initial_focus: Option<NodeId>,
    pub fallback_focus: Option<NodeId>,
    pub escape_deactivates: bool,
    /// Off for dialogs that already close on outside clicks themselves.
    pub click_outside_deactivates: bool,
    pub return_focus_on_deactivate: bool,
}

impl Default for FocusTrapOptions {
    fn default() -> Self {
        Self {
            initial_focus: None,
            fallback_focus: None,
            escape_deactivates: true,
            click_outside_deactivates: true,
            return_focus_on_deactivate: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusKey {
    Tab,
    ShiftTab,
    Escape,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Let the host's default handling run.
    Ignored,
    /// The trap moved (or kept) focus; suppress the default.
    Handled,
    Deactivated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored,
    Deactivated,
}

#[derive(Debug, Clone)]
pub struct FocusTrap {
    container: NodeId,
    options: FocusTrapOptions,
    previously_focused: Option<NodeId>,
    active: bool,
}

impl FocusTrap {
    pub fn new(container: NodeId, options: FocusTrapOptions) -> Self {
        Self {
            container,
            options,
            previously_focused: None,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Remembers the focused element and moves focus into the container.
    /// No-op when already active.
    pub fn activate(&mut self, host: &mut impl FocusHost) {
        if self.active {
            return;
        }
        self.previously_focused = host.active_element();
        self.active = true;
        log::debug!("focus trap on {:?} activated", self.container);
        self.set_initial_focus(host);
    }

    /// No-op when inactive.
    pub fn deactivate(&mut self, host: &mut impl FocusHost) {
        if !self.active {
            return;
        }
        self.active = false;
        log::debug!("focus trap on {:?} deactivated", self.container);
        if self.options.return_focus_on_deactivate {
            if let Some(prev) = self.previously_focused.take() {
                host.focus(prev);
            }
        }
    }

    /// Follows an external on/off flag, e.g. a dialog's open state.
    pub fn sync(&mut self, host: &mut impl FocusHost, should_be_active: bool) {
        if should_be_active {
            self.activate(host);
        } else {
            self.deactivate(host);
        }
    }

    pub fn handle_key(&mut self, host: &mut impl FocusHost, key: FocusKey) -> KeyOutcome {
        if !self.active {
            return KeyOutcome::Ignored;
        }
        match key {
            FocusKey::Escape if self.options.escape_deactivates => {
                self.deactivate(host);
                KeyOutcome::Deactivated
            }
            FocusKey::Tab => self.handle_tab(host, false),
            FocusKey::ShiftTab => self.handle_tab(host, true),
            _ => KeyOutcome::Ignored,
        }
    }

    pub fn handle_click(&mut self, host: &mut impl FocusHost, target: NodeId) -> ClickOutcome {
        if !self.active || !self.options.click_outside_deactivates {
            return ClickOutcome::Ignored;
        }
        if host.contains(self.container, target) {
            return ClickOutcome::Ignored;
        }
        self.deactivate(host);
        ClickOutcome::Deactivated
    }

    /// Focusable, rendered descendants of the container in tab order.
    pub fn focusable_elements(&self, host: &impl FocusHost) -> Vec<NodeId> {
        host.descendants(self.container)
            .into_iter()
            .filter(|&n| host.element(n).is_some_and(|e| e.is_focusable()))
            .collect()
    }

    fn handle_tab(&self, host: &mut impl FocusHost, backward: bool) -> KeyOutcome {
        let focusable = self.focusable_elements(&*host);
        let (Some(&first), Some(&last)) = (focusable.first(), focusable.last()) else {
            // nothing to land on: keep focus where it is
            return KeyOutcome::Handled;
        };

        let current = host.active_element();
        let escaped = current.is_none_or(|c| !host.contains(self.container, c));
        let (edge, target) = if backward { (first, last) } else { (last, first) };

        if escaped || current == Some(edge) {
            host.focus(target);
            KeyOutcome::Handled
        } else {
            KeyOutcome::Ignored
        }
    }

    fn set_initial_focus(&self, host: &mut impl FocusHost) {
        let initial = self
            .options
            .initial_focus
            .or_else(|| self.focusable_elements(&*host).first().copied())
            .or(self.options.fallback_focus);
        if let Some(node) = initial {
            host.focus(node);
        }
    }
}

/// Handle to an element in a [`FocusHost`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    Button,
    Input,
    TextArea,
    Select,
    Anchor,
    Other,
}

/// What the trap needs to know about an element: its tag, the attributes
/// the focusable allowlist looks at, and its rendered visibility.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementInfo {
    pub kind: ElementKind,
    pub disabled: bool,
    pub has_href: bool,
    pub tab_index: Option<i32>,
    pub content_editable: bool,
    /// The `hidden` attribute.
    pub hidden: bool,
    /// Computed `visibility: hidden`.
    pub visibility_hidden: bool,
    pub width: f32,
    pub height: f32,
}

impl ElementInfo {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            disabled: false,
            has_href: false,
            tab_index: None,
            content_editable: false,
            hidden: false,
            visibility_hidden: false,
            width: 80.0,
            height: 24.0,
        }
    }

    pub fn button() -> Self {
        Self::new(ElementKind::Button)
    }

    pub fn input() -> Self {
        Self::new(ElementKind::Input)
    }

    pub fn link() -> Self {
        Self::new(ElementKind::Anchor).with_href()
    }

    pub fn container() -> Self {
        Self::new(ElementKind::Other)
    }

    pub fn with_href(mut self) -> Self {
        self.has_href = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn with_tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    pub fn content_editable(mut self) -> Self {
        self.content_editable = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn invisible(mut self) -> Self {
        self.visibility_hidden = true;
        self
    }

    pub fn sized(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// `button`, `input`, `textarea`, `select` when enabled; `a[href]`;
    /// `[tabindex]` other than `-1`; `[contenteditable="true"]`.
    pub fn matches_focusable_selector(&self) -> bool {
        let by_tag = match self.kind {
            ElementKind::Button | ElementKind::Input | ElementKind::TextArea | ElementKind::Select => {
                !self.disabled
            }
            ElementKind::Anchor => self.has_href,
            ElementKind::Other => false,
        };
        by_tag || self.tab_index.is_some_and(|t| t != -1) || self.content_editable
    }

    pub fn is_visible(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && !self.hidden && !self.visibility_hidden
    }

    pub fn is_focusable(&self) -> bool {
        self.matches_focusable_selector() && self.is_visible()
    }
}

/// Element tree the trap operates on (a DOM, a widget tree, a test fixture).
pub trait FocusHost {
    fn active_element(&self) -> Option<NodeId>;

    fn focus(&mut self, node: NodeId);

    /// Inclusive: a node contains itself.
    fn contains(&self, container: NodeId, node: NodeId) -> bool;

    /// Descendants of `container` in document order, `container` excluded.
    fn descendants(&self, container: NodeId) -> Vec<NodeId>;

    /// Effective element state, inherited visibility applied.
    fn element(&self, node: NodeId) -> Option<ElementInfo>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowlist() {
        assert!(ElementInfo::button().is_focusable());
        assert!(!ElementInfo::button().disabled().is_focusable());
        assert!(ElementInfo::button().disabled().with_tab_index(0).is_focusable());
        assert!(!ElementInfo::new(ElementKind::Anchor).is_focusable());
        assert!(ElementInfo::link().is_focusable());
        assert!(!ElementInfo::container().is_focusable());
        assert!(!ElementInfo::container().with_tab_index(-1).is_focusable());
        assert!(ElementInfo::container().with_tab_index(2).is_focusable());
        assert!(ElementInfo::container().content_editable().is_focusable());
    }

    #[test]
    fn visibility_rules() {
        assert!(!ElementInfo::button().hidden().is_focusable());
        assert!(!ElementInfo::button().invisible().is_focusable());
        assert!(!ElementInfo::button().sized(0.0, 20.0).is_focusable());
        assert!(!ElementInfo::input().sized(20.0, 0.0).is_focusable());
    }
}

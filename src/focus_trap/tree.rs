use super::host::{ElementInfo, FocusHost, NodeId};

#[derive(Debug, Clone)]
struct Node {
    info: ElementInfo,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed element tree with a single focused node.
#[derive(Debug, Clone)]
pub struct FocusTree {
    nodes: Vec<Node>,
    focused: Option<NodeId>,
}

impl Default for FocusTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                info: ElementInfo::container(),
                parent: None,
                children: Vec::new(),
            }],
            focused: None,
        }
    }

    /// Document body.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn append(&mut self, parent: NodeId, info: ElementInfo) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            info,
            parent: Some(parent),
            children: Vec::new(),
        });
        if let Some(p) = self.nodes.get_mut(parent.0) {
            p.children.push(id);
        }
        id
    }

    pub fn info_mut(&mut self, node: NodeId) -> Option<&mut ElementInfo> {
        self.nodes.get_mut(node.0).map(|n| &mut n.info)
    }

    /// Plain tab order over the whole document, wrapping at the ends.
    /// What happens when nothing intercepts the key.
    pub fn advance_focus(&mut self, backward: bool) {
        let order: Vec<NodeId> = self
            .descendants(self.root())
            .into_iter()
            .filter(|&n| self.element(n).is_some_and(|e| e.is_focusable()))
            .collect();
        if order.is_empty() {
            return;
        }
        let pos = self.focused.and_then(|f| order.iter().position(|&n| n == f));
        let next = match (pos, backward) {
            (None, false) => 0,
            (None, true) => order.len() - 1,
            (Some(p), false) => (p + 1) % order.len(),
            (Some(p), true) => (p + order.len() - 1) % order.len(),
        };
        self.focused = Some(order[next]);
    }

    fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.nodes.get(node.0).and_then(|n| n.parent), |p| {
            self.nodes.get(p.0).and_then(|n| n.parent)
        })
    }
}

impl FocusHost for FocusTree {
    fn active_element(&self) -> Option<NodeId> {
        self.focused
    }

    fn focus(&mut self, node: NodeId) {
        if node.0 < self.nodes.len() {
            self.focused = Some(node);
        }
    }

    fn contains(&self, container: NodeId, node: NodeId) -> bool {
        node == container || self.ancestors(node).any(|a| a == container)
    }

    fn descendants(&self, container: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.nodes.get(container.0) {
            Some(n) => n.children.iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        out
    }

    fn element(&self, node: NodeId) -> Option<ElementInfo> {
        let mut info = self.nodes.get(node.0)?.info.clone();
        for a in self.ancestors(node) {
            let parent = &self.nodes[a.0].info;
            // hidden ancestors are not rendered at all
            if parent.hidden {
                info.width = 0.0;
                info.height = 0.0;
            }
            if parent.visibility_hidden {
                info.visibility_hidden = true;
            }
        }
        Some(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descendants_in_document_order() {
        let mut tree = FocusTree::new();
        let root = tree.root();
        let a = tree.append(root, ElementInfo::container());
        let a1 = tree.append(a, ElementInfo::button());
        let a2 = tree.append(a, ElementInfo::button());
        let b = tree.append(root, ElementInfo::button());
        let a1x = tree.append(a1, ElementInfo::container());
        assert_eq!(tree.descendants(root), vec![a, a1, a1x, a2, b]);
        assert_eq!(tree.descendants(a), vec![a1, a1x, a2]);
        assert!(tree.contains(a, a1x));
        assert!(tree.contains(a, a));
        assert!(!tree.contains(a, b));
    }

    #[test]
    fn hidden_ancestor_hides_children() {
        let mut tree = FocusTree::new();
        let panel = tree.append(tree.root(), ElementInfo::container().hidden());
        let button = tree.append(panel, ElementInfo::button());
        assert!(!tree.element(button).unwrap().is_focusable());

        tree.info_mut(panel).unwrap().hidden = false;
        tree.info_mut(panel).unwrap().visibility_hidden = true;
        assert!(!tree.element(button).unwrap().is_focusable());
    }

    #[test]
    fn advance_focus_wraps_document() {
        let mut tree = FocusTree::new();
        let root = tree.root();
        let x = tree.append(root, ElementInfo::button());
        let y = tree.append(root, ElementInfo::link());
        tree.advance_focus(false);
        assert_eq!(tree.active_element(), Some(x));
        tree.advance_focus(false);
        assert_eq!(tree.active_element(), Some(y));
        tree.advance_focus(false);
        assert_eq!(tree.active_element(), Some(x));
        tree.advance_focus(true);
        assert_eq!(tree.active_element(), Some(y));
    }
}

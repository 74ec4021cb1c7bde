//! Arena backed forest of layer roots and window nodes.
use std::collections::HashMap;

use super::{Handle, LayerGroup, NodeId, NodeKind, StackNode, StackPosition, WindowHandle};

/// One root per [`LayerGroup`] plus every tracked window.
///
/// Roots occupy the first [`LayerGroup::COUNT`] slots and are never freed.
/// Window slots are recycled through a free list once a window is removed.
#[derive(Debug, Clone)]
pub struct StackTree<H: Handle> {
    nodes: Vec<Option<StackNode<H>>>,
    free: Vec<usize>,
    index: HashMap<WindowHandle<H>, NodeId>,
}

impl<H: Handle> Default for StackTree<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Handle> StackTree<H> {
    pub fn new() -> Self {
        Self {
            nodes: LayerGroup::ALL
                .into_iter()
                .map(|layer| Some(StackNode::layer(layer)))
                .collect(),
            free: vec![],
            index: HashMap::new(),
        }
    }

    #[must_use]
    pub const fn root(&self, layer: LayerGroup) -> NodeId {
        NodeId(layer.index())
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&StackNode<H>> {
        self.nodes.get(id.0)?.as_ref()
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut StackNode<H>> {
        self.nodes.get_mut(id.0)?.as_mut()
    }

    /// Look up the node tracking a window.
    #[must_use]
    pub fn get(&self, handle: &WindowHandle<H>) -> Option<NodeId> {
        self.index.get(handle).copied()
    }

    #[must_use]
    pub fn contains(&self, handle: &WindowHandle<H>) -> bool {
        self.index.contains_key(handle)
    }

    /// Number of tracked windows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.parent
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map_or(&[], |node| node.children.as_slice())
    }

    #[must_use]
    pub fn handle(&self, id: NodeId) -> Option<WindowHandle<H>> {
        self.node(id)?.handle()
    }

    #[must_use]
    pub fn home(&self, id: NodeId) -> Option<LayerGroup> {
        match self.node(id)?.kind {
            NodeKind::Window { home, .. } => Some(home),
            NodeKind::Layer(_) => None,
        }
    }

    pub(crate) fn set_home(&mut self, id: NodeId, layer: LayerGroup) {
        if let Some(NodeKind::Window { home, .. }) = self.node_mut(id).map(|n| &mut n.kind) {
            *home = layer;
        }
    }

    /// Index of a node among its siblings, counted from the bottom.
    #[must_use]
    pub fn position(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|&c| c == id)
    }

    /// The band a node is stacked in, found by walking up to its root.
    #[must_use]
    pub fn layer_of(&self, id: NodeId) -> Option<LayerGroup> {
        let mut current = id;
        loop {
            let node = self.node(current)?;
            match (node.parent, node.kind) {
                (Some(parent), _) => current = parent,
                (None, NodeKind::Layer(layer)) => return Some(layer),
                (None, NodeKind::Window { .. }) => return None,
            }
        }
    }

    /// The ancestor of `id` (or `id` itself) that sits directly under a root.
    #[must_use]
    pub fn top_level(&self, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        loop {
            let parent = self.parent(current)?;
            if self.node(parent)?.is_layer() {
                return Some(current);
            }
            current = parent;
        }
    }

    /// Whether `id` is `ancestor` or lies somewhere below it.
    #[must_use]
    pub fn is_in_subtree(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// Pre-order walk: every node comes before its children, and children
    /// are visited bottom to top. The walk includes `id` itself.
    #[must_use]
    pub fn ordered_descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut ordered = vec![];
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            let Some(node) = self.node(current) else {
                continue;
            };
            ordered.push(current);
            pending.extend(node.children.iter().rev());
        }
        ordered
    }

    /// Every window node, bottom of the screen first.
    #[must_use]
    pub fn window_order(&self) -> Vec<NodeId> {
        LayerGroup::ALL
            .into_iter()
            .flat_map(|layer| self.ordered_descendants(self.root(layer)))
            .filter(|&id| self.handle(id).is_some())
            .collect()
    }

    pub(crate) fn create_window(&mut self, handle: WindowHandle<H>, home: LayerGroup) -> NodeId {
        let node = Some(StackNode::window(handle, home));
        let id = if let Some(slot) = self.free.pop() {
            self.nodes[slot] = node;
            NodeId(slot)
        } else {
            self.nodes.push(node);
            NodeId(self.nodes.len() - 1)
        };
        self.index.insert(handle, id);
        id
    }

    /// Forget a window. Its transients are promoted into its slot.
    /// Returns the former parent and position of the window.
    pub(crate) fn destroy_window(&mut self, handle: &WindowHandle<H>) -> Option<(NodeId, usize)> {
        let id = self.index.remove(handle)?;
        let former = self.unlink(id);
        self.nodes[id.0] = None;
        self.free.push(id.0);
        former
    }

    /// Insert a detached node under `parent`. Returns the slot it landed in.
    ///
    /// Attaching a root, or a node below itself, is refused.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        id: NodeId,
        position: StackPosition,
    ) -> Option<usize> {
        let node = self.node(id)?;
        if node.is_layer() || node.parent.is_some() || self.is_in_subtree(id, parent) {
            return None;
        }
        let siblings = &mut self.node_mut(parent)?.children;
        let slot = position.slot(siblings.len());
        siblings.insert(slot, id);
        self.node_mut(id)?.parent = Some(parent);
        Some(slot)
    }

    /// Take a node (with its whole subtree) out of its parent.
    pub fn detach(&mut self, id: NodeId) -> Option<(NodeId, usize)> {
        let parent = self.parent(id)?;
        let slot = self.position(id)?;
        self.node_mut(parent)?.children.remove(slot);
        self.node_mut(id)?.parent = None;
        Some((parent, slot))
    }

    /// Take a node out of its parent and splice its children into the
    /// parent at the node's former slot, so nothing is orphaned.
    pub fn unlink(&mut self, id: NodeId) -> Option<(NodeId, usize)> {
        let parent = self.parent(id)?;
        let slot = self.position(id)?;
        let children = std::mem::take(&mut self.node_mut(id)?.children);
        for &child in &children {
            if let Some(node) = self.node_mut(child) {
                node.parent = Some(parent);
            }
        }
        let siblings = &mut self.node_mut(parent)?.children;
        let above = siblings.split_off(slot + 1);
        siblings.pop();
        siblings.extend(children);
        siblings.extend(above);
        self.node_mut(id)?.parent = None;
        Some((parent, slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MockHandle;

    fn window(tree: &mut StackTree<MockHandle>, h: MockHandle, parent: NodeId) -> NodeId {
        let id = tree.create_window(WindowHandle(h), LayerGroup::Layout);
        tree.add_child(parent, id, StackPosition::Top).unwrap();
        id
    }

    fn handles(tree: &StackTree<MockHandle>, ids: &[NodeId]) -> Vec<MockHandle> {
        ids.iter().filter_map(|&id| tree.handle(id)).map(|h| h.0).collect()
    }

    #[test]
    fn a_new_tree_should_have_one_empty_root_per_layer() {
        let tree = StackTree::<MockHandle>::new();
        for layer in LayerGroup::ALL {
            let root = tree.root(layer);
            assert_eq!(tree.layer_of(root), Some(layer));
            assert!(tree.children(root).is_empty());
        }
        assert!(tree.is_empty());
    }

    #[test]
    fn children_should_be_inserted_at_the_requested_edge() {
        let mut tree = StackTree::<MockHandle>::new();
        let root = tree.root(LayerGroup::Layout);
        let a = window(&mut tree, 1, root);
        let b = tree.create_window(WindowHandle(2), LayerGroup::Layout);
        tree.add_child(root, b, StackPosition::Bottom);
        let c = tree.create_window(WindowHandle(3), LayerGroup::Layout);
        tree.add_child(root, c, StackPosition::Index(1));
        assert_eq!(tree.children(root), &[b, c, a]);
        assert_eq!(tree.position(a), Some(2));
    }

    #[test]
    fn ordered_descendants_should_visit_parents_before_children() {
        let mut tree = StackTree::<MockHandle>::new();
        let root = tree.root(LayerGroup::Layout);
        let a = window(&mut tree, 1, root);
        window(&mut tree, 2, a);
        let b = window(&mut tree, 3, root);
        window(&mut tree, 4, b);
        window(&mut tree, 5, a);
        let order = tree.ordered_descendants(root);
        assert_eq!(order[0], root);
        assert_eq!(handles(&tree, &order), vec![1, 2, 5, 3, 4]);
    }

    #[test]
    fn unlink_should_splice_children_into_the_former_slot() {
        let mut tree = StackTree::<MockHandle>::new();
        let root = tree.root(LayerGroup::Layout);
        window(&mut tree, 1, root);
        let b = window(&mut tree, 2, root);
        let c1 = window(&mut tree, 3, b);
        let c2 = window(&mut tree, 4, b);
        window(&mut tree, 5, root);

        assert_eq!(tree.unlink(b), Some((root, 1)));
        assert_eq!(handles(&tree, tree.children(root)), vec![1, 3, 4, 5]);
        assert_eq!(tree.parent(c1), Some(root));
        assert_eq!(tree.parent(c2), Some(root));
        assert_eq!(tree.parent(b), None);
        assert!(tree.children(b).is_empty());
    }

    #[test]
    fn detach_should_keep_the_subtree_together() {
        let mut tree = StackTree::<MockHandle>::new();
        let root = tree.root(LayerGroup::Layout);
        let a = window(&mut tree, 1, root);
        let child = window(&mut tree, 2, a);
        assert_eq!(tree.detach(a), Some((root, 0)));
        assert!(tree.children(root).is_empty());
        assert_eq!(tree.parent(child), Some(a));
        assert_eq!(tree.layer_of(child), None);
    }

    #[test]
    fn a_node_can_not_be_attached_below_itself() {
        let mut tree = StackTree::<MockHandle>::new();
        let root = tree.root(LayerGroup::Layout);
        let a = window(&mut tree, 1, root);
        let child = window(&mut tree, 2, a);
        tree.detach(a);
        assert_eq!(tree.add_child(child, a, StackPosition::Top), None);
        assert_eq!(tree.add_child(a, a, StackPosition::Top), None);
    }

    #[test]
    fn destroyed_slots_should_be_reused() {
        let mut tree = StackTree::<MockHandle>::new();
        let root = tree.root(LayerGroup::Top);
        let a = window(&mut tree, 1, root);
        assert_eq!(tree.destroy_window(&WindowHandle(1)), Some((root, 0)));
        assert!(!tree.contains(&WindowHandle(1)));
        assert!(tree.node(a).is_none());
        let b = window(&mut tree, 2, root);
        assert_eq!(a, b);
        assert_eq!(tree.get(&WindowHandle(2)), Some(b));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn top_level_should_find_the_node_below_the_root() {
        let mut tree = StackTree::<MockHandle>::new();
        let root = tree.root(LayerGroup::Layout);
        let a = window(&mut tree, 1, root);
        let b = window(&mut tree, 2, a);
        let c = window(&mut tree, 3, b);
        assert_eq!(tree.top_level(c), Some(a));
        assert_eq!(tree.top_level(a), Some(a));
        assert_eq!(tree.top_level(root), None);
        assert!(tree.is_in_subtree(a, c));
        assert!(!tree.is_in_subtree(c, a));
    }

    #[test]
    fn window_order_should_follow_layer_precedence() {
        let mut tree = StackTree::<MockHandle>::new();
        let (top, background) = (tree.root(LayerGroup::Top), tree.root(LayerGroup::Background));
        window(&mut tree, 1, top);
        window(&mut tree, 2, background);
        let layout = tree.root(LayerGroup::Layout);
        let l = window(&mut tree, 3, layout);
        window(&mut tree, 4, l);
        let order = tree.window_order();
        assert_eq!(handles(&tree, &order), vec![2, 3, 4, 1]);
    }
}

use super::{Handle, LayerGroup, WindowHandle};

/// Index of a node in the [`StackTree`](super::StackTree) arena.
///
/// Parents are referenced through this index only, so the children vectors
/// are the sole owners of nodes and the tree can not form reference cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Raw arena slot, for diagnostics only.
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind<H: Handle> {
    /// Root container of one band.
    Layer(LayerGroup),
    /// A tracked window. `home` is the permanent band the window returns to
    /// after a temporary elevation.
    Window {
        handle: WindowHandle<H>,
        home: LayerGroup,
    },
}

#[derive(Debug, Clone)]
pub struct StackNode<H: Handle> {
    pub kind: NodeKind<H>,
    pub(crate) parent: Option<NodeId>,
    /// Bottom to top. For a window these are the windows transient for it.
    pub(crate) children: Vec<NodeId>,
}

impl<H: Handle> StackNode<H> {
    pub(crate) fn layer(layer: LayerGroup) -> Self {
        Self {
            kind: NodeKind::Layer(layer),
            parent: None,
            children: vec![],
        }
    }

    pub(crate) fn window(handle: WindowHandle<H>, home: LayerGroup) -> Self {
        Self {
            kind: NodeKind::Window { handle, home },
            parent: None,
            children: vec![],
        }
    }

    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[must_use]
    pub fn handle(&self) -> Option<WindowHandle<H>> {
        match self.kind {
            NodeKind::Window { handle, .. } => Some(handle),
            NodeKind::Layer(_) => None,
        }
    }

    #[must_use]
    pub const fn is_layer(&self) -> bool {
        matches!(self.kind, NodeKind::Layer(_))
    }
}

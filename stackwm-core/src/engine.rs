//! The stacking engine and its read-only queries.
use std::collections::{HashMap, VecDeque};

use crate::config::Config;
use crate::display_servers::WindowQuery;
use crate::models::{
    Handle, InfoKind, LayerGroup, NodeId, NodeKind, StackPosition, StackTree, StackingInfo,
    WindowHandle,
};
use crate::{Anchor, StackRequest};

/// Keeps the front-to-back order of every managed window.
///
/// Every mutating call finishes its tree change first and only then queues
/// [`StackRequest`]s into `actions`, one per affected node. Nothing in here
/// calls out to the display server, so a callback that re-enters the engine
/// always finds a consistent tree.
#[derive(Debug)]
pub struct StackingEngine<H: Handle> {
    pub(crate) tree: StackTree<H>,
    pub actions: VecDeque<StackRequest<H>>,
    pub(crate) default_layer: LayerGroup,
    pub(crate) default_position: StackPosition,
    pub(crate) demote_on_focus: bool,
}

impl<H: Handle> StackingEngine<H> {
    pub fn new(config: &Config) -> Self {
        let default_layer = if config.default_layer.is_temporary() {
            tracing::warn!(
                "Default layer {} is temporary, falling back to {}",
                config.default_layer,
                LayerGroup::Layout
            );
            LayerGroup::Layout
        } else {
            config.default_layer
        };
        Self {
            tree: StackTree::new(),
            actions: VecDeque::new(),
            default_layer,
            default_position: config.default_position,
            demote_on_focus: config.demote_on_focus,
        }
    }

    #[must_use]
    pub const fn tree(&self) -> &StackTree<H> {
        &self.tree
    }

    #[must_use]
    pub fn is_stacked(&self, handle: &WindowHandle<H>) -> bool {
        self.tree.contains(handle)
    }

    /// The band the window is currently drawn in.
    #[must_use]
    pub fn layer_of(&self, handle: &WindowHandle<H>) -> Option<LayerGroup> {
        self.tree.layer_of(self.tree.get(handle)?)
    }

    /// The band the window goes back to after a temporary elevation.
    #[must_use]
    pub fn home_layer_of(&self, handle: &WindowHandle<H>) -> Option<LayerGroup> {
        self.tree.home(self.tree.get(handle)?)
    }

    /// All windows of a band, transients included, bottom first.
    #[must_use]
    pub fn windows_in_layer(&self, layer: LayerGroup) -> Vec<WindowHandle<H>> {
        self.tree
            .ordered_descendants(self.tree.root(layer))
            .into_iter()
            .filter_map(|id| self.tree.handle(id))
            .collect()
    }

    /// The sibling directly above the window, ignoring visibility and groups.
    #[must_use]
    pub fn sibling_above(&self, handle: &WindowHandle<H>) -> Option<WindowHandle<H>> {
        let id = self.tree.get(handle)?;
        let siblings = self.tree.children(self.tree.parent(id)?);
        let slot = self.tree.position(id)?;
        self.tree.handle(*siblings.get(slot + 1)?)
    }

    /// The sibling directly below the window, ignoring visibility and groups.
    #[must_use]
    pub fn sibling_below(&self, handle: &WindowHandle<H>) -> Option<WindowHandle<H>> {
        let id = self.tree.get(handle)?;
        let siblings = self.tree.children(self.tree.parent(id)?);
        let slot = self.tree.position(id)?.checked_sub(1)?;
        self.tree.handle(siblings[slot])
    }

    /// Every tracked window, bottom of the screen first.
    #[must_use]
    pub fn get_z_order(&self) -> Vec<WindowHandle<H>> {
        self.tree
            .window_order()
            .into_iter()
            .filter_map(|id| self.tree.handle(id))
            .collect()
    }

    /// Diagnostic mirror of the whole tree.
    pub fn stacking_info(&self, query: &impl WindowQuery<H>) -> StackingInfo<H> {
        StackingInfo {
            name: "root".to_owned(),
            x: None,
            y: None,
            r#type: InfoKind::Root,
            wid: None,
            children: LayerGroup::ALL
                .into_iter()
                .map(|layer| self.node_info(query, self.tree.root(layer)))
                .collect(),
        }
    }

    fn node_info(&self, query: &impl WindowQuery<H>, id: NodeId) -> StackingInfo<H> {
        let children = self
            .tree
            .children(id)
            .iter()
            .map(|&child| self.node_info(query, child))
            .collect();
        match self.tree.node(id).map(|node| node.kind) {
            Some(NodeKind::Window { handle, .. }) => {
                let position = query.position(&handle);
                StackingInfo {
                    name: query.name(&handle).unwrap_or_default(),
                    x: position.map(|(x, _)| x),
                    y: position.map(|(_, y)| y),
                    r#type: InfoKind::Window,
                    wid: Some(handle),
                    children,
                }
            }
            Some(NodeKind::Layer(layer)) => StackingInfo {
                name: layer.name().to_owned(),
                x: None,
                y: None,
                r#type: InfoKind::Layer,
                wid: None,
                children,
            },
            None => StackingInfo {
                name: String::new(),
                x: None,
                y: None,
                r#type: InfoKind::Layer,
                wid: None,
                children,
            },
        }
    }

    /// Queue one request per node, computed against the tree as it is now.
    /// Must only be called once the tree change is complete. A change made up
    /// of several independent moves queues after each move instead, since
    /// the backend applies the requests one by one.
    pub(crate) fn queue_sync(&mut self, nodes: &[NodeId]) {
        let order = self.tree.window_order();
        let slots: HashMap<NodeId, usize> =
            order.iter().enumerate().map(|(i, &id)| (id, i)).collect();
        for &node in nodes {
            let request = self.request_for(&order, &slots, node);
            tracing::trace!("StackRequest: {:?}", request);
            self.actions.push_back(request);
        }
    }

    fn request_for(
        &self,
        order: &[NodeId],
        slots: &HashMap<NodeId, usize>,
        node: NodeId,
    ) -> StackRequest<H> {
        let run: Vec<NodeId> = self
            .tree
            .ordered_descendants(node)
            .into_iter()
            .filter(|&id| self.tree.handle(id).is_some())
            .collect();
        let anchor = match run.first().and_then(|id| slots.get(id)) {
            Some(&start) => {
                let end = start + run.len();
                if start > 0 {
                    self.tree.handle(order[start - 1]).map(Anchor::Above)
                } else {
                    order
                        .get(end)
                        .and_then(|&id| self.tree.handle(id))
                        .map(Anchor::Below)
                }
            }
            None => None,
        };
        StackRequest {
            windows: run.iter().filter_map(|&id| self.tree.handle(id)).collect(),
            anchor: anchor.unwrap_or(Anchor::None),
        }
    }
}

#[cfg(test)]
impl StackingEngine<crate::models::MockHandle> {
    pub fn new_test() -> Self {
        Self::new(&Config::default())
    }
}

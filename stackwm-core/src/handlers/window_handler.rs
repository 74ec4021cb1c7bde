#![allow(clippy::wildcard_imports)]

use super::*;

impl<H: Handle> StackingEngine<H> {
    /// Start tracking a window in the configured default band and position.
    pub fn add_window(&mut self, query: &impl WindowQuery<H>, handle: WindowHandle<H>) -> bool {
        self.add_window_at(query, handle, self.default_layer, self.default_position)
    }

    /// Start tracking a window.
    ///
    /// A window that is transient for a tracked window always goes on top of
    /// that window's transients, whatever band and position were asked for.
    pub fn add_window_at(
        &mut self,
        query: &impl WindowQuery<H>,
        handle: WindowHandle<H>,
        layer: LayerGroup,
        position: StackPosition,
    ) -> bool {
        if self.tree.contains(&handle) {
            tracing::warn!("Window {} is already stacked, ignoring", handle);
            return false;
        }
        let owner = query
            .is_transient_for(&handle)
            .filter(|owner| *owner != handle)
            .and_then(|owner| self.tree.get(&owner));

        let (parent, home, position) = match owner {
            Some(owner) => {
                let home = self.tree.home(owner).unwrap_or(self.default_layer);
                (owner, home, StackPosition::Top)
            }
            // Temporary bands are never a home.
            None if layer.is_temporary() => (self.tree.root(layer), self.default_layer, position),
            None => (self.tree.root(layer), layer, position),
        };

        let id = self.tree.create_window(handle, home);
        if self.tree.add_child(parent, id, position).is_none() {
            tracing::error!("Unable to attach window {} to the stacking tree", handle);
            self.tree.destroy_window(&handle);
            return false;
        }
        self.queue_sync(&[id]);
        true
    }

    /// Stop tracking a window. Its transients take its place.
    ///
    /// Must run before the display server finishes destroying the window.
    pub fn remove_window(&mut self, handle: &WindowHandle<H>) -> bool {
        if !self.tree.contains(handle) {
            tracing::debug!("Window {} is not stacked, nothing to remove", handle);
            return false;
        }
        if let Some((parent, _)) = self.tree.destroy_window(handle) {
            self.queue_sync(&[parent]);
        }
        true
    }
}

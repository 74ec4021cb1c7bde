#![allow(clippy::wildcard_imports)]

use super::*;

impl<H: Handle> StackingEngine<H> {
    /// Raise the window above the next sibling that is visible and shares its
    /// group (or has none). Siblings failing that test keep their place.
    pub fn move_up(&mut self, query: &impl WindowQuery<H>, handle: &WindowHandle<H>) -> bool {
        shift_work(self, query, handle, true).is_some()
    }

    /// Lower the window below the previous sibling that is visible and shares
    /// its group (or has none).
    pub fn move_down(&mut self, query: &impl WindowQuery<H>, handle: &WindowHandle<H>) -> bool {
        shift_work(self, query, handle, false).is_some()
    }

    pub fn move_to_top(&mut self, handle: &WindowHandle<H>) -> bool {
        edge_work(self, handle, StackPosition::Top).is_some()
    }

    pub fn move_to_bottom(&mut self, handle: &WindowHandle<H>) -> bool {
        edge_work(self, handle, StackPosition::Bottom).is_some()
    }

    /// Move a window, with its transients, into another band.
    ///
    /// A transient is moved together with the window it belongs to. Moving
    /// into a permanent band also makes it the new home band.
    pub fn move_window_to_layer(
        &mut self,
        handle: &WindowHandle<H>,
        layer: LayerGroup,
        position: StackPosition,
    ) -> bool {
        let Some(id) = self.tree.get(handle) else {
            tracing::debug!("Window {} is not stacked, not moving it to {}", handle, layer);
            return false;
        };
        let Some(family) = self.tree.top_level(id) else {
            return false;
        };
        change_layer_work(self, family, layer, position).is_some()
    }

    /// Raise a window into the bring-to-front band until it loses focus.
    pub fn bring_to_front(&mut self, handle: &WindowHandle<H>) -> bool {
        self.move_window_to_layer(handle, LayerGroup::BringToFront, StackPosition::Top)
    }

    /// Enter or leave the fullscreen band. Leaving returns the window to the
    /// top of its home band.
    pub fn set_fullscreen(&mut self, handle: &WindowHandle<H>, fullscreen: bool) -> bool {
        if fullscreen {
            return self.move_window_to_layer(handle, LayerGroup::Fullscreen, StackPosition::Top);
        }
        if self.layer_of(handle) != Some(LayerGroup::Fullscreen) {
            return false;
        }
        match self.home_layer_of(handle) {
            Some(home) => self.move_window_to_layer(handle, home, StackPosition::Top),
            None => false,
        }
    }
}

fn shift_work<H: Handle>(
    engine: &mut StackingEngine<H>,
    query: &impl WindowQuery<H>,
    handle: &WindowHandle<H>,
    up: bool,
) -> Option<()> {
    let tree = &engine.tree;
    let id = tree.get(handle)?;
    let parent = tree.parent(id)?;
    let group = query.group(handle);
    let candidates: Vec<NodeId> = tree
        .children(parent)
        .iter()
        .copied()
        .filter(|&sibling| {
            sibling == id
                || tree.handle(sibling).map_or(false, |h| {
                    let other = query.group(&h);
                    query.is_visible(&h) && (other.is_none() || other == group)
                })
        })
        .collect();
    let at = candidates.iter().position(|&c| c == id)?;
    let target = if up {
        *candidates.get(at + 1)?
    } else {
        candidates[at.checked_sub(1)?]
    };

    engine.tree.detach(id)?;
    let slot = engine.tree.position(target)? + usize::from(up);
    engine
        .tree
        .add_child(parent, id, StackPosition::Index(slot))?;
    engine.queue_sync(&[id]);
    Some(())
}

fn edge_work<H: Handle>(
    engine: &mut StackingEngine<H>,
    handle: &WindowHandle<H>,
    position: StackPosition,
) -> Option<()> {
    let id = engine.tree.get(handle)?;
    let (parent, _) = engine.tree.detach(id)?;
    engine.tree.add_child(parent, id, position)?;
    engine.queue_sync(&[id]);
    Some(())
}

fn change_layer_work<H: Handle>(
    engine: &mut StackingEngine<H>,
    id: NodeId,
    layer: LayerGroup,
    position: StackPosition,
) -> Option<()> {
    let (origin, _) = engine.tree.detach(id)?;
    let destination = engine.tree.root(layer);
    engine.tree.add_child(destination, id, position)?;
    if !layer.is_temporary() {
        for member in engine.tree.ordered_descendants(id) {
            engine.tree.set_home(member, layer);
        }
    }
    if origin == destination {
        engine.queue_sync(&[destination]);
    } else {
        engine.queue_sync(&[origin, destination]);
    }
    Some(())
}

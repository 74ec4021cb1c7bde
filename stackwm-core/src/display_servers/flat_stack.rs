use crate::errors::SyncError;
use crate::models::{GroupId, Handle, WindowHandle};
use crate::{Anchor, DisplayEvent, StackRequest};

use super::{SyncAdapter, WindowQuery};

/// Keeps the z-order as one flat list, bottom first.
///
/// This is what a compositor draws from. Removed windows are dropped when
/// the engine reports them through [`SyncAdapter::forget`].
#[derive(Debug, Clone, Default)]
pub struct FlatStack<H: Handle> {
    order: Vec<WindowHandle<H>>,
}

impl<H: Handle> FlatStack<H> {
    pub fn new() -> Self {
        Self { order: vec![] }
    }

    #[must_use]
    pub fn order(&self) -> &[WindowHandle<H>] {
        &self.order
    }

    pub fn apply(&mut self, request: &StackRequest<H>) {
        if request.windows.is_empty() {
            return;
        }
        self.order.retain(|w| !request.windows.contains(w));
        let slot = match request.anchor {
            Anchor::Above(sibling) => self.order.iter().position(|w| *w == sibling).map(|i| i + 1),
            Anchor::Below(sibling) => self.order.iter().position(|w| *w == sibling),
            Anchor::None => Some(0),
        };
        let slot = slot.unwrap_or_else(|| {
            tracing::debug!("Unknown stacking anchor {:?}, raising to the top", request.anchor);
            self.order.len()
        });
        let above = self.order.split_off(slot);
        self.order.extend(request.windows.iter().copied());
        self.order.extend(above);
    }
}

impl<H: Handle> SyncAdapter<H> for FlatStack<H> {
    fn stack(&mut self, request: &StackRequest<H>) -> Result<Option<DisplayEvent<H>>, SyncError> {
        self.apply(request);
        Ok(None)
    }

    fn forget(&mut self, window: &WindowHandle<H>) {
        let before = self.order.len();
        self.order.retain(|w| w != window);
        if before == self.order.len() {
            tracing::debug!("Window {} was not in the flat stack", window);
        }
    }
}

/// A flat list knows nothing about the windows it orders: no transients,
/// every window visible and ungrouped.
impl<H: Handle> WindowQuery<H> for FlatStack<H> {
    fn is_transient_for(&self, _window: &WindowHandle<H>) -> Option<WindowHandle<H>> {
        None
    }

    fn is_visible(&self, _window: &WindowHandle<H>) -> bool {
        true
    }

    fn group(&self, _window: &WindowHandle<H>) -> Option<GroupId> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MockHandle;

    fn request(windows: &[MockHandle], anchor: Anchor<MockHandle>) -> StackRequest<MockHandle> {
        StackRequest {
            windows: windows.iter().map(|&w| WindowHandle(w)).collect(),
            anchor,
        }
    }

    fn order(stack: &FlatStack<MockHandle>) -> Vec<MockHandle> {
        stack.order().iter().map(|w| w.0).collect()
    }

    #[test]
    fn windows_should_land_directly_above_the_anchor() {
        let mut stack = FlatStack::new();
        stack.apply(&request(&[1, 2, 3], Anchor::None));
        stack.apply(&request(&[1], Anchor::Above(WindowHandle(2))));
        assert_eq!(order(&stack), vec![2, 1, 3]);
    }

    #[test]
    fn windows_should_land_directly_below_the_anchor() {
        let mut stack = FlatStack::new();
        stack.apply(&request(&[1, 2, 3], Anchor::None));
        stack.apply(&request(&[3, 4], Anchor::Below(WindowHandle(1))));
        assert_eq!(order(&stack), vec![3, 4, 1, 2]);
    }

    #[test]
    fn an_unknown_anchor_should_raise_to_the_top() {
        let mut stack = FlatStack::new();
        stack.apply(&request(&[1, 2], Anchor::None));
        stack.apply(&request(&[5], Anchor::Above(WindowHandle(9))));
        assert_eq!(order(&stack), vec![1, 2, 5]);
    }

    #[test]
    fn forgetting_should_drop_only_that_window() {
        let mut stack = FlatStack::new();
        stack.apply(&request(&[1, 2, 3], Anchor::None));
        stack.forget(&WindowHandle(2));
        stack.forget(&WindowHandle(2));
        assert_eq!(order(&stack), vec![1, 3]);
    }
}

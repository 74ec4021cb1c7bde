use std::collections::{HashMap, HashSet, VecDeque};

use super::{FlatStack, SyncAdapter, WindowQuery};
use crate::errors::SyncError;
use crate::models::{GroupId, MockHandle, WindowHandle};
use crate::{DisplayEvent, StackRequest};

/// Records every request and mirrors the z-order in a [`FlatStack`].
/// Windows are visible and ungrouped unless told otherwise.
#[derive(Debug, Default)]
pub struct MockDisplayServer {
    pub transients: HashMap<MockHandle, MockHandle>,
    pub hidden: HashSet<MockHandle>,
    pub groups: HashMap<MockHandle, GroupId>,
    pub requests: Vec<StackRequest<MockHandle>>,
    pub mirror: FlatStack<MockHandle>,
    /// Handed back one per `stack` call, oldest first.
    pub replies: VecDeque<DisplayEvent<MockHandle>>,
    /// Requests touching these windows fail.
    pub dead: HashSet<MockHandle>,
    pub forgotten: Vec<WindowHandle<MockHandle>>,
}

impl MockDisplayServer {
    pub fn transient(mut self, window: MockHandle, owner: MockHandle) -> Self {
        self.transients.insert(window, owner);
        self
    }

    pub fn hide(mut self, window: MockHandle) -> Self {
        self.hidden.insert(window);
        self
    }

    pub fn grouped(mut self, window: MockHandle, group: GroupId) -> Self {
        self.groups.insert(window, group);
        self
    }
}

impl WindowQuery<MockHandle> for MockDisplayServer {
    fn is_transient_for(&self, window: &WindowHandle<MockHandle>) -> Option<WindowHandle<MockHandle>> {
        self.transients.get(&window.0).copied().map(WindowHandle)
    }

    fn is_visible(&self, window: &WindowHandle<MockHandle>) -> bool {
        !self.hidden.contains(&window.0)
    }

    fn group(&self, window: &WindowHandle<MockHandle>) -> Option<GroupId> {
        self.groups.get(&window.0).copied()
    }

    fn name(&self, window: &WindowHandle<MockHandle>) -> Option<String> {
        Some(format!("window-{}", window.0))
    }

    fn position(&self, window: &WindowHandle<MockHandle>) -> Option<(i32, i32)> {
        Some((window.0 * 10, window.0 * 20))
    }
}

impl SyncAdapter<MockHandle> for MockDisplayServer {
    fn stack(
        &mut self,
        request: &StackRequest<MockHandle>,
    ) -> Result<Option<DisplayEvent<MockHandle>>, SyncError> {
        self.requests.push(request.clone());
        if let Some(dead) = request.windows.iter().find(|w| self.dead.contains(&w.0)) {
            return Err(SyncError::WindowGone(dead.to_string()));
        }
        self.mirror.apply(request);
        Ok(self.replies.pop_front())
    }

    fn forget(&mut self, window: &WindowHandle<MockHandle>) {
        self.forgotten.push(*window);
        self.mirror.forget(window);
    }
}

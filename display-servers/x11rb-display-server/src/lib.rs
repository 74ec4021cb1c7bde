//! x11rb backend for stackwm

use serde::{Deserialize, Serialize};
use stackwm_core::{
    DisplayEvent, GroupId, Handle, StackRequest, SyncAdapter, SyncError, WindowHandle, WindowQuery,
};
use x11rb::protocol::xproto;

use crate::xwrap::XWrap;

mod error;
mod xwrap;

pub use error::Error;
pub use xwrap::{restack_plan, Restack};

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct X11rbWindowHandle(pub xproto::Window);
impl Handle for X11rbWindowHandle {}

/// Answers window queries and restacks windows on a live X server.
pub struct X11rbDisplayServer {
    xw: XWrap,
}

impl X11rbDisplayServer {
    /// # Errors
    ///
    /// Will error if no X server can be reached.
    pub fn new() -> Result<Self, Error> {
        Ok(Self { xw: XWrap::new()? })
    }
}

impl WindowQuery<X11rbWindowHandle> for X11rbDisplayServer {
    fn is_transient_for(
        &self,
        window: &WindowHandle<X11rbWindowHandle>,
    ) -> Option<WindowHandle<X11rbWindowHandle>> {
        let WindowHandle(X11rbWindowHandle(w)) = *window;
        match self.xw.get_transient_for(w) {
            Ok(owner) => owner.map(|o| WindowHandle(X11rbWindowHandle(o))),
            Err(e) => {
                tracing::debug!(error = ?e, "Unable to read WM_TRANSIENT_FOR of {}", w);
                None
            }
        }
    }

    fn is_visible(&self, window: &WindowHandle<X11rbWindowHandle>) -> bool {
        let WindowHandle(X11rbWindowHandle(w)) = *window;
        self.xw.is_viewable(w).unwrap_or_else(|e| {
            tracing::debug!(error = ?e, "Unable to read the map state of {}", w);
            false
        })
    }

    fn group(&self, window: &WindowHandle<X11rbWindowHandle>) -> Option<GroupId> {
        let WindowHandle(X11rbWindowHandle(w)) = *window;
        match self.xw.get_window_group(w) {
            Ok(leader) => leader.map(|l| l as GroupId),
            Err(e) => {
                tracing::debug!(error = ?e, "Unable to read WM_HINTS of {}", w);
                None
            }
        }
    }

    fn name(&self, window: &WindowHandle<X11rbWindowHandle>) -> Option<String> {
        self.xw.get_window_name(window.0 .0).ok()
    }

    fn position(&self, window: &WindowHandle<X11rbWindowHandle>) -> Option<(i32, i32)> {
        self.xw.get_window_position(window.0 .0).ok()
    }
}

impl SyncAdapter<X11rbWindowHandle> for X11rbDisplayServer {
    fn stack(
        &mut self,
        request: &StackRequest<X11rbWindowHandle>,
    ) -> Result<Option<DisplayEvent<X11rbWindowHandle>>, SyncError> {
        self.xw.restack(request)?;
        Ok(None)
    }
}

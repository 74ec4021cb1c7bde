//! Restack calls related to a window.

use stackwm_core::{Anchor, StackRequest, WindowHandle};
use x11rb::protocol::xproto;

use crate::error::Result;
use crate::X11rbWindowHandle;

use super::XWrap;

/// One `ConfigureWindow` call placing `window` against `sibling`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Restack {
    pub window: xproto::Window,
    pub sibling: Option<xproto::Window>,
    pub stack_mode: xproto::StackMode,
}

impl Restack {
    fn aux(&self) -> xproto::ConfigureWindowAux {
        let aux = xproto::ConfigureWindowAux::new().stack_mode(self.stack_mode);
        match self.sibling {
            Some(sibling) => aux.sibling(sibling),
            None => aux,
        }
    }
}

/// The calls realizing a request, bottom window first.
///
/// A run with no anchor is the whole z-order, so its first window goes to
/// the bottom of the stack.
pub fn restack_plan(request: &StackRequest<X11rbWindowHandle>) -> Vec<Restack> {
    request
        .placements()
        .map(|(WindowHandle(X11rbWindowHandle(window)), anchor)| {
            let (sibling, stack_mode) = match anchor {
                Anchor::Above(WindowHandle(X11rbWindowHandle(s))) => {
                    (Some(s), xproto::StackMode::ABOVE)
                }
                Anchor::Below(WindowHandle(X11rbWindowHandle(s))) => {
                    (Some(s), xproto::StackMode::BELOW)
                }
                Anchor::None => (None, xproto::StackMode::BELOW),
            };
            Restack {
                window,
                sibling,
                stack_mode,
            }
        })
        .collect()
}

impl XWrap {
    /// Restacks the windows of the request against their anchors.
    pub fn restack(&self, request: &StackRequest<X11rbWindowHandle>) -> Result<()> {
        for call in restack_plan(request) {
            xproto::configure_window(&self.conn, call.window, &call.aux())?;
        }
        self.flush()
    }
}

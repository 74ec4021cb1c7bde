mod flat_stack;
#[cfg(test)]
mod mock_display_server;

use crate::errors::SyncError;
use crate::models::{GroupId, Handle, WindowHandle};
use crate::{DisplayEvent, StackRequest};

pub use self::flat_stack::FlatStack;
#[cfg(test)]
pub use self::mock_display_server::MockDisplayServer;

/// What the engine needs to know about a window it does not own.
pub trait WindowQuery<H: Handle> {
    /// The window this one is a dialog (or other transient) of.
    fn is_transient_for(&self, window: &WindowHandle<H>) -> Option<WindowHandle<H>>;

    fn is_visible(&self, window: &WindowHandle<H>) -> bool;

    fn group(&self, window: &WindowHandle<H>) -> Option<GroupId>;

    fn name(&self, _window: &WindowHandle<H>) -> Option<String> {
        None
    }

    fn position(&self, _window: &WindowHandle<H>) -> Option<(i32, i32)> {
        None
    }
}

/// Backend primitive turning a [`StackRequest`] into actual restack calls.
pub trait SyncAdapter<H: Handle> {
    /// Realize the request. An event returned here is handed back to the
    /// engine once the current batch of requests is done.
    ///
    /// # Errors
    ///
    /// Fails when the backend refuses the restack, for example because a
    /// window was destroyed in the meantime.
    fn stack(&mut self, request: &StackRequest<H>) -> Result<Option<DisplayEvent<H>>, SyncError>;

    /// Called once the engine has dropped a window. Backends that keep their
    /// own copy of the order drop it here.
    fn forget(&mut self, _window: &WindowHandle<H>) {}
}

/// A backend that can both answer window queries and restack windows.
pub trait DisplayServer<H: Handle>: WindowQuery<H> + SyncAdapter<H> {}

impl<H: Handle, T: WindowQuery<H> + SyncAdapter<H>> DisplayServer<H> for T {}

use super::{DisplayEvent, DisplayServer, Handle, Manager, WindowHandle};

impl<H: Handle, SERVER: DisplayServer<H>> Manager<H, SERVER> {
    /// Apply an event coming from the display server and push the resulting
    /// restacks back to it. Returns true if the stacking changed.
    pub fn display_event_handler(&mut self, event: DisplayEvent<H>) -> bool {
        let changed = self.dispatch(event);
        self.flush();
        changed
    }

    pub(crate) fn dispatch(&mut self, event: DisplayEvent<H>) -> bool {
        tracing::trace!("DisplayEvent: {:?}", event);
        match event {
            DisplayEvent::FocusChanged(handle) => self.engine.on_focus_change(&handle),
            DisplayEvent::WindowDestroyed(handle) => self.forget_window(&handle),
        }
    }

    /// Drop a window from the engine and then from the backend.
    pub(crate) fn forget_window(&mut self, handle: &WindowHandle<H>) -> bool {
        let removed = self.engine.remove_window(handle);
        if removed {
            self.display_server.forget(handle);
        }
        removed
    }
}

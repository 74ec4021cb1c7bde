use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::engine::StackingEngine;
use crate::models::{Handle, LayerGroup, StackPosition, StackingInfo, WindowHandle};
use crate::DisplayEvent;

/// Owns the stacking engine together with the backend it drives.
///
/// Every mutating call updates the engine first and then flushes the queued
/// requests to the display server. Events the server hands back are fed into
/// the engine after the batch, up to `max_event_depth` rounds deep.
#[derive(Debug)]
pub struct Manager<H: Handle, SERVER: DisplayServer<H>> {
    pub engine: StackingEngine<H>,
    pub display_server: SERVER,
    pub config: Config,
}

impl<H, SERVER> Manager<H, SERVER>
where
    H: Handle,
    SERVER: DisplayServer<H>,
{
    pub fn new(config: Config, display_server: SERVER) -> Self {
        if let Err(err) = config.validate() {
            tracing::warn!("Stacking config is not valid: {}", err);
        }
        Self {
            engine: StackingEngine::new(&config),
            display_server,
            config,
        }
    }

    pub fn add_window(&mut self, handle: WindowHandle<H>) -> bool {
        let changed = self.engine.add_window(&self.display_server, handle);
        self.flush();
        changed
    }

    pub fn add_window_at(
        &mut self,
        handle: WindowHandle<H>,
        layer: LayerGroup,
        position: StackPosition,
    ) -> bool {
        let changed = self
            .engine
            .add_window_at(&self.display_server, handle, layer, position);
        self.flush();
        changed
    }

    pub fn remove_window(&mut self, handle: &WindowHandle<H>) -> bool {
        let changed = self.forget_window(handle);
        self.flush();
        changed
    }

    pub fn move_up(&mut self, handle: &WindowHandle<H>) -> bool {
        let changed = self.engine.move_up(&self.display_server, handle);
        self.flush();
        changed
    }

    pub fn move_down(&mut self, handle: &WindowHandle<H>) -> bool {
        let changed = self.engine.move_down(&self.display_server, handle);
        self.flush();
        changed
    }

    pub fn move_to_top(&mut self, handle: &WindowHandle<H>) -> bool {
        let changed = self.engine.move_to_top(handle);
        self.flush();
        changed
    }

    pub fn move_to_bottom(&mut self, handle: &WindowHandle<H>) -> bool {
        let changed = self.engine.move_to_bottom(handle);
        self.flush();
        changed
    }

    pub fn move_window_to_layer(
        &mut self,
        handle: &WindowHandle<H>,
        layer: LayerGroup,
        position: StackPosition,
    ) -> bool {
        let changed = self.engine.move_window_to_layer(handle, layer, position);
        self.flush();
        changed
    }

    pub fn bring_to_front(&mut self, handle: &WindowHandle<H>) -> bool {
        let changed = self.engine.bring_to_front(handle);
        self.flush();
        changed
    }

    pub fn set_fullscreen(&mut self, handle: &WindowHandle<H>, fullscreen: bool) -> bool {
        let changed = self.engine.set_fullscreen(handle, fullscreen);
        self.flush();
        changed
    }

    /// Focus hook of the window manager.
    pub fn on_focus_change(&mut self, handle: &WindowHandle<H>) -> bool {
        let changed = self.engine.on_focus_change(handle);
        self.flush();
        changed
    }

    pub fn get_z_order(&self) -> Vec<WindowHandle<H>> {
        self.engine.get_z_order()
    }

    pub fn stacking_info(&self) -> StackingInfo<H> {
        self.engine.stacking_info(&self.display_server)
    }

    /// Tear down the engine and hand the backend back.
    pub fn shutdown(mut self) -> SERVER {
        self.flush();
        tracing::debug!("Shutting down with {} stacked window(s)", self.engine.tree().len());
        self.display_server
    }

    /// Send every queued request to the display server.
    pub(crate) fn flush(&mut self) {
        let mut depth = 0;
        loop {
            let mut events: Vec<DisplayEvent<H>> = vec![];
            while let Some(request) = self.engine.actions.pop_front() {
                match self.display_server.stack(&request) {
                    Ok(Some(event)) => events.push(event),
                    Ok(None) => {}
                    // The tree is already committed, a dead window gets
                    // removed once its destroy notification arrives.
                    Err(err) => tracing::warn!("Unable to restack {:?}: {}", request.windows, err),
                }
            }
            if events.is_empty() {
                return;
            }
            if depth >= self.config.max_event_depth {
                tracing::error!(
                    "Dropping {} display event(s) after {} nested rounds",
                    events.len(),
                    depth
                );
                return;
            }
            depth += 1;
            for event in events {
                self.dispatch(event);
            }
        }
    }
}

#[cfg(test)]
impl Manager<crate::models::MockHandle, crate::display_servers::MockDisplayServer> {
    pub fn new_test(server: crate::display_servers::MockDisplayServer) -> Self {
        Self::new(Config::default(), server)
    }
}

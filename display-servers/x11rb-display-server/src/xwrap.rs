use x11rb::connection::Connection;
use x11rb::protocol::xproto;
use x11rb::rust_connection::RustConnection;

use crate::error::Result;

mod getters;
mod window;

pub use window::{restack_plan, Restack};

const MAX_PROPERTY_VALUE_LEN: u32 = 4096;

/// Contains the X server connection and the root the managed windows live on.
pub(crate) struct XWrap {
    conn: RustConnection,
    root: xproto::Window,
}

impl XWrap {
    /// Connect to the display named by `DISPLAY`.
    ///
    /// # Errors
    ///
    /// Will error if no X server can be reached.
    pub fn new() -> Result<Self> {
        let (conn, screen_num) = x11rb::connect(None)?;
        let root = conn.setup().roots[screen_num].root;
        tracing::debug!("Connected to screen {} with root {}", screen_num, root);
        Ok(Self { conn, root })
    }

    pub fn flush(&self) -> Result<()> {
        self.conn.flush()?;
        Ok(())
    }
}

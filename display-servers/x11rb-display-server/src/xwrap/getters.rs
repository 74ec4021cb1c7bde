//! `XWrap` getters.
use x11rb::properties::WmHints;
use x11rb::protocol::xproto;

use super::{XWrap, MAX_PROPERTY_VALUE_LEN};
use crate::error::Result;

impl XWrap {
    /// Returns the transient parent of a window. A window transient for the
    /// root belongs to its whole group and has no single owner.
    pub fn get_transient_for(&self, window: xproto::Window) -> Result<Option<xproto::Window>> {
        match xproto::get_property(
            &self.conn,
            false,
            window,
            xproto::AtomEnum::WM_TRANSIENT_FOR,
            xproto::AtomEnum::WINDOW,
            0,
            1,
        )?
        .reply()?
        .value32()
        {
            Some(mut i) => Ok(i
                .next()
                .filter(|&owner| owner != x11rb::NONE && owner != self.root)),
            None => Ok(None),
        }
    }

    /// Returns the attributes of a window.
    // `XGetWindowAttributes`: https://tronche.com/gui/x/xlib/window-information/XGetWindowAttributes.html
    pub fn get_window_attrs(
        &self,
        window: xproto::Window,
    ) -> Result<xproto::GetWindowAttributesReply> {
        Ok(xproto::get_window_attributes(&self.conn, window)?.reply()?)
    }

    /// Whether the window and all its ancestors are mapped.
    pub fn is_viewable(&self, window: xproto::Window) -> Result<bool> {
        let attrs = self.get_window_attrs(window)?;
        Ok(attrs.map_state == xproto::MapState::VIEWABLE)
    }

    /// Returns the group leader from the `WM_HINTS` of a window.
    // `XGetWMHints`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XGetWMHints.html
    pub fn get_window_group(&self, window: xproto::Window) -> Result<Option<xproto::Window>> {
        let hints = WmHints::get(&self.conn, window)?.reply()?;
        Ok(hints.and_then(|h| h.window_group))
    }

    /// Returns the position of a window relative to its parent.
    // `XGetGeometry`: https://tronche.com/gui/x/xlib/window-information/XGetGeometry.html
    pub fn get_window_position(&self, window: xproto::Window) -> Result<(i32, i32)> {
        let geometry = xproto::get_geometry(&self.conn, window)?.reply()?;
        Ok((geometry.x.into(), geometry.y.into()))
    }

    /// Returns the legacy `WM_NAME` of a window.
    pub fn get_window_name(&self, window: xproto::Window) -> Result<String> {
        let prop = xproto::get_property(
            &self.conn,
            false,
            window,
            xproto::AtomEnum::WM_NAME,
            xproto::AtomEnum::ANY,
            0,
            MAX_PROPERTY_VALUE_LEN,
        )?
        .reply()?;
        Ok(String::from_utf8(prop.value)?)
    }
}

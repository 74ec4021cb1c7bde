use crate::models::{Handle, WindowHandle};
use serde::{Deserialize, Serialize};

/// Events a display server may hand back while realizing a restack.
///
/// They are fed back into the engine only after the current batch of
/// requests has been flushed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent<H: Handle> {
    #[serde(bound = "")]
    FocusChanged(WindowHandle<H>),
    #[serde(bound = "")]
    WindowDestroyed(WindowHandle<H>),
}

use serde::{Deserialize, Serialize};

use super::{Handle, WindowHandle};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InfoKind {
    Root,
    Layer,
    Window,
}

/// Diagnostic mirror of the stacking tree.
///
/// Serializes to `{name, x, y, type, wid, children}` for introspection
/// commands. Children are listed bottom to top.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StackingInfo<H: Handle> {
    pub name: String,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub r#type: InfoKind,
    #[serde(bound = "")]
    pub wid: Option<WindowHandle<H>>,
    #[serde(bound = "")]
    pub children: Vec<StackingInfo<H>>,
}

impl<H: Handle> StackingInfo<H> {
    /// # Errors
    ///
    /// Fails only if the handle type refuses to serialize.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Number of window entries in this subtree.
    #[must_use]
    pub fn window_count(&self) -> usize {
        usize::from(self.r#type == InfoKind::Window)
            + self
                .children
                .iter()
                .map(StackingInfo::window_count)
                .sum::<usize>()
    }
}

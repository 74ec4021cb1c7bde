use crate::models::{Handle, WindowHandle};
use serde::{Deserialize, Serialize};

/// The neighbour a restacked range is placed against.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor<H: Handle> {
    /// Place the range directly above this window.
    #[serde(bound = "")]
    Above(WindowHandle<H>),
    /// Place the range directly below this window. Only used when nothing
    /// is stacked below the range.
    #[serde(bound = "")]
    Below(WindowHandle<H>),
    /// The range is the whole z-order.
    None,
}

/// These are requests from the stacking engine.
/// The display server should realize them with its restack primitive.
///
/// `windows` is a contiguous run of the full z-order, bottom first: the first
/// window goes against the anchor and every following window directly above
/// its predecessor.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StackRequest<H: Handle> {
    #[serde(bound = "")]
    pub windows: Vec<WindowHandle<H>>,
    #[serde(bound = "")]
    pub anchor: Anchor<H>,
}

impl<H: Handle> StackRequest<H> {
    /// Every window of the run paired with the neighbour it is placed against.
    pub fn placements(&self) -> impl Iterator<Item = (WindowHandle<H>, Anchor<H>)> + '_ {
        self.windows.iter().enumerate().map(|(i, &window)| {
            let anchor = match i {
                0 => self.anchor,
                _ => Anchor::Above(self.windows[i - 1]),
            };
            (window, anchor)
        })
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LayerGroupError;

/// The stacking bands, declared from the bottom of the screen to the top.
///
/// Every window lives in exactly one band and a band is always drawn above all
/// bands declared before it. `Fullscreen` and `BringToFront` are temporary
/// elevations: a window only stays there while it holds focus.
#[derive(
    Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum LayerGroup {
    Background,
    Bottom,
    KeepBelow,
    #[default]
    Layout,
    KeepAbove,
    Max,
    Fullscreen,
    BringToFront,
    Top,
    Overlay,
    System,
}

impl LayerGroup {
    pub const COUNT: usize = 11;

    /// All bands in rendering precedence, lowest first.
    pub const ALL: [LayerGroup; Self::COUNT] = [
        LayerGroup::Background,
        LayerGroup::Bottom,
        LayerGroup::KeepBelow,
        LayerGroup::Layout,
        LayerGroup::KeepAbove,
        LayerGroup::Max,
        LayerGroup::Fullscreen,
        LayerGroup::BringToFront,
        LayerGroup::Top,
        LayerGroup::Overlay,
        LayerGroup::System,
    ];

    /// Position of the band in [`LayerGroup::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn is_temporary(self) -> bool {
        matches!(self, LayerGroup::Fullscreen | LayerGroup::BringToFront)
    }

    pub const fn name(self) -> &'static str {
        match self {
            LayerGroup::Background => "background",
            LayerGroup::Bottom => "bottom",
            LayerGroup::KeepBelow => "keep_below",
            LayerGroup::Layout => "layout",
            LayerGroup::KeepAbove => "keep_above",
            LayerGroup::Max => "max",
            LayerGroup::Fullscreen => "fullscreen",
            LayerGroup::BringToFront => "bring_to_front",
            LayerGroup::Top => "top",
            LayerGroup::Overlay => "overlay",
            LayerGroup::System => "system",
        }
    }
}

impl fmt::Display for LayerGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayerGroup {
    type Err = LayerGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|layer| layer.name() == wanted)
            .ok_or_else(|| LayerGroupError::UnknownName(s.to_owned()))
    }
}

impl TryFrom<u8> for LayerGroup {
    type Error = LayerGroupError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(LayerGroupError::OutOfRange(value))
    }
}

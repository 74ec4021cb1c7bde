//! Stacking behaviour configuration.
use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, Result};
use crate::models::{LayerGroup, StackPosition};

/// Settings of the stacking engine.
///
/// # Example
///
/// In `config.toml`
///
/// ```toml
/// default_layer = "layout"
/// default_position = "top"
/// demote_on_focus = true
/// max_event_depth = 8
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Band new windows are added to when the caller does not pick one.
    pub default_layer: LayerGroup,
    pub default_position: StackPosition,
    /// Return fullscreen and brought-to-front windows to their home band
    /// when another window takes focus.
    pub demote_on_focus: bool,
    /// How many rounds of events returned by the display server are fed back
    /// into the engine before the rest is dropped.
    pub max_event_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_layer: LayerGroup::Layout,
            default_position: StackPosition::Top,
            demote_on_focus: true,
            max_event_depth: 8,
        }
    }
}

impl Config {
    /// # Errors
    ///
    /// Will error if the default layer is a temporary band or if no event
    /// round is allowed.
    pub fn validate(&self) -> Result<()> {
        if self.default_layer.is_temporary() {
            return Err(ConfigError::TemporaryDefaultLayer(self.default_layer));
        }
        if self.max_event_depth == 0 {
            return Err(ConfigError::NoEventDepth);
        }
        Ok(())
    }
}

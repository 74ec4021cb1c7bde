mod display_event_handler;
mod focus_handler;
mod window_handler;
mod window_move_handler;

use super::display_servers::{DisplayServer, WindowQuery};
use super::engine::StackingEngine;
use super::models::{Handle, LayerGroup, NodeId, StackPosition, WindowHandle};
use super::{DisplayEvent, Manager};

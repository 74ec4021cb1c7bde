//! The window stacking engine of stackwm.
// We deny clippy pedantic lints, primarily to keep code as correct as possible.
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise.
#![allow(
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::default_trait_access
)]
pub mod config;
mod display_event;
pub mod display_servers;
mod engine;
pub mod errors;
mod handlers;
mod manager;
pub mod models;
mod stack_request;

pub use config::Config;
pub use display_event::DisplayEvent;
pub use display_servers::{DisplayServer, FlatStack, SyncAdapter, WindowQuery};
pub use engine::StackingEngine;
pub use errors::{ConfigError, LayerGroupError, SyncError};
pub use manager::Manager;
pub use models::{GroupId, Handle, LayerGroup, StackPosition, StackingInfo, WindowHandle};
pub use stack_request::{Anchor, StackRequest};

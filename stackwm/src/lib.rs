//! Configuration loading and logging setup for stackwm.
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

mod config;
pub mod utils;

pub use config::*;

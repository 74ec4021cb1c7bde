//! Window handles
#![allow(clippy::module_name_repetitions)]

use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A trait which backend specific window handles need to implement
pub trait Handle:
    Serialize
    + DeserializeOwned
    + Debug
    + Clone
    + Copy
    + PartialEq
    + Eq
    + Hash
    + Default
    + Send
    + 'static
{
}

/// A Backend-agnostic handle to a window used to identify it
///
/// # Serde
///
/// Using generics here with serde derive macros causes some wierd behaviour with the compiler, so
/// as suggested by [this `serde` issue][serde-issue], just adding `#[serde(bound = "")]`
/// everywhere the generic is declared fixes the bug.
///
/// [serde-issue]: https://github.com/serde-rs/serde/issues/1296
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle<H>(#[serde(bound = "")] pub H)
where
    H: Handle;

impl<H: Handle> Display for WindowHandle<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Handle for testing purposes
pub type MockHandle = i32;
impl Handle for MockHandle {}

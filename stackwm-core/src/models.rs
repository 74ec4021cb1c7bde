//! Objects (layers, nodes, windows) the stacking engine is built from.
mod layer_group;
mod stack_node;
mod stack_position;
mod stack_tree;
mod stacking_info;
mod window;

pub use layer_group::LayerGroup;
pub use stack_node::{NodeId, NodeKind, StackNode};
pub use stack_position::StackPosition;
pub use stack_tree::StackTree;
pub use stacking_info::{InfoKind, StackingInfo};
pub use window::Handle;
#[cfg(test)]
pub(crate) use window::MockHandle;
pub use window::WindowHandle;

pub type GroupId = usize;

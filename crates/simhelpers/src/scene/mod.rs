//! Scene types.
//!
//! Responsibilities:
//! - retained unit-space visual nodes and the layered tree they attach to
//! - pixel-space draw commands with deterministic ordering (layer + insertion order)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;
mod node;
mod order;
mod tree;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use node::{Label, NodeContent, Primitive, VisualNode};
pub use order::{SortKey, ZIndex};
pub use tree::{NodeKey, SceneTree};

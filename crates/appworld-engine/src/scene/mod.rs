//! Scene graph.
//!
//! Responsibilities:
//! - own nodes and their parent/child links (`SceneGraph`)
//! - define the capabilities every node shares (`SceneNode`, `BaseNode`)
//! - provide the sized `UserNode`
//! - derive a deterministic paint order (global z + tree order)

mod error;
mod graph;
mod id;
mod key;
mod node;
mod paint;
mod user;
mod z_index;

pub use error::SceneError;
pub use graph::{SceneGraph, Subtree};
pub use id::NodeId;
pub use key::SortKey;
pub use node::{BaseNode, SceneNode};
pub use paint::PaintItem;
pub use user::UserNode;
pub use z_index::ZIndex;

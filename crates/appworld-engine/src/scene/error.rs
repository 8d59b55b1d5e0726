use std::fmt;

use super::NodeId;

/// Failure of a structural scene-graph operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    /// The id was never issued by this graph, or its node was despawned.
    UnknownNode(NodeId),
    /// The child already has a parent; detach it first.
    AlreadyAttached { child: NodeId, parent: NodeId },
    /// Attaching would make a node its own ancestor.
    WouldCycle { parent: NodeId, child: NodeId },
    /// The root can never become a child.
    RootNotAttachable,
    /// The root can never be despawned.
    RootNotRemovable,
    /// The two nodes do not share a top-level ancestor, so their coordinate
    /// spaces are unrelated.
    NotInSameTree { a: NodeId, b: NodeId },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::UnknownNode(id) => write!(f, "unknown scene node {id}"),
            SceneError::AlreadyAttached { child, parent } => {
                write!(f, "node {child} is already a child of {parent}")
            }
            SceneError::WouldCycle { parent, child } => {
                write!(f, "attaching {child} under {parent} would create a cycle")
            }
            SceneError::RootNotAttachable => f.write_str("the root node cannot be attached"),
            SceneError::RootNotRemovable => f.write_str("the root node cannot be despawned"),
            SceneError::NotInSameTree { a, b } => {
                write!(f, "nodes {a} and {b} are not in the same tree")
            }
        }
    }
}

impl std::error::Error for SceneError {}

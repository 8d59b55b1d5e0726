use std::any::Any;
use std::fmt;

use crate::coords::{Rect, Size, Vec2};

/// Capabilities every node in a [`SceneGraph`](super::SceneGraph) shares.
///
/// Node types embed a [`BaseNode`] and expose it through `base`/`base_mut`;
/// everything else has a default built on top of that. Hierarchy (parent and
/// children) is owned by the graph, not by the node. Concrete types are
/// recovered by upcasting to `dyn Any`.
pub trait SceneNode: Any + fmt::Debug {
    fn base(&self) -> &BaseNode;
    fn base_mut(&mut self) -> &mut BaseNode;

    /// Extent of the node's own content. Plain nodes have none.
    fn content_size(&self) -> Size {
        Size::ZERO
    }

    /// Content rect in the parent's coordinate space, centered on `position`.
    fn frame(&self) -> Rect {
        Rect::centered(self.position(), self.content_size())
    }

    /// Short type label used in scene dumps: the type name without its
    /// module path or generic arguments.
    fn kind(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        let path = full.split('<').next().unwrap_or(full);
        path.rsplit("::").next().unwrap_or(path)
    }

    fn name(&self) -> Option<&str> {
        self.base().name.as_deref()
    }

    fn set_name(&mut self, name: Option<String>) {
        self.base_mut().name = name;
    }

    fn position(&self) -> Vec2 {
        self.base().position
    }

    fn set_position(&mut self, position: Vec2) {
        self.base_mut().position = position;
    }

    fn z_position(&self) -> f32 {
        self.base().z_position
    }

    fn set_z_position(&mut self, z: f32) {
        self.base_mut().z_position = z;
    }

    fn is_hidden(&self) -> bool {
        self.base().hidden
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.base_mut().hidden = hidden;
    }
}

/// State shared by all nodes, and the plain node type itself.
///
/// `position` is relative to the parent. `z_position` is relative to the
/// parent's depth. A hidden node hides its whole subtree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseNode {
    pub(crate) name: Option<String>,
    pub(crate) position: Vec2,
    pub(crate) z_position: f32,
    pub(crate) hidden: bool,
}

impl BaseNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn z(mut self, z_position: f32) -> Self {
        self.z_position = z_position;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

impl SceneNode for BaseNode {
    fn base(&self) -> &BaseNode {
        self
    }

    fn base_mut(&mut self) -> &mut BaseNode {
        self
    }

    fn kind(&self) -> &'static str {
        "Node"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_node_has_empty_frame_at_position() {
        let node = BaseNode::new().at(Vec2::new(3.0, 4.0));
        assert_eq!(node.content_size(), Size::ZERO);
        assert_eq!(node.frame(), Rect::new(3.0, 4.0, 0.0, 0.0));
    }

    #[test]
    fn builder_sets_fields() {
        let node = BaseNode::new().named("hud").z(2.0).hidden(true);
        assert_eq!(node.name(), Some("hud"));
        assert_eq!(node.z_position(), 2.0);
        assert!(node.is_hidden());
    }

    #[test]
    fn setters_go_through_base() {
        let mut node = BaseNode::new();
        node.set_position(Vec2::new(1.0, -1.0));
        node.set_name(Some("a".into()));
        node.set_z_position(-3.0);
        node.set_hidden(true);
        assert_eq!(node.base().position, Vec2::new(1.0, -1.0));
        assert_eq!(node.name(), Some("a"));
        assert_eq!(node.z_position(), -3.0);
        assert!(node.base().hidden);
    }

    #[derive(Debug)]
    struct Tagged<T: fmt::Debug + 'static> {
        base: BaseNode,
        tag: T,
    }

    impl<T: fmt::Debug + 'static> SceneNode for Tagged<T> {
        fn base(&self) -> &BaseNode {
            &self.base
        }

        fn base_mut(&mut self) -> &mut BaseNode {
            &mut self.base
        }
    }

    #[test]
    fn kind_drops_path_and_generic_arguments() {
        let node = Tagged { base: BaseNode::new(), tag: String::from("npc") };
        assert_eq!(node.kind(), "Tagged");
        assert_eq!(node.tag, "npc");

        let nested = Tagged { base: BaseNode::new(), tag: vec![Some(1u8)] };
        assert_eq!(nested.kind(), "Tagged");
    }
}

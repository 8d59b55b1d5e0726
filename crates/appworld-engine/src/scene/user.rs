use crate::coords::{Size, Vec2};

use super::{BaseNode, SceneNode};

/// Node representing a user in the scene.
///
/// Unlike [`BaseNode`] it has no zero-argument constructor: a size is
/// required and stays fixed for the node's lifetime.
///
/// ```
/// use appworld_engine::coords::Size;
/// use appworld_engine::scene::{SceneGraph, UserNode};
///
/// let mut graph = SceneGraph::new();
/// let root = graph.root();
/// let user = graph.spawn_child(root, UserNode::with_size(Size::new(100.0, 50.0)))?;
/// assert_eq!(graph.get_as::<UserNode>(user).map(UserNode::size), Some(Size::new(100.0, 50.0)));
/// # Ok::<(), appworld_engine::scene::SceneError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UserNode {
    base: BaseNode,
    size: Size,
}

impl UserNode {
    /// Creates a user node occupying `size`, stored as given.
    pub fn with_size(size: Size) -> Self {
        if size.is_degenerate() {
            log::debug!("user node created with degenerate size {size:?}");
        }
        Self {
            base: BaseNode::new(),
            size,
        }
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.base.name = Some(name.into());
        self
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.base.position = position;
        self
    }

    pub fn z(mut self, z_position: f32) -> Self {
        self.base.z_position = z_position;
        self
    }
}

impl SceneNode for UserNode {
    fn base(&self) -> &BaseNode {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseNode {
        &mut self.base
    }

    fn content_size(&self) -> Size {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;

    #[test]
    fn keeps_the_given_size() {
        for size in [
            Size::new(100.0, 50.0),
            Size::ZERO,
            Size::new(0.5, 1e6),
            Size::new(-3.0, 2.0),
        ] {
            assert_eq!(UserNode::with_size(size).size(), size);
        }
    }

    #[test]
    fn instances_are_independent() {
        let mut a = UserNode::with_size(Size::new(10.0, 20.0));
        let b = UserNode::with_size(Size::new(30.0, 40.0));
        a.set_position(Vec2::new(5.0, 5.0));

        assert_eq!(a.size(), Size::new(10.0, 20.0));
        assert_eq!(b.size(), Size::new(30.0, 40.0));
        assert_eq!(b.position(), Vec2::ZERO);
    }

    #[test]
    fn frame_is_centered_on_position() {
        let node = UserNode::with_size(Size::new(100.0, 50.0)).at(Vec2::new(10.0, 10.0));
        assert_eq!(node.frame(), Rect::new(-40.0, -15.0, 100.0, 50.0));
    }

    #[test]
    fn moving_does_not_touch_size() {
        let mut node = UserNode::with_size(Size::new(8.0, 8.0)).named("player").z(1.0);
        node.set_position(Vec2::new(-4.0, 4.0));
        assert_eq!(node.size(), Size::new(8.0, 8.0));
        assert_eq!(node.name(), Some("player"));
        assert_eq!(node.kind(), "UserNode");
    }
}

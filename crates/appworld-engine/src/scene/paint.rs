use crate::coords::{Rect, Vec2};

use super::{NodeId, SceneGraph, SortKey, ZIndex};

/// A visible node in paint order: sort key + scene-space frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintItem {
    pub id: NodeId,
    pub key: SortKey,
    /// Node frame in scene space. Empty for nodes without content.
    pub frame: Rect,
}

impl SceneGraph {
    /// Visible nodes under the root, back-to-front.
    ///
    /// Nodes are ordered by global z (sum of `z_position` down the chain),
    /// then by depth-first tree order. Hidden nodes and their subtrees are
    /// skipped; detached nodes never appear.
    pub fn paint_order(&self) -> Vec<PaintItem> {
        let mut items = Vec::with_capacity(self.node_count());
        let mut order = 0u32;

        // (node, depth of parent, origin of parent's space)
        let mut stack = vec![(self.root(), ZIndex::default(), Vec2::ZERO)];
        while let Some((id, parent_z, parent_origin)) = stack.pop() {
            let Some(node) = self.get(id) else { continue };
            if node.is_hidden() {
                continue;
            }

            let z = parent_z.nested(node.z_position());
            let (frame, origin) = if id == self.root() {
                (Rect::ZERO, Vec2::ZERO)
            } else {
                (node.frame().offset(parent_origin), parent_origin + node.position())
            };

            items.push(PaintItem {
                id,
                key: SortKey::new(z, order),
                frame,
            });
            order = order.wrapping_add(1);

            for &child in self.children(id).iter().rev() {
                stack.push((child, z, origin));
            }
        }

        items.sort_by(|a, b| a.key.cmp(&b.key));
        items
    }

    /// Visible nodes whose scene-space frame contains `point`, topmost first.
    pub fn nodes_at_point(&self, point: Vec2) -> Vec<NodeId> {
        self.paint_order()
            .into_iter()
            .rev()
            .filter(|item| item.frame.contains(point))
            .map(|item| item.id)
            .collect()
    }
}

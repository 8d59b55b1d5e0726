use std::any::Any;
use std::fmt::Write as _;

use crate::coords::{Rect, Vec2};

use super::{BaseNode, NodeId, SceneError, SceneNode};

struct Entry {
    node: Box<dyn SceneNode>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

struct Slot {
    generation: u32,
    entry: Option<Entry>,
}

/// Arena owning every node of a scene together with its hierarchy.
///
/// A graph always has a root node (a [`BaseNode`] named `"root"`). Inserted
/// nodes start detached; they are owned by the graph from insertion until
/// [`despawn`](Self::despawn), whether or not they are attached.
///
/// Coordinate spaces nest by translation: a node's position is relative to
/// its parent. The top node of a tree (the root, or the top of a detached
/// subtree) defines scene space; its own position is ignored.
pub struct SceneGraph {
    slots: Vec<Slot>,
    free: Vec<u32>,
    root: NodeId,
    len: usize,
}

impl SceneGraph {
    pub fn new() -> Self {
        let mut graph = Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: NodeId::new(0, 0),
            len: 0,
        };
        graph.root = graph.insert(BaseNode::new().named("root"));
        graph
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes, root included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.entry(id).is_some()
    }

    // ── ownership ─────────────────────────────────────────────────────────

    /// Takes ownership of `node` and returns its id. The node is detached.
    pub fn insert<N: SceneNode>(&mut self, node: N) -> NodeId {
        self.insert_boxed(Box::new(node))
    }

    pub fn insert_boxed(&mut self, node: Box<dyn SceneNode>) -> NodeId {
        let entry = Entry {
            node,
            parent: None,
            children: Vec::new(),
        };

        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.entry = Some(entry);
                NodeId::new(index, slot.generation)
            }
            None => {
                debug_assert!(self.slots.len() < u32::MAX as usize);
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    entry: Some(entry),
                });
                NodeId::new(index, 0)
            }
        };

        self.len += 1;
        log::trace!("inserted node {id}");
        id
    }

    /// Inserts `node` and appends it to `parent`'s children.
    pub fn spawn_child<N: SceneNode>(&mut self, parent: NodeId, node: N) -> Result<NodeId, SceneError> {
        self.require(parent)?;
        let id = self.insert(node);
        self.add_child(parent, id)?;
        Ok(id)
    }

    /// Drops `id` and its whole subtree. Returns the number of nodes removed.
    ///
    /// Every removed id becomes permanently invalid.
    pub fn despawn(&mut self, id: NodeId) -> Result<usize, SceneError> {
        if id == self.root {
            return Err(SceneError::RootNotRemovable);
        }
        self.remove_from_parent(id)?;

        let doomed: Vec<NodeId> = self.subtree(id).collect();
        for &dead in &doomed {
            let slot = &mut self.slots[dead.index as usize];
            slot.entry = None;
            // A slot whose generation is exhausted is retired, never reused.
            match slot.generation.checked_add(1) {
                Some(next) => {
                    slot.generation = next;
                    self.free.push(dead.index);
                }
                None => log::debug!("retiring exhausted slot {}", dead.index),
            }
        }
        self.len -= doomed.len();

        log::debug!("despawned {id} ({} nodes)", doomed.len());
        Ok(doomed.len())
    }

    // ── hierarchy ─────────────────────────────────────────────────────────

    /// Appends `child` to `parent`'s children.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SceneError> {
        self.insert_child(parent, usize::MAX, child)
    }

    /// Inserts `child` at `index` among `parent`'s children. `index` is
    /// clamped to the current child count.
    pub fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) -> Result<(), SceneError> {
        self.require(parent)?;
        let current = self.require(child)?.parent;

        if child == self.root {
            return Err(SceneError::RootNotAttachable);
        }
        if let Some(existing) = current {
            return Err(SceneError::AlreadyAttached { child, parent: existing });
        }
        if self.in_parent_hierarchy(parent, child) {
            return Err(SceneError::WouldCycle { parent, child });
        }

        if let Some(entry) = self.entry_mut(parent) {
            let at = index.min(entry.children.len());
            entry.children.insert(at, child);
        }
        if let Some(entry) = self.entry_mut(child) {
            entry.parent = Some(parent);
        }

        log::debug!("attached {child} to {parent}");
        Ok(())
    }

    /// Detaches `id` from its parent. Detached nodes are left untouched.
    pub fn remove_from_parent(&mut self, id: NodeId) -> Result<(), SceneError> {
        let Some(parent) = self.require(id)?.parent else {
            return Ok(());
        };

        if let Some(entry) = self.entry_mut(parent) {
            entry.children.retain(|&c| c != id);
        }
        if let Some(entry) = self.entry_mut(id) {
            entry.parent = None;
        }

        log::debug!("detached {id} from {parent}");
        Ok(())
    }

    /// Detaches every child of `id` and returns them in their former order.
    pub fn remove_all_children(&mut self, id: NodeId) -> Result<Vec<NodeId>, SceneError> {
        self.require(id)?;
        let children = self
            .entry_mut(id)
            .map(|e| std::mem::take(&mut e.children))
            .unwrap_or_default();

        for &child in &children {
            if let Some(entry) = self.entry_mut(child) {
                entry.parent = None;
            }
        }

        log::debug!("detached {} children from {id}", children.len());
        Ok(children)
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.entry(id)?.parent
    }

    /// Children of `id` in order. Unknown ids have none.
    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.entry(id).map(|e| e.children.as_slice()).unwrap_or(&[])
    }

    /// True when `ancestor` is `id` or one of its ancestors.
    pub fn in_parent_hierarchy(&self, id: NodeId, ancestor: NodeId) -> bool {
        self.ancestors(id).any(|a| a == ancestor)
    }

    /// First direct child of `parent` with the given name.
    pub fn child_node_with_name(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|&c| self.get(c).and_then(|n| n.name()) == Some(name))
    }

    /// `id` followed by its ancestors up to the top of its tree.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.contains(id).then_some(id), move |&n| self.parent(n))
    }

    /// Depth-first pre-order walk of `id`'s subtree, starting with `id`.
    pub fn subtree(&self, id: NodeId) -> Subtree<'_> {
        Subtree {
            graph: self,
            stack: if self.contains(id) { vec![id] } else { Vec::new() },
        }
    }

    // ── node access ───────────────────────────────────────────────────────

    pub fn get(&self, id: NodeId) -> Option<&dyn SceneNode> {
        self.entry(id).map(|e| &*e.node)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut dyn SceneNode> {
        match self.entry_mut(id) {
            Some(entry) => Some(&mut *entry.node),
            None => None,
        }
    }

    /// Borrows the node as its concrete type.
    pub fn get_as<T: SceneNode>(&self, id: NodeId) -> Option<&T> {
        let node: &(dyn Any + 'static) = &*self.entry(id)?.node;
        node.downcast_ref::<T>()
    }

    pub fn get_as_mut<T: SceneNode>(&mut self, id: NodeId) -> Option<&mut T> {
        let node: &mut (dyn Any + 'static) = &mut *self.entry_mut(id)?.node;
        node.downcast_mut::<T>()
    }

    // ── coordinate spaces ─────────────────────────────────────────────────

    /// Position of `id` in scene space (the space of its top-level ancestor).
    pub fn scene_position(&self, id: NodeId) -> Result<Vec2, SceneError> {
        self.require(id)?;
        Ok(self.space_origin(id))
    }

    /// Re-expresses `point`, given in `from`'s coordinate space, in `to`'s.
    pub fn convert_point(&self, point: Vec2, from: NodeId, to: NodeId) -> Result<Vec2, SceneError> {
        self.require(from)?;
        self.require(to)?;
        if self.top(from) != self.top(to) {
            return Err(SceneError::NotInSameTree { a: from, b: to });
        }
        Ok(point + self.space_origin(from) - self.space_origin(to))
    }

    /// Union of `id`'s frame and the frames of its visible descendants,
    /// in the parent's coordinate space.
    pub fn accumulated_frame(&self, id: NodeId) -> Result<Rect, SceneError> {
        let entry = self.require(id)?;
        let mut frame = entry.node.frame();

        // (node, origin of its parent's space relative to `id`'s parent space)
        let origin = entry.node.position();
        let mut stack: Vec<(NodeId, Vec2)> = entry.children.iter().rev().map(|&c| (c, origin)).collect();
        while let Some((child, offset)) = stack.pop() {
            let Some(node) = self.get(child) else { continue };
            if node.is_hidden() {
                continue;
            }
            frame = frame.union(node.frame().offset(offset));

            let inner = offset + node.position();
            stack.extend(self.children(child).iter().rev().map(|&c| (c, inner)));
        }
        Ok(frame)
    }

    /// True when neither `id` nor any of its ancestors is hidden.
    pub fn is_visible(&self, id: NodeId) -> bool {
        self.contains(id)
            && self
                .ancestors(id)
                .all(|a| self.get(a).is_some_and(|n| !n.is_hidden()))
    }

    // ── diagnostics ───────────────────────────────────────────────────────

    /// Indented one-line-per-node dump of `id`'s subtree.
    pub fn describe(&self, id: NodeId) -> String {
        let mut out = String::new();
        let mut stack = vec![(id, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let Some(entry) = self.entry(id) else { continue };
            Self::describe_line(&mut out, id, &*entry.node, depth);
            stack.extend(entry.children.iter().rev().map(|&c| (c, depth + 1)));
        }
        out
    }

    fn describe_line(out: &mut String, id: NodeId, node: &dyn SceneNode, depth: usize) {
        let p = node.position();
        let size = node.content_size();

        let _ = write!(
            out,
            "{:indent$}{} {} '{}' at ({}, {}) size {}x{} z {}",
            "",
            node.kind(),
            id,
            node.name().unwrap_or("-"),
            p.x,
            p.y,
            size.width,
            size.height,
            node.z_position(),
            indent = depth * 2,
        );
        if node.is_hidden() {
            out.push_str(" hidden");
        }
        out.push('\n');
    }

    // ── internals ─────────────────────────────────────────────────────────

    fn entry(&self, id: NodeId) -> Option<&Entry> {
        self.slots
            .get(id.index as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.entry.as_ref())
    }

    fn entry_mut(&mut self, id: NodeId) -> Option<&mut Entry> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.entry.as_mut())
    }

    fn require(&self, id: NodeId) -> Result<&Entry, SceneError> {
        self.entry(id).ok_or(SceneError::UnknownNode(id))
    }

    /// Top-level ancestor of `id`.
    pub(crate) fn top(&self, id: NodeId) -> NodeId {
        self.ancestors(id).last().unwrap_or(id)
    }

    /// Origin of `id`'s coordinate space, in scene space.
    pub(crate) fn space_origin(&self, id: NodeId) -> Vec2 {
        let mut origin = Vec2::ZERO;
        for a in self.ancestors(id) {
            if self.parent(a).is_none() {
                break;
            }
            if let Some(node) = self.get(a) {
                origin += node.position();
            }
        }
        origin
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-order iterator returned by [`SceneGraph::subtree`].
pub struct Subtree<'a> {
    graph: &'a SceneGraph,
    stack: Vec<NodeId>,
}

impl Iterator for Subtree<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack.extend(self.graph.children(id).iter().rev());
        Some(id)
    }
}

use core::cmp::Ordering;

use super::ZIndex;

/// Paint-order key for a visible node.
///
/// Ordering rules:
/// 1) `z`: ascending (back-to-front)
/// 2) `order`: ascending (depth-first tree order for equal z)
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SortKey {
    pub z: ZIndex,
    /// Pre-order position of the node in the traversal that produced it.
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.z.cmp(&other.z).then(self.order.cmp(&other.order))
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

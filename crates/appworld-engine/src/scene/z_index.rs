use core::cmp::Ordering;

/// Global depth of a node: the sum of `z_position` along its ancestor chain.
///
/// Higher values appear on top of lower values. Ordering is total
/// (`f32::total_cmp`); `-0.0` is folded into `0.0` on construction.
#[derive(Debug, Copy, Clone, Default)]
pub struct ZIndex(f32);

impl ZIndex {
    #[inline]
    pub fn new(v: f32) -> Self {
        Self(v + 0.0)
    }

    #[inline]
    pub const fn get(self) -> f32 {
        self.0
    }

    /// Depth of a child at `z_position` relative to this one.
    #[inline]
    pub fn nested(self, z_position: f32) -> Self {
        Self::new(self.0 + z_position)
    }
}

impl Ord for ZIndex {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for ZIndex {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ZIndex {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ZIndex {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_zero_equals_zero() {
        assert_eq!(ZIndex::new(-0.0), ZIndex::new(0.0));
    }

    #[test]
    fn nested_accumulates() {
        let z = ZIndex::new(1.5).nested(2.0).nested(-0.5);
        assert_eq!(z.get(), 3.0);
        assert!(ZIndex::new(-1.0) < z);
    }
}

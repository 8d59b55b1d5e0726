use super::{Size, Vec2};

/// Axis-aligned rectangle in logical points. `origin` is the minimum corner.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Size::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Size) -> Self {
        Self { origin, size }
    }

    /// Rectangle of `size` whose center sits on `center`.
    ///
    /// The result is normalized, so a negative size still yields a
    /// rectangle around `center`.
    #[inline]
    pub fn centered(center: Vec2, size: Size) -> Self {
        Rect::from_origin_size(
            Vec2::new(center.x - size.width * 0.5, center.y - size.height * 0.5),
            size,
        )
        .normalized()
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.width, self.origin.y + self.size.height)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.is_empty()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let Rect { mut origin, mut size } = self;

        if size.width < 0.0 {
            origin.x += size.width;
            size.width = -size.width;
        }
        if size.height < 0.0 {
            origin.y += size.height;
            size.height = -size.height;
        }

        Rect { origin, size }
    }

    /// Moves the rectangle by `delta`.
    #[inline]
    pub fn offset(self, delta: Vec2) -> Self {
        Rect::from_origin_size(self.origin + delta, self.size)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        let max = r.max();
        p.x >= r.origin.x && p.y >= r.origin.y && p.x < max.x && p.y < max.y
    }

    /// Smallest rectangle enclosing both. Empty rectangles contribute only
    /// when both are empty, in which case `self` is returned.
    pub fn union(self, other: Rect) -> Rect {
        let a = self.normalized();
        let b = other.normalized();

        match (a.is_empty(), b.is_empty()) {
            (true, true) | (false, true) => a,
            (true, false) => b,
            (false, false) => {
                let (amax, bmax) = (a.max(), b.max());
                let x0 = a.origin.x.min(b.origin.x);
                let y0 = a.origin.y.min(b.origin.y);
                let x1 = amax.x.max(bmax.x);
                let y1 = amax.y.max(bmax.y);
                Rect::new(x0, y0, x1 - x0, y1 - y0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── centered ──────────────────────────────────────────────────────────

    #[test]
    fn centered_places_center_on_point() {
        let rect = Rect::centered(Vec2::new(10.0, 20.0), Size::new(100.0, 50.0));
        assert_eq!(rect, r(-40.0, -5.0, 100.0, 50.0));
    }

    #[test]
    fn centered_negative_size_is_normalized() {
        let rect = Rect::centered(Vec2::ZERO, Size::new(-4.0, 2.0));
        assert_eq!(rect, r(-2.0, -1.0, 4.0, 2.0));
    }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_height() {
        let n = r(0.0, 10.0, 5.0, -3.0).normalized();
        assert_eq!(n.origin.y, 7.0);
        assert_eq!(n.size.height, 3.0);
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_min_inclusive_max_exclusive() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(5.0, 5.0)));
        assert!(!rect.contains(Vec2::new(10.0, 10.0)));
        assert!(!rect.contains(Vec2::new(-1.0, 5.0)));
    }

    // ── union ─────────────────────────────────────────────────────────────

    #[test]
    fn union_of_disjoint_rects_spans_both() {
        let u = r(0.0, 0.0, 5.0, 5.0).union(r(10.0, -5.0, 5.0, 5.0));
        assert_eq!(u, r(0.0, -5.0, 15.0, 10.0));
    }

    #[test]
    fn union_ignores_empty_side() {
        let a = r(1.0, 1.0, 2.0, 2.0);
        assert_eq!(a.union(Rect::ZERO), a);
        assert_eq!(Rect::ZERO.union(a), a);
    }

    #[test]
    fn offset_moves_origin_only() {
        let moved = r(1.0, 2.0, 3.0, 4.0).offset(Vec2::new(10.0, -2.0));
        assert_eq!(moved, r(11.0, 0.0, 3.0, 4.0));
    }
}

/// Two-dimensional extent in logical points.
///
/// Dimensions are conventionally non-negative but nothing here enforces it;
/// see [`Size::is_degenerate`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size::new(0.0, 0.0);

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    /// True when either dimension is zero or negative.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// True for sizes that cannot describe a visible extent: empty, negative
    /// or non-finite.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        !self.is_finite() || self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_size_is_not_degenerate() {
        let s = Size::new(100.0, 50.0);
        assert!(!s.is_empty());
        assert!(!s.is_degenerate());
    }

    #[test]
    fn zero_and_negative_are_empty() {
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(-1.0, 5.0).is_empty());
        assert!(Size::new(5.0, -1.0).is_degenerate());
    }

    #[test]
    fn non_finite_is_degenerate() {
        assert!(Size::new(f32::NAN, 1.0).is_degenerate());
        assert!(Size::new(1.0, f32::INFINITY).is_degenerate());
        assert!(!Size::new(1.0, f32::INFINITY).is_empty());
    }
}

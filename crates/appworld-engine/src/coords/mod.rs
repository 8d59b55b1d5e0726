//! Coordinate and geometry types shared by the scene graph.
//!
//! Canonical space:
//! - Logical points (resolution independent)
//! - A node's position is relative to its parent's origin
//! - +X right, +Y up
//!
//! Nesting is translation-only; there is no scale or rotation.

mod rect;
mod size;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;

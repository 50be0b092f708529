//! Axis-aligned rectangles
//!
//! The one data structure in the simulation: an integer AABB with the
//! edge-anchored setters the placement code and the sprites need.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box with integer coordinates.
///
/// `left`/`top` is the origin in screen coordinates (y grows downward);
/// `width` and `height` are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        debug_assert!(width >= 0 && height >= 0);
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A rectangle of the given size at the origin.
    pub fn of_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.left + self.width / 2, self.top + self.height / 2)
    }

    /// Move the box so its bottom edge sits at `bottom`.
    pub fn set_bottom(&mut self, bottom: i32) {
        self.top = bottom - self.height;
    }

    /// Move the box so its horizontal center sits at `x`.
    pub fn set_center_x(&mut self, x: i32) {
        self.left = x - self.width / 2;
    }

    /// Translate in place.
    pub fn shift(&mut self, delta: IVec2) {
        self.left += delta.x;
        self.top += delta.y;
    }

    /// Standard AABB overlap test.
    ///
    /// Strict inequalities throughout: rectangles that merely share an edge
    /// do not intersect, and zero-area rectangles intersect nothing.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right()
            && self.right() > other.left
            && self.top < other.bottom()
            && self.bottom() > other.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn edges_derive_from_origin_and_size() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.center(), IVec2::new(25, 40));
    }

    #[test]
    fn self_intersection_requires_positive_area() {
        let r = Rect::new(5, 5, 10, 10);
        assert!(r.intersects(&r));

        let flat = Rect::new(5, 5, 10, 0);
        assert!(!flat.intersects(&flat));
        let thin = Rect::new(5, 5, 0, 10);
        assert!(!thin.intersects(&thin));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let right_of = Rect::new(10, 0, 10, 10);
        let below = Rect::new(0, 10, 10, 10);
        assert!(!a.intersects(&right_of));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn overlap_and_containment_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let corner = Rect::new(9, 9, 10, 10);
        let inner = Rect::new(3, 3, 2, 2);
        assert!(a.intersects(&corner));
        assert!(a.intersects(&inner));
        assert!(inner.intersects(&a));
    }

    #[test]
    fn setters_anchor_the_named_edge() {
        let mut r = Rect::of_size(20, 42);
        r.set_center_x(300);
        r.set_bottom(600);
        assert_eq!(r.left, 290);
        assert_eq!(r.top, 558);
        assert_eq!(r.bottom(), 600);
    }

    #[test]
    fn shift_translates_both_axes() {
        let mut r = Rect::new(10, 10, 5, 5);
        r.shift(IVec2::new(-3, 6));
        assert_eq!((r.left, r.top), (7, 16));
        assert_eq!((r.width, r.height), (5, 5));
    }

    fn arb_rect() -> impl Strategy<Value = Rect> {
        (-300..300i32, -300..300i32, 0..150i32, 0..150i32)
            .prop_map(|(l, t, w, h)| Rect::new(l, t, w, h))
    }

    proptest! {
        #[test]
        fn intersection_is_symmetric(a in arb_rect(), b in arb_rect()) {
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn disjoint_x_projections_never_intersect(
            a in arb_rect(),
            b in arb_rect(),
            gap in 0..50i32,
        ) {
            let mut b = b;
            b.left = a.right() + gap;
            prop_assert!(!a.intersects(&b));
        }
    }
}

//! Collision detection
//!
//! Everything on the field is an axis-aligned box, so a single overlap test
//! covers player-vs-car and player-vs-prize.

use super::rect::Rect;

/// Check whether two boxes intersect with positive area
///
/// Boxes that only share an edge or a corner do not collide.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x() < b.right() && a.right() > b.x() && a.y() < b.bottom() && a.bottom() > b.y()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_partial() {
        let a = Rect::new(0.0, 0.0, 40.0, 40.0);
        let b = Rect::new(30.0, 30.0, 40.0, 40.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_overlap_contained() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn test_shared_edge_is_not_a_hit() {
        let a = Rect::new(0.0, 0.0, 40.0, 40.0);
        // Right neighbour
        assert!(!overlaps(&a, &Rect::new(40.0, 0.0, 40.0, 40.0)));
        // Neighbour below
        assert!(!overlaps(&a, &Rect::new(0.0, 40.0, 40.0, 40.0)));
        // Corner only
        assert!(!overlaps(&a, &Rect::new(40.0, 40.0, 40.0, 40.0)));
    }

    #[test]
    fn test_disjoint() {
        let a = Rect::new(0.0, 0.0, 40.0, 40.0);
        let b = Rect::new(200.0, 300.0, 60.0, 40.0);
        assert!(!overlaps(&a, &b));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..200.0, ah in 1.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 1.0f32..200.0, bh in 1.0f32..200.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn boxes_placed_edge_to_edge_never_collide(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 1.0f32..200.0, h in 1.0f32..200.0,
            other_w in 1.0f32..200.0, other_h in 1.0f32..200.0,
        ) {
            let a = Rect::new(x, y, w, h);
            let right = Rect::new(a.right(), y, other_w, other_h);
            let below = Rect::new(x, a.bottom(), other_w, other_h);
            prop_assert!(!overlaps(&a, &right));
            prop_assert!(!overlaps(&a, &below));
        }
    }
}

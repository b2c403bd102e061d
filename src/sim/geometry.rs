//! Axis-aligned bounding boxes
//!
//! Boxes use pixel-range semantics: `left..right` and `top..bottom` are
//! half-open, so two boxes that only share an edge are not overlapping.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Screen-space rectangle, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl BoundingBox {
    pub fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Box covering `size` pixels starting at `pos`
    pub fn from_pos_size(pos: IVec2, size: IVec2) -> Self {
        Self {
            left: pos.x,
            right: pos.x + size.x,
            top: pos.y,
            bottom: pos.y + size.y,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn center_x(&self) -> i32 {
        self.left + self.width() / 2
    }

    /// True if the box lies entirely inside `[0, w) x [0, h)`
    pub fn within_screen(&self, screen: IVec2) -> bool {
        self.left >= 0 && self.top >= 0 && self.right <= screen.x && self.bottom <= screen.y
    }

    /// True if the x ranges share at least one pixel column
    #[inline]
    pub fn overlaps_x(&self, other: &BoundingBox) -> bool {
        self.left < other.right && other.left < self.right
    }

    /// True if the y ranges share at least one pixel row
    #[inline]
    pub fn overlaps_y(&self, other: &BoundingBox) -> bool {
        self.top < other.bottom && other.top < self.bottom
    }
}

/// Check whether two boxes share at least one pixel
pub fn overlaps(a: &BoundingBox, b: &BoundingBox) -> bool {
    a.overlaps_x(b) && a.overlaps_y(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_basic() {
        let obstacle = BoundingBox::from_pos_size(IVec2::new(100, 100), IVec2::new(20, 20));
        let player = BoundingBox::new(90, 110, 90, 110);
        assert!(overlaps(&player, &obstacle));
        assert!(overlaps(&obstacle, &player));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = BoundingBox::new(0, 10, 0, 10);
        let right_neighbour = BoundingBox::new(10, 20, 0, 10);
        let below_neighbour = BoundingBox::new(0, 10, 10, 20);
        let corner = BoundingBox::new(10, 20, 10, 20);
        assert!(!overlaps(&a, &right_neighbour));
        assert!(!overlaps(&a, &below_neighbour));
        assert!(!overlaps(&a, &corner));
    }

    #[test]
    fn test_one_pixel_overlap() {
        let a = BoundingBox::new(0, 10, 0, 10);
        let b = BoundingBox::new(9, 20, 9, 20);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_containment_overlaps() {
        // The corner test in one of the old revisions missed this case
        let outer = BoundingBox::new(0, 100, 0, 100);
        let inner = BoundingBox::new(10, 20, 10, 20);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));

        let same = outer;
        assert!(overlaps(&outer, &same));
    }

    #[test]
    fn test_separate_on_one_axis() {
        let a = BoundingBox::new(0, 10, 0, 10);
        let b = BoundingBox::new(5, 15, 50, 60);
        assert!(a.overlaps_x(&b));
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_within_screen() {
        let screen = IVec2::new(100, 200);
        assert!(BoundingBox::new(0, 100, 0, 200).within_screen(screen));
        assert!(!BoundingBox::new(-1, 10, 0, 10).within_screen(screen));
        assert!(!BoundingBox::new(0, 101, 0, 10).within_screen(screen));
    }
}

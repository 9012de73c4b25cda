//! Axis-aligned rectangles for every entity on the field
//!
//! Screen coordinates: origin top-left, x grows right, y grows down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box with a real-valued position and a fixed size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height (both > 0)
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(
            width > 0.0 && height > 0.0,
            "rect size must be positive, got {}x{}",
            width,
            height
        );
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Right edge (x + width)
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Bottom edge (y + height)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Same size, moved by `delta`
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            pos: self.pos + delta,
            size: self.size,
        }
    }

    /// True if the whole box lies inside `[0, width] x [0, height]`
    pub fn within(&self, width: f32, height: f32) -> bool {
        self.x() >= 0.0 && self.y() >= 0.0 && self.right() <= width && self.bottom() <= height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
    }

    #[test]
    fn test_within_bounds() {
        assert!(Rect::new(0.0, 0.0, 40.0, 40.0).within(500.0, 400.0));
        assert!(Rect::new(460.0, 360.0, 40.0, 40.0).within(500.0, 400.0));
        assert!(!Rect::new(-20.0, 0.0, 40.0, 40.0).within(500.0, 400.0));
        assert!(!Rect::new(470.0, 0.0, 40.0, 40.0).within(500.0, 400.0));
        assert!(!Rect::new(0.0, 365.0, 40.0, 40.0).within(500.0, 400.0));
    }

    #[test]
    fn test_translated_keeps_size() {
        let r = Rect::new(0.0, 0.0, 40.0, 40.0).translated(Vec2::new(50.0, -5.0));
        assert_eq!(r.pos, Vec2::new(50.0, -5.0));
        assert_eq!(r.size, Vec2::new(40.0, 40.0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "rect size must be positive")]
    fn test_zero_width_rejected() {
        Rect::new(0.0, 0.0, 0.0, 40.0);
    }
}

//! Rectangular pixel bounds.

use glam::Vec2;
use panplot_core::geometry::Size;
use panplot_core::math::clamp_lenient_f32;

/// Rectangular bounds in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left)
    pub x: f32,
    /// Y position (top)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rect anchored at the origin.
    pub fn from_size(size: Size<f32>) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Clamp a point onto the rect.
    pub fn clamp_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            clamp_lenient_f32(point.x, self.x, self.right()),
            clamp_lenient_f32(point.y, self.y, self.bottom()),
        )
    }

    /// Get the right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_point() {
        let rect = Rect::new(0.0, 0.0, 300.0, 200.0);
        assert_eq!(rect.clamp_point(Vec2::new(-5.0, 250.0)), Vec2::new(0.0, 200.0));
        assert_eq!(rect.clamp_point(Vec2::new(40.0, 45.0)), Vec2::new(40.0, 45.0));
        assert_eq!(rect.clamp_point(Vec2::new(300.0, 200.0)), Vec2::new(300.0, 200.0));
    }

    #[test]
    fn test_clamp_point_offset_rect() {
        let rect = Rect::new(10.0, 5.0, 20.0, 20.0);
        assert_eq!(rect.clamp_point(Vec2::ZERO), Vec2::new(10.0, 5.0));
        assert_eq!(rect.clamp_point(Vec2::new(50.0, 50.0)), Vec2::new(30.0, 25.0));
    }
}

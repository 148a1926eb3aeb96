//! Read-only state broadcast to chart elements.

use glam::Vec2;
use panplot_core::geometry::Size;
use std::sync::Arc;

use crate::domain::DrawableArea;
use crate::scale::{scale_pixel_to_domain, scale_point_to_dimensions};
use crate::types::{DataPoint, TouchEvent, ViewPort, ViewportDomain, XYDomain};

/// Everything an element needs to draw itself.
///
/// A plain value: two contexts built from equal inputs compare equal, which
/// is what lets the chart skip redraws when nothing moved.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartContext {
    /// Series data, shared with the props.
    pub data: Arc<[DataPoint]>,
    /// Drawable area, `None` before the first layout.
    pub dimensions: Option<DrawableArea>,
    /// Full data domain.
    pub domain: XYDomain,
    /// Visible window of the domain.
    pub viewport_domain: ViewportDomain,
    /// Pixel position of the viewport's top-left data corner.
    pub viewport_origin: Vec2,
    pub viewport: ViewPort,
    /// Most recent tap or pan, in drawable pixels.
    pub last_touch: Option<TouchEvent>,
}

impl ChartContext {
    /// Drawable size, zero while unmeasured.
    pub fn drawable_size(&self) -> Size<f32> {
        self.dimensions.map(|d| d.size).unwrap_or(Size::ZERO)
    }

    /// Map a data point into drawable pixels through the visible window.
    pub fn to_pixels(&self, point: DataPoint) -> Vec2 {
        scale_point_to_dimensions(point, &self.viewport_domain, self.drawable_size())
    }

    /// Map a drawable pixel position into data space.
    pub fn to_data(&self, pixel: Vec2) -> DataPoint {
        scale_pixel_to_domain(pixel, &self.viewport_domain, self.drawable_size())
    }

    /// The last interaction position in data space.
    pub fn touch_data_point(&self) -> Option<DataPoint> {
        self.last_touch.map(|touch| self.to_data(touch.position))
    }

    /// Data point whose x is closest to `x`.
    ///
    /// Assumes `data` is ordered by x. Ties go to the earlier point.
    pub fn nearest_point(&self, x: f64) -> Option<DataPoint> {
        if x.is_nan() {
            return None;
        }

        let data = &self.data;
        let idx = data.partition_point(|p| p.x < x);
        let after = data.get(idx);
        let before = idx.checked_sub(1).and_then(|i| data.get(i));

        match (before, after) {
            (Some(b), Some(a)) => Some(if (x - b.x).abs() <= (a.x - x).abs() { *b } else { *a }),
            (Some(only), None) | (None, Some(only)) => Some(*only),
            (None, None) => None,
        }
    }

    /// Data point nearest to the last interaction, if any.
    pub fn touched_point(&self) -> Option<DataPoint> {
        self.touch_data_point().and_then(|p| self.nearest_point(p.x))
    }
}

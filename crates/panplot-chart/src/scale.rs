//! Data-space ↔ pixel-space mapping.
//!
//! Pixel y grows downward while data y grows upward, so the vertical axis is
//! inverted. An axis whose domain has zero span maps everything to `0.0`
//! instead of producing NaN.

use crate::types::{DataPoint, XYDomain};
use glam::Vec2;
use panplot_core::geometry::Size;

#[inline]
fn normalized(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span == 0.0 { 0.0 } else { (value - min) / span }
}

/// Map a data point into pixel coordinates of a `dimensions`-sized area.
pub fn scale_point_to_dimensions(point: DataPoint, domain: &XYDomain, dimensions: Size<f32>) -> Vec2 {
    let x = normalized(point.x, domain.x.min, domain.x.max);
    // Inverted: domain.y.max sits at pixel row 0
    let y = normalized(domain.y.max - point.y, 0.0, domain.y.span());

    Vec2::new(
        (x * dimensions.width as f64) as f32,
        (y * dimensions.height as f64) as f32,
    )
}

/// Map a pixel position back into data space.
///
/// A zero-sized pixel axis maps to the domain minimum (x) or maximum (y),
/// matching where [`scale_point_to_dimensions`] puts pixel `0`.
pub fn scale_pixel_to_domain(pixel: Vec2, domain: &XYDomain, dimensions: Size<f32>) -> DataPoint {
    let nx = normalized(pixel.x as f64, 0.0, dimensions.width as f64);
    let ny = normalized(pixel.y as f64, 0.0, dimensions.height as f64);

    DataPoint::new(
        domain.x.min + nx * domain.x.span(),
        domain.y.max - ny * domain.y.span(),
    )
}

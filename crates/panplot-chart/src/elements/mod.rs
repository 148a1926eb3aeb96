//! Built-in chart elements.
//!
//! [`Line`] and [`Area`] are series; [`Gridlines`] and [`TouchIndicator`]
//! are decorations.

mod area;
mod gridlines;
mod line;
mod touch_indicator;

pub use area::Area;
pub use gridlines::{Gridlines, nice_ticks};
pub use line::Line;
pub use touch_indicator::TouchIndicator;

use crate::context::ChartContext;
use crate::types::DataPoint;
use glam::Vec2;

/// Pixel positions of the points that can reach the visible window.
///
/// Keeps one point on either side of the x window so segments crossing the
/// clip edge are still drawn. Non-finite points are dropped.
pub(crate) fn visible_pixels(ctx: &ChartContext, data: &[DataPoint]) -> Vec<Vec2> {
    let window = ctx.viewport_domain.x;
    let start = data.partition_point(|p| p.x < window.min).saturating_sub(1);
    let end = (data.partition_point(|p| p.x <= window.max) + 1).min(data.len());

    data.get(start..end)
        .unwrap_or_default()
        .iter()
        .filter(|p| p.is_finite())
        .map(|p| ctx.to_pixels(*p))
        .collect()
}

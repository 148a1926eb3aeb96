use glam::Vec2;

use crate::context::ChartContext;
use crate::draw_list::DrawList;
use crate::element::{ChartElement, ElementKind};
use crate::style::{Color, Stroke};
use crate::types::{AxisDomain, DataPoint};

/// "Nice" tick positions (1, 2, 5 x 10^n steps) covering `domain`.
///
/// Returns an empty list for degenerate or non-finite domains.
pub fn nice_ticks(domain: AxisDomain, target_count: usize) -> Vec<f64> {
    let range = domain.span();
    if target_count == 0 || !range.is_finite() || range <= 0.0 {
        return Vec::new();
    }

    let rough_interval = range / target_count as f64;
    let magnitude = 10f64.powf(rough_interval.log10().floor());
    let normalized = rough_interval / magnitude;

    let interval = if normalized < 1.5 {
        magnitude
    } else if normalized < 3.0 {
        2.0 * magnitude
    } else if normalized < 7.0 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    };

    let first = (domain.min / interval).ceil();
    let last = (domain.max / interval).floor();
    // Tick indices past i64 would saturate into a single bogus tick
    let limit = i64::MAX as f64;
    if !(first > -limit && last < limit) {
        tracing::trace!(?domain, interval, "tick indices out of range, skipping gridlines");
        return Vec::new();
    }
    (first as i64..=last as i64).map(|i| i as f64 * interval).collect()
}

/// Horizontal and vertical gridlines following the visible window.
#[derive(Debug, Clone)]
pub struct Gridlines {
    stroke: Stroke,
    x_ticks: usize,
    y_ticks: usize,
}

impl Default for Gridlines {
    fn default() -> Self {
        Self {
            stroke: Stroke::new(Color::GRID_GRAY, 1.0),
            x_ticks: 5,
            y_ticks: 5,
        }
    }
}

impl Gridlines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }

    /// Target number of lines per axis. `0` hides that axis.
    pub fn with_tick_counts(mut self, x: usize, y: usize) -> Self {
        self.x_ticks = x;
        self.y_ticks = y;
        self
    }
}

impl ChartElement for Gridlines {
    fn kind(&self) -> ElementKind {
        ElementKind::Decoration
    }

    fn draw(&self, ctx: &ChartContext, out: &mut DrawList) {
        let size = ctx.drawable_size();
        let window = ctx.viewport_domain;

        for x in nice_ticks(window.x, self.x_ticks) {
            let px = ctx.to_pixels(DataPoint::new(x, window.y.min)).x;
            out.line(Vec2::new(px, 0.0), Vec2::new(px, size.height), self.stroke);
        }
        for y in nice_ticks(window.y, self.y_ticks) {
            let py = ctx.to_pixels(DataPoint::new(window.x.min, y)).y;
            out.line(Vec2::new(0.0, py), Vec2::new(size.width, py), self.stroke);
        }
    }

    fn debug_name(&self) -> &str {
        "Gridlines"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_ticks_unit_range() {
        assert_eq!(
            nice_ticks(AxisDomain::new(0.0, 10.0), 5),
            vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]
        );
    }

    #[test]
    fn test_nice_ticks_offset_window() {
        assert_eq!(
            nice_ticks(AxisDomain::new(33.0, 43.0), 5),
            vec![34.0, 36.0, 38.0, 40.0, 42.0]
        );
    }

    #[test]
    fn test_nice_ticks_degenerate() {
        assert!(nice_ticks(AxisDomain::new(5.0, 5.0), 5).is_empty());
        assert!(nice_ticks(AxisDomain::new(0.0, 10.0), 0).is_empty());
    }

    #[test]
    fn test_nice_ticks_far_from_zero() {
        // Intervals of 0.05 around 1e20 give indices beyond i64
        assert!(nice_ticks(AxisDomain::new(1e20, 1e20 + 65536.0), 1_000_000).is_empty());
        assert!(nice_ticks(AxisDomain::new(-1e20 - 65536.0, -1e20), 1_000_000).is_empty());
    }
}

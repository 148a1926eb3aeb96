use std::sync::Arc;

use glam::Vec2;

use super::visible_pixels;
use crate::context::ChartContext;
use crate::draw_list::DrawList;
use crate::element::{ChartElement, ElementKind};
use crate::style::{Color, Stroke};
use crate::types::DataPoint;

/// Filled area between the series and a horizontal baseline.
#[derive(Debug, Clone)]
pub struct Area {
    data: Option<Arc<[DataPoint]>>,
    fill: Color,
    /// Outline along the top edge.
    stroke: Option<Stroke>,
    /// Data-space y of the baseline. Defaults to the bottom of the window.
    baseline: Option<f64>,
}

impl Default for Area {
    fn default() -> Self {
        Self {
            data: None,
            fill: Color::SERIES_BLUE.with_alpha(0.3),
            stroke: None,
            baseline: None,
        }
    }
}

impl Area {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(mut self, data: impl Into<Arc<[DataPoint]>>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn with_baseline(mut self, y: f64) -> Self {
        self.baseline = Some(y);
        self
    }
}

impl ChartElement for Area {
    fn kind(&self) -> ElementKind {
        ElementKind::Series
    }

    fn draw(&self, ctx: &ChartContext, out: &mut DrawList) {
        let data = self.data.as_deref().unwrap_or(&ctx.data[..]);
        let top = visible_pixels(ctx, data);
        let (Some(first), Some(last)) = (top.first().copied(), top.last().copied()) else {
            return;
        };

        let base_y = match self.baseline {
            Some(y) => ctx.to_pixels(DataPoint::new(ctx.viewport_domain.x.min, y)).y,
            None => ctx.drawable_size().height,
        };

        let mut polygon = top.clone();
        polygon.push(Vec2::new(last.x, base_y));
        polygon.push(Vec2::new(first.x, base_y));
        out.fill_polygon(polygon, self.fill);

        if let Some(stroke) = self.stroke {
            out.polyline(top, stroke);
        }
    }

    fn debug_name(&self) -> &str {
        "Area"
    }
}

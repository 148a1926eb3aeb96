use std::sync::Arc;

use super::visible_pixels;
use crate::context::ChartContext;
use crate::draw_list::DrawList;
use crate::element::{ChartElement, ElementKind};
use crate::style::{Color, Stroke};
use crate::types::DataPoint;

/// Line series through the chart data.
#[derive(Debug, Clone, Default)]
pub struct Line {
    /// Replaces the chart data for this series only.
    data: Option<Arc<[DataPoint]>>,
    stroke: Stroke,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(mut self, data: impl Into<Arc<[DataPoint]>>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.stroke.color = color;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.stroke.width = width;
        self
    }
}

impl ChartElement for Line {
    fn kind(&self) -> ElementKind {
        ElementKind::Series
    }

    fn draw(&self, ctx: &ChartContext, out: &mut DrawList) {
        let data = self.data.as_deref().unwrap_or(&ctx.data[..]);
        out.polyline(visible_pixels(ctx, data), self.stroke);
    }

    fn debug_name(&self) -> &str {
        "Line"
    }
}

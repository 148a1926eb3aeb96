use glam::Vec2;

use crate::context::ChartContext;
use crate::draw_list::DrawList;
use crate::element::{ChartElement, ElementKind};
use crate::style::{Color, Stroke};

/// Marks the data point nearest to the last tap or pan.
///
/// Draws a vertical guide through the point and a dot on it. Without data
/// the guide follows the raw touch position.
#[derive(Debug, Clone)]
pub struct TouchIndicator {
    guide: Stroke,
    dot: Color,
    radius: f32,
}

impl Default for TouchIndicator {
    fn default() -> Self {
        Self {
            guide: Stroke::new(Color::BLACK.with_alpha(0.5), 1.0),
            dot: Color::SERIES_BLUE,
            radius: 4.0,
        }
    }
}

impl TouchIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_guide(mut self, guide: Stroke) -> Self {
        self.guide = guide;
        self
    }

    pub fn with_dot(mut self, color: Color, radius: f32) -> Self {
        self.dot = color;
        self.radius = radius;
        self
    }
}

impl ChartElement for TouchIndicator {
    fn kind(&self) -> ElementKind {
        ElementKind::Decoration
    }

    fn draw(&self, ctx: &ChartContext, out: &mut DrawList) {
        let Some(touch) = ctx.last_touch else {
            return;
        };
        let height = ctx.drawable_size().height;

        match ctx.touched_point() {
            Some(point) => {
                let pixel = ctx.to_pixels(point);
                out.line(Vec2::new(pixel.x, 0.0), Vec2::new(pixel.x, height), self.guide);
                out.circle(pixel, self.radius, self.dot);
            }
            None => {
                let x = touch.position.x;
                out.line(Vec2::new(x, 0.0), Vec2::new(x, height), self.guide);
            }
        }
    }

    fn debug_name(&self) -> &str {
        "TouchIndicator"
    }
}

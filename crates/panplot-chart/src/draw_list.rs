//! Backend-neutral draw commands.
//!
//! Elements append commands; a host renderer replays them in order. Translate
//! and clip scopes are stack-like and must be balanced.

use glam::Vec2;

use crate::rect::Rect;
use crate::style::{Color, Stroke};

/// A single draw operation in the current coordinate space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Offset all following commands until the matching pop.
    PushTranslate(Vec2),
    PopTranslate,
    /// Restrict following commands to a rect until the matching pop.
    PushClip(Rect),
    PopClip,
    /// Connected line segments.
    Polyline { points: Vec<Vec2>, stroke: Stroke },
    /// Closed filled polygon.
    FillPolygon { points: Vec<Vec2>, color: Color },
    /// A single straight segment.
    Line { from: Vec2, to: Vec2, stroke: Stroke },
    /// Filled circle.
    Circle { center: Vec2, radius: f32, color: Color },
}

/// Ordered list of draw commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    translate_depth: usize,
    clip_depth: usize,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        match &command {
            DrawCommand::PushTranslate(_) => self.translate_depth += 1,
            DrawCommand::PopTranslate => {
                self.translate_depth = self.translate_depth.saturating_sub(1)
            }
            DrawCommand::PushClip(_) => self.clip_depth += 1,
            DrawCommand::PopClip => self.clip_depth = self.clip_depth.saturating_sub(1),
            _ => {}
        }
        self.commands.push(command);
    }

    pub fn push_translate(&mut self, offset: Vec2) {
        self.push(DrawCommand::PushTranslate(offset));
    }

    pub fn pop_translate(&mut self) {
        self.push(DrawCommand::PopTranslate);
    }

    pub fn push_clip(&mut self, rect: Rect) {
        self.push(DrawCommand::PushClip(rect));
    }

    pub fn pop_clip(&mut self) {
        self.push(DrawCommand::PopClip);
    }

    /// Add a polyline. Fewer than two points draw nothing and are skipped.
    pub fn polyline(&mut self, points: Vec<Vec2>, stroke: Stroke) {
        if points.len() >= 2 {
            self.push(DrawCommand::Polyline { points, stroke });
        }
    }

    /// Add a filled polygon. Fewer than three points are skipped.
    pub fn fill_polygon(&mut self, points: Vec<Vec2>, color: Color) {
        if points.len() >= 3 {
            self.push(DrawCommand::FillPolygon { points, color });
        }
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.push(DrawCommand::Line { from, to, stroke });
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// True when every push has a matching pop.
    pub fn is_balanced(&self) -> bool {
        self.translate_depth == 0 && self.clip_depth == 0
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.translate_depth = 0;
        self.clip_depth = 0;
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

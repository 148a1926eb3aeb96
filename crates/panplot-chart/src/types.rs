//! Core chart types.

use glam::Vec2;

/// A data point in a chart.
///
/// Also used for data-space coordinates such as the viewport origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DataPoint {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl DataPoint {
    /// Create a new data point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// The logical data range of one axis.
///
/// `min <= max` is expected. `min == max` is a legal, degenerate domain that
/// every consumer must handle without dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl AxisDomain {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `max - min`.
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True when the domain has no extent.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for AxisDomain {
    fn default() -> Self {
        Self::new(0.0, 10.0)
    }
}

/// A pair of axis domains.
///
/// Used both for the full chart domain and for the visible viewport window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct XYDomain {
    pub x: AxisDomain,
    pub y: AxisDomain,
}

impl XYDomain {
    pub const fn new(x: AxisDomain, y: AxisDomain) -> Self {
        Self { x, y }
    }
}

/// The currently visible sub-range of the full domain.
pub type ViewportDomain = XYDomain;

/// Viewport extent in data units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A movable, fixed-size window into the data domain.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewPort {
    /// Extent of the window in data units. Should be <= the domain span.
    pub size: ViewportSize,
    /// Lower-left data coordinate of the window when the chart is created.
    pub initial_origin: DataPoint,
}

impl ViewPort {
    pub const fn new(size: ViewportSize, initial_origin: DataPoint) -> Self {
        Self {
            size,
            initial_origin,
        }
    }
}

/// Pixel insets between the measured container and the drawable area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    pub const ZERO: Padding = Padding::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn uniform(padding: f32) -> Self {
        Self::new(padding, padding, padding, padding)
    }

    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Offset of the drawable area inside the container.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// What produced a [`TouchEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchKind {
    /// A single tap.
    Tap,
    /// A pan update while dragging.
    Pan,
    /// The final update of a pan gesture.
    PanEnd,
}

/// The most recent interaction, in drawable-area pixel coordinates.
///
/// Replaced on every interaction and never queued.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    /// Pointer position relative to the drawable area, clamped into it.
    pub position: Vec2,
    /// Raw translation since the gesture started (pan events only).
    pub translation: Option<Vec2>,
    pub kind: TouchKind,
}

impl TouchEvent {
    pub fn tap(position: Vec2) -> Self {
        Self {
            position,
            translation: None,
            kind: TouchKind::Tap,
        }
    }

    pub fn pan(position: Vec2, translation: Vec2, ended: bool) -> Self {
        Self {
            position,
            translation: Some(translation),
            kind: if ended {
                TouchKind::PanEnd
            } else {
                TouchKind::Pan
            },
        }
    }
}

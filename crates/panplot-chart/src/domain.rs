//! Drawable-area and domain-window computations.
//!
//! Everything here is a pure function of its inputs. The chart calls these on
//! every relevant change instead of caching derived values by hand.

use crate::types::{AxisDomain, DataPoint, Padding, ViewPort, ViewportDomain, ViewportSize, XYDomain};
use panplot_core::geometry::Size;
use panplot_core::math::clamp_lenient;

/// Domain used for an axis when there is no data and no explicit domain.
pub const EMPTY_DOMAIN: AxisDomain = AxisDomain::new(0.0, 10.0);

/// The area children draw into: container size minus padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawableArea {
    pub size: Size<f32>,
    /// Set when the padding exceeded the container on at least one axis and
    /// the size had to be clamped to zero.
    pub degenerate: bool,
}

impl DrawableArea {
    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }
}

/// Compute the drawable area from the measured container size.
///
/// Returns `None` until the container has been measured. A measured
/// `0 x 0` container is a valid (degenerate only if padded) result.
pub fn compute_drawable_dimensions(
    container: Option<Size<f32>>,
    padding: &Padding,
) -> Option<DrawableArea> {
    let container = container?;
    let raw_width = container.width - padding.horizontal();
    let raw_height = container.height - padding.vertical();

    Some(DrawableArea {
        size: Size::new(raw_width.max(0.0), raw_height.max(0.0)),
        degenerate: raw_width < 0.0 || raw_height < 0.0,
    })
}

/// Clamp a viewport origin so `[origin, origin + size]` stays inside `domain`.
///
/// When the viewport is larger than the domain the bounds conflict and the
/// domain minimum wins. Applying the clamp twice gives the same result.
#[inline]
pub fn clamp_origin(value: f64, domain: &AxisDomain, size: f64) -> f64 {
    clamp_lenient(value, domain.min, domain.max - size)
}

fn window(origin: f64, size: f64, domain: &AxisDomain) -> AxisDomain {
    let min = clamp_origin(origin, domain, size);
    AxisDomain::new(min, (min + size).min(domain.max).max(min))
}

/// Compute the visible window for the given pan offsets.
///
/// The window keeps `viewport.size` exactly whenever it fits in the domain;
/// clamping moves the origin rather than shrinking the window.
pub fn compute_viewport_domain(
    viewport: &ViewPort,
    full_domain: &XYDomain,
    pan_x: f64,
    pan_y: f64,
) -> ViewportDomain {
    ViewportDomain {
        x: window(pan_x, viewport.size.width, &full_domain.x),
        y: window(pan_y, viewport.size.height, &full_domain.y),
    }
}

/// Clamp both axes of an origin into the pannable range.
pub fn clamp_viewport_origin(origin: DataPoint, viewport: &ViewPort, domain: &XYDomain) -> DataPoint {
    DataPoint::new(
        clamp_origin(origin.x, &domain.x, viewport.size.width),
        clamp_origin(origin.y, &domain.y, viewport.size.height),
    )
}

/// Min/max of the data on one axis, or [`EMPTY_DOMAIN`] without data.
fn axis_bounds(data: &[DataPoint], value: impl Fn(&DataPoint) -> f64) -> AxisDomain {
    let mut values = data.iter().map(value).filter(|v| !v.is_nan());
    let Some(first) = values.next() else {
        return EMPTY_DOMAIN;
    };

    let (min, max) = values.fold((first, first), |(min, max), v| (min.min(v), max.max(v)));
    AxisDomain::new(min, max)
}

/// Default horizontal domain: the x extent of the data.
pub fn default_x_domain(data: &[DataPoint]) -> AxisDomain {
    axis_bounds(data, |p| p.x)
}

/// Default vertical domain: the y extent of the data.
pub fn default_y_domain(data: &[DataPoint]) -> AxisDomain {
    axis_bounds(data, |p| p.y)
}

/// Default viewport: the whole domain, anchored at its minimum.
pub fn default_viewport(domain: &XYDomain) -> ViewPort {
    ViewPort::new(
        ViewportSize::new(domain.x.span().abs(), domain.y.span().abs()),
        DataPoint::new(domain.x.min, domain.y.min),
    )
}

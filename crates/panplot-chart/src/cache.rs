//! Context memoisation.
//!
//! The context is a pure function of [`ContextInputs`]. The cache holds the
//! last inputs and recomputes only when the new ones differ structurally.

use panplot_core::profiling::profile_function;
use std::sync::Arc;

use crate::context::ChartContext;
use crate::domain::{DrawableArea, compute_viewport_domain};
use crate::scale::scale_point_to_dimensions;
use crate::types::{DataPoint, TouchEvent, ViewPort, XYDomain};

bitflags::bitflags! {
    /// Which context inputs changed since the previous computation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ContextChanges: u8 {
        /// Series data replaced.
        const DATA = 0b0000_0001;
        /// Full domain changed.
        const DOMAIN = 0b0000_0010;
        /// Viewport size or initial origin changed.
        const VIEWPORT = 0b0000_0100;
        /// Container measured or resized.
        const DIMENSIONS = 0b0000_1000;
        /// Pan origin moved.
        const PAN = 0b0001_0000;
        /// A new tap or pan was published.
        const TOUCH = 0b0010_0000;
    }
}

impl ContextChanges {
    /// Changes that move pixels and need the series redrawn.
    pub fn needs_redraw(&self) -> bool {
        self.intersects(Self::DATA | Self::DOMAIN | Self::VIEWPORT | Self::DIMENSIONS | Self::PAN)
    }

    /// Only the touch marker moved.
    pub fn is_touch_only(&self) -> bool {
        *self == Self::TOUCH
    }
}

/// The values a [`ChartContext`] is derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextInputs {
    pub data: Arc<[DataPoint]>,
    pub domain: XYDomain,
    pub viewport: ViewPort,
    pub drawable: Option<DrawableArea>,
    pub pan: DataPoint,
    pub last_touch: Option<TouchEvent>,
}

impl ContextInputs {
    /// Per-field comparison against a previous set of inputs.
    pub fn diff(&self, previous: &ContextInputs) -> ContextChanges {
        let mut changes = ContextChanges::empty();
        changes.set(
            ContextChanges::DATA,
            !Arc::ptr_eq(&self.data, &previous.data) && self.data != previous.data,
        );
        changes.set(ContextChanges::DOMAIN, self.domain != previous.domain);
        changes.set(ContextChanges::VIEWPORT, self.viewport != previous.viewport);
        changes.set(ContextChanges::DIMENSIONS, self.drawable != previous.drawable);
        changes.set(ContextChanges::PAN, self.pan != previous.pan);
        changes.set(ContextChanges::TOUCH, self.last_touch != previous.last_touch);
        changes
    }

    /// Derive the context.
    pub fn compute(&self) -> ChartContext {
        profile_function!();

        let viewport_domain =
            compute_viewport_domain(&self.viewport, &self.domain, self.pan.x, self.pan.y);
        let size = self.drawable.map(|d| d.size).unwrap_or_default();
        let viewport_origin = scale_point_to_dimensions(
            DataPoint::new(viewport_domain.x.min, viewport_domain.y.max),
            &viewport_domain,
            size,
        );

        ChartContext {
            data: Arc::clone(&self.data),
            dimensions: self.drawable,
            domain: self.domain,
            viewport_domain,
            viewport_origin,
            viewport: self.viewport,
            last_touch: self.last_touch,
        }
    }
}

/// Last inputs and the context computed from them.
#[derive(Debug, Default)]
pub struct ContextCache {
    entry: Option<(ContextInputs, ChartContext)>,
    computations: u64,
}

impl ContextCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the cached context up to date with `inputs`.
    ///
    /// Also returns the set of changed inputs; empty means the cached value
    /// was reused untouched. The first call reports every flag.
    pub fn update(&mut self, inputs: ContextInputs) -> (&ChartContext, ContextChanges) {
        let changes = match &self.entry {
            Some((previous, _)) => inputs.diff(previous),
            None => ContextChanges::all(),
        };
        if !changes.is_empty() {
            self.entry = None;
        }

        let computations = &mut self.computations;
        let (_, context) = self.entry.get_or_insert_with(|| {
            *computations += 1;
            tracing::trace!(?changes, computations = *computations, "context recomputed");
            let context = inputs.compute();
            (inputs, context)
        });
        (context, changes)
    }

    pub fn context(&self) -> Option<&ChartContext> {
        self.entry.as_ref().map(|(_, context)| context)
    }

    /// Number of times the context was actually recomputed.
    pub fn computations(&self) -> u64 {
        self.computations
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AxisDomain, ViewportSize};
    use glam::Vec2;
    use panplot_core::geometry::Size;

    fn inputs() -> ContextInputs {
        ContextInputs {
            data: vec![DataPoint::new(0.0, 0.0), DataPoint::new(100.0, 100.0)].into(),
            domain: XYDomain::new(AxisDomain::new(0.0, 100.0), AxisDomain::new(0.0, 100.0)),
            viewport: ViewPort::new(ViewportSize::new(10.0, 10.0), DataPoint::new(0.0, 0.0)),
            drawable: Some(DrawableArea {
                size: Size::new(300.0, 200.0),
                degenerate: false,
            }),
            pan: DataPoint::new(30.0, 40.0),
            last_touch: None,
        }
    }

    #[test]
    fn test_compute_window_and_origin() {
        let ctx = inputs().compute();
        assert_eq!(ctx.viewport_domain.x, AxisDomain::new(30.0, 40.0));
        assert_eq!(ctx.viewport_domain.y, AxisDomain::new(40.0, 50.0));
        assert_eq!(ctx.viewport_origin, Vec2::ZERO);
    }

    #[test]
    fn test_equal_inputs_reuse_context() {
        let mut cache = ContextCache::new();
        assert_eq!(cache.update(inputs()).1, ContextChanges::all());
        // Same content, different allocation
        assert!(cache.update(inputs()).1.is_empty());
        assert_eq!(cache.computations(), 1);
    }

    #[test]
    fn test_diff_flags() {
        let base = inputs();
        let mut moved = base.clone();
        moved.pan = DataPoint::new(31.0, 40.0);
        moved.last_touch = Some(TouchEvent::tap(Vec2::new(1.0, 1.0)));

        let changes = moved.diff(&base);
        assert_eq!(changes, ContextChanges::PAN | ContextChanges::TOUCH);
        assert!(changes.needs_redraw());

        let mut touched = base.clone();
        touched.last_touch = Some(TouchEvent::tap(Vec2::ZERO));
        assert!(touched.diff(&base).is_touch_only());
    }

    #[test]
    fn test_invalidate_forces_recompute() {
        let mut cache = ContextCache::new();
        cache.update(inputs());
        cache.invalidate();
        assert!(cache.context().is_none());
        assert!(!cache.update(inputs()).1.is_empty());
        assert_eq!(cache.computations(), 2);
    }
}

//! Pan state and gesture interpretation.
//!
//! The controller is the single owner of the viewport origin. Pixels come in
//! through tap and pan gestures; data-space origins come out through
//! [`ViewportController::pan_origin`].

use glam::{DVec2, Vec2};
use panplot_core::geometry::Size;
use panplot_core::profiling::profile_function;
use std::time::Duration;

use crate::debounce::{TapCoalescer, TapDecision};
use crate::domain::{DrawableArea, clamp_viewport_origin};
use crate::rect::Rect;
use crate::types::{DataPoint, Padding, TouchEvent, ViewPort, XYDomain};

/// Layout and domain inputs a gesture is interpreted against.
#[derive(Debug, Clone, Copy)]
pub struct GestureFrame<'a> {
    pub padding: &'a Padding,
    pub viewport: &'a ViewPort,
    pub domain: &'a XYDomain,
    pub drawable: &'a DrawableArea,
}

impl GestureFrame<'_> {
    /// Container pixels to drawable pixels, clamped onto the drawable area.
    pub fn to_drawable(&self, raw: Vec2) -> Vec2 {
        Rect::from_size(self.drawable.size).clamp_point(raw - self.padding.offset())
    }

    /// Data units per pixel on each axis. Zero on a zero-sized axis.
    pub fn pan_factor(&self) -> DVec2 {
        let per_axis = |extent: f64, pixels: f32| {
            if pixels > 0.0 {
                extent / pixels as f64
            } else {
                0.0
            }
        };
        DVec2::new(
            per_axis(self.viewport.size.width, self.drawable.width()),
            per_axis(self.viewport.size.height, self.drawable.height()),
        )
    }
}

/// Owns the live pan origin, the committed anchor and the last interaction.
#[derive(Debug, Clone)]
pub struct ViewportController {
    /// Live origin, moves during a drag.
    pan: DataPoint,
    /// Origin committed at the end of the last drag.
    anchor: DataPoint,
    last_touch: Option<TouchEvent>,
    taps: TapCoalescer,
    panning: bool,
}

impl ViewportController {
    pub fn new(initial_origin: DataPoint, tap_cooldown: Duration) -> Self {
        Self {
            pan: initial_origin,
            anchor: initial_origin,
            last_touch: None,
            taps: TapCoalescer::new(tap_cooldown),
            panning: false,
        }
    }

    pub fn pan_origin(&self) -> DataPoint {
        self.pan
    }

    pub fn anchor(&self) -> DataPoint {
        self.anchor
    }

    pub fn last_touch(&self) -> Option<TouchEvent> {
        self.last_touch
    }

    pub fn is_panning(&self) -> bool {
        self.panning
    }

    /// Replace the tap cooldown. Any open window is dropped.
    pub fn set_tap_cooldown(&mut self, cooldown: Duration) {
        if self.taps.cooldown() != cooldown {
            self.taps = TapCoalescer::new(cooldown);
        }
    }

    /// Scope tap coalescing to the current drawable size.
    pub fn on_drawable_changed(&mut self, drawable: Option<Size<f32>>) {
        self.taps.rekey(drawable);
    }

    /// Interpret a tap at raw container coordinates.
    ///
    /// Returns the published event, or `None` when the tap fell inside the
    /// cooldown window. Pan state is never touched.
    pub fn handle_tap(&mut self, raw: Vec2, time: Duration, frame: &GestureFrame<'_>) -> Option<TouchEvent> {
        profile_function!();

        if self.taps.offer(time) == TapDecision::Suppress {
            tracing::trace!(?raw, ?time, "tap suppressed by cooldown");
            return None;
        }

        let event = TouchEvent::tap(frame.to_drawable(raw));
        tracing::debug!(position = ?event.position, "tap");
        self.last_touch = Some(event);
        Some(event)
    }

    /// Interpret a pan update. `translation` is cumulative since the press.
    ///
    /// The final update clamps the origin into the pannable range and commits
    /// it as the new anchor.
    pub fn handle_pan(
        &mut self,
        raw: Vec2,
        translation: Vec2,
        ended: bool,
        frame: &GestureFrame<'_>,
    ) -> TouchEvent {
        profile_function!();

        let factor = frame.pan_factor();
        let delta = translation.as_dvec2() * factor;
        // Dragging right reveals earlier x, dragging down reveals higher y
        self.pan = DataPoint::new(self.anchor.x - delta.x, self.anchor.y + delta.y);
        self.panning = !ended;

        if ended {
            self.commit(frame);
        } else {
            tracing::trace!(origin = ?self.pan, ?translation, "pan");
        }

        let event = TouchEvent::pan(frame.to_drawable(raw), translation, ended);
        self.last_touch = Some(event);
        event
    }

    fn commit(&mut self, frame: &GestureFrame<'_>) {
        let clamped = clamp_viewport_origin(self.pan, frame.viewport, frame.domain);
        tracing::debug!(from = ?self.pan, to = ?clamped, "pan committed");
        self.pan = clamped;
        self.anchor = clamped;
    }

    /// Jump to `origin` directly. No clamping is applied.
    pub fn set_viewport_origin(&mut self, origin: DataPoint) {
        tracing::debug!(?origin, "viewport origin set");
        self.pan = origin;
        self.anchor = origin;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AxisDomain, ViewportSize};

    const PADDING: Padding = Padding::new(10.0, 5.0, 10.0, 5.0);

    fn viewport() -> ViewPort {
        ViewPort::new(ViewportSize::new(10.0, 10.0), DataPoint::new(0.0, 0.0))
    }

    fn domain() -> XYDomain {
        XYDomain::new(AxisDomain::new(0.0, 100.0), AxisDomain::new(0.0, 100.0))
    }

    fn drawable(width: f32, height: f32) -> DrawableArea {
        DrawableArea {
            size: Size::new(width, height),
            degenerate: false,
        }
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_tap_maps_into_drawable() {
        let (vp, d, area) = (viewport(), domain(), drawable(300.0, 200.0));
        let frame = GestureFrame {
            padding: &PADDING,
            viewport: &vp,
            domain: &d,
            drawable: &area,
        };
        let mut controller = ViewportController::new(vp.initial_origin, ms(300));

        let event = controller.handle_tap(Vec2::new(50.0, 50.0), ms(0), &frame).unwrap();
        assert_eq!(event, TouchEvent::tap(Vec2::new(40.0, 45.0)));
        assert_eq!(controller.pan_origin(), vp.initial_origin);
    }

    #[test]
    fn test_tap_outside_is_clamped() {
        let (vp, d, area) = (viewport(), domain(), drawable(300.0, 200.0));
        let frame = GestureFrame {
            padding: &PADDING,
            viewport: &vp,
            domain: &d,
            drawable: &area,
        };
        let mut controller = ViewportController::new(vp.initial_origin, ms(300));

        let event = controller.handle_tap(Vec2::new(2.0, 400.0), ms(0), &frame).unwrap();
        assert_eq!(event.position, Vec2::new(0.0, 200.0));
    }

    #[test]
    fn test_pan_moves_against_drag() {
        let (vp, d, area) = (viewport(), domain(), drawable(100.0, 100.0));
        let frame = GestureFrame {
            padding: &Padding::ZERO,
            viewport: &vp,
            domain: &d,
            drawable: &area,
        };
        let mut controller = ViewportController::new(DataPoint::new(50.0, 50.0), ms(300));

        // 0.1 data units per pixel
        controller.handle_pan(Vec2::new(60.0, 60.0), Vec2::new(20.0, 30.0), false, &frame);
        assert!(controller.is_panning());
        let origin = controller.pan_origin();
        assert!((origin.x - 48.0).abs() < 1e-9);
        assert!((origin.y - 53.0).abs() < 1e-9);
        // Anchor only moves on commit
        assert_eq!(controller.anchor(), DataPoint::new(50.0, 50.0));
    }

    #[test]
    fn test_pan_end_clamps_and_commits() {
        let (vp, d, area) = (viewport(), domain(), drawable(100.0, 100.0));
        let frame = GestureFrame {
            padding: &Padding::ZERO,
            viewport: &vp,
            domain: &d,
            drawable: &area,
        };

        let mut low = ViewportController::new(DataPoint::new(0.0, 0.0), ms(300));
        // +50px right = -5 data units
        low.handle_pan(Vec2::ZERO, Vec2::new(50.0, 0.0), true, &frame);
        assert_eq!(low.pan_origin().x, 0.0);
        assert_eq!(low.anchor().x, 0.0);

        let mut high = ViewportController::new(DataPoint::new(90.0, 0.0), ms(300));
        high.handle_pan(Vec2::ZERO, Vec2::new(-50.0, 0.0), true, &frame);
        assert_eq!(high.pan_origin().x, 90.0);
        assert_eq!(high.anchor(), high.pan_origin());
        assert!(!high.is_panning());
    }

    #[test]
    fn test_zero_sized_drawable_does_not_pan() {
        let (vp, d, area) = (viewport(), domain(), drawable(0.0, 0.0));
        let frame = GestureFrame {
            padding: &Padding::ZERO,
            viewport: &vp,
            domain: &d,
            drawable: &area,
        };
        let mut controller = ViewportController::new(DataPoint::new(20.0, 20.0), ms(300));
        controller.handle_pan(Vec2::ZERO, Vec2::new(80.0, -80.0), false, &frame);
        assert_eq!(controller.pan_origin(), DataPoint::new(20.0, 20.0));
    }

    #[test]
    fn test_set_origin_skips_clamp() {
        let mut controller = ViewportController::new(DataPoint::new(0.0, 0.0), ms(300));
        controller.set_viewport_origin(DataPoint::new(-40.0, 500.0));
        assert_eq!(controller.pan_origin(), DataPoint::new(-40.0, 500.0));
        assert_eq!(controller.anchor(), DataPoint::new(-40.0, 500.0));
    }

    #[test]
    fn test_cooldown_resets_on_resize() {
        let (vp, d, area) = (viewport(), domain(), drawable(300.0, 200.0));
        let frame = GestureFrame {
            padding: &Padding::ZERO,
            viewport: &vp,
            domain: &d,
            drawable: &area,
        };
        let mut controller = ViewportController::new(vp.initial_origin, ms(300));
        controller.on_drawable_changed(Some(area.size));
        assert!(controller.handle_tap(Vec2::ZERO, ms(0), &frame).is_some());
        assert!(controller.handle_tap(Vec2::ZERO, ms(10), &frame).is_none());

        controller.on_drawable_changed(Some(Size::new(301.0, 200.0)));
        assert!(controller.handle_tap(Vec2::ZERO, ms(20), &frame).is_some());
    }
}

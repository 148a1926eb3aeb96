//! The chart composition root.
//!
//! [`Chart`] ties the pieces together: it resolves props into domains, tracks
//! the container size, routes pointer events through the recogniser into the
//! controller, keeps the context cache current and emits the element draw
//! order with padding and clipping applied.

use std::sync::Arc;

use panplot_core::profiling::profile_function;

use crate::cache::{ContextCache, ContextChanges, ContextInputs};
use crate::context::ChartContext;
use crate::controller::{GestureFrame, ViewportController};
use crate::dimensions::DimensionObserver;
use crate::domain::{DrawableArea, compute_drawable_dimensions};
use crate::draw_list::DrawList;
use crate::element::{ChartElement, ElementKind};
use crate::gesture::{Gesture, GestureRecognizer, PointerEvent};
use crate::handle::{HandleMailbox, ViewportHandle};
use crate::props::{ChartProps, ResolvedProps};
use crate::rect::Rect;
use crate::types::{DataPoint, TouchEvent};

/// An interactive, pannable chart.
pub struct Chart {
    props: ChartProps,
    resolved: ResolvedProps,
    observer: DimensionObserver,
    drawable: Option<DrawableArea>,
    recognizer: GestureRecognizer,
    controller: ViewportController,
    cache: ContextCache,
    mailbox: Arc<HandleMailbox>,
    elements: Vec<Box<dyn ChartElement>>,
}

impl std::fmt::Debug for Chart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chart")
            .field("resolved", &self.resolved)
            .field("drawable", &self.drawable)
            .field("pan", &self.controller.pan_origin())
            .field("elements", &self.elements)
            .finish()
    }
}

impl Chart {
    /// Create a chart. The initial pan origin is the viewport's initial origin.
    pub fn new(props: ChartProps) -> Self {
        let resolved = props.resolve();
        let mut recognizer = GestureRecognizer::new(props.gesture);
        recognizer.set_enabled(!props.disable_touch, !props.disable_gestures);
        let controller =
            ViewportController::new(resolved.viewport.initial_origin, props.gesture.tap_cooldown);

        tracing::debug!(
            points = resolved.data.len(),
            domain = ?resolved.domain,
            viewport = ?resolved.viewport,
            "chart created"
        );

        Self {
            props,
            resolved,
            observer: DimensionObserver::new(),
            drawable: None,
            recognizer,
            controller,
            cache: ContextCache::new(),
            mailbox: HandleMailbox::new(),
            elements: Vec::new(),
        }
    }

    pub fn props(&self) -> &ChartProps {
        &self.props
    }

    /// Props with defaults applied.
    pub fn resolved(&self) -> &ResolvedProps {
        &self.resolved
    }

    /// Replace the props. Returns `false` when they are structurally equal to
    /// the current ones and nothing was done.
    ///
    /// Pan state survives a props change; only a new padding or gesture
    /// config touches the gesture machinery.
    pub fn set_props(&mut self, props: ChartProps) -> bool {
        if props == self.props {
            return false;
        }

        self.resolved = props.resolve();
        if props.gesture != self.props.gesture {
            self.recognizer.set_config(props.gesture);
            self.controller.set_tap_cooldown(props.gesture.tap_cooldown);
        }
        self.recognizer
            .set_enabled(!props.disable_touch, !props.disable_gestures);
        let padding_changed = props.padding != self.props.padding;
        self.props = props;

        if padding_changed {
            self.update_drawable();
        }
        tracing::debug!(domain = ?self.resolved.domain, "props updated");
        true
    }

    /// Add a child element. Draw order within a kind follows insertion order.
    pub fn add_element(&mut self, element: impl ChartElement + 'static) {
        self.add_boxed(Box::new(element));
    }

    pub fn add_boxed(&mut self, element: Box<dyn ChartElement>) {
        tracing::trace!(name = element.debug_name(), kind = ?element.kind(), "element added");
        self.elements.push(element);
    }

    pub fn with_element(mut self, element: impl ChartElement + 'static) -> Self {
        self.add_element(element);
        self
    }

    pub fn elements(&self) -> &[Box<dyn ChartElement>] {
        &self.elements
    }

    /// Layout callback from the host with the container's pixel size.
    ///
    /// Returns `true` when the measured size changed.
    pub fn on_layout(&mut self, width: f32, height: f32) -> bool {
        if !self.observer.on_layout(width, height) {
            return false;
        }
        self.mailbox.set_measured(true);
        self.update_drawable();
        true
    }

    fn update_drawable(&mut self) {
        let drawable = compute_drawable_dimensions(self.observer.dimensions(), &self.props.padding);
        if let Some(area) = drawable.filter(|a| a.degenerate) {
            tracing::warn!(
                size = ?area.size,
                padding = ?self.props.padding,
                "padding exceeds the container, drawable area clamped"
            );
        }

        if drawable != self.drawable {
            self.controller.on_drawable_changed(drawable.map(|a| a.size));
            self.drawable = drawable;
        }
    }

    /// Drawable area, `None` before the first layout.
    pub fn drawable(&self) -> Option<DrawableArea> {
        self.drawable
    }

    pub fn is_measured(&self) -> bool {
        self.observer.is_measured()
    }

    /// Handle for repositioning the viewport from outside the gesture path.
    pub fn handle(&self) -> ViewportHandle {
        ViewportHandle::new(&self.mailbox)
    }

    /// Move the viewport origin directly. No-op before the first layout.
    pub fn set_viewport_origin(&mut self, origin: DataPoint) -> bool {
        if !self.is_measured() {
            tracing::debug!(?origin, "ignoring viewport origin before first layout");
            return false;
        }
        // A handle request made before this call is older and must not win
        self.mailbox.take();
        self.controller.set_viewport_origin(origin);
        true
    }

    /// Current pan origin in data coordinates.
    pub fn pan_origin(&mut self) -> DataPoint {
        self.apply_pending_origin();
        self.controller.pan_origin()
    }

    pub fn is_panning(&self) -> bool {
        self.controller.is_panning()
    }

    fn apply_pending_origin(&mut self) {
        if let Some(origin) = self.mailbox.take() {
            self.controller.set_viewport_origin(origin);
        }
    }

    /// Feed a raw pointer event in container pixels.
    ///
    /// Returns the touch event published by the resulting gesture, if any.
    /// Events before the first layout are dropped.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<TouchEvent> {
        profile_function!();

        self.apply_pending_origin();
        let Some(drawable) = self.drawable else {
            tracing::trace!(?event, "pointer event before layout ignored");
            return None;
        };

        let gesture = self.recognizer.handle(event)?;
        let frame = GestureFrame {
            padding: &self.props.padding,
            viewport: &self.resolved.viewport,
            domain: &self.resolved.domain,
            drawable: &drawable,
        };

        match gesture {
            Gesture::Tap { position, time } => self.controller.handle_tap(position, time, &frame),
            Gesture::Pan {
                position,
                translation,
                ended,
            } => Some(self.controller.handle_pan(position, translation, ended, &frame)),
        }
    }

    fn context_inputs(&self) -> ContextInputs {
        ContextInputs {
            data: Arc::clone(&self.resolved.data),
            domain: self.resolved.domain,
            viewport: self.resolved.viewport,
            drawable: self.drawable,
            pan: self.controller.pan_origin(),
            last_touch: self.controller.last_touch(),
        }
    }

    /// Bring the context up to date and report what changed.
    pub fn update_context(&mut self) -> (&ChartContext, ContextChanges) {
        self.apply_pending_origin();
        let inputs = self.context_inputs();
        self.cache.update(inputs)
    }

    /// The current context.
    pub fn context(&mut self) -> &ChartContext {
        self.update_context().0
    }

    /// How many times the context was recomputed.
    pub fn context_computations(&self) -> u64 {
        self.cache.computations()
    }

    /// Emit the chart's draw commands.
    ///
    /// Returns `false` and emits nothing until the container is measured.
    pub fn render(&mut self, out: &mut DrawList) -> bool {
        profile_function!();

        let Some(drawable) = self.drawable else {
            return false;
        };

        self.apply_pending_origin();
        let inputs = self.context_inputs();
        let (ctx, _) = self.cache.update(inputs);

        out.push_translate(self.props.padding.offset());
        for element in self.elements.iter().filter(|e| e.kind() == ElementKind::Decoration) {
            element.draw(ctx, out);
        }

        out.push_clip(Rect::from_size(drawable.size));
        for element in self.elements.iter().filter(|e| e.kind() == ElementKind::Series) {
            element.draw(ctx, out);
        }
        out.pop_clip();
        out.pop_translate();

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw_list::DrawCommand;
    use crate::elements::{Gridlines, Line};
    use crate::types::{Padding, TouchKind};
    use glam::Vec2;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn ramp() -> Vec<DataPoint> {
        (0..=100).map(|i| DataPoint::new(i as f64, i as f64)).collect()
    }

    #[test]
    fn test_render_waits_for_layout() {
        let mut chart = Chart::new(ChartProps::new(ramp())).with_element(Line::new());
        let mut list = DrawList::new();
        assert!(!chart.render(&mut list));
        assert!(list.is_empty());

        chart.on_layout(300.0, 200.0);
        assert!(chart.render(&mut list));
        assert!(list.is_balanced());
    }

    #[test]
    fn test_render_order() {
        let props = ChartProps {
            padding: Padding::new(10.0, 5.0, 10.0, 5.0),
            ..ChartProps::new(ramp())
        };
        let mut chart = Chart::new(props)
            .with_element(Line::new())
            .with_element(Gridlines::new().with_tick_counts(0, 0));
        chart.on_layout(320.0, 210.0);

        let mut list = DrawList::new();
        chart.render(&mut list);
        let commands = list.commands();
        assert_eq!(commands[0], DrawCommand::PushTranslate(Vec2::new(10.0, 5.0)));
        assert_eq!(commands[1], DrawCommand::PushClip(Rect::new(0.0, 0.0, 300.0, 200.0)));
        assert!(matches!(commands[2], DrawCommand::Polyline { .. }));
        assert_eq!(commands[3], DrawCommand::PopClip);
        assert_eq!(commands[4], DrawCommand::PopTranslate);
    }

    #[test]
    fn test_set_props_short_circuits() {
        let mut chart = Chart::new(ChartProps::new(ramp()));
        assert!(!chart.set_props(ChartProps::new(ramp())));
        assert!(chart.set_props(ChartProps {
            disable_touch: true,
            ..ChartProps::new(ramp())
        }));
    }

    #[test]
    fn test_context_reused_when_idle() {
        let mut chart = Chart::new(ChartProps::new(ramp()));
        chart.on_layout(300.0, 200.0);
        assert!(!chart.update_context().1.is_empty());
        assert!(chart.update_context().1.is_empty());
        assert_eq!(chart.context_computations(), 1);
    }

    #[test]
    fn test_pointer_before_layout_ignored() {
        let mut chart = Chart::new(ChartProps::default());
        assert_eq!(chart.handle_pointer(PointerEvent::down(Vec2::ZERO, ms(0))), None);
        assert_eq!(chart.handle_pointer(PointerEvent::up(Vec2::ZERO, ms(5))), None);
    }

    #[test]
    fn test_disabled_touch_drops_taps() {
        let props = ChartProps {
            disable_touch: true,
            ..ChartProps::new(ramp())
        };
        let mut chart = Chart::new(props);
        chart.on_layout(300.0, 200.0);
        chart.handle_pointer(PointerEvent::down(Vec2::new(5.0, 5.0), ms(0)));
        assert_eq!(chart.handle_pointer(PointerEvent::up(Vec2::new(5.0, 5.0), ms(5))), None);
        assert_eq!(chart.context().last_touch, None);
    }

    #[test]
    fn test_tap_published_into_context() {
        let mut chart = Chart::new(ChartProps::new(ramp()));
        chart.on_layout(300.0, 200.0);
        chart.handle_pointer(PointerEvent::down(Vec2::new(30.0, 40.0), ms(0)));
        let event = chart.handle_pointer(PointerEvent::up(Vec2::new(30.0, 40.0), ms(5)));
        assert_eq!(event.map(|e| e.kind), Some(TouchKind::Tap));
        assert_eq!(
            chart.context().last_touch.map(|t| t.position),
            Some(Vec2::new(30.0, 40.0))
        );
    }
}

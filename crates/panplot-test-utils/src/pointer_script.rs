//! Scripted pointer input.

use std::time::Duration;

use glam::Vec2;
use panplot_chart::{Chart, PointerEvent, TouchEvent};

/// A timed sequence of raw pointer events.
///
/// The script keeps its own clock. Each helper advances it, so consecutive
/// gestures are spaced by `step` unless [`PointerScript::wait`] says
/// otherwise.
#[derive(Debug, Clone)]
pub struct PointerScript {
    events: Vec<PointerEvent>,
    now: Duration,
    step: Duration,
}

impl Default for PointerScript {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerScript {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            now: Duration::ZERO,
            step: Duration::from_millis(16),
        }
    }

    /// Start the clock at `time`.
    pub fn starting_at(mut self, time: Duration) -> Self {
        self.now = time;
        self
    }

    /// Time between samples inside a gesture.
    pub fn with_step(mut self, step: Duration) -> Self {
        self.step = step;
        self
    }

    /// Advance the clock without emitting anything.
    pub fn wait(mut self, duration: Duration) -> Self {
        self.now += duration;
        self
    }

    fn push(&mut self, make: fn(Vec2, Duration) -> PointerEvent, position: Vec2) {
        self.events.push(make(position, self.now));
    }

    /// Press and release in place. Down and up share a timestamp.
    pub fn tap_at(mut self, x: f32, y: f32) -> Self {
        let position = Vec2::new(x, y);
        self.push(PointerEvent::down, position);
        self.push(PointerEvent::up, position);
        self.now += self.step;
        self
    }

    /// `count` taps at the same spot, `interval` apart.
    pub fn taps_at(mut self, x: f32, y: f32, count: usize, interval: Duration) -> Self {
        let position = Vec2::new(x, y);
        for _ in 0..count {
            self.push(PointerEvent::down, position);
            self.push(PointerEvent::up, position);
            self.now += interval;
        }
        self
    }

    /// Press at `from`, move to `to` in `steps` samples, then release.
    pub fn drag(self, from: Vec2, to: Vec2, steps: usize) -> Self {
        self.drag_inner(from, to, steps, PointerEvent::up)
    }

    /// Like [`PointerScript::drag`] but the host cancels instead of releasing.
    pub fn drag_cancelled(self, from: Vec2, to: Vec2, steps: usize) -> Self {
        self.drag_inner(from, to, steps, PointerEvent::cancel)
    }

    fn drag_inner(
        mut self,
        from: Vec2,
        to: Vec2,
        steps: usize,
        finish: fn(Vec2, Duration) -> PointerEvent,
    ) -> Self {
        let steps = steps.max(1);
        self.push(PointerEvent::down, from);
        for i in 1..=steps {
            self.now += self.step;
            let t = i as f32 / steps as f32;
            self.push(PointerEvent::moved, from.lerp(to, t));
        }
        self.now += self.step;
        self.push(finish, to);
        self.now += self.step;
        self
    }

    /// Press without releasing, moving through `to`.
    pub fn hold_and_move(mut self, from: Vec2, to: Vec2, steps: usize) -> Self {
        let steps = steps.max(1);
        self.push(PointerEvent::down, from);
        for i in 1..=steps {
            self.now += self.step;
            let t = i as f32 / steps as f32;
            self.push(PointerEvent::moved, from.lerp(to, t));
        }
        self
    }

    pub fn events(&self) -> &[PointerEvent] {
        &self.events
    }

    /// Current script clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Feed every event to `chart`, returning the published touch events.
    pub fn run(&self, chart: &mut Chart) -> Vec<TouchEvent> {
        self.events
            .iter()
            .filter_map(|event| chart.handle_pointer(*event))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panplot_chart::PointerPhase;

    #[test]
    fn test_tap_shape() {
        let script = PointerScript::new().tap_at(1.0, 2.0).tap_at(3.0, 4.0);
        let phases: Vec<_> = script.events().iter().map(|e| e.phase).collect();
        assert_eq!(
            phases,
            vec![PointerPhase::Down, PointerPhase::Up, PointerPhase::Down, PointerPhase::Up]
        );
        assert_eq!(script.events()[2].time, Duration::from_millis(16));
    }

    #[test]
    fn test_drag_ends_at_target() {
        let script = PointerScript::new().drag(Vec2::ZERO, Vec2::new(40.0, 0.0), 4);
        let last = script.events().last().copied().unwrap();
        assert_eq!(last.phase, PointerPhase::Up);
        assert_eq!(last.position, Vec2::new(40.0, 0.0));
        assert_eq!(script.events().len(), 6);
    }
}

use std::time::{Duration, Instant};

#[cfg(feature = "chart")]
use panplot_chart::{PointerEvent, PointerPhase};
#[cfg(feature = "chart")]
use panplot_core::math::Vec2;

/// Monotonic timestamps for pointer events.
///
/// Charts never read a clock themselves; hosts stamp events with the time
/// elapsed since the clock was created.
///
/// # Example
/// ```ignore
/// let clock = PointerClock::new();
/// chart.handle_pointer(clock.event(PointerPhase::Down, cursor));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PointerClock {
    start: Instant,
}

impl Default for PointerClock {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Time elapsed since the clock was created.
    #[inline]
    pub fn now(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed time of an instant observed by the host, saturating at zero.
    pub fn at(&self, instant: Instant) -> Duration {
        if instant < self.start {
            tracing::trace!(
                behind = ?self.start.duration_since(instant),
                "instant predates pointer clock"
            );
        }
        instant.saturating_duration_since(self.start)
    }

    /// A pointer event stamped with the current time.
    #[cfg(feature = "chart")]
    pub fn event(&self, phase: PointerPhase, position: Vec2) -> PointerEvent {
        PointerEvent::new(phase, position, self.now())
    }

    /// A pointer event stamped with the time of `instant`.
    #[cfg(feature = "chart")]
    pub fn event_at(&self, phase: PointerPhase, position: Vec2, instant: Instant) -> PointerEvent {
        PointerEvent::new(phase, position, self.at(instant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_is_monotonic() {
        let clock = PointerClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn test_instant_before_start_saturates() {
        let earlier = Instant::now();
        let clock = PointerClock::new();
        assert_eq!(clock.at(earlier), Duration::ZERO);
        assert!(clock.at(Instant::now() + Duration::from_millis(5)) >= Duration::from_millis(5));
    }
}

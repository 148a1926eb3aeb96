//! Leading-edge tap coalescing.

use panplot_core::geometry::Size;
use std::time::Duration;

/// Cooldown applied between published taps.
pub const TAP_COOLDOWN: Duration = Duration::from_millis(300);

/// Outcome of offering a tap to the coalescer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapDecision {
    /// First tap after a quiet period; publish it.
    Fire,
    /// Inside the cooldown window; drop it.
    Suppress,
}

/// Explicit cooldown state machine for taps.
///
/// A tap fires only if no tap was seen during the preceding `cooldown`.
/// Every tap, fired or not, restarts the window, so a steady stream of taps
/// faster than the cooldown yields exactly one event. Nothing is buffered:
/// suppressed taps are gone.
///
/// The window is scoped to a key (the drawable dimensions). When the key
/// changes the state resets and the next tap fires immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct TapCoalescer {
    cooldown: Duration,
    /// Timestamp of the most recent tap, fired or suppressed.
    last_seen: Option<Duration>,
    /// Whether a cooldown window is currently open.
    pending: bool,
    key: Option<Size<f32>>,
}

impl Default for TapCoalescer {
    fn default() -> Self {
        Self::new(TAP_COOLDOWN)
    }
}

impl TapCoalescer {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_seen: None,
            pending: false,
            key: None,
        }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Rebind to a new key, resetting the window if it differs.
    pub fn rekey(&mut self, key: Option<Size<f32>>) {
        if self.key != key {
            self.key = key;
            self.reset();
        }
    }

    /// Forget any open window.
    pub fn reset(&mut self) {
        self.last_seen = None;
        self.pending = false;
    }

    /// True while a tap at `now` would be suppressed.
    pub fn is_pending(&self, now: Duration) -> bool {
        match self.last_seen {
            Some(last) if self.pending => now.saturating_sub(last) < self.cooldown,
            _ => false,
        }
    }

    /// Offer a tap observed at `now`.
    pub fn offer(&mut self, now: Duration) -> TapDecision {
        let decision = if self.is_pending(now) {
            TapDecision::Suppress
        } else {
            TapDecision::Fire
        };

        self.last_seen = Some(now);
        self.pending = true;
        decision
    }
}

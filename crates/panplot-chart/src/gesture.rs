//! Raw pointer events to tap / pan gestures.
//!
//! The host forwards pointer phases in container pixel coordinates with a
//! monotonic timestamp. [`GestureRecognizer`] makes tap and pan mutually
//! exclusive for a single press: a press that travels less than the
//! activation distance is a tap, anything further is a pan.

use glam::Vec2;
use std::time::Duration;

use crate::debounce::TAP_COOLDOWN;

/// Default distance a press must travel before it becomes a pan.
pub const PAN_ACTIVATION_DISTANCE: f32 = 10.0;

/// Gesture tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Minimum time between published taps.
    pub tap_cooldown: Duration,
    /// Travel (pixels) after which a press turns into a pan.
    pub pan_activation_distance: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tap_cooldown: TAP_COOLDOWN,
            pan_activation_distance: PAN_ACTIVATION_DISTANCE,
        }
    }
}

/// Pointer lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    /// The host took the pointer away (e.g. a parent scroll view).
    Cancel,
}

/// A raw pointer sample in container pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub position: Vec2,
    /// Monotonic time of the sample.
    pub time: Duration,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, position: Vec2, time: Duration) -> Self {
        Self {
            phase,
            position,
            time,
        }
    }

    pub fn down(position: Vec2, time: Duration) -> Self {
        Self::new(PointerPhase::Down, position, time)
    }

    pub fn moved(position: Vec2, time: Duration) -> Self {
        Self::new(PointerPhase::Move, position, time)
    }

    pub fn up(position: Vec2, time: Duration) -> Self {
        Self::new(PointerPhase::Up, position, time)
    }

    pub fn cancel(position: Vec2, time: Duration) -> Self {
        Self::new(PointerPhase::Cancel, position, time)
    }
}

/// A recognised gesture, positions still in container pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Tap {
        position: Vec2,
        time: Duration,
    },
    Pan {
        position: Vec2,
        /// Cumulative translation since the press.
        translation: Vec2,
        /// Final update (release or cancel).
        ended: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PressState {
    Idle,
    /// Pointer down, still within the activation distance.
    Pressed { start: Vec2 },
    /// Travelled past the activation distance.
    Panning { start: Vec2 },
    /// Travelled too far for a tap while pans are disabled.
    Abandoned,
}

/// Per-press state machine producing at most one kind of gesture.
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    config: GestureConfig,
    state: PressState,
    taps_enabled: bool,
    pans_enabled: bool,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureRecognizer {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            state: PressState::Idle,
            taps_enabled: true,
            pans_enabled: true,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Replace the tuning. The press in flight keeps its state, so an active
    /// pan still ends with a final update.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    /// Toggle the two gesture kinds. A pan already in flight runs to its end.
    pub fn set_enabled(&mut self, taps: bool, pans: bool) {
        self.taps_enabled = taps;
        self.pans_enabled = pans;
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.state, PressState::Panning { .. })
    }

    /// Feed one pointer sample.
    pub fn handle(&mut self, event: PointerEvent) -> Option<Gesture> {
        match (self.state, event.phase) {
            (_, PointerPhase::Down) => {
                self.state = PressState::Pressed {
                    start: event.position,
                };
                None
            }
            (PressState::Pressed { start }, PointerPhase::Move) => {
                let translation = event.position - start;
                if translation.length() < self.config.pan_activation_distance {
                    return None;
                }
                if !self.pans_enabled {
                    self.state = PressState::Abandoned;
                    return None;
                }

                tracing::trace!(?start, "pan activated");
                self.state = PressState::Panning { start };
                Some(Gesture::Pan {
                    position: event.position,
                    translation,
                    ended: false,
                })
            }
            (PressState::Panning { start }, PointerPhase::Move) => Some(Gesture::Pan {
                position: event.position,
                translation: event.position - start,
                ended: false,
            }),
            (PressState::Panning { start }, PointerPhase::Up | PointerPhase::Cancel) => {
                self.state = PressState::Idle;
                Some(Gesture::Pan {
                    position: event.position,
                    translation: event.position - start,
                    ended: true,
                })
            }
            (PressState::Pressed { start }, PointerPhase::Up) => {
                self.state = PressState::Idle;
                let travelled = (event.position - start).length();
                (self.taps_enabled && travelled < self.config.pan_activation_distance).then_some(
                    Gesture::Tap {
                        position: event.position,
                        time: event.time,
                    },
                )
            }
            (_, PointerPhase::Up | PointerPhase::Cancel) => {
                self.state = PressState::Idle;
                None
            }
            (PressState::Idle | PressState::Abandoned, PointerPhase::Move) => None,
        }
    }
}

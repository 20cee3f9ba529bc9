//! Detection engine boundary.
//!
//! A detector turns successive "is pressed" samples into event transitions.
//! Debounce, double-click and long-press rules belong to the detector
//! implementation; the registry only feeds it one sample per poll tick and
//! dispatches whatever it reports.

use crate::event::{ButtonEvent, ButtonState};

/// Per-button detection state machine.
pub trait Detector {
    /// Advance the state machine by one poll tick.
    ///
    /// `pressed` is the sampled level already compared against the button's
    /// trigger level. Returns the transition detected on this tick, if any.
    /// Implementations must never return [`ButtonEvent::NoTrigger`] as a
    /// transition.
    fn tick(&mut self, pressed: bool) -> Option<ButtonEvent>;

    /// Current state of the machine
    fn state(&self) -> ButtonState;

    /// Drop all accumulated timing state
    fn reset(&mut self) {}
}

/// Level-change detector without timing rules.
///
/// Reports [`ButtonEvent::Press`] on every released-to-pressed change and
/// [`ButtonEvent::Release`] on every pressed-to-released change. It does not
/// debounce and never reports clicks or long presses; boards that need those
/// plug in a full detection engine instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetector {
    pressed: bool,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self { pressed: false }
    }
}

impl Detector for EdgeDetector {
    fn tick(&mut self, pressed: bool) -> Option<ButtonEvent> {
        if pressed == self.pressed {
            return None;
        }
        self.pressed = pressed;
        Some(if pressed {
            ButtonEvent::Press
        } else {
            ButtonEvent::Release
        })
    }

    fn state(&self) -> ButtonState {
        if self.pressed {
            ButtonState::Pressed
        } else {
            ButtonState::NoTrigger
        }
    }

    fn reset(&mut self) {
        self.pressed = false;
    }
}

//! Button entity.

use core::cell::{Cell, RefCell};

use critical_section::Mutex;

use crate::detector::Detector;
use crate::dispatcher::Bindings;
use crate::event::{ButtonEvent, ButtonState};
use crate::handler::EventContext;
use crate::level::{Level, LevelSource};

/// Level source and detection engine of one button.
///
/// Only the poll driver touches this.
struct Engine<S, D> {
    source: S,
    detector: D,
    /// Cleared by teardown; a deleted button is no longer polled.
    live: bool,
}

#[derive(Debug, Clone, Copy, Default)]
struct Status {
    state: ButtonState,
    event: ButtonEvent,
}

/// A named button: level source, trigger polarity, detector and bindings.
///
/// Buttons are created by [`ButtonRegistry`](crate::ButtonRegistry) during
/// initialization and are reached through
/// [`lookup`](crate::ButtonRegistry::lookup). Cached state and event are
/// written only by the poll driver.
pub struct Button<'a, S, D> {
    name: &'static str,
    trigger_level: Level,
    engine: Mutex<RefCell<Engine<S, D>>>,
    status: Mutex<Cell<Status>>,
    pub(crate) bindings: Mutex<RefCell<Bindings<'a>>>,
}

impl<'a, S: LevelSource, D: Detector> Button<'a, S, D> {
    pub(crate) fn new(
        name: &'static str,
        trigger_level: Level,
        source: S,
        detector: D,
    ) -> Self {
        Self {
            name,
            trigger_level,
            engine: Mutex::new(RefCell::new(Engine {
                source,
                detector,
                live: true,
            })),
            status: Mutex::new(Cell::new(Status {
                state: ButtonState::NoTrigger,
                event: ButtonEvent::NoTrigger,
            })),
            bindings: Mutex::new(RefCell::new(Bindings::new())),
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Level that counts as "pressed"
    pub const fn trigger_level(&self) -> Level {
        self.trigger_level
    }

    /// Detector state cached by the last poll tick
    pub fn state(&self) -> ButtonState {
        critical_section::with(|cs| self.status.borrow(cs).get().state)
    }

    /// Last event emitted for this button
    pub fn event(&self) -> ButtonEvent {
        critical_section::with(|cs| self.status.borrow(cs).get().event)
    }

    /// Whether the button is still polled (false after teardown)
    pub fn is_live(&self) -> bool {
        critical_section::with(|cs| self.engine.borrow(cs).borrow().live)
    }

    /// Sample the level source once and advance the detector.
    ///
    /// Returns the transition detected on this tick.
    pub(crate) fn sample(&self) -> Option<EventContext> {
        critical_section::with(|cs| {
            let mut engine = self.engine.borrow(cs).borrow_mut();
            if !engine.live {
                return None;
            }
            let pressed = engine.source.read_level() == self.trigger_level;
            let event = engine
                .detector
                .tick(pressed)
                .filter(|event| *event != ButtonEvent::NoTrigger);
            let state = engine.detector.state();

            let status = self.status.borrow(cs);
            let mut cached = status.get();
            cached.state = state;
            if let Some(event) = event {
                cached.event = event;
            }
            status.set(cached);

            event.map(|event| EventContext {
                name: self.name,
                event,
                state,
            })
        })
    }

    /// Release the detector association; idempotent.
    pub(crate) fn delete(&self) {
        critical_section::with(|cs| {
            let mut engine = self.engine.borrow(cs).borrow_mut();
            engine.detector.reset();
            engine.live = false;
            self.status.borrow(cs).set(Status::default());
        });
    }
}

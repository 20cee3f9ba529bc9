//! Event handlers.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::event::{ButtonEvent, ButtonState};

/// What a handler learns about the transition it is called for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventContext {
    /// Name of the button that changed
    pub name: &'static str,
    /// Event detected on this tick
    pub event: ButtonEvent,
    /// Detector state right after the transition
    pub state: ButtonState,
}

/// Receives button transitions.
///
/// Handlers run synchronously inside `poll()`, on the poller's stack. They
/// must not block: every millisecond spent here delays sampling of all other
/// buttons. Every `Fn(&EventContext)` closure is a handler.
pub trait ButtonHandler {
    fn on_event(&self, context: &EventContext);
}

impl<F> ButtonHandler for F
where
    F: Fn(&EventContext),
{
    fn on_event(&self, context: &EventContext) {
        self(context);
    }
}

/// Handler that logs every transition it receives.
///
/// Prints through `esp-println` when the `esp32-log` feature is enabled and
/// does nothing otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventLogger;

/// Shared logger instance, usable with any registry lifetime.
pub static EVENT_LOGGER: EventLogger = EventLogger;

impl ButtonHandler for EventLogger {
    fn on_event(&self, context: &EventContext) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[button] {} {}",
            context.name,
            context.event.describe()
        );
        #[cfg(not(feature = "esp32-log"))]
        let _ = context;
    }
}

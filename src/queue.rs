//! Bounded event queue for deferred handling.
//!
//! Dispatch from `poll()` is always synchronous. When the work triggered by a
//! button is too slow for the poll context, bind an [`EventQueue`] as the
//! handler and drain it from another task or the main loop. The queue is
//! built on `critical-section` and `heapless::Deque`, so it is safe to share
//! between an interrupt-driven poller and a thread-mode consumer.

use core::cell::RefCell;

use critical_section::Mutex;
#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::Deque;

use crate::event::ButtonEvent;
use crate::handler::{ButtonHandler, EventContext};

/// Error returned when trying to push to a full queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFullError(pub QueuedEvent);

/// Error returned when trying to receive from an empty queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueEmptyError;

/// A transition recorded for later handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueuedEvent {
    pub name: &'static str,
    pub event: ButtonEvent,
}

impl From<&EventContext> for QueuedEvent {
    fn from(context: &EventContext) -> Self {
        Self {
            name: context.name,
            event: context.event,
        }
    }
}

/// Bounded FIFO of button transitions.
///
/// As a [`ButtonHandler`] it records every transition it is bound to. When
/// the queue is full the newest transition is dropped.
pub struct EventQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<QueuedEvent, SIZE>>>,
}

impl<const SIZE: usize> EventQueue<SIZE> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a receiver handle for this queue.
    pub const fn receiver(&self) -> EventReceiver<'_, SIZE> {
        EventReceiver { queue: self }
    }

    /// Try to push a transition.
    ///
    /// Returns `Err(QueueFullError(event))` if the queue is full.
    pub fn try_push(&self, event: QueuedEvent) -> Result<(), QueueFullError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(event).map_err(QueueFullError)
        })
    }

    /// Try to take the oldest transition.
    ///
    /// Returns `Err(QueueEmptyError)` if the queue is empty.
    pub fn try_receive(&self) -> Result<QueuedEvent, QueueEmptyError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(QueueEmptyError)
        })
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for EventQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize> ButtonHandler for EventQueue<SIZE> {
    fn on_event(&self, context: &EventContext) {
        if let Err(QueueFullError(_dropped)) = self.try_push(context.into()) {
            #[cfg(feature = "esp32-log")]
            println!(
                "[EventQueue] full, dropping {} {:?}",
                _dropped.name, _dropped.event
            );
        }
    }
}

/// A receiver handle for an [`EventQueue`].
#[derive(Clone, Copy)]
pub struct EventReceiver<'a, const SIZE: usize> {
    queue: &'a EventQueue<SIZE>,
}

impl<const SIZE: usize> EventReceiver<'_, SIZE> {
    /// Try to take the oldest transition.
    ///
    /// Returns `Err(QueueEmptyError)` if the queue is empty.
    pub fn try_receive(&self) -> Result<QueuedEvent, QueueEmptyError> {
        self.queue.try_receive()
    }

    /// Iterate over queued transitions, removing them
    pub fn drain(&self) -> impl Iterator<Item = QueuedEvent> + '_ {
        core::iter::from_fn(|| self.queue.try_receive().ok())
    }
}

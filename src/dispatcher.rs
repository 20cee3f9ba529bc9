//! Event dispatcher: binds handlers to event kinds on named buttons.

use crate::button::Button;
use crate::detector::Detector;
use crate::error::{Error, Result};
use crate::event::{ButtonEvent, EventSelector};
use crate::handler::ButtonHandler;
use crate::level::LevelSource;
use crate::registry::ButtonRegistry;

/// Handler reference stored in a binding slot
pub type HandlerRef<'a> = &'a dyn ButtonHandler;

/// One optional handler per bindable event kind.
#[derive(Clone, Copy)]
pub(crate) struct EventTable<'a> {
    slots: [Option<HandlerRef<'a>>; ButtonEvent::COUNT],
}

impl<'a> EventTable<'a> {
    const fn new() -> Self {
        Self {
            slots: [None; ButtonEvent::COUNT],
        }
    }

    fn get(&self, event: ButtonEvent) -> Option<HandlerRef<'a>> {
        event.slot().and_then(|slot| self.slots[slot])
    }

    /// Selector must not name the sentinel.
    fn set(&mut self, selector: EventSelector, handler: Option<HandlerRef<'a>>) {
        match selector {
            EventSelector::All => self.slots = [handler; ButtonEvent::COUNT],
            EventSelector::Event(event) => {
                if let Some(slot) = event.slot() {
                    self.slots[slot] = handler;
                }
            }
        }
    }
}

/// Bindings of one button.
///
/// Changes made while a poll tick is dispatching go to `staged` and become
/// active once the tick ends.
pub(crate) struct Bindings<'a> {
    active: EventTable<'a>,
    staged: Option<EventTable<'a>>,
}

impl<'a> Bindings<'a> {
    pub(crate) const fn new() -> Self {
        Self {
            active: EventTable::new(),
            staged: None,
        }
    }

    pub(crate) fn handler(&self, event: ButtonEvent) -> Option<HandlerRef<'a>> {
        self.active.get(event)
    }

    fn update(&mut self, selector: EventSelector, handler: Option<HandlerRef<'a>>, deferred: bool) {
        if deferred {
            let active = self.active;
            self.staged.get_or_insert(active).set(selector, handler);
        } else {
            self.active.set(selector, handler);
        }
    }

    pub(crate) fn commit(&mut self) {
        if let Some(staged) = self.staged.take() {
            self.active = staged;
        }
    }
}

impl<'a, S: LevelSource, D: Detector> Button<'a, S, D> {
    /// Handler currently bound to `event`
    pub(crate) fn handler(&self, event: ButtonEvent) -> Option<HandlerRef<'a>> {
        critical_section::with(|cs| self.bindings.borrow(cs).borrow().handler(event))
    }

    /// Whether a handler is active for `event`
    pub fn is_bound(&self, event: ButtonEvent) -> bool {
        self.handler(event).is_some()
    }

    pub(crate) fn commit_bindings(&self) {
        critical_section::with(|cs| self.bindings.borrow(cs).borrow_mut().commit());
    }

    fn bind(&self, selector: EventSelector, handler: Option<HandlerRef<'a>>, deferred: bool) {
        critical_section::with(|cs| {
            self.bindings
                .borrow(cs)
                .borrow_mut()
                .update(selector, handler, deferred);
        });
    }
}

impl<'a, S: LevelSource, D: Detector, const N: usize> ButtonRegistry<'a, S, D, N> {
    /// Bind `handler` to the selected event kinds of button `name`.
    ///
    /// Replaces any previous binding of those kinds. Fails with
    /// [`Error::InvalidArgument`] and changes nothing if the name is unknown,
    /// the handler is missing, or the selector names
    /// [`ButtonEvent::NoTrigger`].
    ///
    /// When called from a handler during a poll tick, the binding becomes
    /// active once that tick has finished dispatching.
    pub fn attach(
        &self,
        name: &str,
        selector: impl Into<EventSelector>,
        handler: Option<HandlerRef<'a>>,
    ) -> Result<()> {
        let selector = selector.into();
        let (Some(button), Some(handler)) = (self.lookup(name), handler) else {
            return Err(Error::InvalidArgument);
        };
        self.rebind(button, selector, Some(handler))
    }

    /// Remove the bindings of the selected event kinds of button `name`.
    ///
    /// Same validation and staging rules as [`attach`](Self::attach).
    pub fn detach(&self, name: &str, selector: impl Into<EventSelector>) -> Result<()> {
        let selector = selector.into();
        let button = self.lookup(name).ok_or(Error::InvalidArgument)?;
        self.rebind(button, selector, None)
    }

    fn rebind(
        &self,
        button: &Button<'a, S, D>,
        selector: EventSelector,
        handler: Option<HandlerRef<'a>>,
    ) -> Result<()> {
        if selector == EventSelector::Event(ButtonEvent::NoTrigger) {
            return Err(Error::InvalidArgument);
        }
        button.bind(selector, handler, self.is_dispatching());
        Ok(())
    }
}

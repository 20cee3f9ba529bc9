//! Button registry: owns every button of a board and resolves names.

use core::cell::Cell;

use critical_section::Mutex;
#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::Vec;

use crate::board::{Board, ButtonConfig};
use crate::button::Button;
use crate::detector::Detector;
use crate::error::{Error, Result};
use crate::event::{ButtonEvent, ButtonState};
use crate::level::LevelSource;

/// Fixed-capacity set of named buttons.
///
/// `N` is the number of physical buttons the registry can hold. The registry
/// is an ordinary owned value: create it with [`initialize`](Self::initialize),
/// keep it for as long as the buttons are in use and pass it by reference to
/// whatever attaches handlers or drives [`poll`](Self::poll).
pub struct ButtonRegistry<'a, S, D, const N: usize> {
    buttons: Vec<Button<'a, S, D>, N>,
    dispatching: Mutex<Cell<bool>>,
}

impl<'a, S: LevelSource, D: Detector, const N: usize> ButtonRegistry<'a, S, D, N> {
    /// Create a registry without buttons.
    pub const fn new() -> Self {
        Self {
            buttons: Vec::new(),
            dispatching: Mutex::new(Cell::new(false)),
        }
    }

    /// Configure every pin of `layout` and create its button with a default
    /// detector.
    pub fn initialize<B>(board: &mut B, layout: &[ButtonConfig<B::Pin>]) -> Result<Self>
    where
        B: Board<Input = S>,
        D: Default,
    {
        Self::initialize_with(board, layout, |_| D::default())
    }

    /// Configure every pin of `layout` and create its button, building each
    /// detector with `make_detector`.
    ///
    /// Pins are configured as pulled-up inputs in layout order. A rejected
    /// pin aborts initialization with [`Error::Configuration`]; pins that
    /// were already configured stay configured. Calling this again on the
    /// same board re-applies the configuration.
    pub fn initialize_with<B, F>(
        board: &mut B,
        layout: &[ButtonConfig<B::Pin>],
        mut make_detector: F,
    ) -> Result<Self>
    where
        B: Board<Input = S>,
        F: FnMut(&ButtonConfig<B::Pin>) -> D,
    {
        #[cfg(feature = "esp32-log")]
        println!("[ButtonRegistry] initializing {} buttons", layout.len());

        if layout.len() > N {
            return Err(Error::CapacityExceeded);
        }
        for (index, config) in layout.iter().enumerate() {
            if layout[..index].iter().any(|other| other.name == config.name) {
                return Err(Error::DuplicateName(config.name));
            }
        }

        let mut registry = Self::new();
        for config in layout {
            let source = board
                .configure_input_pull_up(config.pin)
                .map_err(|_| Error::Configuration(config.name))?;
            let button = Button::new(
                config.name,
                config.trigger_level,
                source,
                make_detector(config),
            );
            if registry.buttons.push(button).is_err() {
                return Err(Error::CapacityExceeded);
            }
        }

        #[cfg(feature = "esp32-log")]
        println!("[ButtonRegistry] initialized");
        Ok(registry)
    }

    /// Find a button by name.
    ///
    /// Unknown names are an expected outcome and yield `None`.
    pub fn lookup(&self, name: &str) -> Option<&Button<'a, S, D>> {
        self.buttons.iter().find(|button| button.name() == name)
    }

    /// Detach every button from its detector.
    ///
    /// Buttons stay resolvable by name but are no longer polled and report
    /// [`ButtonState::NoTrigger`]. Calling this more than once is harmless.
    pub fn teardown(&self) {
        for button in &self.buttons {
            button.delete();
        }
        #[cfg(feature = "esp32-log")]
        println!("[ButtonRegistry] torn down");
    }

    /// Cached detector state of button `name`, `NoTrigger` if unknown
    pub fn get_state(&self, name: &str) -> ButtonState {
        self.lookup(name)
            .map_or(ButtonState::NoTrigger, Button::state)
    }

    /// Last event of button `name`, `NoTrigger` if unknown
    pub fn get_event(&self, name: &str) -> ButtonEvent {
        self.lookup(name)
            .map_or(ButtonEvent::NoTrigger, Button::event)
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Buttons in registry (and poll) order
    pub fn iter(&self) -> impl Iterator<Item = &Button<'a, S, D>> {
        self.buttons.iter()
    }

    /// Names in registry order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.buttons.iter().map(Button::name)
    }

    pub(crate) fn is_dispatching(&self) -> bool {
        critical_section::with(|cs| self.dispatching.borrow(cs).get())
    }

    /// Mark the start or end of a dispatch pass.
    ///
    /// Returns the previous value.
    pub(crate) fn set_dispatching(&self, dispatching: bool) -> bool {
        critical_section::with(|cs| self.dispatching.borrow(cs).replace(dispatching))
    }
}

impl<S: LevelSource, D: Detector, const N: usize> Default for ButtonRegistry<'_, S, D, N> {
    fn default() -> Self {
        Self::new()
    }
}

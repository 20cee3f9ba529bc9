#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use myrtio_buttons::{
    Board, ButtonConfig, ButtonEvent, ButtonRegistry, ButtonState, Detector, EdgeDetector,
    EventContext, Level, LevelSource, PinConfigError,
};

pub const SIM_KEYS: usize = 6;
pub const SIM_NAMES: [&str; SIM_KEYS] = ["key1", "key2", "key3", "key4", "key5", "key6"];

pub type SimRegistry<'a> = ButtonRegistry<'a, SimInput<'a>, EdgeDetector, SIM_KEYS>;

/// Move a value to the heap and keep it for the rest of the test binary.
///
/// Needed when a handler has to reach the registry it is bound to.
pub fn leak<T: 'static>(value: T) -> &'static T {
    Box::leak(Box::new(value))
}

/// Pin levels shared between a test and its simulated inputs. All pins idle
/// high, as with pull-ups enabled.
pub struct SimLevels {
    levels: [Cell<Level>; SIM_KEYS],
}

impl SimLevels {
    pub fn new() -> Self {
        Self {
            levels: std::array::from_fn(|_| Cell::new(Level::High)),
        }
    }

    pub fn set(&self, pin: usize, level: Level) {
        self.levels[pin].set(level);
    }

    /// Drive an active-low key down
    pub fn press(&self, pin: usize) {
        self.set(pin, Level::Low);
    }

    pub fn release(&self, pin: usize) {
        self.set(pin, Level::High);
    }
}

pub struct SimInput<'b> {
    levels: &'b SimLevels,
    pin: usize,
}

impl LevelSource for SimInput<'_> {
    fn read_level(&mut self) -> Level {
        self.levels.levels[self.pin].get()
    }
}

pub struct SimBoard<'b> {
    levels: &'b SimLevels,
    /// Pins in the order they were configured
    pub configured: Vec<usize>,
    /// Pin the board refuses to configure
    pub reject: Option<usize>,
}

impl<'b> SimBoard<'b> {
    pub fn new(levels: &'b SimLevels) -> Self {
        Self {
            levels,
            configured: Vec::new(),
            reject: None,
        }
    }
}

impl<'b> Board for SimBoard<'b> {
    type Pin = usize;
    type Input = SimInput<'b>;

    fn configure_input_pull_up(&mut self, pin: usize) -> Result<SimInput<'b>, PinConfigError> {
        if self.reject == Some(pin) {
            return Err(PinConfigError);
        }
        self.configured.push(pin);
        Ok(SimInput {
            levels: self.levels,
            pin,
        })
    }
}

/// Six active-low keys on pins 0..6
pub fn sim_layout() -> [ButtonConfig<usize>; SIM_KEYS] {
    std::array::from_fn(|pin| ButtonConfig::new(SIM_NAMES[pin], pin, Level::Low))
}

pub fn sim_registry<'a>(levels: &'a SimLevels) -> SimRegistry<'a> {
    let mut board = SimBoard::new(levels);
    SimRegistry::initialize(&mut board, &sim_layout()).expect("simulated board accepts all pins")
}

/// Events a test wants detectors to emit on the next tick, one slot per pin.
pub struct Script {
    slots: [Cell<Option<ButtonEvent>>; SIM_KEYS],
}

impl Script {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| Cell::new(None)),
        }
    }

    pub fn emit(&self, pin: usize, event: ButtonEvent) {
        self.slots[pin].set(Some(event));
    }

    pub fn detector(&self, pin: usize) -> ScriptedDetector<'_> {
        ScriptedDetector {
            next: &self.slots[pin],
            state: ButtonState::NoTrigger,
        }
    }
}

/// Detector that reports whatever the test scripted for the next tick.
pub struct ScriptedDetector<'s> {
    next: &'s Cell<Option<ButtonEvent>>,
    state: ButtonState,
}

impl Detector for ScriptedDetector<'_> {
    fn tick(&mut self, _pressed: bool) -> Option<ButtonEvent> {
        let event = self.next.take()?;
        self.state = match event {
            ButtonEvent::Press => ButtonState::Pressed,
            ButtonEvent::Release | ButtonEvent::DoubleClick => ButtonState::ReleasePending,
            ButtonEvent::LongPress => ButtonState::LongPressed,
            ButtonEvent::ContinuousPress => ButtonState::Repeating,
            _ => ButtonState::NoTrigger,
        };
        Some(event)
    }

    fn state(&self) -> ButtonState {
        self.state
    }

    fn reset(&mut self) {
        self.next.set(None);
        self.state = ButtonState::NoTrigger;
    }
}

pub type ScriptedRegistry<'a> = ButtonRegistry<'a, SimInput<'a>, ScriptedDetector<'a>, SIM_KEYS>;

pub fn scripted_registry<'a>(levels: &'a SimLevels, script: &'a Script) -> ScriptedRegistry<'a> {
    let mut board = SimBoard::new(levels);
    ScriptedRegistry::initialize_with(&mut board, &sim_layout(), |config| {
        script.detector(config.pin)
    })
    .expect("simulated board accepts all pins")
}

/// Handler that records every context it receives.
#[derive(Default)]
pub struct Recorder {
    pub seen: RefCell<Vec<EventContext>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<ButtonEvent> {
        self.seen.borrow().iter().map(|context| context.event).collect()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.seen.borrow().iter().map(|context| context.name).collect()
    }

    pub fn count(&self) -> usize {
        self.seen.borrow().len()
    }
}

impl myrtio_buttons::ButtonHandler for Recorder {
    fn on_event(&self, context: &EventContext) {
        self.seen.borrow_mut().push(*context);
    }
}

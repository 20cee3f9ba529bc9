//! Board-support boundary and the default key layout.

use core::fmt;

use crate::level::{Level, LevelSource};

/// Error returned by a board when it rejects a pin configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinConfigError;

/// Board-support layer used during registry initialization.
///
/// Configuring a pin yields the level source that samples it. Configuration
/// must be idempotent: applying it to an already configured pin succeeds.
pub trait Board {
    /// Pin identifier used by the board
    type Pin: Copy;
    /// Level source returned for a configured input
    type Input: LevelSource;

    /// Configure `pin` as a digital input with the pull-up enabled
    fn configure_input_pull_up(&mut self, pin: Self::Pin) -> Result<Self::Input, PinConfigError>;
}

/// One logical button of a board layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonConfig<P> {
    /// Unique lookup name
    pub name: &'static str,
    /// Pin the button is wired to
    pub pin: P,
    /// Level that means "pressed"
    pub trigger_level: Level,
}

impl<P> ButtonConfig<P> {
    pub const fn new(name: &'static str, pin: P, trigger_level: Level) -> Self {
        Self {
            name,
            pin,
            trigger_level,
        }
    }
}

/// GPIO port of a [`PortPin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Port {
    A,
    B,
    C,
    D,
    E,
}

impl Port {
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
        }
    }
}

/// Port and line number of a GPIO pin, rendered as `PC4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortPin {
    pub port: Port,
    pub number: u8,
}

impl PortPin {
    pub const fn new(port: Port, number: u8) -> Self {
        Self { port, number }
    }
}

impl fmt::Display for PortPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}{}", self.port.letter(), self.number)
    }
}

/// Number of buttons on the default layout
pub const KEY_COUNT: usize = 6;

/// Keys on the default layout are wired to ground and read low when pressed.
pub const KEY_TRIGGER_LEVEL: Level = Level::Low;

/// Default six-key layout.
pub const KEY_LAYOUT: [ButtonConfig<PortPin>; KEY_COUNT] = [
    ButtonConfig::new("key1", PortPin::new(Port::C, 4), KEY_TRIGGER_LEVEL),
    ButtonConfig::new("key2", PortPin::new(Port::B, 14), KEY_TRIGGER_LEVEL),
    ButtonConfig::new("key3", PortPin::new(Port::A, 0), KEY_TRIGGER_LEVEL),
    ButtonConfig::new("key4", PortPin::new(Port::A, 8), KEY_TRIGGER_LEVEL),
    ButtonConfig::new("key5", PortPin::new(Port::B, 7), KEY_TRIGGER_LEVEL),
    ButtonConfig::new("key6", PortPin::new(Port::A, 15), KEY_TRIGGER_LEVEL),
];

/// Find the configured pin of a button on a layout
pub fn pin_of<P: Copy>(layout: &[ButtonConfig<P>], name: &str) -> Option<P> {
    layout
        .iter()
        .find(|config| config.name == name)
        .map(|config| config.pin)
}

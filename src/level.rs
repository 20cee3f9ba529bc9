//! Digital input levels and the level source abstraction.

/// Electrical level of a digital input pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// Build a level from a boolean "is high" reading.
    pub const fn from_high(high: bool) -> Self {
        if high { Self::High } else { Self::Low }
    }

    pub const fn is_high(self) -> bool {
        matches!(self, Self::High)
    }

    pub const fn is_low(self) -> bool {
        matches!(self, Self::Low)
    }

    /// The opposite level.
    #[must_use]
    pub const fn inverted(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        Self::from_high(high)
    }
}

/// Samples a single digital input.
///
/// Implement this trait for a real pin, a simulated pin in tests, or anything
/// else that can report a level. Every `FnMut() -> Level` closure is a level
/// source.
pub trait LevelSource {
    /// Read the current level of the input
    fn read_level(&mut self) -> Level;
}

impl<F> LevelSource for F
where
    F: FnMut() -> Level,
{
    fn read_level(&mut self) -> Level {
        self()
    }
}

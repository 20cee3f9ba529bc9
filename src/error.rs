use core::fmt;

/// Result type used by registry and dispatcher operations
pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned by registry and dispatcher operations.
///
/// Lookup misses are not errors: queries on unknown names return `None` or
/// the `NoTrigger` sentinel instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Unknown button name, missing handler or a selector naming the sentinel
    InvalidArgument,
    /// The layout names the same button twice
    DuplicateName(&'static str),
    /// The layout has more buttons than the registry can hold
    CapacityExceeded,
    /// The board rejected the pin configuration of this button
    Configuration(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => f.write_str("invalid argument"),
            Self::DuplicateName(name) => write!(f, "duplicate button name `{name}`"),
            Self::CapacityExceeded => f.write_str("button registry capacity exceeded"),
            Self::Configuration(name) => write!(f, "pin configuration failed for `{name}`"),
        }
    }
}

impl core::error::Error for Error {}

//! Button event kinds, attach-time selectors and detector states.
//!
//! Raw codes are stable and match the numbering used by the detection engine,
//! names are used by logging and operator surfaces.

const EVENT_NAME_NO_TRIGGER: &str = "no_trigger";
const EVENT_NAME_PRESS: &str = "press";
const EVENT_NAME_RELEASE: &str = "release";
const EVENT_NAME_DOUBLE_CLICK: &str = "double_click";
const EVENT_NAME_LONG_PRESS: &str = "long_press";
const EVENT_NAME_LONG_PRESS_RELEASE: &str = "long_press_release";
const EVENT_NAME_CONTINUOUS_PRESS: &str = "continuous_press";
const EVENT_NAME_CONTINUOUS_PRESS_RELEASE: &str = "continuous_press_release";

const EVENT_ID_NO_TRIGGER: u8 = 0;
const EVENT_ID_PRESS: u8 = 1;
const EVENT_ID_RELEASE: u8 = 2;
const EVENT_ID_DOUBLE_CLICK: u8 = 3;
const EVENT_ID_LONG_PRESS: u8 = 4;
const EVENT_ID_LONG_PRESS_RELEASE: u8 = 5;
const EVENT_ID_CONTINUOUS_PRESS: u8 = 6;
const EVENT_ID_CONTINUOUS_PRESS_RELEASE: u8 = 7;

/// Transition reported by the detection engine.
///
/// `NoTrigger` is the sentinel for "nothing happened yet" and is never emitted
/// as an observed transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ButtonEvent {
    #[default]
    NoTrigger = EVENT_ID_NO_TRIGGER,
    Press = EVENT_ID_PRESS,
    Release = EVENT_ID_RELEASE,
    DoubleClick = EVENT_ID_DOUBLE_CLICK,
    LongPress = EVENT_ID_LONG_PRESS,
    LongPressRelease = EVENT_ID_LONG_PRESS_RELEASE,
    ContinuousPress = EVENT_ID_CONTINUOUS_PRESS,
    ContinuousPressRelease = EVENT_ID_CONTINUOUS_PRESS_RELEASE,
}

impl ButtonEvent {
    /// Number of bindable event kinds (everything except the sentinel).
    pub const COUNT: usize = 7;

    /// All bindable event kinds in raw-code order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Press,
        Self::Release,
        Self::DoubleClick,
        Self::LongPress,
        Self::LongPressRelease,
        Self::ContinuousPress,
        Self::ContinuousPressRelease,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EVENT_ID_NO_TRIGGER => Self::NoTrigger,
            EVENT_ID_PRESS => Self::Press,
            EVENT_ID_RELEASE => Self::Release,
            EVENT_ID_DOUBLE_CLICK => Self::DoubleClick,
            EVENT_ID_LONG_PRESS => Self::LongPress,
            EVENT_ID_LONG_PRESS_RELEASE => Self::LongPressRelease,
            EVENT_ID_CONTINUOUS_PRESS => Self::ContinuousPress,
            EVENT_ID_CONTINUOUS_PRESS_RELEASE => Self::ContinuousPressRelease,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoTrigger => EVENT_NAME_NO_TRIGGER,
            Self::Press => EVENT_NAME_PRESS,
            Self::Release => EVENT_NAME_RELEASE,
            Self::DoubleClick => EVENT_NAME_DOUBLE_CLICK,
            Self::LongPress => EVENT_NAME_LONG_PRESS,
            Self::LongPressRelease => EVENT_NAME_LONG_PRESS_RELEASE,
            Self::ContinuousPress => EVENT_NAME_CONTINUOUS_PRESS,
            Self::ContinuousPressRelease => EVENT_NAME_CONTINUOUS_PRESS_RELEASE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EVENT_NAME_NO_TRIGGER => Some(Self::NoTrigger),
            EVENT_NAME_PRESS => Some(Self::Press),
            EVENT_NAME_RELEASE => Some(Self::Release),
            EVENT_NAME_DOUBLE_CLICK => Some(Self::DoubleClick),
            EVENT_NAME_LONG_PRESS => Some(Self::LongPress),
            EVENT_NAME_LONG_PRESS_RELEASE => Some(Self::LongPressRelease),
            EVENT_NAME_CONTINUOUS_PRESS => Some(Self::ContinuousPress),
            EVENT_NAME_CONTINUOUS_PRESS_RELEASE => Some(Self::ContinuousPressRelease),
            _ => None,
        }
    }

    /// Human readable description, as printed by the event logger
    pub const fn describe(self) -> &'static str {
        match self {
            Self::NoTrigger => "idle",
            Self::Press => "pressed",
            Self::Release => "released",
            Self::DoubleClick => "double clicked",
            Self::LongPress => "long pressed",
            Self::LongPressRelease => "long press released",
            Self::ContinuousPress => "continuous pressed",
            Self::ContinuousPressRelease => "continuous press released",
        }
    }

    /// Slot of this kind in a binding table, `None` for the sentinel.
    pub(crate) const fn slot(self) -> Option<usize> {
        match self {
            Self::NoTrigger => None,
            _ => Some(self as usize - 1),
        }
    }
}

/// Selects which event kinds an attach or detach call applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventSelector {
    /// A single event kind
    Event(ButtonEvent),
    /// Every bindable event kind
    All,
}

impl From<ButtonEvent> for EventSelector {
    fn from(event: ButtonEvent) -> Self {
        Self::Event(event)
    }
}

/// Detector state of a button, as last reported by its detection engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ButtonState {
    /// Idle, or the button is unknown
    #[default]
    NoTrigger,
    /// Held down
    Pressed,
    /// Released, waiting to see whether a second click follows
    ReleasePending,
    /// Held past the long-press threshold
    LongPressed,
    /// Held long enough to auto-repeat
    Repeating,
}

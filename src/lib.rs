#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod button;
pub mod detector;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod handler;
pub mod level;
pub mod poll;
pub mod queue;
pub mod registry;

pub use board::{Board, ButtonConfig, KEY_COUNT, KEY_LAYOUT, PinConfigError, Port, PortPin};
pub use button::Button;
pub use detector::{Detector, EdgeDetector};
pub use dispatcher::HandlerRef;
pub use error::{Error, Result};
pub use event::{ButtonEvent, ButtonState, EventSelector};
pub use handler::{ButtonHandler, EVENT_LOGGER, EventContext, EventLogger};
pub use level::{Level, LevelSource};
pub use poll::{
    DEFAULT_POLL_INTERVAL, MAX_POLL_INTERVAL, MIN_POLL_INTERVAL, PollResult, PollScheduler,
};
pub use queue::{EventQueue, EventReceiver, QueuedEvent};
pub use registry::ButtonRegistry;

pub use embassy_time::{Duration, Instant};

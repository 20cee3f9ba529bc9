//! Poll driver and poll pacing.
//!
//! [`ButtonRegistry::poll`] must run every 20-50 ms. Calling it less often is
//! not detected here; it shows up as misclassified transitions, e.g. a
//! double click seen as two single presses. [`PollScheduler`] provides the
//! pacing without async or platform timers; the caller sleeps between ticks.

use embassy_time::{Duration, Instant};
#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::detector::Detector;
use crate::level::LevelSource;
use crate::registry::ButtonRegistry;

/// Shortest supported poll interval.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Longest supported poll interval.
pub const MAX_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Default poll interval.
pub const DEFAULT_POLL_INTERVAL: Duration = MIN_POLL_INTERVAL;

impl<S: LevelSource, D: Detector, const N: usize> ButtonRegistry<'_, S, D, N> {
    /// Advance every button by one tick.
    ///
    /// Buttons are sampled in registry order. Each detected transition is
    /// cached on its button and handed synchronously to the handler bound to
    /// that event kind, if there is one. Handlers may call back into the
    /// registry; bindings they change take effect from the next tick. A
    /// nested `poll` from inside a handler returns without doing anything.
    ///
    /// Never blocks and never allocates.
    pub fn poll(&self) {
        if self.set_dispatching(true) {
            return;
        }

        for button in self.iter() {
            let Some(context) = button.sample() else {
                continue;
            };

            #[cfg(feature = "esp32-log")]
            println!(
                "[ButtonRegistry.poll] {} -> {:?}",
                context.name, context.event
            );

            if let Some(handler) = button.handler(context.event) {
                handler.on_event(&context);
            }
        }

        self.set_dispatching(false);
        for button in self.iter() {
            button.commit_bindings();
        }
    }
}

/// Timing of the next poll tick.
#[derive(Debug, Clone, Copy)]
pub struct PollResult {
    /// When the next tick is due.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Paces [`ButtonRegistry::poll`] at a fixed interval.
///
/// The interval is clamped into
/// [`MIN_POLL_INTERVAL`]..=[`MAX_POLL_INTERVAL`]. After a stall longer than
/// two intervals the backlog is dropped instead of polled in a burst.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = PollScheduler::new(&registry);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     Timer::after(result.sleep_duration).await;
/// }
/// ```
pub struct PollScheduler<'r, 'a, S, D, const N: usize> {
    registry: &'r ButtonRegistry<'a, S, D, N>,
    next_poll: Instant,
    interval: Duration,
}

impl<'r, 'a, S: LevelSource, D: Detector, const N: usize> PollScheduler<'r, 'a, S, D, N> {
    /// Create a scheduler polling every [`DEFAULT_POLL_INTERVAL`].
    pub fn new(registry: &'r ButtonRegistry<'a, S, D, N>) -> Self {
        Self::with_interval(registry, DEFAULT_POLL_INTERVAL)
    }

    /// Create a scheduler with a custom interval.
    pub fn with_interval(registry: &'r ButtonRegistry<'a, S, D, N>, interval: Duration) -> Self {
        Self {
            registry,
            next_poll: Instant::from_millis(0),
            interval: clamp_interval(interval),
        }
    }

    /// Poll once and return when the next tick is due.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> PollResult {
        let max_drift = self.interval.as_millis() * 2;
        if now.as_millis() > self.next_poll.as_millis() + max_drift {
            self.next_poll = now;
        }

        self.registry.poll();

        self.next_poll += self.interval;

        let sleep_duration = if self.next_poll > now {
            self.next_poll - now
        } else {
            Duration::from_millis(0)
        };

        PollResult {
            next_deadline: self.next_poll,
            sleep_duration,
        }
    }

    /// Effective poll interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn registry(&self) -> &'r ButtonRegistry<'a, S, D, N> {
        self.registry
    }
}

fn clamp_interval(interval: Duration) -> Duration {
    if interval < MIN_POLL_INTERVAL {
        MIN_POLL_INTERVAL
    } else if interval > MAX_POLL_INTERVAL {
        MAX_POLL_INTERVAL
    } else {
        interval
    }
}

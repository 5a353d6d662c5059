//! Keyboard-show debouncing.
//!
//! Applying a format makes the engine move focus between nodes, which the
//! host OS reports as the on-screen keyboard opening. Reacting to that
//! immediately would collapse the format panel right after the user used
//! it. A keyboard show only counts once it has survived `delay` without a
//! hide or another show.

use std::time::{Duration, Instant};

use tracing::trace;

/// Debounce applied to keyboard-show signals.
///
/// The engine's focus churn settles in 10-25ms, with outliers around 50ms.
/// A real keyboard takes ~250ms to open, so 100ms sits between the two.
pub const DEFAULT_KEYBOARD_DEBOUNCE: Duration = Duration::from_millis(100);

/// An armed timer entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask {
    pub id: u64,
    pub deadline: Instant,
}

/// Single-slot cancellable timer for keyboard-show signals.
///
/// The host loop calls [`poll`](Self::poll) with the current time and
/// sleeps until [`deadline`](Self::deadline).
#[derive(Debug)]
pub struct KeyboardDebouncer {
    delay: Duration,
    armed: Option<ScheduledTask>,
    next_id: u64,
}

impl KeyboardDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            armed: None,
            next_id: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm the timer at `now + delay`, cancelling any armed task first.
    pub fn arm(&mut self, now: Instant) -> ScheduledTask {
        if let Some(previous) = self.cancel() {
            trace!(task = previous.id, "keyboard debounce superseded");
        }
        self.next_id += 1;
        let task = ScheduledTask {
            id: self.next_id,
            deadline: now + self.delay,
        };
        self.armed = Some(task);
        task
    }

    /// Disarm the timer, returning the task that was armed.
    pub fn cancel(&mut self) -> Option<ScheduledTask> {
        self.armed.take()
    }

    /// Returns `true` once when the armed deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.armed {
            Some(task) if now >= task.deadline => {
                self.armed = None;
                true
            }
            _ => false,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.armed.map(|task| task.deadline)
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}

impl Default for KeyboardDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_KEYBOARD_DEBOUNCE)
    }
}

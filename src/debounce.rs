//! Single-slot quiet-period timer.
//!
//! Change notifications arrive in bursts. Each notification pushes the deadline back, so a burst
//! collapses into one extraction pass that fires once the document has been quiet for the whole
//! period. There is only ever one pending pass; a newer notification supersedes it rather than
//! queueing another. Time is passed in by the caller so the timer never sleeps itself.

use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
/// Debounces notifications into at most one pending pass.
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    #[must_use]
    /// Creates an idle timer with the given quiet period.
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// Arms the timer, or pushes back the deadline of the pending pass.
    pub fn notify(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    /// Returns `true` once per armed deadline, when it has passed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    /// Whether a pass is waiting for its quiet period to end.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drops the pending pass, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
#[path = "tests/debounce.rs"]
mod tests;

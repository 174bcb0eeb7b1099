//! Trailing-edge debounce, used to coalesce resize storms into a single
//! field rebuild.

use instant::Instant;
use std::time::Duration;

/// Records event bursts and reports readiness once the stream has been
/// quiet for the configured delay. Polled from the frame loop rather than
/// armed with a host timer, so the coalescing rule stays testable.
#[derive(Clone, Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Note another event in the burst; pushes the deadline out.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once per burst, on the first poll past the deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

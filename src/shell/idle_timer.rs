// SPDX-License-Identifier: MPL-2.0
//! Single-shot idle timer used to hide the cursor in chrome-less modes.

use std::time::{Duration, Instant};

/// Delay of pointer inactivity before the cursor is hidden.
pub const CURSOR_HIDE_DELAY: Duration = Duration::from_millis(1500);

/// A single-shot countdown.
///
/// Arming schedules exactly one wake-up; arming again restarts the
/// countdown, disarming cancels it and firing consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl IdleTimer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Starts (or restarts) the countdown from now.
    pub fn arm(&mut self) {
        self.arm_at(Instant::now());
    }

    /// Starts (or restarts) the countdown from `now`.
    pub fn arm_at(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once when the deadline has passed at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for IdleTimer {
    fn default() -> Self {
        Self::new(CURSOR_HIDE_DELAY)
    }
}

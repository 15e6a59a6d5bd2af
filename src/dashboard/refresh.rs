//! Countdown to the next feed refresh.

use serde::Serialize;

/// Seconds remaining until the mention feed is fetched again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RefreshCountdown {
    remaining: u32,
    #[serde(skip)]
    interval: u32,
}

impl RefreshCountdown {
    #[must_use]
    pub fn new(interval_secs: u32) -> Self {
        Self {
            remaining: interval_secs,
            interval: interval_secs,
        }
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Count down one second. Returns `true` when a refresh is due, in which
    /// case the countdown has already restarted.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.remaining = self.interval;
            true
        } else {
            false
        }
    }

    pub fn restart(&mut self) {
        self.remaining = self.interval;
    }
}

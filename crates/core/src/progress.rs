//! Cosmetic progress ramp shown while a backend request is in flight.
//!
//! The backend reports no progress, so the value is advanced by a timer and
//! only reaches 100 once the request has actually succeeded.

use std::time::Duration;

/// Highest value the ramp may reach while a request is outstanding.
pub const PROGRESS_CEILING: u8 = 90;

/// Value shown once a request has succeeded.
pub const PROGRESS_COMPLETE: u8 = 100;

/// Delay between completion and resetting the bar to zero.
pub const PROGRESS_RESET_DELAY: Duration = Duration::from_secs(1);

/// Fixed step and tick interval for one workflow's ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressRamp {
    step: u8,
    interval: Duration,
}

impl ProgressRamp {
    pub const RAG: Self = Self::new(10, Duration::from_millis(500));
    pub const SCORING: Self = Self::new(5, Duration::from_millis(200));
    pub const ASK: Self = Self::new(15, Duration::from_millis(300));

    #[must_use]
    pub const fn new(step: u8, interval: Duration) -> Self {
        Self { step, interval }
    }

    #[must_use]
    pub const fn step(&self) -> u8 {
        self.step
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Progress(u8);

impl Progress {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn complete() -> Self {
        Self(PROGRESS_COMPLETE)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.0 >= PROGRESS_COMPLETE
    }

    /// One timer tick. Clamped to [`PROGRESS_CEILING`]; never moves backwards.
    #[must_use]
    pub fn advance(self, ramp: ProgressRamp) -> Self {
        if self.0 >= PROGRESS_CEILING {
            return self;
        }
        Self(self.0.saturating_add(ramp.step()).min(PROGRESS_CEILING))
    }
}

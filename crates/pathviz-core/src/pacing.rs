//! The [`Pacing`] delay between visible grid mutations.
//!
//! Searches and maze generators sleep for one pacing interval before each
//! cell they repaint, which is what turns a run into an animation. Exactly
//! one visible mutation follows each pause.

use std::thread;
use std::time::Duration;

/// The delay inserted before each visible cell mutation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pacing {
    delay: Duration,
}

impl Pacing {
    /// The default animation delay (10 ms).
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(10);

    /// Pace runs with the given delay.
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// No delay at all; runs complete as fast as they compute. Used by
    /// tests and headless callers.
    pub const fn none() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    /// The configured delay.
    #[inline]
    pub const fn delay(self) -> Duration {
        self.delay
    }

    /// Sleep for one pacing interval. A no-op when the delay is zero.
    #[inline]
    pub fn pause(self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

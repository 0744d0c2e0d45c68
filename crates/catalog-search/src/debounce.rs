//! Resettable quiet-period timer.

use std::pin::Pin;
use std::time::Duration;

use tokio::time::{Instant, Sleep};

/// Fires once `period` has elapsed since the most recent [`arm`](Self::arm).
///
/// Re-arming while pending pushes the deadline out, so a burst of edits
/// settles exactly once, `period` after the last one.
#[derive(Debug)]
pub struct Debouncer {
    period: Duration,
    sleep: Pin<Box<Sleep>>,
    armed: bool,
}

impl Debouncer {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            sleep: Box::pin(tokio::time::sleep(period)),
            armed: false,
        }
    }

    pub fn arm(&mut self) {
        self.sleep.as_mut().reset(Instant::now() + self.period);
        self.armed = true;
    }

    pub const fn cancel(&mut self) {
        self.armed = false;
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.armed
    }

    /// Resolves when the armed deadline passes. Never resolves while disarmed.
    ///
    /// Cancel safe: dropping the future before it resolves leaves the timer
    /// armed with the same deadline.
    pub async fn settled(&mut self) {
        if !self.armed {
            std::future::pending::<()>().await;
        }
        self.sleep.as_mut().await;
        self.armed = false;
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search-as-you-type debouncing.
//!
//! Every keystroke submits the current input; only the last one survives. Once
//! the input has been quiet for the configured delay, `poll` hands it over
//! exactly once. A newer submission always cancels the pending one, so a slow
//! typist never sees results for a query they have already changed.
//!
//! Time is passed in rather than read, which keeps this free of threads and
//! timers and makes it trivial to test.

use std::time::{Duration, Instant};

/// Quiet period before a submitted value is released.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(150);

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace whatever is pending with `value`, restarting the quiet period.
    pub fn submit(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Take the pending value if it has been quiet for at least the delay.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let ready = self
            .pending
            .as_ref()
            .is_some_and(|(_, submitted)| now.saturating_duration_since(*submitted) >= self.delay);
        if ready {
            self.cancel()
        } else {
            None
        }
    }

    /// When the pending value becomes ready, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, submitted)| *submitted + self.delay)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value without releasing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }
}

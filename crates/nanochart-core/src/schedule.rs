// File: crates/nanochart-core/src/schedule.rs
// Summary: Rate-limit policies for pointer and resize handling, driven by caller-supplied instants.
// Notes:
// - Neither type owns a timer; the event layer passes `Instant`s in and polls.
// - The range/projection/layout functions are never throttled themselves.

use std::time::{Duration, Instant};

/// Leading-edge throttle: the first call fires, then calls are dropped until
/// `interval` has passed since the last one that fired.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    interval: Duration,
    last_fired: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self { interval, last_fired: None }
    }

    /// Returns true when the caller should run its handler now.
    pub fn try_fire(&mut self, now: Instant) -> bool {
        if let Some(t) = self.last_fired {
            if now.saturating_duration_since(t) < self.interval {
                return false;
            }
        }
        self.last_fired = Some(now);
        true
    }

    pub fn reset(&mut self) { self.last_fired = None; }

    pub fn interval(&self) -> Duration { self.interval }
}

/// Trailing-edge debounce carrying the latest payload.
#[derive(Clone, Debug)]
pub struct Debounce<T> {
    interval: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debounce<T> {
    pub fn new(interval: Duration) -> Self {
        Self { interval, pending: None }
    }

    /// Record a request; replaces any pending payload and restarts the wait.
    pub fn request(&mut self, payload: T, now: Instant) {
        self.pending = Some((payload, now));
    }

    /// Take the payload once `interval` has elapsed since the last request.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, at)) if now.saturating_duration_since(*at) >= self.interval => {
                self.pending.take().map(|(p, _)| p)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool { self.pending.is_some() }

    pub fn cancel(&mut self) { self.pending = None; }
}

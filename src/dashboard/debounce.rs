use std::time::{Duration, Instant};

/// Trailing-edge debouncer driven by explicit instants.
///
/// Each [`schedule`](Self::schedule) replaces any pending value and restarts
/// the quiet window; [`poll`](Self::poll) hands back the latest value once
/// the window has elapsed with no newer input.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
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

    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((now + self.delay, value));
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if now >= *deadline => self.pending.take().map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source for the animation driver.
pub trait Clock {
    /// Time elapsed since an arbitrary, fixed origin.
    fn now(&self) -> Duration;
}

/// Wall-clock time backed by [`Instant`].
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Virtual clock that only moves when told to.
///
/// Clones share the same time cell, so a test can keep one handle and give another to an
/// [`Animator`](crate::Animator).
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get().saturating_add(by));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Handle for one pending frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameTicket(pub u64);

/// Host capability that presents frames: request a callback for the next frame, or cancel one.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameTicket;
    fn cancel_frame(&mut self, ticket: FrameTicket);
}

/// FIFO scheduler pumped explicitly by the host loop.
#[derive(Debug, Default)]
pub struct QueuedScheduler {
    next_id: u64,
    pending: VecDeque<FrameTicket>,
}

impl QueuedScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the oldest live ticket, if any.
    pub fn next_due(&mut self) -> Option<FrameTicket> {
        self.pending.pop_front()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl FrameScheduler for QueuedScheduler {
    fn request_frame(&mut self) -> FrameTicket {
        let ticket = FrameTicket(self.next_id);
        self.next_id += 1;
        self.pending.push_back(ticket);
        ticket
    }

    fn cancel_frame(&mut self, ticket: FrameTicket) {
        self.pending.retain(|t| *t != ticket);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;

//! Deadline queue for fire-and-forget callbacks.
//!
//! The event loop owns a single queue and drains it on every tick. Timers
//! cannot be cancelled; whatever a timer targets must tolerate having
//! already gone away by the time it fires.

use std::time::{Duration, Instant};

/// Delay between resetting the result pulse and reapplying it.
pub const PULSE_RESTART_DELAY: Duration = Duration::from_millis(10);

/// A deferred action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Remove the announcement with this id.
    RemoveAnnouncement(u64),
    /// Start the result pulse animation.
    ApplyPulse,
}

#[derive(Debug)]
struct Scheduled {
    deadline: Instant,
    seq: u64,
    timer: Timer,
}

/// Pending timers ordered by deadline, then by scheduling order.
#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: Vec<Scheduled>,
    next_seq: u64,
}

impl TimerQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `timer` at or after `deadline`.
    pub fn schedule(&mut self, deadline: Instant, timer: Timer) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Scheduled {
            deadline,
            seq,
            timer,
        });
    }

    /// Remove and return every timer due at `now`, earliest first.
    pub fn drain_due(&mut self, now: Instant) -> Vec<Timer> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|s| s.deadline <= now);
        self.pending = pending;
        due.sort_by_key(|s| (s.deadline, s.seq));
        due.into_iter().map(|s| s.timer).collect()
    }

    /// The earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|s| s.deadline).min()
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

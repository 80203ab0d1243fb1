//! Transient status messages for assistive technology.
//!
//! Each announcement lives in its own slot of the live region and removes
//! itself after [`ANNOUNCEMENT_TTL`]. Announcements never replace each
//! other; several may be live at once.

use std::time::{Duration, Instant};

use crate::timer::{Timer, TimerQueue};

/// How long an announcement stays live.
pub const ANNOUNCEMENT_TTL: Duration = Duration::from_millis(1000);

/// A live status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    /// Unique id within the session.
    pub id: u64,
    /// The text exposed to the reader.
    pub message: String,
    /// When it was announced.
    pub created_at: Instant,
}

/// The live region.
#[derive(Debug)]
pub struct Announcer {
    live: Vec<Announcement>,
    next_id: u64,
    ttl: Duration,
}

impl Default for Announcer {
    fn default() -> Self {
        Self::with_ttl(ANNOUNCEMENT_TTL)
    }
}

impl Announcer {
    /// Create an announcer with the standard lifetime.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an announcer with a custom lifetime.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            live: Vec::new(),
            next_id: 1,
            ttl,
        }
    }

    /// Expose `message` and schedule its removal. Returns the announcement id.
    pub fn announce(
        &mut self,
        message: impl Into<String>,
        now: Instant,
        timers: &mut TimerQueue,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        tracing::debug!(id, %message, "announce");
        self.live.push(Announcement {
            id,
            message,
            created_at: now,
        });
        timers.schedule(now + self.ttl, Timer::RemoveAnnouncement(id));
        id
    }

    /// Remove an announcement. Removing one that is already gone is a no-op.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.live.len();
        self.live.retain(|a| a.id != id);
        before != self.live.len()
    }

    /// The most recent live announcement.
    pub fn latest(&self) -> Option<&Announcement> {
        self.live.last()
    }

    /// All live announcements, oldest first.
    pub fn live(&self) -> &[Announcement] {
        &self.live
    }

    /// Lifetime of each announcement.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire(announcer: &mut Announcer, timers: &mut TimerQueue, now: Instant) {
        for timer in timers.drain_due(now) {
            if let Timer::RemoveAnnouncement(id) = timer {
                announcer.remove(id);
            }
        }
    }

    #[test]
    fn removed_after_ttl() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new();
        let mut a = Announcer::new();
        a.announce("Die rolled. Result: 12.", t0, &mut timers);
        assert_eq!(a.latest().map(|a| a.message.as_str()), Some("Die rolled. Result: 12."));

        fire(&mut a, &mut timers, t0 + Duration::from_millis(999));
        assert_eq!(a.live().len(), 1);

        fire(&mut a, &mut timers, t0 + ANNOUNCEMENT_TTL);
        assert!(a.live().is_empty());
    }

    #[test]
    fn overlapping_announcements_coexist() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new();
        let mut a = Announcer::new();
        a.announce("first", t0, &mut timers);
        a.announce("second", t0 + Duration::from_millis(400), &mut timers);
        assert_eq!(a.live().len(), 2);
        assert_eq!(a.latest().map(|a| a.message.as_str()), Some("second"));

        fire(&mut a, &mut timers, t0 + Duration::from_millis(1000));
        assert_eq!(a.live().len(), 1);
        assert_eq!(a.latest().map(|a| a.message.as_str()), Some("second"));

        fire(&mut a, &mut timers, t0 + Duration::from_millis(1400));
        assert!(a.live().is_empty());
    }

    #[test]
    fn double_remove_is_noop() {
        let mut timers = TimerQueue::new();
        let mut a = Announcer::new();
        let id = a.announce("x", Instant::now(), &mut timers);
        assert!(a.remove(id));
        assert!(!a.remove(id));
    }
}

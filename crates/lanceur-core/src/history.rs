//! Bounded roll history, most recent first.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::dice::{RollKind, RollResult};

/// Number of entries the roll history keeps.
pub const HISTORY_CAPACITY: usize = 10;

/// Format used for history timestamps (24-hour local time).
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// An ordered buffer that inserts at the front and evicts from the tail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundedHistory<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedHistory<T> {
    /// Create an empty buffer holding at most `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Insert at the front; returns the evicted tail item, if any.
    pub fn push_front(&mut self, item: T) -> Option<T> {
        self.items.push_front(item);
        if self.items.len() > self.capacity {
            self.items.pop_back()
        } else {
            None
        }
    }

    /// The most recent item.
    pub fn latest(&self) -> Option<&T> {
        self.items.front()
    }

    /// Items from most recent to oldest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }

    /// Number of items held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of items held.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> Default for BoundedHistory<T> {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

/// One past roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Local time of the roll, `HH:MM:SS`.
    pub time: String,
    /// The raw die value.
    pub value: RollResult,
    /// How the roll was used.
    #[serde(flatten)]
    pub kind: RollKind,
}

impl HistoryEntry {
    /// Record a roll made at `at`.
    pub fn new(at: DateTime<Local>, value: RollResult, kind: RollKind) -> Self {
        Self {
            time: at.format(TIME_FORMAT).to_string(),
            value,
            kind,
        }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - Result: {}", self.time, self.value)?;
        if let Some(detail) = self.kind.detail() {
            write!(f, " ({detail})")?;
        }
        Ok(())
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! Deadline-driven deferred work.
//!
//! Widgets schedule work "a little later" (re-measuring after layout settles,
//! removing a faded ripple) by pushing a key with a deadline. The widget's
//! `update` pulls whatever is due with [DeferredQueue::take_due]. Dropping the
//! queue discards everything still pending.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Entry<K> {
    seq: u64,
    deadline: Instant,
    key: K,
}

/// A small queue of keyed deadlines.
#[derive(Debug, Clone)]
pub struct DeferredQueue<K> {
    entries: Vec<Entry<K>>,
    next_seq: u64,
}

impl<K: PartialEq> DeferredQueue<K> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    /// Schedule `key` to become due `delay` after `now`.
    ///
    /// Entries with equal deadlines come due in scheduling order.
    pub fn schedule(&mut self, key: K, now: Instant, delay: Duration) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            seq,
            deadline: now + delay,
            key,
        });
    }

    /// Schedule `key`, cancelling any pending entry with an equal key first.
    pub fn reschedule(&mut self, key: K, now: Instant, delay: Duration) {
        self.cancel_key(&key);
        self.schedule(key, now, delay);
    }

    /// Cancel every entry with an equal key. Returns how many were removed.
    pub fn cancel_key(&mut self, key: &K) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.key != *key);
        before - self.entries.len()
    }

    /// Whether an entry with an equal key is pending.
    pub fn is_pending(&self, key: &K) -> bool {
        self.entries.iter().any(|e| e.key == *key)
    }

    /// Remove and return every key whose deadline is at or before `now`,
    /// earliest deadline first.
    pub fn take_due(&mut self, now: Instant) -> Vec<K> {
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|e| e.deadline <= now);
        self.entries = pending;
        due.sort_by_key(|e| (e.deadline, e.seq));
        due.into_iter().map(|e| e.key).collect()
    }

    /// Drop every pending entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of pending entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: PartialEq> Default for DeferredQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

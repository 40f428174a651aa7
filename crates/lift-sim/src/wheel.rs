//! `TimerWheel` — sparse tick-indexed event queue.
//!
//! All deferred work lives here as named [`TimerEvent`]s in one ordered
//! structure, so each transition is an explicit, testable step and the whole
//! simulation has a single source of "what happens next".
//!
//! # Ordering
//!
//! Events fire in ascending tick order, FIFO within a tick (`VecDeque`
//! buckets).  [`pop_due`][TimerWheel::pop_due] re-reads the map on every
//! call, so an event pushed *for the current tick while processing* — a
//! zero-distance dispatch, or a drain re-dispatch at door close — is picked
//! up in the same drain pass.  This is what preserves the per-lift total
//! order (arrive < door open < door close < drain) with no reordering even
//! under rapid repeated calls.

use std::collections::{BTreeMap, VecDeque};

use lift_core::Tick;

use crate::TimerEvent;

/// A priority queue mapping simulation ticks → events that fire at that tick.
#[derive(Debug, Default)]
pub struct TimerWheel {
    inner: BTreeMap<Tick, VecDeque<TimerEvent>>,
    /// Cached total event count for O(1) `len()`.
    total: usize,
}

impl TimerWheel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` to fire at `tick`.  Events already queued for the
    /// same tick fire first (FIFO).
    pub fn push(&mut self, tick: Tick, event: TimerEvent) {
        self.inner.entry(tick).or_default().push_back(event);
        self.total += 1;
    }

    /// Remove and return the oldest event due at or before `now`, with the
    /// tick it was scheduled for.
    ///
    /// Returns `None` when nothing is due — which is not the same as the
    /// wheel being empty: later events may still be pending.
    pub fn pop_due(&mut self, now: Tick) -> Option<(Tick, TimerEvent)> {
        let (&tick, _) = self.inner.first_key_value()?;
        if tick > now {
            return None;
        }
        // Bucket exists and is non-empty by construction (emptied buckets
        // are removed immediately below).
        let bucket = self.inner.get_mut(&tick)?;
        let event = bucket.pop_front()?;
        if bucket.is_empty() {
            self.inner.remove(&tick);
        }
        self.total -= 1;
        Some((tick, event))
    }

    /// The earliest tick with at least one pending event, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Total pending events across all future ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

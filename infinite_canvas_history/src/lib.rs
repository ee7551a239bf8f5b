// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Infinite Canvas History: bounded snapshot history for single-step undo.
//!
//! Undo on a raster canvas is snapshot based: before each content change the
//! caller pushes a full copy of the pixels, and undo restores an earlier copy.
//! This crate only does the bookkeeping; it never looks inside a snapshot.
//!
//! The core type is [`SnapshotHistory`], which tracks:
//! - An ordered sequence of owned snapshots, oldest first.
//! - A fixed bound (`capacity`). Pushing onto a full history evicts the oldest
//!   snapshot first, so the length never exceeds the bound.
//! - A monotonically increasing **revision** counter that bumps on every
//!   change.
//!
//! The first snapshot is treated as a *baseline*: [`SnapshotHistory::undo`]
//! never removes the last remaining entry, so there is always something to
//! restore.
//!
//! ## Minimal example
//!
//! ```rust
//! use infinite_canvas_history::SnapshotHistory;
//!
//! // Strings stand in for pixel buffers.
//! let mut history = SnapshotHistory::with_baseline(50, "blank");
//! history.push("before stroke 1");
//! history.push("before stroke 2");
//!
//! // Undo drops the newest snapshot and hands back the one to restore.
//! assert_eq!(history.undo(), Some(&"before stroke 1"));
//! assert_eq!(history.undo(), Some(&"blank"));
//!
//! // The baseline is never removed.
//! assert_eq!(history.undo(), None);
//! assert_eq!(history.len(), 1);
//! ```
//!
//! ## Memory
//!
//! A full-canvas snapshot costs `width * height * 4` bytes, so the bound
//! directly caps memory. At 5000×5000 and the default bound of 50 that is
//! roughly 5 GB in the worst case; embedders should size the bound against
//! their canvas. [`SnapshotHistory::push`] returns evicted snapshots so that
//! callers can recycle their allocations.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::collections::vec_deque;

/// Default bound on the number of retained snapshots.
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Bounded FIFO of snapshots supporting single-step undo.
#[derive(Clone, Debug)]
pub struct SnapshotHistory<T> {
    entries: VecDeque<T>,
    capacity: usize,
    revision: u64,
}

impl<T> Default for SnapshotHistory<T> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}

impl<T> SnapshotHistory<T> {
    /// Creates an empty history retaining at most `capacity` snapshots.
    ///
    /// A capacity of zero is treated as one, since the baseline must always
    /// fit.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            revision: 0,
        }
    }

    /// Creates a history whose first entry is `baseline`.
    #[must_use]
    pub fn with_baseline(capacity: usize, baseline: T) -> Self {
        let mut history = Self::new(capacity);
        history.push(baseline);
        history
    }

    /// Appends a snapshot, evicting the oldest one first if the history is
    /// full. Returns the evicted snapshot, if any.
    pub fn push(&mut self, snapshot: T) -> Option<T> {
        let evicted = if self.entries.len() >= self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(snapshot);
        self.revision = self.revision.wrapping_add(1);
        evicted
    }

    /// Drops the newest snapshot and returns the new newest one.
    ///
    /// Returns `None` without changing anything when one or zero snapshots
    /// remain.
    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.entries.pop_back();
        self.revision = self.revision.wrapping_add(1);
        self.entries.back()
    }

    /// Removes the newest snapshot without asking for anything to be restored.
    ///
    /// Used when the action the snapshot was taken for never happened. Like
    /// [`SnapshotHistory::undo`], the last remaining entry is never removed.
    pub fn discard_latest(&mut self) -> Option<T> {
        if !self.can_undo() {
            return None;
        }
        self.revision = self.revision.wrapping_add(1);
        self.entries.pop_back()
    }

    /// Returns the snapshot [`SnapshotHistory::undo`] would restore.
    #[must_use]
    pub fn previous(&self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.entries.get(self.entries.len() - 2)
    }

    /// Returns `true` if [`SnapshotHistory::undo`] would do something.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.entries.len() > 1
    }

    /// Returns the newest snapshot.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.entries.back()
    }

    /// Returns the oldest retained snapshot.
    #[must_use]
    pub fn oldest(&self) -> Option<&T> {
        self.entries.front()
    }

    /// Number of retained snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no snapshot has been pushed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of retained snapshots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change counter, bumped by every push, undo, discard and reset.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Iterates the retained snapshots, oldest first.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.entries.iter()
    }

    /// Discards every snapshot and starts over from `baseline`.
    pub fn reset(&mut self, baseline: T) {
        self.entries.clear();
        self.entries.push_back(baseline);
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<'a, T> IntoIterator for &'a SnapshotHistory<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

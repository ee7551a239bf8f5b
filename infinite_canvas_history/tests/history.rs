// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `infinite_canvas_history` crate.
//!
//! These exercise the bound and the undo floor with numbered snapshots so
//! that eviction order is easy to read off.

use infinite_canvas_history::{DEFAULT_MAX_HISTORY, SnapshotHistory};

#[test]
fn default_bound_is_fifty() {
    let history = SnapshotHistory::<u32>::default();
    assert_eq!(history.capacity(), DEFAULT_MAX_HISTORY);
    assert_eq!(DEFAULT_MAX_HISTORY, 50);
}

#[test]
fn fifty_one_pushes_keep_fifty() {
    let mut history = SnapshotHistory::new(50);
    for n in 1..=51_u32 {
        history.push(n);
    }
    assert_eq!(history.len(), 50);
    assert_eq!(history.oldest(), Some(&2));
    assert_eq!(history.current(), Some(&51));
}

#[test]
fn oldest_retained_is_n_minus_49() {
    for n in [51_u32, 75, 200] {
        let mut history = SnapshotHistory::new(50);
        for k in 1..=n {
            history.push(k);
            assert!(history.len() <= 50);
        }
        assert_eq!(history.len(), 50);
        assert_eq!(history.oldest(), Some(&(n - 49)));

        // Strict FIFO: retained snapshots are contiguous and in push order.
        let retained: Vec<u32> = history.iter().copied().collect();
        let expected: Vec<u32> = (n - 49..=n).collect();
        assert_eq!(retained, expected);
    }
}

#[test]
fn undo_on_singleton_is_stable() {
    let mut history = SnapshotHistory::with_baseline(50, "baseline");
    let revision = history.revision();
    assert_eq!(history.undo(), None);
    assert_eq!(history.len(), 1);
    assert_eq!(history.current(), Some(&"baseline"));
    assert_eq!(history.revision(), revision);
}

#[test]
fn repeated_undo_never_drops_below_one() {
    let mut history = SnapshotHistory::with_baseline(50, 0_u32);
    for n in 1..=10 {
        history.push(n);
    }
    for _ in 0..100 {
        let _ = history.undo();
        assert!(history.len() >= 1);
    }
    assert_eq!(history.len(), 1);
    assert_eq!(history.current(), Some(&0));
    assert!(!history.can_undo());
}

#[test]
fn undo_after_eviction_floors_at_oldest_retained() {
    let mut history = SnapshotHistory::new(3);
    for n in 0..6_u32 {
        history.push(n);
    }
    assert_eq!(history.undo(), Some(&4));
    assert_eq!(history.undo(), Some(&3));
    assert_eq!(history.undo(), None);
    assert_eq!(history.current(), Some(&3));
}

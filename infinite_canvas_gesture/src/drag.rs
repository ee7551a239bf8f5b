// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer tracking for one press-to-release gesture.
//!
//! [`DragTracker`] remembers where a gesture started and where the pointer
//! was last seen. The classifier uses the start position for the touch
//! reclassification threshold and the last position as the pan anchor.
//!
//! ## Usage
//!
//! 1) Call [`DragTracker::start`] on press.
//! 2) On each move, call [`DragTracker::update`] to get the delta since the
//!    previous position.
//! 3) Use [`DragTracker::exceeds_per_axis`] to test the distance travelled
//!    from the start.
//! 4) Call [`DragTracker::end`] on release.
//!
//! ```
//! use kurbo::Point;
//! use infinite_canvas_gesture::drag::DragTracker;
//!
//! let mut drag = DragTracker::default();
//! drag.start(Point::new(10.0, 20.0));
//!
//! let delta = drag.update(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!((delta.x, delta.y), (5.0, 5.0));
//!
//! assert!(!drag.exceeds_per_axis(Point::new(15.0, 25.0), 10.0));
//! assert!(drag.exceeds_per_axis(Point::new(21.0, 20.0), 10.0));
//! ```

use kurbo::{Point, Vec2};

/// Start and last-seen pointer positions of an active gesture.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragTracker {
    /// Position at which the gesture started.
    pub start_pos: Option<Point>,
    /// Last recorded pointer position.
    pub last_pos: Option<Point>,
}

impl DragTracker {
    /// Begins tracking from `pos`, discarding any previous gesture.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Records `pos` and returns the movement since the last position.
    ///
    /// Returns `None` when no gesture is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        delta
    }

    /// Moves the anchor to `pos` without reporting a delta.
    ///
    /// The start position is kept, so threshold checks still measure from
    /// the original press.
    pub fn rebase(&mut self, pos: Point) {
        if self.start_pos.is_some() {
            self.last_pos = Some(pos);
        }
    }

    /// Offset of `current` from the gesture start.
    #[must_use]
    pub fn total_offset(&self, current: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current - start)
    }

    /// Returns `true` if `current` is more than `threshold` away from the
    /// start along either axis.
    #[must_use]
    pub fn exceeds_per_axis(&self, current: Point, threshold: f64) -> bool {
        self.total_offset(current)
            .is_some_and(|d| d.x.abs() > threshold || d.y.abs() > threshold)
    }

    /// Stops tracking.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Returns `true` while a gesture is being tracked.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start_pos.is_some()
    }
}

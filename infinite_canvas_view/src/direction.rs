// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Direction of a single discrete zoom step.
///
/// Zooming is deliberately a binary signal rather than a continuous delta so
/// that each step multiplies the scale by a fixed factor (see
/// [`crate::Viewport::set_zoom_steps`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomDirection {
    /// Magnify: content grows on screen.
    In,
    /// Shrink: content gets smaller on screen.
    Out,
}

impl ZoomDirection {
    /// Maps a wheel `delta_y` onto a zoom step.
    ///
    /// Scrolling up (negative delta) zooms in, scrolling down zooms out. A
    /// zero delta (for example a purely horizontal scroll) is not a zoom.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if delta_y < 0.0 {
            Some(Self::In)
        } else if delta_y > 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }
}

// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

/// Default stroke width in canvas pixels.
pub const DEFAULT_STROKE_WIDTH: f64 = 5.0;

/// Width and color of freehand strokes.
///
/// Segments are always drawn with round caps and round joins, so consecutive
/// segments of a stroke join seamlessly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke width in canvas pixels.
    pub width: f64,
    /// Stroke color.
    pub color: Color,
}

impl StrokeStyle {
    /// Creates a style.
    #[must_use]
    pub const fn new(width: f64, color: Color) -> Self {
        Self { width, color }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new(DEFAULT_STROKE_WIDTH, Color::BLACK)
    }
}

// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use infinite_canvas_raster::{RasterSurface, StrokeStyle};
use kurbo::Point;
use peniko::Color;

/// Turns a sequence of virtual-space points into connected segments.
///
/// The renderer only remembers the current style and the last point of the
/// stroke in progress; pixels live on the surface.
#[derive(Clone, Debug, Default)]
pub struct StrokeRenderer {
    style: StrokeStyle,
    last: Option<Point>,
}

impl StrokeRenderer {
    /// Creates an idle renderer.
    #[must_use]
    pub fn new(style: StrokeStyle) -> Self {
        Self { style, last: None }
    }

    /// Current style.
    #[must_use]
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Sets the width of subsequent segments. Non-finite or non-positive
    /// widths are ignored.
    pub fn set_stroke_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.style.width = width;
        }
    }

    /// Sets the color of subsequent segments.
    pub fn set_stroke_color(&mut self, color: Color) {
        self.style.color = color;
    }

    /// Returns `true` while a stroke is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }

    /// Last point of the stroke in progress.
    #[must_use]
    pub fn last_point(&self) -> Option<Point> {
        self.last
    }

    /// Starts a stroke at `at`. Nothing is drawn until the first move.
    pub fn begin(&mut self, at: Point) {
        self.last = Some(at);
    }

    /// Draws a segment from the last point to `to`.
    ///
    /// Returns `false` when no stroke is in progress.
    pub fn extend_to<S: RasterSurface + ?Sized>(&mut self, surface: &mut S, to: Point) -> bool {
        let Some(from) = self.last.replace(to) else {
            return false;
        };
        surface.draw_segment(from, to, &self.style);
        true
    }

    /// Finishes the stroke in progress.
    pub fn end(&mut self) {
        self.last = None;
    }
}

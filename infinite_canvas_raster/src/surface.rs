// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use peniko::Color;

use crate::{Bitmap, PixelSnapshot, RasterError, StrokeStyle};

/// A fixed-size RGBA drawing surface addressed in canvas pixels.
///
/// Coordinates are virtual canvas coordinates: `(0, 0)` is the top-left
/// pixel corner and `(width, height)` the bottom-right. Drawing outside the
/// surface is clipped silently.
pub trait RasterSurface {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// The surface extent as a rectangle.
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width()), f64::from(self.height()))
    }

    /// Strokes a straight segment with round caps and joins.
    fn draw_segment(&mut self, from: Point, to: Point, style: &StrokeStyle);

    /// Composites a solid rectangle source-over.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Replaces every pixel with `color`.
    fn fill(&mut self, color: Color);

    /// Captures a full copy of the pixels.
    fn read_pixels(&self) -> PixelSnapshot;

    /// Restores pixels from a snapshot.
    ///
    /// Returns `false`, leaving the surface untouched, when the snapshot
    /// dimensions differ from the surface.
    fn write_pixels(&mut self, snapshot: &PixelSnapshot) -> bool;

    /// Composites `bitmap` scaled into `dest`.
    fn draw_bitmap(&mut self, bitmap: &Bitmap, dest: Rect);

    /// Encodes the full surface as PNG.
    fn encode_png(&self) -> Result<Vec<u8>, RasterError>;
}

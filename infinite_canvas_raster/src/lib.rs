// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Infinite Canvas Raster: the pixel surface behind a freehand canvas.
//!
//! - [`RasterSurface`]: the drawing operations the canvas needs (round-capped
//!   segments, rectangles, full fills, bitmap compositing, pixel snapshots,
//!   PNG encoding).
//! - [`PixmapSurface`]: a CPU implementation over an `image::RgbaImage`.
//!   Segments are rasterized with `vello_cpu` into a tile covering only the
//!   segment and then composited source-over, so a stroke costs the same on a
//!   small canvas as on a 5000×5000 one.
//! - [`Bitmap`] and [`fit_within`]: decoding uploaded images and fitting them
//!   into a bounding box.
//!
//! ```
//! use infinite_canvas_raster::{PixmapSurface, RasterSurface, StrokeStyle};
//! use kurbo::Point;
//! use peniko::Color;
//!
//! let mut surface = PixmapSurface::new(64, 64, Color::WHITE);
//! let before = surface.read_pixels();
//! surface.draw_segment(Point::new(8.0, 32.0), Point::new(56.0, 32.0), &StrokeStyle::default());
//! assert_ne!(surface.read_pixels(), before);
//!
//! assert!(surface.write_pixels(&before));
//! assert_eq!(surface.read_pixels(), before);
//! ```

mod bitmap;
mod error;
mod pixmap;
mod segment;
mod snapshot;
mod style;
mod surface;

pub use bitmap::{Bitmap, fit_within};
pub use error::RasterError;
pub use pixmap::PixmapSurface;
pub use snapshot::PixelSnapshot;
pub use style::{DEFAULT_STROKE_WIDTH, StrokeStyle};
pub use surface::RasterSurface;

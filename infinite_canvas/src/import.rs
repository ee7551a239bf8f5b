// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use infinite_canvas_raster::fit_within;
use kurbo::{Point, Rect, Size};

/// Where an imported image lands on the virtual canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImagePlacement {
    /// Top-left corner in virtual coordinates.
    pub origin: Point,
    /// Size after fitting.
    pub size: Size,
}

impl ImagePlacement {
    /// Fits `image` within `max` and centers it on a canvas of size `canvas`.
    ///
    /// ```
    /// use infinite_canvas::ImagePlacement;
    /// use kurbo::{Point, Size};
    ///
    /// let placed = ImagePlacement::compute(
    ///     Size::new(1000.0, 800.0),
    ///     Size::new(500.0, 500.0),
    ///     Size::new(5000.0, 5000.0),
    /// );
    /// assert_eq!(placed.size, Size::new(500.0, 400.0));
    /// assert_eq!(placed.origin, Point::new(2250.0, 2300.0));
    /// ```
    #[must_use]
    pub fn compute(image: Size, max: Size, canvas: Size) -> Self {
        let size = fit_within(image, max);
        let origin = Point::new(
            (canvas.width - size.width) / 2.0,
            (canvas.height - size.height) / 2.0,
        );
        Self { origin, size }
    }

    /// The placed image as a rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use image::RgbaImage;

/// Immutable full copy of a surface's pixels, used for undo.
///
/// Pixels are straight (non-premultiplied) RGBA8, row-major, top row first.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelSnapshot {
    image: RgbaImage,
}

impl PixelSnapshot {
    /// Wraps captured pixels.
    #[must_use]
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Returns the RGBA value at `(x, y)`, or `None` outside the snapshot.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Raw RGBA bytes.
    #[must_use]
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Memory held by the pixel buffer, in bytes.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.image.as_raw().len()
    }

    /// Borrows the pixels as an image.
    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

impl core::fmt::Debug for PixelSnapshot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PixelSnapshot")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

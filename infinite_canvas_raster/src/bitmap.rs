// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use image::RgbaImage;
use kurbo::Size;

use crate::RasterError;

/// A decoded RGBA8 bitmap ready to be composited onto a surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    image: RgbaImage,
}

impl Bitmap {
    /// Decodes an uploaded file.
    ///
    /// The format is sniffed from the leading bytes. Input that is not an
    /// image at all yields [`RasterError::UnsupportedFormat`].
    pub fn decode(bytes: &[u8]) -> Result<Self, RasterError> {
        let format = image::guess_format(bytes).map_err(|_| RasterError::UnsupportedFormat)?;
        let decoded =
            image::load_from_memory_with_format(bytes, format).map_err(RasterError::Decode)?;
        Self::from_image(decoded.into_rgba8())
    }

    /// Wraps an already decoded image.
    pub fn from_image(image: RgbaImage) -> Result<Self, RasterError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(RasterError::EmptyImage);
        }
        Ok(Self { image })
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

    /// Pixel dimensions as a [`Size`].
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width()), f64::from(self.height()))
    }

    /// Borrows the pixels.
    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

/// Uniformly downscales `size` so that it fits inside `max`.
///
/// Sizes already within bounds are returned unchanged; images are never
/// upscaled.
#[must_use]
pub fn fit_within(size: Size, max: Size) -> Size {
    if size.width <= max.width && size.height <= max.height {
        return size;
    }
    let ratio = (max.width / size.width).min(max.height / size.height);
    Size::new(size.width * ratio, size.height * ratio)
}

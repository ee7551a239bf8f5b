// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors produced while decoding or encoding raster data.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The bytes do not start with the signature of any known image format.
    #[error("input is not a recognized image format")]
    UnsupportedFormat,

    /// The format was recognized but decoding failed.
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    /// The decoded image has no pixels.
    #[error("image has zero width or height")]
    EmptyImage,

    /// Encoding the surface as PNG failed.
    #[error("failed to encode PNG: {0}")]
    Encode(#[source] image::ImageError),
}

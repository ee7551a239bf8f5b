// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CPU surface backed by an [`RgbaImage`].

use image::codecs::png::PngEncoder;
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, Pixel, Rgba, RgbaImage};
use kurbo::{Point, Rect};
use peniko::Color;

use crate::segment::{pixel_span, rasterize_segment};
use crate::{Bitmap, PixelSnapshot, RasterError, RasterSurface, StrokeStyle};

fn rgba(color: Color) -> Rgba<u8> {
    let c = color.to_rgba8();
    Rgba([c.r, c.g, c.b, c.a])
}

/// Rounds a non-negative extent to whole pixels, never below one.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "clamped into [1, u32::MAX]"
)]
fn whole_pixels(extent: f64) -> u32 {
    extent.round().clamp(1.0, f64::from(u32::MAX)) as u32
}

/// The default [`RasterSurface`]: straight-alpha RGBA8 pixels in memory.
#[derive(Clone)]
pub struct PixmapSurface {
    image: RgbaImage,
}

impl PixmapSurface {
    /// Allocates a `width` × `height` surface filled with `background`.
    #[must_use]
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, rgba(background)),
        }
    }

    /// Borrows the pixels.
    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Returns the RGBA value at `(x, y)`, or `None` outside the surface.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }
}

impl core::fmt::Debug for PixmapSurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PixmapSurface")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .finish_non_exhaustive()
    }
}

impl RasterSurface for PixmapSurface {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn draw_segment(&mut self, from: Point, to: Point, style: &StrokeStyle) {
        let Some(tile) = rasterize_segment(from, to, style, self.width(), self.height()) else {
            return;
        };
        for (row, line) in tile.pixels.chunks_exact(tile.width as usize).enumerate() {
            #[allow(clippy::cast_possible_truncation, reason = "tile rows fit in u16")]
            let y = tile.y + row as u32;
            for (col, px) in line.iter().enumerate() {
                if px[3] == 0 {
                    continue;
                }
                #[allow(clippy::cast_possible_truncation, reason = "tile columns fit in u16")]
                let x = tile.x + col as u32;
                self.image.get_pixel_mut(x, y).blend(&Rgba(*px));
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let rect = rect.abs();
        let Some((x0, x1)) = pixel_span(rect.x0, rect.x1, self.width()) else {
            return;
        };
        let Some((y0, y1)) = pixel_span(rect.y0, rect.y1, self.height()) else {
            return;
        };
        let src = rgba(color);
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.get_pixel_mut(x, y).blend(&src);
            }
        }
    }

    fn fill(&mut self, color: Color) {
        let px = rgba(color);
        for dst in self.image.pixels_mut() {
            *dst = px;
        }
    }

    fn read_pixels(&self) -> PixelSnapshot {
        PixelSnapshot::new(self.image.clone())
    }

    fn write_pixels(&mut self, snapshot: &PixelSnapshot) -> bool {
        if snapshot.width() != self.width() || snapshot.height() != self.height() {
            tracing::warn!(
                surface_width = self.width(),
                surface_height = self.height(),
                snapshot_width = snapshot.width(),
                snapshot_height = snapshot.height(),
                "refusing to restore snapshot with mismatched dimensions"
            );
            return false;
        }
        self.image.clone_from(snapshot.image());
        true
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, dest: Rect) {
        let dest = dest.abs();
        if !(dest.is_finite() && dest.width() > 0.0 && dest.height() > 0.0) {
            return;
        }
        let width = whole_pixels(dest.width());
        let height = whole_pixels(dest.height());
        #[allow(
            clippy::cast_possible_truncation,
            reason = "offsets far outside the canvas are clipped by overlay"
        )]
        let (x, y) = (dest.x0.round() as i64, dest.y0.round() as i64);
        if (width, height) == (bitmap.width(), bitmap.height()) {
            imageops::overlay(&mut self.image, bitmap.image(), x, y);
        } else {
            let scaled = imageops::resize(bitmap.image(), width, height, FilterType::Triangle);
            imageops::overlay(&mut self.image, &scaled, x, y);
        }
    }

    fn encode_png(&self) -> Result<Vec<u8>, RasterError> {
        let mut buf = Vec::new();
        PngEncoder::new(&mut buf)
            .write_image(
                self.image.as_raw(),
                self.width(),
                self.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(RasterError::Encode)?;
        Ok(buf)
    }
}

// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session configuration.

use infinite_canvas_gesture::{
    DEFAULT_PAN_KEY, DEFAULT_PAN_RECLASSIFY_THRESHOLD, DEFAULT_PINCH_ZOOM_THRESHOLD, GestureConfig,
    PinchZoomMapping,
};
use infinite_canvas_history::DEFAULT_MAX_HISTORY;
use infinite_canvas_raster::{DEFAULT_STROKE_WIDTH, StrokeStyle};
use infinite_canvas_view::{
    DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_ZOOM_STEP_IN, DEFAULT_ZOOM_STEP_OUT,
};
use kurbo::Size;
use peniko::Color;

use crate::{CanvasError, CanvasResult};

/// Default virtual canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 5000;
/// Default virtual canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 5000;
/// Imported images wider than this are scaled down.
pub const DEFAULT_MAX_IMPORT_WIDTH: f64 = 500.0;
/// Imported images taller than this are scaled down.
pub const DEFAULT_MAX_IMPORT_HEIGHT: f64 = 500.0;

/// Tunables for a [`CanvasSession`](crate::CanvasSession).
///
/// `Default` carries the stock values of the drawing tool. With the `serde`
/// feature, missing fields in a serialized document fall back to those
/// defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CanvasConfig {
    /// Virtual canvas width in pixels.
    pub canvas_width: u32,
    /// Virtual canvas height in pixels.
    pub canvas_height: u32,
    /// Number of undo snapshots retained, including the baseline.
    pub max_history: usize,
    /// Bounding width for imported images.
    pub max_import_width: f64,
    /// Bounding height for imported images.
    pub max_import_height: f64,
    /// Lower zoom limit.
    pub min_scale: f64,
    /// Upper zoom limit.
    pub max_scale: f64,
    /// Scale multiplier for one zoom-in step, greater than 1.
    pub zoom_step_in: f64,
    /// Scale multiplier for one zoom-out step, between 0 and 1.
    pub zoom_step_out: f64,
    /// Touch travel in screen pixels after which a stroke becomes a pan.
    pub pan_reclassify_threshold: f64,
    /// Relative finger distance change that triggers a pinch zoom step,
    /// between 0 and 1.
    pub pinch_zoom_threshold: f64,
    /// Pinch direction mapping.
    pub pinch_mapping: PinchZoomMapping,
    /// Key code that turns presses into pans while held.
    pub pan_modifier_key: String,
    /// Canvas fill color, used at creation and by `clear`.
    #[cfg_attr(feature = "serde", serde(with = "rgba8"))]
    pub background: Color,
    /// Initial stroke width.
    pub stroke_width: f64,
    /// Initial stroke color.
    #[cfg_attr(feature = "serde", serde(with = "rgba8"))]
    pub stroke_color: Color,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            max_history: DEFAULT_MAX_HISTORY,
            max_import_width: DEFAULT_MAX_IMPORT_WIDTH,
            max_import_height: DEFAULT_MAX_IMPORT_HEIGHT,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            zoom_step_in: DEFAULT_ZOOM_STEP_IN,
            zoom_step_out: DEFAULT_ZOOM_STEP_OUT,
            pan_reclassify_threshold: DEFAULT_PAN_RECLASSIFY_THRESHOLD,
            pinch_zoom_threshold: DEFAULT_PINCH_ZOOM_THRESHOLD,
            pinch_mapping: PinchZoomMapping::default(),
            pan_modifier_key: DEFAULT_PAN_KEY.to_owned(),
            background: Color::WHITE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            stroke_color: Color::BLACK,
        }
    }
}

fn positive(field: &'static str, value: f64) -> CanvasResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CanvasError::InvalidConfig {
            field,
            reason: "must be finite and positive",
        })
    }
}

impl CanvasConfig {
    /// Checks that every value is usable.
    ///
    /// Canvas sides are limited to `u16::MAX` because the rasterizer
    /// addresses tiles with 16-bit dimensions.
    pub fn validate(&self) -> CanvasResult<()> {
        for (field, side) in [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
        ] {
            if side == 0 || side > u32::from(u16::MAX) {
                return Err(CanvasError::InvalidConfig {
                    field,
                    reason: "must be between 1 and 65535",
                });
            }
        }
        if self.max_history == 0 {
            return Err(CanvasError::InvalidConfig {
                field: "max_history",
                reason: "must keep at least the baseline snapshot",
            });
        }
        positive("max_import_width", self.max_import_width)?;
        positive("max_import_height", self.max_import_height)?;
        positive("min_scale", self.min_scale)?;
        positive("max_scale", self.max_scale)?;
        if self.min_scale > self.max_scale {
            return Err(CanvasError::InvalidConfig {
                field: "min_scale",
                reason: "must not exceed max_scale",
            });
        }
        positive("zoom_step_in", self.zoom_step_in)?;
        positive("zoom_step_out", self.zoom_step_out)?;
        positive("pan_reclassify_threshold", self.pan_reclassify_threshold)?;
        positive("pinch_zoom_threshold", self.pinch_zoom_threshold)?;
        positive("stroke_width", self.stroke_width)?;
        if self.zoom_step_in <= 1.0 {
            return Err(CanvasError::InvalidConfig {
                field: "zoom_step_in",
                reason: "must be greater than 1",
            });
        }
        if self.zoom_step_out >= 1.0 {
            return Err(CanvasError::InvalidConfig {
                field: "zoom_step_out",
                reason: "must be less than 1",
            });
        }
        // At 1 or more a contracting pinch can never reach the lower bound.
        if self.pinch_zoom_threshold >= 1.0 {
            return Err(CanvasError::InvalidConfig {
                field: "pinch_zoom_threshold",
                reason: "must be less than 1",
            });
        }
        if self.pan_modifier_key.is_empty() {
            return Err(CanvasError::InvalidConfig {
                field: "pan_modifier_key",
                reason: "must not be empty",
            });
        }
        Ok(())
    }

    /// Classifier settings derived from this configuration.
    #[must_use]
    pub fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            pan_reclassify_threshold: self.pan_reclassify_threshold,
            pinch_zoom_threshold: self.pinch_zoom_threshold,
            pinch_mapping: self.pinch_mapping,
        }
    }

    /// Initial stroke style.
    #[must_use]
    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle::new(self.stroke_width, self.stroke_color)
    }

    /// Bounding box for imported images.
    #[must_use]
    pub fn max_import_size(&self) -> Size {
        Size::new(self.max_import_width, self.max_import_height)
    }

    /// Memory held by a full history of RGBA snapshots of this canvas.
    #[must_use]
    pub fn worst_case_history_bytes(&self) -> u64 {
        let snapshots = u64::try_from(self.max_history).unwrap_or(u64::MAX);
        (u64::from(self.canvas_width) * u64::from(self.canvas_height) * 4).saturating_mul(snapshots)
    }
}

#[cfg(feature = "serde")]
mod rgba8 {
    use peniko::Color;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub(super) fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        let c = color.to_rgba8();
        [c.r, c.g, c.b, c.a].serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let [r, g, b, a] = <[u8; 4]>::deserialize(deserializer)?;
        Ok(Color::from_rgba8(r, g, b, a))
    }
}

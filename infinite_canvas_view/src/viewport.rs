// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

use crate::direction::ZoomDirection;

/// Smallest scale a [`Viewport`] allows unless reconfigured.
pub const DEFAULT_MIN_SCALE: f64 = 0.1;
/// Largest scale a [`Viewport`] allows unless reconfigured.
pub const DEFAULT_MAX_SCALE: f64 = 10.0;
/// Scale multiplier applied by one [`ZoomDirection::In`] step.
pub const DEFAULT_ZOOM_STEP_IN: f64 = 1.1;
/// Scale multiplier applied by one [`ZoomDirection::Out`] step.
pub const DEFAULT_ZOOM_STEP_OUT: f64 = 0.9;

/// Pan/zoom window onto the virtual canvas.
///
/// `Viewport` tracks where the viewport element sits on screen (`view_rect`),
/// a uniform `scale`, and an `offset` naming the virtual-canvas point shown
/// at the viewport's top-left corner. It can be used to:
/// - Map pointer positions into virtual-canvas space for drawing.
/// - Pan by screen-space drag deltas.
/// - Zoom in discrete steps around a screen anchor.
#[derive(Clone, Debug)]
pub struct Viewport {
    view_rect: Rect,
    scale: f64,
    offset: Vec2,
    min_scale: f64,
    max_scale: f64,
    step_in: f64,
    step_out: f64,
    virtual_to_screen: Affine,
    screen_to_virtual: Affine,
}

impl Viewport {
    /// Creates a viewport whose element occupies `view_rect` on screen.
    ///
    /// - Initial scale is `1.0`.
    /// - Initial offset is zero (virtual origin at the view rect origin).
    /// - Scale is clamped to `[0.1, 10]` and steps by `1.1` / `0.9`.
    #[must_use]
    pub fn new(view_rect: Rect) -> Self {
        let mut vp = Self {
            view_rect,
            scale: 1.0,
            offset: Vec2::ZERO,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            step_in: DEFAULT_ZOOM_STEP_IN,
            step_out: DEFAULT_ZOOM_STEP_OUT,
            virtual_to_screen: Affine::IDENTITY,
            screen_to_virtual: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// Returns the viewport element's rectangle in screen coordinates.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    /// Moves or resizes the viewport element on screen.
    ///
    /// Scale and offset are kept, so the virtual point at the top-left corner
    /// stays the same.
    pub fn set_view_rect(&mut self, rect: Rect) {
        if self.view_rect == rect {
            return;
        }
        self.view_rect = rect;
        self.rebuild_transforms();
    }

    /// Returns the current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the scale directly, clamped into the configured range.
    ///
    /// The offset is left untouched, so this zooms about the viewport's
    /// top-left corner. Use [`Viewport::zoom_about_screen_point`] to keep a
    /// different point fixed.
    pub fn set_scale(&mut self, scale: f64) {
        if !scale.is_finite() {
            return;
        }
        let clamped = scale.clamp(self.min_scale, self.max_scale);
        if (self.scale - clamped).abs() < f64::EPSILON {
            return;
        }
        self.scale = clamped;
        self.rebuild_transforms();
    }

    /// Returns the `(min, max)` scale limits.
    #[must_use]
    pub fn scale_limits(&self) -> (f64, f64) {
        (self.min_scale, self.max_scale)
    }

    /// Sets the minimum and maximum scale.
    ///
    /// The provided range is normalized so that `min <= max`. The current
    /// scale is clamped into the new range.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        let clamped = self.scale.clamp(min_scale, max_scale);
        if clamped != self.scale {
            self.scale = clamped;
            self.rebuild_transforms();
        }
    }

    /// Returns the `(in, out)` multipliers applied by one zoom step.
    #[must_use]
    pub fn zoom_steps(&self) -> (f64, f64) {
        (self.step_in, self.step_out)
    }

    /// Sets the multipliers used by [`Viewport::zoom_at`].
    ///
    /// Non-positive or non-finite factors are ignored.
    pub fn set_zoom_steps(&mut self, step_in: f64, step_out: f64) {
        if step_in.is_finite() && step_in > 0.0 {
            self.step_in = step_in;
        }
        if step_out.is_finite() && step_out > 0.0 {
            self.step_out = step_out;
        }
    }

    /// Returns the virtual-canvas point aligned with the viewport's top-left.
    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset.to_point()
    }

    /// Aligns the given virtual-canvas point with the viewport's top-left.
    pub fn set_offset(&mut self, offset: Point) {
        let offset = offset.to_vec2();
        if self.offset == offset {
            return;
        }
        self.offset = offset;
        self.rebuild_transforms();
    }

    /// Pans by a delta measured in screen pixels.
    ///
    /// Dragging right by `dx` pixels moves the content right, which moves the
    /// offset left by `dx / scale` virtual units. No clamping is applied.
    pub fn pan_by_screen(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.offset -= delta / self.scale;
        self.rebuild_transforms();
    }

    /// Applies one discrete zoom step about a screen-space anchor.
    ///
    /// The virtual point under `anchor` before the step is under it again
    /// afterwards. At a scale limit the step is a no-op.
    pub fn zoom_at(&mut self, anchor: Point, direction: ZoomDirection) {
        let factor = match direction {
            ZoomDirection::In => self.step_in,
            ZoomDirection::Out => self.step_out,
        };
        self.zoom_about_screen_point(anchor, factor);
    }

    /// Multiplies the scale by `factor` about a screen-space anchor.
    ///
    /// The resulting scale is clamped; the offset is then solved so the
    /// virtual point that was under `anchor` stays under it.
    pub fn zoom_about_screen_point(&mut self, anchor: Point, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let old_scale = self.scale;
        let new_scale = (old_scale * factor).clamp(self.min_scale, self.max_scale);
        if (new_scale - old_scale).abs() < f64::EPSILON {
            return;
        }

        let anchored = self.screen_to_virtual(anchor);
        let anchor_in_view = anchor - self.view_rect.origin();
        self.scale = new_scale;
        self.offset = anchored.to_vec2() - anchor_in_view / new_scale;
        self.rebuild_transforms();
    }

    /// Pans so that `virtual_pt` sits at the center of the viewport.
    pub fn center_on(&mut self, virtual_pt: Point) {
        let half = self.view_rect.size().to_vec2() / (2.0 * self.scale);
        self.set_offset(virtual_pt - half);
    }

    /// Converts a screen-space point (for example a pointer position) into
    /// virtual-canvas coordinates.
    #[must_use]
    pub fn screen_to_virtual(&self, pt: Point) -> Point {
        self.screen_to_virtual * pt
    }

    /// Converts a virtual-canvas point into screen coordinates.
    #[must_use]
    pub fn virtual_to_screen(&self, pt: Point) -> Point {
        self.virtual_to_screen * pt
    }

    /// Returns where the virtual canvas origin lands on screen.
    ///
    /// This is the on-screen placement of the raster surface after the
    /// offset translation and scale have been applied.
    #[must_use]
    pub fn canvas_screen_origin(&self) -> Point {
        self.virtual_to_screen(Point::ORIGIN)
    }

    /// Returns the virtual-canvas rectangle currently visible.
    ///
    /// The result is not intersected with the canvas bounds; after a large
    /// pan it may lie partly or entirely outside the canvas.
    #[must_use]
    pub fn visible_virtual_rect(&self) -> Rect {
        let p0 = self.screen_to_virtual(self.view_rect.origin());
        let p1 = self.screen_to_virtual(Point::new(self.view_rect.x1, self.view_rect.y1));
        Rect::from_points(p0, p1)
    }

    /// Returns the current virtual-to-screen transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.virtual_to_screen
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            view_rect: self.view_rect,
            visible_virtual_rect: self.visible_virtual_rect(),
            scale: self.scale,
            offset: self.offset(),
            min_scale: self.min_scale,
            max_scale: self.max_scale,
        }
    }

    fn rebuild_transforms(&mut self) {
        let view_origin = self.view_rect.origin().to_vec2();
        // Virtual → screen: scale, then shift so `offset` lands on the view origin.
        self.virtual_to_screen =
            Affine::translate(view_origin - self.offset * self.scale) * Affine::scale(self.scale);
        self.screen_to_virtual = self.virtual_to_screen.inverse();
    }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Viewport element rectangle in screen coordinates.
    pub view_rect: Rect,
    /// Virtual-canvas rectangle currently visible through the viewport.
    pub visible_virtual_rect: Rect,
    /// Current uniform scale.
    pub scale: f64,
    /// Virtual point aligned with the viewport's top-left corner.
    pub offset: Point,
    /// Minimum scale.
    pub min_scale: f64,
    /// Maximum scale.
    pub max_scale: f64,
}

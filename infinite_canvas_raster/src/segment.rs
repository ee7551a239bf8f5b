// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment rasterization with `vello_cpu`.
//!
//! Each segment is rendered into a tile just large enough to hold it (plus an
//! antialiasing margin), clipped to the canvas. The tile is then composited
//! by the caller, so the cost scales with the segment and not the canvas.

use kurbo::Point;
use vello_cpu::kurbo::{Affine as CpuAffine, BezPath, Cap, Circle, Join, Shape, Stroke};
use vello_cpu::{Pixmap, RenderContext, RenderMode, RenderSettings};

use crate::StrokeStyle;

/// Extra pixels around the stroke outline so antialiased edges are kept.
const AA_MARGIN: f64 = 1.0;
/// Segments shorter than this are drawn as a round dot.
const DOT_EPSILON: f64 = 1e-6;
const PATH_TOLERANCE: f64 = 0.1;

/// Rendered pixels of one segment, positioned on the canvas.
#[derive(Debug)]
pub(crate) struct SegmentTile {
    pub(crate) x: u32,
    pub(crate) y: u32,
    pub(crate) width: u32,
    /// Straight-alpha RGBA, row-major.
    pub(crate) pixels: Vec<[u8; 4]>,
}

/// Integer pixel span `[start, end)` covering `[lo, hi]`, clipped to `[0, limit)`.
pub(crate) fn pixel_span(lo: f64, hi: f64, limit: u32) -> Option<(u32, u32)> {
    let start = lo.floor().max(0.0);
    let end = hi.ceil().min(f64::from(limit));
    if start >= end {
        return None;
    }
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "both ends are clamped into [0, limit] with limit: u32"
    )]
    let span = (start as u32, end as u32);
    Some(span)
}

/// Renders a round-capped, round-joined segment clipped to a
/// `canvas_width` × `canvas_height` surface.
///
/// Returns `None` when nothing of the segment lands on the canvas.
pub(crate) fn rasterize_segment(
    from: Point,
    to: Point,
    style: &StrokeStyle,
    canvas_width: u32,
    canvas_height: u32,
) -> Option<SegmentTile> {
    if !(from.is_finite() && to.is_finite() && style.width.is_finite() && style.width > 0.0) {
        return None;
    }
    let reach = style.width / 2.0 + AA_MARGIN;
    let (x0, x1) = pixel_span(from.x.min(to.x) - reach, from.x.max(to.x) + reach, canvas_width)?;
    let (y0, y1) = pixel_span(from.y.min(to.y) - reach, from.y.max(to.y) + reach, canvas_height)?;
    let width = u16::try_from(x1 - x0).ok()?;
    let height = u16::try_from(y1 - y0).ok()?;

    let settings = RenderSettings {
        render_mode: RenderMode::OptimizeSpeed,
        ..RenderSettings::default()
    };
    let mut ctx = RenderContext::new_with(width, height, settings);
    ctx.set_transform(CpuAffine::translate((-f64::from(x0), -f64::from(y0))));
    ctx.set_paint(style.color);

    let from = vello_cpu::kurbo::Point::new(from.x, from.y);
    let to = vello_cpu::kurbo::Point::new(to.x, to.y);
    if (to - from).hypot() < DOT_EPSILON {
        let dot = Circle::new(from, style.width / 2.0).to_path(PATH_TOLERANCE);
        ctx.fill_path(&dot);
    } else {
        let mut stroke = Stroke::new(style.width);
        stroke.join = Join::Round;
        stroke.start_cap = Cap::Round;
        stroke.end_cap = Cap::Round;
        ctx.set_stroke(stroke);

        let mut path = BezPath::new();
        path.move_to(from);
        path.line_to(to);
        ctx.stroke_path(&path);
    }

    let mut pixmap = Pixmap::new(width, height);
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);

    let pixels = pixmap
        .take_unpremultiplied()
        .into_iter()
        .map(|p| [p.r, p.g, p.b, p.a])
        .collect();

    Some(SegmentTile {
        x: x0,
        y: y0,
        width: u32::from(width),
        pixels,
    })
}

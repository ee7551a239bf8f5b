// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Infinite Canvas View: the viewport over a fixed-size virtual canvas.
//!
//! A drawing session keeps one large raster (the *virtual canvas*) and shows
//! a window into it. This crate models that window:
//! - A uniform `scale` clamped to a configurable range (default `[0.1, 10]`).
//! - An `offset`: the virtual-canvas point aligned with the viewport's
//!   top-left corner. Offsets are never clamped; panning may expose space
//!   outside the canvas.
//! - Conversion between screen (pointer) coordinates and virtual-canvas
//!   coordinates in both directions.
//! - Discrete zoom steps about a screen anchor that keep the content under
//!   the anchor stationary.
//!
//! The screen model is
//! `screen = view_origin + (virtual - offset) * scale`, where `view_origin`
//! is the top-left of the viewport element on screen.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use infinite_canvas_view::{Viewport, ZoomDirection};
//!
//! let mut view = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let cursor = Point::new(100.0, 100.0);
//! let before = view.screen_to_virtual(cursor);
//!
//! view.zoom_at(cursor, ZoomDirection::In);
//! let after = view.screen_to_virtual(cursor);
//!
//! assert!((view.scale() - 1.1).abs() < 1e-9);
//! assert!((before - after).hypot() < 1e-9);
//! ```
//!
//! It does **not** own any pixels or input handling. Gesture recognition and
//! the raster surface live in sibling crates.
//!
//! This crate is `no_std`.

#![no_std]

mod direction;
mod viewport;

pub use direction::ZoomDirection;
pub use viewport::{
    DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_ZOOM_STEP_IN, DEFAULT_ZOOM_STEP_OUT, Viewport,
    ViewportDebugInfo,
};

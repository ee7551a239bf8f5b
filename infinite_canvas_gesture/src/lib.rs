// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Infinite Canvas Gesture: input normalization and gesture classification.
//!
//! A freehand canvas has to decide, for every press, whether the user is
//! drawing, dragging the view, or pinching to zoom. This crate splits that
//! into three small pieces:
//!
//! - [`input`]: [`RawInput`] mirrors platform events; [`normalize`] maps them
//!   onto one [`InputEvent`] representation so that mouse and touch go
//!   through the same code path.
//! - [`GestureClassifier`]: a single state machine (`Idle`, `Drawing`,
//!   `Panning`, `Pinching`) answering each event with at most one
//!   [`GestureAction`].
//! - [`drag`]: [`DragTracker`], the start/last pointer bookkeeping behind pan
//!   anchors and the touch reclassification threshold.
//!
//! The classifier owns no canvas or viewport. Callers apply the actions:
//! capture an undo snapshot on [`GestureAction::BeginStroke`], draw on
//! [`GestureAction::StrokeTo`], pan or zoom the viewport, and so on.
//!
//! ## Rules
//!
//! - A press starts a stroke, unless the pan modifier is held, in which case
//!   it starts a pan.
//! - A touch stroke that travels more than the reclassify threshold
//!   (10 px by default) along either axis becomes a pan for the rest of the
//!   gesture. Mouse strokes never reclassify.
//! - Two fingers start a pinch; each time the finger distance changes by more
//!   than the pinch threshold (10% by default) relative to the last step, one
//!   zoom step is emitted about the midpoint.
//! - Releasing the pan modifier force-resets to `Idle`.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use infinite_canvas_gesture::{
//!     DEFAULT_PAN_KEY, GestureAction, GestureClassifier, RawInput, normalize,
//! };
//!
//! let mut gestures = GestureClassifier::default();
//! let mut actions = Vec::new();
//! for raw in [
//!     RawInput::MouseDown { pos: Point::new(10.0, 10.0) },
//!     RawInput::MouseMove { pos: Point::new(20.0, 15.0) },
//!     RawInput::MouseUp,
//! ] {
//!     if let Some(event) = normalize(raw, DEFAULT_PAN_KEY) {
//!         actions.extend(gestures.handle(event));
//!     }
//! }
//! assert_eq!(
//!     actions,
//!     [
//!         GestureAction::BeginStroke(Point::new(10.0, 10.0)),
//!         GestureAction::StrokeTo(Point::new(20.0, 15.0)),
//!         GestureAction::EndStroke,
//!     ]
//! );
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod classifier;
pub mod drag;
pub mod input;

pub use classifier::{
    DEFAULT_PAN_RECLASSIFY_THRESHOLD, DEFAULT_PINCH_ZOOM_THRESHOLD, GestureAction,
    GestureClassifier, GestureConfig, GestureMode, PinchZoomMapping,
};
pub use drag::DragTracker;
pub use input::{DEFAULT_PAN_KEY, InputEvent, PinchPhase, PointerKind, RawInput, normalize};

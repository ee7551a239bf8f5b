// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw/pan/pinch classification.
//!
//! [`GestureClassifier`] is a single state machine consulted for every
//! normalized [`InputEvent`]. It never touches the canvas or the viewport;
//! it answers each event with at most one [`GestureAction`] that the caller
//! applies.
//!
//! ```text
//!            down                      down + pan key
//!   Idle ──────────▶ Drawing    Idle ────────────────▶ Panning
//!    ▲                 │ touch moved > threshold           │
//!    │                 └──────────────────────────────────▶│
//!    │ up / pan key released                               │
//!    └─────────────────────────────────────────────────────┘
//! ```
//!
//! Two fingers switch to `Pinching` from any state until the touch ends.

use kurbo::{Point, Vec2};

use infinite_canvas_view::ZoomDirection;

use crate::drag::DragTracker;
use crate::input::{InputEvent, PinchPhase, PointerKind};

/// Touch travel, in screen pixels along either axis, after which a touch
/// stroke is reclassified as a pan.
pub const DEFAULT_PAN_RECLASSIFY_THRESHOLD: f64 = 10.0;
/// Relative change in finger distance that triggers one pinch zoom step.
pub const DEFAULT_PINCH_ZOOM_THRESHOLD: f64 = 0.1;

/// Current interaction mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureMode {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A freehand stroke is being drawn.
    Drawing,
    /// The viewport is being dragged.
    Panning,
    /// Two fingers are down.
    Pinching,
}

/// Which way a pinch maps onto zoom steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PinchZoomMapping {
    /// Fingers moving apart zoom in, matching the wheel path.
    #[default]
    SpreadZoomsIn,
    /// Fingers moving together zoom in.
    ContractZoomsIn,
}

impl PinchZoomMapping {
    fn direction(self, spread: bool) -> ZoomDirection {
        match (self, spread) {
            (Self::SpreadZoomsIn, true) | (Self::ContractZoomsIn, false) => ZoomDirection::In,
            (Self::SpreadZoomsIn, false) | (Self::ContractZoomsIn, true) => ZoomDirection::Out,
        }
    }
}

/// Tunables for [`GestureClassifier`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// See [`DEFAULT_PAN_RECLASSIFY_THRESHOLD`].
    pub pan_reclassify_threshold: f64,
    /// See [`DEFAULT_PINCH_ZOOM_THRESHOLD`].
    pub pinch_zoom_threshold: f64,
    /// Direction mapping for pinch zoom steps.
    pub pinch_mapping: PinchZoomMapping,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pan_reclassify_threshold: DEFAULT_PAN_RECLASSIFY_THRESHOLD,
            pinch_zoom_threshold: DEFAULT_PINCH_ZOOM_THRESHOLD,
            pinch_mapping: PinchZoomMapping::default(),
        }
    }
}

/// What the caller should do in response to an event.
///
/// Positions are in screen space; mapping to the virtual canvas is the
/// caller's job, since the viewport may change between events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureAction {
    /// Capture an undo snapshot and start a stroke at this point.
    BeginStroke(Point),
    /// Extend the current stroke to this point.
    StrokeTo(Point),
    /// The current stroke is finished.
    EndStroke,
    /// The stroke ended before drawing anything; its snapshot can be dropped.
    ///
    /// Emitted when a touch turns into a pan or a pinch before its first
    /// move was drawn.
    CancelStroke,
    /// Pan the viewport by this screen-space delta.
    Pan(Vec2),
    /// The current pan is finished.
    EndPan,
    /// Apply one zoom step about `anchor`.
    Zoom {
        /// Screen-space point that must stay fixed.
        anchor: Point,
        /// Step direction.
        direction: ZoomDirection,
    },
}

/// State machine turning normalized input into canvas actions.
#[derive(Clone, Debug, Default)]
pub struct GestureClassifier {
    config: GestureConfig,
    mode: GestureMode,
    pointer: Option<PointerKind>,
    drag: DragTracker,
    pinch_baseline: f64,
    pan_modifier: bool,
    /// Set once the current stroke has emitted a `StrokeTo`.
    stroked: bool,
}

impl GestureClassifier {
    /// Creates an idle classifier.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    /// Returns `true` while the pan modifier is held.
    #[must_use]
    pub fn pan_modifier_held(&self) -> bool {
        self.pan_modifier
    }

    /// Device that started the current gesture, if any.
    #[must_use]
    pub fn pointer_kind(&self) -> Option<PointerKind> {
        self.pointer
    }

    /// Baseline finger distance of the current pinch.
    #[must_use]
    pub fn pinch_baseline(&self) -> f64 {
        self.pinch_baseline
    }

    /// Feeds one event through the state machine.
    pub fn handle(&mut self, event: InputEvent) -> Option<GestureAction> {
        match event {
            InputEvent::PointerDown { pos, kind } => self.pointer_down(pos, kind),
            InputEvent::PointerMove { pos, kind } => self.pointer_move(pos, kind),
            InputEvent::PointerUp { .. } => self.finish(),
            InputEvent::Pinch { phase, a, b } => self.pinch(phase, a, b),
            InputEvent::Wheel { pos, delta_y } => ZoomDirection::from_wheel_delta(delta_y)
                .map(|direction| GestureAction::Zoom {
                    anchor: pos,
                    direction,
                }),
            InputEvent::PanModifier { held } => {
                self.pan_modifier = held;
                if held { None } else { self.finish() }
            }
        }
    }

    /// Abandons any gesture in progress, returning the closing action.
    pub fn reset(&mut self) -> Option<GestureAction> {
        self.finish()
    }

    fn pointer_down(&mut self, pos: Point, kind: PointerKind) -> Option<GestureAction> {
        if self.mode != GestureMode::Idle {
            return None;
        }
        self.pointer = Some(kind);
        self.stroked = false;
        self.drag.start(pos);
        if self.pan_modifier {
            self.mode = GestureMode::Panning;
            None
        } else {
            self.mode = GestureMode::Drawing;
            Some(GestureAction::BeginStroke(pos))
        }
    }

    fn pointer_move(&mut self, pos: Point, kind: PointerKind) -> Option<GestureAction> {
        if self.pointer != Some(kind) {
            return None;
        }
        match self.mode {
            GestureMode::Drawing => {
                if kind == PointerKind::Touch
                    && self
                        .drag
                        .exceeds_per_axis(pos, self.config.pan_reclassify_threshold)
                {
                    // One-way: the rest of this touch pans from here.
                    self.mode = GestureMode::Panning;
                    self.drag.rebase(pos);
                    let closing = self.closing_stroke();
                    self.stroked = false;
                    return Some(closing);
                }
                self.drag.update(pos);
                self.stroked = true;
                Some(GestureAction::StrokeTo(pos))
            }
            GestureMode::Panning => self
                .drag
                .update(pos)
                .filter(|delta| *delta != Vec2::ZERO)
                .map(GestureAction::Pan),
            GestureMode::Idle | GestureMode::Pinching => None,
        }
    }

    fn pinch(&mut self, phase: PinchPhase, a: Point, b: Point) -> Option<GestureAction> {
        let distance = (a - b).hypot();
        if phase == PinchPhase::Start || self.mode != GestureMode::Pinching {
            let closing = if self.mode == GestureMode::Drawing {
                let closing = self.closing_stroke();
                let _ = self.finish();
                Some(closing)
            } else {
                self.finish()
            };
            self.mode = GestureMode::Pinching;
            self.pointer = Some(PointerKind::Touch);
            self.pinch_baseline = distance;
            return closing;
        }

        if self.pinch_baseline <= 0.0 {
            self.pinch_baseline = distance;
            return None;
        }
        let ratio = distance / self.pinch_baseline;
        let threshold = self.config.pinch_zoom_threshold;
        let spread = if ratio > 1.0 + threshold {
            true
        } else if ratio < 1.0 - threshold {
            false
        } else {
            return None;
        };
        self.pinch_baseline = distance;
        Some(GestureAction::Zoom {
            anchor: a.midpoint(b),
            direction: self.config.pinch_mapping.direction(spread),
        })
    }

    fn closing_stroke(&self) -> GestureAction {
        if self.stroked {
            GestureAction::EndStroke
        } else {
            GestureAction::CancelStroke
        }
    }

    fn finish(&mut self) -> Option<GestureAction> {
        let closing = match self.mode {
            GestureMode::Drawing => Some(GestureAction::EndStroke),
            GestureMode::Panning => Some(GestureAction::EndPan),
            GestureMode::Idle | GestureMode::Pinching => None,
        };
        self.mode = GestureMode::Idle;
        self.pointer = None;
        self.pinch_baseline = 0.0;
        self.stroked = false;
        self.drag.end();
        closing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(x: f64, y: f64, kind: PointerKind) -> InputEvent {
        InputEvent::PointerDown {
            pos: Point::new(x, y),
            kind,
        }
    }

    fn mv(x: f64, y: f64, kind: PointerKind) -> InputEvent {
        InputEvent::PointerMove {
            pos: Point::new(x, y),
            kind,
        }
    }

    #[test]
    fn down_while_busy_is_ignored() {
        let mut g = GestureClassifier::default();
        assert!(g.handle(down(0.0, 0.0, PointerKind::Mouse)).is_some());
        assert_eq!(g.handle(down(5.0, 5.0, PointerKind::Mouse)), None);
        assert_eq!(g.mode(), GestureMode::Drawing);
    }

    #[test]
    fn moves_from_another_device_are_ignored() {
        let mut g = GestureClassifier::default();
        let _ = g.handle(down(0.0, 0.0, PointerKind::Touch));
        assert_eq!(g.handle(mv(50.0, 50.0, PointerKind::Mouse)), None);
        assert_eq!(g.mode(), GestureMode::Drawing);
    }

    #[test]
    fn zero_pan_delta_emits_nothing() {
        let mut g = GestureClassifier::default();
        let _ = g.handle(InputEvent::PanModifier { held: true });
        let _ = g.handle(down(10.0, 10.0, PointerKind::Mouse));
        assert_eq!(g.handle(mv(10.0, 10.0, PointerKind::Mouse)), None);
    }

    #[test]
    fn second_finger_before_any_move_cancels_the_stroke() {
        let mut g = GestureClassifier::default();
        let pinch = |a: f64| InputEvent::Pinch {
            phase: PinchPhase::Start,
            a: Point::new(a, 0.0),
            b: Point::new(0.0, 0.0),
        };
        let _ = g.handle(down(0.0, 0.0, PointerKind::Touch));
        assert_eq!(g.handle(pinch(40.0)), Some(GestureAction::CancelStroke));
        assert_eq!(g.mode(), GestureMode::Pinching);

        let _ = g.handle(InputEvent::PointerUp {
            kind: PointerKind::Touch,
        });
        let _ = g.handle(down(0.0, 0.0, PointerKind::Touch));
        let _ = g.handle(mv(2.0, 0.0, PointerKind::Touch));
        assert_eq!(g.handle(pinch(40.0)), Some(GestureAction::EndStroke));
    }

    #[test]
    fn mouse_release_without_moving_still_ends_the_stroke() {
        let mut g = GestureClassifier::default();
        let _ = g.handle(down(3.0, 3.0, PointerKind::Mouse));
        let up = g.handle(InputEvent::PointerUp {
            kind: PointerKind::Mouse,
        });
        assert_eq!(up, Some(GestureAction::EndStroke));
    }

    #[test]
    fn mapping_table() {
        assert_eq!(PinchZoomMapping::SpreadZoomsIn.direction(true), ZoomDirection::In);
        assert_eq!(PinchZoomMapping::SpreadZoomsIn.direction(false), ZoomDirection::Out);
        assert_eq!(PinchZoomMapping::ContractZoomsIn.direction(true), ZoomDirection::Out);
        assert_eq!(PinchZoomMapping::ContractZoomsIn.direction(false), ZoomDirection::In);
    }

    #[test]
    fn zero_baseline_is_replaced_without_zoom() {
        let mut g = GestureClassifier::default();
        let p = Point::new(5.0, 5.0);
        let _ = g.handle(InputEvent::Pinch {
            phase: PinchPhase::Start,
            a: p,
            b: p,
        });
        assert_eq!(g.pinch_baseline(), 0.0);
        let moved = g.handle(InputEvent::Pinch {
            phase: PinchPhase::Move,
            a: p,
            b: Point::new(105.0, 5.0),
        });
        assert_eq!(moved, None);
        assert_eq!(g.pinch_baseline(), 100.0);
    }
}

// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `infinite_canvas_gesture` crate.
//!
//! Each test drives the classifier through raw platform events so that
//! normalization and classification are exercised together.

use infinite_canvas_gesture::{
    DEFAULT_PAN_KEY, GestureAction, GestureClassifier, GestureConfig, GestureMode,
    PinchZoomMapping, RawInput, normalize,
};
use infinite_canvas_view::ZoomDirection;
use kurbo::{Point, Vec2};

fn feed(g: &mut GestureClassifier, raw: RawInput<'_>) -> Option<GestureAction> {
    normalize(raw, DEFAULT_PAN_KEY).and_then(|event| g.handle(event))
}

fn touch_start(g: &mut GestureClassifier, touches: &[Point]) -> Option<GestureAction> {
    feed(g, RawInput::TouchStart { touches })
}

fn touch_move(g: &mut GestureClassifier, touches: &[Point]) -> Option<GestureAction> {
    feed(g, RawInput::TouchMove { touches })
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn mouse_stroke_lifecycle() {
    let mut g = GestureClassifier::default();
    assert_eq!(
        feed(&mut g, RawInput::MouseDown { pos: pt(1.0, 2.0) }),
        Some(GestureAction::BeginStroke(pt(1.0, 2.0)))
    );
    assert_eq!(g.mode(), GestureMode::Drawing);

    // Mouse strokes never turn into pans, however far they travel.
    assert_eq!(
        feed(&mut g, RawInput::MouseMove { pos: pt(300.0, 2.0) }),
        Some(GestureAction::StrokeTo(pt(300.0, 2.0)))
    );
    assert_eq!(feed(&mut g, RawInput::MouseUp), Some(GestureAction::EndStroke));
    assert_eq!(g.mode(), GestureMode::Idle);

    // Hover moves with no button down do nothing.
    assert_eq!(feed(&mut g, RawInput::MouseMove { pos: pt(5.0, 5.0) }), None);
}

#[test]
fn pan_modifier_turns_press_into_pan() {
    let mut g = GestureClassifier::default();
    assert_eq!(feed(&mut g, RawInput::KeyDown { code: "Space" }), None);
    assert!(g.pan_modifier_held());

    assert_eq!(feed(&mut g, RawInput::MouseDown { pos: pt(100.0, 100.0) }), None);
    assert_eq!(g.mode(), GestureMode::Panning);

    assert_eq!(
        feed(&mut g, RawInput::MouseMove { pos: pt(110.0, 95.0) }),
        Some(GestureAction::Pan(Vec2::new(10.0, -5.0)))
    );
    // The anchor follows the pointer, so deltas are incremental.
    assert_eq!(
        feed(&mut g, RawInput::MouseMove { pos: pt(111.0, 95.0) }),
        Some(GestureAction::Pan(Vec2::new(1.0, 0.0)))
    );
    assert_eq!(feed(&mut g, RawInput::MouseUp), Some(GestureAction::EndPan));

    // Still held: the next press pans again.
    let _ = feed(&mut g, RawInput::MouseDown { pos: pt(0.0, 0.0) });
    assert_eq!(g.mode(), GestureMode::Panning);
}

#[test]
fn releasing_pan_modifier_forces_idle() {
    let mut g = GestureClassifier::default();
    let _ = feed(&mut g, RawInput::KeyDown { code: "Space" });
    let _ = feed(&mut g, RawInput::MouseDown { pos: pt(0.0, 0.0) });
    assert_eq!(
        feed(&mut g, RawInput::KeyUp { code: "Space" }),
        Some(GestureAction::EndPan)
    );
    assert_eq!(g.mode(), GestureMode::Idle);
    assert!(!g.pan_modifier_held());

    // Moves after the reset are not pans.
    assert_eq!(feed(&mut g, RawInput::MouseMove { pos: pt(50.0, 0.0) }), None);

    // Default drawing behavior is back.
    assert_eq!(
        feed(&mut g, RawInput::MouseDown { pos: pt(3.0, 3.0) }),
        Some(GestureAction::BeginStroke(pt(3.0, 3.0)))
    );
}

#[test]
fn other_keys_do_not_touch_the_modifier() {
    let mut g = GestureClassifier::default();
    assert_eq!(feed(&mut g, RawInput::KeyDown { code: "KeyA" }), None);
    assert!(!g.pan_modifier_held());
}

#[test]
fn small_touch_movement_draws() {
    let mut g = GestureClassifier::default();
    assert_eq!(
        touch_start(&mut g, &[pt(50.0, 50.0)]),
        Some(GestureAction::BeginStroke(pt(50.0, 50.0)))
    );
    assert_eq!(
        touch_move(&mut g, &[pt(58.0, 45.0)]),
        Some(GestureAction::StrokeTo(pt(58.0, 45.0)))
    );
    // Exactly at the threshold is still drawing.
    assert_eq!(
        touch_move(&mut g, &[pt(60.0, 60.0)]),
        Some(GestureAction::StrokeTo(pt(60.0, 60.0)))
    );
    assert_eq!(feed(&mut g, RawInput::TouchEnd), Some(GestureAction::EndStroke));
}

#[test]
fn large_touch_movement_reclassifies_to_pan_one_way() {
    let mut g = GestureClassifier::default();
    let _ = touch_start(&mut g, &[pt(50.0, 50.0)]);

    // Crossing the threshold before anything was drawn cancels the stroke
    // and anchors the pan here.
    assert_eq!(
        touch_move(&mut g, &[pt(50.0, 61.0)]),
        Some(GestureAction::CancelStroke)
    );
    assert_eq!(g.mode(), GestureMode::Panning);
    assert_eq!(
        touch_move(&mut g, &[pt(55.0, 70.0)]),
        Some(GestureAction::Pan(Vec2::new(5.0, 9.0)))
    );

    // Returning near the start point does not resume drawing.
    assert_eq!(
        touch_move(&mut g, &[pt(51.0, 51.0)]),
        Some(GestureAction::Pan(Vec2::new(-4.0, -19.0)))
    );
    assert_eq!(g.mode(), GestureMode::Panning);

    assert_eq!(feed(&mut g, RawInput::TouchEnd), Some(GestureAction::EndPan));
    assert_eq!(g.mode(), GestureMode::Idle);
}

#[test]
fn custom_threshold_is_respected() {
    let mut g = GestureClassifier::new(GestureConfig {
        pan_reclassify_threshold: 40.0,
        ..GestureConfig::default()
    });
    let _ = touch_start(&mut g, &[pt(0.0, 0.0)]);
    assert_eq!(
        touch_move(&mut g, &[pt(30.0, 0.0)]),
        Some(GestureAction::StrokeTo(pt(30.0, 0.0)))
    );
    assert_eq!(touch_move(&mut g, &[pt(41.0, 0.0)]), Some(GestureAction::EndStroke));
}

#[test]
fn second_finger_cancels_undrawn_stroke_and_starts_pinch() {
    let mut g = GestureClassifier::default();
    let _ = touch_start(&mut g, &[pt(100.0, 100.0)]);
    assert_eq!(
        touch_start(&mut g, &[pt(100.0, 100.0), pt(200.0, 100.0)]),
        Some(GestureAction::CancelStroke)
    );
    assert_eq!(g.mode(), GestureMode::Pinching);
    assert_eq!(g.pinch_baseline(), 100.0);

    // Single-finger moves during a pinch are ignored.
    assert_eq!(touch_move(&mut g, &[pt(120.0, 100.0)]), None);
}

#[test]
fn pinch_spread_zooms_in_by_default() {
    let mut g = GestureClassifier::default();
    assert_eq!(touch_start(&mut g, &[pt(100.0, 100.0), pt(200.0, 100.0)]), None);

    // 5% wider: below the 10% threshold.
    assert_eq!(touch_move(&mut g, &[pt(100.0, 100.0), pt(205.0, 100.0)]), None);

    // 20% wider than baseline.
    assert_eq!(
        touch_move(&mut g, &[pt(100.0, 100.0), pt(220.0, 100.0)]),
        Some(GestureAction::Zoom {
            anchor: pt(160.0, 100.0),
            direction: ZoomDirection::In,
        })
    );
    // The baseline follows the fingers after each step.
    assert_eq!(g.pinch_baseline(), 120.0);
    assert_eq!(touch_move(&mut g, &[pt(100.0, 100.0), pt(225.0, 100.0)]), None);

    assert_eq!(
        touch_move(&mut g, &[pt(100.0, 100.0), pt(190.0, 100.0)]),
        Some(GestureAction::Zoom {
            anchor: pt(145.0, 100.0),
            direction: ZoomDirection::Out,
        })
    );

    assert_eq!(feed(&mut g, RawInput::TouchEnd), None);
    assert_eq!(g.mode(), GestureMode::Idle);
}

#[test]
fn contract_zooms_in_mapping() {
    let mut g = GestureClassifier::new(GestureConfig {
        pinch_mapping: PinchZoomMapping::ContractZoomsIn,
        ..GestureConfig::default()
    });
    let _ = touch_start(&mut g, &[pt(0.0, 0.0), pt(0.0, 100.0)]);
    assert_eq!(
        touch_move(&mut g, &[pt(0.0, 0.0), pt(0.0, 80.0)]),
        Some(GestureAction::Zoom {
            anchor: pt(0.0, 40.0),
            direction: ZoomDirection::In,
        })
    );
}

#[test]
fn wheel_zooms_in_any_mode() {
    let mut g = GestureClassifier::default();
    assert_eq!(
        feed(
            &mut g,
            RawInput::Wheel {
                pos: pt(7.0, 8.0),
                delta_y: -100.0
            }
        ),
        Some(GestureAction::Zoom {
            anchor: pt(7.0, 8.0),
            direction: ZoomDirection::In,
        })
    );

    let _ = feed(&mut g, RawInput::MouseDown { pos: pt(0.0, 0.0) });
    assert_eq!(
        feed(
            &mut g,
            RawInput::Wheel {
                pos: pt(7.0, 8.0),
                delta_y: 3.0
            }
        ),
        Some(GestureAction::Zoom {
            anchor: pt(7.0, 8.0),
            direction: ZoomDirection::Out,
        })
    );
    assert_eq!(g.mode(), GestureMode::Drawing);

    assert_eq!(
        feed(
            &mut g,
            RawInput::Wheel {
                pos: pt(7.0, 8.0),
                delta_y: 0.0
            }
        ),
        None
    );
}

#[test]
fn second_finger_after_drawing_ends_the_stroke() {
    let mut g = GestureClassifier::default();
    let _ = touch_start(&mut g, &[pt(100.0, 100.0)]);
    let _ = touch_move(&mut g, &[pt(104.0, 100.0)]);
    assert_eq!(
        touch_start(&mut g, &[pt(104.0, 100.0), pt(204.0, 100.0)]),
        Some(GestureAction::EndStroke)
    );
    assert_eq!(g.mode(), GestureMode::Pinching);
}

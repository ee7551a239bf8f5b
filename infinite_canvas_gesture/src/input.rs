// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input normalization.
//!
//! Embedders deliver mouse, touch, wheel and keyboard events in whatever
//! shape their platform provides. [`RawInput`] is a thin, borrowed mirror of
//! those events; [`normalize`] turns it into the single [`InputEvent`]
//! representation the classifier consumes. Touch input never has to pretend
//! to be a mouse: single touches become pointer events tagged
//! [`PointerKind::Touch`], and two-finger contact becomes [`InputEvent::Pinch`].

use kurbo::Point;

/// Key code that toggles pan mode unless configured otherwise.
pub const DEFAULT_PAN_KEY: &str = "Space";

/// Which device produced a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Mouse, pen, or any device with explicit press/release.
    Mouse,
    /// A single finger on a touch surface.
    Touch,
}

/// Phase of a two-finger pinch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PinchPhase {
    /// Two fingers have just come down; establishes the baseline distance.
    Start,
    /// Either finger moved.
    Move,
}

/// Platform event as delivered by the embedder, positions in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawInput<'a> {
    /// Mouse button pressed.
    MouseDown {
        /// Pointer position.
        pos: Point,
    },
    /// Mouse moved (pressed or not).
    MouseMove {
        /// Pointer position.
        pos: Point,
    },
    /// Mouse button released.
    MouseUp,
    /// A finger touched down; `touches` lists every active contact.
    TouchStart {
        /// Active contacts.
        touches: &'a [Point],
    },
    /// A finger moved; `touches` lists every active contact.
    TouchMove {
        /// Active contacts.
        touches: &'a [Point],
    },
    /// A finger lifted.
    TouchEnd,
    /// Wheel or trackpad scroll.
    Wheel {
        /// Pointer position.
        pos: Point,
        /// Vertical scroll delta; negative scrolls up.
        delta_y: f64,
    },
    /// A key went down.
    KeyDown {
        /// Platform key code, e.g. `"Space"`.
        code: &'a str,
    },
    /// A key went up.
    KeyUp {
        /// Platform key code, e.g. `"Space"`.
        code: &'a str,
    },
}

/// Normalized input consumed by [`crate::GestureClassifier`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Press of a single pointer.
    PointerDown {
        /// Screen position.
        pos: Point,
        /// Source device.
        kind: PointerKind,
    },
    /// Movement of a single pointer.
    PointerMove {
        /// Screen position.
        pos: Point,
        /// Source device.
        kind: PointerKind,
    },
    /// Release of the pointer (or of any finger).
    PointerUp {
        /// Source device.
        kind: PointerKind,
    },
    /// Two-finger contact.
    Pinch {
        /// Start or move.
        phase: PinchPhase,
        /// First contact.
        a: Point,
        /// Second contact.
        b: Point,
    },
    /// Scroll wheel.
    Wheel {
        /// Screen position.
        pos: Point,
        /// Vertical delta; negative scrolls up.
        delta_y: f64,
    },
    /// The pan modifier key changed state.
    PanModifier {
        /// `true` while the key is held.
        held: bool,
    },
}

impl InputEvent {
    /// Builds the event for a touch list: one contact is a pointer event, two
    /// or more are a pinch over the first two, none is nothing.
    #[must_use]
    pub fn from_touches(touches: &[Point], phase: PinchPhase) -> Option<Self> {
        match touches {
            [] => None,
            [pos] => Some(match phase {
                PinchPhase::Start => Self::PointerDown {
                    pos: *pos,
                    kind: PointerKind::Touch,
                },
                PinchPhase::Move => Self::PointerMove {
                    pos: *pos,
                    kind: PointerKind::Touch,
                },
            }),
            [a, b, ..] => Some(Self::Pinch {
                phase,
                a: *a,
                b: *b,
            }),
        }
    }
}

/// Converts a platform event into the classifier's representation.
///
/// Key events for any code other than `pan_key` are dropped.
#[must_use]
pub fn normalize(raw: RawInput<'_>, pan_key: &str) -> Option<InputEvent> {
    match raw {
        RawInput::MouseDown { pos } => Some(InputEvent::PointerDown {
            pos,
            kind: PointerKind::Mouse,
        }),
        RawInput::MouseMove { pos } => Some(InputEvent::PointerMove {
            pos,
            kind: PointerKind::Mouse,
        }),
        RawInput::MouseUp => Some(InputEvent::PointerUp {
            kind: PointerKind::Mouse,
        }),
        RawInput::TouchStart { touches } => InputEvent::from_touches(touches, PinchPhase::Start),
        RawInput::TouchMove { touches } => InputEvent::from_touches(touches, PinchPhase::Move),
        RawInput::TouchEnd => Some(InputEvent::PointerUp {
            kind: PointerKind::Touch,
        }),
        RawInput::Wheel { pos, delta_y } => Some(InputEvent::Wheel { pos, delta_y }),
        RawInput::KeyDown { code } if code == pan_key => {
            Some(InputEvent::PanModifier { held: true })
        }
        RawInput::KeyUp { code } if code == pan_key => {
            Some(InputEvent::PanModifier { held: false })
        }
        RawInput::KeyDown { .. } | RawInput::KeyUp { .. } => None,
    }
}

// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Infinite Canvas: a freehand drawing engine over an oversized raster.
//!
//! [`CanvasSession`] ties the sibling crates together:
//! - `infinite_canvas_view` maps pointer positions onto the virtual canvas
//!   and handles pan and anchor-preserving zoom.
//! - `infinite_canvas_gesture` decides whether input draws, pans or pinches.
//! - `infinite_canvas_history` keeps bounded snapshots for undo.
//! - `infinite_canvas_raster` owns the pixels.
//!
//! The session adds the stroke renderer, image import, clearing and PNG
//! export on top.
//!
//! ## Minimal example
//!
//! ```rust
//! use infinite_canvas::{CanvasConfig, CanvasSession};
//! use infinite_canvas_gesture::RawInput;
//! use kurbo::{Point, Rect};
//!
//! let config = CanvasConfig {
//!     canvas_width: 400,
//!     canvas_height: 300,
//!     ..CanvasConfig::default()
//! };
//! let mut session = CanvasSession::new(config, Rect::new(0.0, 0.0, 200.0, 100.0))?;
//!
//! session.handle_raw(RawInput::MouseDown { pos: Point::new(50.0, 50.0) });
//! assert!(session.handle_raw(RawInput::MouseMove { pos: Point::new(80.0, 60.0) }));
//! session.handle_raw(RawInput::MouseUp);
//! assert_eq!(session.history_len(), 2);
//!
//! assert!(session.undo());
//! assert_eq!(session.history_len(), 1);
//! # Ok::<(), infinite_canvas::CanvasError>(())
//! ```

mod config;
mod error;
mod export;
mod import;
mod session;
mod stroke;

pub use config::{
    CanvasConfig, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_MAX_IMPORT_HEIGHT,
    DEFAULT_MAX_IMPORT_WIDTH,
};
pub use error::{CanvasError, CanvasResult};
pub use export::{DirectorySink, EXPORT_FILE_NAME, ExportSink};
pub use import::ImagePlacement;
pub use session::CanvasSession;
pub use stroke::StrokeRenderer;

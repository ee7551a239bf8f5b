// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The single owner of canvas state.

use infinite_canvas_gesture::{
    GestureAction, GestureClassifier, GestureMode, InputEvent, RawInput, normalize,
};
use infinite_canvas_history::SnapshotHistory;
use infinite_canvas_raster::{Bitmap, PixelSnapshot, PixmapSurface, RasterSurface};
use infinite_canvas_view::Viewport;
use kurbo::{Point, Rect};
use peniko::Color;

use crate::{
    CanvasConfig, CanvasResult, EXPORT_FILE_NAME, ExportSink, ImagePlacement, StrokeRenderer,
};

/// History sizes above this are worth a warning at startup.
const HISTORY_MEMORY_WARN_BYTES: u64 = 1 << 30;

/// A drawing session: surface, viewport, undo history, gesture state and
/// stroke style behind one explicit dispatcher.
///
/// Every input goes through [`handle_raw`](Self::handle_raw) or
/// [`handle_event`](Self::handle_event); there is no other way for input to
/// reach the canvas.
pub struct CanvasSession<S: RasterSurface = PixmapSurface> {
    config: CanvasConfig,
    surface: S,
    viewport: Viewport,
    history: SnapshotHistory<PixelSnapshot>,
    gesture: GestureClassifier,
    stroke: StrokeRenderer,
}

impl<S: RasterSurface> core::fmt::Debug for CanvasSession<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CanvasSession")
            .field("width", &self.surface.width())
            .field("height", &self.surface.height())
            .field("viewport", &self.viewport.debug_info())
            .field("history_len", &self.history.len())
            .field("mode", &self.gesture.mode())
            .finish_non_exhaustive()
    }
}

impl CanvasSession<PixmapSurface> {
    /// Creates a session with a fresh in-memory canvas filled with the
    /// configured background.
    ///
    /// `view_rect` is the on-screen rectangle of the viewport element. The
    /// view starts centered on the middle of the canvas.
    pub fn new(config: CanvasConfig, view_rect: Rect) -> CanvasResult<Self> {
        config.validate()?;
        let surface = PixmapSurface::new(config.canvas_width, config.canvas_height, config.background);
        Self::with_surface(surface, config, view_rect)
    }
}

impl<S: RasterSurface> CanvasSession<S> {
    /// Creates a session over an existing surface.
    ///
    /// The surface's current pixels become the undo baseline. Its
    /// dimensions take precedence over `canvas_width`/`canvas_height`.
    pub fn with_surface(surface: S, config: CanvasConfig, view_rect: Rect) -> CanvasResult<Self> {
        config.validate()?;

        let worst_case = config.worst_case_history_bytes();
        if worst_case > HISTORY_MEMORY_WARN_BYTES {
            tracing::warn!(
                worst_case_bytes = worst_case,
                max_history = config.max_history,
                "full undo history may use a lot of memory; consider a smaller canvas or bound"
            );
        }

        let mut viewport = Viewport::new(view_rect);
        viewport.set_scale_limits(config.min_scale, config.max_scale);
        viewport.set_zoom_steps(config.zoom_step_in, config.zoom_step_out);
        viewport.center_on(surface.bounds().center());

        let history = SnapshotHistory::with_baseline(config.max_history, surface.read_pixels());
        let gesture = GestureClassifier::new(config.gesture_config());
        let stroke = StrokeRenderer::new(config.stroke_style());

        tracing::debug!(
            width = surface.width(),
            height = surface.height(),
            "canvas session created"
        );
        Ok(Self {
            config,
            surface,
            viewport,
            history,
            gesture,
            stroke,
        })
    }

    /// Configuration the session was created with.
    #[must_use]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// The drawing surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the drawing surface.
    ///
    /// Pixels changed through this are not captured in the undo history.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Current gesture mode.
    #[must_use]
    pub fn mode(&self) -> GestureMode {
        self.gesture.mode()
    }

    /// The stroke renderer.
    #[must_use]
    pub fn stroke(&self) -> &StrokeRenderer {
        &self.stroke
    }

    /// Sets the width of subsequent segments.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke.set_stroke_width(width);
    }

    /// Sets the color of subsequent segments.
    pub fn set_stroke_color(&mut self, color: Color) {
        self.stroke.set_stroke_color(color);
    }

    /// Updates the viewport element's on-screen rectangle after a resize.
    pub fn set_view_rect(&mut self, rect: Rect) {
        self.viewport.set_view_rect(rect);
    }

    /// Maps a screen position to virtual canvas coordinates.
    #[must_use]
    pub fn screen_to_virtual(&self, pt: Point) -> Point {
        self.viewport.screen_to_virtual(pt)
    }

    /// Normalizes and dispatches a platform event.
    ///
    /// Returns `true` if canvas content or the view changed.
    pub fn handle_raw(&mut self, raw: RawInput<'_>) -> bool {
        normalize(raw, &self.config.pan_modifier_key).is_some_and(|event| self.handle_event(event))
    }

    /// Dispatches a normalized event.
    ///
    /// Returns `true` if canvas content or the view changed.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match self.gesture.handle(event) {
            Some(action) => self.apply(action),
            None => false,
        }
    }

    fn apply(&mut self, action: GestureAction) -> bool {
        match action {
            GestureAction::BeginStroke(screen) => {
                self.save_state();
                self.stroke.begin(self.viewport.screen_to_virtual(screen));
                false
            }
            GestureAction::StrokeTo(screen) => {
                let to = self.viewport.screen_to_virtual(screen);
                self.stroke.extend_to(&mut self.surface, to)
            }
            GestureAction::EndStroke => {
                self.stroke.end();
                false
            }
            GestureAction::CancelStroke => {
                self.stroke.end();
                if self.history.discard_latest().is_some() {
                    tracing::debug!(
                        remaining = self.history.len(),
                        "stroke became a pan or pinch, dropped its snapshot"
                    );
                }
                false
            }
            GestureAction::Pan(delta) => {
                self.viewport.pan_by_screen(delta);
                true
            }
            GestureAction::EndPan => false,
            GestureAction::Zoom { anchor, direction } => {
                let before = self.viewport.scale();
                self.viewport.zoom_at(anchor, direction);
                let changed = self.viewport.scale() != before;
                if changed {
                    tracing::debug!(scale = self.viewport.scale(), ?direction, "zoomed");
                }
                changed
            }
        }
    }

    /// Pushes a snapshot of the current pixels onto the undo history.
    pub fn save_state(&mut self) {
        let evicted = self.history.push(self.surface.read_pixels());
        if evicted.is_some() {
            tracing::debug!(
                capacity = self.history.capacity(),
                "history full, evicted oldest snapshot"
            );
        }
    }

    /// Restores the previous snapshot.
    ///
    /// Returns `false`, changing nothing, when only the baseline is left or
    /// when the snapshot no longer matches the surface's dimensions.
    pub fn undo(&mut self) -> bool {
        let Some(target) = self.history.previous() else {
            tracing::debug!("nothing to undo");
            return false;
        };
        let (width, height) = (self.surface.width(), self.surface.height());
        if (target.width(), target.height()) != (width, height) {
            tracing::warn!(
                snapshot_width = target.width(),
                snapshot_height = target.height(),
                width,
                height,
                "undo snapshot does not fit the surface, keeping history"
            );
            return false;
        }
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        let restored = self.surface.write_pixels(snapshot);
        tracing::debug!(remaining = self.history.len(), restored, "undo");
        restored
    }

    /// Number of retained snapshots, including the baseline.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Returns `true` if [`undo`](Self::undo) would restore something.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Decodes an uploaded file and composites it onto the canvas.
    ///
    /// Input that cannot be decoded is logged and ignored: no pixels change
    /// and no snapshot is pushed.
    pub fn import_image(&mut self, bytes: &[u8]) -> Option<ImagePlacement> {
        match Bitmap::decode(bytes) {
            Ok(bitmap) => Some(self.import_bitmap(&bitmap)),
            Err(err) => {
                tracing::warn!(%err, len = bytes.len(), "ignoring upload that is not a usable image");
                None
            }
        }
    }

    /// Composites a decoded bitmap centered on the canvas.
    ///
    /// The bitmap is scaled down to fit the import bound, a snapshot is
    /// pushed first, and the view moves so the image's top-left corner is at
    /// the viewport's top-left.
    pub fn import_bitmap(&mut self, bitmap: &Bitmap) -> ImagePlacement {
        self.save_state();
        let placement = ImagePlacement::compute(
            bitmap.size(),
            self.config.max_import_size(),
            self.surface.bounds().size(),
        );
        self.surface.draw_bitmap(bitmap, placement.rect());
        self.viewport.set_offset(placement.origin);
        tracing::info!(
            source_width = bitmap.width(),
            source_height = bitmap.height(),
            x = placement.origin.x,
            y = placement.origin.y,
            width = placement.size.width,
            height = placement.size.height,
            "imported image"
        );
        placement
    }

    /// Fills the whole canvas with the background color.
    ///
    /// No snapshot is pushed.
    pub fn clear(&mut self) {
        self.surface.fill(self.config.background);
        tracing::info!("canvas cleared");
    }

    /// Encodes the full canvas as PNG.
    pub fn export_png(&self) -> CanvasResult<Vec<u8>> {
        Ok(self.surface.encode_png()?)
    }

    /// Encodes the canvas and hands it to `sink` as [`EXPORT_FILE_NAME`].
    pub fn export_to<E: ExportSink + ?Sized>(&self, sink: &mut E) -> CanvasResult<()> {
        let bytes = self.export_png()?;
        sink.save(EXPORT_FILE_NAME, &bytes)?;
        tracing::info!(file = EXPORT_FILE_NAME, bytes = bytes.len(), "exported canvas");
        Ok(())
    }
}

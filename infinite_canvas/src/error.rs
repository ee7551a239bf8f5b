// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use infinite_canvas_raster::RasterError;
use thiserror::Error;

/// Errors surfaced by a [`CanvasSession`](crate::CanvasSession).
///
/// Interaction never fails: invalid uploads, undo on an empty history and
/// out-of-range zooms degrade to no-ops. Only construction and export return
/// errors.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// A configuration value is out of range.
    #[error("invalid configuration: `{field}` {reason}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// Encoding or decoding raster data failed.
    #[error(transparent)]
    Raster(#[from] RasterError),

    /// Writing an export failed.
    #[error("export I/O error: {0}")]
    Export(#[from] std::io::Error),
}

/// Result alias for canvas operations.
pub type CanvasResult<T> = Result<T, CanvasError>;

// Copyright 2026 the Infinite Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delivering exported PNG bytes.

use std::io;
use std::path::{Path, PathBuf};

/// File name used for every export.
pub const EXPORT_FILE_NAME: &str = "infinite-canvas-drawing.png";

/// Destination for exported images.
pub trait ExportSink {
    /// Stores `bytes` under `file_name`.
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> io::Result<()>;
}

/// Writes exports into a directory, replacing earlier files of the same name.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Creates a sink writing into `dir`. The directory must exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path an export named `file_name` is written to.
    #[must_use]
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }
}

impl ExportSink for DirectorySink {
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> io::Result<()> {
        std::fs::write(self.path_for(file_name), bytes)
    }
}

impl<F> ExportSink for F
where
    F: FnMut(&str, &[u8]) -> io::Result<()>,
{
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> io::Result<()> {
        self(file_name, bytes)
    }
}

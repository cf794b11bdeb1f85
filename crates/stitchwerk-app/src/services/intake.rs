// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// File intake — reads image files from disk for the session. Paths whose
// extension is not a known image format are skipped.

use std::path::{Path, PathBuf};

use image::ImageFormat;
use stitchwerk_compose::EncodedImage;
use stitchwerk_core::error::Result;
use tracing::{debug, warn};

/// Whether `path` has an image file extension.
pub fn is_image_path(path: &Path) -> bool {
    ImageFormat::from_path(path).is_ok_and(|format| format.reading_enabled())
}

/// Read every image path in order, skipping non-image paths.
pub fn read_images(paths: &[PathBuf]) -> Result<Vec<EncodedImage>> {
    let mut batch = Vec::with_capacity(paths.len());
    for path in paths {
        if !is_image_path(path) {
            warn!(path = %path.display(), "not an image file, skipping");
            continue;
        }
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        debug!(name = %name, bytes = bytes.len(), "image read");
        batch.push(EncodedImage::new(name, bytes));
    }
    Ok(batch)
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Export — writes a stitched PNG as `stitched-image-<unix-millis>.png`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use stitchwerk_compose::CompositedImage;
use stitchwerk_core::error::Result;
use tracing::info;

/// File name for an export made at `at`.
pub fn export_file_name(at: DateTime<Utc>) -> String {
    format!("stitched-image-{}.png", at.timestamp_millis())
}

/// Write `image` into `dir` (created if missing) and return the full path.
pub fn export_png(image: &CompositedImage, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(Utc::now()));
    std::fs::write(&path, &image.png)?;
    info!(
        path = %path.display(),
        bytes = image.png.len(),
        fingerprint = %image.fingerprint,
        "Stitched image exported"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn file_name_uses_unix_millis() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(export_file_name(at), "stitched-image-1700000000123.png");
    }
}

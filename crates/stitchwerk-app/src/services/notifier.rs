// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// User-facing notifications raised by the stitching session.

use tracing::{error, info, warn};

/// Events the front end should tell the user about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A batch of images was decoded and added.
    Uploaded { count: usize },
    /// A batch was rejected because one of its images could not be decoded.
    UploadFailed { detail: String },
    /// A stitch was requested with fewer than 2 images.
    InsufficientImages,
    /// A stitch finished.
    Stitched { width: u32, height: u32 },
    /// A stitch failed; the previous output (if any) is kept.
    StitchFailed { detail: String },
    /// The stitched image was written out.
    DownloadStarted { file_name: String },
}

impl Notification {
    /// Plain English text for the event.
    pub fn message(&self) -> String {
        match self {
            Self::Uploaded { count: 1 } => "1 image uploaded".into(),
            Self::Uploaded { count } => format!("{count} images uploaded"),
            Self::UploadFailed { detail } => format!("Upload failed: {detail}"),
            Self::InsufficientImages => "Please upload at least 2 images to stitch".into(),
            Self::Stitched { width, height } => {
                format!("Images stitched successfully ({width}x{height})")
            }
            Self::StitchFailed { detail } => format!("Stitching failed: {detail}"),
            Self::DownloadStarted { file_name } => format!("Download started: {file_name}"),
        }
    }
}

/// Receives session notifications. Implementations decide how to present
/// them (toast, status line, log).
pub trait Notifier: Send {
    fn notify(&self, notification: &Notification);
}

/// Presents notifications as log lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: &Notification) {
        let message = notification.message();
        match notification {
            Notification::StitchFailed { .. } | Notification::UploadFailed { .. } => {
                error!("{message}")
            }
            Notification::InsufficientImages => warn!("{message}"),
            _ => info!("{message}"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_message_pluralises() {
        assert_eq!(Notification::Uploaded { count: 1 }.message(), "1 image uploaded");
        assert_eq!(Notification::Uploaded { count: 3 }.message(), "3 images uploaded");
    }

    #[test]
    fn failure_message_carries_detail() {
        let n = Notification::StitchFailed {
            detail: "canvas too large".into(),
        };
        assert_eq!(n.message(), "Stitching failed: canvas too large");
    }
}

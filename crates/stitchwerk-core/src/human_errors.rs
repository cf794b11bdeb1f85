// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages.
//
// Every technical error is mapped to plain English with a clear suggestion.
// Severity drives how the front end presents the message.

use crate::error::StitchError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Worth trying again as-is (e.g. a flaky disk write).
    Transient,
    /// User must change something (add images, pick a valid colour).
    ActionRequired,
    /// Retrying with the same input cannot help.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary.
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    /// Whether retrying the same operation may succeed.
    pub retriable: bool,
    pub severity: Severity,
}

/// Convert a `StitchError` into a `HumanError`.
pub fn humanize_error(err: &StitchError) -> HumanError {
    match err {
        StitchError::InsufficientInput { count } => HumanError {
            message: "Please upload at least 2 images to stitch.".into(),
            suggestion: format!("You have {count} image(s) right now. Add more and try again."),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        StitchError::RenderingUnavailable(detail) => HumanError {
            message: "Stitching failed: the output image could not be created.".into(),
            suggestion: format!(
                "Try fewer or smaller images, or a size policy of \"min\". ({detail})"
            ),
            retriable: false,
            severity: Severity::Permanent,
        },

        StitchError::Encode(detail) => HumanError {
            message: "Stitching failed.".into(),
            suggestion: format!("The stitched image could not be saved as PNG. ({detail})"),
            retriable: true,
            severity: Severity::Transient,
        },

        StitchError::Decode(detail) => HumanError {
            message: "One of the images couldn't be read.".into(),
            suggestion: format!(
                "The file may be damaged or not an image. Try saving it as PNG or JPEG first. ({detail})"
            ),
            retriable: false,
            severity: Severity::Permanent,
        },

        StitchError::InvalidColor(value) => HumanError {
            message: "That background colour isn't valid.".into(),
            suggestion: format!("Use a hex colour like #ff0000 or \"transparent\" (got {value:?})."),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        StitchError::InvalidSetting(detail) => HumanError {
            message: "That setting isn't recognised.".into(),
            suggestion: format!("Check the spelling and try again. ({detail})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        StitchError::ImageNotFound(_) => HumanError {
            message: "That image is no longer in the list.".into(),
            suggestion: "It may already have been removed. Refresh the list and try again.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        StitchError::NothingToExport => HumanError {
            message: "There's nothing to download yet.".into(),
            suggestion: "Stitch at least 2 images first, then download the result.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        StitchError::Io(io_err) => match io_err.kind() {
            std::io::ErrorKind::NotFound => HumanError {
                message: "The file couldn't be found.".into(),
                suggestion: "It may have been moved or deleted. Check the path and try again.".into(),
                retriable: false,
                severity: Severity::ActionRequired,
            },
            std::io::ErrorKind::PermissionDenied => HumanError {
                message: "Permission denied.".into(),
                suggestion: "Check the file or folder permissions, or pick a different location.".into(),
                retriable: false,
                severity: Severity::ActionRequired,
            },
            _ => HumanError {
                message: "There was a problem reading or writing a file.".into(),
                suggestion: "Try again. If this keeps happening, your disk may be full.".into(),
                retriable: true,
                severity: Severity::Transient,
            },
        },

        StitchError::Serialization(_) => HumanError {
            message: "The settings file couldn't be read.".into(),
            suggestion: "Fix or delete the config file; defaults will be used.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}

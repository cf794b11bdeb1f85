// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Stitchwerk.

use thiserror::Error;

use crate::types::ImageId;

/// Top-level error type for all Stitchwerk operations.
#[derive(Debug, Error)]
pub enum StitchError {
    // -- Compositing --
    #[error("at least 2 images are required to stitch, got {count}")]
    InsufficientInput { count: usize },

    #[error("rendering unavailable: {0}")]
    RenderingUnavailable(String),

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    // -- Input --
    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("invalid background colour: {0}")]
    InvalidColor(String),

    #[error("invalid setting: {0}")]
    InvalidSetting(String),

    // -- Session --
    #[error("no image with id {0}")]
    ImageNotFound(ImageId),

    #[error("there is no stitched image to export")]
    NothingToExport,

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, StitchError>;

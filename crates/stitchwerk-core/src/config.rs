// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::{ResampleFilter, StitchSettings};

/// Largest canvas area (in pixels) most browsers will allocate.
pub const DEFAULT_MAX_CANVAS_PIXELS: u64 = 268_435_456;

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Axis, size policy and background used when nothing else is given.
    pub settings: StitchSettings,
    /// Filter used when the size policy rescales an image.
    pub filter: ResampleFilter,
    /// Canvas area limit; larger composites fail as rendering-unavailable.
    pub max_canvas_pixels: u64,
    /// Where exported images go (current directory when unset).
    pub output_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settings: StitchSettings::default(),
            filter: ResampleFilter::default(),
            max_canvas_pixels: DEFAULT_MAX_CANVAS_PIXELS,
            output_dir: None,
        }
    }
}

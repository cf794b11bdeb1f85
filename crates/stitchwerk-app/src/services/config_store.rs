// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Config file persistence (JSON).

use std::path::{Path, PathBuf};

use stitchwerk_core::AppConfig;
use stitchwerk_core::error::Result;
use tracing::{debug, info};

use super::data_dir;

const CONFIG_FILE: &str = "config.json";

/// `config.json` inside the data directory.
pub fn default_config_path() -> PathBuf {
    data_dir::data_dir().join(CONFIG_FILE)
}

/// Load the config at `path`, or defaults if the file does not exist.
///
/// A file that exists but cannot be parsed is an error rather than being
/// silently replaced by defaults.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }
    let data = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&data)?;
    info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Write `config` to `path`, creating parent directories as needed.
pub fn persist_config(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), "config saved");
    Ok(())
}

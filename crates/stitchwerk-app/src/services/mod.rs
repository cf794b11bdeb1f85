// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application services — the stitching session controller and the
// collaborators it talks to (file intake, export, notifications, config).

pub mod config_store;
pub mod data_dir;
pub mod export;
pub mod intake;
pub mod notifier;
pub mod session;

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// stitchwerk-app — the stitching session controller and its collaborators,
// shared by the `stitchwerk` binary.

pub mod services;

pub use services::notifier::{LogNotifier, Notification, Notifier};
pub use services::session::StitchSession;

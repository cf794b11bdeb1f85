// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// SHA-256 fingerprints for inputs and stitched outputs.

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `data`.
///
/// Logged alongside every decoded input and stitched output so a run can be
/// matched to the files it produced.
pub fn fingerprint(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// stitchwerk-compose — Image decoding and compositing for Stitchwerk.
//
// Decodes encoded inputs (concurrently, all-or-nothing), plans the stitched
// layout under a size policy, rasterizes the ordered images onto one canvas
// and encodes the result as PNG.

pub mod compositor;
pub mod decode;
pub mod digest;

// Re-export the primary types so callers can use `stitchwerk_compose::Compositor` etc.
pub use compositor::layout::{Layout, Placement, plan_layout};
pub use compositor::{CompositedImage, Compositor};
pub use decode::{EncodedImage, SourceImage, decode, decode_all};

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image decoding — turns encoded uploads into immutable `SourceImage`s.
// Batches are decoded concurrently on tokio's blocking pool and joined
// all-or-nothing.

use image::{DynamicImage, GenericImageView};
use stitchwerk_core::ImageId;
use stitchwerk_core::error::{Result, StitchError};
use tracing::{debug, info, instrument, warn};

use crate::digest::fingerprint;

/// An upload that has not been decoded yet.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    /// Display name, usually the file name.
    pub name: String,
    /// Encoded bytes (PNG, JPEG, WebP, ...).
    pub bytes: Vec<u8>,
}

impl EncodedImage {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// A decoded input image. Immutable once built; the compositor only reads it.
#[derive(Debug, Clone)]
pub struct SourceImage {
    id: ImageId,
    name: String,
    bytes: Vec<u8>,
    fingerprint: String,
    image: DynamicImage,
}

impl SourceImage {
    /// Wrap an already-decoded raster.
    ///
    /// There are no encoded bytes in this case, so `bytes()` is empty and the
    /// fingerprint covers the raw pixel buffer instead.
    pub fn from_dynamic(name: impl Into<String>, image: DynamicImage) -> Self {
        Self {
            id: ImageId::new(),
            name: name.into(),
            bytes: Vec::new(),
            fingerprint: fingerprint(image.as_bytes()),
            image,
        }
    }

    pub fn id(&self) -> ImageId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The encoded bytes this image was decoded from.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// SHA-256 of the encoded bytes.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }
}

/// Decode a single upload.
#[instrument(skip(encoded), fields(name = %encoded.name, data_len = encoded.bytes.len()))]
pub fn decode(encoded: EncodedImage) -> Result<SourceImage> {
    let image = image::load_from_memory(&encoded.bytes).map_err(|err| {
        StitchError::Decode(format!("{}: {}", encoded.name, err))
    })?;
    debug!(
        width = image.width(),
        height = image.height(),
        "Image decoded from bytes"
    );
    Ok(SourceImage {
        id: ImageId::new(),
        fingerprint: fingerprint(&encoded.bytes),
        name: encoded.name,
        bytes: encoded.bytes,
        image,
    })
}

/// Decode a batch concurrently and wait for every decode to finish.
///
/// The result preserves input order. If any decode fails the whole batch
/// fails with the first error in input order; there is no partial success.
#[instrument(skip_all, fields(count = batch.len()))]
pub async fn decode_all(batch: Vec<EncodedImage>) -> Result<Vec<SourceImage>> {
    let count = batch.len();
    let handles: Vec<_> = batch
        .into_iter()
        .map(|encoded| tokio::task::spawn_blocking(move || decode(encoded)))
        .collect();

    let mut decoded = Vec::with_capacity(count);
    for handle in handles {
        let outcome = handle
            .await
            .map_err(|err| StitchError::Decode(format!("decode task failed: {err}")))?;
        match outcome {
            Ok(image) => decoded.push(image),
            Err(err) => {
                warn!(error = %err, "Batch rejected");
                return Err(err);
            }
        }
    }

    info!(count, "Batch decoded");
    Ok(decoded)
}

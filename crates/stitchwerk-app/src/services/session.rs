// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stitching session — owns the ordered image list, the current settings and
// the last stitched output. Every mutation re-derives the output from scratch.
//
// All methods take `&mut self`, so at most one composite runs at a time; a
// newer composite simply replaces the stored output.

use std::path::{Path, PathBuf};

use stitchwerk_compose::{CompositedImage, Compositor, EncodedImage, SourceImage, decode_all};
use stitchwerk_core::error::{Result, StitchError};
use stitchwerk_core::types::{Background, ImageId, LayoutAxis, SizePolicy, StitchSettings};
use tracing::{debug, error, info, instrument};

use super::export::export_png;
use super::notifier::{Notification, Notifier};

pub struct StitchSession {
    images: Vec<SourceImage>,
    settings: StitchSettings,
    output: Option<CompositedImage>,
    is_stitching: bool,
    compositor: Compositor,
    notifier: Box<dyn Notifier>,
}

impl StitchSession {
    pub fn new(
        compositor: Compositor,
        settings: StitchSettings,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            images: Vec::new(),
            settings,
            output: None,
            is_stitching: false,
            compositor,
            notifier,
        }
    }

    // -- Accessors ------------------------------------------------------------

    /// Images in stitching order.
    pub fn images(&self) -> &[SourceImage] {
        &self.images
    }

    pub fn settings(&self) -> &StitchSettings {
        &self.settings
    }

    /// The most recent successful stitch, if any.
    pub fn output(&self) -> Option<&CompositedImage> {
        self.output.as_ref()
    }

    pub fn is_stitching(&self) -> bool {
        self.is_stitching
    }

    // -- Images ---------------------------------------------------------------

    /// Decode `batch` and append it, then restitch.
    ///
    /// Decoding is all-or-nothing: if any image fails, none are added.
    /// Returns the number of images added.
    pub async fn add_images(&mut self, batch: Vec<EncodedImage>) -> Result<usize> {
        if batch.is_empty() {
            return Ok(0);
        }
        let decoded = match decode_all(batch).await {
            Ok(decoded) => decoded,
            Err(err) => {
                self.notifier.notify(&Notification::UploadFailed {
                    detail: err.to_string(),
                });
                return Err(err);
            }
        };

        let count = decoded.len();
        self.images.extend(decoded);
        info!(added = count, total = self.images.len(), "images added");
        self.notifier.notify(&Notification::Uploaded { count });

        self.refresh()?;
        Ok(count)
    }

    /// Swap the image with its predecessor. No-op for the first image.
    pub fn move_up(&mut self, id: ImageId) -> Result<()> {
        let index = self.position(id)?;
        if index == 0 {
            return Ok(());
        }
        self.images.swap(index - 1, index);
        self.refresh()
    }

    /// Swap the image with its successor. No-op for the last image.
    pub fn move_down(&mut self, id: ImageId) -> Result<()> {
        let index = self.position(id)?;
        if index + 1 >= self.images.len() {
            return Ok(());
        }
        self.images.swap(index, index + 1);
        self.refresh()
    }

    /// Remove an image and restitch.
    ///
    /// Dropping below 2 images clears the output and resets the size policy
    /// and background to their defaults.
    pub fn remove(&mut self, id: ImageId) -> Result<SourceImage> {
        let index = self.position(id)?;
        let removed = self.images.remove(index);
        debug!(name = removed.name(), remaining = self.images.len(), "image removed");

        if self.images.len() < 2 {
            self.reset_output();
        } else {
            self.refresh()?;
        }
        Ok(removed)
    }

    /// Remove every image and reset the output.
    pub fn clear(&mut self) {
        self.images.clear();
        self.reset_output();
    }

    // -- Settings -------------------------------------------------------------

    pub fn set_axis(&mut self, axis: LayoutAxis) -> Result<()> {
        self.settings.axis = axis;
        self.refresh()
    }

    pub fn set_policy(&mut self, policy: SizePolicy) -> Result<()> {
        self.settings.policy = policy;
        self.refresh()
    }

    pub fn set_background(&mut self, background: Background) -> Result<()> {
        self.settings.background = background;
        self.refresh()
    }

    // -- Stitching ------------------------------------------------------------

    /// Stitch the current images with the current settings.
    ///
    /// On failure the previous output is kept and the error is both notified
    /// and returned. The busy flag is cleared either way.
    #[instrument(skip(self), fields(count = self.images.len()))]
    pub fn stitch(&mut self) -> Result<&CompositedImage> {
        if self.images.len() < 2 {
            self.notifier.notify(&Notification::InsufficientImages);
            return Err(StitchError::InsufficientInput {
                count: self.images.len(),
            });
        }

        self.is_stitching = true;
        let outcome = self.compositor.composite(&self.images, &self.settings);
        self.is_stitching = false;

        match outcome {
            Ok(image) => {
                self.notifier.notify(&Notification::Stitched {
                    width: image.width,
                    height: image.height,
                });
                Ok(&*self.output.insert(image))
            }
            Err(err) => {
                error!(error = %err, "stitching failed");
                self.notifier.notify(&Notification::StitchFailed {
                    detail: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Write the current output into `dir` as `stitched-image-<millis>.png`.
    pub fn export(&self, dir: &Path) -> Result<PathBuf> {
        let output = self.output.as_ref().ok_or(StitchError::NothingToExport)?;
        let path = export_png(output, dir)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.notifier
            .notify(&Notification::DownloadStarted { file_name });
        Ok(path)
    }

    // -- Internals ------------------------------------------------------------

    fn position(&self, id: ImageId) -> Result<usize> {
        self.images
            .iter()
            .position(|image| image.id() == id)
            .ok_or(StitchError::ImageNotFound(id))
    }

    /// Restitch if there is enough input; otherwise leave things alone.
    fn refresh(&mut self) -> Result<()> {
        if self.images.len() < 2 {
            return Ok(());
        }
        self.stitch().map(|_| ())
    }

    fn reset_output(&mut self) {
        self.output = None;
        self.settings.policy = SizePolicy::default();
        self.settings.background = Background::default();
        debug!("output cleared, policy and background reset");
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Compositor — stitches an ordered list of decoded images into one canvas.
//
// Pipeline: plan layout (size policy + bounds) -> allocate canvas -> fill
// background -> draw each image at its placement -> encode PNG.

pub mod layout;

use chrono::{DateTime, Utc};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage, imageops};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use stitchwerk_core::AppConfig;
use stitchwerk_core::config::DEFAULT_MAX_CANVAS_PIXELS;
use stitchwerk_core::error::{Result, StitchError};
use stitchwerk_core::types::{Background, ResampleFilter, StitchSettings};
use tracing::{debug, info, instrument};

use crate::decode::SourceImage;
use crate::digest::fingerprint;
use layout::{Placement, plan_layout};

/// The stitched result.
#[derive(Debug, Clone)]
pub struct CompositedImage {
    pub width: u32,
    pub height: u32,
    /// Where each input was drawn, in input order.
    pub placements: Vec<Placement>,
    /// The canvas as drawn.
    pub raster: RgbaImage,
    /// `raster` encoded as PNG.
    pub png: Vec<u8>,
    /// SHA-256 of `png`.
    pub fingerprint: String,
    pub created_at: DateTime<Utc>,
}

/// Stateless stitching engine. Holds only rendering options, so one instance
/// can serve any number of composites.
#[derive(Debug, Clone, Copy)]
pub struct Compositor {
    filter: ResampleFilter,
    max_canvas_pixels: u64,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(ResampleFilter::default(), DEFAULT_MAX_CANVAS_PIXELS)
    }
}

impl Compositor {
    pub fn new(filter: ResampleFilter, max_canvas_pixels: u64) -> Self {
        Self {
            filter,
            max_canvas_pixels,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.filter, config.max_canvas_pixels)
    }

    /// Stitch `images` in order according to `settings`.
    ///
    /// Fails with `InsufficientInput` for fewer than 2 images and with
    /// `RenderingUnavailable` when the canvas cannot be allocated.
    #[instrument(skip_all, fields(
        count = images.len(),
        axis = %settings.axis,
        policy = %settings.policy,
        background = %settings.background,
    ))]
    pub fn composite(
        &self,
        images: &[SourceImage],
        settings: &StitchSettings,
    ) -> Result<CompositedImage> {
        let dimensions: Vec<_> = images.iter().map(SourceImage::dimensions).collect();
        let layout = plan_layout(&dimensions, settings.axis, settings.policy)?;
        debug!(width = layout.width, height = layout.height, "Layout planned");

        let mut canvas = self.allocate_canvas(layout.width, layout.height)?;

        if let Background::Color(rgb) = settings.background {
            draw_filled_rect_mut(
                &mut canvas,
                Rect::at(0, 0).of_size(layout.width, layout.height),
                Rgba(rgb.to_rgba()),
            );
        }

        for (source, placement) in images.iter().zip(&layout.placements) {
            self.draw(&mut canvas, source.as_dynamic(), placement);
        }

        let png = encode_png(&canvas)?;
        let fingerprint = fingerprint(&png);
        info!(
            width = layout.width,
            height = layout.height,
            png_len = png.len(),
            fingerprint = %fingerprint,
            "Images stitched"
        );

        Ok(CompositedImage {
            width: layout.width,
            height: layout.height,
            placements: layout.placements,
            raster: canvas,
            png,
            fingerprint,
            created_at: Utc::now(),
        })
    }

    /// A zero-alpha canvas, or `RenderingUnavailable` if one can't be had.
    fn allocate_canvas(&self, width: u32, height: u32) -> Result<RgbaImage> {
        if width == 0 || height == 0 {
            return Err(StitchError::RenderingUnavailable(format!(
                "cannot create a {width}x{height} canvas"
            )));
        }
        let pixels = u64::from(width) * u64::from(height);
        if pixels > self.max_canvas_pixels {
            return Err(StitchError::RenderingUnavailable(format!(
                "{width}x{height} canvas exceeds the {} pixel limit",
                self.max_canvas_pixels
            )));
        }
        Ok(RgbaImage::new(width, height))
    }

    /// Source-over draw of `image` at `placement`, resampling when the
    /// placement size differs from the decoded size.
    fn draw(&self, canvas: &mut RgbaImage, image: &DynamicImage, placement: &Placement) {
        let (x, y) = (i64::from(placement.x), i64::from(placement.y));
        if image.width() == placement.width && image.height() == placement.height {
            imageops::overlay(canvas, image, x, y);
            return;
        }

        debug!(
            from_w = image.width(),
            from_h = image.height(),
            to_w = placement.width,
            to_h = placement.height,
            "Resampling image"
        );
        let resized = image.resize_exact(
            placement.width,
            placement.height,
            self.filter.filter_type(),
        );
        imageops::overlay(canvas, &resized, x, y);
    }
}

fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    canvas
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|err| StitchError::Encode(err.to_string()))?;
    Ok(buffer)
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use stitchwerk_core::types::{LayoutAxis, Rgb, SizePolicy};

    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);

    fn solid(name: &str, width: u32, height: u32, colour: Rgba<u8>) -> SourceImage {
        SourceImage::from_dynamic(
            name,
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, colour)),
        )
    }

    fn pair() -> Vec<SourceImage> {
        vec![solid("a", 100, 50, BLUE), solid("b", 80, 60, GREEN)]
    }

    fn settings(axis: LayoutAxis, policy: SizePolicy, background: Background) -> StitchSettings {
        StitchSettings {
            axis,
            policy,
            background,
        }
    }

    #[test]
    fn unscaled_horizontal_places_images_left_to_right() {
        let out = Compositor::default()
            .composite(&pair(), &StitchSettings::default())
            .unwrap();

        assert_eq!((out.width, out.height), (180, 60));
        assert_eq!((out.placements[0].x, out.placements[0].y), (0, 0));
        assert_eq!((out.placements[1].x, out.placements[1].y), (100, 0));
        assert_eq!(*out.raster.get_pixel(0, 0), BLUE);
        assert_eq!(*out.raster.get_pixel(99, 49), BLUE);
        assert_eq!(*out.raster.get_pixel(100, 0), GREEN);
        assert_eq!(*out.raster.get_pixel(179, 59), GREEN);
    }

    #[test]
    fn transparent_background_leaves_uncovered_pixels_clear() {
        let out = Compositor::default()
            .composite(&pair(), &StitchSettings::default())
            .unwrap();
        // Bottom-left corner lies under the shorter first image.
        assert_eq!(out.raster.get_pixel(0, 59)[3], 0);
        assert_eq!(out.raster.get_pixel(99, 50)[3], 0);
    }

    #[test]
    fn colour_background_fills_uncovered_pixels() {
        let background = Background::Color(Rgb([255, 0, 0]));
        let out = Compositor::default()
            .composite(
                &pair(),
                &settings(LayoutAxis::Horizontal, SizePolicy::None, background),
            )
            .unwrap();
        assert_eq!(*out.raster.get_pixel(0, 59), Rgba([255, 0, 0, 255]));
        assert_eq!(*out.raster.get_pixel(0, 0), BLUE);
    }

    #[test]
    fn max_policy_resizes_to_tallest() {
        let out = Compositor::default()
            .composite(
                &pair(),
                &settings(LayoutAxis::Horizontal, SizePolicy::Max, Background::Transparent),
            )
            .unwrap();

        assert_eq!((out.width, out.height), (200, 60));
        assert_eq!(
            (out.placements[0].width, out.placements[0].height),
            (120, 60)
        );
        assert_eq!((out.placements[1].x, out.placements[1].width), (120, 80));
        // Every pixel is covered once both heights match.
        assert!(out.raster.get_pixel(0, 59)[3] >= 250);
        assert!(out.raster.get_pixel(60, 30)[2] >= 250);
        assert_eq!(*out.raster.get_pixel(150, 30), GREEN);
    }

    #[test]
    fn vertical_min_resizes_to_narrowest() {
        let out = Compositor::default()
            .composite(
                &pair(),
                &settings(LayoutAxis::Vertical, SizePolicy::Min, Background::Transparent),
            )
            .unwrap();

        // A: 100x50 -> 80x40; B stays 80x60.
        assert_eq!((out.width, out.height), (80, 100));
        assert_eq!(
            (out.placements[0].width, out.placements[0].height),
            (80, 40)
        );
        assert_eq!((out.placements[1].x, out.placements[1].y), (0, 40));
        assert_eq!(*out.raster.get_pixel(40, 70), GREEN);
    }

    #[test]
    fn unscaled_vertical_overhangs_at_left_edge() {
        let background = Background::Color(Rgb([1, 2, 3]));
        let out = Compositor::default()
            .composite(
                &pair(),
                &settings(LayoutAxis::Vertical, SizePolicy::None, background),
            )
            .unwrap();
        assert_eq!((out.width, out.height), (100, 110));
        assert_eq!(*out.raster.get_pixel(0, 50), GREEN);
        assert_eq!(*out.raster.get_pixel(99, 109), Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn fewer_than_two_images_is_rejected() {
        let compositor = Compositor::default();
        for images in [vec![], vec![solid("only", 10, 10, BLUE)]] {
            let count = images.len();
            match compositor.composite(&images, &StitchSettings::default()) {
                Err(StitchError::InsufficientInput { count: got }) => assert_eq!(got, count),
                other => panic!("expected InsufficientInput, got {other:?}"),
            }
        }
    }

    #[test]
    fn oversized_canvas_is_rendering_unavailable() {
        let compositor = Compositor::new(ResampleFilter::Nearest, 1_000);
        assert!(matches!(
            compositor.composite(&pair(), &StitchSettings::default()),
            Err(StitchError::RenderingUnavailable(_))
        ));
    }

    #[test]
    fn png_output_decodes_to_the_canvas() {
        let out = Compositor::default()
            .composite(&pair(), &StitchSettings::default())
            .unwrap();
        assert_eq!(out.fingerprint, fingerprint(&out.png));

        let decoded = image::load_from_memory_with_format(&out.png, ImageFormat::Png)
            .unwrap()
            .to_rgba8();
        assert_eq!(decoded.dimensions(), (180, 60));
        assert_eq!(decoded.as_raw(), out.raster.as_raw());
    }

    #[test]
    fn translucent_input_blends_over_background() {
        let images = vec![
            solid("clear", 10, 10, Rgba([255, 255, 255, 0])),
            solid("opaque", 10, 10, BLUE),
        ];
        let background = Background::Color(Rgb([255, 0, 0]));
        let out = Compositor::default()
            .composite(
                &images,
                &settings(LayoutAxis::Horizontal, SizePolicy::None, background),
            )
            .unwrap();
        // A fully transparent source leaves the background untouched.
        assert_eq!(*out.raster.get_pixel(5, 5), Rgba([255, 0, 0, 255]));
    }
}

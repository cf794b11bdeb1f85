// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Layout planning — pure geometry for a stitch. Computes every image's size
// after the size policy and its top-left position on the canvas.

use stitchwerk_core::error::{Result, StitchError};
use stitchwerk_core::types::{LayoutAxis, SizePolicy};

/// Where one input lands on the canvas, and at what size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Canvas bounds plus one placement per input, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub placements: Vec<Placement>,
}

/// Plan a stitch of images with the given `(width, height)` dimensions.
///
/// Images are laid end to end along `axis` starting at offset 0, each with a
/// cross-axis offset of 0. Under `Min`/`Max` every cross extent becomes the
/// smallest/largest observed one and the along extent scales with it.
pub fn plan_layout(
    dimensions: &[(u32, u32)],
    axis: LayoutAxis,
    policy: SizePolicy,
) -> Result<Layout> {
    if dimensions.len() < 2 {
        return Err(StitchError::InsufficientInput {
            count: dimensions.len(),
        });
    }

    let crosses = dimensions.iter().map(|&(w, h)| axis.split(w, h).1);
    let target = match policy {
        SizePolicy::None => None,
        SizePolicy::Min => crosses.min(),
        SizePolicy::Max => crosses.max(),
    };

    let mut placements = Vec::with_capacity(dimensions.len());
    let mut offset: u64 = 0;
    let mut cross_bound: u32 = 0;

    for &(width, height) in dimensions {
        let (along, cross) = axis.split(width, height);
        let (along, cross) = match target {
            Some(target) => (scale_along(along, cross, target), target),
            None => (along, cross),
        };

        let start = u32::try_from(offset).map_err(|_| too_wide(axis))?;
        let (x, y) = axis.join(start, 0);
        let (width, height) = axis.join(along, cross);
        placements.push(Placement {
            x,
            y,
            width,
            height,
        });

        offset += u64::from(along);
        cross_bound = cross_bound.max(cross);
    }

    let along_bound = u32::try_from(offset).map_err(|_| too_wide(axis))?;
    let (width, height) = axis.join(along_bound, cross_bound);
    Ok(Layout {
        width,
        height,
        placements,
    })
}

/// Scale `along` by `target / cross`, rounded to the nearest pixel, never 0.
fn scale_along(along: u32, cross: u32, target: u32) -> u32 {
    if cross == 0 {
        return along;
    }
    let scaled = f64::from(along) * f64::from(target) / f64::from(cross);
    (scaled.round() as u32).max(1)
}

fn too_wide(axis: LayoutAxis) -> StitchError {
    StitchError::RenderingUnavailable(format!("{axis} extent exceeds {} pixels", u32::MAX))
}

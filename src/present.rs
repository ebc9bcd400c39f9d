/* taylorcircle | present.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/******************************************************************************/

use std::path::PathBuf;

use image::{GrayImage, ImageBuffer, Luma};

use crate::error::Result;
use crate::point::PointSequence;

/******************************************************************************/

/// Consumer of a finished point sequence
pub trait Presenter {
    fn present(&mut self, points: &PointSequence) -> Result<()>;
}

/// Draws the points white on a black canvas, skipping those off-screen
pub fn rasterize(points: &PointSequence, width: u32, height: u32) -> GrayImage {
    let mut canvas: GrayImage = ImageBuffer::from_pixel(width, height, Luma([0]));
    for point in points {
        let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
            continue;
        };
        if x < width && y < height {
            canvas.put_pixel(x, y, Luma([255]));
        }
    }
    canvas
}

/// Writes each presented sequence to a PNG file
#[derive(Clone, Debug)]
pub struct RasterPresenter {
    pub width: u32,
    pub height: u32,
    pub path: PathBuf,
}

impl RasterPresenter {
    pub fn new(width: u32, height: u32, path: impl Into<PathBuf>) -> Self {
        Self {
            width,
            height,
            path: path.into(),
        }
    }
}

impl Presenter for RasterPresenter {
    fn present(&mut self, points: &PointSequence) -> Result<()> {
        let canvas = rasterize(points, self.width, self.height);
        canvas.save_with_format(&self.path, image::ImageFormat::Png)?;
        tracing::info!(path = %self.path.display(), points = points.len(), "circle rendered");
        Ok(())
    }
}

/******************************************************************************/

//! Background stripping for uploaded logos.
//!
//! The background color is estimated from the image's own corners, then
//! every pixel close to it (unweighted Euclidean RGB distance) fades to
//! transparent in proportion to how close it is. A final pass averages
//! the alphas of boundary pixels to soften the stair-stepping a hard
//! per-pixel threshold leaves behind.

use image::RgbaImage;
use rayon::prelude::*;
use tracing::debug;

use crate::error::{Error, Result};

/// Edge length of each corner sample window, in pixels
const CORNER_SAMPLE: u32 = 20;

/// Smallest accepted sensitivity
pub const MIN_SENSITIVITY: u32 = 150;
/// Largest accepted sensitivity
pub const MAX_SENSITIVITY: u32 = 250;

/// Parameters for one background-removal pass.
///
/// `sensitivity` is a linear threshold on RGB distance, not a
/// percentage: higher values remove more pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalParams {
    /// Distance threshold in `[MIN_SENSITIVITY, MAX_SENSITIVITY]`
    pub sensitivity: u32,
}

impl RemovalParams {
    /// Validated constructor
    pub fn new(sensitivity: u32) -> Result<Self> {
        let params = Self { sensitivity };
        params.validate()?;
        Ok(params)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !(MIN_SENSITIVITY..=MAX_SENSITIVITY).contains(&self.sensitivity) {
            return Err(Error::invalid_style(format!(
                "sensitivity {} outside [{MIN_SENSITIVITY}, {MAX_SENSITIVITY}]",
                self.sensitivity
            )));
        }
        Ok(())
    }
}

impl Default for RemovalParams {
    fn default() -> Self {
        // The card editor's default for logo uploads
        Self { sensitivity: 220 }
    }
}

/// Mean RGB over the four corner windows, clipped to image bounds.
/// Sampling a window instead of single pixels keeps the estimate stable
/// against noise and anti-aliasing in the source.
fn sample_background(img: &RgbaImage) -> [f32; 3] {
    let (width, height) = img.dimensions();
    let win = CORNER_SAMPLE.min(width).min(height);

    let mut sum = [0f64; 3];
    let mut count = 0u64;
    for (x0, x1) in [(0, win), (width - win, width)] {
        for (y0, y1) in [(0, win), (height - win, height)] {
            for y in y0..y1 {
                for x in x0..x1 {
                    let p = img.get_pixel(x, y);
                    sum[0] += p[0] as f64;
                    sum[1] += p[1] as f64;
                    sum[2] += p[2] as f64;
                    count += 1;
                }
            }
        }
    }
    [
        (sum[0] / count as f64) as f32,
        (sum[1] / count as f64) as f32,
        (sum[2] / count as f64) as f32,
    ]
}

/// Strip the corner-sampled background color out of `image`.
///
/// Returns a new buffer; the input is never mutated. An image with no
/// pixel near the background estimate comes back fully opaque, which is
/// a valid no-op rather than an error.
pub fn remove_background(image: &RgbaImage, params: &RemovalParams) -> Result<RgbaImage> {
    params.validate()?;

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Ok(image.clone());
    }

    let background = sample_background(image);
    debug!(?background, sensitivity = params.sensitivity, "stripping background");

    let w = width as usize;
    let stride = w * 4;
    let sensitivity = params.sensitivity as f32;

    let mut out = image.clone();
    {
        let data: &mut [u8] = &mut out;
        data.par_chunks_mut(stride).for_each(|row| {
            for x in 0..w {
                let i = x * 4;
                // Already-transparent pixels stay transparent
                if row[i + 3] == 0 {
                    continue;
                }
                let dr = row[i] as f32 - background[0];
                let dg = row[i + 1] as f32 - background[1];
                let db = row[i + 2] as f32 - background[2];
                let distance = (dr * dr + dg * dg + db * db).sqrt();
                row[i + 3] = if distance < sensitivity {
                    (distance / sensitivity * 255.0) as u8
                } else {
                    255
                };
            }
        });
    }

    smooth_edges(&mut out);
    Ok(out)
}

/// One smoothing pass: every boundary pixel (alpha strictly between 0
/// and 255) takes the average of its own and its in-bounds direct
/// neighbors' pre-pass alphas.
fn smooth_edges(img: &mut RgbaImage) {
    let (width, height) = img.dimensions();
    let w = width as usize;
    let h = height as usize;
    let stride = w * 4;

    let alphas: Vec<u8> = img.pixels().map(|p| p[3]).collect();

    let data: &mut [u8] = &mut *img;
    data.par_chunks_mut(stride).enumerate().for_each(|(y, row)| {
        for x in 0..w {
            let alpha = alphas[y * w + x];
            if alpha == 0 || alpha == 255 {
                continue;
            }
            let mut sum = alpha as u32;
            let mut n = 1u32;
            if x > 0 {
                sum += alphas[y * w + x - 1] as u32;
                n += 1;
            }
            if x + 1 < w {
                sum += alphas[y * w + x + 1] as u32;
                n += 1;
            }
            if y > 0 {
                sum += alphas[(y - 1) * w + x] as u32;
                n += 1;
            }
            if y + 1 < h {
                sum += alphas[(y + 1) * w + x] as u32;
                n += 1;
            }
            row[x * 4 + 3] = (sum / n) as u8;
        }
    });
}

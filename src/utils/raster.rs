//! Raster glue: decoding, PNG export, cropping, resize helpers.
//!
//! These keep the load -> decode -> transform pipeline explicit so the
//! pure stages can be tested on plain buffers.

use std::io::Cursor;

use base64::Engine;
use image::{ImageFormat, RgbaImage, imageops};

use crate::error::{Error, Result};

/// Decode raw bytes (PNG, JPEG, ...) into an RGBA buffer
pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| Error::image_load(format!("could not decode image: {e}")))?;
    Ok(img.to_rgba8())
}

/// Encode an RGBA buffer as PNG bytes
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| Error::image_load(format!("could not encode PNG: {e}")))?;
    Ok(buf.into_inner())
}

/// Encode an RGBA buffer as a `data:image/png;base64,` URL, the form the
/// card editor embeds directly in the page
pub fn to_data_url(img: &RgbaImage) -> Result<String> {
    let png = encode_png(img)?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(&png);
    Ok(format!("data:image/png;base64,{encoded}"))
}

/// Rectangular crop. The region must lie fully within the source image.
pub fn crop(img: &RgbaImage, x: u32, y: u32, width: u32, height: u32) -> Result<RgbaImage> {
    let in_bounds = width > 0
        && height > 0
        && x.checked_add(width).is_some_and(|r| r <= img.width())
        && y.checked_add(height).is_some_and(|b| b <= img.height());
    if !in_bounds {
        return Err(Error::invalid_style(format!(
            "crop region {width}x{height}+{x}+{y} outside {}x{} image",
            img.width(),
            img.height()
        )));
    }
    Ok(imageops::crop_imm(img, x, y, width, height).to_image())
}

/// True if any pixel is not fully opaque
pub fn has_transparency(img: &RgbaImage) -> bool {
    img.pixels().any(|p| p[3] < 255)
}

/// Nearest-neighbor resize to exact dimensions. Keeps QR module edges
/// hard instead of introducing gray transition pixels.
pub fn resize_nearest(img: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    imageops::resize(img, width, height, imageops::FilterType::Nearest)
}

//! Decoration pipeline: sticker ring, frame, QR symbol, center mark.
//!
//! Stages paint onto one canvas in a fixed order. Later stages only
//! touch the central region, so the outer decoration always survives:
//! the sticker ring sits outside the frame's bounding radius, the frame
//! (650/800 of the edge) is strictly larger than the symbol (280/800),
//! and the symbol keeps its own quiet zone inside the frame's white
//! fill.

mod canvas;
mod center_mark;
mod frame;
mod icons;
mod sticker;

use canvas::Canvas;

use image::RgbaImage;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::CardStyle;
use crate::utils::raster::resize_nearest;

/// Smallest accepted output edge, in pixels
pub const MIN_OUTPUT_SIZE: u32 = 200;
/// Largest accepted output edge, in pixels
pub const MAX_OUTPUT_SIZE: u32 = 2000;

/// Fraction of the canvas edge covered by the QR symbol
pub(crate) const QR_RATIO: f32 = 280.0 / 800.0;

/// Edge length at which the symbol is drawn for a given output size
pub(crate) fn qr_edge(output_size: u32) -> u32 {
    (QR_RATIO * output_size as f32).round() as u32
}

/// Reject out-of-range output sizes before any drawing work
pub(crate) fn validate_output_size(output_size: u32) -> Result<()> {
    if !(MIN_OUTPUT_SIZE..=MAX_OUTPUT_SIZE).contains(&output_size) {
        return Err(Error::invalid_style(format!(
            "output size {output_size} outside [{MIN_OUTPUT_SIZE}, {MAX_OUTPUT_SIZE}]"
        )));
    }
    Ok(())
}

/// Composite a fetched symbol and a style onto a fresh canvas.
///
/// The symbol is scaled to 280/800 of the edge with nearest-neighbor
/// sampling and drawn centered over the frame.
pub(crate) fn compose(symbol: &RgbaImage, style: &CardStyle, output_size: u32) -> RgbaImage {
    let mut canvas = Canvas::new(output_size);

    sticker::draw_sticker(&mut canvas, style);
    frame::draw_frame(&mut canvas, style);

    let edge = qr_edge(output_size);
    let scaled = resize_nearest(symbol, edge, edge);
    let offset = (output_size - edge) / 2;
    canvas.overlay(&scaled, offset, offset);
    debug!(output_size, edge, "composited symbol onto canvas");

    center_mark::draw_center_mark(&mut canvas, style);
    canvas.into_image()
}

//! Post-render scan verification.
//!
//! The card editor only warns users to "test before printing"; this
//! module offers the stronger contract of actually decoding the finished
//! canvas and comparing it against the payload it was supposed to carry.

use image::RgbaImage;
use tracing::debug;

use crate::error::{Error, Result};

/// Decode whatever QR symbol `image` contains.
///
/// Luminance uses the fast integer approximation
/// `Y = (76*R + 150*G + 29*B) >> 8`.
pub fn decode(image: &RgbaImage) -> Result<String> {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(width, height, |x, y| {
        let p = image.get_pixel(x as u32, y as u32);
        ((76 * p[0] as u32 + 150 * p[1] as u32 + 29 * p[2] as u32) >> 8) as u8
    });

    let grids = prepared.detect_grids();
    if grids.is_empty() {
        return Err(Error::ScanFailed);
    }

    for grid in &grids {
        match grid.decode() {
            Ok((meta, content)) => {
                debug!(version = ?meta.version, ecc = meta.ecc_level, "decoded symbol");
                return Ok(content);
            }
            Err(e) => debug!("grid failed to decode: {e:?}"),
        }
    }
    Err(Error::ScanFailed)
}

/// Decode `image` and require it to yield exactly `expected`
pub fn verify_scan(image: &RgbaImage, expected: &str) -> Result<()> {
    let content = decode(image)?;
    if content == expected {
        Ok(())
    } else {
        Err(Error::ScanFailed)
    }
}

//! QR symbol sources.
//!
//! The decorator only needs "given text, get back a square raster QR
//! image of at least N pixels". [`LocalEncoder`] produces one with the
//! `qrcode` crate; [`RemoteGenerator`] fetches one from an HTTP
//! generator, the collaborator the card app shipped with. Both encode at
//! error correction level M for headroom against center-mark occlusion.

use std::time::Duration;

use async_trait::async_trait;
use image::{Rgba, RgbaImage};
use qrcode::{EcLevel, QrCode};
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::models::contact::MAX_VCARD_BYTES;

/// Quiet-zone width in modules around the symbol
const QUIET_ZONE_MODULES: u32 = 4;

/// Timeout for one remote symbol fetch
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Default remote generator endpoint
pub const DEFAULT_GENERATOR_URL: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Produces square QR symbol images for text payloads
#[async_trait]
pub trait QrSource: Send + Sync {
    /// Produce a symbol image for `payload`, at least `size_px` on a side
    async fn symbol(&self, payload: &str, size_px: u32) -> Result<RgbaImage>;
}

/// Encodes symbols locally with the `qrcode` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalEncoder;

impl LocalEncoder {
    /// Encode `payload` into a symbol image of at least `size_px` pixels.
    ///
    /// The module count is chosen by the encoder; modules are drawn at an
    /// integral pixel size with a 4-module quiet zone, so the result may
    /// be slightly larger than requested but never smaller.
    pub fn encode(&self, payload: &str, size_px: u32) -> Result<RgbaImage> {
        check_payload(payload)?;
        let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::M)
            .map_err(|e| Error::qr_generation(format!("encoding failed: {e:?}")))?;
        debug!(modules = code.width(), size_px, "encoded QR symbol");
        Ok(rasterize(&code, size_px))
    }
}

#[async_trait]
impl QrSource for LocalEncoder {
    async fn symbol(&self, payload: &str, size_px: u32) -> Result<RgbaImage> {
        self.encode(payload, size_px)
    }
}

/// Reject payloads a version 40 symbol at level M cannot carry
fn check_payload(payload: &str) -> Result<()> {
    if payload.is_empty() {
        return Err(Error::invalid_style("payload must not be empty"));
    }
    if payload.len() > MAX_VCARD_BYTES {
        return Err(Error::qr_generation(format!(
            "payload is {} bytes, above the {MAX_VCARD_BYTES} byte capacity \
             of a version 40 symbol at level M",
            payload.len()
        )));
    }
    Ok(())
}

/// Render a symbol matrix into pixels, dark modules black on white
fn rasterize(code: &QrCode, size_px: u32) -> RgbaImage {
    let modules = code.width() as u32;
    let total = modules + 2 * QUIET_ZONE_MODULES;
    let module_px = size_px.div_ceil(total).max(1);
    let edge = total * module_px;

    let black = Rgba([0, 0, 0, 255]);
    let mut img = RgbaImage::from_pixel(edge, edge, Rgba([255, 255, 255, 255]));
    for y in 0..modules {
        for x in 0..modules {
            if !matches!(code[(x as usize, y as usize)], qrcode::Color::Dark) {
                continue;
            }
            let x0 = (QUIET_ZONE_MODULES + x) * module_px;
            let y0 = (QUIET_ZONE_MODULES + y) * module_px;
            for py in y0..y0 + module_px {
                for px in x0..x0 + module_px {
                    img.put_pixel(px, py, black);
                }
            }
        }
    }
    img
}

/// Fetches symbols from a remote QR image generator
pub struct RemoteGenerator {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteGenerator {
    /// Generator pointed at the default public endpoint
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_GENERATOR_URL)
    }

    /// Generator pointed at a custom endpoint (used by tests and
    /// self-hosted deployments)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| Error::qr_generation(format!("could not build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl QrSource for RemoteGenerator {
    async fn symbol(&self, payload: &str, size_px: u32) -> Result<RgbaImage> {
        check_payload(payload)?;

        let mut url = Url::parse(&self.base_url)
            .map_err(|e| Error::qr_generation(format!("bad generator URL: {e}")))?;
        url.query_pairs_mut()
            .append_pair("size", &format!("{size_px}x{size_px}"))
            .append_pair("data", payload)
            .append_pair("format", "png");

        debug!(%url, "fetching QR symbol");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::qr_generation(format!("generator unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::qr_generation(format!("generator returned {status}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::qr_generation(format!("reading generator response: {e}")))?;
        let img = image::load_from_memory(&bytes).map_err(|e| {
            Error::qr_generation(format!("generator returned an undecodable image: {e}"))
        })?;
        Ok(img.to_rgba8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_encode_size_and_quiet_zone() {
        let img = LocalEncoder.encode("HELLO", 200).unwrap();
        assert!(img.width() >= 200);
        assert_eq!(img.width(), img.height());

        // The quiet zone leaves the border white
        let edge = img.width();
        for i in 0..edge {
            assert_eq!(img.get_pixel(i, 0)[0], 255);
            assert_eq!(img.get_pixel(0, i)[0], 255);
            assert_eq!(img.get_pixel(i, edge - 1)[0], 255);
        }
    }

    #[test]
    fn test_local_encode_is_deterministic() {
        let a = LocalEncoder.encode("BEGIN:VCARD\nEND:VCARD", 280).unwrap();
        let b = LocalEncoder.encode("BEGIN:VCARD\nEND:VCARD", 280).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_local_encode_rejects_empty() {
        assert!(matches!(
            LocalEncoder.encode("", 280),
            Err(Error::InvalidStyle { .. })
        ));
    }

    #[test]
    fn test_local_encode_rejects_oversized_payload() {
        let payload = "a".repeat(MAX_VCARD_BYTES + 1);
        assert!(matches!(
            LocalEncoder.encode(&payload, 280),
            Err(Error::QrGeneration { .. })
        ));
    }

    #[test]
    fn test_local_symbol_decodes_back() {
        let img = LocalEncoder.encode("https://cosma.cards/jane", 280).unwrap();
        let content = crate::scan::decode(&img).unwrap();
        assert_eq!(content, "https://cosma.cards/jane");
    }
}

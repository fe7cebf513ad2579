//! Cosma QR core - QR code decoration and logo background removal for
//! digital business cards.
//!
//! Two independent, stateless pipelines over in-memory RGBA buffers:
//!
//! - **Decoration**: serialize a [`ContactCard`] to vCard 3.0, obtain a
//!   QR symbol for it (locally encoded or fetched from a remote
//!   generator), and composite it inside a shape frame with a decorative
//!   border and an optional center mark - while keeping it scannable.
//! - **Background stripping**: estimate an uploaded logo's background
//!   color from its own corners and fade matching pixels to transparent.
//!
//! Every call is independent: no shared state, no ordering between
//! concurrent renders. A caller reacting to rapid style changes should
//! drop stale in-flight results itself (last write wins); nothing here
//! coordinates that.
//!
//! ```no_run
//! use cosma_qr::{CardStyle, ContactCard, Decorator, FrameShape};
//!
//! # async fn demo() -> cosma_qr::Result<()> {
//! let card = ContactCard::named("Jane Doe");
//! let style = CardStyle::new().with_frame(FrameShape::Circle);
//! let png = Decorator::new().render_png(&card, &style, 800).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Decoration pipeline (canvas, frames, stickers, center marks)
pub mod decorator;
/// Error types shared across the pipelines
pub mod error;
/// Core data structures (ContactCard, CardStyle, Point)
pub mod models;
/// Post-render scan verification
pub mod scan;
/// QR symbol sources (local encoder, remote generator)
pub mod source;
/// Background stripping for uploaded logos
pub mod stripper;
/// Raster and geometry helpers
pub mod utils;

pub use decorator::{MAX_OUTPUT_SIZE, MIN_OUTPUT_SIZE};
pub use error::{Error, Result};
pub use models::{
    BorderSticker, CardStyle, CenterMark, ColorTheme, ContactCard, FrameShape, NamedIcon, Rgb,
    SocialLink,
};
pub use source::{LocalEncoder, QrSource, RemoteGenerator};
pub use stripper::{MAX_SENSITIVITY, MIN_SENSITIVITY, RemovalParams, remove_background};

use image::RgbaImage;
use tracing::warn;

/// Render a decorated card QR image with the default local encoder
///
/// # Arguments
/// * `card` - Contact record to encode
/// * `style` - Frame, border, center-mark, and theme choices
/// * `output_size` - Square canvas edge in pixels, 200 to 2000
///
/// # Returns
/// The finished RGBA canvas
pub async fn decorate(card: &ContactCard, style: &CardStyle, output_size: u32) -> Result<RgbaImage> {
    Decorator::new().render(card, style, output_size).await
}

/// Decorator with configuration options: which symbol source to use and
/// whether to verify the finished canvas still scans.
pub struct Decorator {
    source: Box<dyn QrSource>,
    verify: bool,
}

impl Decorator {
    /// Decorator backed by the local encoder, verification off
    pub fn new() -> Self {
        Self {
            source: Box::new(LocalEncoder),
            verify: false,
        }
    }

    /// Decorator backed by a custom symbol source
    pub fn with_source(source: impl QrSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            verify: false,
        }
    }

    /// Enable or disable post-render scan verification.
    ///
    /// When enabled, the finished canvas is decoded and must yield the
    /// exact serialized payload, otherwise the render fails with
    /// [`Error::ScanFailed`]. This is stricter than the card editor,
    /// which only advises testing before printing.
    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Render the decorated QR image for `card`.
    ///
    /// Fails fast on out-of-range `output_size` or an oversized payload
    /// before any symbol work; a symbol fetch or encode failure aborts
    /// the whole render with no partial image.
    pub async fn render(
        &self,
        card: &ContactCard,
        style: &CardStyle,
        output_size: u32,
    ) -> Result<RgbaImage> {
        decorator::validate_output_size(output_size)?;
        let payload = card.to_vcard();

        let symbol = self
            .source
            .symbol(&payload, decorator::qr_edge(output_size))
            .await?;
        let image = decorator::compose(&symbol, style, output_size);

        if self.verify {
            scan::verify_scan(&image, &payload)?;
        } else if !matches!(style.center_mark, CenterMark::None) {
            warn!("center mark occludes symbol modules; test the printed code scans");
        }
        Ok(image)
    }

    /// Render and encode as PNG bytes
    pub async fn render_png(
        &self,
        card: &ContactCard,
        style: &CardStyle,
        output_size: u32,
    ) -> Result<Vec<u8>> {
        let image = self.render(card, style, output_size).await?;
        utils::raster::encode_png(&image)
    }

    /// Render and encode as a `data:image/png;base64,` URL
    pub async fn render_data_url(
        &self,
        card: &ContactCard,
        style: &CardStyle,
        output_size: u32,
    ) -> Result<String> {
        let image = self.render(card, style, output_size).await?;
        utils::raster::to_data_url(&image)
    }
}

impl Default for Decorator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_render_rejects_bad_output_size() {
        let card = ContactCard::named("Jane Doe");
        let style = CardStyle::new();
        assert!(matches!(
            decorate(&card, &style, 100).await,
            Err(Error::InvalidStyle { .. })
        ));
        assert!(matches!(
            decorate(&card, &style, 4000).await,
            Err(Error::InvalidStyle { .. })
        ));
    }

    #[tokio::test]
    async fn test_render_dimensions() {
        let card = ContactCard::named("Jane Doe");
        let style = CardStyle::new().with_frame(FrameShape::Circle);
        let image = decorate(&card, &style, 800).await.unwrap();
        assert_eq!(image.dimensions(), (800, 800));
    }

    #[tokio::test]
    async fn test_render_rejects_oversized_payload() {
        let card = ContactCard {
            name: "x".repeat(3000),
            ..ContactCard::default()
        };
        assert!(matches!(
            decorate(&card, &CardStyle::new(), 800).await,
            Err(Error::QrGeneration { .. })
        ));
    }

    #[tokio::test]
    async fn test_render_is_deterministic() {
        let card = ContactCard::named("Jane Doe");
        let style = CardStyle::new()
            .with_frame(FrameShape::Hexagon)
            .with_sticker(BorderSticker::Wreath);
        let a = decorate(&card, &style, 640).await.unwrap();
        let b = decorate(&card, &style, 640).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_verified_render_round_trips() {
        let card = ContactCard {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            ..ContactCard::default()
        };
        let style = CardStyle::new().with_frame(FrameShape::Circle);
        let image = Decorator::new()
            .with_verification(true)
            .render(&card, &style, 800)
            .await
            .unwrap();
        assert_eq!(scan::decode(&image).unwrap(), card.to_vcard());
    }
}

use image::RgbaImage;

use crate::error::Result;
use crate::utils::raster::decode_image;

/// RGB color used for frame strokes and decoration fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Opaque white
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string (the form theme colors are stored in)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }
}

/// Frame shape drawn behind the QR symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameShape {
    /// No frame; the symbol sits directly on the canvas
    #[default]
    None,
    /// Round frame
    Circle,
    /// Diamond shape
    Diamond,
    /// Regular hexagon, apex up
    Hexagon,
    /// Five-pointed star
    Star,
    /// Regular pentagon, apex up
    Pentagon,
    /// Square with rounded corners
    RoundedSquare,
    /// Circle with notched edges
    Badge,
    /// Regular octagon, flat side up
    Octagon,
    /// Heraldic shield with curved bottom corners
    Shield,
}

/// Decorative ring drawn outside the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderSticker {
    /// No decoration
    #[default]
    None,
    /// Ring of green holiday dots
    Wreath,
    /// Ring of large pink petals
    FlowerBorder,
    /// Ornate double square frame
    VintageFrame,
    /// Ribbon crosses in the four corners
    RibbonBadge,
    /// Ring of rotated laurel leaves
    LaurelWreath,
    /// Radiating rays
    Sunburst,
    /// Dashed circle
    DottedBorder,
    /// Ring of scallop dots
    ScallopEdge,
    /// Ring of open triangles
    Geometric,
}

/// Named center-mark glyphs offered by the card editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedIcon {
    /// Rocket ship
    Rocket,
    /// Five-pointed star
    Star,
    /// Heart
    Heart,
    /// Lightning bolt
    Bolt,
    /// Three-pointed crown
    Crown,
    /// Flame
    Fire,
    /// Cut gemstone
    Diamond,
    /// Trophy cup
    Trophy,
    /// Ring with a stone
    Gem,
    /// Medal on a ribbon
    Medal,
}

/// Center mark composited over the middle of the QR symbol.
///
/// The icon and custom-logo variants are mutually exclusive by
/// construction: selecting one through [`CardStyle`] clears the other.
#[derive(Debug, Clone, Default)]
pub enum CenterMark {
    /// No center mark
    #[default]
    None,
    /// One of the built-in glyphs, drawn in the theme's primary color
    Icon(NamedIcon),
    /// A custom uploaded logo, already decoded
    Logo(RgbaImage),
}

/// Theme colors applied to frame strokes and themed decorations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTheme {
    /// Frame stroke and primary decoration color
    pub primary: Rgb,
    /// Accent decoration color
    pub accent: Rgb,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Rgb::new(0x00, 0x34, 0x3d),
            accent: Rgb::new(0x3b, 0x82, 0xf6),
        }
    }
}

/// The styling choices driving one decoration pass
#[derive(Debug, Clone, Default)]
pub struct CardStyle {
    /// Frame shape behind the symbol
    pub frame: FrameShape,
    /// Decorative border outside the frame
    pub sticker: BorderSticker,
    /// Optional mark over the symbol's center
    pub center_mark: CenterMark,
    /// Theme colors
    pub theme: ColorTheme,
}

impl CardStyle {
    /// Style with no frame, no sticker, no center mark, default theme
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the frame shape
    pub fn with_frame(mut self, frame: FrameShape) -> Self {
        self.frame = frame;
        self
    }

    /// Set the border sticker
    pub fn with_sticker(mut self, sticker: BorderSticker) -> Self {
        self.sticker = sticker;
        self
    }

    /// Select a named icon as the center mark, clearing any custom logo
    pub fn with_icon(mut self, icon: NamedIcon) -> Self {
        self.center_mark = CenterMark::Icon(icon);
        self
    }

    /// Select a custom logo as the center mark, clearing any icon
    pub fn with_logo(mut self, logo: RgbaImage) -> Self {
        self.center_mark = CenterMark::Logo(logo);
        self
    }

    /// Decode raw uploaded bytes and select them as the center mark.
    ///
    /// Fails with [`Error::ImageLoad`](crate::Error::ImageLoad) before any
    /// drawing work if the bytes are not a decodable image; there is no
    /// silent blank-center fallback.
    pub fn with_logo_bytes(self, bytes: &[u8]) -> Result<Self> {
        let logo = decode_image(bytes)?;
        Ok(self.with_logo(logo))
    }

    /// Remove the center mark
    pub fn without_center_mark(mut self) -> Self {
        self.center_mark = CenterMark::None;
        self
    }

    /// Set the theme colors
    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.theme = theme;
        self
    }
}

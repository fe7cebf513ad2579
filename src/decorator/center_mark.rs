//! Center mark: a small white backing circle over the symbol's middle,
//! carrying either a named glyph or the uploaded logo.
//!
//! The backing circle is 70/800 of the canvas edge, small enough to stay
//! within the error-correction headroom of a level-M symbol. Whether the
//! result still scans is the caller's risk; see the decorator's
//! verification option.

use image::imageops;

use crate::decorator::canvas::Canvas;
use crate::decorator::icons::draw_icon;
use crate::models::{CardStyle, CenterMark, Rgb};

/// Backing circle diameter relative to the canvas edge
pub(crate) const MARK_RATIO: f32 = 70.0 / 800.0;

/// Inset of a custom logo inside the backing circle, in reference pixels
const LOGO_INSET: f32 = 8.0;

/// Composite the center mark onto the canvas. `None` draws nothing.
pub(crate) fn draw_center_mark(canvas: &mut Canvas, style: &CardStyle) {
    if matches!(style.center_mark, CenterMark::None) {
        return;
    }

    let size = canvas.size() as f32;
    let s = size / 800.0;
    let center = canvas.center();
    let diameter = MARK_RATIO * size;

    // White backing only, with a faint outline for visibility
    canvas.fill_circle(center, diameter / 2.0, Rgb::WHITE);
    canvas.stroke_circle(center, diameter / 2.0, 1.0, Rgb::new(229, 229, 229));

    match &style.center_mark {
        CenterMark::None => {}
        CenterMark::Icon(icon) => {
            draw_icon(canvas, *icon, center, 36.0 * s, style.theme.primary);
        }
        CenterMark::Logo(logo) => {
            let edge = (diameter - 2.0 * LOGO_INSET * s).round().max(1.0) as u32;
            let scaled = imageops::resize(logo, edge, edge, imageops::FilterType::Lanczos3);
            let offset = ((size - edge as f32) / 2.0).round() as u32;
            canvas.overlay(&scaled, offset, offset);
        }
    }
}

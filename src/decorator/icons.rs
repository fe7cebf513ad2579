//! Procedural vector glyphs for the named center-mark icons.
//!
//! The card editor renders these as emoji text; here each glyph is built
//! from canvas primitives so output stays deterministic and needs no
//! font. Shapes are simplified silhouettes sized to fit a box of `size`
//! pixels around `center`.

use std::f32::consts::PI;

use crate::decorator::canvas::Canvas;
use crate::models::{NamedIcon, Point, Rgb};
use crate::utils::geometry::star_polygon;

/// Draw one glyph in the given color
pub(crate) fn draw_icon(canvas: &mut Canvas, icon: NamedIcon, center: Point, size: f32, color: Rgb) {
    let h = size / 2.0;
    let (cx, cy) = (center.x, center.y);
    let at = |dx: f32, dy: f32| Point::new(cx + dx * h, cy + dy * h);

    match icon {
        NamedIcon::Rocket => {
            // Body with nose up, two fins, round porthole
            canvas.fill_ellipse(center, 0.35 * h, 0.85 * h, 0.0, color);
            canvas.fill_polygon(&[at(-0.3, 0.4), at(-0.75, 0.95), at(-0.2, 0.8)], color);
            canvas.fill_polygon(&[at(0.3, 0.4), at(0.75, 0.95), at(0.2, 0.8)], color);
            canvas.fill_circle(at(0.0, -0.25), 0.16 * h, Rgb::WHITE);
        }
        NamedIcon::Star => {
            let vertices = star_polygon(center, h, 0.4 * h, 5, -PI / 2.0);
            canvas.fill_polygon(&vertices, color);
        }
        NamedIcon::Heart => {
            canvas.fill_circle(at(-0.37, -0.25), 0.4 * h, color);
            canvas.fill_circle(at(0.37, -0.25), 0.4 * h, color);
            canvas.fill_polygon(&[at(-0.74, 0.0), at(0.74, 0.0), at(0.0, 0.9)], color);
        }
        NamedIcon::Bolt => {
            canvas.fill_polygon(
                &[
                    at(0.25, -1.0),
                    at(-0.5, 0.15),
                    at(-0.05, 0.15),
                    at(-0.25, 1.0),
                    at(0.5, -0.15),
                    at(0.05, -0.15),
                ],
                color,
            );
        }
        NamedIcon::Crown => {
            canvas.fill_polygon(
                &[
                    at(-0.85, 0.6),
                    at(-0.85, -0.35),
                    at(-0.4, 0.1),
                    at(0.0, -0.8),
                    at(0.4, 0.1),
                    at(0.85, -0.35),
                    at(0.85, 0.6),
                ],
                color,
            );
        }
        NamedIcon::Fire => {
            canvas.fill_circle(at(0.0, 0.35), 0.55 * h, color);
            canvas.fill_polygon(&[at(-0.5, 0.3), at(0.0, -1.0), at(0.5, 0.3)], color);
        }
        NamedIcon::Diamond => {
            canvas.fill_polygon(
                &[
                    at(-0.85, -0.3),
                    at(-0.45, -0.75),
                    at(0.45, -0.75),
                    at(0.85, -0.3),
                    at(0.0, 0.85),
                ],
                color,
            );
        }
        NamedIcon::Trophy => {
            canvas.fill_rect(cx - 0.5 * h, cy - 0.8 * h, 1.0 * h, 0.75 * h, color);
            canvas.stroke_circle(at(-0.6, -0.5), 0.25 * h, 0.12 * h, color);
            canvas.stroke_circle(at(0.6, -0.5), 0.25 * h, 0.12 * h, color);
            canvas.fill_rect(cx - 0.1 * h, cy - 0.05 * h, 0.2 * h, 0.45 * h, color);
            canvas.fill_rect(cx - 0.4 * h, cy + 0.4 * h, 0.8 * h, 0.25 * h, color);
        }
        NamedIcon::Gem => {
            canvas.stroke_circle(at(0.0, 0.25), 0.5 * h, 0.22 * h, color);
            canvas.fill_polygon(
                &[at(-0.3, -0.45), at(0.3, -0.45), at(0.0, -0.95)],
                color,
            );
        }
        NamedIcon::Medal => {
            canvas.fill_polygon(&[at(-0.45, -1.0), at(-0.05, -1.0), at(0.2, -0.2), at(-0.25, -0.2)], color);
            canvas.fill_polygon(&[at(0.05, -1.0), at(0.45, -1.0), at(0.25, -0.2), at(-0.15, -0.2)], color);
            canvas.fill_circle(at(0.0, 0.4), 0.55 * h, color);
        }
    }
}

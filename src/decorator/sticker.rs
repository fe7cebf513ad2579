//! Decorative border ring drawn outside the frame.
//!
//! Elements sit on a circle of radius `size/2 - 25s` (where `s` scales
//! the 800 px reference geometry), which keeps every decoration outside
//! the frame region and well clear of the QR symbol's bounding box.
//! Most stickers use fixed colors from the card editor's palette; the
//! dotted and geometric borders take the theme primary, the scallop edge
//! the theme accent.

use std::f32::consts::TAU;

use crate::decorator::canvas::Canvas;
use crate::models::{BorderSticker, CardStyle, Point, Rgb};

/// Draw the decorative border ring. `None` draws nothing.
pub(crate) fn draw_sticker(canvas: &mut Canvas, style: &CardStyle) {
    if style.sticker == BorderSticker::None {
        return;
    }

    let size = canvas.size() as f32;
    let s = size / 800.0;
    let center = canvas.center();
    let radius = size / 2.0 - 25.0 * s;

    match style.sticker {
        BorderSticker::None => {}
        BorderSticker::Wreath => {
            let green = Rgb::new(0x22, 0xc5, 0x5e);
            ring(20, |angle| {
                canvas.fill_circle(Point::from_polar(center, radius, angle), 18.0 * s, green);
            });
        }
        BorderSticker::FlowerBorder => {
            let pink = Rgb::new(0xec, 0x48, 0x99);
            ring(16, |angle| {
                canvas.fill_circle(Point::from_polar(center, radius, angle), 35.0 * s, pink);
            });
        }
        BorderSticker::VintageFrame => {
            let brown = Rgb::new(0x78, 0x35, 0x0f);
            let stroke = 16.0 * s;
            for margin in [40.0 * s, 65.0 * s] {
                canvas.stroke_rect(
                    margin,
                    margin,
                    size - margin * 2.0,
                    size - margin * 2.0,
                    stroke,
                    brown,
                );
            }
        }
        BorderSticker::RibbonBadge => {
            let red = Rgb::new(0xef, 0x44, 0x44);
            let inset = 60.0 * s;
            let arm = 80.0 * s;
            let thick = 20.0 * s;
            for (x, y) in [
                (inset, inset),
                (size - inset, inset),
                (inset, size - inset),
                (size - inset, size - inset),
            ] {
                canvas.fill_rect(x - arm / 2.0, y - thick / 2.0, arm, thick, red);
                canvas.fill_rect(x - thick / 2.0, y - arm / 2.0, thick, arm, red);
            }
        }
        BorderSticker::LaurelWreath => {
            let green = Rgb::new(0x16, 0xa3, 0x4a);
            let leaf_radius = radius - 5.0 * s;
            ring(24, |angle| {
                canvas.fill_ellipse(
                    Point::from_polar(center, leaf_radius, angle),
                    22.0 * s,
                    11.0 * s,
                    angle,
                    green,
                );
            });
        }
        BorderSticker::Sunburst => {
            let amber = Rgb::new(0xf5, 0x9e, 0x0b);
            ring(40, |angle| {
                canvas.line(
                    Point::from_polar(center, radius - 100.0 * s, angle),
                    Point::from_polar(center, radius, angle),
                    14.0 * s,
                    amber,
                );
            });
        }
        BorderSticker::DottedBorder => {
            canvas.stroke_circle_dashed(
                center,
                radius,
                10.0 * s,
                20.0 * s,
                20.0 * s,
                style.theme.primary,
            );
        }
        BorderSticker::ScallopEdge => {
            ring(28, |angle| {
                canvas.fill_circle(
                    Point::from_polar(center, radius, angle),
                    28.0 * s,
                    style.theme.accent,
                );
            });
        }
        BorderSticker::Geometric => {
            let side = 30.0 * s;
            ring(20, |angle| {
                let p = Point::from_polar(center, radius, angle);
                let (sin, cos) = angle.sin_cos();
                let triangle = [
                    p,
                    Point::new(p.x + side * cos, p.y + side * sin),
                    Point::new(p.x - side * sin, p.y + side * cos),
                ];
                canvas.stroke_polygon(&triangle, 8.0 * s, style.theme.primary);
            });
        }
    }
}

/// Call `draw` once per ring position with its angle
fn ring(count: usize, mut draw: impl FnMut(f32)) {
    for i in 0..count {
        draw((i as f32 / count as f32) * TAU);
    }
}

//! Frame shapes drawn behind the QR symbol.
//!
//! Geometry is authored against the 800 px reference canvas of the card
//! editor and scaled linearly: the frame spans 650/800 of the edge so it
//! is always strictly larger than the symbol (280/800), and the stroke is
//! 12/800 of the edge.

use std::f32::consts::PI;

use crate::decorator::canvas::Canvas;
use crate::models::{CardStyle, FrameShape, Point, Rgb};
use crate::utils::geometry::{badge_polygon, quadratic_bezier, regular_polygon, star_polygon};

/// Frame edge relative to the canvas edge
pub(crate) const FRAME_RATIO: f32 = 650.0 / 800.0;
/// Stroke width relative to the canvas edge
pub(crate) const STROKE_RATIO: f32 = 12.0 / 800.0;

/// Draw the frame: white fill, primary-colored stroke. A `None` frame
/// draws nothing at all, not even the white backing.
pub(crate) fn draw_frame(canvas: &mut Canvas, style: &CardStyle) {
    if style.frame == FrameShape::None {
        return;
    }

    let size = canvas.size() as f32;
    let center = canvas.center();
    let frame = FRAME_RATIO * size;
    let stroke = STROKE_RATIO * size;
    let primary = style.theme.primary;

    match style.frame {
        FrameShape::None => {}
        FrameShape::Circle => {
            canvas.fill_circle(center, frame / 2.0, Rgb::WHITE);
            canvas.stroke_circle(center, frame / 2.0, stroke, primary);
        }
        FrameShape::Diamond => {
            let vertices = regular_polygon(center, frame / 2.0, 4, -PI / 2.0);
            fill_and_stroke(canvas, &vertices, stroke, primary);
        }
        FrameShape::Hexagon => {
            let vertices = regular_polygon(center, frame / 2.0, 6, -PI / 2.0);
            fill_and_stroke(canvas, &vertices, stroke, primary);
        }
        FrameShape::Star => {
            let vertices = star_polygon(center, frame / 2.0, frame / 3.2, 5, -PI / 2.0);
            fill_and_stroke(canvas, &vertices, stroke, primary);
        }
        FrameShape::Pentagon => {
            let vertices = regular_polygon(center, frame / 2.0, 5, -PI / 2.0);
            fill_and_stroke(canvas, &vertices, stroke, primary);
        }
        FrameShape::RoundedSquare => {
            // Drawn at 75% of the nominal frame for better proportion
            let half = frame * 0.75 / 2.0;
            let corner = 60.0 / 800.0 * size;
            canvas.fill_rounded_rect(center, half, corner, Rgb::WHITE);
            canvas.stroke_rounded_rect(center, half, corner, stroke, primary);
        }
        FrameShape::Badge => {
            let vertices = badge_polygon(center, frame / 2.0, 45.0 / 800.0 * size, 12);
            fill_and_stroke(canvas, &vertices, stroke, primary);
        }
        FrameShape::Octagon => {
            let vertices = regular_polygon(center, frame / 2.0, 8, -PI / 8.0);
            fill_and_stroke(canvas, &vertices, stroke, primary);
        }
        FrameShape::Shield => {
            let vertices = shield_outline(center, frame * 0.8);
            fill_and_stroke(canvas, &vertices, stroke, primary);
        }
    }
}

fn fill_and_stroke(canvas: &mut Canvas, vertices: &[Point], stroke: f32, color: Rgb) {
    canvas.fill_polygon(vertices, Rgb::WHITE);
    canvas.stroke_polygon(vertices, stroke, color);
}

/// Shield outline: straight shoulders and sides, bottom corners curved
/// toward the lower apex.
fn shield_outline(center: Point, size: f32) -> Vec<Point> {
    let h = size / 2.0;
    let (cx, cy) = (center.x, center.y);

    let mut vertices = vec![
        Point::new(cx, cy - h),
        Point::new(cx + h, cy - size / 3.0),
        Point::new(cx + h, cy + size / 4.0),
    ];
    quadratic_bezier(
        Point::new(cx + h, cy + size / 4.0),
        Point::new(cx + h, cy + h),
        Point::new(cx, cy + h),
        16,
        &mut vertices,
    );
    quadratic_bezier(
        Point::new(cx, cy + h),
        Point::new(cx - h, cy + h),
        Point::new(cx - h, cy + size / 4.0),
        16,
        &mut vertices,
    );
    vertices.push(Point::new(cx - h, cy - size / 3.0));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorTheme;
    use image::Rgba;

    fn render(frame: FrameShape, size: u32) -> image::RgbaImage {
        let mut canvas = Canvas::new(size);
        let style = CardStyle::new().with_frame(frame);
        draw_frame(&mut canvas, &style);
        canvas.into_image()
    }

    #[test]
    fn test_none_frame_draws_nothing() {
        let img = render(FrameShape::None, 400);
        for p in img.pixels() {
            assert_eq!(*p, Rgba([255, 255, 255, 255]));
        }
    }

    #[test]
    fn test_circle_frame_stroke_color() {
        let img = render(FrameShape::Circle, 800);
        let primary = ColorTheme::default().primary;
        // On the circle boundary: radius 325 straight up from center
        let p = img.get_pixel(400, 75);
        assert_eq!(*p, Rgba([primary.r, primary.g, primary.b, 255]));
        // Interior stays white
        assert_eq!(*img.get_pixel(400, 400), Rgba([255, 255, 255, 255]));
        // Outside the frame stays white
        assert_eq!(*img.get_pixel(20, 20), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_all_frames_stay_inside_canvas() {
        // Shapes are clipped, never panic, and leave the canvas corner white
        for frame in [
            FrameShape::Circle,
            FrameShape::Diamond,
            FrameShape::Hexagon,
            FrameShape::Star,
            FrameShape::Pentagon,
            FrameShape::RoundedSquare,
            FrameShape::Badge,
            FrameShape::Octagon,
            FrameShape::Shield,
        ] {
            let img = render(frame, 400);
            assert_eq!(*img.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
            assert_eq!(*img.get_pixel(399, 0), Rgba([255, 255, 255, 255]));
        }
    }

    #[test]
    fn test_frames_are_deterministic() {
        let a = render(FrameShape::Star, 640);
        let b = render(FrameShape::Star, 640);
        assert_eq!(a, b);
    }
}

//! Square RGBA drawing surface with the shape rasterizers the
//! decoration stages share.
//!
//! Shapes are drawn with per-pixel inside tests over the shape's
//! bounding box, except polygons, which use even-odd scanline fills.
//! All coordinates are f32; pixel membership is decided at the pixel
//! center (x + 0.5, y + 0.5).

use image::{Rgba, RgbaImage, imageops};

use crate::models::{Point, Rgb};
use crate::utils::geometry::{rounded_rect_sdf, segment_distance};

use std::f32::consts::TAU;

/// Drawing surface for one decoration pass
pub struct Canvas {
    img: RgbaImage,
    size: u32,
}

impl Canvas {
    /// Create a square canvas filled with solid white
    pub fn new(size: u32) -> Self {
        Self {
            img: RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 255])),
            size,
        }
    }

    /// Edge length in pixels
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Canvas midpoint
    pub fn center(&self) -> Point {
        Point::new(self.size as f32 / 2.0, self.size as f32 / 2.0)
    }

    /// Consume the canvas and return the finished buffer
    pub fn into_image(self) -> RgbaImage {
        self.img
    }

    fn solid(color: Rgb) -> Rgba<u8> {
        Rgba([color.r, color.g, color.b, 255])
    }

    fn put(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.size && (y as u32) < self.size {
            self.img.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Iterate pixel centers inside a clamped bounding box
    fn for_each_in_box(
        &mut self,
        min_x: f32,
        min_y: f32,
        max_x: f32,
        max_y: f32,
        color: Rgba<u8>,
        test: impl Fn(Point) -> bool,
    ) {
        let x0 = min_x.floor().max(0.0) as i64;
        let y0 = min_y.floor().max(0.0) as i64;
        let x1 = max_x.ceil().min(self.size as f32 - 1.0) as i64;
        let y1 = max_y.ceil().min(self.size as f32 - 1.0) as i64;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                if test(p) {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Fill a solid circle
    pub fn fill_circle(&mut self, center: Point, radius: f32, color: Rgb) {
        let c = Self::solid(color);
        let r_sq = radius * radius;
        self.for_each_in_box(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
            c,
            |p| {
                let dx = p.x - center.x;
                let dy = p.y - center.y;
                dx * dx + dy * dy <= r_sq
            },
        );
    }

    /// Stroke a circle outline with the stroke centered on the radius
    pub fn stroke_circle(&mut self, center: Point, radius: f32, width: f32, color: Rgb) {
        let c = Self::solid(color);
        let half = width / 2.0;
        let reach = radius + half;
        self.for_each_in_box(
            center.x - reach,
            center.y - reach,
            center.x + reach,
            center.y + reach,
            c,
            |p| (p.distance(&center) - radius).abs() <= half,
        );
    }

    /// Stroke a dashed circle: `dash` pixels of arc on, `gap` pixels off
    pub fn stroke_circle_dashed(
        &mut self,
        center: Point,
        radius: f32,
        width: f32,
        dash: f32,
        gap: f32,
        color: Rgb,
    ) {
        let c = Self::solid(color);
        let half = width / 2.0;
        let reach = radius + half;
        let pattern = dash + gap;
        self.for_each_in_box(
            center.x - reach,
            center.y - reach,
            center.x + reach,
            center.y + reach,
            c,
            |p| {
                if (p.distance(&center) - radius).abs() > half {
                    return false;
                }
                let mut angle = (p.y - center.y).atan2(p.x - center.x);
                if angle < 0.0 {
                    angle += TAU;
                }
                (angle * radius) % pattern < dash
            },
        );
    }

    /// Fill a closed polygon with even-odd scanline conversion.
    /// Handles the non-convex outlines (star, badge) as well.
    pub fn fill_polygon(&mut self, vertices: &[Point], color: Rgb) {
        if vertices.len() < 3 {
            return;
        }
        let c = Self::solid(color);
        let min_y = vertices.iter().fold(f32::INFINITY, |m, v| m.min(v.y));
        let max_y = vertices.iter().fold(f32::NEG_INFINITY, |m, v| m.max(v.y));
        let y0 = min_y.floor().max(0.0) as i64;
        let y1 = max_y.ceil().min(self.size as f32 - 1.0) as i64;
        let n = vertices.len();

        let mut crossings: Vec<f32> = Vec::with_capacity(8);
        for y in y0..=y1 {
            let fy = y as f32 + 0.5;
            crossings.clear();
            for i in 0..n {
                let a = vertices[i];
                let b = vertices[(i + 1) % n];
                if (a.y <= fy && b.y > fy) || (b.y <= fy && a.y > fy) {
                    let t = (fy - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }
            crossings.sort_by(|p, q| p.partial_cmp(q).unwrap());
            for pair in crossings.chunks_exact(2) {
                let start = (pair[0] - 0.5).ceil() as i64;
                let end = (pair[1] - 0.5).floor() as i64;
                for x in start..=end {
                    self.put(x, y, c);
                }
            }
        }
    }

    /// Stroke a closed polygon outline with round joins
    pub fn stroke_polygon(&mut self, vertices: &[Point], width: f32, color: Rgb) {
        let n = vertices.len();
        for i in 0..n {
            self.line(vertices[i], vertices[(i + 1) % n], width, color);
        }
    }

    /// Draw a thick line segment with round caps
    pub fn line(&mut self, a: Point, b: Point, width: f32, color: Rgb) {
        let c = Self::solid(color);
        let half = width / 2.0;
        self.for_each_in_box(
            a.x.min(b.x) - half,
            a.y.min(b.y) - half,
            a.x.max(b.x) + half,
            a.y.max(b.y) + half,
            c,
            |p| segment_distance(p, a, b) <= half,
        );
    }

    /// Fill an ellipse rotated by `rotation` radians
    pub fn fill_ellipse(&mut self, center: Point, rx: f32, ry: f32, rotation: f32, color: Rgb) {
        let c = Self::solid(color);
        let reach = rx.max(ry);
        let (sin, cos) = rotation.sin_cos();
        self.for_each_in_box(
            center.x - reach,
            center.y - reach,
            center.x + reach,
            center.y + reach,
            c,
            |p| {
                let dx = p.x - center.x;
                let dy = p.y - center.y;
                let u = (dx * cos + dy * sin) / rx;
                let v = (-dx * sin + dy * cos) / ry;
                u * u + v * v <= 1.0
            },
        );
    }

    /// Fill an axis-aligned rectangle
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        let c = Self::solid(color);
        self.for_each_in_box(x, y, x + width, y + height, c, |p| {
            p.x >= x && p.x <= x + width && p.y >= y && p.y <= y + height
        });
    }

    /// Stroke an axis-aligned rectangle, stroke centered on the boundary
    pub fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, stroke: f32, color: Rgb) {
        let c = Self::solid(color);
        let half = stroke / 2.0;
        self.for_each_in_box(
            x - half,
            y - half,
            x + width + half,
            y + height + half,
            c,
            |p| {
                let inside_outer = p.x >= x - half
                    && p.x <= x + width + half
                    && p.y >= y - half
                    && p.y <= y + height + half;
                let inside_inner = p.x > x + half
                    && p.x < x + width - half
                    && p.y > y + half
                    && p.y < y + height - half;
                inside_outer && !inside_inner
            },
        );
    }

    /// Fill a square with rounded corners
    pub fn fill_rounded_rect(&mut self, center: Point, half: f32, corner_radius: f32, color: Rgb) {
        let c = Self::solid(color);
        self.for_each_in_box(
            center.x - half,
            center.y - half,
            center.x + half,
            center.y + half,
            c,
            |p| rounded_rect_sdf(p, center, half, corner_radius) <= 0.0,
        );
    }

    /// Stroke a rounded square outline, stroke centered on the boundary
    pub fn stroke_rounded_rect(
        &mut self,
        center: Point,
        half: f32,
        corner_radius: f32,
        width: f32,
        color: Rgb,
    ) {
        let c = Self::solid(color);
        let reach = half + width / 2.0;
        self.for_each_in_box(
            center.x - reach,
            center.y - reach,
            center.x + reach,
            center.y + reach,
            c,
            |p| rounded_rect_sdf(p, center, half, corner_radius).abs() <= width / 2.0,
        );
    }

    /// Alpha-blend another image onto the canvas at the given offset
    pub fn overlay(&mut self, src: &RgbaImage, x: u32, y: u32) {
        imageops::overlay(&mut self.img, src, x as i64, y as i64);
    }
}

//! Quad geometry and overlay drawing.

use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};

/// Stroke color for quad edges.
pub const EDGE_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
/// Stroke width for quad edges, in pixels.
pub const EDGE_THICKNESS: u32 = 3;
/// Fill color for corner markers.
pub const MARKER_COLOR: Rgb<u8> = Rgb([255, 255, 0]);
/// Radius of the filled corner markers, in pixels.
pub const MARKER_RADIUS: u32 = 6;

/// Detected document boundary: four corners in pixel coordinates.
///
/// Corner order is load-bearing: edges connect consecutive corners and wrap
/// from `bottom_left` back to `top_left`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    pub top_left: [f32; 2],
    pub top_right: [f32; 2],
    pub bottom_right: [f32; 2],
    pub bottom_left: [f32; 2],
}

impl Quad {
    /// Corners in drawing order.
    pub fn points(&self) -> [[f32; 2]; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }

    /// Map the quad from one pixel space to another, e.g. mask resolution to
    /// image resolution.
    pub fn scaled_to(&self, from: (u32, u32), to: (u32, u32)) -> Quad {
        let sx = to.0 as f32 / from.0 as f32;
        let sy = to.1 as f32 / from.1 as f32;
        let scale = |p: [f32; 2]| [p[0] * sx, p[1] * sy];
        Quad {
            top_left: scale(self.top_left),
            top_right: scale(self.top_right),
            bottom_right: scale(self.bottom_right),
            bottom_left: scale(self.bottom_left),
        }
    }
}

/// Draw a quad onto a composited image: the four edges first, then the corner
/// markers so they sit on top.
pub fn draw_quad(img: &mut RgbImage, quad: &Quad) {
    let pts = quad.points();
    for i in 0..pts.len() {
        draw_segment(img, pts[i], pts[(i + 1) % pts.len()], EDGE_COLOR, EDGE_THICKNESS);
    }
    for p in pts {
        fill_circle(img, p, MARKER_RADIUS, MARKER_COLOR);
    }
}

/// Draw a line segment with the given stroke width, clipped to image bounds.
/// A pixel is painted when its center lies within half the stroke width of
/// the segment.
pub fn draw_segment(img: &mut RgbImage, a: [f32; 2], b: [f32; 2], color: Rgb<u8>, thickness: u32) {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return;
    }
    let half = thickness as f32 / 2.0;
    let x0 = (a[0].min(b[0]) - half).floor().max(0.0) as u32;
    let y0 = (a[1].min(b[1]) - half).floor().max(0.0) as u32;
    let x1 = (a[0].max(b[0]) + half).ceil().min((w - 1) as f32) as u32;
    let y1 = (a[1].max(b[1]) + half).ceil().min((h - 1) as f32) as u32;
    for y in y0..=y1 {
        for x in x0..=x1 {
            if segment_distance(x as f32, y as f32, a, b) <= half {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Fill a circle, clipped to image bounds.
pub fn fill_circle(img: &mut RgbImage, center: [f32; 2], radius: u32, color: Rgb<u8>) {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return;
    }
    let r = radius as f32;
    let x0 = (center[0] - r).floor().max(0.0) as u32;
    let y0 = (center[1] - r).floor().max(0.0) as u32;
    let x1 = (center[0] + r).ceil().min((w - 1) as f32) as u32;
    let y1 = (center[1] + r).ceil().min((h - 1) as f32) as u32;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 - center[0];
            let dy = y as f32 - center[1];
            if dx * dx + dy * dy <= r * r {
                img.put_pixel(x, y, color);
            }
        }
    }
}

fn segment_distance(px: f32, py: f32, a: [f32; 2], b: [f32; 2]) -> f32 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((px - a[0]) * dx + (py - a[1]) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let cx = a[0] + t * dx;
    let cy = a[1] + t * dy;
    ((px - cx) * (px - cx) + (py - cy) * (py - cy)).sqrt()
}

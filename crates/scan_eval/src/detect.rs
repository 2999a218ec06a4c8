//! Quad detector seam and the built-in heuristic implementation.

use image::DynamicImage;
use overlay_core::compose::to_single_channel;
use overlay_core::quad::Quad;

/// Mask intensity above which a pixel counts as document foreground.
const FOREGROUND_THRESHOLD: u8 = 127;

/// Maps a mask to a detected document boundary, if any. `live` distinguishes
/// interactive preview from offline batch analysis; this harness always runs
/// batch (`live = false`). Returned coordinates are in mask pixel space.
pub trait QuadDetector {
    fn detect(&mut self, mask: &DynamicImage, live: bool) -> Option<Quad>;
}

/// Stand-in detector used when no model-backed implementation is wired in:
/// thresholds the mask and takes the corner extrema of the foreground.
#[derive(Debug, Default)]
pub struct HeuristicQuadDetector;

impl QuadDetector for HeuristicQuadDetector {
    fn detect(&mut self, mask: &DynamicImage, _live: bool) -> Option<Quad> {
        let gray = to_single_channel(mask);
        let mut corners: Option<Corners> = None;
        for (x, y, px) in gray.enumerate_pixels() {
            if px.0[0] <= FOREGROUND_THRESHOLD {
                continue;
            }
            let p = [x as f32, y as f32];
            match corners.as_mut() {
                None => corners = Some(Corners::seed(p)),
                Some(c) => c.extend(p),
            }
        }
        corners.map(Corners::into_quad)
    }
}

// Extrema of x+y pick the top-left/bottom-right corners, extrema of x-y the
// other diagonal.
struct Corners {
    top_left: [f32; 2],
    top_right: [f32; 2],
    bottom_right: [f32; 2],
    bottom_left: [f32; 2],
}

impl Corners {
    fn seed(p: [f32; 2]) -> Self {
        Self {
            top_left: p,
            top_right: p,
            bottom_right: p,
            bottom_left: p,
        }
    }

    fn extend(&mut self, p: [f32; 2]) {
        if p[0] + p[1] < self.top_left[0] + self.top_left[1] {
            self.top_left = p;
        }
        if p[0] - p[1] > self.top_right[0] - self.top_right[1] {
            self.top_right = p;
        }
        if p[0] + p[1] > self.bottom_right[0] + self.bottom_right[1] {
            self.bottom_right = p;
        }
        if p[0] - p[1] < self.bottom_left[0] - self.bottom_left[1] {
            self.bottom_left = p;
        }
    }

    fn into_quad(self) -> Quad {
        Quad {
            top_left: self.top_left,
            top_right: self.top_right,
            bottom_right: self.bottom_right,
            bottom_left: self.bottom_left,
        }
    }
}

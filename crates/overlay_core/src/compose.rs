//! Mask-over-image compositing.

use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, Rgb, RgbImage};

/// Color written over masked regions before blending.
pub const MASK_TINT: Rgb<u8> = Rgb([0, 255, 0]);
/// Blend weight for the tint layer; the base image keeps weight 1.0.
pub const TINT_WEIGHT: f32 = 0.6;
/// Flat brightness offset subtracted from every channel of the base image.
pub const DARKEN_OFFSET: u8 = 80;

/// Composite a mask over an image: masked region tinted green, the rest darkened.
///
/// The mask may be any resolution or channel layout. It is nearest-neighbor
/// resized to the image, reduced to one channel, and min-max normalized before
/// thresholding, so hard mask boundaries survive the resize and near-binary
/// model outputs stretch to full range. Returns a new buffer; neither input is
/// mutated.
pub fn overlay_mask(input: &RgbImage, mask: &DynamicImage) -> RgbImage {
    let (w, h) = input.dimensions();
    let resized = mask.resize_exact(w, h, FilterType::Nearest);
    let gray = normalize_minmax(to_single_channel(&resized));

    let mut out = darken(input, DARKEN_OFFSET);
    for (x, y, px) in out.enumerate_pixels_mut() {
        if gray.get_pixel(x, y).0[0] == 0 {
            continue;
        }
        for (c, v) in px.0.iter_mut().enumerate() {
            let blended = TINT_WEIGHT * MASK_TINT.0[c] as f32 + *v as f32;
            *v = blended.round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

/// Reduce a mask to one channel: `Luma8` passes through unchanged, anything
/// else goes through the standard luminance conversion.
pub fn to_single_channel(mask: &DynamicImage) -> GrayImage {
    match mask {
        DynamicImage::ImageLuma8(gray) => gray.clone(),
        other => other.to_luma8(),
    }
}

/// Stretch a gray image linearly so its values span [0, 255]. A constant
/// image has no range to stretch and is returned unchanged.
pub fn normalize_minmax(mut gray: GrayImage) -> GrayImage {
    let Some((min, max)) = value_bounds(&gray) else {
        return gray;
    };
    if max == min {
        return gray;
    }
    let scale = 255.0 / (max - min) as f32;
    for px in gray.pixels_mut() {
        px.0[0] = ((px.0[0] - min) as f32 * scale).round() as u8;
    }
    gray
}

/// Apply a flat negative brightness offset to every channel.
pub fn darken(input: &RgbImage, offset: u8) -> RgbImage {
    let mut out = input.clone();
    for px in out.pixels_mut() {
        for v in px.0.iter_mut() {
            *v = v.saturating_sub(offset);
        }
    }
    out
}

fn value_bounds(gray: &GrayImage) -> Option<(u8, u8)> {
    let mut values = gray.pixels().map(|p| p.0[0]);
    let first = values.next()?;
    let mut min = first;
    let mut max = first;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    Some((min, max))
}

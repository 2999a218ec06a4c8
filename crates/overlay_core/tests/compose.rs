use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use overlay_core::compose::{darken, overlay_mask};

fn base(w: u32, h: u32, v: u8) -> RgbImage {
    RgbImage::from_pixel(w, h, Rgb([v, v, v]))
}

#[test]
fn binary_mask_tints_exactly_the_masked_region() {
    let img = base(4, 4, 100);
    let mask = GrayImage::from_fn(4, 4, |x, _| if x >= 2 { Luma([200u8]) } else { Luma([10u8]) });
    let out = overlay_mask(&img, &DynamicImage::ImageLuma8(mask));
    // Darkened base: 100 - 80 = 20; tinted green channel: 20 + 0.6 * 255 = 173.
    assert_eq!(out.get_pixel(0, 0), &Rgb([20, 20, 20]));
    assert_eq!(out.get_pixel(3, 0), &Rgb([20, 173, 20]));
    let mut values: Vec<_> = out.pixels().map(|p| p.0).collect();
    values.sort();
    values.dedup();
    assert_eq!(values, vec![[20, 20, 20], [20, 173, 20]]);
}

#[test]
fn nearest_neighbor_upscale_introduces_no_new_levels() {
    let img = base(8, 8, 100);
    let mask = GrayImage::from_fn(2, 2, |x, y| if x == y { Luma([255u8]) } else { Luma([0u8]) });
    let out = overlay_mask(&img, &DynamicImage::ImageLuma8(mask));
    let mut values: Vec<_> = out.pixels().map(|p| p.0).collect();
    values.sort();
    values.dedup();
    assert_eq!(values, vec![[20, 20, 20], [20, 173, 20]]);
    // Two of the four source pixels are foreground, so half the area is tinted.
    let tinted = out.pixels().filter(|p| p.0 == [20, 173, 20]).count();
    assert_eq!(tinted, 32);
}

#[test]
fn mask_minimum_normalizes_to_untinted_even_when_nonzero() {
    let img = base(3, 1, 100);
    let mask = GrayImage::from_fn(3, 1, |x, _| match x {
        0 => Luma([60u8]),
        1 => Luma([60u8]),
        _ => Luma([180u8]),
    });
    let out = overlay_mask(&img, &DynamicImage::ImageLuma8(mask));
    // 60 is the minimum, so it maps to 0 and stays untinted.
    assert_eq!(out.get_pixel(0, 0), &Rgb([20, 20, 20]));
    assert_eq!(out.get_pixel(1, 0), &Rgb([20, 20, 20]));
    assert_eq!(out.get_pixel(2, 0), &Rgb([20, 173, 20]));
}

#[test]
fn fully_white_mask_tints_the_entire_image() {
    let img = base(3, 3, 250);
    let mask = GrayImage::from_pixel(3, 3, Luma([255u8]));
    let out = overlay_mask(&img, &DynamicImage::ImageLuma8(mask));
    // 250 - 80 = 170 base; the green channel saturates at 170 + 153 -> 255.
    assert!(out.pixels().all(|p| p.0 == [170, 255, 170]));
}

#[test]
fn fully_black_mask_only_darkens() {
    let img = base(3, 3, 100);
    let mask = GrayImage::from_pixel(3, 3, Luma([0u8]));
    let out = overlay_mask(&img, &DynamicImage::ImageLuma8(mask));
    assert_eq!(out, darken(&img, 80));
}

#[test]
fn multichannel_mask_reduces_via_luminance() {
    let img = base(2, 2, 100);
    let mask = RgbImage::from_fn(2, 2, |x, _| {
        if x == 0 {
            Rgb([0u8, 0, 0])
        } else {
            Rgb([255u8, 255, 255])
        }
    });
    let out = overlay_mask(&img, &DynamicImage::ImageRgb8(mask));
    assert_eq!(out.get_pixel(0, 0), &Rgb([20, 20, 20]));
    assert_eq!(out.get_pixel(1, 0), &Rgb([20, 173, 20]));
}

#[test]
fn compositing_is_deterministic_and_leaves_inputs_untouched() {
    let img = RgbImage::from_fn(6, 4, |x, y| Rgb([(x * 40) as u8, (y * 60) as u8, 128]));
    let mask = DynamicImage::ImageLuma8(GrayImage::from_fn(3, 2, |x, y| {
        if x + y >= 2 {
            Luma([180u8])
        } else {
            Luma([60u8])
        }
    }));
    let img_before = img.clone();

    let first = overlay_mask(&img, &mask);
    let second = overlay_mask(&img, &mask);
    assert_eq!(first, second);
    assert_eq!(img, img_before);
    assert_eq!(first.dimensions(), img.dimensions());
}

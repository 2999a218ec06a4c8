use image::{Rgb, RgbImage};
use overlay_core::quad::{draw_quad, Quad, EDGE_COLOR, MARKER_COLOR};

fn square() -> Quad {
    Quad {
        top_left: [20.0, 20.0],
        top_right: [80.0, 20.0],
        bottom_right: [80.0, 80.0],
        bottom_left: [20.0, 80.0],
    }
}

#[test]
fn draws_all_four_edges_including_the_closing_one() {
    let mut img = RgbImage::new(100, 100);
    draw_quad(&mut img, &square());
    // Midpoint of each edge; the last one is the bottom_left -> top_left wrap.
    assert_eq!(img.get_pixel(50, 20), &EDGE_COLOR);
    assert_eq!(img.get_pixel(80, 50), &EDGE_COLOR);
    assert_eq!(img.get_pixel(50, 80), &EDGE_COLOR);
    assert_eq!(img.get_pixel(20, 50), &EDGE_COLOR);
    // Interior and exterior stay untouched.
    assert_eq!(img.get_pixel(50, 50), &Rgb([0, 0, 0]));
    assert_eq!(img.get_pixel(5, 5), &Rgb([0, 0, 0]));
}

#[test]
fn stroke_covers_three_pixel_rows() {
    let mut img = RgbImage::new(100, 100);
    draw_quad(&mut img, &square());
    assert_eq!(img.get_pixel(50, 19), &EDGE_COLOR);
    assert_eq!(img.get_pixel(50, 21), &EDGE_COLOR);
    assert_eq!(img.get_pixel(50, 18), &Rgb([0, 0, 0]));
    assert_eq!(img.get_pixel(50, 22), &Rgb([0, 0, 0]));
}

#[test]
fn corner_markers_sit_on_top_of_edges() {
    let mut img = RgbImage::new(100, 100);
    draw_quad(&mut img, &square());
    for p in square().points() {
        assert_eq!(img.get_pixel(p[0] as u32, p[1] as u32), &MARKER_COLOR);
    }
    // Marker radius reaches 6 pixels out along the edge...
    assert_eq!(img.get_pixel(26, 20), &MARKER_COLOR);
    // ...and the edge color resumes just past it.
    assert_eq!(img.get_pixel(27, 20), &EDGE_COLOR);
}

#[test]
fn out_of_bounds_quad_clips_without_panicking() {
    let mut img = RgbImage::new(50, 50);
    let quad = Quad {
        top_left: [-10.0, -10.0],
        top_right: [60.0, -10.0],
        bottom_right: [60.0, 60.0],
        bottom_left: [-10.0, 60.0],
    };
    draw_quad(&mut img, &quad);
    assert_eq!(img.get_pixel(25, 25), &Rgb([0, 0, 0]));
    assert_eq!(img.get_pixel(0, 0), &Rgb([0, 0, 0]));
}

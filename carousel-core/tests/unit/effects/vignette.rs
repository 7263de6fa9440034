use super::*;
use crate::foundation::{color::Rgba8, core::CanvasSpec};

fn gray(w: u32, h: u32, v: u8) -> RgbaImage {
    RgbaImage::from_pixel(w, h, image::Rgba([v, v, v, 255]))
}

#[test]
fn darken_scales_color_only() {
    let mut img = gray(2, 2, 200);
    darken(&mut img, 0.7);
    assert_eq!(img.get_pixel(1, 1).0, [140, 140, 140, 255]);
}

#[test]
fn vignette_mask_is_quadratic() {
    assert_eq!(vignette_mask(0.0, 0.3), 255);
    assert_eq!(vignette_mask(1.0, 0.3), 178);
    assert!(vignette_mask(0.5, 0.3) > vignette_mask(0.9, 0.3));
}

#[test]
fn vignette_leaves_centre_and_darkens_corners() {
    let mut img = gray(101, 101, 200);
    apply_vignette(&mut img, 0.3);
    assert_eq!(img.get_pixel(50, 50).0, [200, 200, 200, 255]);
    // 70% original + 30% darkened at full distance.
    let corner = img.get_pixel(0, 0).0[0];
    assert_eq!(corner, 182);
    let mid = img.get_pixel(25, 50).0[0];
    assert!(corner < mid && mid < 200);
}

#[test]
fn contrast_overlay_is_strongest_at_centre() {
    let mut img = gray(100, 100, 255);
    apply_contrast_overlay(&mut img, 80);
    let centre = img.get_pixel(50, 50).0[0];
    let corner = img.get_pixel(0, 0).0[0];
    assert_eq!(centre, 175);
    assert!(corner > centre);
}

#[test]
fn edge_vignette_keeps_centre_clear() {
    let spec = CanvasSpec::new(200, 100).unwrap();
    let mut canvas = Canvas::filled(spec, Rgba8::rgb(255, 255, 255)).unwrap();
    apply_edge_vignette(&mut canvas, 0.2);
    assert_eq!(canvas.pixel(100, 50), Some([255, 255, 255, 255]));
    let corner = canvas.pixel(0, 0).unwrap();
    assert!(corner[0] < 255);
    assert_eq!(corner[3], 255);
}

#[test]
fn edge_alpha_grows_with_distance() {
    assert_eq!(edge_darkening_alpha(0.0, 0.2), 0);
    assert_eq!(edge_darkening_alpha(1.0, 0.2), 51);
    assert!(edge_darkening_alpha(0.5, 0.2) < edge_darkening_alpha(0.8, 0.2));
}

use super::*;

fn photo(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| {
        image::Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    })
}

#[test]
fn cover_fit_matches_canvas_for_all_aspects() {
    for (w, h) in [(1920, 1080), (600, 1800), (1024, 1024), (37, 91), (1080, 1350)] {
        let out = cover_fit(&photo(w, h), 1080, 1350);
        assert_eq!(out.dimensions(), (1080, 1350), "source {w}x{h}");
    }
}

#[test]
fn fit_width_keeps_aspect_without_cropping() {
    let out = fit_width(&photo(1024, 1024), 1080);
    assert_eq!(out.dimensions(), (1080, 1080));

    let out = fit_width(&photo(1000, 1500), 1080);
    assert_eq!(out.dimensions(), (1080, 1620));

    // round(1080 * 333 / 500) = round(719.28)
    let out = fit_width(&photo(500, 333), 1080);
    assert_eq!(out.dimensions(), (1080, 719));
}

#[test]
fn reveal_photo_is_shifted_and_faded() {
    let style = StyleConfig::default();
    let p = process_source_image(&photo(1024, 1024), SlideRole::Reveal, &style);
    assert_eq!((p.x, p.y), (0, -75));
    assert_eq!((p.image.width(), p.image.height()), (1080, 1080));

    // Fade begins at image row 650 + 75 = 725 and reaches zero at the last row.
    assert_eq!(p.image.pixel(540, 724).unwrap()[3], 255);
    assert_eq!(p.image.pixel(540, 725).unwrap()[3], 255);
    assert!(p.image.pixel(540, 900).unwrap()[3] < 255);
    assert_eq!(p.image.pixel(540, 1079).unwrap()[3], 0);
}

#[test]
fn hook_photo_is_darkened_and_covers_canvas() {
    let style = StyleConfig::default();
    let bright = RgbaImage::from_pixel(800, 800, image::Rgba([200, 200, 200, 255]));
    let p = process_source_image(&bright, SlideRole::Hook, &style);
    assert_eq!((p.x, p.y), (0, 0));
    assert_eq!((p.image.width(), p.image.height()), (1080, 1350));

    let top_corner = p.image.pixel(0, 0).unwrap();
    assert_eq!(top_corner[3], 255);
    assert!(top_corner[0] <= 145);
    assert_eq!(p.image.pixel(540, 1349).unwrap()[3], 0);
}

#[test]
fn translucent_hook_photo_is_opaque_above_fade() {
    let style = StyleConfig::default();
    let translucent = RgbaImage::from_pixel(300, 300, image::Rgba([10, 20, 30, 100]));
    let p = process_source_image(&translucent, SlideRole::Hook, &style);
    assert_eq!(p.image.pixel(540, 100).unwrap()[3], 255);
    assert_eq!(p.image.pixel(540, 500).unwrap()[3], 255);
    assert_eq!(p.image.pixel(540, 1349).unwrap()[3], 0);
}

#[test]
fn cta_photo_is_opaque() {
    let style = StyleConfig::default();
    let translucent = RgbaImage::from_pixel(300, 300, image::Rgba([10, 20, 30, 100]));
    let p = process_source_image(&translucent, SlideRole::Cta, &style);
    assert_eq!((p.image.width(), p.image.height()), (1080, 1350));
    assert_eq!(p.image.pixel(540, 1349).unwrap()[3], 255);
}

use image::RgbaImage;

use crate::foundation::math::mul_div255_u8;

/// Fade weight for row `y` of an image `height` rows tall whose fade begins at `start`.
///
/// Rows above `start` are 255, row `start` is 255 and the last row is 0, linear in between.
pub fn fade_alpha(y: u32, start: u32, height: u32) -> u8 {
    if y < start || start >= height {
        return 255;
    }
    let last = height - 1;
    let span = last - start;
    if span == 0 {
        return 0;
    }
    let t = f64::from(y - start) / f64::from(span);
    (255.0 * (1.0 - t)).round().clamp(0.0, 255.0) as u8
}

/// Multiply each row's alpha by its [`fade_alpha`] weight.
///
/// `start_y` is in the image's own coordinates; negative values fade from the first row and
/// values at or beyond the height leave the image untouched.
pub fn apply_bottom_fade(image: &mut RgbaImage, start_y: i32) {
    let height = image.height();
    let start = start_y.max(0) as u32;
    if start >= height {
        return;
    }
    for (y, row) in image.enumerate_rows_mut() {
        let w = fade_alpha(y, start, height);
        if w == 255 {
            continue;
        }
        for (_, _, px) in row {
            px.0[3] = mul_div255_u8(u16::from(px.0[3]), u16::from(w));
        }
    }
}

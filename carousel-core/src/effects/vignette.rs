use image::RgbaImage;

use crate::{
    effects::composite::over,
    foundation::math::{half_diagonal, mul_div255_u8, normalized_distance, radial_center},
    render::canvas::Canvas,
};

fn scale_channel(c: u8, factor: f32) -> u8 {
    (f32::from(c) * factor).round().clamp(0.0, 255.0) as u8
}

/// Multiply the color channels by `factor`; alpha is untouched.
pub fn darken(image: &mut RgbaImage, factor: f32) {
    let factor = factor.clamp(0.0, 1.0);
    for px in image.pixels_mut() {
        for c in &mut px.0[..3] {
            *c = scale_channel(*c, factor);
        }
    }
}

/// Mask weight `255 * (1 - strength * nd^2)` of the photo vignette.
pub fn vignette_mask(nd: f32, strength: f32) -> u8 {
    (255.0 * (1.0 - strength * nd * nd)).clamp(0.0, 255.0) as u8
}

/// Radial vignette: blend each pixel between itself and a copy darkened by `1 - strength`,
/// weighted by [`vignette_mask`] over the distance from the centre.
///
/// The normalizing radius is half the longer side, so corners saturate at the full darkening.
pub fn apply_vignette(image: &mut RgbaImage, strength: f32) {
    let strength = strength.clamp(0.0, 1.0);
    if strength <= 0.0 {
        return;
    }
    let (w, h) = image.dimensions();
    let (cx, cy) = radial_center(w, h);
    let max_r = (w.max(h) / 2) as f32;
    let dark = 1.0 - strength;

    for (x, y, px) in image.enumerate_pixels_mut() {
        let m = u16::from(vignette_mask(normalized_distance(x, y, cx, cy, max_r), strength));
        let im = 255 - m;
        for c in &mut px.0[..3] {
            let d = scale_channel(*c, dark);
            *c = mul_div255_u8(u16::from(*c), m).saturating_add(mul_div255_u8(u16::from(d), im));
        }
    }
}

/// Centre-weighted black overlay for headline contrast: `max_alpha * (1 - d / half_diagonal)`.
pub fn apply_contrast_overlay(image: &mut RgbaImage, max_alpha: u8) {
    if max_alpha == 0 {
        return;
    }
    let (w, h) = image.dimensions();
    let (cx, cy) = radial_center(w, h);
    let max_r = half_diagonal(w, h);

    for (x, y, px) in image.enumerate_pixels_mut() {
        let nd = normalized_distance(x, y, cx, cy, max_r);
        let a = (f32::from(max_alpha) * (1.0 - nd)).clamp(0.0, 255.0) as u16;
        if a == 0 {
            continue;
        }
        let keep = 255 - a;
        for c in &mut px.0[..3] {
            *c = mul_div255_u8(u16::from(*c), keep);
        }
    }
}

/// Overlay alpha of the whole-canvas vignette: `255 * strength * nd^2`.
pub fn edge_darkening_alpha(nd: f32, strength: f32) -> u8 {
    (255.0 * strength * nd * nd).clamp(0.0, 255.0) as u8
}

/// Whole-canvas vignette: a black overlay that is transparent at the centre and darkens
/// quadratically toward the edges, normalized by the half diagonal.
pub fn apply_edge_vignette(canvas: &mut Canvas, strength: f32) {
    let strength = strength.clamp(0.0, 1.0);
    if strength <= 0.0 {
        return;
    }
    let (w, h) = (canvas.width(), canvas.height());
    let (cx, cy) = radial_center(w, h);
    let max_r = half_diagonal(w, h);

    let data = canvas.data_mut();
    for y in 0..h {
        for x in 0..w {
            let a = edge_darkening_alpha(normalized_distance(x, y, cx, cy, max_r), strength);
            if a == 0 {
                continue;
            }
            let i = ((y as usize) * (w as usize) + (x as usize)) * 4;
            let dst = [data[i], data[i + 1], data[i + 2], data[i + 3]];
            data[i..i + 4].copy_from_slice(&over(dst, [0, 0, 0, a], 1.0));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/vignette.rs"]
mod tests;

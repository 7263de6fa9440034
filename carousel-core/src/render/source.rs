use image::{RgbaImage, imageops::FilterType};
use tracing::debug;

use crate::{
    config::style::StyleConfig,
    effects::{
        fade::apply_bottom_fade,
        vignette::{apply_contrast_overlay, apply_vignette, darken},
    },
    render::canvas::Canvas,
    slide::request::SlideRole,
};

/// A processed photo and where its top-left corner lands on the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionedImage {
    /// Premultiplied pixels; alpha is the paste mask.
    pub image: Canvas,
    /// Horizontal paste offset.
    pub x: i32,
    /// Vertical paste offset (negative shifts the photo above the canvas top).
    pub y: i32,
}

/// Scale so the image covers `width x height`, then centre-crop to exactly that size.
///
/// The scaled size is rounded and never smaller than the target on either axis.
pub fn cover_fit(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 {
        return RgbaImage::new(width, height);
    }
    let scale = (f64::from(width) / f64::from(w)).max(f64::from(height) / f64::from(h));
    let new_w = ((f64::from(w) * scale).round() as u32).max(width);
    let new_h = ((f64::from(h) * scale).round() as u32).max(height);

    let resized = image::imageops::resize(image, new_w, new_h, FilterType::Lanczos3);
    let left = (new_w - width) / 2;
    let top = (new_h - height) / 2;
    image::imageops::crop_imm(&resized, left, top, width, height).to_image()
}

/// Scale to exactly `width`, keeping the whole image; height is `round(width * h / w)`.
pub fn fit_width(image: &RgbaImage, width: u32) -> RgbaImage {
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 {
        return RgbaImage::new(width, 1);
    }
    let new_h = ((f64::from(width) * f64::from(h) / f64::from(w)).round() as u32).max(1);
    image::imageops::resize(image, width, new_h, FilterType::Lanczos3)
}

fn force_opaque(image: &mut RgbaImage) {
    for px in image.pixels_mut() {
        px.0[3] = 255;
    }
}

/// Rescale and post-process a decoded photo for `role`.
///
/// - reveal: fit-width, radial vignette, bottom fade, pasted at the configured vertical offset
/// - hook: cover-fit, darkened, centre contrast overlay, made opaque, bottom fade
/// - cta: cover-fit, fully opaque
pub fn process_source_image(
    photo: &RgbaImage,
    role: SlideRole,
    style: &StyleConfig,
) -> PositionedImage {
    let spec = style.canvas;
    let (x, y, img) = match role {
        SlideRole::Reveal => {
            let reveal = &style.reveal;
            let mut img = fit_width(photo, spec.width);
            apply_vignette(&mut img, style.effects.vignette_strength);
            // Fade start is configured in canvas rows; the image is shifted by its paste offset.
            apply_bottom_fade(&mut img, reveal.fade_start_y - reveal.image_y_offset);
            (0, reveal.image_y_offset, img)
        }
        SlideRole::Hook => {
            let hook = &style.hook;
            let mut img = cover_fit(photo, spec.width, spec.height);
            darken(&mut img, hook.darken);
            apply_contrast_overlay(&mut img, hook.contrast_max_alpha);
            force_opaque(&mut img);
            apply_bottom_fade(&mut img, hook.fade_start_y);
            (0, 0, img)
        }
        SlideRole::Cta => {
            let mut img = cover_fit(photo, spec.width, spec.height);
            force_opaque(&mut img);
            (0, 0, img)
        }
    };

    debug!(%role, width = img.width(), height = img.height(), x, y, "processed source photo");
    PositionedImage {
        image: Canvas::from_rgba_image(img),
        x,
        y,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/source.rs"]
mod tests;

use crate::{
    config::style::{BackgroundStyle, StyleConfig},
    foundation::error::CarouselResult,
    render::canvas::Canvas,
};

/// Base canvas: flat `palette.background`, optionally with `palette.gradient` blended into a
/// bottom band.
///
/// Inside the band the blend fraction at row offset `i` is `i / band_height * max_blend`, so the
/// last row reaches just under `max_blend`.
pub fn build_background(style: &StyleConfig) -> CarouselResult<Canvas> {
    let spec = style.canvas;
    let base = style.palette.background;
    let mut canvas = Canvas::filled(spec, base)?;

    if let BackgroundStyle::BottomGradient {
        start_fraction,
        max_blend,
    } = style.background
    {
        let start = ((spec.height as f32) * start_fraction.clamp(0.0, 1.0)) as u32;
        let band = spec.height.saturating_sub(start);
        for i in 0..band {
            let ratio = (i as f32 / band as f32) * max_blend;
            canvas.fill_row(start + i, base.mix(style.palette.gradient, ratio));
        }
    }
    Ok(canvas)
}

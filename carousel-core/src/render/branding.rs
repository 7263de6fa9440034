use tracing::debug;

use crate::{
    config::style::{FontRole, StyleConfig},
    effects::composite::over,
    foundation::{color::Rgba8, error::CarouselResult},
    render::canvas::Canvas,
    text::engine::{Anchor, LineStyle, ShadowStyle, TextEngine},
};

/// What sits in the gap of the divider.
#[derive(Clone, Copy, Debug)]
pub enum Centerpiece<'a> {
    /// The brand logo, already scaled to the configured height.
    Logo(&'a Canvas),
    /// The text handle drawn when no logo is available.
    Handle,
}

/// Halo opacity for a pixel at `distance` from the centre.
///
/// The halo is a stack of filled circles from `radius` down to 1, each replacing the previous;
/// a pixel takes the alpha of the smallest circle containing it, `max * (1 - r / radius)`.
pub fn halo_alpha(distance: f32, radius: u32, max_alpha: u8) -> u8 {
    if radius == 0 || distance > radius as f32 {
        return 0;
    }
    let r = distance.ceil().max(1.0);
    (f32::from(max_alpha) * (1.0 - r / radius as f32)).clamp(0.0, 255.0) as u8
}

/// Darken a disc around `(cx, cy)` with the stepped halo.
pub fn draw_halo(canvas: &mut Canvas, cx: i32, cy: i32, radius: u32, max_alpha: u8) {
    let r = radius as i32;
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    let data = canvas.data_mut();
    for y in (cy - r).max(0)..(cy + r + 1).min(h) {
        for x in (cx - r).max(0)..(cx + r + 1).min(w) {
            let (dx, dy) = ((x - cx) as f32, (y - cy) as f32);
            let a = halo_alpha((dx * dx + dy * dy).sqrt(), radius, max_alpha);
            if a == 0 {
                continue;
            }
            let i = ((y as usize) * (w as usize) + (x as usize)) * 4;
            let dst = [data[i], data[i + 1], data[i + 2], data[i + 3]];
            data[i..i + 4].copy_from_slice(&over(dst, [0, 0, 0, a], 1.0));
        }
    }
}

/// Horizontal divider at row `y`: two line segments flanking a centred logo or handle, a soft
/// halo behind the centerpiece, and the centerpiece itself.
pub fn draw_divider(
    canvas: &mut Canvas,
    y: i32,
    style: &StyleConfig,
    centerpiece: Centerpiece<'_>,
    text: &mut TextEngine,
) -> CarouselResult<()> {
    let b = &style.branding;
    let canvas_w = canvas.width() as i32;

    let handle_style = LineStyle {
        role: FontRole::Handle,
        size: style.typography.divider_size,
        color: style.palette.accent,
        shadow: None,
    };
    let (piece_w, piece_h) = match centerpiece {
        Centerpiece::Logo(logo) => (logo.width() as i32, logo.height() as i32),
        Centerpiece::Handle => {
            let w = text.text_width(FontRole::Handle, &b.handle_text, handle_style.size);
            (w.ceil() as i32, handle_style.size.ceil() as i32)
        }
    };
    let piece_x = (canvas_w - piece_w) / 2;
    let piece_y = y - piece_h / 2;

    let thickness = b.line_width.max(1) as i32;
    let line_top = y - thickness / 2;
    let color: Rgba8 = style.palette.divider;
    // Endpoints are inclusive.
    canvas.blend_rect(
        b.edge_margin,
        line_top,
        piece_x - b.logo_gap + 1,
        line_top + thickness,
        color,
    );
    canvas.blend_rect(
        piece_x + piece_w + b.logo_gap,
        line_top,
        canvas_w - b.edge_margin + 1,
        line_top + thickness,
        color,
    );

    draw_halo(
        canvas,
        piece_x + piece_w / 2,
        piece_y + piece_h / 2,
        b.halo_radius,
        b.halo_max_alpha,
    );

    match centerpiece {
        Centerpiece::Logo(logo) => {
            canvas.composite_at(logo, piece_x, piece_y, b.logo_opacity);
        }
        Centerpiece::Handle => {
            text.draw_line(
                canvas,
                &b.handle_text,
                (canvas.width() / 2) as f32,
                y as f32,
                Anchor::CenterMiddle,
                &handle_style,
            )?;
        }
    }
    debug!(y, piece_x, piece_w, "drew divider");
    Ok(())
}

/// Corner "swipe" affordance, right-aligned and vertically centred on its row.
pub fn draw_swipe_indicator(
    canvas: &mut Canvas,
    style: &StyleConfig,
    shadow: ShadowStyle,
    text: &mut TextEngine,
) -> CarouselResult<()> {
    let reveal = &style.reveal;
    let x = canvas.width() as i32 - reveal.swipe_right_margin;
    text.draw_line(
        canvas,
        &reveal.swipe_text,
        x as f32,
        reveal.swipe_y as f32,
        Anchor::RightMiddle,
        &LineStyle {
            role: FontRole::Body,
            size: style.typography.swipe_size,
            color: style.palette.text,
            shadow: Some(shadow),
        },
    )
}

/// Closing-slide logo, centred with its bottom edge `logo_bottom_margin` above the canvas bottom.
pub fn paste_cta_logo(canvas: &mut Canvas, logo: &Canvas, style: &StyleConfig) {
    let x = (canvas.width() as i32 - logo.width() as i32) / 2;
    let y = canvas.height() as i32 - logo.height() as i32 - style.cta.logo_bottom_margin;
    canvas.composite_at(logo, x, y, 1.0);
}

#[cfg(test)]
#[path = "../../tests/unit/render/branding.rs"]
mod tests;

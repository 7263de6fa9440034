use super::*;
use crate::{assets::fonts::FontStore, foundation::core::CanvasSpec};

fn navy() -> Canvas {
    Canvas::filled(CanvasSpec::PORTRAIT, Rgba8::rgb(2, 3, 8)).unwrap()
}

fn white_logo(w: u32, h: u32) -> Canvas {
    Canvas::filled(CanvasSpec::new(w, h).unwrap(), Rgba8::rgb(255, 255, 255)).unwrap()
}

#[test]
fn halo_alpha_steps_down_to_edge() {
    assert_eq!(halo_alpha(0.0, 40, 80), 78);
    assert_eq!(halo_alpha(20.0, 40, 80), 40);
    assert_eq!(halo_alpha(39.5, 40, 80), 0);
    assert_eq!(halo_alpha(41.0, 40, 80), 0);
    assert!(halo_alpha(10.0, 40, 80) > halo_alpha(30.0, 40, 80));
}

#[test]
fn divider_with_logo_draws_lines_gap_and_faded_logo() {
    let style = StyleConfig::default();
    let mut canvas = navy();
    let mut text = TextEngine::new(FontStore::unavailable());
    let logo = white_logo(210, 70);
    draw_divider(&mut canvas, 800, &style, Centerpiece::Logo(&logo), &mut text).unwrap();

    // Logo spans [435, 645); lines stop 40px short of it.
    assert_eq!(canvas.pixel(40, 800), Some([232, 232, 232, 255]));
    assert_eq!(canvas.pixel(395, 800), Some([232, 232, 232, 255]));
    assert_eq!(canvas.pixel(396, 800), Some([2, 3, 8, 255]));
    assert_eq!(canvas.pixel(39, 800), Some([2, 3, 8, 255]));
    assert_eq!(canvas.pixel(685, 800), Some([232, 232, 232, 255]));
    assert_eq!(canvas.pixel(1040, 800), Some([232, 232, 232, 255]));
    assert_eq!(canvas.pixel(1041, 800), Some([2, 3, 8, 255]));
    assert_eq!(canvas.pixel(100, 801), Some([2, 3, 8, 255]));

    // Logo composited at 60% over the darkened halo centre.
    let centre = canvas.pixel(540, 800).unwrap();
    assert!(centre[0] > 140 && centre[0] < 160, "{centre:?}");
}

#[test]
fn divider_falls_back_to_handle_without_failing() {
    let style = StyleConfig::default();
    let mut canvas = navy();
    let mut text = TextEngine::new(FontStore::unavailable());
    draw_divider(&mut canvas, 800, &style, Centerpiece::Handle, &mut text).unwrap();
    // Lines are still present on both sides.
    assert_eq!(canvas.pixel(60, 800), Some([232, 232, 232, 255]));
    assert_eq!(canvas.pixel(1020, 800), Some([232, 232, 232, 255]));
}

#[test]
fn cta_logo_sits_above_bottom_margin() {
    let style = StyleConfig::default();
    let mut canvas = navy();
    paste_cta_logo(&mut canvas, &white_logo(100, 70), &style);
    // y range [1040, 1110), x range [490, 590).
    assert_eq!(canvas.pixel(490, 1040), Some([255, 255, 255, 255]));
    assert_eq!(canvas.pixel(589, 1109), Some([255, 255, 255, 255]));
    assert_eq!(canvas.pixel(540, 1110), Some([2, 3, 8, 255]));
    assert_eq!(canvas.pixel(489, 1040), Some([2, 3, 8, 255]));
}

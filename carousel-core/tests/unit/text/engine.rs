use super::*;
use crate::{assets::fonts::system_sans_serif, foundation::core::CanvasSpec};

fn style(role: FontRole) -> LineStyle {
    LineStyle {
        role,
        size: 40.0,
        color: Rgba8::rgb(232, 232, 232),
        shadow: Some(ShadowStyle {
            offset: Vec2::new(3.0, 3.0),
            color: Rgba8::rgba(0, 0, 0, 180),
            passes: 4,
        }),
    }
}

fn black_canvas() -> Canvas {
    Canvas::filled(CanvasSpec::new(400, 200).unwrap(), Rgba8::rgb(0, 0, 40)).unwrap()
}

#[test]
fn unavailable_fonts_measure_with_fallback_and_draw_nothing() {
    let mut engine = TextEngine::new(FontStore::unavailable());
    assert_eq!(engine.unavailable_roles().len(), 3);
    assert!((engine.text_width(FontRole::Body, "abcd", 100.0) - 220.0).abs() < 1e-3);

    let mut canvas = black_canvas();
    let before = canvas.clone();
    engine
        .draw_line(
            &mut canvas,
            "hello",
            200.0,
            100.0,
            Anchor::CenterMiddle,
            &style(FontRole::Title),
        )
        .unwrap();
    assert_eq!(canvas, before);
}

#[test]
fn layout_and_draw_reports_end_y_and_line_count() {
    let mut engine = TextEngine::new(FontStore::unavailable());
    let mut canvas = black_canvas();
    let block = BlockStyle {
        line: style(FontRole::Title),
        // 0.55 * 40 = 22 px per character.
        max_width: 115.0,
        line_height: 52,
    };
    let (end_y, lines) = engine
        .layout_and_draw(&mut canvas, "ab cd ef gh", 10, &block)
        .unwrap();
    // "ab cd" = 110 fits; "ab cd ef" = 176 does not.
    assert_eq!(lines, 2);
    assert_eq!(end_y, 10 + 2 * 52);

    let (end_y, lines) = engine.layout_and_draw(&mut canvas, "", 10, &block).unwrap();
    assert_eq!((end_y, lines), (10, 0));
}

#[test]
fn system_font_draws_visible_pixels_when_installed() {
    let Some(font) = system_sans_serif() else {
        return;
    };
    let mut engine = TextEngine::new(FontStore::uniform(font));
    if !engine.unavailable_roles().is_empty() {
        return;
    }
    assert!(engine.text_width(FontRole::Body, "Hello world", 40.0) > 0.0);

    let mut canvas = black_canvas();
    let before = canvas.clone();
    engine
        .draw_line(
            &mut canvas,
            "Hello",
            200.0,
            100.0,
            Anchor::CenterMiddle,
            &style(FontRole::Body),
        )
        .unwrap();
    assert_ne!(canvas, before);
}

use std::borrow::Cow;

use tracing::{debug, warn};

use crate::{
    assets::fonts::{FontFace, FontStore},
    config::style::FontRole,
    foundation::{color::Rgba8, core::Vec2, error::CarouselResult},
    render::canvas::Canvas,
    text::wrap::{FixedAdvance, TextBlock, TextMeasure},
};

/// Which point of a line's box the draw position refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Horizontal centre, top of the ascent.
    CenterTop,
    /// Horizontal centre, middle of ascent plus descent.
    CenterMiddle,
    /// Right edge, middle of ascent plus descent.
    RightMiddle,
}

/// Stacked offset draws approximating a soft drop shadow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowStyle {
    /// Displacement from the true text position.
    pub offset: Vec2,
    /// Fill; alpha accumulates across passes.
    pub color: Rgba8,
    /// Number of draws.
    pub passes: u32,
}

/// Font, size and fill of one line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    /// Face.
    pub role: FontRole,
    /// Size in pixels.
    pub size: f32,
    /// Fill.
    pub color: Rgba8,
    /// Optional drop shadow drawn first.
    pub shadow: Option<ShadowStyle>,
}

/// Wrapping parameters of a multi-line block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockStyle {
    /// Per-line style.
    pub line: LineStyle,
    /// Wrap width.
    pub max_width: f32,
    /// Advance between line tops.
    pub line_height: i32,
}

struct RegisteredFace {
    family: String,
    weight: parley::style::FontWeight,
    style: parley::style::FontStyle,
    width: parley::style::FontWidth,
    font: vello_cpu::peniko::FontData,
}

fn role_index(role: FontRole) -> usize {
    match role {
        FontRole::Title => 0,
        FontRole::Body => 1,
        FontRole::Handle => 2,
    }
}

fn register_face(
    font_ctx: &mut parley::FontContext,
    face: &FontFace,
    role: FontRole,
) -> Option<RegisteredFace> {
    let FontFace::Loaded(font) = face else {
        return None;
    };

    let families = font_ctx.collection.register_fonts(
        parley::fontique::Blob::from(font.bytes.as_ref().clone()),
        None,
    );
    let Some((family_id, infos)) = families.first() else {
        warn!(?role, "font bytes registered no families; text will not be drawn");
        return None;
    };
    let info = infos.get(font.index as usize).or_else(|| infos.first())?;
    let Some(family) = font_ctx.collection.family_name(*family_id) else {
        warn!(?role, "registered font family has no name; text will not be drawn");
        return None;
    };

    Some(RegisteredFace {
        family: family.to_string(),
        weight: info.weight(),
        style: info.style(),
        width: info.width(),
        font: vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font.bytes.as_ref().clone()),
            font.index,
        ),
    })
}

/// Shapes text with `parley` and rasterizes glyphs with `vello_cpu`.
///
/// Roles without a usable face still measure (with [`FixedAdvance::FALLBACK`]) so layout is
/// unchanged, but draw nothing.
pub struct TextEngine {
    fonts: FontStore,
    faces: [Option<RegisteredFace>; 3],
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
}

impl TextEngine {
    /// Register every loaded face.
    pub fn new(fonts: FontStore) -> Self {
        let mut font_ctx = parley::FontContext::default();
        let faces = FontRole::ALL.map(|role| register_face(&mut font_ctx, fonts.face(role), role));
        Self {
            fonts,
            faces,
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Underlying font resolution.
    pub fn fonts(&self) -> &FontStore {
        &self.fonts
    }

    /// Roles that cannot draw glyphs.
    pub fn unavailable_roles(&self) -> Vec<FontRole> {
        FontRole::ALL
            .into_iter()
            .filter(|r| self.faces[role_index(*r)].is_none())
            .collect()
    }

    fn layout(&mut self, role: FontRole, text: &str, size_px: f32) -> Option<parley::Layout<()>> {
        let face = self.faces[role_index(role)].as_ref()?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(face.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontWeight(face.weight));
        builder.push_default(parley::style::StyleProperty::FontStyle(face.style));
        builder.push_default(parley::style::StyleProperty::FontWidth(face.width));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        Some(layout)
    }

    /// Single-line advance width of `text`.
    pub fn text_width(&mut self, role: FontRole, text: &str, size_px: f32) -> f32 {
        match self.layout(role, text, size_px) {
            Some(layout) => layout
                .lines()
                .map(|l| l.metrics().advance)
                .fold(0.0f32, f32::max),
            None => FixedAdvance::FALLBACK.text_width(text, size_px),
        }
    }

    /// Borrow the engine as a [`TextMeasure`] for one role.
    pub fn measure(&mut self, role: FontRole) -> RoleMeasure<'_> {
        RoleMeasure { engine: self, role }
    }

    /// Draw one unwrapped line positioned by `anchor` at `(x, y)`.
    pub fn draw_line(
        &mut self,
        canvas: &mut Canvas,
        text: &str,
        x: f32,
        y: f32,
        anchor: Anchor,
        style: &LineStyle,
    ) -> CarouselResult<()> {
        if text.trim().is_empty() {
            return Ok(());
        }
        let Some(layout) = self.layout(style.role, text, style.size) else {
            debug!(role = ?style.role, text, "no face for role; skipping glyphs");
            return Ok(());
        };
        let Some(first) = layout.lines().next() else {
            return Ok(());
        };
        let m = first.metrics();
        let width = layout
            .lines()
            .map(|l| l.metrics().advance)
            .fold(0.0f32, f32::max);

        let origin_x = match anchor {
            Anchor::CenterTop | Anchor::CenterMiddle => x - width / 2.0,
            Anchor::RightMiddle => x - width,
        };
        let origin_y = match anchor {
            Anchor::CenterTop => y - (m.baseline - m.ascent),
            Anchor::CenterMiddle | Anchor::RightMiddle => {
                y - (m.baseline + (m.descent - m.ascent) / 2.0)
            }
        };

        // Room for glyph overhang beyond the advance box.
        let pad = (style.size * 0.5).ceil().max(2.0);
        let left = (origin_x - pad).floor();
        let top = (origin_y - pad).floor();
        let layer_w = to_u16((width + 2.0 * pad).ceil());
        let layer_h = to_u16((m.baseline + m.descent + 2.0 * pad).ceil());
        let shift = (f64::from(origin_x - left), f64::from(origin_y - top));

        let Some(face) = self.faces[role_index(style.role)].as_ref() else {
            return Ok(());
        };
        let (left, top) = (left as i32, top as i32);

        if let Some(shadow) = style.shadow.filter(|s| s.passes > 0) {
            let layer = rasterize(&layout, &face.font, layer_w, layer_h, shift, shadow.color)?;
            let (dx, dy) = (
                shadow.offset.x.round() as i32,
                shadow.offset.y.round() as i32,
            );
            for _ in 0..shadow.passes {
                canvas.composite_at(&layer, left + dx, top + dy, 1.0);
            }
        }
        let layer = rasterize(&layout, &face.font, layer_w, layer_h, shift, style.color)?;
        canvas.composite_at(&layer, left, top, 1.0);
        Ok(())
    }

    /// Draw pre-wrapped lines starting at `y_start`, one `line_height` apart.
    ///
    /// Returns the y after the last line and the number of lines.
    pub fn draw_block(
        &mut self,
        canvas: &mut Canvas,
        block: &TextBlock,
        x: f32,
        y_start: i32,
        anchor: Anchor,
        style: &LineStyle,
    ) -> CarouselResult<(i32, usize)> {
        let mut y = y_start;
        for line in &block.lines {
            self.draw_line(canvas, line, x, y as f32, anchor, style)?;
            y += block.line_height;
        }
        Ok((y, block.line_count()))
    }

    /// Wrap `text` to the block width and draw it centred on the canvas, tops anchored.
    pub fn layout_and_draw(
        &mut self,
        canvas: &mut Canvas,
        text: &str,
        y_start: i32,
        block: &BlockStyle,
    ) -> CarouselResult<(i32, usize)> {
        let wrapped = self.wrap(text, block);
        let center_x = (canvas.width() / 2) as f32;
        self.draw_block(
            canvas,
            &wrapped,
            center_x,
            y_start,
            Anchor::CenterTop,
            &block.line,
        )
    }

    /// Wrap without drawing.
    pub fn wrap(&mut self, text: &str, block: &BlockStyle) -> TextBlock {
        TextBlock::wrap(
            text,
            block.line.size,
            block.max_width,
            block.line_height,
            &mut self.measure(block.line.role),
        )
    }
}

/// [`TextMeasure`] view of a [`TextEngine`] for one role.
pub struct RoleMeasure<'a> {
    engine: &'a mut TextEngine,
    role: FontRole,
}

impl TextMeasure for RoleMeasure<'_> {
    fn text_width(&mut self, text: &str, size_px: f32) -> f32 {
        self.engine.text_width(self.role, text, size_px)
    }
}

fn to_u16(v: f32) -> u16 {
    v.clamp(1.0, f32::from(u16::MAX)) as u16
}

fn rasterize(
    layout: &parley::Layout<()>,
    font: &vello_cpu::peniko::FontData,
    width: u16,
    height: u16,
    shift: (f64, f64),
    color: Rgba8,
) -> CarouselResult<Canvas> {
    let mut ctx = vello_cpu::RenderContext::new(width, height);
    ctx.set_transform(vello_cpu::kurbo::Affine::translate(shift));
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        color.r, color.g, color.b, color.a,
    ));

    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut pixmap);
    Canvas::from_premul_bytes(
        u32::from(width),
        u32::from(height),
        pixmap.data_as_u8_slice().to_vec(),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/text/engine.rs"]
mod tests;

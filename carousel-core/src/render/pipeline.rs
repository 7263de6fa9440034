use std::path::PathBuf;

use tracing::{info, warn};

use crate::{
    assets::{
        decode::{load_logo, load_source_photo},
        fonts::FontStore,
    },
    config::{
        paths::AssetPaths,
        style::{FontRole, StyleConfig},
    },
    foundation::error::{AssetLoadError, CarouselResult},
    render::{
        background::build_background,
        branding::{Centerpiece, draw_divider, draw_swipe_indicator, paste_cta_logo},
        canvas::Canvas,
        finalize::{finalize, persist},
        source::process_source_image,
    },
    slide::request::{SlideRequest, SlideRole},
    text::{
        engine::{Anchor, BlockStyle, LineStyle, ShadowStyle, TextEngine},
        layout::{RevealPlacement, hook_first_line_y},
        wrap::line_advance,
    },
};

/// A tolerated condition that changed the output without failing the render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Degradation {
    /// No source photo was composited; only background and text.
    PhotoSkipped {
        /// Why the photo was unusable.
        reason: String,
    },
    /// The divider used the text handle instead of the logo, or the closing logo was omitted.
    LogoFallback {
        /// Why the logo was unusable.
        reason: String,
    },
    /// Text in this role was laid out but not drawn.
    FontUnavailable {
        /// Affected role.
        role: FontRole,
    },
}

/// Finished canvas plus what degraded along the way.
#[derive(Clone, Debug)]
pub struct RenderedSlide {
    /// Final pixels.
    pub canvas: Canvas,
    /// Tolerated failures, in the order they occurred.
    pub degradations: Vec<Degradation>,
}

/// Result of rendering a slide to disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOutcome {
    /// Written PNG.
    pub output_path: PathBuf,
    /// Tolerated failures.
    pub degradations: Vec<Degradation>,
}

/// One render session: validated style, resolved fonts and logo.
///
/// Fonts and the logo are loaded once in [`SlideRenderer::new`]; each [`SlideRenderer::render`]
/// builds a fresh canvas.
pub struct SlideRenderer {
    style: StyleConfig,
    paths: AssetPaths,
    text: TextEngine,
    logo: Result<Canvas, String>,
}

impl SlideRenderer {
    /// Validate `style` and load fonts (with system fallback) and the logo.
    pub fn new(style: &StyleConfig, paths: &AssetPaths) -> CarouselResult<Self> {
        style.validate()?;
        let fonts = FontStore::load(&style.fonts, paths);
        Ok(Self::assemble(style, paths, fonts))
    }

    /// Like [`SlideRenderer::new`] with an already resolved font store.
    pub fn with_fonts(
        style: &StyleConfig,
        paths: &AssetPaths,
        fonts: FontStore,
    ) -> CarouselResult<Self> {
        style.validate()?;
        Ok(Self::assemble(style, paths, fonts))
    }

    fn assemble(style: &StyleConfig, paths: &AssetPaths, fonts: FontStore) -> Self {
        let logo = match &style.branding.logo_path {
            Some(p) => {
                let path = paths.resolve(p);
                load_logo(&path, style.branding.logo_height).map_err(|e: AssetLoadError| {
                    warn!(error = %e, "logo unavailable; using text handle");
                    e.to_string()
                })
            }
            None => Err("no logo configured".to_string()),
        };
        Self {
            style: style.clone(),
            paths: paths.clone(),
            text: TextEngine::new(fonts),
            logo,
        }
    }

    /// Style this session renders with.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    fn shadow(&self) -> ShadowStyle {
        let e = &self.style.effects;
        ShadowStyle {
            offset: e.shadow_offset,
            color: self.style.palette.shadow,
            passes: e.shadow_passes,
        }
    }

    /// Compose one slide in memory.
    #[tracing::instrument(skip_all, fields(index = request.slide_index, role = %request.role))]
    pub fn render(&mut self, request: &SlideRequest) -> CarouselResult<RenderedSlide> {
        let mut degradations = Vec::new();

        let mut canvas = build_background(&self.style)?;

        let photo_path = self.paths.source_photo(request.slide_index);
        match load_source_photo(&photo_path) {
            Ok(photo) => {
                let placed = process_source_image(&photo, request.role, &self.style);
                canvas.composite_at(&placed.image, placed.x, placed.y, 1.0);
            }
            Err(err) => {
                warn!(error = %err, "source photo unavailable; continuing with background only");
                degradations.push(Degradation::PhotoSkipped {
                    reason: err.to_string(),
                });
            }
        }

        match request.role {
            SlideRole::Reveal => self.compose_reveal(&mut canvas, request, &mut degradations)?,
            SlideRole::Hook => self.compose_hook(&mut canvas, request)?,
            SlideRole::Cta => self.compose_cta(&mut canvas, &mut degradations)?,
        }

        degradations.extend(
            self.text
                .unavailable_roles()
                .into_iter()
                .map(|role| Degradation::FontUnavailable { role }),
        );
        Ok(RenderedSlide {
            canvas,
            degradations,
        })
    }

    fn compose_reveal(
        &mut self,
        canvas: &mut Canvas,
        request: &SlideRequest,
        degradations: &mut Vec<Degradation>,
    ) -> CarouselResult<()> {
        let style = &self.style;
        let centerpiece = match &self.logo {
            Ok(logo) => Centerpiece::Logo(logo),
            Err(reason) => {
                degradations.push(Degradation::LogoFallback {
                    reason: reason.clone(),
                });
                Centerpiece::Handle
            }
        };
        draw_divider(
            canvas,
            style.reveal.divider_y,
            style,
            centerpiece,
            &mut self.text,
        )?;

        let typo = &style.typography;
        let shadow = Some(self.shadow());
        let title_style = BlockStyle {
            line: LineStyle {
                role: FontRole::Title,
                size: typo.title_size,
                color: style.palette.text,
                shadow,
            },
            max_width: style.reveal.text_max_width,
            line_height: line_advance(typo.title_size, typo.line_height_ratio),
        };
        let subtitle_style = BlockStyle {
            line: LineStyle {
                role: FontRole::Body,
                size: typo.subtitle_size,
                ..title_style.line
            },
            line_height: line_advance(typo.subtitle_size, typo.line_height_ratio),
            ..title_style
        };

        let title = self.text.wrap(&request.title, &title_style);
        let subtitle = self.text.wrap(&request.subtitle, &subtitle_style);
        let placement = RevealPlacement::compute(&title, &subtitle, typo, &style.reveal);

        let center_x = (canvas.width() / 2) as f32;
        let (title_end, title_lines) = self.text.draw_block(
            canvas,
            &title,
            center_x,
            placement.title_y,
            Anchor::CenterTop,
            &title_style.line,
        )?;
        let (subtitle_end, subtitle_lines) = self.text.draw_block(
            canvas,
            &subtitle,
            center_x,
            title_end + placement.gap,
            Anchor::CenterTop,
            &subtitle_style.line,
        )?;
        info!(
            title_y = placement.title_y,
            title_lines, subtitle_lines, subtitle_end, "laid out reveal text"
        );

        finalize(canvas, style.effects.final_vignette_strength);
        let shadow = self.shadow();
        draw_swipe_indicator(canvas, &self.style, shadow, &mut self.text)
    }

    fn compose_hook(&mut self, canvas: &mut Canvas, request: &SlideRequest) -> CarouselResult<()> {
        let style = &self.style;
        let hook = &style.hook;
        let shadow = Some(self.shadow());
        let headline_style = BlockStyle {
            line: LineStyle {
                role: FontRole::Title,
                size: hook.headline_size,
                color: style.palette.text,
                shadow,
            },
            max_width: hook.max_width,
            line_height: line_advance(hook.headline_size, hook.line_spacing_ratio),
        };

        let headline = self.text.wrap(&request.title, &headline_style);
        let first_y = hook_first_line_y(&headline, hook);
        let center_x = (canvas.width() / 2) as f32;
        let (_, lines) = self.text.draw_block(
            canvas,
            &headline,
            center_x,
            first_y,
            Anchor::CenterMiddle,
            &headline_style.line,
        )?;
        info!(first_y, lines, "laid out hook headline");

        self.text.draw_line(
            canvas,
            &hook.caption_text,
            center_x,
            hook.caption_y as f32,
            Anchor::CenterMiddle,
            &LineStyle {
                role: FontRole::Body,
                size: hook.caption_size,
                color: style.palette.accent,
                shadow,
            },
        )?;

        finalize(canvas, style.effects.final_vignette_strength);
        Ok(())
    }

    fn compose_cta(
        &mut self,
        canvas: &mut Canvas,
        degradations: &mut Vec<Degradation>,
    ) -> CarouselResult<()> {
        let style = &self.style;
        let shadow = Some(self.shadow());
        let center_x = (canvas.width() / 2) as f32;
        for line in &style.cta.lines {
            self.text.draw_line(
                canvas,
                &line.text,
                center_x,
                line.y as f32,
                Anchor::CenterMiddle,
                &LineStyle {
                    role: line.font,
                    size: line.size,
                    color: line.color,
                    shadow,
                },
            )?;
        }

        finalize(canvas, style.effects.final_vignette_strength);

        match &self.logo {
            Ok(logo) => paste_cta_logo(canvas, logo, style),
            Err(reason) => degradations.push(Degradation::LogoFallback {
                reason: reason.clone(),
            }),
        }
        Ok(())
    }

    /// Compose one slide and write it to its output path.
    pub fn render_to_file(&mut self, request: &SlideRequest) -> CarouselResult<RenderOutcome> {
        let rendered = self.render(request)?;
        let output_path = self.paths.output_file(request.slide_index);
        persist(&rendered.canvas, &output_path)?;
        Ok(RenderOutcome {
            output_path,
            degradations: rendered.degradations,
        })
    }
}

/// Render `request` in a fresh session.
pub fn render_slide(
    request: &SlideRequest,
    style: &StyleConfig,
    paths: &AssetPaths,
) -> CarouselResult<RenderedSlide> {
    SlideRenderer::new(style, paths)?.render(request)
}

/// Render `request` in a fresh session and persist it.
pub fn render_slide_to_file(
    request: &SlideRequest,
    style: &StyleConfig,
    paths: &AssetPaths,
) -> CarouselResult<RenderOutcome> {
    SlideRenderer::new(style, paths)?.render_to_file(request)
}

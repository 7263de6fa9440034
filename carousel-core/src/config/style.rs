use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::foundation::{
    color::Rgba8,
    core::{CanvasSpec, Vec2},
    error::{CarouselError, CarouselResult},
};

/// Names accepted by [`StyleConfig::preset`].
pub const PRESET_NAMES: &[&str] = &["factsmind", "factsmind-hd"];

/// Immutable look-and-layout configuration shared by every stage of a render.
///
/// Constructed once (from a preset, optionally overlaid with JSON) and passed by reference;
/// nothing in the pipeline mutates it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Output dimensions.
    pub canvas: CanvasSpec,
    /// Brand colors.
    pub palette: Palette,
    /// Base canvas fill.
    pub background: BackgroundStyle,
    /// Font files per typographic role.
    pub fonts: FontPaths,
    /// Shared type sizes for reveal slides and chrome.
    pub typography: Typography,
    /// Layout of `reveal` slides.
    pub reveal: RevealLayout,
    /// Layout of `hook` slides.
    pub hook: HookLayout,
    /// Layout of `cta` slides.
    pub cta: CtaLayout,
    /// Divider, logo and handle settings.
    pub branding: Branding,
    /// Effect strengths shared across roles.
    pub effects: Effects,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Brand colors.
pub struct Palette {
    /// Flat canvas color.
    pub background: Rgba8,
    /// Color blended in at the bottom of the canvas.
    pub gradient: Rgba8,
    /// Primary text color.
    pub text: Rgba8,
    /// Accent used for calls to action and the handle.
    pub accent: Rgba8,
    /// Divider line color.
    pub divider: Rgba8,
    /// Drop shadow fill (alpha is honored).
    pub shadow: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba8::rgb(2, 3, 8),
            gradient: Rgba8::rgb(72, 42, 110),
            text: Rgba8::rgb(232, 232, 232),
            accent: Rgba8::rgb(117, 232, 255),
            divider: Rgba8::rgb(232, 232, 232),
            shadow: Rgba8::rgba(0, 0, 0, 180),
        }
    }
}

/// How the base canvas is filled before any photo is composited.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum BackgroundStyle {
    /// Flat `palette.background`.
    Solid,
    /// `palette.background` with `palette.gradient` blended into the bottom band.
    BottomGradient {
        /// Fraction of the height where the band starts (0.8 = bottom 20%).
        start_fraction: f32,
        /// Blend fraction reached at the last row.
        max_blend: f32,
    },
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        Self::BottomGradient {
            start_fraction: 0.8,
            max_blend: 0.15,
        }
    }
}

/// Typographic role a piece of text is set in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontRole {
    /// Headlines.
    Title,
    /// Running text.
    Body,
    /// Brand handle.
    Handle,
}

impl FontRole {
    /// All roles, in load order.
    pub const ALL: [FontRole; 3] = [FontRole::Title, FontRole::Body, FontRole::Handle];
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Font file per role. Relative paths resolve against the assets root.
pub struct FontPaths {
    /// Headline face.
    pub title: PathBuf,
    /// Body face.
    pub body: PathBuf,
    /// Handle face.
    pub handle: PathBuf,
}

impl FontPaths {
    /// Path configured for `role`.
    pub fn for_role(&self, role: FontRole) -> &Path {
        match role {
            FontRole::Title => &self.title,
            FontRole::Body => &self.body,
            FontRole::Handle => &self.handle,
        }
    }
}

impl Default for FontPaths {
    fn default() -> Self {
        Self {
            title: PathBuf::from("fonts/Montserrat-ExtraBold.ttf"),
            body: PathBuf::from("fonts/Montserrat-Regular.ttf"),
            handle: PathBuf::from("fonts/Montserrat-SemiBold.ttf"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Type sizes in pixels.
pub struct Typography {
    /// Reveal title size.
    pub title_size: f32,
    /// Reveal subtitle size.
    pub subtitle_size: f32,
    /// Divider handle fallback size.
    pub divider_size: f32,
    /// Swipe indicator size.
    pub swipe_size: f32,
    /// Line advance as a multiple of font size for wrapped blocks.
    pub line_height_ratio: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            title_size: 65.0,
            subtitle_size: 40.0,
            divider_size: 30.0,
            swipe_size: 24.0,
            line_height_ratio: 1.3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Gap between title and subtitle, keyed by subtitle line count.
pub struct SubtitleGaps {
    /// Zero to two subtitle lines.
    pub up_to_two: i32,
    /// Exactly three lines.
    pub three: i32,
    /// Exactly four lines.
    pub four: i32,
    /// Five or more lines.
    pub five_or_more: i32,
}

impl SubtitleGaps {
    /// Gap for a subtitle of `lines` lines; longer subtitles get tighter spacing.
    pub fn gap_for(&self, lines: usize) -> i32 {
        match lines {
            0..=2 => self.up_to_two,
            3 => self.three,
            4 => self.four,
            _ => self.five_or_more,
        }
    }
}

impl Default for SubtitleGaps {
    fn default() -> Self {
        Self {
            up_to_two: 50,
            three: 35,
            four: 25,
            five_or_more: 20,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Layout constants for `reveal` slides.
pub struct RevealLayout {
    /// Vertical paste offset of the fit-width photo (negative shifts it up).
    pub image_y_offset: i32,
    /// Canvas row where the photo starts fading out.
    pub fade_start_y: i32,
    /// Canvas row of the divider.
    pub divider_y: i32,
    /// Wrap width of title and subtitle.
    pub text_max_width: f32,
    /// Space between divider and the top of the text zone.
    pub text_zone_top_margin: i32,
    /// Space between the bottom of the text zone and the swipe indicator.
    pub text_zone_bottom_margin: i32,
    /// Swipe indicator row (vertical middle).
    pub swipe_y: i32,
    /// Distance of the swipe indicator's right edge from the canvas edge.
    pub swipe_right_margin: i32,
    /// Swipe indicator label.
    pub swipe_text: String,
    /// Title/subtitle gap step function.
    pub subtitle_gaps: SubtitleGaps,
}

impl Default for RevealLayout {
    fn default() -> Self {
        Self {
            image_y_offset: -75,
            fade_start_y: 650,
            divider_y: 800,
            text_max_width: 950.0,
            text_zone_top_margin: 75,
            text_zone_bottom_margin: 20,
            swipe_y: 1300,
            swipe_right_margin: 60,
            swipe_text: "SWIPE >>>".to_string(),
            subtitle_gaps: SubtitleGaps::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Layout constants for `hook` slides.
pub struct HookLayout {
    /// Headline size.
    pub headline_size: f32,
    /// Headline line advance as a multiple of `headline_size`.
    pub line_spacing_ratio: f32,
    /// Headline wrap width.
    pub max_width: f32,
    /// Top of the headline zone.
    pub zone_top: i32,
    /// Caption row (vertical middle).
    pub caption_y: i32,
    /// Space kept free above the caption.
    pub caption_margin: i32,
    /// Caption size.
    pub caption_size: f32,
    /// Caption label.
    pub caption_text: String,
    /// Brightness multiplier applied to the photo.
    pub darken: f32,
    /// Canvas row where the photo starts fading out.
    pub fade_start_y: i32,
    /// Peak opacity of the centre-weighted contrast overlay.
    pub contrast_max_alpha: u8,
}

impl Default for HookLayout {
    fn default() -> Self {
        Self {
            headline_size: 110.0,
            line_spacing_ratio: 1.2,
            max_width: 900.0,
            zone_top: 200,
            caption_y: 1250,
            caption_margin: 100,
            caption_size: 50.0,
            caption_text: "TAP TO DISCOVER \u{2192}".to_string(),
            darken: 0.7,
            fade_start_y: 500,
            contrast_max_alpha: 80,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// One line of the CTA sign-off.
pub struct SignOffLine {
    /// Label.
    pub text: String,
    /// Face.
    pub font: FontRole,
    /// Size in pixels.
    pub size: f32,
    /// Fill color.
    pub color: Rgba8,
    /// Row of the line's vertical middle.
    pub y: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Layout constants for `cta` slides.
pub struct CtaLayout {
    /// Sign-off lines, drawn in order.
    pub lines: Vec<SignOffLine>,
    /// Distance from the logo's bottom edge to the canvas bottom.
    pub logo_bottom_margin: i32,
}

impl Default for CtaLayout {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            lines: vec![
                SignOffLine {
                    text: "This is just".to_string(),
                    font: FontRole::Body,
                    size: 55.0,
                    color: palette.text,
                    y: 510,
                },
                SignOffLine {
                    text: "THE BEGINNING".to_string(),
                    font: FontRole::Title,
                    size: 95.0,
                    color: palette.text,
                    // 510 + floor(55 * 1.6)
                    y: 598,
                },
                SignOffLine {
                    text: "Follow @factsmind".to_string(),
                    font: FontRole::Handle,
                    size: 65.0,
                    color: palette.accent,
                    y: 808,
                },
                SignOffLine {
                    text: "Endless discoveries await".to_string(),
                    font: FontRole::Body,
                    size: 48.0,
                    color: palette.text,
                    // 808 + floor(65 * 1.5)
                    y: 905,
                },
            ],
            logo_bottom_margin: 240,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Divider, logo and handle settings.
pub struct Branding {
    /// Logo image (PNG or SVG). Relative paths resolve against the assets root.
    pub logo_path: Option<PathBuf>,
    /// Height the logo is resized to.
    pub logo_height: u32,
    /// Opacity multiplier applied to the logo's alpha on the divider.
    pub logo_opacity: f32,
    /// Text drawn when the logo is unavailable.
    pub handle_text: String,
    /// Distance of the divider's outer ends from the canvas edges.
    pub edge_margin: i32,
    /// Space between each divider segment and the centerpiece.
    pub logo_gap: i32,
    /// Divider thickness.
    pub line_width: u32,
    /// Outer radius of the halo behind the centerpiece.
    pub halo_radius: u32,
    /// Halo opacity at its centre.
    pub halo_max_alpha: u8,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            logo_path: Some(PathBuf::from("factsmind_logo.png")),
            logo_height: 70,
            logo_opacity: 0.6,
            handle_text: "@factsmind".to_string(),
            edge_margin: 40,
            logo_gap: 40,
            line_width: 1,
            halo_radius: 40,
            halo_max_alpha: 80,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Effect strengths.
pub struct Effects {
    /// Reveal photo vignette strength (0..=1).
    pub vignette_strength: f32,
    /// Whole-canvas vignette strength (0..=1).
    pub final_vignette_strength: f32,
    /// Drop shadow displacement.
    pub shadow_offset: Vec2,
    /// Number of stacked shadow draws.
    pub shadow_passes: u32,
}

impl Default for Effects {
    fn default() -> Self {
        Self {
            vignette_strength: 0.3,
            final_vignette_strength: 0.2,
            shadow_offset: Vec2::new(3.0, 3.0),
            shadow_passes: 4,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSpec::PORTRAIT,
            palette: Palette::default(),
            background: BackgroundStyle::default(),
            fonts: FontPaths::default(),
            typography: Typography::default(),
            reveal: RevealLayout::default(),
            hook: HookLayout::default(),
            cta: CtaLayout::default(),
            branding: Branding::default(),
            effects: Effects::default(),
        }
    }
}

impl StyleConfig {
    /// Look up a named preset.
    pub fn preset(name: &str) -> CarouselResult<Self> {
        match name {
            "factsmind" => Ok(Self::default()),
            "factsmind-hd" => {
                let mut style = Self::default().scaled(2.0);
                style.background = BackgroundStyle::Solid;
                style.fonts = FontPaths {
                    title: PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"),
                    body: PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
                    handle: PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"),
                };
                Ok(style)
            }
            other => Err(CarouselError::validation(format!(
                "unknown style preset '{other}' (expected one of: {})",
                PRESET_NAMES.join(", ")
            ))),
        }
    }

    /// Parse a (possibly partial) JSON document; absent fields keep the default preset values.
    pub fn from_json_str(json: &str) -> CarouselResult<Self> {
        let style: Self = serde_json::from_str(json)
            .map_err(|e| CarouselError::serde(format!("parse style JSON: {e}")))?;
        style.validate()?;
        Ok(style)
    }

    /// Read and parse a style JSON file.
    pub fn from_json_path(path: &Path) -> CarouselResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read style file '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Same design with every pixel-valued field multiplied by `factor`.
    pub fn scaled(&self, factor: f32) -> Self {
        let px = |v: i32| -> i32 { (v as f32 * factor).round() as i32 };
        let upx = |v: u32| -> u32 { (v as f32 * factor).round().max(0.0) as u32 };

        let mut out = self.clone();
        out.canvas = CanvasSpec {
            width: upx(self.canvas.width),
            height: upx(self.canvas.height),
        };

        let t = &mut out.typography;
        t.title_size *= factor;
        t.subtitle_size *= factor;
        t.divider_size *= factor;
        t.swipe_size *= factor;

        let r = &mut out.reveal;
        r.image_y_offset = px(r.image_y_offset);
        r.fade_start_y = px(r.fade_start_y);
        r.divider_y = px(r.divider_y);
        r.text_max_width *= factor;
        r.text_zone_top_margin = px(r.text_zone_top_margin);
        r.text_zone_bottom_margin = px(r.text_zone_bottom_margin);
        r.swipe_y = px(r.swipe_y);
        r.swipe_right_margin = px(r.swipe_right_margin);
        let g = &mut r.subtitle_gaps;
        g.up_to_two = px(g.up_to_two);
        g.three = px(g.three);
        g.four = px(g.four);
        g.five_or_more = px(g.five_or_more);

        let h = &mut out.hook;
        h.headline_size *= factor;
        h.max_width *= factor;
        h.zone_top = px(h.zone_top);
        h.caption_y = px(h.caption_y);
        h.caption_margin = px(h.caption_margin);
        h.caption_size *= factor;
        h.fade_start_y = px(h.fade_start_y);

        for line in &mut out.cta.lines {
            line.size *= factor;
            line.y = px(line.y);
        }
        out.cta.logo_bottom_margin = px(out.cta.logo_bottom_margin);

        let b = &mut out.branding;
        b.logo_height = upx(b.logo_height);
        b.edge_margin = px(b.edge_margin);
        b.logo_gap = px(b.logo_gap);
        b.line_width = upx(b.line_width).max(1);
        b.halo_radius = upx(b.halo_radius);

        out.effects.shadow_offset = self.effects.shadow_offset * f64::from(factor);
        out
    }

    /// Reject values no stage can work with.
    pub fn validate(&self) -> CarouselResult<()> {
        self.canvas.validate()?;

        fn unit(name: &str, v: f32) -> CarouselResult<()> {
            if !v.is_finite() || !(0.0..=1.0).contains(&v) {
                return Err(CarouselError::validation(format!(
                    "{name} must be within 0..=1 (got {v})"
                )));
            }
            Ok(())
        }
        fn positive(name: &str, v: f32) -> CarouselResult<()> {
            if !v.is_finite() || v <= 0.0 {
                return Err(CarouselError::validation(format!(
                    "{name} must be finite and > 0 (got {v})"
                )));
            }
            Ok(())
        }

        if let BackgroundStyle::BottomGradient {
            start_fraction,
            max_blend,
        } = self.background
        {
            unit("background.start_fraction", start_fraction)?;
            unit("background.max_blend", max_blend)?;
        }

        let t = &self.typography;
        positive("typography.title_size", t.title_size)?;
        positive("typography.subtitle_size", t.subtitle_size)?;
        positive("typography.divider_size", t.divider_size)?;
        positive("typography.swipe_size", t.swipe_size)?;
        positive("typography.line_height_ratio", t.line_height_ratio)?;

        positive("reveal.text_max_width", self.reveal.text_max_width)?;

        let h = &self.hook;
        positive("hook.headline_size", h.headline_size)?;
        positive("hook.line_spacing_ratio", h.line_spacing_ratio)?;
        positive("hook.max_width", h.max_width)?;
        positive("hook.caption_size", h.caption_size)?;
        unit("hook.darken", h.darken)?;

        for (i, line) in self.cta.lines.iter().enumerate() {
            positive(&format!("cta.lines[{i}].size"), line.size)?;
        }

        let b = &self.branding;
        if b.logo_height == 0 {
            return Err(CarouselError::validation("branding.logo_height must be > 0"));
        }
        unit("branding.logo_opacity", b.logo_opacity)?;

        let e = &self.effects;
        unit("effects.vignette_strength", e.vignette_strength)?;
        unit("effects.final_vignette_strength", e.final_vignette_strength)?;
        if !e.shadow_offset.is_finite() {
            return Err(CarouselError::validation(
                "effects.shadow_offset must be finite",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/style.rs"]
mod tests;

//! Carousel is a deterministic composition engine for branded social-media carousel slides.
//!
//! A slide is one fixed-size PNG built from a title/subtitle pair and an optional source photo.
//! Each [`SlideRole`] follows its own layout path through the same stages.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: positional arguments -> [`SlideRequest`] ([`parse_slide_args`])
//! 2. **Background**: [`StyleConfig`] -> solid or bottom-gradient [`Canvas`]
//! 3. **Photo**: cover-fit or fit-width, vignette/darken, bottom fade, composited by alpha
//! 4. **Text**: greedy word wrap with orphan correction, zone centring, stacked drop shadows
//! 5. **Branding**: divider with logo (or text handle) and halo, swipe indicator
//! 6. **Finalize**: whole-canvas edge vignette, then PNG output
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical inputs and assets give pixel-identical output.
//! - **Degrade, don't abort**: a missing photo, font or logo is reported as a [`Degradation`]
//!   and the render completes. Only bad arguments, bad configuration and failed saves are fatal.
//! - **Premultiplied RGBA8** inside the pipeline; PNGs are written with straight alpha.
//!
//! The [`analytics`] module holds the metrics-store boundary used by the content-strategy side;
//! the rendering pipeline never calls it.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod assets;
mod config;
mod effects;
mod foundation;
mod render;
mod slide;
mod text;

/// Account and post metrics storage plus derived engagement arithmetic.
pub mod analytics;

pub use assets::decode::{load_logo, load_source_photo, read_asset_bytes};
pub use assets::fonts::{
    FontFace, FontOrigin, FontStore, LoadedFont, SystemFallback, load_font_file,
    system_sans_serif,
};
pub use config::paths::AssetPaths;
pub use config::style::{
    BackgroundStyle, Branding, CtaLayout, Effects, FontPaths, FontRole, HookLayout, PRESET_NAMES,
    Palette, RevealLayout, SignOffLine, StyleConfig, SubtitleGaps, Typography,
};
pub use foundation::color::Rgba8;
pub use foundation::core::{CanvasSpec, Vec2};
pub use foundation::error::{AssetLoadError, CarouselError, CarouselResult};
pub use render::background::build_background;
pub use render::canvas::Canvas;
pub use render::finalize::{finalize, persist};
pub use render::pipeline::{
    Degradation, RenderOutcome, RenderedSlide, SlideRenderer, render_slide, render_slide_to_file,
};
pub use render::source::{PositionedImage, cover_fit, fit_width, process_source_image};
pub use slide::request::{
    SlideRequest, SlideRole, TITLE_SEPARATOR, parse_slide_args, split_title_subtitle,
};
pub use text::engine::{Anchor, BlockStyle, LineStyle, ShadowStyle, TextEngine};
pub use text::wrap::{FixedAdvance, TextBlock, TextMeasure, wrap_words};

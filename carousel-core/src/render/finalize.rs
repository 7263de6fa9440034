use std::path::Path;

use anyhow::Context as _;
use tracing::info;

use crate::{
    effects::vignette::apply_edge_vignette, foundation::error::CarouselResult,
    render::canvas::Canvas,
};

/// Apply the whole-canvas edge vignette.
pub fn finalize(canvas: &mut Canvas, vignette_strength: f32) {
    apply_edge_vignette(canvas, vignette_strength);
}

/// Encode `canvas` as PNG at `path`, creating missing parent directories.
pub fn persist(canvas: &Canvas, path: &Path) -> CarouselResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory '{}'", parent.display()))?;
    }

    let rgba = canvas.to_rgba_image()?;
    image::save_buffer_with_format(
        path,
        rgba.as_raw(),
        canvas.width(),
        canvas.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;

    info!(path = %path.display(), "wrote slide");
    Ok(())
}

use std::path::Path;

use image::{RgbaImage, imageops::FilterType};

use crate::{foundation::error::AssetLoadError, render::canvas::Canvas};

/// Read a whole optional asset, distinguishing absent, empty and unreadable files.
pub fn read_asset_bytes(path: &Path) -> Result<Vec<u8>, AssetLoadError> {
    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            AssetLoadError::Missing {
                path: path.to_path_buf(),
            }
        } else {
            AssetLoadError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    if bytes.is_empty() {
        return Err(AssetLoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(bytes)
}

/// Decode encoded raster bytes into a straight-alpha RGBA8 image.
pub fn decode_raster(path: &Path, bytes: &[u8]) -> Result<RgbaImage, AssetLoadError> {
    let dyn_img = image::load_from_memory(bytes).map_err(|e| AssetLoadError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(dyn_img.to_rgba8())
}

/// Load the externally generated source photo for a slide.
pub fn load_source_photo(path: &Path) -> Result<RgbaImage, AssetLoadError> {
    let bytes = read_asset_bytes(path)?;
    decode_raster(path, &bytes)
}

/// Width that keeps the aspect ratio at `target_height`, truncated, at least one pixel.
pub fn width_for_height(src_w: u32, src_h: u32, target_height: u32) -> u32 {
    if src_h == 0 {
        return 1;
    }
    let aspect = f64::from(src_w) / f64::from(src_h);
    ((f64::from(target_height) * aspect) as u32).max(1)
}

fn is_svg(path: &Path, bytes: &[u8]) -> bool {
    let by_ext = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    by_ext || bytes.trim_ascii_start().starts_with(b"<svg")
}

/// Rasterize SVG bytes to `target_height`, preserving aspect ratio.
pub fn rasterize_svg(
    path: &Path,
    bytes: &[u8],
    target_height: u32,
) -> Result<Canvas, AssetLoadError> {
    let decode_err = |reason: String| AssetLoadError::Decode {
        path: path.to_path_buf(),
        reason,
    };

    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).map_err(|e| decode_err(e.to_string()))?;
    let size = tree.size();
    if !(size.width() > 0.0 && size.height() > 0.0) {
        return Err(decode_err("svg has invalid width/height".to_string()));
    }

    let height = target_height.max(1);
    let width = ((f64::from(height) * f64::from(size.width()) / f64::from(size.height())) as u32)
        .max(1);
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| decode_err(format!("failed to allocate {width}x{height} svg pixmap")))?;

    let sx = (width as f32) / size.width();
    let sy = (height as f32) / size.height();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    Canvas::from_premul_bytes(width, height, pixmap.data().to_vec())
        .map_err(|e| decode_err(e.to_string()))
}

/// Load the brand logo (raster or SVG) scaled to `target_height` with Lanczos3.
pub fn load_logo(path: &Path, target_height: u32) -> Result<Canvas, AssetLoadError> {
    let bytes = read_asset_bytes(path)?;
    if is_svg(path, &bytes) {
        return rasterize_svg(path, &bytes, target_height);
    }

    let img = decode_raster(path, &bytes)?;
    let (w, h) = img.dimensions();
    let height = target_height.max(1);
    let width = width_for_height(w, h, height);
    let resized = image::imageops::resize(&img, width, height, FilterType::Lanczos3);
    Ok(Canvas::from_rgba_image(resized))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;

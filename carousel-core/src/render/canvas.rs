use image::RgbaImage;

use crate::{
    effects::composite::{PremulRgba8, over},
    foundation::{
        color::Rgba8,
        core::CanvasSpec,
        error::{CarouselError, CarouselResult},
        math::{Fnv1a64, premultiply_rgba8_in_place, unpremultiply_rgba8_in_place},
    },
};

/// Premultiplied RGBA8 pixel buffer.
///
/// Used both for the slide being assembled and for processed layers (photo, logo, text) that
/// are composited onto it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

fn buffer_len(width: u32, height: u32) -> CarouselResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| CarouselError::render("canvas buffer size overflow"))
}

impl Canvas {
    /// Fully transparent buffer.
    pub fn new(width: u32, height: u32) -> CarouselResult<Self> {
        Ok(Self {
            width,
            height,
            data: vec![0; buffer_len(width, height)?],
        })
    }

    /// Buffer of the slide's dimensions filled with one color.
    pub fn filled(spec: CanvasSpec, color: Rgba8) -> CarouselResult<Self> {
        spec.validate()?;
        let mut canvas = Self::new(spec.width, spec.height)?;
        let px = color.to_premul();
        for chunk in canvas.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
        Ok(canvas)
    }

    /// Wrap premultiplied bytes.
    pub fn from_premul_bytes(width: u32, height: u32, data: Vec<u8>) -> CarouselResult<Self> {
        if data.len() != buffer_len(width, height)? {
            return Err(CarouselError::render(format!(
                "expected {width}x{height} rgba8 buffer, got {} bytes",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Take ownership of a straight-alpha image, premultiplying it.
    pub fn from_rgba_image(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let mut data = image.into_raw();
        premultiply_rgba8_in_place(&mut data);
        Self {
            width,
            height,
            data,
        }
    }

    /// Straight-alpha copy suitable for encoding.
    pub fn to_rgba_image(&self) -> CarouselResult<RgbaImage> {
        let mut data = self.data.clone();
        unpremultiply_rgba8_in_place(&mut data);
        RgbaImage::from_raw(self.width, self.height, data)
            .ok_or_else(|| CarouselError::render("canvas buffer does not match its dimensions"))
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw premultiplied bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }

    /// Premultiplied pixel at `(x, y)`; `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<PremulRgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Overwrite a full row with one color.
    pub fn fill_row(&mut self, y: u32, color: Rgba8) {
        if y >= self.height {
            return;
        }
        let px = color.to_premul();
        let start = self.index(0, y);
        let end = start + (self.width as usize) * 4;
        for chunk in self.data[start..end].chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Source-over blend `color` into the half-open rectangle `[x0, x1) x [y0, y1)`, clipped.
    pub fn blend_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba8) {
        let px = color.to_premul();
        let cx0 = x0.clamp(0, self.width as i32) as u32;
        let cx1 = x1.clamp(0, self.width as i32) as u32;
        let cy0 = y0.clamp(0, self.height as i32) as u32;
        let cy1 = y1.clamp(0, self.height as i32) as u32;
        for y in cy0..cy1 {
            for x in cx0..cx1 {
                let i = self.index(x, y);
                let dst = [
                    self.data[i],
                    self.data[i + 1],
                    self.data[i + 2],
                    self.data[i + 3],
                ];
                self.data[i..i + 4].copy_from_slice(&over(dst, px, 1.0));
            }
        }
    }

    /// Composite `src` with its top-left corner at `(x, y)`; parts outside `self` are clipped.
    ///
    /// `src`'s own alpha is the paste mask; `opacity` scales it further.
    pub fn composite_at(&mut self, src: &Canvas, x: i32, y: i32, opacity: f32) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (i64::from(x) + i64::from(src.width)).min(i64::from(self.width)) as i32;
        let y1 = (i64::from(y) + i64::from(src.height)).min(i64::from(self.height)) as i32;
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let run = ((x1 - x0) as usize) * 4;
        for dy in y0..y1 {
            let sy = (dy - y) as u32;
            let sx = (x0 - x) as u32;
            let si = src.index(sx, sy);
            let di = self.index(x0 as u32, dy as u32);
            for (d, s) in self.data[di..di + run]
                .chunks_exact_mut(4)
                .zip(src.data[si..si + run].chunks_exact(4))
            {
                let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
                d.copy_from_slice(&out);
            }
        }
    }

    /// Stable content hash over dimensions and pixels.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u32(self.width);
        h.write_u32(self.height);
        h.write_bytes(&self.data);
        h.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;

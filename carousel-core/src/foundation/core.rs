use crate::foundation::error::{CarouselError, CarouselResult};

pub use kurbo::Vec2;

/// Fixed pixel dimensions of every slide rendered by a process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSpec {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CanvasSpec {
    /// Primary Instagram portrait format.
    pub const PORTRAIT: Self = Self {
        width: 1080,
        height: 1350,
    };

    /// Build a canvas spec, rejecting empty or oversized extents.
    pub fn new(width: u32, height: u32) -> CarouselResult<Self> {
        let spec = Self { width, height };
        spec.validate()?;
        Ok(spec)
    }

    pub(crate) fn validate(self) -> CarouselResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CarouselError::validation("canvas width/height must be > 0"));
        }
        // Text layers are rasterized through u16-addressed pixmaps.
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(CarouselError::validation(format!(
                "canvas {}x{} exceeds {}x{}",
                self.width,
                self.height,
                u16::MAX,
                u16::MAX
            )));
        }
        Ok(())
    }
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self::PORTRAIT
    }
}

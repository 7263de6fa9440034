//! Slide composition: canvas, background, photo processing, branding, pipeline and output.

pub mod background;
pub mod branding;
pub mod canvas;
pub mod finalize;
pub mod pipeline;
pub mod source;

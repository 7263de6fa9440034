use std::path::PathBuf;

/// Convenience result type used across the carousel engine.
pub type CarouselResult<T> = Result<T, CarouselError>;

/// Top-level error taxonomy for fatal failures.
///
/// Degraded-but-continue conditions (missing photo, font, logo) never surface here; they are
/// reported as [`AssetLoadError`] to the stage that loaded them.
#[derive(thiserror::Error, Debug)]
pub enum CarouselError {
    /// Invalid caller-provided arguments or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// A required asset could not be produced.
    #[error("asset error: {0}")]
    Asset(String),

    /// Errors while compositing or persisting a slide.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CarouselError {
    /// Build a [`CarouselError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CarouselError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`CarouselError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`CarouselError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

/// Failure to load an optional asset (source photo, font file, logo).
///
/// Callers decide the fallback; nothing here is fatal on its own.
#[derive(thiserror::Error, Debug)]
pub enum AssetLoadError {
    /// No file at the given path.
    #[error("asset '{}' does not exist", path.display())]
    Missing {
        /// Path that was probed.
        path: PathBuf,
    },

    /// The file exists but holds zero bytes.
    #[error("asset '{}' is empty", path.display())]
    Empty {
        /// Path that was probed.
        path: PathBuf,
    },

    /// The file could not be read.
    #[error("failed to read asset '{}': {source}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying IO failure.
        source: std::io::Error,
    },

    /// The bytes were read but could not be decoded.
    #[error("failed to decode asset '{}': {reason}", path.display())]
    Decode {
        /// Path whose bytes failed to decode.
        path: PathBuf,
        /// Decoder message.
        reason: String,
    },
}

impl AssetLoadError {
    /// Path of the asset that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Missing { path }
            | Self::Empty { path }
            | Self::Read { path, .. }
            | Self::Decode { path, .. } => path,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

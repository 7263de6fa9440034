use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{CarouselError, CarouselResult};

/// Literal that separates title from subtitle in the combined text argument.
pub const TITLE_SEPARATOR: &str = "~~~";

/// Which layout path a slide takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideRole {
    /// Opening slide: darkened photo, large centred headline, caption.
    Hook,
    /// Content slide: photo on top, divider, title and subtitle below.
    Reveal,
    /// Closing slide: sign-off lines and logo.
    Cta,
}

impl SlideRole {
    /// Lowercase name as accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            SlideRole::Hook => "hook",
            SlideRole::Reveal => "reveal",
            SlideRole::Cta => "cta",
        }
    }
}

impl fmt::Display for SlideRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlideRole {
    type Err = CarouselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hook" => Ok(SlideRole::Hook),
            "reveal" => Ok(SlideRole::Reveal),
            "cta" => Ok(SlideRole::Cta),
            other => Err(CarouselError::validation(format!(
                "unknown slide role '{other}' (expected hook, reveal or cta)"
            ))),
        }
    }
}

/// One slide to render. Immutable once parsed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideRequest {
    /// 1-based position in the carousel; keys input and output paths.
    pub slide_index: u32,
    /// Layout path.
    pub role: SlideRole,
    /// Headline text.
    pub title: String,
    /// Secondary text, possibly empty.
    pub subtitle: String,
}

impl SlideRequest {
    /// Build a request from an already split title/subtitle pair.
    pub fn new(
        slide_index: u32,
        role: SlideRole,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> CarouselResult<Self> {
        if slide_index == 0 {
            return Err(CarouselError::validation("slide index must be >= 1"));
        }
        Ok(Self {
            slide_index,
            role,
            title: title.into(),
            subtitle: subtitle.into(),
        })
    }

    /// Build a request from a combined `title~~~subtitle` string.
    pub fn from_combined(slide_index: u32, role: SlideRole, text: &str) -> CarouselResult<Self> {
        let (title, subtitle) = split_title_subtitle(text);
        Self::new(slide_index, role, title, subtitle)
    }
}

/// Split on the first [`TITLE_SEPARATOR`]; both halves are trimmed.
pub fn split_title_subtitle(text: &str) -> (String, String) {
    match text.split_once(TITLE_SEPARATOR) {
        Some((title, subtitle)) => (title.trim().to_string(), subtitle.trim().to_string()),
        None => (text.trim().to_string(), String::new()),
    }
}

/// Parse `index role text...` positional tokens.
///
/// Text tokens are rejoined with single spaces before the title/subtitle split.
pub fn parse_slide_args<S: AsRef<str>>(tokens: &[S]) -> CarouselResult<SlideRequest> {
    if tokens.len() < 3 {
        return Err(CarouselError::validation(format!(
            "expected <slide_index> <role> <text...>, got {} argument(s)",
            tokens.len()
        )));
    }

    let raw_index = tokens[0].as_ref();
    let slide_index: u32 = raw_index.trim().parse().map_err(|_| {
        CarouselError::validation(format!(
            "slide index must be a positive integer (got '{raw_index}')"
        ))
    })?;
    let role: SlideRole = tokens[1].as_ref().parse()?;
    let text = tokens[2..]
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ");

    SlideRequest::from_combined(slide_index, role, &text)
}

#[cfg(test)]
#[path = "../../tests/unit/slide/request.rs"]
mod tests;

use crate::{
    config::style::{HookLayout, RevealLayout, Typography},
    text::wrap::TextBlock,
};

/// Top of a block of `total_height` centred in `[zone_start, zone_end]`, truncated toward zero.
///
/// Blocks taller than the zone start above `zone_start`.
pub fn centered_start(zone_start: i32, zone_end: i32, total_height: f32) -> i32 {
    let available = (zone_end - zone_start) as f32;
    (zone_start as f32 + (available - total_height) / 2.0) as i32
}

/// Vertical placement of a reveal slide's title and subtitle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealPlacement {
    /// Top of the first title line.
    pub title_y: i32,
    /// Space between the title block's end and the subtitle's first line.
    pub gap: i32,
}

impl RevealPlacement {
    /// Centre title and subtitle as one block between the divider and the swipe indicator.
    ///
    /// The block height is computed from unrounded line heights; the gap shrinks as the
    /// subtitle grows.
    pub fn compute(
        title: &TextBlock,
        subtitle: &TextBlock,
        typography: &Typography,
        reveal: &RevealLayout,
    ) -> Self {
        let gap = reveal.subtitle_gaps.gap_for(subtitle.line_count());
        let ratio = typography.line_height_ratio;
        let total = title.line_count() as f32 * typography.title_size * ratio
            + gap as f32
            + subtitle.line_count() as f32 * typography.subtitle_size * ratio;

        let zone_start = reveal.divider_y + reveal.text_zone_top_margin;
        let zone_end = reveal.swipe_y - reveal.text_zone_bottom_margin;
        Self {
            title_y: centered_start(zone_start, zone_end, total),
            gap,
        }
    }
}

/// Middle of the first headline line on a hook slide.
pub fn hook_first_line_y(headline: &TextBlock, hook: &HookLayout) -> i32 {
    let zone_end = hook.caption_y - hook.caption_margin;
    centered_start(hook.zone_top, zone_end, headline.total_height as f32)
}

#[cfg(test)]
#[path = "../../tests/unit/text/layout.rs"]
mod tests;

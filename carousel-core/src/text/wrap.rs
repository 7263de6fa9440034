/// Width of a single line of text at a given size.
///
/// Implemented by the font-backed engine and by [`FixedAdvance`] for font-independent layout.
pub trait TextMeasure {
    /// Rendered width of `text` in pixels at `size_px`.
    fn text_width(&mut self, text: &str, size_px: f32) -> f32;
}

/// Every character advances by `ratio * size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvance {
    /// Advance per character as a fraction of the font size.
    pub ratio: f32,
}

impl FixedAdvance {
    /// Estimate used when no font could be loaded.
    pub const FALLBACK: Self = Self { ratio: 0.55 };
}

impl TextMeasure for FixedAdvance {
    fn text_width(&mut self, text: &str, size_px: f32) -> f32 {
        text.chars().count() as f32 * size_px * self.ratio
    }
}

/// Greedy word wrap at `max_width`, followed by a single orphan rebalance.
///
/// Words are never split; a word wider than `max_width` sits alone on its line.
/// Whitespace-only input yields no lines.
pub fn wrap_words(
    text: &str,
    size_px: f32,
    max_width: f32,
    measure: &mut dyn TextMeasure,
) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in text.split_whitespace() {
        let mut candidate = current.join(" ");
        if !candidate.is_empty() {
            candidate.push(' ');
        }
        candidate.push_str(word);

        if measure.text_width(&candidate, size_px) <= max_width {
            current.push(word);
        } else if current.is_empty() {
            lines.push(word.to_string());
        } else {
            lines.push(current.join(" "));
            current = vec![word];
        }
    }
    if !current.is_empty() {
        lines.push(current.join(" "));
    }

    rebalance_orphan(&mut lines);
    lines
}

/// If the last line is one word and the line before has more than two, move that line's
/// last word down. Applied once; the result is not re-measured.
pub fn rebalance_orphan(lines: &mut [String]) {
    let n = lines.len();
    if n < 2 || lines[n - 1].split_whitespace().count() != 1 {
        return;
    }
    let prev: Vec<&str> = lines[n - 2].split_whitespace().collect();
    if prev.len() <= 2 {
        return;
    }
    let (keep, moved) = prev.split_at(prev.len() - 1);
    let new_prev = keep.join(" ");
    let new_last = format!("{} {}", moved[0], lines[n - 1].trim());
    lines[n - 2] = new_prev;
    lines[n - 1] = new_last;
}

/// Wrapped lines plus the vertical metrics used to place them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextBlock {
    /// Wrapped lines, top to bottom.
    pub lines: Vec<String>,
    /// Advance between consecutive line tops.
    pub line_height: i32,
    /// `lines.len() * line_height`.
    pub total_height: i32,
}

impl TextBlock {
    /// Wrap `text` and attach metrics.
    pub fn wrap(
        text: &str,
        size_px: f32,
        max_width: f32,
        line_height: i32,
        measure: &mut dyn TextMeasure,
    ) -> Self {
        let lines = wrap_words(text, size_px, max_width, measure);
        let total_height = line_height.saturating_mul(lines.len() as i32);
        Self {
            lines,
            line_height,
            total_height,
        }
    }

    /// Number of wrapped lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// `floor(size * ratio)`, the advance between wrapped lines.
///
/// A small epsilon absorbs f32 representation error so that e.g. `40 * 1.3` floors to 52.
pub fn line_advance(size_px: f32, ratio: f32) -> i32 {
    (f64::from(size_px) * f64::from(ratio) + 1e-4).floor() as i32
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;

use super::*;

fn unit() -> FixedAdvance {
    // 1 px per character at size 1.
    FixedAdvance { ratio: 1.0 }
}

#[test]
fn short_text_is_a_single_identical_line() {
    let lines = wrap_words("Why do cats purr", 1.0, 100.0, &mut unit());
    assert_eq!(lines, vec!["Why do cats purr".to_string()]);
}

#[test]
fn wrapping_preserves_word_sequence() {
    let text = "Scientists still debate the exact mechanism behind the low rumble cats make";
    for width in [8.0, 12.0, 20.0, 33.0] {
        let lines = wrap_words(text, 1.0, width, &mut unit());
        let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined, original, "width {width}");
    }
}

#[test]
fn lines_fit_unless_single_long_word() {
    let lines = wrap_words("a bb extraordinarily cc", 1.0, 5.0, &mut unit());
    assert_eq!(lines, vec!["a bb", "extraordinarily", "cc"]);
}

#[test]
fn orphan_is_rebalanced_once() {
    // Greedy: ["one two three", "four"]; corrected: ["one two", "three four"].
    let lines = wrap_words("one two three four", 1.0, 13.0, &mut unit());
    assert_eq!(lines, vec!["one two", "three four"]);
}

#[test]
fn orphan_kept_when_previous_line_is_short() {
    // Greedy: ["alpha beta", "gamma"]; previous line has only two words.
    let lines = wrap_words("alpha beta gamma", 1.0, 10.0, &mut unit());
    assert_eq!(lines, vec!["alpha beta", "gamma"]);
}

#[test]
fn rebalance_moves_exactly_one_word() {
    let mut lines = vec!["a b c d".to_string(), "e".to_string()];
    rebalance_orphan(&mut lines);
    assert_eq!(lines, vec!["a b c", "d e"]);

    let mut single = vec!["only".to_string()];
    rebalance_orphan(&mut single);
    assert_eq!(single, vec!["only"]);
}

#[test]
fn empty_text_has_no_lines() {
    let block = TextBlock::wrap("   ", 40.0, 950.0, 52, &mut FixedAdvance::FALLBACK);
    assert_eq!(block.line_count(), 0);
    assert_eq!(block.total_height, 0);
}

#[test]
fn block_height_is_lines_times_advance() {
    let block = TextBlock::wrap("aa bb cc", 1.0, 5.0, line_advance(40.0, 1.3), &mut unit());
    assert_eq!(block.lines, vec!["aa bb", "cc"]);
    assert_eq!(block.line_height, 52);
    assert_eq!(block.total_height, 104);
}

#[test]
fn fallback_measure_is_proportional() {
    let mut m = FixedAdvance::FALLBACK;
    assert!((m.text_width("abcd", 100.0) - 220.0).abs() < 1e-3);
}

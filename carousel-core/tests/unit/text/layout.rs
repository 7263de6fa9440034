use super::*;

fn block(lines: usize, line_height: i32) -> TextBlock {
    TextBlock {
        lines: vec!["x".to_string(); lines],
        line_height,
        total_height: line_height * lines as i32,
    }
}

#[test]
fn centered_start_truncates_toward_zero() {
    assert_eq!(centered_start(0, 100, 50.0), 25);
    assert_eq!(centered_start(0, 100, 51.0), 24);
    assert_eq!(centered_start(875, 1280, 0.0), 1077);
}

#[test]
fn oversized_block_starts_above_zone() {
    assert!(centered_start(200, 300, 500.0) < 200);
}

#[test]
fn reveal_block_is_centred_with_step_gap() {
    let typo = Typography::default();
    let reveal = RevealLayout::default();

    // 2 title lines (2 * 84.5) + gap 35 + 3 subtitle lines (3 * 52) = 360 in a 405px zone.
    let p = RevealPlacement::compute(&block(2, 84), &block(3, 52), &typo, &reveal);
    assert_eq!(p.gap, 35);
    assert_eq!(p.title_y, 897);

    // Empty subtitle keeps the widest gap.
    let p = RevealPlacement::compute(&block(1, 84), &block(0, 52), &typo, &reveal);
    assert_eq!(p.gap, 50);
}

#[test]
fn more_subtitle_lines_move_title_up() {
    let typo = Typography::default();
    let reveal = RevealLayout::default();
    let short = RevealPlacement::compute(&block(1, 84), &block(1, 52), &typo, &reveal);
    let long = RevealPlacement::compute(&block(1, 84), &block(5, 52), &typo, &reveal);
    assert!(long.title_y < short.title_y);
}

#[test]
fn hook_headline_centres_between_top_and_caption() {
    let hook = HookLayout::default();
    // Zone [200, 1150]; 3 lines of 132 = 396.
    assert_eq!(hook_first_line_y(&block(3, 132), &hook), 477);
}

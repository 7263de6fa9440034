use super::*;

#[test]
fn parses_reveal_with_subtitle() {
    let req = parse_slide_args(&[
        "2",
        "reveal",
        "Why",
        "do",
        "cats",
        "purr~~~Scientists",
        "still",
        "debate",
    ])
    .unwrap();
    assert_eq!(req.slide_index, 2);
    assert_eq!(req.role, SlideRole::Reveal);
    assert_eq!(req.title, "Why do cats purr");
    assert_eq!(req.subtitle, "Scientists still debate");
}

#[test]
fn missing_separator_yields_empty_subtitle() {
    let req = parse_slide_args(&["1", "HOOK", "  The ocean is loud  "]).unwrap();
    assert_eq!(req.role, SlideRole::Hook);
    assert_eq!(req.title, "The ocean is loud");
    assert!(req.subtitle.is_empty());
}

#[test]
fn splits_only_on_first_separator() {
    let (title, subtitle) = split_title_subtitle("a ~~~ b ~~~ c");
    assert_eq!(title, "a");
    assert_eq!(subtitle, "b ~~~ c");
}

#[test]
fn rejects_malformed_arguments() {
    assert!(matches!(
        parse_slide_args(&["1", "reveal"]),
        Err(CarouselError::Validation(_))
    ));
    assert!(matches!(
        parse_slide_args(&["two", "reveal", "x"]),
        Err(CarouselError::Validation(_))
    ));
    assert!(matches!(
        parse_slide_args(&["-1", "reveal", "x"]),
        Err(CarouselError::Validation(_))
    ));
    assert!(matches!(
        parse_slide_args(&["0", "reveal", "x"]),
        Err(CarouselError::Validation(_))
    ));
    assert!(matches!(
        parse_slide_args(&["1", "outro", "x"]),
        Err(CarouselError::Validation(_))
    ));
}

#[test]
fn role_round_trips_through_display() {
    for role in [SlideRole::Hook, SlideRole::Reveal, SlideRole::Cta] {
        assert_eq!(role.to_string().parse::<SlideRole>().unwrap(), role);
    }
}

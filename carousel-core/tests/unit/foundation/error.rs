use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CarouselError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(CarouselError::asset("x").to_string().contains("asset error:"));
    assert!(
        CarouselError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        CarouselError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CarouselError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn asset_load_error_reports_path() {
    let err = AssetLoadError::Empty {
        path: PathBuf::from("inputs/slide_2.png"),
    };
    assert_eq!(err.path(), std::path::Path::new("inputs/slide_2.png"));
    assert!(err.to_string().contains("is empty"));

    let err = AssetLoadError::Decode {
        path: PathBuf::from("logo.png"),
        reason: "bad magic".to_string(),
    };
    assert!(err.to_string().contains("bad magic"));
}

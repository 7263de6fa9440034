use std::path::PathBuf;

use super::*;

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_assets_decode").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn missing_and_empty_files_are_distinguished() {
    let dir = scratch("missing_empty");
    let missing = dir.join("nope.png");
    let _ = std::fs::remove_file(&missing);
    assert!(matches!(
        load_source_photo(&missing),
        Err(AssetLoadError::Missing { .. })
    ));

    let empty = dir.join("empty.png");
    std::fs::write(&empty, b"").unwrap();
    assert!(matches!(
        load_source_photo(&empty),
        Err(AssetLoadError::Empty { .. })
    ));

    let junk = dir.join("junk.png");
    std::fs::write(&junk, b"not an image").unwrap();
    let err = load_source_photo(&junk).unwrap_err();
    assert!(matches!(err, AssetLoadError::Decode { .. }));
    assert_eq!(err.path(), junk.as_path());
}

#[test]
fn source_photo_decodes_png() {
    let dir = scratch("photo");
    let path = dir.join("slide_1.png");
    RgbaImage::from_pixel(4, 3, image::Rgba([10, 20, 30, 255]))
        .save(&path)
        .unwrap();
    let img = load_source_photo(&path).unwrap();
    assert_eq!(img.dimensions(), (4, 3));
    assert_eq!(img.get_pixel(3, 2).0, [10, 20, 30, 255]);
}

#[test]
fn raster_logo_is_scaled_to_height() {
    let dir = scratch("logo_png");
    let path = dir.join("logo.png");
    RgbaImage::from_pixel(300, 100, image::Rgba([255, 255, 255, 255]))
        .save(&path)
        .unwrap();
    let logo = load_logo(&path, 70).unwrap();
    assert_eq!((logo.width(), logo.height()), (210, 70));
}

#[test]
fn svg_logo_is_rasterized_to_height() {
    let dir = scratch("logo_svg");
    let path = dir.join("logo.svg");
    std::fs::write(
        &path,
        br##"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="20"><rect width="40" height="20" fill="#ffffff"/></svg>"##,
    )
    .unwrap();
    let logo = load_logo(&path, 70).unwrap();
    assert_eq!((logo.width(), logo.height()), (140, 70));
    assert_eq!(logo.pixel(70, 35), Some([255, 255, 255, 255]));

    let bad = dir.join("bad.svg");
    std::fs::write(&bad, b"<svg").unwrap();
    assert!(matches!(
        load_logo(&bad, 70),
        Err(AssetLoadError::Decode { .. })
    ));
}

#[test]
fn width_for_height_truncates() {
    assert_eq!(width_for_height(300, 100, 70), 210);
    assert_eq!(width_for_height(100, 300, 70), 23);
    assert_eq!(width_for_height(1, 1000, 70), 1);
}

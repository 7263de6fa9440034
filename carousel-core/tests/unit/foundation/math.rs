use super::*;

#[test]
fn fnv_hash_is_chunking_independent() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"carousel");
    let mut b = Fnv1a64::new_default();
    b.write_bytes(b"c");
    b.write_bytes(b"arousel");
    assert_eq!(a.finish(), b.finish());
    assert_ne!(a.finish(), Fnv1a64::OFFSET_BASIS);
}

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn normalized_distance_is_zero_at_center_and_clamped() {
    let (cx, cy) = radial_center(100, 50);
    assert_eq!((cx, cy), (50.0, 25.0));
    assert_eq!(normalized_distance(50, 25, cx, cy, 50.0), 0.0);
    assert!((normalized_distance(75, 25, cx, cy, 50.0) - 0.5).abs() < 1e-6);
    assert_eq!(normalized_distance(0, 0, cx, cy, 10.0), 1.0);
}

#[test]
fn half_diagonal_truncates() {
    assert_eq!(half_diagonal(3, 4), 2.0);
    assert_eq!(half_diagonal(1080, 1350), 864.0);
}

#[test]
fn premultiply_then_unpremultiply_keeps_opaque_pixels() {
    let mut px = vec![10u8, 20, 30, 255, 200, 100, 50, 0];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[..4], &[10, 20, 30, 255]);
    assert_eq!(&px[4..], &[0, 0, 0, 0]);
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[..4], &[10, 20, 30, 255]);
}

use super::*;

#[test]
fn float_hits_both_endpoints_exactly() {
    assert_eq!(f64::lerp(0.25, 0.75, 0.0), 0.25);
    assert_eq!(f64::lerp(0.25, 0.75, 1.0), 0.75);
    assert!((f64::lerp(0.0, 1.0, 0.3) - 0.3).abs() < 1e-12);
}

#[test]
fn size_components_truncate() {
    let a = IntSize::new(0, 0);
    let b = IntSize::new(100, 51);
    assert_eq!(IntSize::lerp(a, b, 0.5), IntSize::new(50, 25));
    assert_eq!(IntSize::lerp(a, b, 0.999), IntSize::new(99, 50));
}

#[test]
fn offset_truncates_toward_zero_for_negative_values() {
    let a = IntOffset::new(-100, 0);
    let b = IntOffset::new(0, 10);
    assert_eq!(IntOffset::lerp(a, b, 1.0 / 3.0), IntOffset::new(-66, 3));
}

#[test]
fn fraction_is_not_clamped() {
    assert!((f64::lerp(0.0, 1.0, 1.5) - 1.5).abs() < 1e-12);
}

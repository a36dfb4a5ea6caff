use super::*;

#[test]
fn normalize_guards_empty_span() {
    assert_eq!(normalize(0.5, 0.5, 0.5), 0.0);
    assert_eq!(normalize(0.6, 0.5, 0.5), 1.0);
    assert!((normalize(0.25, 0.0, 0.5) - 0.5).abs() < 1e-12);
}

#[test]
fn clamp01_maps_nan_to_zero() {
    assert_eq!(clamp01(f64::NAN), 0.0);
    assert_eq!(clamp01(-3.0), 0.0);
    assert_eq!(clamp01(3.0), 1.0);
}

#[test]
fn ratio_or_uses_fallback_for_zero_span() {
    assert_eq!(ratio_or(5.0, 0.0, 1.0), 1.0);
    assert_eq!(ratio_or(5.0, 10.0, 1.0), 0.5);
}

#[test]
fn rng_is_deterministic_and_bounded() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..32 {
        let v = a.range(1.0, 31.0);
        assert_eq!(v, b.range(1.0, 31.0));
        assert!((1.0..31.0).contains(&v));
    }
}

use super::*;

#[test]
fn defaults_are_valid() {
    TextFit::default().validate().unwrap();
}

#[test]
fn invalid_ratios_and_sizes_are_rejected() {
    let bad_ratio = TextFit {
        max_width_ratio: 1.5,
        ..TextFit::default()
    };
    assert!(bad_ratio.validate().is_err());
    let inverted = TextFit {
        font_size_px: 8.0,
        ..TextFit::default()
    };
    assert!(inverted.validate().is_err());
}

#[test]
fn fitting_block_stops_shrinking() {
    let fit = TextFit::default();
    assert_eq!(fit.next_size(80.0, (500.0, 80.0), (1000.0, 800.0)), None);
}

#[test]
fn wide_block_shrinks_proportionally() {
    let fit = TextFit::default();
    let next = fit.next_size(80.0, (1800.0, 80.0), (1000.0, 800.0)).unwrap();
    assert!((next - 40.0).abs() < 1e-3);
}

#[test]
fn shrink_respects_floor_and_zero_sized_blocks() {
    let fit = TextFit::default();
    let next = fit.next_size(20.0, (100_000.0, 20.0), (100.0, 100.0)).unwrap();
    assert_eq!(next, 12.0);
    assert_eq!(fit.next_size(12.0, (100_000.0, 20.0), (100.0, 100.0)), None);
    let tiny = fit.next_size(80.0, (0.0, 500.0), (100.0, 100.0)).unwrap();
    assert!(tiny.is_finite());
}

#[test]
fn unusable_font_bytes_are_an_asset_error() {
    let err = ParleyRasterizer::new(vec![0, 1, 2, 3], TextFit::default())
        .err()
        .unwrap();
    assert!(err.to_string().starts_with("asset error:"));
}

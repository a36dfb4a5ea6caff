use super::*;

fn bounds(offset: f64, height: f64) -> SectionBounds {
    SectionBounds {
        top: -offset,
        height,
    }
}

#[test]
fn sweep_is_monotonic_from_zero_to_one() {
    let s = ScrollSampler::new(10.0, DeadZonePlacement::Trailing);
    let mut prev = -1.0;
    for step in 0..=140 {
        let offset = f64::from(step) * 5.0;
        let p = s.sample(bounds(offset, 800.0), 100.0).raw_progress;
        assert!(p >= prev, "offset {offset}: {p} < {prev}");
        prev = p;
    }
    assert_eq!(prev, 1.0);
    assert_eq!(s.sample(bounds(0.0, 800.0), 100.0).raw_progress, 0.0);
}

#[test]
fn trailing_dead_zone_matches_direct_formula() {
    let s = ScrollSampler::new(10.0, DeadZonePlacement::Trailing);
    let sample = s.sample(bounds(345.0, 800.0), 100.0);
    assert_eq!(sample.total, 700.0);
    assert_eq!(sample.dead_zone_px, 10.0);
    assert_eq!(sample.travel, 690.0);
    assert_eq!(sample.scrolled, 345.0);
    assert!((sample.raw_progress - 0.5).abs() < 1e-12);
}

#[test]
fn leading_dead_zone_delays_progress() {
    let s = ScrollSampler::new(10.0, DeadZonePlacement::Leading);
    assert_eq!(s.sample(bounds(10.0, 800.0), 100.0).raw_progress, 0.0);
    let p = s.sample(bounds(345.0, 800.0), 100.0).raw_progress;
    assert!((p - 335.0 / 690.0).abs() < 1e-12);
    assert!((p - 0.4855).abs() < 1e-4);
    assert_eq!(s.sample(bounds(700.0, 800.0), 100.0).raw_progress, 1.0);
}

#[test]
fn zero_travel_resolves_to_zero() {
    let s = ScrollSampler::new(50.0, DeadZonePlacement::Trailing);
    let sample = s.sample(bounds(20.0, 100.0), 100.0);
    assert_eq!(sample.travel, 0.0);
    assert_eq!(sample.raw_progress, 0.0);
}

#[test]
fn section_below_viewport_clamps_to_zero() {
    let s = ScrollSampler::default();
    let b = SectionBounds {
        top: 400.0,
        height: 800.0,
    };
    assert_eq!(s.sample(b, 100.0).raw_progress, 0.0);
}

#[test]
fn write_target_only_touches_target() {
    let s = ScrollSampler::default();
    let mut state = ProgressState {
        target: 0.0,
        current: 0.25,
    };
    s.write_target(bounds(350.0, 800.0), 100.0, &mut state);
    assert!((state.target - 0.5).abs() < 1e-12);
    assert_eq!(state.current, 0.25);
}

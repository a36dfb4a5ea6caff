use super::*;

fn smoother(smoothing: f64, snap_at_bounds: bool) -> Smoother {
    Smoother::new(SmootherConfig {
        smoothing,
        epsilon: 1e-4,
        snap_at_bounds,
    })
    .unwrap()
}

#[test]
fn converges_to_exactly_one_without_overshoot() {
    let s = smoother(0.1, false);
    let mut state = ProgressState {
        target: 1.0,
        current: 0.0,
    };
    let mut frames = 0;
    while !Smoother::is_settled(&state) {
        let v = s.step(&mut state);
        assert!(v <= 1.0);
        frames += 1;
        assert!(frames < 200, "did not settle");
    }
    assert_eq!(state.current, 1.0);
}

#[test]
fn boundary_target_snaps_immediately() {
    let s = smoother(0.1, true);
    let mut state = ProgressState {
        target: 1.0,
        current: 0.3,
    };
    assert_eq!(s.step(&mut state), 1.0);

    state.target = 0.0;
    assert_eq!(s.step(&mut state), 0.0);
}

#[test]
fn mid_range_moves_by_fixed_fraction() {
    let s = smoother(0.25, true);
    let mut state = ProgressState {
        target: 0.6,
        current: 0.2,
    };
    let v = s.step(&mut state);
    assert!((v - 0.3).abs() < 1e-12);
}

#[test]
fn approach_is_monotonic_from_both_sides() {
    let s = smoother(0.3, true);
    let mut up = ProgressState {
        target: 0.7,
        current: 0.1,
    };
    let mut down = ProgressState {
        target: 0.2,
        current: 0.9,
    };
    let (mut prev_up, mut prev_down) = (up.current, down.current);
    for _ in 0..100 {
        let u = s.step(&mut up);
        let d = s.step(&mut down);
        assert!(u >= prev_up && u <= 0.7);
        assert!(d <= prev_down && d >= 0.2);
        prev_up = u;
        prev_down = d;
    }
    assert!(Smoother::is_settled(&up));
    assert!(Smoother::is_settled(&down));
}

#[test]
fn invalid_factors_are_rejected() {
    for smoothing in [0.0, -0.1, 1.5, f64::NAN] {
        let cfg = SmootherConfig {
            smoothing,
            ..SmootherConfig::default()
        };
        assert!(Smoother::new(cfg).is_err(), "{smoothing}");
    }
}

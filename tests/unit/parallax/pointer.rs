use super::*;

fn container() -> Rect {
    Rect::new(0.0, 0.0, 200.0, 100.0)
}

#[test]
fn pointer_normalizes_around_centre() {
    assert_eq!(normalized_pointer(Point::new(100.0, 50.0), container()), Vec2::ZERO);
    assert_eq!(
        normalized_pointer(Point::new(200.0, 0.0), container()),
        Vec2::new(1.0, -1.0)
    );
    assert_eq!(
        normalized_pointer(Point::new(900.0, 900.0), container()),
        Vec2::new(1.0, 1.0)
    );
}

#[test]
fn zero_size_container_is_neutral() {
    let empty = Rect::new(10.0, 10.0, 10.0, 10.0);
    assert_eq!(normalized_pointer(Point::new(50.0, 50.0), empty), Vec2::ZERO);
}

#[test]
fn leaving_resets_pointer_state() {
    let mut p = PointerState::default();
    p.moved(Point::new(3.0, 4.0));
    assert_eq!(p.position(), Some(Point::new(3.0, 4.0)));
    p.left();
    assert_eq!(p.position(), None);
    p.moved(Point::new(f64::NAN, 1.0));
    assert_eq!(p.position(), None);
}

#[test]
fn parallax_eases_toward_pointer_and_back() {
    let mut pp = PointerParallax::new(0.5).unwrap();
    pp.set_pointer(Point::new(200.0, 50.0), container());
    assert_eq!(pp.step(), Vec2::new(0.5, 0.0));
    assert_eq!(pp.offset(30.0), Vec2::new(15.0, 0.0));
    pp.leave();
    assert_eq!(pp.step(), Vec2::new(0.25, 0.0));
}

#[test]
fn oscillators_start_at_rest() {
    let s = OscillatorConfig::default().sample(0.0);
    assert_eq!(s.breathe_scale, 1.0);
    assert_eq!(s.drift_y, 0.0);
    assert_eq!(s.face_scale, 1.0);
    assert_eq!(s.dash_offset, Some(0.0));

    let later = OscillatorConfig::default().sample(1000.0);
    assert!((later.dash_offset.unwrap() - 108.0).abs() < 1e-9);
    assert!(later.breathe_scale <= 1.025 && later.breathe_scale >= 0.975);
}

#[test]
fn cursor_follower_eases_and_maps_parallax() {
    let mut f = CursorFollower::new(CursorFollowConfig::default()).unwrap();
    let p = f.sample(Point::new(100.0, 50.0));
    assert!((p.x - 20.0).abs() < 1e-12);
    assert!((p.y - 10.0).abs() < 1e-12);

    let vp = Viewport::new(40.0, 20.0);
    let bg = f.background_parallax(vp);
    assert!((bg.x - 0.0).abs() < 1e-12);
    assert!((bg.y - 0.0).abs() < 1e-12);

    let zero = Viewport::new(0.0, 0.0);
    assert_eq!(f.background_parallax(zero), Vec2::ZERO);
}

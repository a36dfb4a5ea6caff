use super::*;

fn in_view() -> SectionBounds {
    SectionBounds {
        top: 0.0,
        height: 900.0,
    }
}

fn track() -> WheelTrack {
    let mut t = WheelTrack::new(WheelTrackConfig::default()).unwrap();
    t.set_extent(2000.0, 1000.0);
    t
}

#[test]
fn wheel_down_scrolls_horizontally_at_speed() {
    let mut t = track();
    let out = t.on_wheel(100.0, in_view(), 900.0);
    assert_eq!(
        out,
        WheelOutcome::Consumed {
            scroll_left: 200.0,
            progress_pct: 20.0
        }
    );
}

#[test]
fn edges_release_the_wheel() {
    let mut t = track();
    assert_eq!(t.on_wheel(-50.0, in_view(), 900.0), WheelOutcome::Released);

    for _ in 0..10 {
        t.on_wheel(100.0, in_view(), 900.0);
    }
    assert_eq!(t.scroll_left(), 1000.0);
    assert_eq!(t.progress_pct(), 100.0);
    assert_eq!(t.on_wheel(10.0, in_view(), 900.0), WheelOutcome::Released);
    assert!(matches!(
        t.on_wheel(-10.0, in_view(), 900.0),
        WheelOutcome::Consumed { .. }
    ));
}

#[test]
fn out_of_view_container_is_ignored() {
    let mut t = track();
    let below = SectionBounds {
        top: 400.0,
        height: 900.0,
    };
    assert_eq!(t.on_wheel(100.0, below, 900.0), WheelOutcome::Released);
    assert_eq!(t.scroll_left(), 0.0);
}

#[test]
fn shrinking_extent_clamps_offset() {
    let mut t = track();
    t.on_wheel(400.0, in_view(), 900.0);
    t.set_extent(1200.0, 1000.0);
    assert_eq!(t.scroll_left(), 200.0);
}

#[test]
fn empty_track_reports_complete() {
    let t = WheelTrack::new(WheelTrackConfig::default()).unwrap();
    assert_eq!(t.progress_pct(), 100.0);
}

use super::*;

fn cfg() -> TypewriterConfig {
    TypewriterConfig::default()
}

#[test]
fn phases_on_non_last_header() {
    let c = cfg();
    assert_eq!(c.progression(0.0, 40, false), (HeaderPhase::Idle, 0));
    assert_eq!(c.progression(0.02, 40, false), (HeaderPhase::Idle, 0));
    let (phase, typed) = c.progression(0.24, 40, false);
    assert_eq!(phase, HeaderPhase::Typing);
    assert!(typed > 0 && typed < 40);
    assert_eq!(c.progression(0.46, 40, false), (HeaderPhase::Held, 40));
    assert_eq!(c.progression(0.60, 40, false), (HeaderPhase::Held, 40));
    let (phase, typed) = c.progression(0.83, 40, false);
    assert_eq!(phase, HeaderPhase::Deleting);
    assert!(typed > 0 && typed < 40);
    assert_eq!(c.progression(1.0, 40, false), (HeaderPhase::Deleting, 0));
}

#[test]
fn last_header_never_deletes() {
    let c = cfg();
    assert_eq!(c.progression(0.0, 40, true), (HeaderPhase::Idle, 0));
    assert_eq!(c.progression(0.46, 40, true), (HeaderPhase::Held, 40));
    assert_eq!(c.progression(1.0, 40, true), (HeaderPhase::Held, 40));
}

#[test]
fn counts_are_monotonic_within_phases() {
    let c = cfg();
    let counts: Vec<usize> = (0..=100)
        .map(|i| c.progression(i as f64 / 100.0, 57, false).1)
        .collect();
    let peak = counts.iter().position(|&n| n == 57).unwrap();
    assert!(counts[..=peak].windows(2).all(|w| w[0] <= w[1]));
    assert!(counts[peak..].windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn timings_are_sanitized() {
    let c = TypewriterConfig {
        type_in_start: 0.5,
        type_in_end: 0.5,
        delete_start: 0.1,
        ..cfg()
    };
    assert!(c.validate().is_err());
    let t = c.timings();
    assert_eq!(t.type_in_start, 0.5);
    assert!((t.type_in_end - 0.55).abs() < 1e-12);
    assert!((t.delete_start - 0.60).abs() < 1e-12);
}

#[test]
fn float_settles_by_span() {
    let c = cfg();
    assert_eq!(c.float_y(0.0), 36.0);
    assert_eq!(c.float_y(0.45), 0.0);
    assert_eq!(c.float_y(0.9), 0.0);
    let mid = c.float_y(0.2);
    assert!(mid > 0.0 && mid < 36.0);
}

fn track(n: usize) -> HeaderTrack {
    let headers = (0..n).map(|i| Header::new(format!("header number {i}"))).collect();
    HeaderTrack::new(cfg(), headers, 0).unwrap()
}

#[test]
fn index_selection_clamps() {
    let t = track(8);
    assert_eq!(t.select(0.0), (0, 0.12));
    assert_eq!(t.select(1.0).0, 7);
    assert_eq!(t.select(5.0).0, 7);
    assert_eq!(t.select(-3.0).0, 0);
}

#[test]
fn last_header_completes_near_end() {
    let t = track(8);
    let s = t.state(0.99);
    assert_eq!(s.header_index, 7);
    assert_eq!(s.typed_char_count, s.total_chars);
    assert_eq!(t.typed_text(&s), "header number 7");
    assert_eq!(s.opacity, 1.0);
}

#[test]
fn forced_completion_reports_held_phase() {
    let mut headers: Vec<_> = (0..7).map(|i| Header::new(format!("header {i}"))).collect();
    headers.push(Header::new("late closer").with_timing_offset(0.8));
    let t = HeaderTrack::new(cfg(), headers, 0).unwrap();
    // the offset keeps localT near zero, where the phase alone would still be idle
    let s = t.state(0.99);
    assert_eq!(s.header_index, 7);
    assert!(s.local_t < 0.02);
    assert_eq!(s.phase, HeaderPhase::Held);
    assert_eq!(s.typed_char_count, s.total_chars);
}

#[test]
fn timing_offset_delays_header() {
    let headers = vec![
        Header::new("first"),
        Header::new("second").with_timing_offset(0.5),
    ];
    let t = HeaderTrack::new(cfg(), headers, 0).unwrap();
    // progress landing at the start of slot 1 with raw localT ~0.3
    let p = (1.3 - 0.12) / (2.0 * 0.97);
    let s = t.state(p);
    assert_eq!(s.header_index, 1);
    assert_eq!(s.local_t, 0.0);
    assert_eq!(s.phase, HeaderPhase::Idle);
    assert_eq!(s.opacity, 0.0);
}

#[test]
fn missing_headers_render_empty() {
    let t = HeaderTrack::new(cfg(), vec![Header::new("only")], 4).unwrap();
    let s = t.state(0.5);
    assert_eq!(s.header_index, 2);
    assert_eq!(s.total_chars, 0);
    assert_eq!(t.typed_text(&s), "");
}

#[test]
fn prefix_respects_char_boundaries() {
    assert_eq!(char_prefix("Città", 4), "Citt");
    assert_eq!(char_prefix("Città", 5), "Città");
    assert_eq!(char_prefix("Città", 9), "Città");
    assert_eq!(char_prefix("", 3), "");
}

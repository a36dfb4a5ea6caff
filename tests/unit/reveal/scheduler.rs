use super::*;

fn scheduler() -> RevealScheduler {
    RevealScheduler::new(RevealConfig::default()).unwrap()
}

#[test]
fn delay_maps_onto_timeline() {
    let item = RevealConfig::default().item_from_delay(2600.0);
    assert!((item.scheduled_position - 0.26).abs() < 1e-12);
    assert!((item.enter_start() - 0.20).abs() < 1e-12);
    assert!((item.enter_end() - 0.34).abs() < 1e-12);
}

#[test]
fn negative_delay_is_already_shown_at_start() {
    let item = RevealConfig::default().item_from_delay(-450.0);
    // window [-0.105, 0.035]; progress 0 sits at 75% strength
    let s = scheduler().style(&item, 0.0);
    assert!(s.opacity > 0.8 && s.opacity < 1.0);
    assert_eq!(scheduler().style(&item, 0.05).opacity, 1.0);
}

#[test]
fn style_endpoints() {
    let sched = scheduler();
    let item = RevealConfig::default().item_from_delay(5000.0);
    let before = sched.style(&item, 0.1);
    assert_eq!(before.opacity, 0.0);
    assert_eq!(before.translate_y, 28.0);
    let after = sched.style(&item, 0.9);
    assert_eq!(after.opacity, 1.0);
    assert_eq!(after.translate_y, 0.0);
    let mid = sched.style(&item, 0.51);
    assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
}

#[test]
fn recomputation_is_idempotent_and_reversible() {
    let sched = scheduler();
    let item = RevealConfig::default().item_from_delay(3700.0);
    let forward: Vec<_> = (0..=100).map(|i| sched.style(&item, i as f64 / 100.0)).collect();
    let backward: Vec<_> = (0..=100)
        .rev()
        .map(|i| sched.style(&item, i as f64 / 100.0))
        .collect();
    let reversed: Vec<_> = backward.into_iter().rev().collect();
    assert_eq!(forward, reversed);
    assert_eq!(sched.style(&item, 0.4), sched.style(&item, 0.4));
}

#[test]
fn skip_animation_is_always_shown() {
    let mut item = RevealConfig::default().item_from_delay(9000.0);
    item.skip_animation = true;
    let s = scheduler().style(&item, 0.0);
    assert_eq!(s.opacity, 1.0);
    assert_eq!(s.translate_y, 0.0);
}

#[test]
fn zero_width_window_does_not_produce_nan() {
    let item = RevealItem {
        scheduled_position: 0.5,
        lead_in: 0.0,
        lead_out: 0.0,
        skip_animation: false,
    };
    let s = scheduler().style(&item, 0.5);
    assert!(s.opacity.is_finite());
    assert_eq!(scheduler().style(&item, 0.6).opacity, 1.0);
}

#[test]
fn culling_is_and_ed_with_timing() {
    let sched = scheduler();
    let item = RevealConfig::default().item_from_delay(0.0);
    let window = TrackWindow {
        scroll_offset: 1000.0,
        viewport_width: 1440.0,
    };
    assert!(sched.style_at(&item, 1.0, 900.0, window).visible);
    let culled = sched.style_at(&item, 1.0, 3000.0, window);
    assert!(!culled.visible);
    assert_eq!(culled.opacity, 0.0);
    let pending = sched.style_at(&item, -1.0, 1200.0, window);
    assert!(pending.visible);
    assert_eq!(pending.opacity, 0.0);
}

#[test]
fn lead_out_must_be_positive() {
    let cfg = RevealConfig {
        lead_out: 0.0,
        ..RevealConfig::default()
    };
    assert!(RevealScheduler::new(cfg).is_err());
}

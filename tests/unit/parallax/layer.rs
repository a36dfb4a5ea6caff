use super::*;

#[test]
fn faster_layers_move_further() {
    for p in [0.1, 0.5, 1.0] {
        let slow = layer_offset(p, 1000.0, 1.0);
        let fast = layer_offset(p, 1000.0, 1.6);
        assert!(fast.abs() > slow.abs());
        assert!(fast < 0.0);
    }
    assert_eq!(layer_offset(0.0, 1000.0, 1.6), 0.0);
}

#[test]
fn measured_track_shift_never_negative() {
    let vp = Viewport::new(1440.0, 900.0);
    let wide = TrackMetrics::measure(&TrackGeometry::Measured { track_width: 3440.0 }, vp);
    assert_eq!(wide.max_shift, 2000.0);
    let narrow = TrackMetrics::measure(&TrackGeometry::Measured { track_width: 800.0 }, vp);
    assert_eq!(narrow.max_shift, 0.0);
}

#[test]
fn cover_images_scale_to_fill_viewport() {
    let geom = TrackGeometry::CoverImages {
        image_width: 2048.0,
        image_height: 904.0,
        count: 8,
    };
    let vp = Viewport::new(1440.0, 904.0);
    let m = TrackMetrics::measure(&geom, vp);
    assert!((m.scale - 1.0).abs() < 1e-12);
    assert_eq!(m.tile_width, 2048.0);
    assert_eq!(m.track_width, 2048.0 * 8.0);
    assert_eq!(m.max_shift, 2048.0 * 8.0 - 1440.0);
    assert!((m.offset(0.5, 1.0) + m.max_shift / 2.0).abs() < 1e-9);
}

#[test]
fn cover_scale_uses_larger_ratio() {
    let geom = TrackGeometry::CoverImages {
        image_width: 1000.0,
        image_height: 500.0,
        count: 1,
    };
    let m = TrackMetrics::measure(&geom, Viewport::new(1500.0, 500.0));
    assert!((m.scale - 1.5).abs() < 1e-12);
    assert_eq!(m.max_shift, 0.0);
}

#[test]
fn zero_image_size_is_rejected() {
    let geom = TrackGeometry::CoverImages {
        image_width: 0.0,
        image_height: 904.0,
        count: 8,
    };
    assert!(geom.validate().is_err());
}

#[test]
fn viewport_plus_track_shifts_by_overhang() {
    let g = TrackGeometry::ViewportPlus { extra_px: 2000.0 };
    g.validate().unwrap();
    for w in [375.0, 1440.0, 2560.0] {
        let m = TrackMetrics::measure(&g, Viewport::new(w, 800.0));
        assert_eq!(m.max_shift, 2000.0);
    }
    assert!(TrackGeometry::ViewportPlus { extra_px: -1.0 }.validate().is_err());
}

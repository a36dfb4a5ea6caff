use super::*;

#[test]
fn missing_viewport_falls_back_to_default() {
    assert_eq!(Viewport::or_default(None), Viewport::default());
    let broken = Viewport::new(f64::NAN, 800.0);
    assert_eq!(Viewport::or_default(Some(broken)), Viewport::default());
}

#[test]
fn host_viewport_keeps_dimensions_and_sanitizes_dpr() {
    let v = Viewport::or_default(Some(Viewport::new(390.0, 844.0).with_dpr(0.0)));
    assert_eq!(v.width, 390.0);
    assert_eq!(v.height, 844.0);
    assert_eq!(v.device_pixel_ratio, 1.0);
    assert!(v.is_mobile(768.0));
}

#[test]
fn visible_ratio_tracks_overlap() {
    let b = SectionBounds {
        top: 500.0,
        height: 1000.0,
    };
    assert!((b.visible_ratio(1000.0) - 0.5).abs() < 1e-12);
    let offscreen = SectionBounds {
        top: 2000.0,
        height: 1000.0,
    };
    assert_eq!(offscreen.visible_ratio(1000.0), 0.0);
    assert_eq!(SectionBounds::default().visible_ratio(1000.0), 0.0);
}

#[test]
fn hex_colors_parse_short_long_and_alpha() {
    assert_eq!(Rgba8::from_hex("#06b6d4").unwrap(), Rgba8::rgb(6, 182, 212));
    assert_eq!(Rgba8::from_hex("#fff").unwrap(), Rgba8::rgb(255, 255, 255));
    let c = Rgba8::from_hex("#00000080").unwrap();
    assert_eq!(c.a, 0x80);
    assert!(Rgba8::from_hex("06b6d4").is_err());
    assert!(Rgba8::from_hex("#12345").is_err());
}

#[test]
fn color_serializes_as_hex_string() {
    let json = serde_json::to_string(&Rgba8::rgb(6, 182, 212)).unwrap();
    assert_eq!(json, "\"#06b6d4\"");
    let back: Rgba8 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Rgba8::rgb(6, 182, 212));
}

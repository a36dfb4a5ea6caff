use super::*;
use crate::foundation::core::Viewport;

#[test]
fn unpremultiply_restores_straight_alpha() {
    let mut px = [64, 32, 0, 128, 10, 20, 30, 255, 9, 9, 9, 0];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[..4], &[128, 64, 0, 128]);
    assert_eq!(&px[4..8], &[10, 20, 30, 255]);
    assert_eq!(&px[8..], &[9, 9, 9, 0]);
}

#[test]
fn finish_without_frame_is_an_error() {
    let mut t = PixmapTarget::default();
    assert!(t.finish().is_err());
}

#[test]
fn particle_is_painted_at_its_centre() {
    let mut t = PixmapTarget::default();
    t.begin_frame(BackingStore::for_viewport(Viewport::new(16.0, 16.0)));
    t.draw_particle(Point::new(8.0, 8.0), 4.0, Rgba8::rgb(255, 0, 0));
    let frame = t.finish().unwrap();
    assert_eq!((frame.width, frame.height), (16, 16));
    let at = |x: usize, y: usize| {
        let i = (y * 16 + x) * 4;
        [frame.data[i], frame.data[i + 1], frame.data[i + 2], frame.data[i + 3]]
    };
    assert_eq!(at(8, 8), [255, 0, 0, 255]);
    assert_eq!(at(0, 0), [0, 0, 0, 255]);
}

#[test]
fn dpr_scales_drawing() {
    let mut t = PixmapTarget::default();
    t.begin_frame(BackingStore::for_viewport(Viewport::new(8.0, 8.0).with_dpr(2.0)));
    t.draw_particle(Point::new(6.0, 6.0), 1.0, Rgba8::rgb(0, 255, 0));
    let frame = t.finish().unwrap();
    assert_eq!(frame.width, 16);
    let i = (12 * 16 + 12) * 4;
    assert_eq!(frame.data[i + 1], 255);
}

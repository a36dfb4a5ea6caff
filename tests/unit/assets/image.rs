use std::io::Cursor;

use super::*;

fn png_bytes(rgba: [u8; 4]) -> Vec<u8> {
    let img = ::image::RgbaImage::from_raw(1, 1, rgba.to_vec()).unwrap();
    let mut buf = Vec::new();
    ::image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), ::image::ImageFormat::Png)
        .unwrap();
    buf
}

fn temp_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("folio-motion-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn decode_keeps_straight_alpha() {
    let img = decode_image(&png_bytes([100, 50, 200, 128])).unwrap();
    assert_eq!((img.width, img.height), (1, 1));
    assert_eq!(img.rgba8.as_slice(), &[100, 50, 200, 128]);
}

#[test]
fn garbage_bytes_fail_to_decode() {
    assert!(decode_image(b"not an image").is_err());
}

#[test]
fn missing_primary_falls_back_to_poster() {
    let dir = temp_dir("poster");
    let poster = dir.join("poster.png");
    std::fs::write(&poster, png_bytes([1, 2, 3, 255])).unwrap();

    let loaded = load_image_or_fallback(&dir.join("missing.webp"), Some(&poster));
    assert_eq!(loaded.origin, ImageOrigin::Poster);
    assert_eq!(loaded.image.rgba8.as_slice(), &[1, 2, 3, 255]);
}

#[test]
fn primary_wins_when_present() {
    let dir = temp_dir("primary");
    let primary = dir.join("primary.png");
    std::fs::write(&primary, png_bytes([9, 9, 9, 255])).unwrap();
    let loaded = load_image_or_fallback(&primary, None);
    assert_eq!(loaded.origin, ImageOrigin::Primary);
}

#[test]
fn everything_missing_yields_placeholder() {
    let dir = temp_dir("none");
    let loaded = load_image_or_fallback(&dir.join("a.png"), Some(&dir.join("b.png")));
    assert_eq!(loaded.origin, ImageOrigin::Placeholder);
    assert_eq!(loaded.image, PreparedImage::placeholder());
}

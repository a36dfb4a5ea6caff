use super::*;
use crate::foundation::core::Point;
use crate::render::target::{RecordingTarget, RenderCommand};

const PORTRAIT: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="200">
  <g id="Far"><rect x="0" y="0" width="200" height="200" fill="#111111"/></g>
  <g id="Face-Main"><circle cx="120" cy="90" r="30" fill="#eeeeee"/></g>
  <g id="Silhouette"><rect x="80" y="100" width="60" height="90" fill="#888888"/></g>
  <g id="Details-Dotted"><path d="M10 10 L190 190" stroke="#ffffff" stroke-dasharray="4 4"/></g>
</svg>"##;

fn scene() -> TopographyScene {
    let svg = PreparedSvg::parse(PORTRAIT).unwrap();
    TopographyScene::new(
        TopographyConfig::default(),
        &svg,
        Some(Viewport::new(1000.0, 800.0)),
    )
    .unwrap()
}

#[test]
fn default_config_validates() {
    TopographyConfig::default().validate().unwrap();
    let bad = TopographyConfig {
        smoothing: 0.0,
        ..TopographyConfig::default()
    };
    assert!(bad.validate().is_err());
}

#[test]
fn only_present_groups_are_driven() {
    let s = scene();
    let ids: Vec<_> = s.group_ids().collect();
    assert_eq!(ids, vec!["Far", "Face-Main", "Silhouette", "Details-Dotted"]);
}

#[test]
fn pointer_at_right_edge_moves_groups_by_strength() {
    let mut s = scene();
    s.handle_event(&HostEvent::PointerMove { x: 1000.0, y: 400.0 });
    for _ in 0..400 {
        s.update(0.0);
    }
    let styles: HashMap<_, _> = s.styles().into_iter().collect();
    assert!((styles["Far"].translate.x - 5.0).abs() < 1e-6);
    assert!(styles["Far"].translate.y.abs() < 1e-6);
    assert!((styles["Face-Main"].translate.x - 25.0).abs() < 1e-6);
    assert!((styles["Silhouette"].translate.x - 30.0).abs() < 1e-6);
}

#[test]
fn leaving_eases_back_to_centre() {
    let mut s = scene();
    s.handle_event(&HostEvent::PointerMove { x: 0.0, y: 0.0 });
    s.update(0.0);
    let moved = s.styles()[0].1.translate;
    assert!(moved.x < 0.0 && moved.y < 0.0);

    s.handle_event(&HostEvent::PointerLeave);
    for _ in 0..400 {
        s.update(0.0);
    }
    assert!(s.styles()[0].1.translate.hypot() < 1e-6);
}

#[test]
fn silhouette_breathes_and_drifts_over_time() {
    let mut s = scene();
    s.update(1000.0);
    let osc = s.oscillators();
    let styles: HashMap<_, _> = s.styles().into_iter().collect();
    let sil = styles["Silhouette"];
    assert!((sil.translate.y - osc.drift_y).abs() < 1e-9);
    assert!((sil.scale - osc.breathe_scale).abs() < 1e-9);
    assert!((styles["Face-Main"].scale - osc.face_scale).abs() < 1e-9);
    assert_eq!(styles["Far"].scale, 1.0);
}

#[test]
fn dotted_group_receives_dash_offset() {
    let mut s = scene();
    s.update(1000.0);
    let mut rec = RecordingTarget::new();
    s.render(&mut rec);
    let dash = rec.commands().iter().find_map(|c| match c {
        RenderCommand::DashOffset { layer, offset } => Some((layer.clone(), *offset)),
        _ => None,
    });
    let (layer, offset) = dash.unwrap();
    assert_eq!(layer, "Details-Dotted");
    assert!((offset - 108.0).abs() < 1e-9);
}

#[test]
fn group_transforms_scale_about_group_origin() {
    let mut s = scene();
    s.update(1000.0);
    let transforms = s.group_transforms();
    let face = PreparedSvg::parse(PORTRAIT)
        .unwrap()
        .group("Face-Main")
        .unwrap();
    let origin = face.origin();
    let moved = transforms["Face-Main"] * origin;
    assert!((moved - origin).hypot() < 1e-9);
    let p = Point::new(3.0, 4.0);
    assert!((transforms["Far"] * p - p).hypot() < 1e-9);
}

#[test]
fn preview_render_uses_transforms() {
    let svg = PreparedSvg::parse(PORTRAIT).unwrap();
    let mut s = TopographyScene::new(TopographyConfig::default(), &svg, None).unwrap();
    s.update(500.0);
    let frame = svg.render(100, 100, &s.group_transforms()).unwrap();
    assert_eq!(frame.data.len(), 100 * 100 * 4);
}

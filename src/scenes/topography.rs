use std::collections::HashMap;

use crate::assets::svg::{PreparedSvg, SvgGroup};
use crate::engine::events::HostEvent;
use crate::engine::frame_loop::Scene;
use crate::foundation::core::{Affine, Rect, Vec2, Viewport};
use crate::foundation::error::{MotionError, MotionResult};
use crate::parallax::pointer::{OscillatorConfig, OscillatorSample, PointerParallax};
use crate::render::target::{BackingStore, LayerStyle, RenderTarget};

/// Pointer travel for one named group of the artwork.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GroupDepth {
    /// Element id in the SVG.
    pub id: String,
    /// Maximum translation in pixels at the container edge.
    pub strength: f64,
}

impl GroupDepth {
    /// Convenience constructor.
    pub fn new(id: impl Into<String>, strength: f64) -> Self {
        Self {
            id: id.into(),
            strength,
        }
    }
}

/// Layered line-art portrait with pointer depth parallax and slow oscillators.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TopographyConfig {
    /// Groups moved by the pointer, nearest last.
    pub groups: Vec<GroupDepth>,
    /// Per-frame pointer smoothing in `(0, 1]`.
    pub smoothing: f64,
    /// Breathing, drift and dash motion.
    pub oscillators: OscillatorConfig,
    /// Group that breathes and drifts vertically.
    pub breathe_group: Option<String>,
    /// Group receiving the face pulse.
    pub face_group: Option<String>,
    /// Group whose dashed strokes are animated.
    pub dotted_group: Option<String>,
}

impl Default for TopographyConfig {
    fn default() -> Self {
        let groups = [
            ("Very-Far", 2.0),
            ("Far", 5.0),
            ("Medium", 8.0),
            ("Near", 12.0),
            ("Face-Far", 15.0),
            ("Face-Medium", 20.0),
            ("Face-Main", 25.0),
            ("Silhouette-far", 17.0),
            ("Silhouette-Medium", 23.0),
            ("Silhouette", 30.0),
            ("Details-Dotted", 6.0),
            ("Last", 0.0),
        ]
        .into_iter()
        .map(|(id, s)| GroupDepth::new(id, s))
        .collect();

        Self {
            groups,
            smoothing: 0.12,
            oscillators: OscillatorConfig::default(),
            breathe_group: Some("Silhouette".to_owned()),
            face_group: Some("Face-Main".to_owned()),
            dotted_group: Some("Details-Dotted".to_owned()),
        }
    }
}

impl TopographyConfig {
    /// Validate strengths and oscillator values.
    pub fn validate(&self) -> MotionResult<()> {
        if !(self.smoothing.is_finite() && self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(MotionError::validation(
                "topography smoothing must be in (0, 1]",
            ));
        }
        if let Some(g) = self.groups.iter().find(|g| !g.strength.is_finite()) {
            return Err(MotionError::validation(format!(
                "group '{}' strength must be finite",
                g.id
            )));
        }
        let o = &self.oscillators;
        let values = [
            o.breathe_amp,
            o.breathe_speed,
            o.drift_amp,
            o.drift_speed,
            o.dash_speed,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(MotionError::validation("oscillator values must be finite"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
struct ResolvedGroup {
    group: SvgGroup,
    strength: f64,
    breathes: bool,
    pulses: bool,
}

/// Mounted topography portrait.
///
/// Groups missing from the artwork are dropped at mount and never touched afterwards.
#[derive(Debug)]
pub struct TopographyScene {
    groups: Vec<ResolvedGroup>,
    dotted_group: Option<String>,
    oscillators: OscillatorConfig,
    parallax: PointerParallax,
    viewport: Viewport,
    elapsed_ms: f64,
}

impl TopographyScene {
    /// Resolve the configured groups against `svg`.
    pub fn new(
        config: TopographyConfig,
        svg: &PreparedSvg,
        viewport: Option<Viewport>,
    ) -> MotionResult<Self> {
        config.validate()?;
        let resolved = svg.resolve_groups(config.groups.iter().map(|g| g.id.as_str()));
        let groups: Vec<ResolvedGroup> = resolved
            .into_iter()
            .filter_map(|group| {
                let strength = config.groups.iter().find(|g| g.id == group.id)?.strength;
                Some(ResolvedGroup {
                    breathes: config.breathe_group.as_deref() == Some(group.id.as_str()),
                    pulses: config.face_group.as_deref() == Some(group.id.as_str()),
                    group,
                    strength,
                })
            })
            .collect();
        let dotted_group = config
            .dotted_group
            .filter(|id| groups.iter().any(|g| &g.group.id == id));
        tracing::debug!(groups = groups.len(), "topography mounted");

        Ok(Self {
            groups,
            dotted_group,
            oscillators: config.oscillators,
            parallax: PointerParallax::new(config.smoothing)?,
            viewport: Viewport::or_default(viewport),
            elapsed_ms: 0.0,
        })
    }

    /// Ids of the groups found in the artwork.
    pub fn group_ids(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.group.id.as_str())
    }

    /// Time since mount.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Oscillator values at the current time.
    pub fn oscillators(&self) -> OscillatorSample {
        self.oscillators.sample(self.elapsed_ms)
    }

    /// Current style per resolved group.
    pub fn styles(&self) -> Vec<(&str, LayerStyle)> {
        let osc = self.oscillators();
        self.groups
            .iter()
            .map(|g| (g.group.id.as_str(), self.style_for(g, &osc)))
            .collect()
    }

    /// Document-space transforms about each group's own origin, for offline rendering.
    pub fn group_transforms(&self) -> HashMap<String, Affine> {
        let osc = self.oscillators();
        self.groups
            .iter()
            .map(|g| {
                let style = self.style_for(g, &osc);
                let origin = g.group.origin().to_vec2();
                let about = Affine::translate(origin)
                    * Affine::scale(style.scale)
                    * Affine::translate(-origin);
                (g.group.id.clone(), Affine::translate(style.translate) * about)
            })
            .collect()
    }

    fn style_for(&self, g: &ResolvedGroup, osc: &OscillatorSample) -> LayerStyle {
        let mut translate = self.parallax.offset(g.strength);
        let mut scale = 1.0;
        if g.breathes {
            translate += Vec2::new(0.0, osc.drift_y);
            scale = osc.breathe_scale;
        }
        if g.pulses {
            scale *= osc.face_scale;
        }
        LayerStyle::translate(translate).with_scale(scale)
    }

    fn container(&self) -> Rect {
        Rect::new(0.0, 0.0, self.viewport.width, self.viewport.height)
    }
}

impl Scene for TopographyScene {
    fn handle_event(&mut self, event: &HostEvent) {
        match *event {
            HostEvent::PointerMove { .. } => {
                if let Some(at) = event.pointer() {
                    let container = self.container();
                    self.parallax.set_pointer(at, container);
                }
            }
            HostEvent::PointerLeave => self.parallax.leave(),
            HostEvent::Resize { viewport, .. } => {
                self.viewport = Viewport::or_default(Some(viewport));
            }
            HostEvent::Scroll { .. } | HostEvent::Visibility { .. } => {}
        }
    }

    fn update(&mut self, dt_ms: f64) {
        self.elapsed_ms += dt_ms;
        self.parallax.step();
    }

    fn render(&self, target: &mut dyn RenderTarget) {
        for (id, style) in self.styles() {
            target.apply_transform(id, style);
        }
        if let (Some(id), Some(offset)) = (&self.dotted_group, self.oscillators().dash_offset) {
            target.set_dash_offset(id, offset);
        }
    }

    fn backing_store(&self) -> BackingStore {
        BackingStore::for_viewport(self.viewport)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/topography.rs"]
mod tests;

use crate::foundation::core::{Point, Rgba8, Vec2, Viewport};

/// Transform and opacity applied to one named visual layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerStyle {
    /// Translation in CSS pixels.
    pub translate: Vec2,
    /// Uniform scale around the layer's transform origin.
    pub scale: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

impl LayerStyle {
    /// Pure horizontal translation.
    pub fn translate_x(x: f64) -> Self {
        Self {
            translate: Vec2::new(x, 0.0),
            ..Self::default()
        }
    }

    /// Pure translation.
    pub fn translate(offset: Vec2) -> Self {
        Self {
            translate: offset,
            ..Self::default()
        }
    }

    /// Return `self` with a different opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Return `self` with a different scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
}

/// Canvas backing-store dimensions in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BackingStore {
    /// Device-pixel width.
    pub width_px: u32,
    /// Device-pixel height.
    pub height_px: u32,
    /// Device pixels per CSS pixel.
    pub scale: f64,
}

impl BackingStore {
    /// Backing store covering `viewport` at its device pixel ratio.
    pub fn for_viewport(viewport: Viewport) -> Self {
        let dpr = viewport.device_pixel_ratio;
        let px = |css: f64| -> u32 {
            let v = (css.max(0.0) * dpr).round();
            if v.is_finite() { v.min(u32::MAX as f64) as u32 } else { 0 }
        };
        Self {
            width_px: px(viewport.width),
            height_px: px(viewport.height),
            scale: dpr,
        }
    }
}

/// Sink for the per-frame outputs of a scene.
///
/// DOM hosts map `apply_transform` onto element styles; canvas hosts implement `draw_particle`.
/// Implementations ignore calls they have no surface for.
pub trait RenderTarget {
    /// Start a frame; canvas targets clear and resize here.
    fn begin_frame(&mut self, store: BackingStore);

    /// Set the transform of a named layer.
    fn apply_transform(&mut self, layer: &str, style: LayerStyle);

    /// Replace the text content of a named layer.
    fn set_text(&mut self, layer: &str, text: &str);

    /// Fill one particle disc, in CSS pixels.
    fn draw_particle(&mut self, center: Point, radius: f64, color: Rgba8);

    /// Shift the stroke dash pattern of every path in a named layer.
    fn set_dash_offset(&mut self, _layer: &str, _offset: f64) {}

    /// Finish a frame.
    fn end_frame(&mut self) {}
}

/// One recorded render call.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RenderCommand {
    /// [`RenderTarget::begin_frame`].
    BeginFrame {
        /// Backing store for the frame.
        store: BackingStore,
    },
    /// [`RenderTarget::apply_transform`].
    Transform {
        /// Layer id.
        layer: String,
        /// Applied style.
        style: LayerStyle,
    },
    /// [`RenderTarget::set_text`].
    Text {
        /// Layer id.
        layer: String,
        /// New content.
        text: String,
    },
    /// [`RenderTarget::draw_particle`].
    Particle {
        /// Centre in CSS pixels.
        center: Point,
        /// Radius in CSS pixels.
        radius: f64,
        /// Fill color.
        color: Rgba8,
    },
    /// [`RenderTarget::set_dash_offset`].
    DashOffset {
        /// Layer id.
        layer: String,
        /// Dash offset in user units.
        offset: f64,
    },
    /// [`RenderTarget::end_frame`].
    EndFrame,
}

/// Target that stores every call, for tests and frame traces.
#[derive(Clone, Debug, Default)]
pub struct RecordingTarget {
    commands: Vec<RenderCommand>,
    frames: usize,
}

impl RecordingTarget {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Number of frames begun.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Drain the recorded commands.
    pub fn take(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Most recent style applied to `layer`, if any.
    pub fn last_style(&self, layer: &str) -> Option<LayerStyle> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::Transform { layer: l, style } if l == layer => Some(*style),
            _ => None,
        })
    }

    /// Most recent text set on `layer`, if any.
    pub fn last_text(&self, layer: &str) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::Text { layer: l, text } if l == layer => Some(text.as_str()),
            _ => None,
        })
    }

    /// Particles drawn since the most recent `begin_frame`.
    pub fn particles_in_last_frame(&self) -> usize {
        self.commands
            .iter()
            .rev()
            .take_while(|c| !matches!(c, RenderCommand::BeginFrame { .. }))
            .filter(|c| matches!(c, RenderCommand::Particle { .. }))
            .count()
    }
}

impl RenderTarget for RecordingTarget {
    fn begin_frame(&mut self, store: BackingStore) {
        self.frames += 1;
        self.commands.push(RenderCommand::BeginFrame { store });
    }

    fn apply_transform(&mut self, layer: &str, style: LayerStyle) {
        self.commands.push(RenderCommand::Transform {
            layer: layer.to_owned(),
            style,
        });
    }

    fn set_text(&mut self, layer: &str, text: &str) {
        self.commands.push(RenderCommand::Text {
            layer: layer.to_owned(),
            text: text.to_owned(),
        });
    }

    fn draw_particle(&mut self, center: Point, radius: f64, color: Rgba8) {
        self.commands.push(RenderCommand::Particle {
            center,
            radius,
            color,
        });
    }

    fn set_dash_offset(&mut self, layer: &str, offset: f64) {
        self.commands.push(RenderCommand::DashOffset {
            layer: layer.to_owned(),
            offset,
        });
    }

    fn end_frame(&mut self) {
        self.commands.push(RenderCommand::EndFrame);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/target.rs"]
mod tests;

use std::path::Path;

use crate::foundation::error::{MotionError, MotionResult};
use crate::particles::mask::AlphaMask;

/// Shrink-to-fit rules for rendering a phrase into its container.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TextFit {
    /// Preferred font size in CSS pixels.
    pub font_size_px: f32,
    /// Smallest size the fit loop may shrink to.
    pub min_font_size_px: f32,
    /// Maximum text block width as a fraction of the container width.
    pub max_width_ratio: f32,
    /// Maximum text block height as a fraction of the container height.
    pub max_height_ratio: f32,
    /// Break lines at the maximum width instead of only shrinking.
    pub wrap: bool,
}

impl Default for TextFit {
    fn default() -> Self {
        Self {
            font_size_px: 80.0,
            min_font_size_px: 12.0,
            max_width_ratio: 0.9,
            max_height_ratio: 0.6,
            wrap: true,
        }
    }
}

impl TextFit {
    /// Check size and ratio ranges.
    pub fn validate(&self) -> MotionResult<()> {
        if !(self.min_font_size_px.is_finite()
            && self.min_font_size_px > 0.0
            && self.font_size_px.is_finite()
            && self.font_size_px >= self.min_font_size_px)
        {
            return Err(MotionError::validation(
                "text fit requires 0 < min_font_size_px <= font_size_px",
            ));
        }
        for (name, r) in [
            ("max_width_ratio", self.max_width_ratio),
            ("max_height_ratio", self.max_height_ratio),
        ] {
            if !(r.is_finite() && r > 0.0 && r <= 1.0) {
                return Err(MotionError::validation(format!(
                    "text fit {name} must be in (0, 1] (got {r})"
                )));
            }
        }
        Ok(())
    }

    /// Next font size given the measured block, or `None` once it fits or hits the floor.
    pub fn next_size(&self, size: f32, block: (f32, f32), container: (f32, f32)) -> Option<f32> {
        let max_w = container.0 * self.max_width_ratio;
        let max_h = container.1 * self.max_height_ratio;
        if (block.0 <= max_w && block.1 <= max_h) || size <= self.min_font_size_px {
            return None;
        }
        let ratio = (max_w / block.0.max(1.0))
            .min(max_h / block.1.max(1.0))
            .min(0.95);
        Some((size * ratio).max(self.min_font_size_px))
    }
}

/// Renders a phrase into a container-sized coverage mask.
pub trait TextRasterizer {
    /// Rasterize `text` centred in a `width` x `height` CSS-pixel container.
    fn rasterize(&mut self, text: &str, width: u32, height: u32) -> MotionResult<AlphaMask>;
}

const MAX_FIT_PASSES: usize = 8;

/// `parley` shaping with `vello_cpu` glyph rasterization.
pub struct ParleyRasterizer {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    family_name: String,
    font: vello_cpu::peniko::FontData,
    fit: TextFit,
}

impl ParleyRasterizer {
    /// Register `font_bytes` and prepare contexts.
    pub fn new(font_bytes: Vec<u8>, fit: TextFit) -> MotionResult<Self> {
        fit.validate()?;
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| MotionError::asset("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| MotionError::asset("registered font family has no name"))?
            .to_string();
        let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);
        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font,
            fit,
        })
    }

    /// Read a font file from disk.
    pub fn from_file(path: impl AsRef<Path>, fit: TextFit) -> MotionResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            MotionError::asset(format!("failed to read font '{}': {e}", path.display()))
        })?;
        Self::new(bytes, fit)
    }

    fn layout(
        &mut self,
        text: &str,
        size_px: f32,
        max_width: Option<f32>,
        container_w: f32,
    ) -> parley::Layout<()> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(max_width);
        layout.align(
            Some(container_w),
            parley::Alignment::Center,
            parley::AlignmentOptions::default(),
        );
        layout
    }
}

impl TextRasterizer for ParleyRasterizer {
    #[tracing::instrument(level = "debug", skip(self), fields(chars = text.chars().count()))]
    fn rasterize(&mut self, text: &str, width: u32, height: u32) -> MotionResult<AlphaMask> {
        if width == 0 || height == 0 || text.trim().is_empty() {
            return Ok(AlphaMask::empty(width, height));
        }
        let w16: u16 = width
            .try_into()
            .map_err(|_| MotionError::render("text mask width exceeds u16"))?;
        let h16: u16 = height
            .try_into()
            .map_err(|_| MotionError::render("text mask height exceeds u16"))?;

        let container = (width as f32, height as f32);
        let max_width = self.fit.wrap.then_some(container.0 * self.fit.max_width_ratio);
        let mut size = self.fit.font_size_px;
        let mut layout = self.layout(text, size, max_width, container.0);
        for _ in 0..MAX_FIT_PASSES {
            let Some(next) = self
                .fit
                .next_size(size, (layout.width(), layout.height()), container)
            else {
                break;
            };
            size = next;
            layout = self.layout(text, size, max_width, container.0);
        }
        tracing::debug!(size_px = size, "text fitted");

        let mut ctx = vello_cpu::RenderContext::new(w16, h16);
        let y_off = ((container.1 - layout.height()) / 2.0) as f64;
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((0.0, y_off)));
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&self.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w16, h16);
        ctx.render_to_pixmap(&mut pixmap);
        AlphaMask::from_rgba8(width, height, pixmap.data_as_u8_slice())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/particles/text_raster.rs"]
mod tests;

use vello_cpu::kurbo::Shape;

use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::{MotionError, MotionResult};
use crate::render::target::{BackingStore, LayerStyle, RenderTarget};

/// Straight-alpha RGBA8 frame ready for PNG encoding.
#[derive(Clone, Debug)]
pub struct FrameRgba8 {
    /// Width in device pixels.
    pub width: u32,
    /// Height in device pixels.
    pub height: u32,
    /// Row-major RGBA8 bytes, not premultiplied.
    pub data: Vec<u8>,
}

/// CPU canvas for particle frames, backed by `vello_cpu`.
///
/// Layer transforms and text are DOM concerns and are ignored here.
pub struct PixmapTarget {
    ctx: Option<vello_cpu::RenderContext>,
    store: Option<BackingStore>,
    background: Rgba8,
}

impl Default for PixmapTarget {
    fn default() -> Self {
        Self::new(Rgba8 {
            r: 0,
            g: 0,
            b: 0,
            a: 255,
        })
    }
}

impl PixmapTarget {
    /// Target that clears to `background` at the start of each frame.
    pub fn new(background: Rgba8) -> Self {
        Self {
            ctx: None,
            store: None,
            background,
        }
    }

    /// Rasterize everything drawn since the last `begin_frame`.
    pub fn finish(&mut self) -> MotionResult<FrameRgba8> {
        let (Some(ctx), Some(store)) = (self.ctx.as_mut(), self.store) else {
            return Err(MotionError::render("no frame has been started"));
        };
        let (w, h) = dims_u16(store)?;
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        let mut data = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut data);
        Ok(FrameRgba8 {
            width: store.width_px,
            height: store.height_px,
            data,
        })
    }
}

impl RenderTarget for PixmapTarget {
    fn begin_frame(&mut self, store: BackingStore) {
        let Ok((w, h)) = dims_u16(store) else {
            tracing::warn!(
                width = store.width_px,
                height = store.height_px,
                "backing store exceeds pixmap limits; frame skipped"
            );
            self.ctx = None;
            self.store = None;
            return;
        };
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == w && ctx.height() == h => ctx,
            _ => vello_cpu::RenderContext::new(w, h),
        };
        ctx.reset();
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        let bg = self.background;
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w as f64, h as f64));
        ctx.set_transform(vello_cpu::kurbo::Affine::scale(store.scale));
        self.ctx = Some(ctx);
        self.store = Some(store);
    }

    fn apply_transform(&mut self, _layer: &str, _style: LayerStyle) {}

    fn set_text(&mut self, _layer: &str, _text: &str) {}

    fn draw_particle(&mut self, center: Point, radius: f64, color: Rgba8) {
        let Some(ctx) = self.ctx.as_mut() else {
            return;
        };
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        let circle =
            vello_cpu::kurbo::Circle::new(vello_cpu::kurbo::Point::new(center.x, center.y), radius);
        let mut path = vello_cpu::kurbo::BezPath::new();
        for el in circle.path_elements(0.1) {
            path.push(el);
        }
        ctx.fill_path(&path);
    }
}

fn dims_u16(store: BackingStore) -> MotionResult<(u16, u16)> {
    let w: u16 = store
        .width_px
        .try_into()
        .map_err(|_| MotionError::render("pixmap width exceeds u16"))?;
    let h: u16 = store
        .height_px
        .try_into()
        .map_err(|_| MotionError::render("pixmap height exceeds u16"))?;
    if w == 0 || h == 0 {
        return Err(MotionError::render("pixmap must be non-empty"));
    }
    Ok((w, h))
}

/// Convert premultiplied RGBA8 to straight alpha.
pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;

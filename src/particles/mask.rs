use crate::foundation::core::Point;
use crate::foundation::error::{MotionError, MotionResult};

/// Single-channel coverage buffer produced by rasterizing text offscreen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    alpha: Vec<u8>,
}

impl AlphaMask {
    /// Fully transparent mask.
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            alpha: vec![0; (width as usize) * (height as usize)],
        }
    }

    /// Wrap row-major alpha bytes.
    pub fn from_alpha(width: u32, height: u32, alpha: Vec<u8>) -> MotionResult<Self> {
        if alpha.len() != (width as usize) * (height as usize) {
            return Err(MotionError::render(format!(
                "alpha mask length {} does not match {width}x{height}",
                alpha.len()
            )));
        }
        Ok(Self {
            width,
            height,
            alpha,
        })
    }

    /// Extract the alpha channel of RGBA8 pixels.
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> MotionResult<Self> {
        let alpha = rgba.chunks_exact(4).map(|px| px[3]).collect();
        Self::from_alpha(width, height, alpha)
    }

    /// Mask width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Alpha at `(x, y)`; out-of-bounds reads are transparent.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.alpha[(y as usize) * (self.width as usize) + x as usize]
    }

    /// Set a solid rectangle, clipped to the mask.
    pub fn fill_rect(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, alpha: u8) {
        for y in y0.min(self.height)..y1.min(self.height) {
            let row = (y as usize) * (self.width as usize);
            for x in x0.min(self.width)..x1.min(self.width) {
                self.alpha[row + x as usize] = alpha;
            }
        }
    }

    /// Grid sample in row-major scan order: every `spacing` pixels, keep points whose alpha
    /// exceeds `threshold`.
    pub fn sample_targets(&self, spacing: u32, threshold: u8) -> Vec<Point> {
        let step = spacing.max(1) as usize;
        let mut out = Vec::new();
        for y in (0..self.height).step_by(step) {
            for x in (0..self.width).step_by(step) {
                if self.alpha_at(x, y) > threshold {
                    out.push(Point::new(x as f64, y as f64));
                }
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/particles/mask.rs"]
mod tests;

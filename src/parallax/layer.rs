use crate::foundation::core::Viewport;
use crate::foundation::error::{MotionError, MotionResult};

/// A visual layer translated by scroll progress.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerConfig {
    /// Render-target layer id.
    pub id: String,
    /// Speed multiplier. Values above 1 overshoot the baseline to read as foreground.
    pub parallax_factor: f64,
}

impl LayerConfig {
    /// Convenience constructor.
    pub fn new(id: impl Into<String>, parallax_factor: f64) -> Self {
        Self {
            id: id.into(),
            parallax_factor,
        }
    }
}

/// Horizontal offset of a layer: `-progress * max_shift * factor`.
///
/// No clamping beyond `progress` already being in `[0, 1]`.
pub fn layer_offset(progress: f64, max_shift: f64, parallax_factor: f64) -> f64 {
    -progress * max_shift * parallax_factor
}

/// How the width of the scrolled track is obtained.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrackGeometry {
    /// Track width measured from the host layout.
    Measured {
        /// Rendered track width in CSS pixels.
        track_width: f64,
    },
    /// Track as wide as the viewport plus a fixed overhang.
    ViewportPlus {
        /// Extra width beyond the viewport in CSS pixels.
        extra_px: f64,
    },
    /// A row of background images, each scaled to cover the viewport.
    CoverImages {
        /// Intrinsic image width.
        image_width: f64,
        /// Intrinsic image height.
        image_height: f64,
        /// Number of images laid side by side.
        count: usize,
    },
}

impl TrackGeometry {
    /// Reject non-positive intrinsic sizes.
    pub fn validate(&self) -> MotionResult<()> {
        match *self {
            Self::Measured { track_width } => {
                if !(track_width.is_finite() && track_width >= 0.0) {
                    return Err(MotionError::validation("track_width must be >= 0"));
                }
            }
            Self::ViewportPlus { extra_px } => {
                if !(extra_px.is_finite() && extra_px >= 0.0) {
                    return Err(MotionError::validation("track extra_px must be >= 0"));
                }
            }
            Self::CoverImages {
                image_width,
                image_height,
                ..
            } => {
                if !(image_width > 0.0 && image_height > 0.0) {
                    return Err(MotionError::validation(
                        "cover image dimensions must be > 0",
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Geometry derived once per resize, consumed every frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrackMetrics {
    /// Image-pixel to CSS-pixel scale (1 for measured tracks).
    pub scale: f64,
    /// Width of one rendered image (whole track for measured tracks).
    pub tile_width: f64,
    /// Full track width.
    pub track_width: f64,
    /// `max(0, track_width - viewport width)`.
    pub max_shift: f64,
}

impl TrackMetrics {
    /// Measure a track against the current viewport.
    pub fn measure(geometry: &TrackGeometry, viewport: Viewport) -> Self {
        match *geometry {
            TrackGeometry::Measured { track_width } => Self {
                scale: 1.0,
                tile_width: track_width,
                track_width,
                max_shift: (track_width - viewport.width).max(0.0),
            },
            TrackGeometry::ViewportPlus { extra_px } => {
                let track_width = viewport.width + extra_px;
                Self {
                    scale: 1.0,
                    tile_width: track_width,
                    track_width,
                    max_shift: (track_width - viewport.width).max(0.0),
                }
            }
            TrackGeometry::CoverImages {
                image_width,
                image_height,
                count,
            } => {
                let vh = if viewport.height > 0.0 {
                    viewport.height
                } else {
                    1.0
                };
                let scale = (viewport.width / image_width).max(vh / image_height);
                let tile_width = image_width * scale;
                let track_width = tile_width * count.max(1) as f64;
                Self {
                    scale,
                    tile_width,
                    track_width,
                    max_shift: (track_width - viewport.width).max(0.0),
                }
            }
        }
    }

    /// Offset of a layer at `progress`.
    pub fn offset(&self, progress: f64, parallax_factor: f64) -> f64 {
        layer_offset(progress, self.max_shift, parallax_factor)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parallax/layer.rs"]
mod tests;

use crate::foundation::error::{MotionError, MotionResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Host viewport in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: f64,
    /// Height in CSS pixels.
    pub height: f64,
    /// Backing-store pixels per CSS pixel.
    #[serde(default = "default_dpr")]
    pub device_pixel_ratio: f64,
}

fn default_dpr() -> f64 {
    1.0
}

impl Default for Viewport {
    /// Fallback used when no host viewport exists (server-side passes).
    fn default() -> Self {
        Self {
            width: 1440.0,
            height: 900.0,
            device_pixel_ratio: 1.0,
        }
    }
}

impl Viewport {
    /// Create a viewport with a device pixel ratio of 1.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio: 1.0,
        }
    }

    /// Return `self` with a different device pixel ratio.
    pub fn with_dpr(mut self, dpr: f64) -> Self {
        self.device_pixel_ratio = dpr;
        self
    }

    /// Resolve an optional host viewport, falling back to [`Viewport::default`].
    ///
    /// Non-finite or non-positive dimensions are treated as "no viewport".
    pub fn or_default(host: Option<Viewport>) -> Self {
        match host {
            Some(v) if v.width.is_finite() && v.height.is_finite() && v.width > 0.0 => Self {
                height: if v.height > 0.0 { v.height } else { 1.0 },
                device_pixel_ratio: if v.device_pixel_ratio.is_finite()
                    && v.device_pixel_ratio > 0.0
                {
                    v.device_pixel_ratio
                } else {
                    1.0
                },
                ..v
            },
            _ => Self::default(),
        }
    }

    /// `true` when the width falls below the mobile breakpoint.
    pub fn is_mobile(self, breakpoint: f64) -> bool {
        self.width < breakpoint
    }

    /// Convert view-height units to CSS pixels.
    pub fn vh_to_px(self, vh: f64) -> f64 {
        vh / 100.0 * self.height
    }

    /// Convert view-width units to CSS pixels.
    pub fn vw_to_px(self, vw: f64) -> f64 {
        vw / 100.0 * self.width
    }
}

/// Bounding box of an observed section, relative to the viewport top.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionBounds {
    /// Distance from the viewport top to the section top (negative once scrolled past).
    pub top: f64,
    /// Full section height in CSS pixels.
    pub height: f64,
}

impl SectionBounds {
    /// Section bottom edge relative to the viewport top.
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Fraction of the section currently inside a viewport of `viewport_height`.
    pub fn visible_ratio(self, viewport_height: f64) -> f64 {
        if self.height <= 0.0 {
            return 0.0;
        }
        let visible = self.bottom().min(viewport_height) - self.top.max(0.0);
        (visible / self.height).clamp(0.0, 1.0)
    }
}

/// Straight-alpha RGBA8 color, serialized as `#rrggbb` / `#rrggbbaa`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rgb`, `#rrggbb`, or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> MotionResult<Self> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| MotionError::validation(format!("color '{s}' must start with '#'")))?;
        let expanded: String = if hex.len() == 3 {
            hex.chars().flat_map(|c| [c, c]).collect()
        } else {
            hex.to_owned()
        };
        if expanded.len() != 6 && expanded.len() != 8 {
            return Err(MotionError::validation(format!(
                "color '{s}' must have 3, 6, or 8 hex digits"
            )));
        }
        let num = u32::from_str_radix(&expanded, 16)
            .map_err(|_| MotionError::validation(format!("color '{s}' is not valid hex")))?;
        let (rgb, a) = if expanded.len() == 8 {
            (num >> 8, (num & 0xff) as u8)
        } else {
            (num, 255)
        };
        Ok(Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a,
        })
    }

    /// Premultiplied channels, as consumed by pixmap backends.
    pub fn premultiplied(self) -> [u8; 4] {
        let premul = |c: u8| -> u8 { ((u16::from(c) * u16::from(self.a) + 127) / 255) as u8 };
        [premul(self.r), premul(self.g), premul(self.b), self.a]
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = MotionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgba8> for String {
    fn from(c: Rgba8) -> Self {
        if c.a == 255 {
            format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

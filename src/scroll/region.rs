use crate::foundation::core::Viewport;
use crate::foundation::error::{MotionError, MotionResult};

/// Sizing of one scroll-driven section, in view-height units.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RegionConfig {
    /// Fixed section height. When set, tiering and the dead-zone addition are skipped.
    pub section_height_vh: Option<f64>,
    /// Desktop scroll distance.
    pub scroll_vh_desktop: f64,
    /// Multiplier applied to the desktop distance on the mobile tier.
    pub mobile_multiplier: f64,
    /// Widths strictly below this are the mobile tier.
    pub mobile_breakpoint: f64,
    /// Scroll distance reserved for the dead zone.
    pub dead_zone_vh: f64,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            section_height_vh: None,
            scroll_vh_desktop: 600.0,
            mobile_multiplier: 0.5,
            mobile_breakpoint: 768.0,
            dead_zone_vh: 0.0,
        }
    }
}

impl RegionConfig {
    /// Check that every distance is finite and non-negative.
    pub fn validate(&self) -> MotionResult<()> {
        let finite_non_neg = |name: &str, v: f64| {
            if v.is_finite() && v >= 0.0 {
                Ok(())
            } else {
                Err(MotionError::validation(format!(
                    "region {name} must be finite and >= 0 (got {v})"
                )))
            }
        };
        if let Some(h) = self.section_height_vh {
            finite_non_neg("section_height_vh", h)?;
        }
        finite_non_neg("scroll_vh_desktop", self.scroll_vh_desktop)?;
        finite_non_neg("mobile_multiplier", self.mobile_multiplier)?;
        finite_non_neg("mobile_breakpoint", self.mobile_breakpoint)?;
        finite_non_neg("dead_zone_vh", self.dead_zone_vh)?;
        Ok(())
    }

    /// Section height for the given host viewport.
    ///
    /// Without a host viewport (server-side pass) the desktop distance is used as-is.
    pub fn height_vh(&self, viewport: Option<Viewport>) -> f64 {
        let Some(viewport) = viewport else {
            return self.scroll_vh_desktop;
        };
        if let Some(fixed) = self.section_height_vh {
            return fixed;
        }
        let base = if viewport.is_mobile(self.mobile_breakpoint) {
            (self.scroll_vh_desktop * self.mobile_multiplier).round()
        } else {
            self.scroll_vh_desktop
        };
        base + self.dead_zone_vh
    }
}

/// One observable scroll section. Recomputed on mount and on every resize.
#[derive(Clone, Debug)]
pub struct ScrollRegion {
    config: RegionConfig,
    height_vh: f64,
}

impl ScrollRegion {
    /// Create a region sized for `viewport`.
    pub fn new(config: RegionConfig, viewport: Option<Viewport>) -> MotionResult<Self> {
        config.validate()?;
        let height_vh = config.height_vh(viewport);
        Ok(Self { config, height_vh })
    }

    /// Configuration this region was built from.
    pub fn config(&self) -> &RegionConfig {
        &self.config
    }

    /// Current allocated height.
    pub fn height_vh(&self) -> f64 {
        self.height_vh
    }

    /// Dead zone width.
    pub fn dead_zone_vh(&self) -> f64 {
        self.config.dead_zone_vh
    }

    /// Re-derive the height after a viewport change.
    pub fn resize(&mut self, viewport: Option<Viewport>) {
        self.height_vh = self.config.height_vh(viewport);
    }

    /// Section height in CSS pixels.
    pub fn height_px(&self, viewport: Viewport) -> f64 {
        viewport.vh_to_px(self.height_vh)
    }

    /// Effective travel `height - viewport - dead zone`, clamped at zero.
    pub fn effective_travel_px(&self, viewport: Viewport) -> f64 {
        let total = self.height_px(viewport) - viewport.height;
        (total - viewport.vh_to_px(self.config.dead_zone_vh)).max(0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/region.rs"]
mod tests;

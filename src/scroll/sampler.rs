use crate::foundation::core::SectionBounds;
use crate::foundation::math::clamp01;
use crate::scroll::smoother::ProgressState;

/// Where the dead-zone distance sits along the section's scroll travel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadZonePlacement {
    /// Progress reaches 1 early and holds for the final dead-zone distance.
    #[default]
    Trailing,
    /// Progress stays at 0 for the first dead-zone distance, then advances.
    Leading,
}

/// Intermediate quantities of one sampling pass, all in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    /// `section height - viewport height`.
    pub total: f64,
    /// Dead zone converted from view-height units.
    pub dead_zone_px: f64,
    /// `max(0, total - dead_zone_px)`.
    pub travel: f64,
    /// `clamp(-top, 0, total)`.
    pub scrolled: f64,
    /// Normalized progress in `[0, 1]`.
    pub raw_progress: f64,
}

/// Computes raw section progress from element geometry.
///
/// Runs inside scroll and resize handlers, so it only does O(1) arithmetic and never renders.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSampler {
    dead_zone_vh: f64,
    placement: DeadZonePlacement,
}

impl ScrollSampler {
    /// Sampler with a dead zone expressed in view-height percent.
    pub fn new(dead_zone_vh: f64, placement: DeadZonePlacement) -> Self {
        Self {
            dead_zone_vh: dead_zone_vh.max(0.0),
            placement,
        }
    }

    /// Sample progress for a section at `bounds` inside a viewport of `viewport_height`.
    pub fn sample(&self, bounds: SectionBounds, viewport_height: f64) -> ScrollSample {
        let total = bounds.height - viewport_height;
        let dead_zone_px = self.dead_zone_vh / 100.0 * viewport_height;
        let travel = (total - dead_zone_px).max(0.0);
        let scrolled = (-bounds.top).min(total).max(0.0);

        let advanced = match self.placement {
            DeadZonePlacement::Trailing => scrolled,
            DeadZonePlacement::Leading => scrolled - dead_zone_px,
        };
        let raw_progress = if travel > 0.0 {
            clamp01(advanced / travel)
        } else {
            0.0
        };

        ScrollSample {
            total,
            dead_zone_px,
            travel,
            scrolled,
            raw_progress,
        }
    }

    /// Sample and publish the result as the smoother's new target.
    pub fn write_target(
        &self,
        bounds: SectionBounds,
        viewport_height: f64,
        state: &mut ProgressState,
    ) -> f64 {
        let p = self.sample(bounds, viewport_height).raw_progress;
        state.target = p;
        p
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/sampler.rs"]
mod tests;

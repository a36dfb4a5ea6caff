use crate::foundation::core::SectionBounds;
use crate::foundation::error::{MotionError, MotionResult};
use crate::foundation::math::ratio_or;

/// Tuning for converting vertical wheel input into horizontal track scrolling.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WheelTrackConfig {
    /// Horizontal pixels per vertical wheel pixel.
    pub scroll_speed: f64,
    /// Distance from either end at which the wheel is released back to the page.
    pub exit_threshold: f64,
    /// The container counts as "in view" while its top is within this band of the viewport top
    /// and its bottom within this band of the viewport bottom.
    pub viewport_band_px: f64,
}

impl Default for WheelTrackConfig {
    fn default() -> Self {
        Self {
            scroll_speed: 2.0,
            exit_threshold: 0.0,
            viewport_band_px: 100.0,
        }
    }
}

/// Result of feeding one wheel event to a [`WheelTrack`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelOutcome {
    /// The track scrolled; the host must suppress default page scrolling.
    Consumed {
        /// New horizontal offset.
        scroll_left: f64,
        /// Track progress in percent.
        progress_pct: f64,
    },
    /// The event belongs to the page (track out of view or at an edge).
    Released,
}

/// Horizontal track driven by vertical wheel deltas, with edge release.
#[derive(Clone, Debug)]
pub struct WheelTrack {
    config: WheelTrackConfig,
    scroll_left: f64,
    max_scroll: f64,
}

impl WheelTrack {
    /// Build a track with no scrollable extent yet.
    pub fn new(config: WheelTrackConfig) -> MotionResult<Self> {
        if !(config.scroll_speed.is_finite() && config.scroll_speed > 0.0) {
            return Err(MotionError::validation("wheel scroll_speed must be > 0"));
        }
        if !(config.exit_threshold.is_finite() && config.exit_threshold >= 0.0) {
            return Err(MotionError::validation("wheel exit_threshold must be >= 0"));
        }
        Ok(Self {
            config,
            scroll_left: 0.0,
            max_scroll: 0.0,
        })
    }

    /// Update the scrollable extent after layout or resize.
    pub fn set_extent(&mut self, content_width: f64, client_width: f64) {
        self.max_scroll = (content_width - client_width).max(0.0);
        self.scroll_left = self.scroll_left.clamp(0.0, self.max_scroll);
    }

    /// Current horizontal offset.
    pub fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    /// Progress in percent, `100` when there is nothing to scroll.
    pub fn progress_pct(&self) -> f64 {
        (ratio_or(self.scroll_left, self.max_scroll, 1.0) * 100.0).clamp(0.0, 100.0)
    }

    /// Feed one wheel event.
    pub fn on_wheel(
        &mut self,
        delta_y: f64,
        container: SectionBounds,
        viewport_height: f64,
    ) -> WheelOutcome {
        let band = self.config.viewport_band_px;
        let in_view = container.top <= band && container.bottom() >= viewport_height - band;
        if !in_view || delta_y == 0.0 || !delta_y.is_finite() {
            return WheelOutcome::Released;
        }

        let at_start = self.scroll_left <= self.config.exit_threshold;
        let at_end = self.scroll_left >= self.max_scroll - self.config.exit_threshold;
        if (delta_y < 0.0 && at_start) || (delta_y > 0.0 && at_end) {
            return WheelOutcome::Released;
        }

        self.scroll_left =
            (self.scroll_left + delta_y * self.config.scroll_speed).clamp(0.0, self.max_scroll);
        WheelOutcome::Consumed {
            scroll_left: self.scroll_left,
            progress_pct: self.progress_pct(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/wheel.rs"]
mod tests;

use crate::animation::ease::Ease;
use crate::foundation::error::{MotionError, MotionResult};
use crate::foundation::math::normalize;

/// Shared timeline settings for a group of entrance-animated elements.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Timeline length that authored millisecond delays are normalized against.
    pub timeline_max: f64,
    /// Progress before the scheduled position at which the entrance starts.
    pub lead_in: f64,
    /// Progress after the scheduled position at which the entrance completes.
    pub lead_out: f64,
    /// Vertical slide distance at zero strength.
    pub enter_offset_px: f64,
    /// Horizontal margin around the viewport outside of which items are hidden.
    pub buffer_px: f64,
    /// Curve applied to the linear reveal strength.
    pub ease: Ease,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            timeline_max: 10_000.0,
            lead_in: 0.06,
            lead_out: 0.08,
            enter_offset_px: 28.0,
            buffer_px: 220.0,
            ease: Ease::InOutCubic,
        }
    }
}

impl RevealConfig {
    /// Check the timeline invariants.
    pub fn validate(&self) -> MotionResult<()> {
        if !self.timeline_max.is_finite() || self.timeline_max <= 0.0 {
            return Err(MotionError::validation("reveal timeline_max must be > 0"));
        }
        if !self.lead_in.is_finite() || self.lead_in < 0.0 {
            return Err(MotionError::validation("reveal lead_in must be >= 0"));
        }
        if !self.lead_out.is_finite() || self.lead_out <= 0.0 {
            return Err(MotionError::validation("reveal lead_out must be > 0"));
        }
        if !self.enter_offset_px.is_finite() || !self.buffer_px.is_finite() {
            return Err(MotionError::validation(
                "reveal enter_offset_px and buffer_px must be finite",
            ));
        }
        Ok(())
    }

    /// Build an item from an authored delay in timeline milliseconds.
    pub fn item_from_delay(&self, delay_ms: f64) -> RevealItem {
        RevealItem {
            scheduled_position: delay_ms / self.timeline_max.max(1.0),
            lead_in: self.lead_in,
            lead_out: self.lead_out,
            skip_animation: false,
        }
    }
}

/// One entrance-animated element positioned on a normalized timeline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealItem {
    /// Normalized timeline position; may fall outside `[0, 1]` for pre-revealed items.
    pub scheduled_position: f64,
    /// Lead-in tolerance.
    pub lead_in: f64,
    /// Lead-out tolerance.
    pub lead_out: f64,
    /// Render fully shown regardless of progress.
    #[serde(default)]
    pub skip_animation: bool,
}

impl RevealItem {
    /// Progress at which the entrance begins.
    pub fn enter_start(&self) -> f64 {
        self.scheduled_position - self.lead_in
    }

    /// Progress at which the entrance completes.
    pub fn enter_end(&self) -> f64 {
        self.scheduled_position + self.lead_out
    }

    /// Linear strength in `[0, 1]`; degenerate windows resolve as a step.
    pub fn strength(&self, progress: f64) -> f64 {
        normalize(progress, self.enter_start(), self.enter_end())
    }
}

/// Visible range of a horizontally translated track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackWindow {
    /// Current track translation distance (positive, `progress * maxShift`).
    pub scroll_offset: f64,
    /// Viewport width.
    pub viewport_width: f64,
}

impl TrackWindow {
    /// `true` if track coordinate `x` lies within the viewport widened by `buffer` on both sides.
    pub fn contains(&self, x: f64, buffer: f64) -> bool {
        x >= self.scroll_offset - buffer && x <= self.scroll_offset + self.viewport_width + buffer
    }
}

/// Style outputs for one reveal item.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealStyle {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Vertical translation in pixels.
    pub translate_y: f64,
    /// `false` when culled by the track window.
    pub visible: bool,
}

/// Pure mapping from shared progress to per-item entrance styles.
#[derive(Clone, Copy, Debug)]
pub struct RevealScheduler {
    config: RevealConfig,
}

impl RevealScheduler {
    /// Validate and wrap a config.
    pub fn new(config: RevealConfig) -> MotionResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Config in effect.
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Timed entrance style, ignoring viewport culling.
    pub fn style(&self, item: &RevealItem, progress: f64) -> RevealStyle {
        if item.skip_animation {
            return RevealStyle {
                opacity: 1.0,
                translate_y: 0.0,
                visible: true,
            };
        }
        let entered = self.config.ease.apply(item.strength(progress));
        RevealStyle {
            opacity: entered,
            translate_y: (1.0 - entered) * self.config.enter_offset_px,
            visible: true,
        }
    }

    /// Timed entrance style AND-ed with track-window culling for an item at track coordinate `x`.
    pub fn style_at(
        &self,
        item: &RevealItem,
        progress: f64,
        x: f64,
        window: TrackWindow,
    ) -> RevealStyle {
        let style = self.style(item, progress);
        if window.contains(x, self.config.buffer_px) {
            style
        } else {
            RevealStyle {
                opacity: 0.0,
                visible: false,
                ..style
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/scheduler.rs"]
mod tests;

use crate::animation::ease::Ease;
use crate::foundation::error::{MotionError, MotionResult};
use crate::foundation::math::{clamp01, normalize};

/// Timing and presentation constants for a track of typed headers.
///
/// Everything here is a fraction of one header's local timeline (`localT` in `[0, 1]`) except
/// `advance` and `timing_scale`, which shape how global progress is split across headers.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    /// Added to the scaled header position before flooring, so headers start early.
    pub advance: f64,
    /// Multiplier on `progress * trackCount`; values below 1 leave room for the last header.
    pub timing_scale: f64,
    /// End of the idle phase.
    pub type_in_start: f64,
    /// End of the typing phase.
    pub type_in_end: f64,
    /// Start of the deleting phase (never reached on the last header).
    pub delete_start: f64,
    /// Vertical float-in distance in pixels.
    pub float_offset_px: f64,
    /// Exponent applied to float progress before easing.
    pub float_ease_power: f64,
    /// Portion of `localT` over which the float-in completes.
    pub float_span: f64,
    /// Global progress past which the last header is forced to its full text.
    pub complete_after: f64,
    /// Curve used for typing, deleting and floating.
    pub ease: Ease,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            advance: 0.12,
            timing_scale: 0.97,
            type_in_start: 0.02,
            type_in_end: 0.46,
            delete_start: 0.66,
            float_offset_px: 36.0,
            float_ease_power: 1.6,
            float_span: 0.45,
            complete_after: 0.98,
            ease: Ease::InOutCubic,
        }
    }
}

impl TypewriterConfig {
    /// Require `type_in_start < type_in_end < delete_start < 1` and finite tuning values.
    pub fn validate(&self) -> MotionResult<()> {
        let all = [
            self.advance,
            self.timing_scale,
            self.type_in_start,
            self.type_in_end,
            self.delete_start,
            self.float_offset_px,
            self.float_ease_power,
            self.float_span,
            self.complete_after,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(MotionError::validation("typewriter values must be finite"));
        }
        if !(0.0 <= self.type_in_start
            && self.type_in_start < self.type_in_end
            && self.type_in_end < self.delete_start
            && self.delete_start < 1.0)
        {
            return Err(MotionError::validation(format!(
                "typewriter phases must satisfy 0 <= type_in_start < type_in_end < delete_start < 1 \
                 (got {}, {}, {})",
                self.type_in_start, self.type_in_end, self.delete_start
            )));
        }
        if self.float_span <= 0.0 {
            return Err(MotionError::validation("typewriter float_span must be > 0"));
        }
        Ok(())
    }

    /// Phase boundaries clamped so each phase keeps a minimum width.
    pub fn timings(&self) -> PhaseTimings {
        // NaN inputs fall back to the lower bound.
        let type_in_start = self.type_in_start.max(0.0).min(0.9);
        let type_in_end = self.type_in_end.max(type_in_start + 0.05).min(0.95);
        let delete_start = self.delete_start.max(type_in_end + 0.05).min(0.98);
        PhaseTimings {
            type_in_start,
            type_in_end,
            delete_start,
        }
    }

    /// Phase and typed character count at `local_t` for a header of `total_chars` characters.
    pub fn progression(
        &self,
        local_t: f64,
        total_chars: usize,
        is_last: bool,
    ) -> (HeaderPhase, usize) {
        let t = self.timings();
        let local_t = clamp01(local_t);
        let (phase, linear) = if local_t <= t.type_in_start {
            (HeaderPhase::Idle, 0.0)
        } else if local_t < t.type_in_end {
            (
                HeaderPhase::Typing,
                normalize(local_t, t.type_in_start, t.type_in_end),
            )
        } else if is_last || local_t < t.delete_start {
            (HeaderPhase::Held, 1.0)
        } else {
            (
                HeaderPhase::Deleting,
                1.0 - normalize(local_t, t.delete_start, 1.0),
            )
        };
        let chars = (total_chars as f64 * self.ease.apply(linear)).round().max(0.0) as usize;
        (phase, chars.min(total_chars))
    }

    /// Vertical float-in offset at `local_t`; reaches 0 once `float_span` has elapsed.
    pub fn float_y(&self, local_t: f64) -> f64 {
        let fp = (clamp01(local_t) / self.float_span.max(f64::EPSILON)).min(1.0);
        (1.0 - self.ease.apply_pow(fp, self.float_ease_power)) * self.float_offset_px
    }
}

/// Sanitized phase boundaries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseTimings {
    /// End of idle.
    pub type_in_start: f64,
    /// End of typing.
    pub type_in_end: f64,
    /// Start of deleting.
    pub delete_start: f64,
}

/// Typewriter phase, derived fresh every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderPhase {
    /// Nothing typed yet.
    Idle,
    /// Characters appearing.
    Typing,
    /// Full text shown.
    Held,
    /// Characters disappearing.
    Deleting,
}

/// One authored header.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Header {
    /// Header text; newlines are preserved.
    pub text: String,
    /// Shifts this header's `localT` backward to stagger it.
    #[serde(default)]
    pub timing_offset: f64,
}

impl Header {
    /// Header with no timing offset.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timing_offset: 0.0,
        }
    }

    /// Return `self` with a timing offset.
    pub fn with_timing_offset(mut self, offset: f64) -> Self {
        self.timing_offset = offset;
        self
    }
}

/// Header state for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HeaderTypewriterState {
    /// Active track slot, clamped to the valid range.
    pub header_index: usize,
    /// Local timeline position after the header's timing offset.
    pub local_t: f64,
    /// Current phase.
    pub phase: HeaderPhase,
    /// Number of characters (Unicode scalars) shown.
    pub typed_char_count: usize,
    /// Total characters in the active header.
    pub total_chars: usize,
    /// Float-in offset in pixels.
    pub float_y: f64,
    /// 1 once any character is shown.
    pub opacity: f64,
}

/// A sequence of headers spread across one progress timeline.
#[derive(Clone, Debug)]
pub struct HeaderTrack {
    config: TypewriterConfig,
    headers: Vec<Header>,
    track_count: usize,
}

impl HeaderTrack {
    /// Build a track with `track_count` slots; `0` means one slot per header.
    ///
    /// Slots without a header render as empty text.
    pub fn new(
        config: TypewriterConfig,
        headers: Vec<Header>,
        track_count: usize,
    ) -> MotionResult<Self> {
        config.validate()?;
        if headers.iter().any(|h| !h.timing_offset.is_finite()) {
            return Err(MotionError::validation("header timing_offset must be finite"));
        }
        let track_count = if track_count == 0 {
            headers.len()
        } else {
            track_count
        }
        .max(1);
        Ok(Self {
            config,
            headers,
            track_count,
        })
    }

    /// Number of track slots.
    pub fn track_count(&self) -> usize {
        self.track_count
    }

    /// Config in effect.
    pub fn config(&self) -> &TypewriterConfig {
        &self.config
    }

    /// Active slot and raw local time for global `progress`.
    pub fn select(&self, progress: f64) -> (usize, f64) {
        let scale = self.config.timing_scale.max(0.1);
        let raw = clamp01(progress) * self.track_count as f64 * scale + self.config.advance;
        let last = (self.track_count - 1) as f64;
        let index = raw.floor().clamp(0.0, last);
        (index as usize, clamp01(raw - index))
    }

    /// Derive the full header state for `progress`. Pure: same input, same output.
    pub fn state(&self, progress: f64) -> HeaderTypewriterState {
        let (header_index, raw_t) = self.select(progress);
        let header = self.headers.get(header_index);
        let offset = header.map_or(0.0, |h| h.timing_offset);
        let local_t = clamp01(raw_t - offset);
        let total_chars = header.map_or(0, |h| h.text.chars().count());
        let is_last = header_index + 1 >= self.track_count;

        let (mut phase, mut typed) = self.config.progression(local_t, total_chars, is_last);
        if is_last && progress > self.config.complete_after {
            phase = HeaderPhase::Held;
            typed = total_chars;
        }
        HeaderTypewriterState {
            header_index,
            local_t,
            phase,
            typed_char_count: typed,
            total_chars,
            float_y: self.config.float_y(local_t),
            opacity: if typed > 0 { 1.0 } else { 0.0 },
        }
    }

    /// Visible prefix of the active header.
    pub fn typed_text(&self, state: &HeaderTypewriterState) -> &str {
        self.headers
            .get(state.header_index)
            .map_or("", |h| char_prefix(&h.text, state.typed_char_count))
    }
}

/// First `n` Unicode scalars of `s`.
pub fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((byte, _)) => &s[..byte],
        None => s,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/typewriter/header.rs"]
mod tests;

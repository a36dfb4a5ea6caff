use crate::foundation::core::{Point, Rect, Vec2, Viewport};
use crate::foundation::error::{MotionError, MotionResult};
use crate::foundation::math::ratio_or;

/// Latest pointer position relative to a container.
///
/// `None` is the neutral state: the pointer left the container or window, so no residual force
/// or offset applies. Written by a single listener, read by frame tasks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    position: Option<Point>,
}

impl PointerState {
    /// Record a pointer move.
    pub fn moved(&mut self, at: Point) {
        self.position = (at.x.is_finite() && at.y.is_finite()).then_some(at);
    }

    /// Reset to the neutral state.
    pub fn left(&mut self) {
        self.position = None;
    }

    /// Current position, if the pointer is over the container.
    pub fn position(&self) -> Option<Point> {
        self.position
    }
}

/// Pointer position mapped to `[-1, 1]` on both axes around the container centre.
pub fn normalized_pointer(at: Point, container: Rect) -> Vec2 {
    let half_w = container.width() / 2.0;
    let half_h = container.height() / 2.0;
    let c = container.center();
    let nx = ratio_or(at.x - c.x, half_w, 0.0);
    let ny = ratio_or(at.y - c.y, half_h, 0.0);
    Vec2::new(nx.clamp(-1.0, 1.0), ny.clamp(-1.0, 1.0))
}

fn check_factor(name: &str, v: f64) -> MotionResult<()> {
    if v.is_finite() && v > 0.0 && v <= 1.0 {
        Ok(())
    } else {
        Err(MotionError::validation(format!(
            "{name} must be in (0, 1] (got {v})"
        )))
    }
}

/// Smoothed, normalized pointer offset used for per-group depth parallax.
#[derive(Clone, Copy, Debug)]
pub struct PointerParallax {
    smoothing: f64,
    target: Vec2,
    current: Vec2,
}

impl PointerParallax {
    /// Build with a per-frame smoothing factor in `(0, 1]`.
    pub fn new(smoothing: f64) -> MotionResult<Self> {
        check_factor("pointer smoothing", smoothing)?;
        Ok(Self {
            smoothing,
            target: Vec2::ZERO,
            current: Vec2::ZERO,
        })
    }

    /// Retarget from a pointer position inside `container`.
    pub fn set_pointer(&mut self, at: Point, container: Rect) {
        self.target = normalized_pointer(at, container);
    }

    /// Pointer left: ease back to centre.
    pub fn leave(&mut self) {
        self.target = Vec2::ZERO;
    }

    /// Advance one frame and return the smoothed normalized offset.
    pub fn step(&mut self) -> Vec2 {
        self.current += (self.target - self.current) * self.smoothing;
        self.current
    }

    /// Pixel translation for a group with `strength` pixels of travel.
    pub fn offset(&self, strength: f64) -> Vec2 {
        self.current * strength
    }
}

/// Slow continuous motion layered on top of pointer parallax.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OscillatorConfig {
    /// Scale amplitude of the breathing motion.
    pub breathe_amp: f64,
    /// Radians per millisecond.
    pub breathe_speed: f64,
    /// Vertical drift amplitude in pixels.
    pub drift_amp: f64,
    /// Radians per millisecond.
    pub drift_speed: f64,
    /// Animate dashed strokes.
    pub dash_drift: bool,
    /// Dash offset multiplier.
    pub dash_speed: f64,
}

impl Default for OscillatorConfig {
    fn default() -> Self {
        Self {
            breathe_amp: 0.025,
            breathe_speed: 0.0005,
            drift_amp: 20.0,
            drift_speed: 0.00055,
            dash_drift: true,
            dash_speed: 0.9,
        }
    }
}

/// Oscillator values at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OscillatorSample {
    /// Breathing scale around 1.
    pub breathe_scale: f64,
    /// Vertical drift in pixels.
    pub drift_y: f64,
    /// Secondary, slower and shallower breathing scale.
    pub face_scale: f64,
    /// Stroke dash offset, `None` when dash drift is disabled.
    pub dash_offset: Option<f64>,
}

impl OscillatorConfig {
    /// Sample every oscillator `elapsed_ms` after mount.
    pub fn sample(&self, elapsed_ms: f64) -> OscillatorSample {
        let t = elapsed_ms;
        OscillatorSample {
            breathe_scale: 1.0 + (t * self.breathe_speed).sin() * self.breathe_amp,
            drift_y: (t * self.drift_speed).sin() * self.drift_amp,
            face_scale: 1.0 + (t * self.breathe_speed * 1.15).sin() * (self.breathe_amp * 0.6),
            dash_offset: self
                .dash_drift
                .then(|| t * 0.001 * 120.0 * self.dash_speed),
        }
    }
}

/// Tuning for the floating cursor preview and its background parallax.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CursorFollowConfig {
    /// Fraction of the remaining distance covered per pointer sample.
    pub ease: f64,
    /// Background travel in pixels across the full viewport.
    pub parallax_strength: f64,
}

impl Default for CursorFollowConfig {
    fn default() -> Self {
        Self {
            ease: 0.2,
            parallax_strength: 18.0,
        }
    }
}

/// Eased cursor follower.
#[derive(Clone, Copy, Debug)]
pub struct CursorFollower {
    config: CursorFollowConfig,
    position: Point,
}

impl CursorFollower {
    /// Start at the origin.
    pub fn new(config: CursorFollowConfig) -> MotionResult<Self> {
        check_factor("cursor ease", config.ease)?;
        Ok(Self {
            config,
            position: Point::ZERO,
        })
    }

    /// Ease toward `pointer` and return the new position. One call per coalesced frame.
    pub fn sample(&mut self, pointer: Point) -> Point {
        self.position += (pointer - self.position) * self.config.ease;
        self.position
    }

    /// Smoothed cursor position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Background offset in `[-strength/2, strength/2]`, zero-size viewports map to centre.
    pub fn background_parallax(&self, viewport: Viewport) -> Vec2 {
        let s = self.config.parallax_strength;
        let fx = ratio_or(self.position.x, viewport.width, 0.5);
        let fy = ratio_or(self.position.y, viewport.height, 0.5);
        Vec2::new((fx - 0.5) * s, (fy - 0.5) * s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parallax/pointer.rs"]
mod tests;

/// Easing curves applied to normalized `[0, 1]` progress.
///
/// Every curve maps `0 -> 0` and `1 -> 1`; the symmetric in/out curves also satisfy
/// `apply(1 - t) == 1 - apply(t)`, which keeps typing and deleting phases mirror images.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Identity.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out; the default for reveals and typewriter phases.
    #[default]
    InOutCubic,
    /// Hermite smoothstep `t * t * (3 - 2t)`.
    Smoothstep,
}

impl Ease {
    /// Apply this curve to `t`, clamping the input to `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::Smoothstep => t * t * (3.0 - 2.0 * t),
        }
    }

    /// Raise `t` to `power` before easing. Powers above 1 delay the curve's take-off.
    pub fn apply_pow(self, t: f64, power: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let power = if power.is_finite() && power > 0.0 {
            power
        } else {
            1.0
        };
        self.apply(t.powf(power))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;

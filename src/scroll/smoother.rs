use crate::foundation::error::{MotionError, MotionResult};

/// Target/current pair owned by exactly one scroll region.
///
/// `target` is written by the sampler from event handlers; `current` only by [`Smoother::step`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProgressState {
    /// Latest sampled progress.
    pub target: f64,
    /// Smoothed progress consumed by renderers.
    pub current: f64,
}

/// Tuning for the per-frame exponential filter.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SmootherConfig {
    /// Fraction of the remaining distance covered per frame, in `(0, 1]`. Lower is smoother.
    pub smoothing: f64,
    /// Deltas below this snap to the target.
    pub epsilon: f64,
    /// Snap whenever the target sits within `epsilon` of 0 or 1.
    pub snap_at_bounds: bool,
}

impl Default for SmootherConfig {
    fn default() -> Self {
        Self {
            smoothing: 0.1,
            epsilon: 1e-4,
            snap_at_bounds: true,
        }
    }
}

impl SmootherConfig {
    /// Reject factors outside `(0, 1]` and negative epsilons.
    pub fn validate(&self) -> MotionResult<()> {
        if !(self.smoothing.is_finite() && self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(MotionError::validation(format!(
                "smoothing must be in (0, 1] (got {})",
                self.smoothing
            )));
        }
        if !(self.epsilon.is_finite() && self.epsilon >= 0.0) {
            return Err(MotionError::validation("smoother epsilon must be >= 0"));
        }
        Ok(())
    }
}

/// Critically-damped progress filter advanced once per animation frame.
#[derive(Clone, Copy, Debug)]
pub struct Smoother {
    config: SmootherConfig,
}

impl Smoother {
    /// Build a validated smoother.
    pub fn new(config: SmootherConfig) -> MotionResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Tuning in use.
    pub fn config(&self) -> SmootherConfig {
        self.config
    }

    /// Advance `state.current` one frame toward `state.target` and return it.
    ///
    /// Runs every frame whether or not the target moved.
    pub fn step(&self, state: &mut ProgressState) -> f64 {
        let eps = self.config.epsilon;
        let delta = state.target - state.current;
        let at_bound =
            self.config.snap_at_bounds && (state.target <= eps || state.target >= 1.0 - eps);

        if delta.abs() < eps || at_bound {
            state.current = state.target;
        } else {
            state.current += delta * self.config.smoothing;
        }
        state.current
    }

    /// `true` once `current` has landed exactly on `target`.
    pub fn is_settled(state: &ProgressState) -> bool {
        state.current == state.target
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/smoother.rs"]
mod tests;

use std::time::Instant;

use crate::engine::events::HostEvent;
use crate::render::target::{BackingStore, RenderTarget};

/// A mounted animation: event handlers plus a per-frame update and draw.
pub trait Scene {
    /// Record an input. Must be O(1) and never render.
    fn handle_event(&mut self, event: &HostEvent);

    /// Advance producers (smoothers, timers, physics) by `dt_ms`.
    fn update(&mut self, dt_ms: f64);

    /// Emit outputs from the state produced by [`Scene::update`].
    fn render(&self, target: &mut dyn RenderTarget);

    /// Surface size for the next frame.
    fn backing_store(&self) -> BackingStore;
}

/// Frame loop tuning.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FrameLoopConfig {
    /// Wall-clock budget per frame; slower frames are logged.
    pub frame_budget_ms: f64,
}

impl Default for FrameLoopConfig {
    fn default() -> Self {
        Self {
            frame_budget_ms: 16.0,
        }
    }
}

/// Counters collected over a loop's lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    /// Frames ticked.
    pub frames: u64,
    /// Frames that exceeded the budget.
    pub over_budget: u64,
    /// Host events dispatched.
    pub events: u64,
    /// Sum of `dt_ms` passed to [`FrameLoop::tick`].
    pub elapsed_ms: f64,
}

/// Owns a mounted scene and drives it one frame at a time.
///
/// [`FrameLoop::unmount`] consumes the loop, so no frame can run after teardown.
pub struct FrameLoop<S: Scene> {
    scene: S,
    config: FrameLoopConfig,
    stats: FrameStats,
}

impl<S: Scene> FrameLoop<S> {
    /// Start driving `scene`.
    pub fn mount(scene: S, config: FrameLoopConfig) -> Self {
        tracing::debug!(budget_ms = config.frame_budget_ms, "frame loop mounted");
        Self {
            scene,
            config,
            stats: FrameStats::default(),
        }
    }

    /// Forward a host event to the scene.
    pub fn dispatch(&mut self, event: &HostEvent) {
        self.stats.events += 1;
        self.scene.handle_event(event);
    }

    /// Run one frame: update, then render into `target`.
    pub fn tick(&mut self, dt_ms: f64, target: &mut dyn RenderTarget) {
        let dt_ms = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };
        let t0 = Instant::now();

        self.scene.update(dt_ms);
        target.begin_frame(self.scene.backing_store());
        self.scene.render(target);
        target.end_frame();

        let spent_ms = t0.elapsed().as_secs_f64() * 1000.0;
        self.stats.frames += 1;
        self.stats.elapsed_ms += dt_ms;
        if spent_ms > self.config.frame_budget_ms {
            self.stats.over_budget += 1;
            tracing::warn!(
                frame = self.stats.frames,
                spent_ms,
                budget_ms = self.config.frame_budget_ms,
                "frame exceeded budget"
            );
        }
    }

    /// Shared access to the scene.
    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Counters so far.
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Stop the loop and hand the scene back.
    pub fn unmount(self) -> S {
        tracing::debug!(
            frames = self.stats.frames,
            over_budget = self.stats.over_budget,
            "frame loop unmounted"
        );
        self.scene
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/frame_loop.rs"]
mod tests;

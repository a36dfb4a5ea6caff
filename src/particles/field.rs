use crate::engine::events::HostEvent;
use crate::engine::frame_loop::Scene;
use crate::foundation::core::{Point, Rgba8, Viewport};
use crate::foundation::error::{MotionError, MotionResult};
use crate::parallax::pointer::PointerState;
use crate::particles::particle::Dynamics;
use crate::particles::pool::{ParticlePool, Reconciliation, SpawnParams};
use crate::particles::text_raster::{TextFit, TextRasterizer};
use crate::render::target::{BackingStore, RenderTarget};

/// Tuning for the particle text hero.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ParticleFieldConfig {
    /// Phrases cycled by the rotation timer.
    pub texts: Vec<String>,
    /// Particle radius in CSS pixels.
    pub particle_size: f64,
    /// Particle fill.
    pub particle_color: Rgba8,
    /// Sampling grid step in CSS pixels.
    pub spacing: u32,
    /// Pointer repulsion radius.
    pub mouse_radius: f64,
    /// Time between phrases.
    pub change_interval_ms: f64,
    /// Easing factor for homing and reforming, in `(0, 1]`.
    pub transition_speed: f64,
    /// Alpha a sampled pixel must exceed to become a target.
    pub alpha_threshold: u8,
    /// Upper bound on simultaneously active particles.
    pub max_particles: usize,
    /// Repulsion weight range `[lo, hi)`.
    pub density_range: (f64, f64),
    /// Spawn position seed.
    pub seed: u64,
    /// Text fitting.
    pub fit: TextFit,
}

impl Default for ParticleFieldConfig {
    fn default() -> Self {
        Self {
            texts: vec![
                "I CRAFT HUMAN-AI INTERFACES".to_owned(),
                "UI DESIGNER".to_owned(),
                "AUDIO ENGINEER".to_owned(),
                "CREATIVE DEVELOPER".to_owned(),
            ],
            particle_size: 1.7,
            particle_color: Rgba8::rgb(0x06, 0xb6, 0xd4),
            spacing: 5,
            mouse_radius: 80.0,
            change_interval_ms: 6000.0,
            transition_speed: 0.10,
            alpha_threshold: 128,
            max_particles: 20_000,
            density_range: (1.0, 31.0),
            seed: 0x5eed,
            fit: TextFit::default(),
        }
    }
}

impl ParticleFieldConfig {
    /// Validate ranges.
    pub fn validate(&self) -> MotionResult<()> {
        if self.texts.is_empty() {
            return Err(MotionError::validation("particle field needs at least one text"));
        }
        if self.spacing == 0 {
            return Err(MotionError::validation("particle spacing must be >= 1"));
        }
        if !(self.transition_speed.is_finite()
            && self.transition_speed > 0.0
            && self.transition_speed <= 1.0)
        {
            return Err(MotionError::validation(
                "particle transition_speed must be in (0, 1]",
            ));
        }
        if !(self.mouse_radius.is_finite() && self.mouse_radius > 0.0) {
            return Err(MotionError::validation("particle mouse_radius must be > 0"));
        }
        if !(self.change_interval_ms.is_finite() && self.change_interval_ms > 0.0) {
            return Err(MotionError::validation(
                "particle change_interval_ms must be > 0",
            ));
        }
        if !(self.particle_size.is_finite() && self.particle_size > 0.0) {
            return Err(MotionError::validation("particle size must be > 0"));
        }
        let (lo, hi) = self.density_range;
        if !(lo.is_finite() && hi.is_finite() && lo <= hi) {
            return Err(MotionError::validation("particle density_range must be ordered"));
        }
        self.fit.validate()
    }

    fn dynamics(&self) -> Dynamics {
        Dynamics {
            mouse_radius: self.mouse_radius,
            transition_speed: self.transition_speed,
        }
    }
}

/// Particle text hero: rotating phrases drawn as a field of pooled particles.
pub struct ParticleField<R: TextRasterizer> {
    config: ParticleFieldConfig,
    rasterizer: R,
    viewport: Viewport,
    pool: ParticlePool,
    pointer: PointerState,
    text_index: usize,
    rotation_ms: f64,
}

impl<R: TextRasterizer> ParticleField<R> {
    /// Build the field and lay out the first phrase.
    pub fn new(
        config: ParticleFieldConfig,
        rasterizer: R,
        viewport: Viewport,
    ) -> MotionResult<Self> {
        config.validate()?;
        let pool = ParticlePool::new(config.max_particles, config.seed);
        let mut field = Self {
            config,
            rasterizer,
            viewport: Viewport::or_default(Some(viewport)),
            pool,
            pointer: PointerState::default(),
            text_index: 0,
            rotation_ms: 0.0,
        };
        field.relayout()?;
        Ok(field)
    }

    /// Index of the phrase currently shown.
    pub fn text_index(&self) -> usize {
        self.text_index
    }

    /// Phrase currently shown.
    pub fn text(&self) -> &str {
        &self.config.texts[self.text_index]
    }

    /// Particle pool.
    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    /// Current container viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Container resized or pixel ratio changed. Particles keep their state; only targets move.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = Viewport::or_default(Some(viewport));
        self.relayout_or_keep("resize");
    }

    /// Pointer moved inside the container.
    pub fn pointer_moved(&mut self, at: Point) {
        self.pointer.moved(at);
    }

    /// Pointer left; no repulsion until it returns.
    pub fn pointer_left(&mut self) {
        self.pointer.left();
    }

    /// Advance the rotation timer; returns `true` if the phrase changed.
    pub fn advance_timer(&mut self, dt_ms: f64) -> bool {
        if !dt_ms.is_finite() || dt_ms <= 0.0 {
            return false;
        }
        let interval = self.config.change_interval_ms;
        self.rotation_ms += dt_ms;
        let steps = (self.rotation_ms / interval).floor();
        let rotated = steps >= 1.0;
        if rotated {
            self.rotation_ms -= steps * interval;
            let len = self.config.texts.len();
            // Saturating cast; only the count modulo `len` matters.
            let advance = (steps as u64 % len as u64) as usize;
            self.text_index = (self.text_index + advance) % len;
            self.relayout_or_keep("rotation");
        }
        rotated
    }

    /// Move every active particle one frame.
    pub fn step(&mut self) {
        self.pool
            .update(self.pointer.position(), self.config.dynamics());
    }

    /// Draw active particles.
    pub fn draw(&self, target: &mut dyn RenderTarget) {
        for p in self.pool.active() {
            target.draw_particle(p.pos, p.size, self.config.particle_color);
        }
    }

    fn relayout(&mut self) -> MotionResult<Reconciliation> {
        let w = self.viewport.width.max(0.0).round() as u32;
        let h = self.viewport.height.max(0.0).round() as u32;
        let mask = self
            .rasterizer
            .rasterize(&self.config.texts[self.text_index], w, h)?;
        let targets = mask.sample_targets(self.config.spacing, self.config.alpha_threshold);
        let spawn = SpawnParams {
            width: self.viewport.width,
            height: self.viewport.height,
            size: self.config.particle_size,
            density: self.config.density_range,
        };
        Ok(self.pool.reconcile(&targets, spawn))
    }

    fn relayout_or_keep(&mut self, cause: &'static str) {
        if let Err(err) = self.relayout() {
            tracing::warn!(cause, %err, "text layout failed; keeping previous particle targets");
        }
    }
}

impl<R: TextRasterizer> Scene for ParticleField<R> {
    fn handle_event(&mut self, event: &HostEvent) {
        match *event {
            HostEvent::Resize { viewport, .. } => self.resize(viewport),
            HostEvent::PointerMove { x, y } => self.pointer_moved(Point::new(x, y)),
            HostEvent::PointerLeave => self.pointer_left(),
            HostEvent::Scroll { .. } | HostEvent::Visibility { .. } => {}
        }
    }

    fn update(&mut self, dt_ms: f64) {
        self.advance_timer(dt_ms);
        self.step();
    }

    fn render(&self, target: &mut dyn RenderTarget) {
        self.draw(target);
    }

    fn backing_store(&self) -> BackingStore {
        BackingStore::for_viewport(self.viewport)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/particles/field.rs"]
mod tests;

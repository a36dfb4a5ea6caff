use crate::foundation::core::Point;

/// Stable identity of a pooled particle: its arena slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub u32);

/// Per-frame force parameters shared by every particle of a field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dynamics {
    /// Pointer repulsion radius in CSS pixels.
    pub mouse_radius: f64,
    /// Easing factor for both homing and anchor transitions.
    pub transition_speed: f64,
}

/// One particle of the text field.
///
/// Position eases toward an anchor (`base`) that itself eases toward the sampled text
/// target, so a text change reforms gradually instead of snapping.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    id: ParticleId,
    /// Current drawn position.
    pub pos: Point,
    /// Sampled text target.
    pub target: Point,
    /// Eased anchor.
    pub base: Point,
    /// Repulsion weight, fixed at spawn.
    pub density: f64,
    /// Draw radius.
    pub size: f64,
}

impl Particle {
    /// Spawn at `pos` heading for `target`; the anchor starts on the target.
    pub fn new(id: ParticleId, pos: Point, target: Point, density: f64, size: f64) -> Self {
        Self {
            id,
            pos,
            target,
            base: target,
            density,
            size,
        }
    }

    /// Arena identity.
    pub fn id(&self) -> ParticleId {
        self.id
    }

    /// Advance one frame. `pointer == None` means no pointer influence.
    pub fn update(&mut self, pointer: Option<Point>, dynamics: Dynamics) {
        let repelled = pointer.is_some_and(|p| self.repel(p, dynamics.mouse_radius));
        if !repelled {
            self.pos.x -= (self.pos.x - self.base.x) * dynamics.transition_speed;
            self.pos.y -= (self.pos.y - self.base.y) * dynamics.transition_speed;
        }
        self.base.x += (self.target.x - self.base.x) * dynamics.transition_speed;
        self.base.y += (self.target.y - self.base.y) * dynamics.transition_speed;
    }

    /// Push away from `pointer` when inside `radius`. Returns whether the pointer is in range.
    fn repel(&mut self, pointer: Point, radius: f64) -> bool {
        let d = pointer - self.pos;
        let distance = d.hypot();
        if distance.is_nan() || distance >= radius {
            return false;
        }
        // Coincident pointer: no defined direction, hold position for this frame.
        if distance <= f64::EPSILON {
            return true;
        }
        let force = (radius - distance) / radius;
        let dir = d / distance;
        self.pos -= dir * force * self.density;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/particles/particle.rs"]
mod tests;

use std::collections::HashMap;

use crate::foundation::core::Point;
use crate::foundation::math::Rng64;
use crate::particles::particle::{Dynamics, Particle, ParticleId};

/// Counters describing one reconciliation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Active particles whose target was already in the new layout.
    pub kept: usize,
    /// Particles pulled from the dormant list and retargeted.
    pub recycled: usize,
    /// Newly allocated particles.
    pub created: usize,
    /// Active particles moved to the dormant list; some may be recycled in the same pass.
    pub retired: usize,
    /// Targets dropped by the pool cap.
    pub truncated: usize,
}

/// Spawn parameters for new particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnParams {
    /// Area in which new particles appear.
    pub width: f64,
    /// Area in which new particles appear.
    pub height: f64,
    /// Draw radius.
    pub size: f64,
    /// Repulsion weight range `[lo, hi)`.
    pub density: (f64, f64),
}

/// Arena-backed particle pool.
///
/// Particles are never freed: retired ones move to a dormant list and are retargeted when a
/// later layout needs them. Slot indices double as stable identities.
#[derive(Clone, Debug)]
pub struct ParticlePool {
    slots: Vec<Particle>,
    active: Vec<ParticleId>,
    dormant: Vec<ParticleId>,
    max_particles: usize,
    rng: Rng64,
}

type TargetKey = (i64, i64);

fn key(p: Point) -> TargetKey {
    (p.x.round() as i64, p.y.round() as i64)
}

impl ParticlePool {
    /// Empty pool holding at most `max_particles` active particles.
    pub fn new(max_particles: usize, seed: u64) -> Self {
        Self {
            slots: Vec::new(),
            active: Vec::new(),
            dormant: Vec::new(),
            max_particles,
            rng: Rng64::new(seed),
        }
    }

    /// Active particles in target scan order.
    pub fn active(&self) -> impl Iterator<Item = &Particle> {
        self.active.iter().map(|id| &self.slots[id.0 as usize])
    }

    /// Active identities in target scan order.
    pub fn active_ids(&self) -> &[ParticleId] {
        &self.active
    }

    /// Number of active particles.
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Number of dormant particles awaiting reuse.
    pub fn dormant_len(&self) -> usize {
        self.dormant.len()
    }

    /// Total particles ever allocated.
    pub fn allocated(&self) -> usize {
        self.slots.len()
    }

    /// Look up a particle by identity, active or dormant.
    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.slots.get(id.0 as usize)
    }

    /// Match a new target layout against the pool.
    ///
    /// Active particles already sitting on a target of the new layout keep it. Remaining
    /// active particles retire to the dormant list, then unmatched targets take dormant
    /// particles before any new ones are created. Duplicate targets collapse to one.
    #[tracing::instrument(level = "debug", skip_all, fields(targets = targets.len()))]
    pub fn reconcile(&mut self, targets: &[Point], spawn: SpawnParams) -> Reconciliation {
        let mut stats = Reconciliation::default();
        let mut wanted: Vec<Point> = Vec::with_capacity(targets.len().min(self.max_particles));
        let mut index: HashMap<TargetKey, usize> = HashMap::with_capacity(targets.len());
        for &t in targets {
            if index.contains_key(&key(t)) {
                continue;
            }
            if wanted.len() == self.max_particles {
                stats.truncated += 1;
                continue;
            }
            index.insert(key(t), wanted.len());
            wanted.push(t);
        }
        if stats.truncated > 0 {
            tracing::debug!(
                cap = self.max_particles,
                dropped = stats.truncated,
                "particle layout truncated to pool cap"
            );
        }

        let mut claimed: Vec<Option<ParticleId>> = vec![None; wanted.len()];
        for id in std::mem::take(&mut self.active) {
            let target = self.slots[id.0 as usize].target;
            match index.get(&key(target)) {
                Some(&i) if claimed[i].is_none() => {
                    claimed[i] = Some(id);
                    stats.kept += 1;
                }
                _ => {
                    self.dormant.push(id);
                    stats.retired += 1;
                }
            }
        }

        let mut active = Vec::with_capacity(wanted.len());
        for (i, t) in wanted.iter().copied().enumerate() {
            let id = match claimed[i] {
                Some(id) => id,
                None => match self.dormant.pop() {
                    Some(id) => {
                        self.slots[id.0 as usize].target = t;
                        stats.recycled += 1;
                        id
                    }
                    None => {
                        stats.created += 1;
                        self.spawn(t, spawn)
                    }
                },
            };
            active.push(id);
        }
        self.active = active;

        tracing::debug!(
            kept = stats.kept,
            recycled = stats.recycled,
            created = stats.created,
            dormant = self.dormant.len(),
            "particle pool reconciled"
        );
        stats
    }

    fn spawn(&mut self, target: Point, spawn: SpawnParams) -> ParticleId {
        let id = ParticleId(self.slots.len() as u32);
        let pos = Point::new(
            self.rng.range(0.0, spawn.width.max(0.0)),
            self.rng.range(0.0, spawn.height.max(0.0)),
        );
        let density = self.rng.range(spawn.density.0, spawn.density.1);
        self.slots
            .push(Particle::new(id, pos, target, density, spawn.size));
        id
    }

    /// Advance every active particle one frame.
    pub fn update(&mut self, pointer: Option<Point>, dynamics: Dynamics) {
        for id in &self.active {
            self.slots[id.0 as usize].update(pointer, dynamics);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/particles/pool.rs"]
mod tests;

//! Particle System
//!
//! Jetpack exhaust in two populations:
//! - **Trail** puffs fall out of the jetpack while thrust is held. They move
//!   a fixed step per frame (not scaled by delta time).
//! - **Spent** casings are trail puffs that hit the floor. They lie still in
//!   world space, which on screen means drifting left at the scroll speed,
//!   until they leave the left edge.
//!
//! Culling is a retain pass over each population, so every particle that
//! crosses a boundary in a frame is converted or removed exactly once.

use macroquad::math::{vec2, Vec2};
use rand::Rng;

/// Horizontal drift of a freshly spawned trail puff
///
/// Chosen with equal weight (1/3 each) from [`Drift::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drift {
    Left,
    Right,
    None,
}

impl Drift {
    pub const ALL: [Drift; 3] = [Drift::Left, Drift::Right, Drift::None];

    /// One uniform draw over the variants
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Horizontal step for a given drift magnitude
    pub fn step(self, speed: f32) -> f32 {
        match self {
            Drift::Left => -speed,
            Drift::Right => speed,
            Drift::None => 0.0,
        }
    }
}

/// Which population a particle belongs to (also selects its sprite)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Trail,
    Spent,
}

/// A single particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub kind: ParticleKind,
    /// Screen position
    pub position: Vec2,
    /// Trail: pixels per frame. Spent: pixels per second.
    pub velocity: Vec2,
}

impl Particle {
    pub fn trail(position: Vec2, drift: Drift, drift_speed: f32, fall_step: f32) -> Self {
        Self {
            kind: ParticleKind::Trail,
            position,
            velocity: vec2(drift.step(drift_speed), fall_step),
        }
    }

    /// Turn a landed trail puff into a casing that scrolls with the floor
    pub fn land(self, scroll_speed: f32) -> Self {
        Self {
            kind: ParticleKind::Spent,
            position: self.position,
            velocity: vec2(-scroll_speed, 0.0),
        }
    }
}

/// Both particle populations owned by the player
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    pub trail: Vec<Particle>,
    pub spent: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn_trail(&mut self, particle: Particle) {
        self.trail.push(particle);
    }

    /// Advance both populations by one frame.
    ///
    /// Trail puffs below `ground_y` become spent casings moving at
    /// `-scroll_speed`; the rest step by their per-frame velocity. Casings
    /// fully past the left edge (x < -`spent_width`) are dropped; the rest
    /// move by velocity * `delta_time`. Casings that land this frame also
    /// move this frame.
    pub fn advance(&mut self, ground_y: f32, scroll_speed: f32, spent_width: f32, delta_time: f32) {
        let spent = &mut self.spent;
        self.trail.retain_mut(|p| {
            if p.position.y > ground_y {
                spent.push(p.land(scroll_speed));
                false
            } else {
                p.position += p.velocity;
                true
            }
        });

        self.spent.retain_mut(|p| {
            if p.position.x < -spent_width {
                false
            } else {
                p.position += p.velocity * delta_time;
                true
            }
        });
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.trail.is_empty() && self.spent.is_empty()
    }

    /// Kill all particles
    pub fn clear(&mut self) {
        self.trail.clear();
        self.spent.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const GROUND: f32 = 470.0;

    #[test]
    fn test_drift_steps() {
        assert_eq!(Drift::Left.step(1.5), -1.5);
        assert_eq!(Drift::Right.step(1.5), 1.5);
        assert_eq!(Drift::None.step(1.5), 0.0);
    }

    #[test]
    fn test_drift_covers_all_variants() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [0usize; 3];
        for _ in 0..3000 {
            let drift = Drift::sample(&mut rng);
            let idx = Drift::ALL.iter().position(|d| *d == drift).unwrap();
            seen[idx] += 1;
        }
        // Uniform weights: each variant should land near 1000
        for count in seen {
            assert!(count > 850 && count < 1150, "skewed drift distribution: {:?}", seen);
        }
    }

    #[test]
    fn test_trail_lands_exactly_once() {
        let mut system = ParticleSystem::new();
        system.spawn_trail(Particle::trail(vec2(150.0, 460.0), Drift::None, 1.5, 10.0));

        let mut frames = 0;
        while !system.trail.is_empty() {
            system.advance(GROUND, 400.0, 16.0, 0.0);
            frames += 1;
            assert!(frames < 10, "trail particle never landed");
        }

        assert_eq!(system.spent.len(), 1);
        assert_eq!(system.spent[0].kind, ParticleKind::Spent);
        assert_eq!(system.spent[0].velocity, vec2(-400.0, 0.0));

        // Further frames never duplicate the casing
        for _ in 0..5 {
            system.advance(GROUND, 400.0, 16.0, 0.0);
        }
        assert_eq!(system.spent.len(), 1);
    }

    #[test]
    fn test_adjacent_landings_all_convert() {
        // Consecutive puffs all below ground in the same frame: none skipped
        let mut system = ParticleSystem::new();
        for x in [10.0, 20.0, 30.0] {
            system.spawn_trail(Particle::trail(vec2(x, 480.0), Drift::None, 1.5, 10.0));
        }
        system.spawn_trail(Particle::trail(vec2(40.0, 400.0), Drift::Left, 1.5, 10.0));

        system.advance(GROUND, 100.0, 16.0, 0.0);

        assert_eq!(system.spent.len(), 3);
        assert_eq!(system.trail.len(), 1);
        assert_eq!(system.trail[0].position, vec2(38.5, 410.0));
    }

    #[test]
    fn test_trail_steps_ignore_delta_time() {
        let mut system = ParticleSystem::new();
        system.spawn_trail(Particle::trail(vec2(0.0, 100.0), Drift::Right, 1.5, 10.0));
        system.advance(GROUND, 0.0, 16.0, 0.5);
        assert_eq!(system.trail[0].position, vec2(1.5, 110.0));
    }

    #[test]
    fn test_spent_scrolls_and_expires() {
        let mut system = ParticleSystem::new();
        system.spent.push(Particle {
            kind: ParticleKind::Spent,
            position: vec2(0.0, 470.0),
            velocity: vec2(-100.0, 0.0),
        });
        system.spent.push(Particle {
            kind: ParticleKind::Spent,
            position: vec2(-20.0, 470.0),
            velocity: vec2(-100.0, 0.0),
        });
        system.spent.push(Particle {
            kind: ParticleKind::Spent,
            position: vec2(-30.0, 470.0),
            velocity: vec2(-100.0, 0.0),
        });

        system.advance(GROUND, 100.0, 16.0, 0.1);

        // Both off-screen casings removed, including the last element
        assert_eq!(system.spent.len(), 1);
        assert!((system.spent[0].position.x + 10.0).abs() < 0.001);
    }

    #[test]
    fn test_clear() {
        let mut system = ParticleSystem::new();
        system.spawn_trail(Particle::trail(Vec2::ZERO, Drift::None, 1.5, 10.0));
        system.spent.push(Particle::trail(Vec2::ZERO, Drift::None, 1.5, 10.0).land(1.0));
        assert_eq!(system.trail.len() + system.spent.len(), 2);
        system.clear();
        assert!(system.is_empty());
    }
}

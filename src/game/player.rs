//! Player
//!
//! The jetpack pilot. Thrust is "hover" style: every frame the key is held,
//! vertical velocity is forced to the jump velocity instead of accumulating.
//! Horizontal position is driven by the session (entry glide), not by
//! velocity.

use macroquad::math::{vec2, Rect, Vec2};
use rand::Rng;

use super::event::{Events, ThrustEvent};
use super::particles::{Drift, Particle, ParticleSystem};
use super::sprites::{PlayerSprite, SpriteMetrics};
use crate::config::{GameConfig, ParticleConfig};

#[derive(Debug, Clone)]
pub struct Player {
    pub sprite: PlayerSprite,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Feet on the floor line. Tracked for completeness; no rule reads it.
    pub grounded: bool,
    /// Thrust held this frame (shows the flame)
    pub thrusting: bool,
    /// Seconds of thrust accumulated toward the next trail puff
    pub particle_timer: f32,
    pub particles: ParticleSystem,

    alive_size: Vec2,
    dead_size: Vec2,
    jump_velocity: f32,
    ground_y: f32,
    ceiling_y: f32,
    spawn: ParticleConfig,
}

impl Player {
    /// Create the player off-screen left, resting on the floor
    pub fn new(config: &GameConfig, metrics: &SpriteMetrics) -> Self {
        let mut player = Self {
            sprite: PlayerSprite::Alive,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            grounded: false,
            thrusting: false,
            particle_timer: 0.0,
            particles: ParticleSystem::new(),
            alive_size: metrics.player_alive,
            dead_size: metrics.player_dead,
            jump_velocity: config.player.jump_velocity,
            ground_y: config.world.ground_y,
            ceiling_y: config.world.ceiling_y,
            spawn: config.particles.clone(),
        };
        player.reset();
        player
    }

    /// Size of the current sprite
    pub fn size(&self) -> Vec2 {
        match self.sprite {
            PlayerSprite::Alive => self.alive_size,
            PlayerSprite::Dead => self.dead_size,
        }
    }

    /// Collision rectangle, from the current position and sprite
    pub fn rect(&self) -> Rect {
        let size = self.size();
        Rect::new(self.position.x, self.position.y, size.x, size.y)
    }

    /// Move fully off-screen left, standing on the floor, at rest
    pub fn reset(&mut self) {
        self.position = vec2(-self.alive_size.x, self.ground_y - self.alive_size.y);
        self.velocity = Vec2::ZERO;
    }

    pub fn kill(&mut self) {
        self.sprite = PlayerSprite::Dead;
    }

    pub fn revive(&mut self) {
        self.sprite = PlayerSprite::Alive;
    }

    /// Fall under gravity until the feet reach the floor line
    pub fn apply_gravity(&mut self, gravity: f32, delta_time: f32) {
        let height = self.size().y;
        if self.position.y + height < self.ground_y {
            self.velocity.y += gravity * delta_time;
            self.grounded = false;
        } else {
            self.velocity.y = 0.0;
            self.position.y = self.ground_y - height;
            self.grounded = true;
        }
    }

    /// Per-frame thrust, particle spawning and integration
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        thrust_held: bool,
        game_over: bool,
        delta_time: f32,
        rng: &mut R,
        events: &mut Events,
    ) {
        if game_over {
            self.particles.clear();
        }

        if thrust_held && !game_over {
            self.velocity.y = self.jump_velocity;
            self.thrusting = true;

            self.particle_timer += delta_time;
            if self.particle_timer >= self.spawn.spawn_interval {
                let origin = self.position + Vec2::from(self.spawn.spawn_offset);
                let drift = Drift::sample(rng);
                self.particles.spawn_trail(Particle::trail(
                    origin,
                    drift,
                    self.spawn.drift_speed,
                    self.spawn.fall_step,
                ));
                events.thrust.send(ThrustEvent { position: origin });
                self.particle_timer = 0.0;
            }
        } else {
            self.thrusting = false;
            // Saturate so the first held frame puffs immediately
            self.particle_timer = self.spawn.spawn_interval;
        }

        self.position += self.velocity * delta_time;
        self.position.y = self.position.y.max(self.ceiling_y);
    }

    /// Advance exhaust and casings by one frame
    pub fn advance_particles(&mut self, scroll_speed: f32, spent_width: f32, delta_time: f32) {
        self.particles
            .advance(self.spawn.ground_y, scroll_speed, spent_width, delta_time);
    }
}

//! Game session
//!
//! Owns every entity and the score, and runs the per-frame state machine:
//!
//! ```text
//! Menu --click Play--> Play(running) --hit zapper--> Play(game over)
//!                          ^                               |
//!                          +------ R key / Play Again -----+
//! ```
//!
//! Game over is a flag on the Play screen rather than a screen of its own:
//! the world keeps animating (and the scroll winds down) behind the banner.

use macroquad::math::{vec2, Vec2};
use rand::Rng;

use super::background::ParallaxBackground;
use super::event::{CrashEvent, Events, RestartEvent, RestartTrigger, StartEvent};
use super::obstacle::Obstacle;
use super::player::Player;
use super::sprites::SpriteMetrics;
use crate::config::GameConfig;
use crate::input::FrameInput;
use crate::ui::Button;

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Menu,
    Play,
}

pub struct GameSession {
    pub screen: Screen,
    /// Set on collision, cleared on restart
    pub game_over: bool,
    /// Current run's score
    pub distance: u32,
    /// Best score this process has seen (not persisted)
    pub best_distance: u32,
    pub distance_timer: f32,
    /// Seconds per distance point; shortens once the run is live
    pub distance_interval: f32,

    pub player: Player,
    pub obstacle: Obstacle,
    pub background: ParallaxBackground,
    pub play_button: Button,
    pub play_again_button: Button,

    /// Filled during `update`, drained by the frame loop
    pub events: Events,

    config: GameConfig,
    metrics: SpriteMetrics,
}

impl GameSession {
    pub fn new<R: Rng + ?Sized>(config: GameConfig, metrics: SpriteMetrics, rng: &mut R) -> Self {
        let player = Player::new(&config, &metrics);
        let obstacle = Obstacle::new(&config, &metrics, rng);
        let background =
            ParallaxBackground::new(metrics.background.x, config.world.start_scroll_speed);
        let play_button = Button::new(Vec2::from(config.ui.play_button), metrics.play_button);
        let play_again_button =
            Button::new(Vec2::from(config.ui.play_again_button), metrics.play_again_button);

        Self {
            screen: Screen::Menu,
            game_over: false,
            distance: 0,
            best_distance: 0,
            distance_timer: 0.0,
            distance_interval: config.score.warmup_interval,
            player,
            obstacle,
            background,
            play_button,
            play_again_button,
            events: Events::new(),
            config,
            metrics,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn metrics(&self) -> &SpriteMetrics {
        &self.metrics
    }

    /// Advance one frame
    pub fn update<R: Rng + ?Sized>(&mut self, input: &FrameInput, rng: &mut R) {
        match self.screen {
            Screen::Menu => self.update_menu(input),
            Screen::Play => self.update_play(input, rng),
        }
    }

    fn update_menu(&mut self, input: &FrameInput) {
        if self.play_button.clicked(input.click) {
            self.screen = Screen::Play;
            self.events.start.send(StartEvent);
        }
    }

    fn update_play<R: Rng + ?Sized>(&mut self, input: &FrameInput, rng: &mut R) {
        let dt = input.dt;
        self.distance_timer += dt;

        self.update_entry_glide(dt);

        if !self.game_over && self.distance_timer >= self.distance_interval {
            self.distance += 1;
            self.distance_timer = 0.0;
        }

        if !self.game_over {
            self.obstacle.integrate(dt);
        }
        if self.obstacle.is_off_screen() {
            let lane = self.obstacle.respawn(rng);
            log::debug!("Zapper respawned in lane {}", lane);
        }

        self.player.apply_gravity(self.config.world.gravity, dt);

        if self.player.rect().overlaps(&self.obstacle.rect()) {
            self.crash();
        }

        if self.game_over {
            self.background.decay(self.config.world.scroll_decay);

            let trigger = if input.restart_pressed {
                Some(RestartTrigger::Key)
            } else if self.play_again_button.clicked(input.click) {
                Some(RestartTrigger::Button)
            } else {
                None
            };
            if let Some(trigger) = trigger {
                self.restart(trigger, rng);
            }
        }

        self.player
            .update(input.thrust_held, self.game_over, dt, rng, &mut self.events);
        self.background.update(dt);
        self.obstacle.animate(dt);
        self.player.advance_particles(
            self.background.speed,
            self.metrics.spent_particle.x,
            dt,
        );
    }

    /// Glide in from the left; once at rest the run goes live
    fn update_entry_glide(&mut self, dt: f32) {
        let rest_x = self.config.player.rest_x;
        if self.player.position.x < rest_x {
            self.player.position.x += self.config.player.entry_speed * dt;
        } else if !self.game_over {
            self.player.position.x = rest_x;
            self.background.speed = self.config.world.running_scroll_speed;
            self.obstacle.velocity = vec2(-self.background.speed, 0.0);
            self.distance_interval = self.config.score.running_interval;
        }
    }

    /// Enter (or stay in) game over
    fn crash(&mut self) {
        let first_hit = !self.game_over;
        self.game_over = true;
        self.player.kill();

        let new_best = self.distance > self.best_distance;
        if new_best {
            self.best_distance = self.distance;
        }

        if first_hit {
            self.events.crash.send(CrashEvent {
                distance: self.distance,
                best_distance: self.best_distance,
                new_best,
            });
        }
    }

    /// Start a fresh run from the game-over screen
    fn restart<R: Rng + ?Sized>(&mut self, trigger: RestartTrigger, rng: &mut R) {
        self.player.reset();
        self.player.revive();
        self.player.particles.clear();
        let lane = self.obstacle.respawn(rng);
        self.obstacle.velocity = vec2(-self.background.speed, 0.0);
        self.distance = 0;
        self.game_over = false;

        self.events.restart.send(RestartEvent { trigger, lane });
    }
}

//! Game tuning and asset layout
//!
//! Every gameplay constant and asset path lives in [`GameConfig`]. The shipped
//! values are `assets/tuning.ron`, embedded into the binary at compile time,
//! so there is nothing to read from disk at runtime besides the assets.
//!
//! `GameConfig::default()` mirrors the embedded file exactly; tests build
//! sessions from it without touching the parser.

use serde::{Deserialize, Serialize};

/// Tuning file baked into the binary
const EMBEDDED_TUNING: &str = include_str!("../assets/tuning.ron");

/// Error type for tuning parsing/validation
#[derive(Debug)]
pub enum ConfigError {
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ParseError(e) => write!(f, "Tuning parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Tuning validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Window and frame pacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
    /// Frame limiter target (0 = unlocked)
    pub target_fps: u32,
    /// Longest frame delta fed to the simulation (seconds)
    pub max_frame_time: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Jetpack joy".to_string(),
            width: 860,
            height: 540,
            target_fps: 60,
            max_frame_time: 0.1,
        }
    }
}

/// World-wide physics and scrolling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Downward acceleration (pixels/s²)
    pub gravity: f32,
    /// Screen y of the floor line the player's feet rest on
    pub ground_y: f32,
    /// Highest screen y the player may reach
    pub ceiling_y: f32,
    /// Background scroll speed during the entry glide (pixels/s)
    pub start_scroll_speed: f32,
    /// Background and obstacle scroll speed once the run is live (pixels/s)
    pub running_scroll_speed: f32,
    /// Scroll speed lost per frame while game over
    pub scroll_decay: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: 500.0,
            ground_y: 470.0,
            ceiling_y: 60.0,
            start_scroll_speed: 100.0,
            running_scroll_speed: 400.0,
            scroll_decay: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// On-screen x the player glides to and stays at
    pub rest_x: f32,
    /// Entry glide speed (pixels/s)
    pub entry_speed: f32,
    /// Vertical velocity forced every frame thrust is held (negative = up)
    pub jump_velocity: f32,
    /// Flame sprite offset from the player position
    pub flame_offset: [f32; 2],
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            rest_x: 150.0,
            entry_speed: 100.0,
            jump_velocity: -150.0,
            flame_offset: [0.0, 50.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleConfig {
    /// Seconds of held thrust between trail spawns
    pub spawn_interval: f32,
    /// Trail spawn point relative to the player position
    pub spawn_offset: [f32; 2],
    /// Horizontal step of a drifting trail particle (pixels/frame)
    pub drift_speed: f32,
    /// Downward step of a trail particle (pixels/frame)
    pub fall_step: f32,
    /// Draw scale of trail particles
    pub trail_scale: f32,
    /// Trail particles below this y land and become spent casings
    pub ground_y: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            spawn_interval: 0.1,
            spawn_offset: [15.0, 50.0],
            drift_speed: 1.5,
            fall_step: 10.0,
            trail_scale: 2.0,
            ground_y: 470.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleConfig {
    /// Spawn y of the upper and lower lanes
    pub lanes: [f32; 2],
    /// Once x drops below this the zapper respawns at the right edge
    pub despawn_x: f32,
    /// Seconds per animation frame
    pub frame_interval: f32,
    /// Draw/collision scale applied to every frame texture
    pub frame_scale: f32,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            lanes: [120.0, 300.0],
            despawn_x: -100.0,
            frame_interval: 0.1,
            frame_scale: 1.5,
        }
    }
}

/// Distance ticking cadence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreConfig {
    /// Seconds per distance point before the run is live
    pub warmup_interval: f32,
    /// Seconds per distance point once the run is live
    pub running_interval: f32,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            warmup_interval: 0.3,
            running_interval: 0.1,
        }
    }
}

/// Menu/HUD placement (top-left corners)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    pub play_button: [f32; 2],
    pub play_again_button: [f32; 2],
    /// Credit line shown on the menu
    pub credit: String,
    /// Credit offset from the bottom-left corner of the window
    pub credit_inset: [f32; 2],
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            play_button: [330.0, 300.0],
            play_again_button: [400.0, 285.0],
            credit: "created by aji mustofa @pepega90".to_string(),
            credit_inset: [5.0, 45.0],
        }
    }
}

/// Relative paths of every asset the game loads at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPaths {
    pub player_fly: String,
    pub player_dead: String,
    pub background: String,
    pub fly_fire: String,
    pub trail_particle: String,
    pub spent_particle: String,
    pub play_button: String,
    pub play_again_button: String,
    /// Zapper frames are `<zapper_dir>/<zapper_prefix><n>.png`
    pub zapper_dir: String,
    pub zapper_prefix: String,
    pub zapper_first: u32,
    pub zapper_count: u32,
    pub fly_sound: String,
    pub font: String,
}

impl AssetPaths {
    /// Paths of the zapper animation frames, in playback order
    pub fn zapper_frames(&self) -> Vec<String> {
        let dir = self.zapper_dir.trim_end_matches('/');
        (self.zapper_first..self.zapper_first + self.zapper_count)
            .map(|n| format!("{}/{}{}.png", dir, self.zapper_prefix, n))
            .collect()
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            player_fly: "assets/sprites/PlayerFly.png".to_string(),
            player_dead: "assets/sprites/skins/PlayerDead_Blue.png".to_string(),
            background: "assets/sprites/BackdropMain.png".to_string(),
            fly_fire: "assets/sprites/FlyFire.png".to_string(),
            trail_particle: "assets/sprites/Bullet.png".to_string(),
            spent_particle: "assets/sprites/BulletCollision.png".to_string(),
            play_button: "assets/sprites/ButtonPlayGame.png".to_string(),
            play_again_button: "assets/sprites/ButtonPlayAgain.png".to_string(),
            zapper_dir: "assets/sprites".to_string(),
            zapper_prefix: "Zapper".to_string(),
            zapper_first: 1,
            zapper_count: 4,
            fly_sound: "assets/sounds/FlyTest.wav".to_string(),
            font: "assets/fonts/New Athletic M54.ttf".to_string(),
        }
    }
}

/// Complete game tuning
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub world: WorldConfig,
    pub player: PlayerConfig,
    pub particles: ParticleConfig,
    pub obstacle: ObstacleConfig,
    pub score: ScoreConfig,
    pub ui: UiConfig,
    pub assets: AssetPaths,
}

impl GameConfig {
    /// Parse the tuning baked into the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_ron(EMBEDDED_TUNING)
    }

    /// Parse and validate a tuning document
    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Screen size in pixels
    pub fn screen_width(&self) -> f32 {
        self.window.width as f32
    }

    pub fn screen_height(&self) -> f32 {
        self.window.height as f32
    }

    /// Top-left of the menu credit line
    pub fn credit_position(&self) -> [f32; 2] {
        let [x, from_bottom] = self.ui.credit_inset;
        [x, self.screen_height() - from_bottom]
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("particles.spawn_interval", self.particles.spawn_interval),
            ("obstacle.frame_interval", self.obstacle.frame_interval),
            ("obstacle.frame_scale", self.obstacle.frame_scale),
            ("score.warmup_interval", self.score.warmup_interval),
            ("score.running_interval", self.score.running_interval),
            ("window.max_frame_time", self.window.max_frame_time),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.world.ceiling_y >= self.world.ground_y {
            return Err(ConfigError::ValidationError(format!(
                "world.ceiling_y ({}) must be above world.ground_y ({})",
                self.world.ceiling_y, self.world.ground_y
            )));
        }
        if self.assets.zapper_count == 0 {
            return Err(ConfigError::ValidationError(
                "assets.zapper_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_matches_default() {
        let embedded = GameConfig::embedded().expect("embedded tuning should parse");
        assert_eq!(embedded, GameConfig::default());
    }

    #[test]
    fn test_zapper_frame_paths() {
        let paths = AssetPaths::default().zapper_frames();
        assert_eq!(
            paths,
            vec![
                "assets/sprites/Zapper1.png",
                "assets/sprites/Zapper2.png",
                "assets/sprites/Zapper3.png",
                "assets/sprites/Zapper4.png",
            ]
        );
    }

    #[test]
    fn test_zapper_dir_trailing_slash() {
        let mut assets = AssetPaths::default();
        assets.zapper_dir = "assets/sprites/".to_string();
        assets.zapper_count = 1;
        assert_eq!(assets.zapper_frames(), vec!["assets/sprites/Zapper1.png"]);
    }

    #[test]
    fn test_credit_anchored_to_bottom() {
        let mut config = GameConfig::default();
        assert_eq!(config.credit_position(), [5.0, 495.0]);
        assert_eq!(config.ui.credit, "created by aji mustofa @pepega90");

        config.window.height = 600;
        assert_eq!(config.credit_position(), [5.0, 555.0]);
    }

    #[test]
    fn test_rejects_zero_interval() {
        let mut config = GameConfig::default();
        config.particles.spawn_interval = 0.0;
        let source = ron::ser::to_string(&config).unwrap();
        let err = GameConfig::from_ron(&source).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("particles.spawn_interval"));
    }

    #[test]
    fn test_rejects_inverted_ceiling() {
        let mut config = GameConfig::default();
        config.world.ceiling_y = 500.0;
        let source = ron::ser::to_string(&config).unwrap();
        assert!(matches!(
            GameConfig::from_ron(&source),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_parse_error_reported() {
        let err = GameConfig::from_ron("(window: ())").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}

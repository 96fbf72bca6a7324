//! Asset registry
//!
//! Every texture, the jetpack sound and the HUD font are loaded once at
//! startup and owned here. Loading is fail-fast: the first missing or
//! undecodable file aborts startup with an [`AssetError`] naming its path.

use macroquad::audio::{load_sound, Sound};
use macroquad::prelude::*;

use crate::config::{AssetPaths, GameConfig};
use crate::game::SpriteMetrics;

/// Error type for startup asset loading
#[derive(Debug)]
pub enum AssetError {
    Texture { path: String, reason: String },
    Sound { path: String, reason: String },
    Font { path: String, reason: String },
    /// The zapper animation resolved to zero frames
    NoFrames,
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Texture { path, reason } => {
                write!(f, "Failed to load texture {}: {}", path, reason)
            }
            AssetError::Sound { path, reason } => {
                write!(f, "Failed to load sound {}: {}", path, reason)
            }
            AssetError::Font { path, reason } => {
                write!(f, "Failed to load font {}: {}", path, reason)
            }
            AssetError::NoFrames => write!(f, "Zapper animation has no frames"),
        }
    }
}

impl std::error::Error for AssetError {}

pub struct AssetRegistry {
    pub player_fly: Texture2D,
    pub player_dead: Texture2D,
    pub background: Texture2D,
    pub fly_fire: Texture2D,
    pub trail_particle: Texture2D,
    pub spent_particle: Texture2D,
    pub play_button: Texture2D,
    pub play_again_button: Texture2D,
    /// Zapper animation, in playback order
    pub zapper_frames: Vec<Texture2D>,
    pub fly_sound: Sound,
    pub font: Font,
}

impl AssetRegistry {
    /// Load everything listed in `paths`
    pub async fn load(paths: &AssetPaths) -> Result<Self, AssetError> {
        let mut zapper_frames = Vec::new();
        for path in paths.zapper_frames() {
            zapper_frames.push(texture(&path).await?);
        }
        if zapper_frames.is_empty() {
            return Err(AssetError::NoFrames);
        }

        let fly_sound = load_sound(&paths.fly_sound)
            .await
            .map_err(|e| AssetError::Sound {
                path: paths.fly_sound.clone(),
                reason: e.to_string(),
            })?;

        let font = load_ttf_font(&paths.font)
            .await
            .map_err(|e| AssetError::Font {
                path: paths.font.clone(),
                reason: e.to_string(),
            })?;

        let registry = Self {
            player_fly: texture(&paths.player_fly).await?,
            player_dead: texture(&paths.player_dead).await?,
            background: texture(&paths.background).await?,
            fly_fire: texture(&paths.fly_fire).await?,
            trail_particle: texture(&paths.trail_particle).await?,
            spent_particle: texture(&paths.spent_particle).await?,
            play_button: texture(&paths.play_button).await?,
            play_again_button: texture(&paths.play_again_button).await?,
            zapper_frames,
            fly_sound,
            font,
        };

        log::info!(
            "Loaded {} textures ({} zapper frames), 1 sound, 1 font",
            registry.texture_count(),
            registry.zapper_frames.len()
        );
        Ok(registry)
    }

    pub fn texture_count(&self) -> usize {
        8 + self.zapper_frames.len()
    }

    /// Sprite sizes the simulation needs, in draw units
    pub fn sprite_metrics(&self, config: &GameConfig) -> SpriteMetrics {
        let scale = config.obstacle.frame_scale;
        SpriteMetrics {
            player_alive: self.player_fly.size(),
            player_dead: self.player_dead.size(),
            spent_particle: self.spent_particle.size(),
            zapper_frames: self
                .zapper_frames
                .iter()
                .map(|frame| frame.size() * scale)
                .collect(),
            background: vec2(config.screen_width(), config.screen_height()),
            play_button: self.play_button.size(),
            play_again_button: self.play_again_button.size(),
        }
    }
}

async fn texture(path: &str) -> Result<Texture2D, AssetError> {
    let texture = load_texture(path).await.map_err(|e| AssetError::Texture {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    texture.set_filter(FilterMode::Linear);
    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_names_path() {
        let err = AssetError::Texture {
            path: "assets/sprites/Zapper3.png".to_string(),
            reason: "file not found".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("assets/sprites/Zapper3.png"));
        assert!(message.contains("file not found"));

        let err = AssetError::Font {
            path: "assets/fonts/New Athletic M54.ttf".to_string(),
            reason: "bad table".to_string(),
        };
        assert!(err.to_string().starts_with("Failed to load font"));
    }
}

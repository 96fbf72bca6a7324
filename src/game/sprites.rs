//! Sprite sizes and selectors
//!
//! The simulation never holds texture handles. It only needs to know how big
//! each sprite is (for collision rectangles and off-screen tests) and which
//! variant to show; the renderer maps those selectors back to textures in the
//! asset registry.

use macroquad::math::Vec2;

/// Which player sprite is current
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerSprite {
    #[default]
    Alive,
    Dead,
}

/// Draw sizes of every sprite the simulation reasons about
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteMetrics {
    pub player_alive: Vec2,
    pub player_dead: Vec2,
    pub spent_particle: Vec2,
    /// Zapper frames, already scaled to their draw size
    pub zapper_frames: Vec<Vec2>,
    /// Background, stretched to the window
    pub background: Vec2,
    pub play_button: Vec2,
    pub play_again_button: Vec2,
}

impl SpriteMetrics {
    /// Uniform sizes, for tests that don't care about the artwork
    #[cfg(test)]
    pub fn uniform(sprite: Vec2, frames: usize, screen: Vec2) -> Self {
        Self {
            player_alive: sprite,
            player_dead: sprite,
            spent_particle: sprite,
            zapper_frames: vec![sprite; frames.max(1)],
            background: screen,
            play_button: Vec2::new(200.0, 60.0),
            play_again_button: Vec2::new(200.0, 60.0),
        }
    }
}

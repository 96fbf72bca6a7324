//! Game Renderer
//!
//! Draws the session with the textures in the asset registry. Read-only:
//! every bit of simulation, particles included, has already run in
//! `GameSession::update` by the time a frame is drawn.

use macroquad::prelude::*;

use super::particles::Particle;
use super::session::{GameSession, Screen};
use super::sprites::PlayerSprite;
use crate::assets::AssetRegistry;
use crate::ui::{draw_label, Button};

const ORANGE_TITLE: Color = Color::new(1.0, 0.63, 0.0, 1.0);

/// Draw the whole frame for the active screen
pub fn draw_frame(session: &GameSession, assets: &AssetRegistry) {
    match session.screen {
        Screen::Menu => draw_menu(session, assets),
        Screen::Play => draw_play(session, assets),
    }
}

fn draw_menu(session: &GameSession, assets: &AssetRegistry) {
    let font = Some(&assets.font);
    draw_sized(&assets.background, Vec2::ZERO, session.metrics().background);
    draw_label("Jetpack", 370.0, 150.0, 50, WHITE, font);
    draw_label("POGRIDE", 360.0, 190.0, 70, ORANGE_TITLE, font);

    let config = session.config();
    let [x, y] = config.credit_position();
    draw_label(&config.ui.credit, x, y, 30, YELLOW, font);

    draw_button(&session.play_button, &assets.play_button);
}

fn draw_play(session: &GameSession, assets: &AssetRegistry) {
    let background_size = session.metrics().background;
    for x in session.background.tile_positions() {
        draw_sized(&assets.background, vec2(x, 0.0), background_size);
    }

    draw_player(session, assets);

    let zapper = &session.obstacle;
    if let Some(frame) = assets.zapper_frames.get(zapper.frame) {
        draw_sized(frame, zapper.position, zapper.size());
    }

    draw_hud(session, assets);
}

/// Flame, exhaust, casings, then the pilot on top
fn draw_player(session: &GameSession, assets: &AssetRegistry) {
    let player = &session.player;
    let config = session.config();

    if player.thrusting {
        let flame = player.position + Vec2::from(config.player.flame_offset);
        draw_texture(&assets.fly_fire, flame.x, flame.y, WHITE);
    }

    let trail_size = assets.trail_particle.size() * config.particles.trail_scale;
    for particle in &player.particles.trail {
        draw_particle(&assets.trail_particle, particle, trail_size);
    }
    let spent_size = session.metrics().spent_particle;
    for particle in &player.particles.spent {
        draw_particle(&assets.spent_particle, particle, spent_size);
    }

    let texture = match player.sprite {
        PlayerSprite::Alive => &assets.player_fly,
        PlayerSprite::Dead => &assets.player_dead,
    };
    draw_sized(texture, player.position, player.size());
}

fn draw_hud(session: &GameSession, assets: &AssetRegistry) {
    let font = Some(&assets.font);

    if session.game_over {
        draw_label("You Flew", 570.0, 180.0, 50, WHITE, font);
        draw_label(&format!("{}M", session.distance), 610.0, 230.0, 60, YELLOW, font);
        draw_button(&session.play_again_button, &assets.play_again_button);
    }

    draw_label(&format!("Distance {}", session.distance), 20.0, 22.0, 40, WHITE, font);
    draw_label(&format!("Best {}", session.best_distance), 20.0, 57.0, 35, WHITE, font);
}

fn draw_particle(texture: &Texture2D, particle: &Particle, size: Vec2) {
    draw_sized(texture, particle.position, size);
}

fn draw_button(button: &Button, texture: &Texture2D) {
    draw_sized(texture, vec2(button.rect.x, button.rect.y), button.rect.size());
}

fn draw_sized(texture: &Texture2D, position: Vec2, size: Vec2) {
    draw_texture_ex(
        texture,
        position.x,
        position.y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(size),
            ..Default::default()
        },
    );
}

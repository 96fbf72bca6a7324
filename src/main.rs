//! Jetpack Pogride: a one-button endless flyer
//!
//! Hold Space to fire the jetpack, dodge the zapper, and see how far you get.
//! R (or the Play Again button) starts a new run after a crash.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod assets;
mod config;
mod game;
mod input;
mod timing;
mod ui;

use ::rand::rngs::StdRng;
use ::rand::SeedableRng;
use macroquad::audio::play_sound_once;
use macroquad::prelude::*;

use assets::AssetRegistry;
use config::GameConfig;
use game::{draw_frame, Events, GameSession, RestartTrigger};
use input::InputState;
use timing::FrameLimiter;

fn window_conf() -> Conf {
    // A broken tuning file is reported from main; open a default window for it
    let window = GameConfig::embedded().unwrap_or_default().window;
    Conf {
        window_title: window.title,
        window_width: window.width,
        window_height: window.height,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Jetpack Pogride v{}", VERSION);

    let config = match GameConfig::embedded() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let assets = match AssetRegistry::load(&config.assets).await {
        Ok(assets) => assets,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    log::info!(
        "Window {}x{} at {} FPS",
        config.window.width,
        config.window.height,
        config.window.target_fps
    );

    let mut rng = StdRng::from_entropy();
    let input = InputState::new(config.window.max_frame_time);
    let mut limiter = FrameLimiter::new(config.window.target_fps);
    let metrics = assets.sprite_metrics(&config);
    let mut session = GameSession::new(config, metrics, &mut rng);

    // Handle the close button ourselves so assets drop before exit
    prevent_quit();

    loop {
        limiter.begin();

        if is_quit_requested() {
            break;
        }

        let frame = input.poll();
        session.update(&frame, &mut rng);
        handle_events(&mut session.events, &assets);
        session.events.clear_all();

        clear_background(BLACK);
        draw_frame(&session, &assets);

        limiter.wait();
        next_frame().await;
    }

    log::info!("Best distance this session: {}", session.best_distance);
    drop(assets);
}

/// Drain this frame's events: sounds and logs
fn handle_events(events: &mut Events, assets: &AssetRegistry) {
    for thrust in events.thrust.drain() {
        log::trace!("Thrust puff at ({:.0}, {:.0})", thrust.position.x, thrust.position.y);
        play_sound_once(&assets.fly_sound);
    }

    for _ in events.start.drain() {
        log::info!("Run started");
    }

    for crash in events.crash.drain() {
        if crash.new_best {
            log::info!("Crashed at {}M (new best)", crash.distance);
        } else {
            log::info!("Crashed at {}M (best {}M)", crash.distance, crash.best_distance);
        }
    }

    for restart in events.restart.drain() {
        let how = match restart.trigger {
            RestartTrigger::Key => "key",
            RestartTrigger::Button => "button",
        };
        log::info!("Restarted by {}, zapper in lane {}", how, restart.lane);
    }
}

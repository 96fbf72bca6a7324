//! Game Module
//!
//! Simulation and drawing for the side-scroller:
//! - Session: screen state machine, scoring, collision
//! - Entities: player (with its particles), zapper obstacle, background
//! - Events: what happened this frame, drained by the frame loop
//! - Renderer: read-only drawing of a session
//!
//! Everything except the renderer is platform-free and runs in unit tests.

pub mod background;
pub mod event;
pub mod obstacle;
pub mod particles;
pub mod player;
pub mod renderer;
pub mod session;
pub mod sprites;

// Re-export main types
pub use event::{Events, RestartTrigger};
pub use renderer::draw_frame;
pub use session::GameSession;
pub use sprites::SpriteMetrics;

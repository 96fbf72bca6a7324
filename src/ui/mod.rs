//! Screen widgets: image buttons and HUD text

mod button;
mod text;

pub use button::*;
pub use text::*;

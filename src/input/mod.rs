//! Input handling
//!
//! Action-based input: the frame loop asks for actions (thrust, restart,
//! confirm) rather than raw keys, and hands the simulation a [`FrameInput`].

mod actions;
mod state;

pub use actions::*;
pub use state::*;

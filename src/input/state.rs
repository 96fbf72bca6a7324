//! Input state management
//!
//! Polls keyboard and mouse through macroquad once per frame and folds the
//! result into a plain [`FrameInput`] value. The simulation only ever sees
//! that value, never the platform.

use macroquad::prelude::*;
use super::{Action, Binding};

/// Everything the simulation needs from the platform for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Seconds since the previous frame (clamped)
    pub dt: f32,
    /// Thrust key held down
    pub thrust_held: bool,
    /// Restart key went down this frame
    pub restart_pressed: bool,
    /// Pointer position of a click that started this frame
    pub click: Option<Vec2>,
}

/// Keyboard/mouse sampler
pub struct InputState {
    /// Longest frame delta handed to the simulation
    pub max_frame_time: f32,
}

impl InputState {
    pub fn new(max_frame_time: f32) -> Self {
        Self { max_frame_time }
    }

    /// Sample this frame's input. Call once per frame before updating.
    pub fn poll(&self) -> FrameInput {
        FrameInput {
            dt: clamp_frame_time(get_frame_time(), self.max_frame_time),
            thrust_held: self.action_down(Action::Thrust),
            restart_pressed: self.action_pressed(Action::Restart),
            click: self
                .action_pressed(Action::Confirm)
                .then(|| Vec2::from(mouse_position())),
        }
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        match action.binding() {
            Binding::Key(key) => is_key_down(key),
            Binding::Mouse(button) => is_mouse_button_down(button),
        }
    }

    /// Check if action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        match action.binding() {
            Binding::Key(key) => is_key_pressed(key),
            Binding::Mouse(button) => is_mouse_button_pressed(button),
        }
    }
}

/// Keep a stalled frame from teleporting entities past each other
pub fn clamp_frame_time(dt: f32, max_frame_time: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, max_frame_time)
    } else {
        0.0
    }
}

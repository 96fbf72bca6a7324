//! Game action definitions

use macroquad::input::{KeyCode, MouseButton};

/// Everything the player can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Hold to fire the jetpack
    Thrust,
    /// Start a new run after a crash
    Restart,
    /// Click menu and game-over buttons
    Confirm,
}

/// Physical control an action is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Key(KeyCode),
    Mouse(MouseButton),
}

impl Action {
    pub fn binding(self) -> Binding {
        match self {
            Action::Thrust => Binding::Key(KeyCode::Space),
            Action::Restart => Binding::Key(KeyCode::R),
            Action::Confirm => Binding::Mouse(MouseButton::Left),
        }
    }
}

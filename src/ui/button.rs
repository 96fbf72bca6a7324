//! Image buttons
//!
//! A button is just the rectangle its texture covers. Hit-testing is pure so
//! the session can decide clicks without a window; drawing happens in the
//! renderer with whichever texture the button stands for.

use macroquad::math::{Rect, Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub rect: Rect,
}

impl Button {
    /// Button with its top-left corner at `position`, sized to its texture
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            rect: Rect::new(position.x, position.y, size.x, size.y),
        }
    }

    /// Check if point is inside
    pub fn contains(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }

    /// Did this frame's click land on the button?
    pub fn clicked(&self, click: Option<Vec2>) -> bool {
        click.map_or(false, |point| self.contains(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;

    #[test]
    fn test_contains() {
        let button = Button::new(vec2(330.0, 300.0), vec2(200.0, 60.0));
        assert!(button.contains(vec2(400.0, 320.0)));
        assert!(!button.contains(vec2(300.0, 320.0)));
        assert!(!button.contains(vec2(400.0, 400.0)));
    }

    #[test]
    fn test_clicked_needs_a_click() {
        let button = Button::new(vec2(0.0, 0.0), vec2(10.0, 10.0));
        assert!(!button.clicked(None));
        assert!(button.clicked(Some(vec2(5.0, 5.0))));
        assert!(!button.clicked(Some(vec2(15.0, 5.0))));
    }
}

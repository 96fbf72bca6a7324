//! Parallax backdrop
//!
//! One texture drawn twice side by side; the pair slides left and snaps back
//! once a full width has gone by, so the seam is never visible.

/// Scrolling backdrop offset tracker
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxBackground {
    /// Draw width of one backdrop copy
    pub width: f32,
    /// Scroll speed (pixels/s, leftward)
    pub speed: f32,
    /// Horizontal offset of the first copy, in (-width, 0]
    pub offset: f32,
}

impl ParallaxBackground {
    pub fn new(width: f32, speed: f32) -> Self {
        Self {
            width,
            speed,
            offset: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.offset -= self.speed * dt;
        if self.offset <= -self.width {
            self.offset = 0.0;
        }
    }

    /// Slow down by `amount`, stopping at zero
    pub fn decay(&mut self, amount: f32) {
        self.speed = (self.speed - amount).max(0.0);
    }

    /// X positions of the two copies
    pub fn tile_positions(&self) -> [f32; 2] {
        [self.offset, self.offset + self.width]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_scrolls_left() {
        let mut bg = ParallaxBackground::new(860.0, 100.0);
        bg.update(0.5);
        assert!((bg.offset + 50.0).abs() < 0.001);
        assert_eq!(bg.tile_positions(), [-50.0, 810.0]);
    }

    #[test]
    fn test_wraps_after_full_width() {
        let mut bg = ParallaxBackground::new(100.0, 100.0);
        bg.update(0.99);
        assert!(bg.offset < -98.0);
        bg.update(0.02);
        assert_eq!(bg.offset, 0.0);
    }

    #[test]
    fn test_exact_width_wraps() {
        let mut bg = ParallaxBackground::new(100.0, 100.0);
        bg.update(1.0);
        assert_eq!(bg.offset, 0.0);
    }

    #[test]
    fn test_decay_never_negative() {
        let mut bg = ParallaxBackground::new(860.0, 7.0);
        bg.decay(5.0);
        assert_eq!(bg.speed, 2.0);
        bg.decay(5.0);
        assert_eq!(bg.speed, 0.0);
        bg.decay(5.0);
        assert_eq!(bg.speed, 0.0);
    }

    proptest! {
        #[test]
        fn prop_offset_stays_in_range(
            speed in 0.0f32..2000.0,
            steps in proptest::collection::vec(0.0f32..0.5, 1..200),
        ) {
            let mut bg = ParallaxBackground::new(860.0, speed);
            for dt in steps {
                bg.update(dt);
                prop_assert!(bg.offset > -bg.width && bg.offset <= 0.0);
            }
        }
    }
}

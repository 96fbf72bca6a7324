//! Zapper obstacle
//!
//! A looping multi-frame hazard that scrolls left with the world and
//! reappears at the right edge in one of two lanes once it is off-screen.

use macroquad::math::{vec2, Rect, Vec2};
use rand::Rng;

use super::sprites::SpriteMetrics;
use crate::config::GameConfig;

#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Draw size of each animation frame, in playback order
    pub frame_sizes: Vec<Vec2>,
    /// Current animation frame, always < frame_sizes.len()
    pub frame: usize,
    pub frame_timer: f32,
    pub position: Vec2,
    /// Set by the session to follow the scroll speed
    pub velocity: Vec2,

    frame_interval: f32,
    lanes: [f32; 2],
    spawn_x: f32,
    despawn_x: f32,
}

impl Obstacle {
    /// Create the zapper at the right edge in a random lane, at rest
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, metrics: &SpriteMetrics, rng: &mut R) -> Self {
        let mut frame_sizes = metrics.zapper_frames.clone();
        if frame_sizes.is_empty() {
            frame_sizes.push(Vec2::ZERO);
        }
        let mut obstacle = Self {
            frame_sizes,
            frame: 0,
            frame_timer: 0.0,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            frame_interval: config.obstacle.frame_interval,
            lanes: config.obstacle.lanes,
            spawn_x: config.screen_width(),
            despawn_x: config.obstacle.despawn_x,
        };
        obstacle.respawn(rng);
        obstacle
    }

    /// Size of the frame currently shown
    pub fn size(&self) -> Vec2 {
        self.frame_sizes[self.frame % self.frame_sizes.len()]
    }

    /// Collision rectangle, from the current position and frame
    pub fn rect(&self) -> Rect {
        let size = self.size();
        Rect::new(self.position.x, self.position.y, size.x, size.y)
    }

    /// Step the looping animation
    pub fn animate(&mut self, delta_time: f32) {
        self.frame_timer += delta_time;
        if self.frame_timer >= self.frame_interval {
            self.frame = (self.frame + 1) % self.frame_sizes.len();
            self.frame_timer = 0.0;
        }
    }

    pub fn integrate(&mut self, delta_time: f32) {
        self.position += self.velocity * delta_time;
    }

    /// Has it scrolled past the left-of-screen threshold?
    pub fn is_off_screen(&self) -> bool {
        self.position.x < self.despawn_x
    }

    /// Jump to the right edge in a random lane; returns the lane index
    pub fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let lane = rng.gen_range(0..self.lanes.len());
        self.position = vec2(self.spawn_x, self.lanes[lane]);
        lane
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_obstacle(seed: u64) -> Obstacle {
        let config = GameConfig::default();
        let mut metrics = SpriteMetrics::uniform(vec2(30.0, 30.0), 4, vec2(860.0, 540.0));
        metrics.zapper_frames = vec![
            vec2(30.0, 90.0),
            vec2(31.0, 90.0),
            vec2(32.0, 90.0),
            vec2(33.0, 90.0),
        ];
        Obstacle::new(&config, &metrics, &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_spawns_at_right_edge_in_a_lane() {
        for seed in 0..20 {
            let zapper = test_obstacle(seed);
            assert_eq!(zapper.position.x, 860.0);
            assert!(zapper.position.y == 120.0 || zapper.position.y == 300.0);
            assert_eq!(zapper.velocity, Vec2::ZERO);
        }
    }

    #[test]
    fn test_respawn_uses_both_lanes() {
        let mut zapper = test_obstacle(0);
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 2];
        for _ in 0..100 {
            let lane = zapper.respawn(&mut rng);
            assert_eq!(zapper.position.y, [120.0, 300.0][lane]);
            seen[lane] = true;
        }
        assert_eq!(seen, [true, true]);
    }

    #[test]
    fn test_animation_loops() {
        let mut zapper = test_obstacle(0);
        let mut frames = Vec::new();
        for _ in 0..6 {
            zapper.animate(0.1);
            frames.push(zapper.frame);
        }
        assert_eq!(frames, vec![1, 2, 3, 0, 1, 2]);
    }

    #[test]
    fn test_rect_follows_frame() {
        let mut zapper = test_obstacle(0);
        zapper.position = vec2(400.0, 120.0);
        zapper.animate(0.1);
        zapper.animate(0.1);
        assert_eq!(zapper.rect(), Rect::new(400.0, 120.0, 32.0, 90.0));
    }

    #[test]
    fn test_off_screen_threshold() {
        let mut zapper = test_obstacle(0);
        zapper.velocity = vec2(-400.0, 0.0);
        zapper.position.x = -90.0;
        assert!(!zapper.is_off_screen());
        zapper.integrate(0.05);
        assert!(zapper.is_off_screen());
    }

    #[test]
    fn test_collision_overlap_cases() {
        let player = Rect::new(150.0, 300.0, 40.0, 40.0);
        assert!(player.overlaps(&Rect::new(150.0, 300.0, 30.0, 30.0)));
        assert!(!player.overlaps(&Rect::new(400.0, 120.0, 30.0, 30.0)));
    }

    proptest! {
        #[test]
        fn prop_frame_index_in_range(steps in proptest::collection::vec(0.0f32..1.0, 0..300)) {
            let mut zapper = test_obstacle(1);
            for dt in steps {
                zapper.animate(dt);
                prop_assert!(zapper.frame < zapper.frame_sizes.len());
            }
        }
    }
}

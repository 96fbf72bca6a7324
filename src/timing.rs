//! Frame pacing
//!
//! macroquad presents with vsync where the platform offers it, which is not
//! guaranteed. The limiter caps the loop at the configured rate by sleeping
//! for the bulk of the remaining frame and spinning the last couple of
//! milliseconds.

use macroquad::time::get_time;

/// Spin instead of sleeping for the final stretch of a frame
#[cfg(not(target_arch = "wasm32"))]
const SPIN_MARGIN: f64 = 0.002; // 2ms

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameLimiter {
    target_fps: u32,
    frame_start: f64,
}

impl FrameLimiter {
    /// `target_fps` of 0 leaves the loop unlocked
    pub fn new(target_fps: u32) -> Self {
        Self {
            target_fps,
            frame_start: 0.0,
        }
    }

    /// Get the target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        match self.target_fps {
            0 => None,
            fps => Some(1.0 / fps as f64),
        }
    }

    /// Mark the start of a frame
    pub fn begin(&mut self) {
        self.frame_start = get_time();
    }

    /// Block until the frame has used its full time slice
    pub fn wait(&self) {
        let Some(target_frame_time) = self.frame_time() else {
            return;
        };
        if get_time() - self.frame_start >= target_frame_time {
            return;
        }

        // No thread::sleep in the browser; its own frame pacing applies
        #[cfg(not(target_arch = "wasm32"))]
        {
            while can_sleep(get_time() - self.frame_start, target_frame_time) {
                std::thread::sleep(std::time::Duration::from_millis(1));
            }
            while get_time() - self.frame_start < target_frame_time {
                std::hint::spin_loop();
            }
        }
    }
}

/// Is there more than the spin margin left in the frame?
#[cfg(not(target_arch = "wasm32"))]
fn can_sleep(elapsed: f64, target_frame_time: f64) -> bool {
    elapsed + SPIN_MARGIN < target_frame_time
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_time() {
        assert_eq!(FrameLimiter::new(60).frame_time(), Some(1.0 / 60.0));
        assert_eq!(FrameLimiter::new(30).frame_time(), Some(1.0 / 30.0));
        assert_eq!(FrameLimiter::new(0).frame_time(), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_sleeps_until_spin_margin() {
        let target = 1.0 / 60.0;
        assert!(can_sleep(0.0, target));
        assert!(can_sleep(target - 0.003, target));
        // Last 2ms are spun, not slept
        assert!(!can_sleep(target - 0.001, target));
        assert!(!can_sleep(target, target));
    }
}

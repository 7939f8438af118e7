//! Back-and-forth yaw of the logo, owned by the per-frame driver.

use super::constants::{ROTATION_LIMIT, ROTATION_SPEED};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationState {
    /// Yaw in radians.
    pub angle: f64,
    /// Signed increment applied each frame.
    pub speed: f64,
}

impl Default for RotationState {
    fn default() -> Self {
        Self {
            angle: 0.0,
            speed: ROTATION_SPEED,
        }
    }
}

impl RotationState {
    /// Advance one frame. The direction flips once `|angle|` has passed the
    /// limit, so the swing overshoots it by up to one increment.
    #[must_use]
    pub fn step(self) -> Self {
        self.step_with_limit(ROTATION_LIMIT)
    }

    #[must_use]
    pub fn step_with_limit(self, limit: f64) -> Self {
        let speed = if self.angle.abs() > limit {
            -self.speed
        } else {
            self.speed
        };
        Self {
            angle: self.angle + speed,
            speed,
        }
    }
}

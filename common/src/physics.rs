//! Various mathematical truths about Rocket League.

use crate::halfway_house::Rotator;
use nalgebra::Vector3;

/// A car's orientation as three world-space unit axes.
///
/// Local coordinates use x forward, y right, z through the roof.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CarFrame {
    pub forward: Vector3<f32>,
    pub right: Vector3<f32>,
    pub roof: Vector3<f32>,
}

impl CarFrame {
    /// Builds the frame from Unreal's (pitch, yaw, roll) angles.
    pub fn from_rotator(rot: &Rotator) -> Self {
        let (sp, cp) = rot.Pitch.sin_cos();
        let (sy, cy) = rot.Yaw.sin_cos();
        let (sr, cr) = rot.Roll.sin_cos();
        Self {
            forward: Vector3::new(cp * cy, cp * sy, sp),
            right: Vector3::new(cy * sp * sr - cr * sy, sy * sp * sr + cr * cy, -cp * sr),
            roof: Vector3::new(-cr * cy * sp - sr * sy, -cr * sy * sp + sr * cy, cp * cr),
        }
    }

    /// Translates a world-space vector into this frame.
    pub fn local(&self, v: Vector3<f32>) -> Vector3<f32> {
        Vector3::new(self.forward.dot(&v), self.right.dot(&v), self.roof.dot(&v))
    }
}

impl Default for CarFrame {
    fn default() -> Self {
        Self::from_rotator(&Rotator::default())
    }
}

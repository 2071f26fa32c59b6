use crate::{halfway_house, physics::CarFrame};
use nalgebra::Vector3;

pub trait ExtendPhysics {
    fn loc(&self) -> Vector3<f32>;
    fn vel(&self) -> Vector3<f32>;
    fn ang_vel(&self) -> Vector3<f32>;
    fn frame(&self) -> CarFrame;
}

impl ExtendPhysics for halfway_house::Physics {
    fn loc(&self) -> Vector3<f32> {
        self.Location.to_nalgebra()
    }

    fn vel(&self) -> Vector3<f32> {
        self.Velocity.to_nalgebra()
    }

    fn ang_vel(&self) -> Vector3<f32> {
        self.AngularVelocity.to_nalgebra()
    }

    fn frame(&self) -> CarFrame {
        CarFrame::from_rotator(&self.Rotation)
    }
}

pub trait ExtendFfiVector3 {
    fn to_nalgebra(&self) -> Vector3<f32>;
}

impl ExtendFfiVector3 for halfway_house::Vector3 {
    fn to_nalgebra(&self) -> Vector3<f32> {
        Vector3::new(self.X, self.Y, self.Z)
    }
}

pub trait ExtendVector3 {
    /// Like `normalize`, except a zero vector stays zero instead of turning
    /// into NaNs.
    fn normalize_or_zero(&self) -> Self;
}

impl ExtendVector3 for Vector3<f32> {
    fn normalize_or_zero(&self) -> Self {
        self.try_normalize(0.0).unwrap_or_else(Vector3::zeros)
    }
}

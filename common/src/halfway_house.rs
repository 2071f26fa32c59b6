//! Plain-data mirrors of the structures the bot framework hands us every tick.
//!
//! Field names follow the framework's own spelling so that recordings and
//! packets line up column-for-column.

#![allow(non_snake_case)]

use crate::rl;
use smallvec::SmallVec;

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector3 {
    pub X: f32,
    pub Y: f32,
    pub Z: f32,
}

impl Vector3 {
    pub fn new(X: f32, Y: f32, Z: f32) -> Self {
        Self { X, Y, Z }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rotator {
    pub Pitch: f32,
    pub Yaw: f32,
    pub Roll: f32,
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Physics {
    pub Location: Vector3,
    pub Rotation: Rotator,
    pub Velocity: Vector3,
    pub AngularVelocity: Vector3,
}

#[derive(Debug, Default, Copy, Clone)]
pub struct PlayerInfo {
    pub Physics: Physics,
    pub Demolished: bool,
    pub OnGround: bool,
    pub Team: u8,
    /// From 0 to 100.
    pub Boost: i32,
}

#[derive(Debug, Default, Copy, Clone)]
pub struct BallInfo {
    pub Physics: Physics,
}

#[derive(Debug, Default, Copy, Clone)]
pub struct GameInfo {
    pub TimeSeconds: f32,
    pub RoundActive: bool,
    pub KickoffPause: bool,
    pub MatchEnded: bool,
}

#[derive(Debug, Copy, Clone)]
pub struct BoostPadState {
    pub IsActive: bool,
    /// Seconds since the pad was picked up. Zero while the pad is active.
    pub Timer: f32,
}

impl Default for BoostPadState {
    fn default() -> Self {
        Self {
            IsActive: true,
            Timer: 0.0,
        }
    }
}

#[derive(Clone, Default)]
pub struct LiveDataPacket {
    pub GameCars: SmallVec<[PlayerInfo; 8]>,
    pub GameBall: BallInfo,
    pub GameInfo: GameInfo,
    pub BoostPadStates: SmallVec<[BoostPadState; 34]>,
}

impl LiveDataPacket {
    pub fn cars(&self) -> impl Iterator<Item = &PlayerInfo> {
        self.GameCars.iter()
    }

    pub fn num_cars(&self) -> usize {
        self.GameCars.len()
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoostPadInfo {
    pub Location: Vector3,
    pub IsFullBoost: bool,
}

/// The static parts of the arena, sent once per match.
#[derive(Clone, Debug)]
pub struct FieldInfo {
    pub BoostPads: Vec<BoostPadInfo>,
}

impl FieldInfo {
    /// The standard soccar arena.
    pub fn soccar() -> Self {
        Self {
            BoostPads: rl::SOCCAR_BOOST_PADS
                .iter()
                .map(|&(x, y, z, full)| BoostPadInfo {
                    Location: Vector3::new(x, y, z),
                    IsFullBoost: full,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct PlayerInput {
    pub Throttle: f32,
    pub Steer: f32,
    pub Pitch: f32,
    pub Yaw: f32,
    pub Roll: f32,
    pub Jump: bool,
    pub Boost: bool,
    pub Handbrake: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soccar_has_six_big_pads() {
        let field = FieldInfo::soccar();
        assert_eq!(field.BoostPads.len(), 34);
        assert_eq!(field.BoostPads.iter().filter(|p| p.IsFullBoost).count(), 6);
    }

    #[test]
    fn soccar_pads_are_mirrored() {
        let field = FieldInfo::soccar();
        for pad in &field.BoostPads {
            let mirrored = field.BoostPads.iter().any(|other| {
                (other.Location.X + pad.Location.X).abs() < 1.0
                    && (other.Location.Y + pad.Location.Y).abs() < 5.0
                    && other.IsFullBoost == pad.IsFullBoost
            });
            assert!(mirrored, "{:?}", pad);
        }
    }
}

use crate::strategy::Game;
use common::{
    halfway_house::{
        BallInfo, BoostPadInfo, BoostPadState, FieldInfo, GameInfo, LiveDataPacket, Physics,
        PlayerInfo, Rotator, Vector3 as FfiVector3,
    },
    rl,
};
use nalgebra::Vector3;
use std::f32::consts::PI;

/// A frozen moment of a 1v1, seen from player 0.
pub struct TestScenario {
    pub time: f32,
    pub kickoff: bool,
    pub ball_loc: Vector3<f32>,
    pub ball_vel: Vector3<f32>,
    pub car_loc: Vector3<f32>,
    pub car_yaw: f32,
    pub car_vel: Vector3<f32>,
    pub enemy_loc: Vector3<f32>,
    /// The amount of boost for player 0, from 0 to 100.
    pub boost: i32,
    pub team: u8,
    pub boost_pads: Vec<BoostPadInfo>,
    /// Indices into `boost_pads` that have been picked up.
    pub inactive_pads: Vec<usize>,
}

impl Default for TestScenario {
    fn default() -> Self {
        TestScenario {
            time: 10.0,
            kickoff: false,
            ball_loc: Vector3::new(0.0, 0.0, 92.74),
            ball_vel: Vector3::zeros(),
            car_loc: Vector3::new(0.0, -2000.0, rl::OCTANE_NEUTRAL_Z),
            car_yaw: PI / 2.0,
            car_vel: Vector3::zeros(),
            enemy_loc: Vector3::new(0.0, 2000.0, rl::OCTANE_NEUTRAL_Z),
            boost: 100,
            team: 0,
            boost_pads: FieldInfo::soccar().BoostPads,
            inactive_pads: Vec::new(),
        }
    }
}

impl TestScenario {
    pub fn field(&self) -> FieldInfo {
        FieldInfo {
            BoostPads: self.boost_pads.clone(),
        }
    }

    pub fn packet(&self) -> LiveDataPacket {
        let me = PlayerInfo {
            Physics: Physics {
                Location: ffi(self.car_loc),
                Rotation: Rotator {
                    Pitch: 0.0,
                    Yaw: self.car_yaw,
                    Roll: 0.0,
                },
                Velocity: ffi(self.car_vel),
                ..Default::default()
            },
            OnGround: true,
            Team: self.team,
            Boost: self.boost,
            ..Default::default()
        };
        let enemy = PlayerInfo {
            Physics: Physics {
                Location: ffi(self.enemy_loc),
                ..Default::default()
            },
            OnGround: true,
            Team: 1 - self.team,
            Boost: 33,
            ..Default::default()
        };

        LiveDataPacket {
            GameCars: vec![me, enemy].into_iter().collect(),
            GameBall: BallInfo {
                Physics: Physics {
                    Location: ffi(self.ball_loc),
                    Velocity: ffi(self.ball_vel),
                    ..Default::default()
                },
            },
            GameInfo: GameInfo {
                TimeSeconds: self.time,
                RoundActive: true,
                KickoffPause: self.kickoff,
                MatchEnded: false,
            },
            BoostPadStates: (0..self.boost_pads.len())
                .map(|i| BoostPadState {
                    IsActive: !self.inactive_pads.contains(&i),
                    Timer: 0.0,
                })
                .collect(),
        }
    }

    pub fn game(&self) -> Game {
        Game::new(&self.field(), &self.packet(), 0)
    }
}

/// A big or small pad at `(x, y)`, at the height real pads sit at.
pub fn pad(x: f32, y: f32, large: bool) -> BoostPadInfo {
    BoostPadInfo {
        Location: FfiVector3::new(x, y, if large { 73.0 } else { 70.0 }),
        IsFullBoost: large,
    }
}

fn ffi(v: Vector3<f32>) -> FfiVector3 {
    FfiVector3::new(v.x, v.y, v.z)
}

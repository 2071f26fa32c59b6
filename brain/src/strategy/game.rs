use common::{
    halfway_house::{FieldInfo, LiveDataPacket, PlayerInfo},
    physics::CarFrame,
    prelude::*,
    rl,
};
use lazy_static::lazy_static;
use nalgebra::Vector3;

/// Everything a strategy gets to look at during one tick.
pub struct Game {
    pub time: f32,
    /// True while the cars are frozen or racing for the ball at the start of a
    /// round.
    pub kickoff_flag: bool,
    pub me: Car,
    pub friends: Vec<Car>,
    pub foes: Vec<Car>,
    pub ball: Ball,
    pub friend_goal: &'static Goal,
    pub foe_goal: &'static Goal,
    pub boosts: Vec<BoostPad>,
}

impl Game {
    pub fn new(field: &FieldInfo, packet: &LiveDataPacket, player_index: usize) -> Self {
        let me = Car::from_ffi(player_index, &packet.GameCars[player_index]);
        let team = me.team;

        let others = packet
            .cars()
            .enumerate()
            .filter(|&(index, _)| index != player_index)
            .map(|(index, info)| Car::from_ffi(index, info));
        let (friends, foes): (Vec<_>, Vec<_>) = others.partition(|car| car.team == team);

        let boosts = field
            .BoostPads
            .iter()
            .enumerate()
            .map(|(index, info)| BoostPad {
                index,
                location: info.Location.to_nalgebra(),
                large: info.IsFullBoost,
                active: packet
                    .BoostPadStates
                    .get(index)
                    .map_or(true, |state| state.IsActive),
            })
            .collect();

        Self {
            time: packet.GameInfo.TimeSeconds,
            kickoff_flag: packet.GameInfo.RoundActive && packet.GameInfo.KickoffPause,
            me,
            friends,
            foes,
            ball: Ball {
                location: packet.GameBall.Physics.loc(),
                velocity: packet.GameBall.Physics.vel(),
            },
            friend_goal: Goal::soccar(team),
            foe_goal: Goal::soccar(team.opposing()),
            boosts,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Team {
    Blue,
    Orange,
}

impl Team {
    pub fn from_ffi(index: u8) -> Self {
        match index {
            0 => Team::Blue,
            1 => Team::Orange,
            _ => panic!("wonky team index {}", index),
        }
    }

    pub fn opposing(self) -> Self {
        match self {
            Team::Blue => Team::Orange,
            Team::Orange => Team::Blue,
        }
    }

    /// The sign of the y-coordinate of this team's goal.
    fn side(self) -> f32 {
        match self {
            Team::Blue => -1.0,
            Team::Orange => 1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Car {
    pub index: usize,
    pub location: Vector3<f32>,
    pub velocity: Vector3<f32>,
    pub angular_velocity: Vector3<f32>,
    pub frame: CarFrame,
    /// From 0 to 100.
    pub boost: f32,
    pub team: Team,
    pub on_ground: bool,
    pub demolished: bool,
}

impl Car {
    fn from_ffi(index: usize, info: &PlayerInfo) -> Self {
        Self {
            index,
            location: info.Physics.loc(),
            velocity: info.Physics.vel(),
            angular_velocity: info.Physics.ang_vel(),
            frame: info.Physics.frame(),
            boost: info.Boost as f32,
            team: Team::from_ffi(info.Team),
            on_ground: info.OnGround,
            demolished: info.Demolished,
        }
    }

    /// Rotates a world-space vector into this car's frame (x forward, y right,
    /// z up through the roof).
    pub fn local(&self, v: Vector3<f32>) -> Vector3<f32> {
        self.frame.local(v)
    }
}

#[derive(Clone, Debug)]
pub struct Ball {
    pub location: Vector3<f32>,
    pub velocity: Vector3<f32>,
}

#[derive(Debug, PartialEq)]
pub struct Goal {
    pub location: Vector3<f32>,
    /// Blue's left post sits at negative x; orange's posts are mirrored.
    pub left_post: Vector3<f32>,
    pub right_post: Vector3<f32>,
}

impl Goal {
    pub fn soccar(team: Team) -> &'static Self {
        match team {
            Team::Blue => &SOCCAR_GOAL_BLUE,
            Team::Orange => &SOCCAR_GOAL_ORANGE,
        }
    }

    fn new(team: Team) -> Self {
        let side = team.side();
        Self {
            location: Vector3::new(0.0, side * rl::GOAL_Y, rl::GOAL_CENTER_Z),
            left_post: Vector3::new(side * rl::GOALPOST_X, side * rl::GOAL_Y, rl::GOAL_CENTER_Z),
            right_post: Vector3::new(-side * rl::GOALPOST_X, side * rl::GOAL_Y, rl::GOAL_CENTER_Z),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoostPad {
    /// Position in the framework's pad list.
    pub index: usize,
    pub location: Vector3<f32>,
    pub large: bool,
    pub active: bool,
}

lazy_static! {
    static ref SOCCAR_GOAL_BLUE: Goal = Goal::new(Team::Blue);
    static ref SOCCAR_GOAL_ORANGE: Goal = Goal::new(Team::Orange);
}

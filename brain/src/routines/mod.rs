//! Routines are the things that sit on the stack and actually drive the car.
//!
//! Strategies only ever build them and push them; running them is the job of
//! a [`RoutineExecutor`].

pub use self::{
    drive::SimpleDriver,
    stack::{RoutineStack, POPPED, PUSHED},
};

use crate::{
    shots::ShotCandidate,
    strategy::{BoostPad, Game},
};
use common::{halfway_house::PlayerInput, prelude::*};
use nalgebra::Vector3;
use std::fmt;

mod drive;
mod stack;

#[derive(Clone, Debug, PartialEq)]
pub enum Routine {
    /// Race for the ball at the start of a round.
    Kickoff,
    /// "Always towards ball agent." Drives at the ball forever.
    Atba,
    /// Pick up `pad`, approaching so we can head for `target` afterwards.
    GotoBoost {
        pad: BoostPad,
        target: Vector3<f32>,
    },
    /// A quick poke at the ball in the general direction of `target`.
    ShortShot { target: Vector3<f32> },
    Shot(ShotCandidate),
}

impl Routine {
    pub fn name(&self) -> &'static str {
        match self {
            Routine::Kickoff => "Kickoff",
            Routine::Atba => "Atba",
            Routine::GotoBoost { .. } => "GotoBoost",
            Routine::ShortShot { .. } => "ShortShot",
            Routine::Shot(_) => "Shot",
        }
    }
}

impl fmt::Display for Routine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Routine::Kickoff | Routine::Atba => write!(f, "{}", self.name()),
            Routine::GotoBoost { pad, target } => write!(
                f,
                "{} #{} {} -> {}",
                self.name(),
                pad.index,
                pad.location.pretty(),
                target.pretty(),
            ),
            Routine::ShortShot { target } => write!(f, "{} -> {}", self.name(), target.pretty()),
            Routine::Shot(shot) => write!(
                f,
                "{} {:?} {} @ {:.2}s",
                self.name(),
                shot.kind,
                shot.ball_location.pretty(),
                shot.intercept_time,
            ),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Progress {
    Running,
    /// Pop me.
    Done,
}

/// Interprets routines. The strategy never does.
pub trait RoutineExecutor: Send {
    fn step(&mut self, routine: &Routine, game: &Game, controls: &mut PlayerInput) -> Progress;
}

#![warn(future_incompatible, rust_2018_compatibility, rust_2018_idioms, unused)]
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(clippy::all)]

pub use crate::{
    brain::Brain,
    eeg::{Event, EEG},
    routines::{Progress, Routine, RoutineExecutor, RoutineStack, SimpleDriver},
    shots::{CannedShotFinder, NullShotFinder, ShotCandidate, ShotFinder, ShotKind, Shots, Target, Targets},
    strategy::{BoostPad, Context, Example, Example2, Game, Goal, Strategy, Team},
};

mod brain;
mod eeg;
#[cfg(test)]
mod integration_tests;
pub mod mechanics;
mod routines;
mod shots;
mod strategy;

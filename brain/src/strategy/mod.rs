pub use crate::strategy::{
    context::Context,
    example::Example,
    example2::Example2,
    game::{Ball, BoostPad, Car, Game, Goal, Team},
    strategy::Strategy,
};

mod context;
mod example;
mod example2;
mod game;
#[cfg(test)]
pub mod null;
mod strategy;

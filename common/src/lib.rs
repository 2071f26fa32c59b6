#![warn(future_incompatible, rust_2018_compatibility, rust_2018_idioms, unused)]
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(clippy::all)]

pub use crate::pretty::PrettyPrint;

pub mod ext;
pub mod halfway_house;
pub mod math;
pub mod physics;
pub mod prelude;
mod pretty;
pub mod rl;

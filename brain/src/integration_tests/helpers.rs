use crate::{
    eeg::EEG,
    routines::RoutineStack,
    shots::ShotFinder,
    strategy::{Context, Game, Strategy},
};
use common::halfway_house::PlayerInput;

/// What one strategy tick left behind.
pub struct Outcome {
    pub stack: RoutineStack,
    pub controls: PlayerInput,
    pub eeg: EEG,
}

/// Runs a single tick of `strategy` against `game`, starting from `stack`.
pub fn run_strategy(
    strategy: &mut dyn Strategy,
    game: &Game,
    shot_finder: &dyn ShotFinder,
    mut stack: RoutineStack,
) -> Outcome {
    let mut controls = PlayerInput::default();
    let mut eeg = EEG::new();
    eeg.begin(game);
    strategy.run(&mut Context::new(
        game,
        &mut stack,
        &mut controls,
        shot_finder,
        &mut eeg,
    ));
    Outcome {
        stack,
        controls,
        eeg,
    }
}

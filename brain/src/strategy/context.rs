use crate::{
    eeg::EEG,
    routines::{Routine, RoutineStack, PUSHED},
    shots::ShotFinder,
    strategy::Game,
};
use common::halfway_house::PlayerInput;
use nameof::name_of_type;

/// Everything a strategy may touch during a single tick.
pub struct Context<'a> {
    pub game: &'a Game,
    pub stack: &'a mut RoutineStack,
    pub controls: &'a mut PlayerInput,
    pub shot_finder: &'a dyn ShotFinder,
    pub eeg: &'a mut EEG,
}

impl<'a> Context<'a> {
    pub fn new(
        game: &'a Game,
        stack: &'a mut RoutineStack,
        controls: &'a mut PlayerInput,
        shot_finder: &'a dyn ShotFinder,
        eeg: &'a mut EEG,
    ) -> Self {
        Self {
            game,
            stack,
            controls,
            shot_finder,
            eeg,
        }
    }

    pub fn push(&mut self, routine: Routine) {
        self.eeg
            .log(name_of_type!(RoutineStack), format!("{} {}", PUSHED, routine));
        self.stack.push(routine);
    }
}

use crate::{
    eeg::EEG,
    routines::{Progress, RoutineExecutor, RoutineStack, SimpleDriver, POPPED},
    shots::{NullShotFinder, ShotFinder},
    strategy::{Context, Example, Example2, Game, Strategy},
};
use common::{
    halfway_house::{FieldInfo, LiveDataPacket, PlayerInput},
    math::cap,
};
use nameof::name_of_type;

pub struct Brain {
    strategy: Box<dyn Strategy>,
    stack: RoutineStack,
    executor: Box<dyn RoutineExecutor>,
    shot_finder: Box<dyn ShotFinder + Send>,
    eeg: EEG,
    player_index: usize,
}

impl Brain {
    pub fn new(
        strategy: impl Strategy + 'static,
        executor: impl RoutineExecutor + 'static,
        shot_finder: impl ShotFinder + Send + 'static,
    ) -> Self {
        Self {
            strategy: Box::new(strategy),
            stack: RoutineStack::new(),
            executor: Box::new(executor),
            shot_finder: Box::new(shot_finder),
            eeg: EEG::new(),
            player_index: 0,
        }
    }

    pub fn example() -> Self {
        Self::new(Example::new(), SimpleDriver::new(), NullShotFinder::new())
    }

    pub fn example2() -> Self {
        Self::new(Example2::new(), SimpleDriver::new(), NullShotFinder::new())
    }

    pub fn set_player_index(&mut self, player_index: usize) {
        self.player_index = player_index;
    }

    pub fn player_index(&self) -> usize {
        self.player_index
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    pub fn stack(&self) -> &RoutineStack {
        &self.stack
    }

    pub fn eeg(&self) -> &EEG {
        &self.eeg
    }

    /// Runs one tick. The caller is responsible for `player_index` pointing at
    /// a car that exists in `packet`.
    pub fn tick(&mut self, field: &FieldInfo, packet: &LiveDataPacket) -> PlayerInput {
        let game = Game::new(field, packet, self.player_index);
        self.eeg.begin(&game);

        let mut controls = PlayerInput::default();

        self.strategy.run(&mut Context::new(
            &game,
            &mut self.stack,
            &mut controls,
            &*self.shot_finder,
            &mut self.eeg,
        ));

        if let Some(routine) = self.stack.top() {
            if self.executor.step(routine, &game, &mut controls) == Progress::Done {
                if let Some(routine) = self.stack.pop() {
                    self.eeg
                        .log(name_of_type!(RoutineStack), format!("{} {}", POPPED, routine));
                }
            }
        }

        controls.Throttle = cap(controls.Throttle, -1.0, 1.0);
        controls.Steer = cap(controls.Steer, -1.0, 1.0);
        controls.Pitch = cap(controls.Pitch, -1.0, 1.0);
        controls.Yaw = cap(controls.Yaw, -1.0, 1.0);
        controls.Roll = cap(controls.Roll, -1.0, 1.0);

        controls
    }
}

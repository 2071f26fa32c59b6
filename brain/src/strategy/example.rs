use crate::{
    eeg::Event,
    mechanics::{default_pd, default_throttle},
    routines::Routine,
    strategy::{Context, Strategy},
};
use common::rl;
use derive_new::new;
use nameof::name_of_type;

/// The simplest possible bot: chase the ball with raw controls every tick,
/// and keep exactly one routine on the stack.
#[derive(new)]
pub struct Example;

impl Strategy for Example {
    fn name(&self) -> &str {
        name_of_type!(Example)
    }

    fn run(&mut self, ctx: &mut Context<'_>) {
        let game = ctx.game;

        let relative_target = game.ball.location - game.me.location;
        let local_target = game.me.local(relative_target);
        default_pd(game, ctx.controls, local_target);
        default_throttle(game, ctx.controls, rl::CAR_MAX_SPEED);

        if ctx.stack.is_empty() {
            if game.kickoff_flag {
                ctx.eeg.track(Event::Kickoff);
                ctx.push(Routine::Kickoff);
            } else {
                ctx.eeg.track(Event::Atba);
                ctx.push(Routine::Atba);
            }
        }
    }
}

use crate::{
    mechanics::drive_towards,
    routines::{Progress, Routine, RoutineExecutor},
    shots::ShotCandidate,
    strategy::{BoostPad, Game},
};
use common::{halfway_house::PlayerInput, math::cap, prelude::*, rl};
use derive_new::new;
use nalgebra::Vector3;

/// Close enough to the ball that a short shot has either connected or missed.
const SHORT_SHOT_REACH: f32 = 200.0;

/// How far behind the ball we line up before hitting it.
const LINE_UP_MAX_OFFSET: f32 = 500.0;

/// A naive interpreter that gets every routine moving in roughly the right
/// direction. No jumps, no flips, no aerials.
#[derive(new)]
pub struct SimpleDriver;

impl RoutineExecutor for SimpleDriver {
    fn step(&mut self, routine: &Routine, game: &Game, controls: &mut PlayerInput) -> Progress {
        match routine {
            Routine::Kickoff => kickoff(game, controls),
            Routine::Atba => {
                drive_towards(game, controls, game.ball.location, rl::CAR_MAX_SPEED);
                Progress::Running
            }
            Routine::GotoBoost { pad, target } => goto_boost(game, controls, pad, *target),
            Routine::ShortShot { target } => short_shot(game, controls, *target),
            Routine::Shot(shot) => shot_at(game, controls, shot),
        }
    }
}

fn kickoff(game: &Game, controls: &mut PlayerInput) -> Progress {
    if !game.kickoff_flag {
        return Progress::Done;
    }
    drive_towards(game, controls, game.ball.location, rl::CAR_MAX_SPEED);
    controls.Boost = true;
    Progress::Running
}

fn goto_boost(
    game: &Game,
    controls: &mut PlayerInput,
    pad: &BoostPad,
    target: Vector3<f32>,
) -> Progress {
    let still_there = game
        .boosts
        .get(pad.index)
        .map_or(false, |current| current.active);
    if !still_there || game.me.boost >= rl::BOOST_MAX {
        return Progress::Done;
    }

    // Don't come screaming in if we'll need to turn hard right after.
    let me_to_pad = (pad.location - game.me.location).normalize_or_zero();
    let pad_to_target = (target - pad.location).normalize_or_zero();
    let speed = if me_to_pad.dot(&pad_to_target) > 0.0 {
        rl::CAR_MAX_SPEED
    } else {
        rl::CAR_NORMAL_SPEED
    };
    drive_towards(game, controls, pad.location, speed);
    Progress::Running
}

fn short_shot(game: &Game, controls: &mut PlayerInput, target: Vector3<f32>) -> Progress {
    let ball = game.ball.location;
    let distance = (ball - game.me.location).norm();
    if distance < SHORT_SHOT_REACH {
        return Progress::Done;
    }

    // Aim behind the ball on the shot line, closing in as we get near.
    let ball_to_target = (target - ball).normalize_or_zero();
    let offset = cap(distance * 0.5, 0.0, LINE_UP_MAX_OFFSET);
    drive_towards(
        game,
        controls,
        ball - ball_to_target * offset,
        rl::CAR_MAX_SPEED,
    );
    Progress::Running
}

fn shot_at(game: &Game, controls: &mut PlayerInput, shot: &ShotCandidate) -> Progress {
    let time_left = shot.intercept_time - game.time;
    if time_left <= 0.0 {
        return Progress::Done;
    }

    let distance = (shot.ball_location - game.me.location).norm();
    let speed = cap(distance / time_left, 0.0, rl::CAR_MAX_SPEED);

    // Come in from behind the ball along the shot line.
    let offset = cap(distance * 0.5, 0.0, LINE_UP_MAX_OFFSET);
    drive_towards(
        game,
        controls,
        shot.ball_location - shot.shot_vector * offset,
        speed,
    );
    Progress::Running
}

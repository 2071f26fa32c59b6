use crate::{
    eeg::Event,
    mechanics::{default_pd, default_throttle},
    routines::Routine,
    shots::{ShotCandidate, Target, Targets},
    strategy::{BoostPad, Context, Game, Strategy},
};
use common::{math::cap, prelude::*, rl};
use derive_new::new;
use nalgebra::Vector3;
use nameof::name_of_type;

/// Below this much boost, go shopping for a big pad.
const LOW_BOOST: f32 = 30.0;

/// Only poke at the ball from behind if it's this close to the middle.
const SHORT_SHOT_MAX_X: f32 = 2000.0;

/// A pad has to be at least this much "on the way" to be worth a detour on
/// the way back.
const RETREAT_BOOST_MIN_ALIGNMENT: f32 = 0.7;

/// A strategy that actually uses the routine library: shoot if we can, top up
/// boost if we're low, clear if we're beaten, otherwise fall back toward our
/// own goal.
#[derive(new)]
pub struct Example2;

impl Strategy for Example2 {
    fn name(&self) -> &str {
        name_of_type!(Example2)
    }

    fn run(&mut self, ctx: &mut Context<'_>) {
        // Let whatever we committed to finish first.
        if !ctx.stack.is_empty() {
            return;
        }

        let game = ctx.game;
        let ball_closer_than_me = ball_closer_than_me(game);

        if game.kickoff_flag {
            ctx.eeg.track(Event::Kickoff);
            ctx.push(Routine::Kickoff);
            return;
        }

        let mut targets = Targets::new();
        targets.insert(
            Target::Goal,
            (game.foe_goal.left_post, game.foe_goal.right_post),
        );
        let shots = ctx.shot_finder.find_hits(game, &targets);

        if let Some(shot) = best_shot(game, shots.get(Target::Goal)) {
            ctx.eeg.track(Event::Shot);
            ctx.push(Routine::Shot(shot.clone()));
        } else if game.me.boost < LOW_BOOST {
            let best = best_boost(game, game.friend_goal.location, |pad| pad.large);
            if let Some((pad, _)) = best {
                ctx.eeg.track(Event::GetBoost);
                ctx.push(Routine::GotoBoost {
                    pad: pad.clone(),
                    target: game.friend_goal.location,
                });
            }
        } else if ball_closer_than_me && game.ball.location.x.abs() < SHORT_SHOT_MAX_X {
            // Probably offside. Not pretty, but it gets the ball moving the
            // right way.
            ctx.eeg.track(Event::ShortShot);
            ctx.push(Routine::ShortShot {
                target: game.foe_goal.location,
            });
        }

        if ctx.stack.is_empty() {
            retreat(ctx);
        }
    }
}

/// Returns `true` if the ball is nearer our goal than we are.
fn ball_closer_than_me(game: &Game) -> bool {
    let goal = game.friend_goal.location;
    let ball_dist = (game.ball.location - goal).norm();
    let me_dist = (game.me.location - goal).norm();
    ball_dist < me_dist
}

/// The average speed we'd need to make the intercept, weighted by how well the
/// shot lines up.
///
/// Returns `None` for intercepts that are already in the past, since there's
/// no sensible speed for those.
fn score_shot(game: &Game, shot: &ShotCandidate) -> Option<f32> {
    let time_left = shot.intercept_time - game.time;
    if time_left <= 0.0 {
        return None;
    }
    let distance = (shot.ball_location - game.me.location).norm();
    Some(distance / time_left * shot.ratio)
}

/// Highest score wins. On a tie, the earlier candidate wins.
///
/// Candidates whose intercept has already passed are dropped rather than
/// scored, so a list of nothing but stale shots counts as no shot at all and
/// the caller moves on to boost.
fn best_shot<'s>(game: &Game, shots: &'s [ShotCandidate]) -> Option<&'s ShotCandidate> {
    let mut best: Option<(&ShotCandidate, f32)> = None;
    for shot in shots {
        let score = match score_shot(game, shot) {
            Some(score) => score,
            None => continue,
        };
        let better = match best {
            Some((_, best_score)) => score > best_score,
            None => true,
        };
        if better {
            best = Some((shot, score));
        }
    }
    best.map(|(shot, _)| shot)
}

/// Finds the active pad that lies most directly between us and `target`.
///
/// Alignment is the dot product of the car→pad and pad→target directions, so
/// it runs from -1 (pad is behind us) to 1 (pad is right on the way).
fn best_boost<'g>(
    game: &'g Game,
    target: Vector3<f32>,
    filter: impl Fn(&BoostPad) -> bool,
) -> Option<(&'g BoostPad, f32)> {
    let mut best = None;
    let mut best_value = -1.0;
    for pad in &game.boosts {
        if !pad.active || !filter(pad) {
            continue;
        }
        let me_to_pad = (pad.location - game.me.location).normalize_or_zero();
        let pad_to_target = (target - pad.location).normalize_or_zero();
        let value = pad_to_target.dot(&me_to_pad);
        if value > best_value {
            best = Some(pad);
            best_value = value;
        }
    }
    best.map(|pad| (pad, best_value))
}

/// Where to fall back to: the nearer goalpost, pulled back out toward the car
/// so we don't hand the opponent a free ball.
fn retreat_target(game: &Game) -> Vector3<f32> {
    let goal = game.friend_goal;
    let me = game.me.location;

    // Heading for the middle of the goal risks knocking the ball in.
    let left_dist = (goal.left_post - me).norm();
    let right_dist = (goal.right_post - me).norm();
    let post = if left_dist < right_dist {
        goal.left_post
    } else {
        goal.right_post
    };

    // post-------target--------car---------------ball
    let post_to_car = (me - post).normalize_or_zero();
    let post_to_ball = game.ball.location - post;
    let final_dist = post_to_car.dot(&post_to_ball) * 0.5;
    post + post_to_car * final_dist
}

fn retreat(ctx: &mut Context<'_>) {
    let game = ctx.game;
    let target = retreat_target(game);

    // Small pads count here, but only ones we won't have to double back for.
    match best_boost(game, target, |_| true) {
        Some((pad, value))
            if value > RETREAT_BOOST_MIN_ALIGNMENT && game.me.boost < rl::BOOST_MAX =>
        {
            ctx.eeg.track(Event::RetreatBoost);
            ctx.push(Routine::GotoBoost {
                pad: pad.clone(),
                target,
            });
        }
        _ => {
            ctx.eeg.track(Event::Retreat);
            let relative_target = target - game.me.location;
            let distance = relative_target.norm();
            default_pd(game, ctx.controls, game.me.local(relative_target));
            // Full speed when far away, easing off as we arrive.
            default_throttle(game, ctx.controls, cap(distance * 2.0, 0.0, rl::CAR_MAX_SPEED));
            ctx.controls.Boost = false;
        }
    }
}

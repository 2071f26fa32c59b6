//! The seam between strategy and ball prediction.
//!
//! Strategies ask a [`ShotFinder`] for ways to hit the ball between pairs of
//! points; predicting where the ball will be is somebody else's problem.

use crate::strategy::Game;
use derive_new::new;
use nalgebra::Vector3;
use std::collections::BTreeMap;

/// Things we know how to aim at.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Target {
    /// Between the opponent's goalposts.
    Goal,
}

/// The two ends of the segment the ball should pass through.
pub type Segment = (Vector3<f32>, Vector3<f32>);

#[derive(Clone, Debug, Default)]
pub struct Targets {
    segments: BTreeMap<Target, Segment>,
}

impl Targets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, target: Target, segment: Segment) {
        self.segments.insert(target, segment);
    }

    pub fn get(&self, target: Target) -> Option<&Segment> {
        self.segments.get(&target)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ShotKind {
    Jump,
    Aerial,
}

/// A predicted chance to hit the ball toward a target.
#[derive(Clone, Debug, PartialEq)]
pub struct ShotCandidate {
    pub kind: ShotKind,
    /// Where the ball will be when we hit it.
    pub ball_location: Vector3<f32>,
    /// Game time of the hit.
    pub intercept_time: f32,
    /// Unit vector from the ball toward the target.
    pub shot_vector: Vector3<f32>,
    /// How well our approach lines up with `shot_vector`, from 0 to 1.
    pub ratio: f32,
}

/// Candidates grouped by target, in the order the finder produced them.
#[derive(Clone, Debug, Default)]
pub struct Shots {
    hits: BTreeMap<Target, Vec<ShotCandidate>>,
}

impl Shots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, target: Target, shot: ShotCandidate) {
        self.hits.entry(target).or_insert_with(Vec::new).push(shot);
    }

    /// Returns an empty slice for targets nobody found anything for.
    pub fn get(&self, target: Target) -> &[ShotCandidate] {
        self.hits.get(&target).map(Vec::as_slice).unwrap_or(&[])
    }
}

pub trait ShotFinder {
    /// Looks into the future for hits on each of `targets`. Never fails;
    /// finding nothing is an empty list.
    fn find_hits(&self, game: &Game, targets: &Targets) -> Shots;
}

/// For when there is no ball prediction to consult.
#[derive(new)]
pub struct NullShotFinder;

impl ShotFinder for NullShotFinder {
    fn find_hits(&self, _game: &Game, _targets: &Targets) -> Shots {
        Shots::new()
    }
}

/// Hands back a fixed script of candidates, filtered to the targets asked
/// for.
#[derive(new, Default)]
pub struct CannedShotFinder {
    shots: Vec<(Target, ShotCandidate)>,
}

impl CannedShotFinder {
    pub fn with(mut self, target: Target, shot: ShotCandidate) -> Self {
        self.shots.push((target, shot));
        self
    }
}

impl ShotFinder for CannedShotFinder {
    fn find_hits(&self, _game: &Game, targets: &Targets) -> Shots {
        let mut result = Shots::new();
        for (target, shot) in &self.shots {
            if targets.get(*target).is_some() {
                result.push(*target, shot.clone());
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        integration_tests::scenario::TestScenario,
        shots::{CannedShotFinder, NullShotFinder, ShotCandidate, ShotFinder, ShotKind, Target, Targets},
    };
    use nalgebra::Vector3;

    fn candidate(intercept_time: f32) -> ShotCandidate {
        ShotCandidate {
            kind: ShotKind::Jump,
            ball_location: Vector3::new(0.0, 1000.0, 93.0),
            intercept_time,
            shot_vector: Vector3::y(),
            ratio: 0.5,
        }
    }

    #[test]
    fn missing_target_is_empty() {
        let game = TestScenario::default().game();
        let shots = NullShotFinder::new().find_hits(&game, &Targets::new());
        assert!(shots.get(Target::Goal).is_empty());
    }

    #[test]
    fn canned_shots_keep_their_order() {
        let game = TestScenario::default().game();
        let finder = CannedShotFinder::default()
            .with(Target::Goal, candidate(12.0))
            .with(Target::Goal, candidate(11.0));
        let mut targets = Targets::new();
        targets.insert(Target::Goal, (game.foe_goal.left_post, game.foe_goal.right_post));

        let shots = finder.find_hits(&game, &targets);
        let times: Vec<_> = shots.get(Target::Goal).iter().map(|s| s.intercept_time).collect();
        assert_eq!(times, vec![12.0, 11.0]);
    }

    #[test]
    fn canned_shots_skip_unrequested_targets() {
        let game = TestScenario::default().game();
        let finder = CannedShotFinder::default().with(Target::Goal, candidate(12.0));
        let shots = finder.find_hits(&game, &Targets::new());
        assert!(shots.get(Target::Goal).is_empty());
    }
}

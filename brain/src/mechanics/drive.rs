use crate::strategy::Game;
use common::{
    halfway_house::PlayerInput,
    math::{cap, sign},
    rl,
};
use nalgebra::Vector3;

/// A twitchy PD controller for a single axis. `angle` is how far off we are;
/// `rate` is how fast we're already turning to fix it.
pub fn steer_pd(angle: f32, rate: f32) -> f32 {
    let x = 35.0 * (angle + rate);
    cap(x * x * x / 10.0, -1.0, 1.0)
}

/// Points the car at `local_target` (in the car's own frame) and keeps it
/// upright.
///
/// Returns the (pitch, yaw, roll) angles still left to correct.
pub fn default_pd(game: &Game, controls: &mut PlayerInput, local_target: Vector3<f32>) -> [f32; 3] {
    let me = &game.me;
    let up = me.local(Vector3::z());
    let ang_vel = me.local(me.angular_velocity);
    let target_angles = [
        local_target.z.atan2(local_target.x),
        local_target.y.atan2(local_target.x),
        up.y.atan2(up.z),
    ];
    controls.Steer = steer_pd(target_angles[1], 0.0);
    controls.Pitch = steer_pd(target_angles[0], ang_vel.y / 4.0);
    controls.Yaw = steer_pd(target_angles[1], -ang_vel.z / 4.0);
    controls.Roll = steer_pd(target_angles[2], ang_vel.x / 2.0);
    target_angles
}

/// Works the throttle (and boost, if it would help) to approach
/// `target_speed`.
///
/// Returns the car's current forward speed.
pub fn default_throttle(game: &Game, controls: &mut PlayerInput, target_speed: f32) -> f32 {
    let car_speed = game.me.local(game.me.velocity).x;
    let t = target_speed - car_speed;
    controls.Throttle = cap(t * t * sign(t) / 1000.0, -1.0, 1.0);
    controls.Boost =
        t > 150.0 && car_speed < rl::CAR_BOOST_CUTOFF_SPEED && controls.Throttle == 1.0;
    car_speed
}

/// Steers toward a world-space `target` at `speed`. Returns the remaining
/// distance.
pub fn drive_towards(
    game: &Game,
    controls: &mut PlayerInput,
    target: Vector3<f32>,
    speed: f32,
) -> f32 {
    let relative_target = target - game.me.location;
    default_pd(game, controls, game.me.local(relative_target));
    default_throttle(game, controls, speed);
    relative_target.norm()
}

#[cfg(test)]
mod tests {
    use crate::{
        integration_tests::scenario::TestScenario,
        mechanics::{default_pd, default_throttle, steer_pd},
    };
    use common::halfway_house::PlayerInput;
    use nalgebra::Vector3;
    use std::f32::consts::PI;

    #[test]
    fn steer_pd_saturates() {
        assert_eq!(steer_pd(1.0, 0.0), 1.0);
        assert_eq!(steer_pd(-1.0, 0.0), -1.0);
        assert_eq!(steer_pd(0.0, 0.0), 0.0);
    }

    #[test]
    fn steer_pd_is_gentle_near_zero() {
        let x = steer_pd(0.01, 0.0);
        assert!(x > 0.0 && x < 0.01, "{}", x);
    }

    #[test]
    fn steer_toward_target_on_the_right() {
        let game = TestScenario {
            car_yaw: 0.0,
            ..Default::default()
        }
        .game();
        let mut controls = PlayerInput::default();
        default_pd(&game, &mut controls, Vector3::new(1000.0, 1000.0, 0.0));
        assert_eq!(controls.Steer, 1.0);
    }

    #[test]
    fn no_steer_when_dead_ahead() {
        let game = TestScenario {
            car_yaw: PI / 2.0,
            ..Default::default()
        }
        .game();
        let mut controls = PlayerInput::default();
        let angles = default_pd(&game, &mut controls, Vector3::new(1000.0, 0.0, 0.0));
        assert_eq!(angles[1], 0.0);
        assert_eq!(controls.Steer, 0.0);
    }

    #[test]
    fn throttle_from_standstill() {
        let game = TestScenario::default().game();
        let mut controls = PlayerInput::default();
        let speed = default_throttle(&game, &mut controls, 2300.0);
        assert_eq!(speed, 0.0);
        assert_eq!(controls.Throttle, 1.0);
        assert!(controls.Boost);
    }

    #[test]
    fn gentle_throttle_for_small_corrections() {
        let game = TestScenario::default().game();
        let mut controls = PlayerInput::default();
        default_throttle(&game, &mut controls, 20.0);
        assert!((controls.Throttle - 0.4).abs() < 1e-5);
        assert!(!controls.Boost);
    }

    #[test]
    fn brake_when_too_fast() {
        let game = TestScenario {
            car_yaw: 0.0,
            car_vel: Vector3::new(2000.0, 0.0, 0.0),
            ..Default::default()
        }
        .game();
        let mut controls = PlayerInput::default();
        let speed = default_throttle(&game, &mut controls, 500.0);
        assert!((speed - 2000.0).abs() < 1e-3);
        assert_eq!(controls.Throttle, -1.0);
        assert!(!controls.Boost);
    }
}

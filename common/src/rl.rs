//! Various Rocket League constants.

/// The y-coordinate we aim at for a goal. A bit short of the back wall so the
/// point sits inside the field.
pub const GOAL_Y: f32 = 5100.0;

/// The absolute value of the x-coordinate we use for the goalposts.
///
/// Slightly inside the real posts (892.755) so that aiming at a post still
/// goes in.
pub const GOALPOST_X: f32 = 850.0;

/// Roughly half the height of the crossbar.
pub const GOAL_CENTER_Z: f32 = 320.0;

/// The z location of the Octane when sitting on the ground.
pub const OCTANE_NEUTRAL_Z: f32 = 17.01;

/// The max speed a car can reach using only the throttle.
pub const CAR_NORMAL_SPEED: f32 = 1410.0;

/// The max speed a car can reach by boosting, as the framework rounds it.
pub const CAR_MAX_SPEED: f32 = 2300.0;

/// Above this forward speed there is no point in boosting any more.
pub const CAR_BOOST_CUTOFF_SPEED: f32 = 2275.0;

/// A full tank.
pub const BOOST_MAX: f32 = 100.0;

/// The standard soccar boost pad layout, in the order the framework reports
/// it: `(x, y, z, is_full_boost)`.
///
/// Source: https://github.com/RLBot/RLBot/wiki/Useful-Game-Values
pub const SOCCAR_BOOST_PADS: [(f32, f32, f32, bool); 34] = [
    (0.0, -4240.0, 70.0, false),
    (-1792.0, -4184.0, 70.0, false),
    (1792.0, -4184.0, 70.0, false),
    (-3072.0, -4096.0, 73.0, true),
    (3072.0, -4096.0, 73.0, true),
    (-940.0, -3308.0, 70.0, false),
    (940.0, -3308.0, 70.0, false),
    (0.0, -2816.0, 70.0, false),
    (-3584.0, -2484.0, 70.0, false),
    (3584.0, -2484.0, 70.0, false),
    (-1788.0, -2300.0, 70.0, false),
    (1788.0, -2300.0, 70.0, false),
    (-2048.0, -1036.0, 70.0, false),
    (0.0, -1024.0, 70.0, false),
    (2048.0, -1036.0, 70.0, false),
    (-3584.0, 0.0, 73.0, true),
    (-1024.0, 0.0, 70.0, false),
    (1024.0, 0.0, 70.0, false),
    (3584.0, 0.0, 73.0, true),
    (-2048.0, 1036.0, 70.0, false),
    (0.0, 1024.0, 70.0, false),
    (2048.0, 1036.0, 70.0, false),
    (-1788.0, 2300.0, 70.0, false),
    (1788.0, 2300.0, 70.0, false),
    (-3584.0, 2484.0, 70.0, false),
    (3584.0, 2484.0, 70.0, false),
    (0.0, 2816.0, 70.0, false),
    (-940.0, 3310.0, 70.0, false),
    (940.0, 3308.0, 70.0, false),
    (-3072.0, 4096.0, 73.0, true),
    (3072.0, 4096.0, 73.0, true),
    (-1792.0, 4184.0, 70.0, false),
    (1792.0, 4184.0, 70.0, false),
    (0.0, 4240.0, 70.0, false),
];

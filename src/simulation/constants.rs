//! Fixed world, physics and schedule constants.
//!
//! Simulation units are meters and seconds. Pixel values only exist to derive the
//! world size and are otherwise the presentation layer's concern.

/// Window width in pixels.
pub const WINDOW_WIDTH: f32 = 720.0;
/// Window height in pixels.
pub const WINDOW_HEIGHT: f32 = 720.0;
/// Pixels per meter.
pub const UNIT: f32 = 100.0;

/// World width in meters.
pub const WORLD_WIDTH: f32 = WINDOW_WIDTH / UNIT;
/// World height in meters.
pub const WORLD_HEIGHT: f32 = WINDOW_HEIGHT / UNIT;

/// Simulation ticks per second.
pub const FPS: u32 = 60;
/// Fixed timestep in seconds.
pub const HZ: f32 = 1.0 / FPS as f32;
/// Gravitational acceleration (m/s^2), positive y points down.
pub const GRAVITY: f32 = 9.81;
/// Fraction of velocity removed every tick, independent of `dt`.
pub const AIR_FRICTION: f32 = 0.008;
/// Seconds between two shots of a generation.
pub const SHOT_DURATION: f32 = 7.0;

/// Whole ticks in one shot window (`FPS * SHOT_DURATION`, floored).
pub const SHOT_TICKS: u32 = (FPS as f32 * SHOT_DURATION) as u32;
/// Number of `Generation::update` calls from construction to completion.
///
/// The shot timer must *exceed* [`SHOT_TICKS`], so each window lasts one extra tick.
pub const GENERATION_TICKS: u32 = GENE_COUNT as u32 * (SHOT_TICKS + 1);

/// Number of shots (genes) per ball.
pub const GENE_COUNT: usize = 3;
/// Inclusive range of launch directions in degrees.
pub const DIRECTION_RANGE: std::ops::RangeInclusive<u16> = 0..=359;
/// Inclusive range of launch strengths in newtons.
pub const STRENGTH_RANGE: std::ops::RangeInclusive<u16> = 65..=2300;
/// Probability that a gene slot is inherited from the previous winner.
pub const INHERIT_CHANCE: f32 = 0.75;

/// NBA ball mass in kg.
pub const BALL_MASS: f32 = 0.625;
/// Ball radius in meters (12.1cm scaled by 4 so it reads on screen).
pub const BALL_RADIUS: f32 = 0.121 * 4.0;
/// Restitution coefficient for wall and rim bounces.
pub const BALL_ELASTICITY: f32 = 0.8;

/// Where every ball starts, in meters.
pub const LAUNCH_POSITION: (f32, f32) = (0.5, 6.5);
/// The point fitness is measured against.
pub const TARGET_POSITION: (f32, f32) = (5.85, 2.6);
/// Distance at and beyond which fitness is zero.
pub const FITNESS_CUTOFF: f32 = 7.0;

/// Height of the rim obstacle.
pub const RIM_Y: f32 = 3.2;
/// Leftmost x of the rim obstacle; its center follows the ball past this point.
pub const RIM_MIN_X: f32 = 5.3;
/// Radius of the rim obstacle, added to the ball radius for collision.
pub const RIM_RADIUS: f32 = 0.3;

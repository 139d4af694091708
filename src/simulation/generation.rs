//! A population of balls firing their shots in lockstep.

use rand::Rng;
use tracing::debug;

use super::basketball::Basketball;
use super::constants::{FPS, GENE_COUNT, LAUNCH_POSITION, SHOT_DURATION};
use super::geometric_utils::vec2;

/// Shot timing shared by every ball of a generation.
///
/// Each ball also tracks its own gene index; this schedule is the source of truth
/// and the balls' indices must always agree with `shots_fired`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShotSchedule {
    timer: u32,
    shots_fired: usize,
}

impl ShotSchedule {
    /// Counts one tick. Returns `true` and restarts the timer when the current shot
    /// window has run out.
    fn tick(&mut self) -> bool {
        self.timer += 1;
        let expired = self.timer as f32 > FPS as f32 * SHOT_DURATION;
        if expired {
            self.timer = 0;
        }
        expired
    }

    fn record_shot(&mut self) {
        if self.shots_fired < GENE_COUNT {
            self.shots_fired += 1;
        }
    }

    /// Ticks since the last shot window started.
    pub fn timer(&self) -> u32 {
        self.timer
    }

    /// Shots fired so far.
    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    /// `true` once every gene has been fired.
    pub fn all_fired(&self) -> bool {
        self.shots_fired == GENE_COUNT
    }
}

/// A fixed-size population of balls sharing one [`ShotSchedule`].
#[derive(Debug, Clone)]
pub struct Generation {
    balls: Vec<Basketball>,
    schedule: ShotSchedule,
}

impl Generation {
    /// Creates `population_size` balls at the launch position with random genes
    /// and fires the first shot for all of them.
    ///
    /// # Panics
    ///
    /// Panics if `population_size` is zero.
    pub fn new<R: Rng + ?Sized>(population_size: usize, rng: &mut R) -> Self {
        assert!(population_size > 0, "a generation needs at least one ball");

        let mut balls = Vec::with_capacity(population_size);
        for _ in 0..population_size {
            let ball = Basketball::new_random(vec2(LAUNCH_POSITION.0, LAUNCH_POSITION.1), rng);
            balls.push(ball);
        }

        let mut generation = Self {
            balls,
            schedule: ShotSchedule::default(),
        };
        generation.fire();
        generation
    }

    fn fire(&mut self) {
        for ball in &mut self.balls {
            ball.apply_current_gene();
        }
        self.schedule.record_shot();
        debug!(shot = self.schedule.shots_fired, "shot fired");
        self.assert_lockstep();
    }

    fn assert_lockstep(&self) {
        debug_assert!(
            self.balls
                .iter()
                .all(|b| b.gene_index() == self.schedule.shots_fired),
            "ball gene index diverged from the shot schedule"
        );
    }

    /// Highest fitness in the population.
    pub fn highest_fitness(&self) -> f32 {
        self.balls
            .iter()
            .map(Basketball::fitness)
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// The ball with the highest fitness; the first one wins ties.
    pub fn winner(&self) -> &Basketball {
        let mut best = &self.balls[0];
        let mut best_fitness = best.fitness();
        for ball in &self.balls[1..] {
            let fitness = ball.fitness();
            if fitness > best_fitness {
                best = ball;
                best_fitness = fitness;
            }
        }
        best
    }

    /// Advances the shot schedule and every ball by one tick.
    ///
    /// Returns `true` when the shot window after the last shot runs out; no physics
    /// runs on that call.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.schedule.tick() {
            if self.schedule.all_fired() {
                return true;
            }
            self.fire();
        }

        for ball in &mut self.balls {
            ball.update(dt);
        }

        false
    }

    /// All balls, in construction order.
    pub fn balls(&self) -> &[Basketball] {
        &self.balls
    }

    pub(crate) fn balls_mut(&mut self) -> &mut [Basketball] {
        &mut self.balls
    }

    /// Number of balls.
    pub fn len(&self) -> usize {
        self.balls.len()
    }

    /// Always `false`; a generation holds at least one ball.
    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    /// The shared shot schedule.
    pub fn schedule(&self) -> &ShotSchedule {
        &self.schedule
    }
}

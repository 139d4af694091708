//! The simulated basketball: physical state plus the launch genes that drive it.
//!
//! Each tick integrates gravity and any pending launch force, resolves bounces
//! against the world walls and the rim, applies air damping, and moves the ball.

use ndarray::Array1;
use rand::Rng;

use super::constants::{
    AIR_FRICTION, BALL_ELASTICITY, BALL_MASS, BALL_RADIUS, DIRECTION_RANGE, FITNESS_CUTOFF,
    GENE_COUNT, GRAVITY, RIM_MIN_X, RIM_RADIUS, RIM_Y, STRENGTH_RANGE, TARGET_POSITION,
    WORLD_HEIGHT, WORLD_WIDTH,
};
use super::gene::{self, Gene, Genome};
use super::geometric_utils::{distance, normalize, reflect, unit_vector, vec2};
use super::locatable::Locatable;

/// A bouncy ball evolving towards the hoop.
///
/// Mass, radius and elasticity are fixed at construction. The force is cleared at
/// the end of every [`Basketball::update`], so a launch acts for exactly one tick.
#[derive(Debug, Clone)]
pub struct Basketball {
    /// Position in meters.
    pub pos: Array1<f32>,
    /// Velocity in m/s.
    pub velocity: Array1<f32>,
    force: Array1<f32>,
    mass: f32,
    inv_mass: f32,
    radius: f32,
    elasticity: f32,
    genes: Genome,
    gene_index: usize,
}

impl Basketball {
    /// Creates a ball at rest at `pos` with the given genes.
    ///
    /// No gene has been applied yet.
    pub fn new(pos: Array1<f32>, genes: Genome) -> Self {
        assert_eq!(pos.len(), 2, "position must be 2D");
        Self {
            pos,
            velocity: vec2(0.0, 0.0),
            force: vec2(0.0, 0.0),
            mass: BALL_MASS,
            inv_mass: 1.0 / BALL_MASS,
            radius: BALL_RADIUS,
            elasticity: BALL_ELASTICITY,
            genes,
            gene_index: 0,
        }
    }

    /// Creates a ball at rest at `pos` with random genes.
    pub fn new_random<R: Rng + ?Sized>(pos: Array1<f32>, rng: &mut R) -> Self {
        let blank = Gene {
            direction: *DIRECTION_RANGE.start(),
            strength: *STRENGTH_RANGE.start(),
        };
        let mut ball = Self::new(pos, [blank; GENE_COUNT]);
        ball.create_genes(rng);
        ball
    }

    /// Replaces all genes with fresh random ones and rewinds to the first shot.
    pub fn create_genes<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.genes = gene::random_genome(rng);
        self.gene_index = 0;
    }

    /// Loads the force of the next gene and advances to the one after it.
    ///
    /// Does nothing once every gene has been fired.
    pub fn apply_current_gene(&mut self) {
        if self.gene_index == GENE_COUNT {
            return;
        }
        assert!(self.gene_index < GENE_COUNT, "gene index out of range");

        let Gene {
            direction,
            strength,
        } = self.genes[self.gene_index];
        self.force = unit_vector(direction) * f32::from(strength);
        self.gene_index += 1;
    }

    /// Proximity to the target, 1 on the target and 0 at or beyond the cutoff.
    pub fn fitness(&self) -> f32 {
        let target = vec2(TARGET_POSITION.0, TARGET_POSITION.1);
        let d = distance(&self.pos, &target).min(FITNESS_CUTOFF);
        (FITNESS_CUTOFF - d) / FITNESS_CUTOFF
    }

    /// Advances the ball by one physics step.
    ///
    /// Collisions only correct the velocity, using the position predicted from the
    /// velocity before any correction. The ball may overlap a wall for a tick.
    /// Damping is applied once per call regardless of `dt`.
    ///
    /// # Panics
    ///
    /// Panics if the rim check fires while the ball's center sits exactly on the
    /// rim (`x >= RIM_MIN_X` and `y == RIM_Y`), since the bounce normal is then
    /// undefined.
    pub fn update(&mut self, dt: f32) {
        let acceleration = &self.force * self.inv_mass + vec2(0.0, GRAVITY);
        self.velocity += &(acceleration * dt);

        let future_step = &self.velocity * dt;
        let next_x = self.pos[0] + future_step[0];
        let next_y = self.pos[1] + future_step[1];

        if next_x - self.radius < 0.0 || next_x + self.radius > WORLD_WIDTH {
            self.velocity[0] *= -self.elasticity;
        }

        if next_y - self.radius < 0.0 || next_y + self.radius > WORLD_HEIGHT {
            self.velocity[1] *= -self.elasticity;
        }

        // rim sits at the hoop edge and slides along under the ball past it
        let rim = vec2(self.pos[0].max(RIM_MIN_X), RIM_Y);
        let predicted = &self.pos + &future_step;
        if distance(&rim, &predicted) <= self.radius + RIM_RADIUS {
            let normal = normalize(&(&rim - &self.pos));
            self.velocity = reflect(&self.velocity, &normal) * self.elasticity;
        }

        self.velocity *= 1.0 - AIR_FRICTION;

        self.pos += &(&self.velocity * dt);

        self.force.fill(0.0);
    }

    /// The ball's genes in shot order.
    pub fn genes(&self) -> &Genome {
        &self.genes
    }

    /// Overwrites the genes without touching the shot index or pending force.
    pub fn set_genes(&mut self, genes: Genome) {
        self.genes = genes;
    }

    /// Index of the next gene to fire; equals [`GENE_COUNT`] once all shots are spent.
    pub fn gene_index(&self) -> usize {
        self.gene_index
    }

    /// Force that will act during the next update.
    pub fn force(&self) -> &Array1<f32> {
        &self.force
    }

    /// Mass in kg.
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Radius in meters.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Restitution coefficient.
    pub fn elasticity(&self) -> f32 {
        self.elasticity
    }
}

impl Locatable for Basketball {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn update(&mut self, dt: f32) {
        Basketball::update(self, dt);
    }
}

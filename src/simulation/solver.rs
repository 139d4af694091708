//! Generational loop: runs a generation to completion and breeds the next one
//! from its winner.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use super::gene::{self, Genome};
use super::generation::Generation;
use super::history::{FitnessHistory, GenerationSummary};
use super::params::Params;

/// Owns the current generation and the random source used to breed new ones.
#[derive(Debug, Clone)]
pub struct Solver<R: Rng = StdRng> {
    population_size: usize,
    generation: Generation,
    generation_count: u32,
    mutation_chance: f32,
    history: FitnessHistory,
    rng: R,
}

impl Solver<StdRng> {
    /// Builds a solver from validated parameters, seeding from `params.seed` when
    /// present and from the OS otherwise.
    pub fn from_params(params: &Params) -> Self {
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Solver::new(params.population_size, rng).with_mutation_chance(params.mutation_chance)
    }
}

impl<R: Rng> Solver<R> {
    /// Creates a solver with a fresh random first generation and mutation disabled.
    ///
    /// # Panics
    ///
    /// Panics if `population_size` is zero.
    pub fn new(population_size: usize, mut rng: R) -> Self {
        let generation = Generation::new(population_size, &mut rng);
        Self {
            population_size,
            generation,
            generation_count: 0,
            mutation_chance: 0.0,
            history: FitnessHistory::default(),
            rng,
        }
    }

    /// Sets the mutation chance, builder style.
    #[must_use]
    pub fn with_mutation_chance(mut self, mutation_chance: f32) -> Self {
        self.set_mutation_chance(mutation_chance);
        self
    }

    /// Sets the chance that an inherited direction or strength is redrawn.
    ///
    /// # Panics
    ///
    /// Panics if `mutation_chance` is not in `[0, 1]`.
    pub fn set_mutation_chance(&mut self, mutation_chance: f32) {
        assert!(
            (0.0..=1.0).contains(&mutation_chance),
            "mutation chance must be a probability"
        );
        self.mutation_chance = mutation_chance;
    }

    /// Advances the current generation by one tick.
    ///
    /// When the generation finishes, logs its best fitness, records it in the
    /// history, breeds the next generation and returns the finished one's summary.
    pub fn update(&mut self, dt: f32) -> Option<GenerationSummary> {
        if !self.generation.update(dt) {
            return None;
        }

        let highest_fitness = self.generation.highest_fitness();
        info!(
            generation = self.generation_count,
            highest_fitness,
            "Generation {} highest fitness: {:.3}",
            self.generation_count,
            highest_fitness
        );

        let summary = GenerationSummary {
            generation: self.generation_count,
            highest_fitness,
            winner_genes: *self.generation.winner().genes(),
        };
        self.history.record(summary.clone());

        self.advance();
        Some(summary)
    }

    /// Replaces the current generation with one bred from its winner.
    ///
    /// The new generation is built as usual, so its first shot is already loaded
    /// from a random gene; only the genes it fires afterwards are inherited.
    pub fn advance(&mut self) {
        let winner: Genome = *self.generation.winner().genes();

        let mut next = Generation::new(self.population_size, &mut self.rng);
        self.generation_count += 1;

        for ball in next.balls_mut() {
            let genes = gene::inherit_genome(&winner, self.mutation_chance, &mut self.rng);
            ball.set_genes(genes);
        }

        self.generation = next;
    }

    /// The generation currently in flight.
    pub fn generation(&self) -> &Generation {
        &self.generation
    }

    /// Number of completed generations.
    pub fn generation_count(&self) -> u32 {
        self.generation_count
    }

    /// Balls per generation.
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Current mutation chance.
    pub fn mutation_chance(&self) -> f32 {
        self.mutation_chance
    }

    /// Outcomes of recently completed generations.
    pub fn history(&self) -> &FitnessHistory {
        &self.history
    }
}

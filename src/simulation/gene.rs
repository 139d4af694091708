//! Launch genes and the inheritance rule used between generations.
//!
//! A ball carries [`GENE_COUNT`] genes, one per shot. Each gene is a launch
//! direction in whole degrees and a launch strength in whole newtons.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::constants::{DIRECTION_RANGE, GENE_COUNT, INHERIT_CHANCE, STRENGTH_RANGE};

/// One launch impulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gene {
    /// Degrees counter-clockwise from the positive x-axis, in `[0, 359]`.
    pub direction: u16,
    /// Force magnitude, in `[65, 2300]`.
    pub strength: u16,
}

/// The full set of shots for one ball.
pub type Genome = [Gene; GENE_COUNT];

impl Gene {
    /// Draws a gene with independent uniform direction and strength.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            direction: random_direction(rng),
            strength: random_strength(rng),
        }
    }
}

/// Draws a full genome of independent random genes.
pub fn random_genome<R: Rng + ?Sized>(rng: &mut R) -> Genome {
    std::array::from_fn(|_| Gene::random(rng))
}

fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> u16 {
    rng.random_range(DIRECTION_RANGE)
}

fn random_strength<R: Rng + ?Sized>(rng: &mut R) -> u16 {
    rng.random_range(STRENGTH_RANGE)
}

/// Derives one gene slot from the winner's gene in the same slot.
///
/// With probability [`INHERIT_CHANCE`] the slot is inherited, and then direction and
/// strength are each independently redrawn with probability `mutation_chance`.
/// Otherwise both halves are drawn fresh, ignoring the winner.
///
/// # Arguments
///
/// * `winner` - The winner's gene for this slot
/// * `mutation_chance` - Per-half redraw probability for inherited genes
/// * `rng` - Random source
pub fn inherit<R: Rng + ?Sized>(winner: &Gene, mutation_chance: f32, rng: &mut R) -> Gene {
    if rng.random::<f32>() < INHERIT_CHANCE {
        let direction = if rng.random::<f32>() < mutation_chance {
            random_direction(rng)
        } else {
            winner.direction
        };

        let strength = if rng.random::<f32>() < mutation_chance {
            random_strength(rng)
        } else {
            winner.strength
        };

        Gene {
            direction,
            strength,
        }
    } else {
        Gene::random(rng)
    }
}

/// Applies [`inherit`] to every slot of the winner's genome, in slot order.
pub fn inherit_genome<R: Rng + ?Sized>(
    winner: &Genome,
    mutation_chance: f32,
    rng: &mut R,
) -> Genome {
    let mut genes = *winner;
    for gene in &mut genes {
        *gene = inherit(gene, mutation_chance, rng);
    }
    genes
}

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::gene::Genome;

/// Outcome of one completed generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Index of the generation that just finished.
    pub generation: u32,
    /// Best fitness reached by any ball.
    pub highest_fitness: f32,
    /// Genes of the ball the next generation inherits from.
    pub winner_genes: Genome,
}

/// Bounded record of recent generation outcomes, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessHistory {
    summaries: VecDeque<GenerationSummary>,
    max_history: usize,
}

impl Default for FitnessHistory {
    fn default() -> Self {
        Self::new(500)
    }
}

impl FitnessHistory {
    /// Creates an empty history keeping at most `max_history` entries.
    pub fn new(max_history: usize) -> Self {
        Self {
            summaries: VecDeque::with_capacity(max_history),
            max_history,
        }
    }

    /// Appends a summary, dropping the oldest when full.
    pub fn record(&mut self, summary: GenerationSummary) {
        self.summaries.push_back(summary);
        while self.summaries.len() > self.max_history {
            self.summaries.pop_front();
        }
    }

    /// All retained summaries, oldest first.
    pub fn summaries(&self) -> &VecDeque<GenerationSummary> {
        &self.summaries
    }

    /// Most recent summary.
    pub fn last(&self) -> Option<&GenerationSummary> {
        self.summaries.back()
    }

    /// Retained summary with the highest fitness; the earliest wins ties.
    pub fn best(&self) -> Option<&GenerationSummary> {
        self.summaries.iter().fold(None, |best, s| match best {
            Some(b) if b.highest_fitness >= s.highest_fitness => Some(b),
            _ => Some(s),
        })
    }

    /// `(generation, highest_fitness)` pairs for plotting.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.summaries
            .iter()
            .map(|s| [f64::from(s.generation), f64::from(s.highest_fitness)])
            .collect()
    }

    /// Number of retained summaries.
    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    /// `true` before any generation has completed.
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

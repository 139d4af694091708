use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or validating [`Params`].
#[derive(Debug, Error)]
pub enum ParamsError {
    /// The parameter file could not be read or written.
    #[error("failed to access params file: {0}")]
    Io(#[from] std::io::Error),
    /// The parameter file is not valid JSON for [`Params`].
    #[error("failed to parse params: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds a value the solver cannot run with.
    #[error("invalid {field}: {reason}")]
    Invalid {
        /// Offending field name.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Evolution parameters. Physics is fixed and lives in
/// [`constants`](super::constants).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Balls per generation.
    pub population_size: usize,
    /// Chance that an inherited direction or strength is redrawn at random.
    pub mutation_chance: f32,
    /// Seed for the random source; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            population_size: 5,
            mutation_chance: 0.0,
            seed: None,
        }
    }
}

impl Params {
    /// Checks that the parameters describe a runnable solver.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.population_size == 0 {
            return Err(ParamsError::Invalid {
                field: "population_size",
                reason: "must be at least 1".to_string(),
            });
        }

        if !(0.0..=1.0).contains(&self.mutation_chance) {
            return Err(ParamsError::Invalid {
                field: "mutation_chance",
                reason: format!("{} is not a probability", self.mutation_chance),
            });
        }

        Ok(())
    }

    /// Loads and validates parameters from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }

    /// Writes the parameters as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ParamsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

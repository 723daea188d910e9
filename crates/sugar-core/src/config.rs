//! Top-level model configuration.

use crate::{CoreError, CoreResult};

/// Construction parameters for the simulation model.
///
/// Typically built in the application binary and passed to the model
/// builder, which calls [`validate`][Self::validate] before doing anything
/// else.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelConfig {
    /// Grid width in cells.  Bounds the finite, non-wrapping grid.
    pub width: u32,

    /// Grid height in cells.
    pub height: u32,

    /// Number of foragers created at tick 0.  The population never grows
    /// afterwards (there is no birth mechanism), only shrinks.
    pub initial_population: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Print a `[tick, living_count]` progress line after every step and
    /// banner lines around `run_model`.  Display side effect only.
    pub verbose: bool,
}

impl ModelConfig {
    /// Total number of grid cells — also the number of sugar patches.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Fail fast on parameters the simulation cannot meaningfully run with.
    ///
    /// The population may exceed `cell_count()`: cells hold multiple
    /// occupants and initial placement samples with replacement.
    pub fn validate(&self) -> CoreResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::Config(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.initial_population == 0 {
            return Err(CoreError::Config(
                "initial_population must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for ModelConfig {
    /// The classic constant-growback scenario: 50×50 cells, 100 foragers.
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            initial_population: 100,
            seed: 42,
            verbose: false,
        }
    }
}

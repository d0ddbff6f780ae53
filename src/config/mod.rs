// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{Overrides, RankConfig};

use std::path::Path;

use crate::error::{RankError, Result};
use crate::graph::rank::pagerank::SolverOptions;
use crate::graph::rank::transition::check_damping;

impl RankConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Layers defaults, the config file and command-line overrides, then validates.
    ///
    /// # Errors
    /// Returns error if the file is unreadable or the result is invalid.
    pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let mut config = io::load_file(path)?;
        io::apply_overrides(&mut config, overrides);
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns the first out-of-range parameter.
    pub fn validate(&self) -> Result<()> {
        check_damping(self.damping)?;
        if self.samples == 0 {
            return Err(RankError::InvalidSamples(self.samples));
        }
        if !(self.threshold > 0.0 && self.threshold.is_finite()) {
            return Err(RankError::InvalidThreshold(self.threshold));
        }
        if self.max_iterations == Some(0) {
            return Err(RankError::Config("max_iterations must be at least 1".into()));
        }
        if self.extension.trim_start_matches('.').is_empty() {
            return Err(RankError::Config("extension must not be empty".into()));
        }
        Ok(())
    }

    #[must_use]
    pub fn solver_options(&self) -> SolverOptions {
        SolverOptions {
            damping: self.damping,
            threshold: self.threshold,
            max_iterations: self.max_iterations,
        }
    }
}

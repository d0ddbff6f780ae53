// src/graph/rank/mod.rs
pub mod builder;
pub mod graph;
pub mod pagerank;
pub mod ranking;
pub mod sampling;
pub mod transition;

pub use graph::LinkGraph;
pub use pagerank::{iterate_once, iterate_pagerank, solve, Solution, SolverOptions};
pub use ranking::Ranking;
pub use sampling::sample_pagerank;
pub use transition::transition_model;

use rand::Rng;
use serde::Serialize;

use crate::config::RankConfig;
use crate::error::Result;

/// Which algorithms a run should execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    #[default]
    Both,
    Sample,
    Iterate,
}

impl Method {
    #[must_use]
    pub fn samples(self) -> bool {
        matches!(self, Self::Both | Self::Sample)
    }

    #[must_use]
    pub fn iterates(self) -> bool {
        matches!(self, Self::Both | Self::Iterate)
    }
}

/// Sampling result with the sample count it was estimated from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleEstimate {
    pub samples: usize,
    pub ranking: Ranking,
}

/// Everything a single ranking run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankReport {
    pub damping: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampling: Option<SampleEstimate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration: Option<Solution>,
    /// Max per-page gap between the two rankings when both ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divergence: Option<f64>,
}

/// Orchestrates both ranking algorithms over one graph.
pub struct RankEngine;

impl RankEngine {
    /// Runs the algorithms selected by `method` with the parameters in `config`.
    ///
    /// # Errors
    /// Returns error if the configuration is invalid or iteration hits its cap.
    pub fn run<R: Rng + ?Sized>(
        graph: &LinkGraph,
        config: &RankConfig,
        method: Method,
        rng: &mut R,
    ) -> Result<RankReport> {
        config.validate()?;

        let sampling = if method.samples() {
            let ranking = sample_pagerank(graph, config.damping, config.samples, rng)?;
            Some(SampleEstimate {
                samples: config.samples,
                ranking,
            })
        } else {
            None
        };

        let iteration = if method.iterates() {
            Some(solve(graph, &config.solver_options())?)
        } else {
            None
        };

        let divergence = match (&sampling, &iteration) {
            (Some(s), Some(i)) => Some(s.ranking.max_delta(&i.ranking)),
            _ => None,
        };

        Ok(RankReport {
            damping: config.damping,
            sampling,
            iteration,
            divergence,
        })
    }
}

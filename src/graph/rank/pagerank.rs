// src/graph/rank/pagerank.rs
//! Iterative `PageRank`: fixed-point relaxation of
//! `rank(p) = (1 - d)/N + d * sum(rank(q) / L(q))` over the pages `q` linking to `p`.
//!
//! Dead ends count as linking to every page, each with weight `rank(q)/N`.

use serde::Serialize;
use tracing::{debug, info};

use super::graph::LinkGraph;
use super::ranking::Ranking;
use super::transition::check_damping;
use crate::error::{RankError, Result};

pub const DEFAULT_THRESHOLD: f64 = 0.001;

/// Convergence policy for [`solve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    pub damping: f64,
    /// Iteration stops once no page moves by this much or more.
    pub threshold: f64,
    /// `None` loops until convergence.
    pub max_iterations: Option<usize>,
}

impl SolverOptions {
    #[must_use]
    pub fn new(damping: f64) -> Self {
        Self {
            damping,
            threshold: DEFAULT_THRESHOLD,
            max_iterations: None,
        }
    }
}

/// Converged ranking plus how it was reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    pub ranking: Ranking,
    pub iterations: usize,
    /// Max per-page change of the final iteration.
    pub delta: f64,
}

/// Ranks pages by iterating to convergence with the default threshold.
///
/// The loop is unbounded: termination relies on the recurrence converging,
/// which it does for any `0 < damping < 1`.
///
/// # Errors
/// Returns `InvalidDamping` or `EmptyCorpus` on bad input.
pub fn iterate_pagerank(graph: &LinkGraph, damping: f64) -> Result<Ranking> {
    solve(graph, &SolverOptions::new(damping)).map(|s| s.ranking)
}

/// Runs [`iterate_once`] from the uniform distribution until the max delta
/// drops below `opts.threshold`, and returns the latest mapping.
///
/// # Errors
/// Returns `InvalidDamping`, `InvalidThreshold` or `EmptyCorpus` on bad input,
/// and `NotConverged` when `opts.max_iterations` is reached first.
pub fn solve(graph: &LinkGraph, opts: &SolverOptions) -> Result<Solution> {
    check_damping(opts.damping)?;
    if !(opts.threshold > 0.0 && opts.threshold.is_finite()) {
        return Err(RankError::InvalidThreshold(opts.threshold));
    }
    if graph.is_empty() {
        return Err(RankError::EmptyCorpus {
            path: "<graph>".into(),
        });
    }

    #[allow(clippy::cast_precision_loss)]
    let mut ranks = vec![1.0 / graph.len() as f64; graph.len()];
    let mut iterations = 0usize;

    loop {
        let (next, delta) = step(graph, &ranks, opts.damping);
        iterations += 1;
        ranks = next;
        debug!(iteration = iterations, delta, "pagerank iteration");

        if delta < opts.threshold {
            info!(iterations, delta, "pagerank converged");
            return Ok(Solution {
                ranking: Ranking::from_dense(graph, &ranks),
                iterations,
                delta,
            });
        }
        if opts.max_iterations.is_some_and(|cap| iterations >= cap) {
            return Err(RankError::NotConverged { iterations, delta });
        }
    }
}

/// Computes one simultaneous update of every page from `ranks`.
///
/// Returns the new mapping and the largest absolute change of any page.
/// Pages of the graph missing from `ranks` start from 0.
///
/// # Errors
/// Returns `InvalidDamping` if `damping` is outside `(0, 1)`.
pub fn iterate_once(graph: &LinkGraph, damping: f64, ranks: &Ranking) -> Result<(Ranking, f64)> {
    check_damping(damping)?;
    let (next, delta) = step(graph, &ranks.to_dense(graph), damping);
    Ok((Ranking::from_dense(graph, &next), delta))
}

#[allow(clippy::cast_precision_loss)]
fn step(graph: &LinkGraph, ranks: &[f64], damping: f64) -> (Vec<f64>, f64) {
    let n = graph.len() as f64;

    // Dead-end mass is spread over every page, so it is the same for all targets.
    let dead_mass: f64 = (0..graph.len())
        .filter(|&q| graph.targets(q).is_empty())
        .map(|q| ranks[q] / n)
        .sum();

    let next: Vec<f64> = (0..graph.len())
        .map(|p| {
            let linked: f64 = graph
                .sources(p)
                .iter()
                .map(|&q| ranks[q] / graph.targets(q).len() as f64)
                .sum();
            (1.0 - damping) / n + damping * (linked + dead_mass)
        })
        .collect();

    let delta = next
        .iter()
        .zip(ranks)
        .map(|(new, old)| (new - old).abs())
        .fold(0.0_f64, f64::max);
    (next, delta)
}

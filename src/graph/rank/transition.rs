// src/graph/rank/transition.rs
//! One-step distribution of the damped random surfer.

use rand::distributions::WeightedIndex;

use super::graph::LinkGraph;
use super::ranking::Ranking;
use crate::error::{RankError, Result};

/// Returns the probability of moving from `page` to every page of the graph.
///
/// With probability `damping` the surfer follows one of the page's links,
/// otherwise it jumps to any page uniformly. A dead end jumps uniformly.
///
/// # Errors
/// Returns `UnknownPage` if `page` is not in the graph and `InvalidDamping`
/// if `damping` is outside `(0, 1)`.
pub fn transition_model(graph: &LinkGraph, page: &str, damping: f64) -> Result<Ranking> {
    check_damping(damping)?;
    let from = graph
        .index_of(page)
        .ok_or_else(|| RankError::UnknownPage(page.to_string()))?;
    Ok(Ranking::from_dense(graph, &row(graph, from, damping)))
}

/// Validates `0 < damping < 1`.
///
/// # Errors
/// Returns `InvalidDamping` otherwise, including for NaN.
pub fn check_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(RankError::InvalidDamping(damping))
    }
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn row(graph: &LinkGraph, from: usize, damping: f64) -> Vec<f64> {
    let n = graph.len() as f64;
    let targets = graph.targets(from);
    if targets.is_empty() {
        return vec![1.0 / n; graph.len()];
    }

    let mut probs = vec![(1.0 - damping) / n; graph.len()];
    let follow = damping / targets.len() as f64;
    for &t in targets {
        probs[t] += follow;
    }
    probs
}

/// Precomputed transition rows, one weighted sampler per source page.
///
/// A row depends only on its source page, so sampling from the table is
/// equivalent to recomputing the distribution at every step.
pub(crate) struct TransitionTable {
    rows: Vec<WeightedIndex<f64>>,
}

impl TransitionTable {
    pub(crate) fn new(graph: &LinkGraph, damping: f64) -> Result<Self> {
        check_damping(damping)?;
        let rows = (0..graph.len())
            .map(|i| {
                WeightedIndex::new(row(graph, i, damping))
                    .map_err(|e| RankError::Config(format!("transition weights: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rows })
    }

    pub(crate) fn row(&self, from: usize) -> &WeightedIndex<f64> {
        &self.rows[from]
    }
}

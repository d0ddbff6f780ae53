// src/graph/rank/sampling.rs
//! Monte Carlo estimate of `PageRank` from a simulated random surfer.

use rand::distributions::Distribution;
use rand::Rng;
use tracing::info;

use super::graph::LinkGraph;
use super::ranking::Ranking;
use super::transition::TransitionTable;
use crate::error::{RankError, Result};

/// Walks the surfer chain for `samples` steps and returns visit frequencies.
///
/// The first page is drawn uniformly; each later page is drawn from the
/// transition distribution of the page before it. Visit counts partition
/// `samples`, so the result sums to one.
///
/// # Errors
/// Returns `InvalidSamples` if `samples` is 0, `InvalidDamping` if `damping`
/// is outside `(0, 1)` and `EmptyCorpus` for an empty graph.
#[allow(clippy::cast_precision_loss)]
pub fn sample_pagerank<R: Rng + ?Sized>(
    graph: &LinkGraph,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Result<Ranking> {
    if samples == 0 {
        return Err(RankError::InvalidSamples(samples));
    }
    if graph.is_empty() {
        return Err(RankError::EmptyCorpus {
            path: "<graph>".into(),
        });
    }
    let table = TransitionTable::new(graph, damping)?;
    let visits = walk(&table, graph.len(), samples, rng);

    let total = samples as f64;
    let freqs: Vec<f64> = visits.iter().map(|&v| v as f64 / total).collect();
    info!(samples, pages = graph.len(), "sampling finished");
    Ok(Ranking::from_dense(graph, &freqs))
}

fn walk<R: Rng + ?Sized>(
    table: &TransitionTable,
    pages: usize,
    samples: usize,
    rng: &mut R,
) -> Vec<usize> {
    let mut visits = vec![0usize; pages];
    let mut current = rng.gen_range(0..pages);
    visits[current] += 1;

    for _ in 1..samples {
        current = table.row(current).sample(rng);
        visits[current] += 1;
    }
    visits
}

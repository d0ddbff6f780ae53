// src/graph/rank/ranking.rs
//! Page → probability mapping produced by the ranking algorithms.

use serde::Serialize;
use std::collections::BTreeMap;

use super::graph::LinkGraph;

/// Probability per page, iterated in page-identifier order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ranking(BTreeMap<String, f64>);

impl Ranking {
    /// Every page of `graph` at probability `1/N`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn uniform(graph: &LinkGraph) -> Self {
        let share = 1.0 / graph.len() as f64;
        Self::from_dense(graph, &vec![share; graph.len()])
    }

    /// Pairs dense index-ordered values with the graph's page identifiers.
    pub(crate) fn from_dense(graph: &LinkGraph, values: &[f64]) -> Self {
        Self(
            graph
                .pages()
                .iter()
                .cloned()
                .zip(values.iter().copied())
                .collect(),
        )
    }

    /// Values in the graph's page order; pages missing from the mapping read as 0.
    pub(crate) fn to_dense(&self, graph: &LinkGraph) -> Vec<f64> {
        graph.pages().iter().map(|p| self.get(p).unwrap_or(0.0)).collect()
    }

    #[must_use]
    pub fn get(&self, page: &str) -> Option<f64> {
        self.0.get(page).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(p, r)| (p.as_str(), *r))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all probabilities.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Largest absolute per-page difference. Pages present on one side only
    /// are compared against 0.
    #[must_use]
    pub fn max_delta(&self, other: &Ranking) -> f64 {
        let one_sided = |a: &Ranking, b: &Ranking| {
            a.0.iter()
                .map(|(p, r)| (r - b.get(p).unwrap_or(0.0)).abs())
                .fold(0.0_f64, f64::max)
        };
        one_sided(self, other).max(one_sided(other, self))
    }
}

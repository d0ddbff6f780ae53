// src/graph/rank/builder.rs
//! Graph construction: link extraction, self-link removal and dangling-link filtering.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use tracing::debug;

use super::graph::LinkGraph;
use crate::error::{RankError, Result};
use crate::graph::links;

impl LinkGraph {
    /// Builds the link graph from `(page, content)` pairs.
    ///
    /// Links to pages outside the corpus are dropped silently. A repeated page
    /// identifier replaces the earlier document.
    ///
    /// # Errors
    /// Returns `EmptyCorpus` if `documents` is empty.
    pub fn build(documents: &[(String, String)]) -> Result<Self> {
        if documents.is_empty() {
            return Err(RankError::EmptyCorpus {
                path: PathBuf::from("<documents>"),
            });
        }
        let raw = extract_all_links(documents);
        Ok(restrict_to_corpus(raw))
    }

    /// Builds a graph from an explicit adjacency map, applying the same
    /// filtering as [`LinkGraph::build`].
    ///
    /// # Errors
    /// Returns `EmptyCorpus` if `adjacency` is empty.
    pub fn from_links<I, S>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<S>)>,
        S: Into<String>,
    {
        let raw: BTreeMap<String, BTreeSet<String>> = adjacency
            .into_iter()
            .map(|(page, targets)| {
                let page = page.into();
                let targets = targets
                    .into_iter()
                    .map(Into::into)
                    .filter(|t| *t != page)
                    .collect();
                (page, targets)
            })
            .collect();
        if raw.is_empty() {
            return Err(RankError::EmptyCorpus {
                path: PathBuf::from("<links>"),
            });
        }
        Ok(restrict_to_corpus(raw))
    }
}

fn extract_all_links(documents: &[(String, String)]) -> BTreeMap<String, BTreeSet<String>> {
    let mut raw = BTreeMap::new();
    for (page, content) in documents {
        let mut targets = links::extract(content);
        targets.remove(page);
        raw.insert(page.clone(), targets);
    }
    raw
}

fn restrict_to_corpus(raw: BTreeMap<String, BTreeSet<String>>) -> LinkGraph {
    let pages: Vec<String> = raw.keys().cloned().collect();
    let mut dropped = 0usize;

    let outbound = raw
        .values()
        .map(|targets| {
            let kept: BTreeSet<usize> = targets
                .iter()
                .filter_map(|t| pages.binary_search(t).ok())
                .collect();
            dropped += targets.len() - kept.len();
            kept
        })
        .collect();

    let graph = LinkGraph::from_parts(pages, outbound);
    debug!(
        pages = graph.len(),
        dead_ends = graph.dead_ends().len(),
        dropped_links = dropped,
        "built link graph"
    );
    graph
}

// src/graph/rank/graph.rs
//! The link graph structure and query interface.

use std::collections::{BTreeSet, HashMap};

/// Directed link graph over the pages of a corpus.
///
/// Pages are kept sorted by identifier and addressed internally by index.
/// Every outbound target is itself a page, and no page links to itself.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkGraph {
    pub(crate) pages: Vec<String>,
    pub(crate) index: HashMap<String, usize>,
    /// Outbound targets per page, sorted and de-duplicated.
    pub(crate) outbound: Vec<Vec<usize>>,
    /// Pages linking to each page, sorted.
    pub(crate) inbound: Vec<Vec<usize>>,
}

impl LinkGraph {
    pub(crate) fn from_parts(pages: Vec<String>, outbound: Vec<BTreeSet<usize>>) -> Self {
        let index = pages
            .iter()
            .enumerate()
            .map(|(i, p)| (p.clone(), i))
            .collect();
        let outbound: Vec<Vec<usize>> = outbound
            .into_iter()
            .map(|targets| targets.into_iter().collect())
            .collect();
        let mut inbound = vec![Vec::new(); pages.len()];
        for (src, targets) in outbound.iter().enumerate() {
            for &dst in targets {
                inbound[dst].push(src);
            }
        }
        Self {
            pages,
            index,
            outbound,
            inbound,
        }
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page identifiers in sorted order.
    #[must_use]
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    #[must_use]
    pub fn contains(&self, page: &str) -> bool {
        self.index.contains_key(page)
    }

    /// Outbound links of `page`, sorted, or `None` if the page is unknown.
    #[must_use]
    pub fn links(&self, page: &str) -> Option<Vec<&str>> {
        let i = *self.index.get(page)?;
        Some(self.outbound[i].iter().map(|&t| self.pages[t].as_str()).collect())
    }

    #[must_use]
    pub fn out_degree(&self, page: &str) -> Option<usize> {
        self.index.get(page).map(|&i| self.outbound[i].len())
    }

    /// Pages that link to `page`, sorted.
    #[must_use]
    pub fn inbound(&self, page: &str) -> Vec<&str> {
        let Some(&target) = self.index.get(page) else {
            return Vec::new();
        };
        self.sources(target)
            .iter()
            .map(|&src| self.pages[src].as_str())
            .collect()
    }

    /// Pages without outbound links.
    #[must_use]
    pub fn dead_ends(&self) -> Vec<&str> {
        self.outbound
            .iter()
            .enumerate()
            .filter(|(_, targets)| targets.is_empty())
            .map(|(i, _)| self.pages[i].as_str())
            .collect()
    }

    pub(crate) fn index_of(&self, page: &str) -> Option<usize> {
        self.index.get(page).copied()
    }

    pub(crate) fn targets(&self, i: usize) -> &[usize] {
        &self.outbound[i]
    }

    pub(crate) fn sources(&self, i: usize) -> &[usize] {
        &self.inbound[i]
    }
}

// src/reporting.rs
//! Report rendering. Text output keeps the classic layout: one header per
//! method, then every page sorted by identifier at four decimal places.

use std::fmt::Write;

use anyhow::Result;
use clap::ValueEnum;

use crate::graph::rank::{RankReport, Ranking};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A rendered report, split so callers can style headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Header(String),
    Entry(String),
    Footer(String),
}

impl Line {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Line::Header(s) | Line::Entry(s) | Line::Footer(s) => s,
        }
    }
}

#[must_use]
pub fn text_lines(report: &RankReport) -> Vec<Line> {
    let mut lines = Vec::new();
    if let Some(est) = &report.sampling {
        lines.push(Line::Header(format!(
            "PageRank Results from Sampling (n = {})",
            est.samples
        )));
        push_entries(&mut lines, &est.ranking);
    }
    if let Some(sol) = &report.iteration {
        lines.push(Line::Header("PageRank Results from Iteration".to_string()));
        push_entries(&mut lines, &sol.ranking);
    }
    if let Some(gap) = report.divergence {
        lines.push(Line::Footer(format!("Max divergence: {gap:.4}")));
    }
    lines
}

fn push_entries(lines: &mut Vec<Line>, ranking: &Ranking) {
    for (page, rank) in ranking.iter() {
        lines.push(Line::Entry(format!("  {page}: {rank:.4}")));
    }
}

/// Plain text report, newline terminated.
#[must_use]
pub fn render_text(report: &RankReport) -> String {
    text_lines(report).iter().fold(String::new(), |mut out, line| {
        let _ = writeln!(out, "{}", line.text());
        out
    })
}

/// Pretty JSON report.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render_json(report: &RankReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

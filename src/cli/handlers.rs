// src/cli/handlers.rs
use anyhow::{Context, Result};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::args::Cli;
use crate::config::RankConfig;
use crate::discovery;
use crate::exit::RankExit;
use crate::graph::rank::{LinkGraph, RankEngine, RankReport};
use crate::reporting::{self, Line, OutputFormat};

/// Loads config and corpus, runs the selected algorithms and returns the report.
///
/// # Errors
/// Returns error if configuration, corpus reading or ranking fails.
pub fn build_report(cli: &Cli) -> Result<RankReport> {
    let config = RankConfig::load(cli.config.as_deref(), cli.overrides())
        .context("Failed to load configuration")?;

    let documents = discovery::read_corpus(&cli.corpus, &config.extension)
        .with_context(|| format!("Failed to read corpus {}", cli.corpus.display()))?;
    let graph = LinkGraph::build(&documents)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok(RankEngine::run(&graph, &config, cli.method, &mut rng)?)
}

/// Handles a full ranking run and prints the report to stdout.
///
/// # Errors
/// Returns error if the report cannot be produced or rendered.
pub fn handle_rank(cli: &Cli) -> Result<RankExit> {
    let report = build_report(cli)?;
    match cli.format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => println!("{}", reporting::render_json(&report)?),
    }
    Ok(RankExit::Success)
}

fn print_text(report: &RankReport) {
    for line in reporting::text_lines(report) {
        match line {
            Line::Header(s) => println!("{}", s.bold()),
            Line::Entry(s) => println!("{s}"),
            Line::Footer(s) => println!("{}", s.dimmed()),
        }
    }
}

// tests/integration_corpus.rs
//! End-to-end runs over corpora written to temporary directories.

use pagerank_core::cli::{build_report, Cli};
use pagerank_core::config::RankConfig;
use pagerank_core::discovery;
use pagerank_core::error::RankError;
use pagerank_core::exit::RankExit;
use pagerank_core::graph::rank::{LinkGraph, Method, RankEngine};
use pagerank_core::reporting::{render_json, render_text};

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_corpus(pages: &[(&str, &str)]) -> TempDir {
    let d = tempfile::tempdir().unwrap();
    for (name, body) in pages {
        fs::write(d.path().join(name), body).unwrap();
    }
    d
}

fn small_corpus() -> TempDir {
    write_corpus(&[
        ("1.html", r#"<html><body><a href="2.html">2</a></body></html>"#),
        ("2.html", r#"<a href="1.html">1</a> <a href="3.html">3</a>"#),
        ("3.html", r#"<a href="2.html">2</a> <a href="4.html">4</a>"#),
        ("4.html", r#"<a href="2.html">2</a>"#),
        ("notes.txt", r#"<a href="1.html">ignored</a>"#),
    ])
}

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("pagerank").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_read_corpus_filters_extension() {
    let d = small_corpus();
    fs::create_dir(d.path().join("sub.html")).unwrap();
    let docs = discovery::read_corpus(d.path(), "html").unwrap();
    let names: Vec<_> = docs.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["1.html", "2.html", "3.html", "4.html"]);

    let txt = discovery::read_corpus(d.path(), ".txt").unwrap();
    assert_eq!(txt.len(), 1);
}

#[test]
fn test_empty_directory() {
    let d = tempfile::tempdir().unwrap();
    let err = discovery::read_corpus(d.path(), "html").unwrap_err();
    assert!(matches!(err, RankError::EmptyCorpus { .. }));
}

#[test]
fn test_missing_directory() {
    let err = discovery::read_corpus(Path::new("/definitely/not/here"), "html").unwrap_err();
    assert!(err.is_corpus_error());
}

#[test]
fn test_engine_both_methods_agree() {
    let d = small_corpus();
    let graph = LinkGraph::build(&discovery::read_corpus(d.path(), "html").unwrap()).unwrap();
    let config = RankConfig {
        samples: 200_000,
        ..RankConfig::new()
    };
    let report =
        RankEngine::run(&graph, &config, Method::Both, &mut StdRng::seed_from_u64(11)).unwrap();

    let sampled = &report.sampling.as_ref().unwrap().ranking;
    let iterated = &report.iteration.as_ref().unwrap().ranking;
    assert!((sampled.total() - 1.0).abs() < 1e-9);
    assert!((iterated.total() - 1.0).abs() < 1e-6);
    assert!(report.divergence.unwrap() < 0.02);
}

#[test]
fn test_engine_single_method() {
    let graph = LinkGraph::from_links([("a", vec!["b"]), ("b", vec![])]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let only_iter = RankEngine::run(&graph, &RankConfig::new(), Method::Iterate, &mut rng).unwrap();
    assert!(only_iter.sampling.is_none());
    assert!(only_iter.divergence.is_none());

    let only_sample = RankEngine::run(&graph, &RankConfig::new(), Method::Sample, &mut rng).unwrap();
    assert!(only_sample.iteration.is_none());
    assert_eq!(only_sample.sampling.unwrap().samples, 10_000);
}

#[test]
fn test_text_report_layout() {
    let d = small_corpus();
    let report = build_report(&cli(&[
        d.path().to_str().unwrap(),
        "--seed",
        "5",
        "--samples",
        "1000",
    ]))
    .unwrap();
    let text = render_text(&report);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "PageRank Results from Sampling (n = 1000)");
    assert!(lines[1].starts_with("  1.html: 0."));
    assert_eq!(lines[5], "PageRank Results from Iteration");
    assert!(lines[6].starts_with("  1.html: "));
    assert!(lines[9].starts_with("  4.html: "));
    assert!(lines[10].starts_with("Max divergence: "));
    assert_eq!(lines.len(), 11);
    // four decimal places
    assert_eq!(lines[6].rsplit(' ').next().unwrap().len(), 6);
}

#[test]
fn test_seeded_cli_runs_are_reproducible() {
    let d = small_corpus();
    let path = d.path().to_str().unwrap();
    let a = build_report(&cli(&[path, "--seed", "99"])).unwrap();
    let b = build_report(&cli(&[path, "--seed", "99"])).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_json_report() {
    let d = small_corpus();
    let report = build_report(&cli(&[
        d.path().to_str().unwrap(),
        "--method",
        "iterate",
        "--format",
        "json",
    ]))
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
    assert!(json.get("sampling").is_none());
    let ranks = &json["iteration"]["ranking"];
    assert!(ranks["2.html"].as_f64().unwrap() > ranks["4.html"].as_f64().unwrap());
}

#[test]
fn test_exit_classification() {
    let empty = tempfile::tempdir().unwrap();
    let err = build_report(&cli(&[empty.path().to_str().unwrap()])).unwrap_err();
    assert_eq!(RankExit::classify(&err), RankExit::CorpusError);

    let d = small_corpus();
    let err = build_report(&cli(&[d.path().to_str().unwrap(), "--damping", "1.5"])).unwrap_err();
    assert_eq!(RankExit::classify(&err), RankExit::InvalidInput);

    let missing = d.path().join("nope.toml");
    let err = build_report(&cli(&[
        d.path().to_str().unwrap(),
        "--config",
        missing.to_str().unwrap(),
    ]))
    .unwrap_err();
    assert_eq!(RankExit::classify(&err), RankExit::InvalidInput);

    let err = build_report(&cli(&[
        d.path().to_str().unwrap(),
        "--threshold",
        "1e-15",
        "--max-iterations",
        "2",
    ]))
    .unwrap_err();
    assert_eq!(RankExit::classify(&err), RankExit::NotConverged);
}

#[test]
fn test_corpus_argument_required() {
    assert!(Cli::try_parse_from(["pagerank"]).is_err());
    assert!(Cli::try_parse_from(["pagerank", "a", "b"]).is_err());
}

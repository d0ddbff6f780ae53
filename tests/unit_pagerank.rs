// tests/unit_pagerank.rs
//! Tests for the iterative solver.

use pagerank_core::error::RankError;
use pagerank_core::graph::rank::pagerank::DEFAULT_THRESHOLD;
use pagerank_core::graph::rank::{
    iterate_once, iterate_pagerank, solve, LinkGraph, Ranking, SolverOptions,
};

fn corpus() -> LinkGraph {
    LinkGraph::from_links([
        ("1.html", vec!["2.html"]),
        ("2.html", vec!["1.html", "3.html"]),
        ("3.html", vec!["2.html", "4.html"]),
        ("4.html", vec!["2.html"]),
        ("5.html", vec![]),
    ])
    .unwrap()
}

#[test]
fn test_cycle_converges_to_thirds() {
    let graph = LinkGraph::from_links([("A", vec!["B"]), ("B", vec!["C"]), ("C", vec!["A"])]).unwrap();
    let ranks = iterate_pagerank(&graph, 0.85).unwrap();
    for page in ["A", "B", "C"] {
        assert!((ranks.get(page).unwrap() - 1.0 / 3.0).abs() < 1e-4);
    }
}

#[test]
fn test_dead_end_pair_matches_hand_solution() {
    // rA = 0.075 + 0.425 rB, rA + rB = 1  =>  rA = 0.5 / 1.425
    let graph = LinkGraph::from_links([("A", vec!["B"]), ("B", vec![])]).unwrap();
    let ranks = iterate_pagerank(&graph, 0.85).unwrap();
    let a = 0.5 / 1.425;
    let b = 1.0 - a;
    assert!((ranks.get("A").unwrap() - a).abs() < 0.0005);
    assert!((ranks.get("B").unwrap() - b).abs() < 0.0005);
    assert!(ranks.get("A").unwrap() > 0.0);
}

#[test]
fn test_sums_to_one_every_iteration() {
    let graph = corpus();
    let mut ranks = Ranking::uniform(&graph);
    for _ in 0..25 {
        let (next, _) = iterate_once(&graph, 0.85, &ranks).unwrap();
        assert!((next.total() - 1.0).abs() < 1e-9);
        assert!(next.iter().all(|(_, r)| (0.0..=1.0).contains(&r)));
        ranks = next;
    }
}

#[test]
fn test_converged_output_is_stable() {
    let graph = corpus();
    let ranks = iterate_pagerank(&graph, 0.85).unwrap();
    let (again, delta) = iterate_once(&graph, 0.85, &ranks).unwrap();
    assert!(delta < DEFAULT_THRESHOLD);
    assert!(ranks.max_delta(&again) < DEFAULT_THRESHOLD);
}

#[test]
fn test_deterministic() {
    let graph = corpus();
    let first = iterate_pagerank(&graph, 0.85).unwrap();
    for _ in 0..5 {
        assert_eq!(iterate_pagerank(&graph, 0.85).unwrap(), first);
    }
}

#[test]
fn test_solution_reports_progress() {
    let solution = solve(&corpus(), &SolverOptions::new(0.85)).unwrap();
    assert!(solution.iterations >= 1);
    assert!(solution.delta < DEFAULT_THRESHOLD);
    assert_eq!(solution.ranking.len(), 5);
}

#[test]
fn test_tighter_threshold_takes_longer() {
    let graph = corpus();
    let loose = solve(&graph, &SolverOptions::new(0.85)).unwrap();
    let tight = solve(
        &graph,
        &SolverOptions {
            threshold: 1e-9,
            ..SolverOptions::new(0.85)
        },
    )
    .unwrap();
    assert!(tight.iterations > loose.iterations);
    assert!(loose.ranking.max_delta(&tight.ranking) < 0.01);
}

#[test]
fn test_iteration_cap() {
    let opts = SolverOptions {
        threshold: 1e-15,
        max_iterations: Some(3),
        ..SolverOptions::new(0.85)
    };
    match solve(&corpus(), &opts) {
        Err(RankError::NotConverged { iterations, delta }) => {
            assert_eq!(iterations, 3);
            assert!(delta >= 1e-15);
        }
        other => panic!("expected NotConverged, got {other:?}"),
    }
}

#[test]
fn test_isolated_page_gets_teleport_mass() {
    let graph = LinkGraph::from_links([("a", vec!["b"]), ("b", vec!["a"]), ("c", vec!["a"])]).unwrap();
    let ranks = iterate_pagerank(&graph, 0.85).unwrap();
    assert!((ranks.get("c").unwrap() - 0.05).abs() < 1e-3);
}

#[test]
fn test_invalid_damping() {
    assert!(matches!(
        iterate_pagerank(&corpus(), 1.0),
        Err(RankError::InvalidDamping(_))
    ));
}

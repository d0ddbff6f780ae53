use serde::{Deserialize, Serialize};

/// Parameters shared by both ranking algorithms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankConfig {
    #[serde(default = "default_damping")]
    pub damping: f64,
    #[serde(default = "default_samples")]
    pub samples: usize,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Safety cap for the iterative solver. Unbounded when absent.
    #[serde(default)]
    pub max_iterations: Option<usize>,
    /// Seed for the sampling RNG. Drawn from the OS when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// File extension of corpus documents, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            samples: default_samples(),
            threshold: default_threshold(),
            max_iterations: None,
            seed: None,
            extension: default_extension(),
        }
    }
}

fn default_damping() -> f64 { 0.85 }
fn default_samples() -> usize { 10_000 }
fn default_threshold() -> f64 { crate::graph::rank::pagerank::DEFAULT_THRESHOLD }
fn default_extension() -> String { "html".to_string() }

/// Command-line values that take precedence over file settings.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub damping: Option<f64>,
    pub samples: Option<usize>,
    pub threshold: Option<f64>,
    pub max_iterations: Option<usize>,
    pub seed: Option<u64>,
    pub extension: Option<String>,
}

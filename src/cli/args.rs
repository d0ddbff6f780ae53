use clap::Parser;
use std::path::PathBuf;

use crate::config::Overrides;
use crate::graph::rank::Method;
use crate::reporting::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "pagerank",
    version,
    about = "Rank interlinked HTML pages by random-surfer probability"
)]
pub struct Cli {
    /// Directory holding the corpus documents
    pub corpus: PathBuf,
    /// Probability of following a link instead of jumping to a random page
    #[arg(long, short)]
    pub damping: Option<f64>,
    /// Length of the simulated random walk
    #[arg(long, short = 'n')]
    pub samples: Option<usize>,
    /// Iteration stops once no rank changes by this much
    #[arg(long)]
    pub threshold: Option<f64>,
    /// Give up iterating after this many rounds
    #[arg(long, value_name = "N")]
    pub max_iterations: Option<usize>,
    /// Seed the random walk for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
    /// Extension of corpus documents
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,
    /// Config file (defaults to ./pagerank.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Method::Both)]
    pub method: Method,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            damping: self.damping,
            samples: self.samples,
            threshold: self.threshold,
            max_iterations: self.max_iterations,
            seed: self.seed,
            extension: self.extension.clone(),
        }
    }
}

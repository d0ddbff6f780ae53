// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("Corpus contains no pages: {}", path.display())]
    EmptyCorpus { path: PathBuf },

    #[error("I/O error (path: {})", path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Cannot read config file {}", path.display())]
    ConfigIo {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Directory walk failed: {0}")]
    Walk(String),

    #[error("Page not in corpus: {0}")]
    UnknownPage(String),

    #[error("Damping factor must lie strictly between 0 and 1, got {0}")]
    InvalidDamping(f64),

    #[error("Sample count must be at least 1, got {0}")]
    InvalidSamples(usize),

    #[error("Convergence threshold must be positive and finite, got {0}")]
    InvalidThreshold(f64),

    #[error("Iteration did not converge after {iterations} iterations (last delta {delta:.6})")]
    NotConverged { iterations: usize, delta: f64 },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RankError>;

// Allow `?` on std::io::Error by converting to RankError::Io with unknown path.
impl From<std::io::Error> for RankError {
    fn from(source: std::io::Error) -> Self {
        RankError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<walkdir::Error> for RankError {
    fn from(e: walkdir::Error) -> Self {
        let path = e.path().map(PathBuf::from);
        match (e.into_io_error(), path) {
            (Some(source), Some(path)) => RankError::Io { source, path },
            (Some(source), None) => RankError::from(source),
            (None, _) => RankError::Walk("filesystem loop detected".to_string()),
        }
    }
}

impl From<toml::de::Error> for RankError {
    fn from(e: toml::de::Error) -> Self {
        RankError::Config(e.to_string())
    }
}

impl RankError {
    /// True for failures caused by the corpus itself rather than the invocation.
    #[must_use]
    pub fn is_corpus_error(&self) -> bool {
        matches!(
            self,
            RankError::EmptyCorpus { .. } | RankError::Io { .. } | RankError::Walk(_)
        )
    }

    /// True for parameter or configuration mistakes.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            RankError::InvalidDamping(_)
                | RankError::InvalidSamples(_)
                | RankError::InvalidThreshold(_)
                | RankError::Config(_)
                | RankError::ConfigIo { .. }
                | RankError::UnknownPage(_)
        )
    }
}
